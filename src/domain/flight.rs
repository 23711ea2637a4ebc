// Flight domain model
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum FlightStatus {
    EnRoute,
    Scheduled,
    Landed,
    Delayed,
    Canceled,
    Boarding,
}

impl FlightStatus {
    #[cfg(test)]
    pub const ALL: [FlightStatus; 6] = [
        FlightStatus::EnRoute,
        FlightStatus::Scheduled,
        FlightStatus::Landed,
        FlightStatus::Delayed,
        FlightStatus::Canceled,
        FlightStatus::Boarding,
    ];

    /// Stable display label, equal to the variant name
    pub fn label(&self) -> &'static str {
        match self {
            FlightStatus::EnRoute => "EnRoute",
            FlightStatus::Scheduled => "Scheduled",
            FlightStatus::Landed => "Landed",
            FlightStatus::Delayed => "Delayed",
            FlightStatus::Canceled => "Canceled",
            FlightStatus::Boarding => "Boarding",
        }
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Airport {
    pub destination: String,
}

impl Airport {
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    pub airport: Airport,
    pub airline: String,
    pub flight_number: String,
    /// Absent when not yet known or not applicable (e.g. canceled)
    pub departure_time: Option<NaiveDateTime>,
    /// Absent until a terminal is assigned
    pub terminal_number: Option<String>,
    pub flight_status: FlightStatus,
}

impl Flight {
    pub fn new(
        airport: Airport,
        airline: impl Into<String>,
        flight_number: impl Into<String>,
        departure_time: Option<NaiveDateTime>,
        terminal_number: Option<String>,
        flight_status: FlightStatus,
    ) -> Self {
        Self {
            airport,
            airline: airline.into(),
            flight_number: flight_number.into(),
            departure_time,
            terminal_number,
            flight_status,
        }
    }
}
