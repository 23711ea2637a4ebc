// Departure board domain model
use super::flight::{Flight, FlightStatus};
use super::time_format::TimeFormatter;
use std::io::{self, Write};

/// Placeholder used by passenger alerts for a missing time or terminal
pub const TBD: &str = "TBD";

const INFO_DESK_HINT: &str = "Please see the nearest information desk for more details.";

/// How passenger alerts render times and missing terminals
#[derive(Debug, Clone, Default)]
pub struct AlertStyle {
    pub times: TimeFormatter,
    /// Append the information desk sentence when the terminal is unassigned
    pub info_desk_hint: bool,
}

impl AlertStyle {
    pub fn new(times: TimeFormatter, info_desk_hint: bool) -> Self {
        Self {
            times,
            info_desk_hint,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DepartureBoard {
    departure_flights: Vec<Flight>,
}

impl DepartureBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, flight: Flight) {
        tracing::debug!(
            "Appending flight {} to {} ({})",
            flight.flight_number,
            flight.airport.destination,
            flight.flight_status
        );
        self.departure_flights.push(flight);
    }

    pub fn flights(&self) -> &[Flight] {
        &self.departure_flights
    }

    pub fn len(&self) -> usize {
        self.departure_flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departure_flights.is_empty()
    }

    /// Alert messages for every eligible flight, in board order
    pub fn passenger_alerts(&self, style: &AlertStyle) -> Vec<String> {
        self.departure_flights
            .iter()
            .filter_map(|flight| passenger_alert(flight, style))
            .collect()
    }

    /// Write one alert line per eligible flight
    pub fn alert_passengers<W: Write>(
        &self,
        out: &mut W,
        style: &AlertStyle,
    ) -> io::Result<()> {
        for alert in self.passenger_alerts(style) {
            writeln!(out, "{}", alert)?;
        }
        Ok(())
    }
}

/// Passenger-facing message for a single flight, or None when its status
/// does not call for one
pub fn passenger_alert(flight: &Flight, style: &AlertStyle) -> Option<String> {
    let terminal = flight.terminal_number.as_deref().unwrap_or(TBD);

    let alert = match flight.flight_status {
        FlightStatus::Canceled => format!(
            "We're sorry your flight to {} was canceled, here is a $500 voucher.",
            flight.airport.destination
        ),
        FlightStatus::Scheduled => format!(
            "Your flight to {} is scheduled to depart at {} from terminal {}.",
            flight.airport.destination,
            style.times.format_or(flight.departure_time.as_ref(), TBD),
            terminal
        ),
        FlightStatus::Boarding => format!(
            "Your flight is boarding, please head to terminal: {} immediately. \
             The doors are closing soon.",
            terminal
        ),
        FlightStatus::EnRoute | FlightStatus::Landed | FlightStatus::Delayed => {
            tracing::debug!(
                "No alert for flight {} with status {}",
                flight.flight_number,
                flight.flight_status
            );
            return None;
        }
    };

    let needs_hint = style.info_desk_hint
        && flight.terminal_number.is_none()
        && flight.flight_status != FlightStatus::Canceled;

    if needs_hint {
        Some(format!("{} {}", alert, INFO_DESK_HINT))
    } else {
        Some(alert)
    }
}
