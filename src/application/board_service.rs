// Board service - Builds the departure board from configured flights
use crate::application::clock::Clock;
use crate::domain::departure_board::DepartureBoard;
use crate::domain::flight::{Airport, Flight};
use crate::domain::time_format::TimeFormatter;
use crate::infrastructure::config::FlightSeed;
use chrono::{NaiveDateTime, NaiveTime};
use std::sync::Arc;
use thiserror::Error;

/// Seed departure value meaning "the current time"
pub const DEPARTURE_NOW: &str = "now";

const SEED_TIME_PATTERN: &str = "%H:%M";

#[derive(Debug, Error, PartialEq)]
pub enum SeedError {
    #[error("flight {flight_number}: invalid departure time '{value}', expected now or HH:MM")]
    InvalidDeparture { flight_number: String, value: String },
}

#[derive(Clone)]
pub struct BoardService {
    clock: Arc<dyn Clock>,
    times: TimeFormatter,
}

impl BoardService {
    pub fn new(clock: Arc<dyn Clock>, times: TimeFormatter) -> Self {
        Self { clock, times }
    }

    /// Append every seed to a fresh board, in order
    pub fn build_board(&self, seeds: &[FlightSeed]) -> Result<DepartureBoard, SeedError> {
        let mut board = DepartureBoard::new();
        for seed in seeds {
            board.append(self.flight_from_seed(seed)?);
        }

        tracing::info!("Departure board ready with {} flights", board.len());
        Ok(board)
    }

    pub fn flight_from_seed(&self, seed: &FlightSeed) -> Result<Flight, SeedError> {
        let departure_time = match seed.departure.as_deref() {
            Some(value) => Some(self.resolve_departure(&seed.flight_number, value)?),
            None => None,
        };

        Ok(Flight::new(
            Airport::new(seed.destination.clone()),
            seed.airline.clone(),
            seed.flight_number.clone(),
            departure_time,
            seed.terminal.clone(),
            seed.status,
        ))
    }

    fn resolve_departure(
        &self,
        flight_number: &str,
        value: &str,
    ) -> Result<NaiveDateTime, SeedError> {
        let value = value.trim();
        if value.eq_ignore_ascii_case(DEPARTURE_NOW) {
            return Ok(self.clock.now());
        }

        NaiveTime::parse_from_str(value, SEED_TIME_PATTERN)
            .map(|time| self.clock.today().and_time(time))
            .map_err(|_| SeedError::InvalidDeparture {
                flight_number: flight_number.to_string(),
                value: value.to_string(),
            })
    }

    /// Today at hour:minute under the configured AM/PM convention
    pub fn time_of_day(&self, hour: u32, minute: u32) -> Option<NaiveDateTime> {
        self.times.time_of_day(self.clock.today(), hour, minute)
    }

    /// Today at hour:minute rendered in the short time style, or None when the
    /// pair cannot be read as a time
    pub fn make_time_of_day(&self, hour: u32, minute: u32) -> Option<String> {
        let time = self.time_of_day(hour, minute);
        if time.is_none() {
            tracing::warn!("Could not build a time from {}:{}", hour, minute);
        }
        time.map(|time| self.times.format(&time))
    }
}
