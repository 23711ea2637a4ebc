// Console output for the departure board
use crate::domain::airfare::{AirfareRates, Trip};
use crate::domain::departure_board::{AlertStyle, DepartureBoard};
use crate::domain::flight::Flight;
use crate::domain::time_format::TimeFormatter;
use crate::infrastructure::currency::format_currency;
use std::io::{self, Write};

/// One board line. A missing time or terminal is left blank here, unlike
/// passenger alerts which say "TBD".
pub fn departure_line(flight: &Flight, times: &TimeFormatter) -> String {
    format!(
        "Destination: {} Airline: {} Flight: {} Departure Time: {} Terminal: {} Status: {}",
        flight.airport.destination,
        flight.airline,
        flight.flight_number,
        times.format_or(flight.departure_time.as_ref(), ""),
        flight.terminal_number.as_deref().unwrap_or(""),
        flight.flight_status.label()
    )
}

pub fn write_departures<W: Write>(
    out: &mut W,
    board: &DepartureBoard,
    times: &TimeFormatter,
) -> io::Result<()> {
    for flight in board.flights() {
        writeln!(out, "{}", departure_line(flight, times))?;
    }
    Ok(())
}

pub fn print_departures(board: &DepartureBoard, times: &TimeFormatter) -> io::Result<()> {
    write_departures(&mut io::stdout().lock(), board, times)
}

pub fn print_alerts(board: &DepartureBoard, style: &AlertStyle) -> io::Result<()> {
    board.alert_passengers(&mut io::stdout().lock(), style)
}

pub fn fare_line(trip: &Trip, rates: &AirfareRates, currency_symbol: &str) -> String {
    format!(
        "{} bags, {} miles, {} travelers: {}",
        trip.checked_bags,
        trip.distance,
        trip.travelers,
        format_currency(trip.airfare(rates), currency_symbol)
    )
}

pub fn write_fares<W: Write>(
    out: &mut W,
    trips: &[Trip],
    rates: &AirfareRates,
    currency_symbol: &str,
) -> io::Result<()> {
    for trip in trips {
        writeln!(out, "{}", fare_line(trip, rates, currency_symbol))?;
    }
    Ok(())
}

pub fn print_fares(trips: &[Trip], rates: &AirfareRates, currency_symbol: &str) -> io::Result<()> {
    write_fares(&mut io::stdout().lock(), trips, rates, currency_symbol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::flight::{Airport, FlightStatus};
    use chrono::{NaiveDate, NaiveDateTime};

    fn one_twenty_six() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2019, 5, 30)
            .unwrap()
            .and_hms_opt(13, 26, 0)
            .unwrap()
    }

    fn sample_board() -> DepartureBoard {
        let mut board = DepartureBoard::new();
        board.append(Flight::new(
            Airport::new("Los Angeles"),
            "Delta Air Lines",
            "KL 6966",
            None,
            Some("4".to_string()),
            FlightStatus::Canceled,
        ));
        board.append(Flight::new(
            Airport::new("Rochester"),
            "Jet Blue Airways",
            "B6 586",
            Some(one_twenty_six()),
            None,
            FlightStatus::Scheduled,
        ));
        board.append(Flight::new(
            Airport::new("Boston"),
            "KLM",
            "KL 6966",
            Some(one_twenty_six()),
            Some("4".to_string()),
            FlightStatus::Scheduled,
        ));
        board
    }

    #[test]
    fn test_departure_lines_match_board_layout() {
        let mut out = Vec::new();
        write_departures(&mut out, &sample_board(), &TimeFormatter::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Destination: Los Angeles Airline: Delta Air Lines Flight: KL 6966 \
                 Departure Time:  Terminal: 4 Status: Canceled",
                "Destination: Rochester Airline: Jet Blue Airways Flight: B6 586 \
                 Departure Time: 1:26 PM Terminal:  Status: Scheduled",
                "Destination: Boston Airline: KLM Flight: KL 6966 \
                 Departure Time: 1:26 PM Terminal: 4 Status: Scheduled",
            ]
        );
    }

    #[test]
    fn test_absent_fields_never_leak_wrappers() {
        let flight = Flight::new(
            Airport::new("Houston"),
            "American",
            "AA171",
            None,
            None,
            FlightStatus::Delayed,
        );
        let line = departure_line(&flight, &TimeFormatter::default());

        assert!(line.contains("Departure Time:  Terminal:  Status: Delayed"));
        assert!(!line.contains("None"));
        assert!(!line.contains("nil"));
        assert!(!line.contains("Some("));
        assert!(!line.contains("TBD"));
    }

    #[test]
    fn test_one_line_per_flight_in_append_order() {
        let mut board = DepartureBoard::new();
        let destinations = ["Denver", "Austin", "Denver", "Seattle", "Miami"];
        for destination in destinations {
            board.append(Flight::new(
                Airport::new(destination),
                "United",
                "UA1",
                None,
                None,
                FlightStatus::EnRoute,
            ));
        }

        let mut out = Vec::new();
        write_departures(&mut out, &board, &TimeFormatter::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), destinations.len());
        for (line, destination) in lines.iter().zip(destinations) {
            assert!(line.starts_with(&format!("Destination: {} ", destination)));
        }
    }

    #[test]
    fn test_empty_board_prints_nothing() {
        let mut out = Vec::new();
        write_departures(&mut out, &DepartureBoard::new(), &TimeFormatter::default()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_fare_lines() {
        let trips = [Trip::new(2, 2000, 3), Trip::new(4, 2537, 2)];
        let mut out = Vec::new();
        write_fares(&mut out, &trips, &AirfareRates::default(), "$").unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "2 bags, 2000 miles, 3 travelers: $750.00\n\
             4 bags, 2537 miles, 2 travelers: $707.40\n"
        );
    }
}
