// Main entry point - Configuration, board assembly and console report
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::board_service::BoardService;
use crate::application::clock::Clock;
use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::config::load_board_config;
use crate::presentation::console::{print_alerts, print_departures, print_fares};

fn main() -> anyhow::Result<()> {
    // Initialize tracing on stderr so stdout carries only the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let board_config = load_board_config()?;
    let times = board_config.display.time_formatter()?;
    let alert_style = board_config.display.alert_style()?;

    // Build the board from the configured flights
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let board_service = BoardService::new(clock, times.clone());
    let board = board_service.build_board(&board_config.flights)?;
    if board.is_empty() {
        tracing::warn!("No flights configured, the departure board is empty");
    }

    print_departures(&board, &times)?;
    print_alerts(&board, &alert_style)?;

    if let Some(specific) = board_config.specific_time {
        if let Some(time) = board_service.make_time_of_day(specific.hour, specific.minute) {
            println!("{}", time);
        }
    }

    print_fares(
        &board_config.trips,
        &board_config.airfare,
        &board_config.display.currency_symbol,
    )?;

    Ok(())
}
