use crate::domain::airfare::{AirfareRates, Trip, COST_PER_BAG, COST_PER_MILE};
use crate::domain::departure_board::AlertStyle;
use crate::domain::flight::FlightStatus;
use crate::infrastructure::currency::DEFAULT_CURRENCY_SYMBOL;
use crate::domain::time_format::{DisplayError, Meridiem, TimeFormatter, SHORT_TIME_PATTERN};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;

const CONFIG_FILE: &str = "config/board";
const ENV_PREFIX: &str = "BOARD";

#[derive(Debug, Deserialize, Clone)]
pub struct BoardConfig {
    pub display: DisplaySettings,
    pub airfare: AirfareRates,
    pub specific_time: Option<SpecificTime>,
    #[serde(default)]
    pub flights: Vec<FlightSeed>,
    #[serde(default)]
    pub trips: Vec<Trip>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplaySettings {
    pub time_pattern: String,
    pub meridiem: Meridiem,
    pub info_desk_hint: bool,
    pub currency_symbol: String,
}

impl DisplaySettings {
    pub fn time_formatter(&self) -> Result<TimeFormatter, DisplayError> {
        TimeFormatter::new(self.time_pattern.clone(), self.meridiem)
    }

    pub fn alert_style(&self) -> Result<AlertStyle, DisplayError> {
        Ok(AlertStyle::new(self.time_formatter()?, self.info_desk_hint))
    }
}

/// A time of day to build and print on its own
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SpecificTime {
    pub hour: u32,
    pub minute: u32,
}

/// A flight as written in the board configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FlightSeed {
    pub destination: String,
    pub airline: String,
    pub flight_number: String,
    /// "now" or a 24-hour "HH:MM" time for today
    pub departure: Option<String>,
    pub terminal: Option<String>,
    pub status: FlightStatus,
}

/// Load `config/board.*` (optional) with `BOARD__` environment overrides
pub fn load_board_config() -> anyhow::Result<BoardConfig> {
    let settings = with_defaults(Config::builder())?
        .add_source(File::with_name(CONFIG_FILE).required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    let board_config: BoardConfig = settings.try_deserialize()?;
    tracing::debug!(
        "Loaded board config with {} flights and {} trips",
        board_config.flights.len(),
        board_config.trips.len()
    );
    Ok(board_config)
}

/// Parse a TOML document on top of the built-in defaults
#[cfg(test)]
pub fn parse_board_config(toml: &str) -> anyhow::Result<BoardConfig> {
    let settings = with_defaults(Config::builder())?
        .add_source(File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    Ok(settings.try_deserialize()?)
}

fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> anyhow::Result<ConfigBuilder<DefaultState>> {
    Ok(builder
        .set_default("display.time_pattern", SHORT_TIME_PATTERN)?
        .set_default("display.meridiem", "AM")?
        .set_default("display.info_desk_hint", false)?
        .set_default("display.currency_symbol", DEFAULT_CURRENCY_SYMBOL)?
        .set_default("airfare.per_mile", COST_PER_MILE)?
        .set_default("airfare.per_bag", COST_PER_BAG)?)
}
