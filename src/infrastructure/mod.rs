// Infrastructure layer - Configuration, clocks and currency formatting
pub mod clock;
pub mod config;
pub mod currency;
