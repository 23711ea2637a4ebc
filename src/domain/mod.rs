// Domain layer - Flights, the departure board, time display and airfare pricing
pub mod airfare;
pub mod departure_board;
pub mod flight;
pub mod time_format;
