// Application layer - Use cases over the departure board
pub mod board_service;
pub mod clock;
