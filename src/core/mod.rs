//! Core types: moves, seats, players, RNG, configuration.

pub mod config;
pub mod moves;
pub mod player;
pub mod rng;

pub use config::{MatchConfig, EARLY_STOP_SCORE};
pub use moves::{Move, UnknownMove};
pub use player::{Player, Seat, SeatMap, COMPUTER_NAME};
pub use rng::GameRng;
