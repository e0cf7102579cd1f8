//! Terminal presentation: line I/O, prompts, and screen text.

pub mod prompts;
pub mod render;
pub mod terminal;

pub use prompts::HistoryChoice;
pub use terminal::{Console, Terminal};
