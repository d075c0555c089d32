//! Game rules: the guess/feedback state machine and session statistics

pub mod state;
pub mod stats;

pub use state::{GameState, GameStatus, MAX_ATTEMPTS, Outcome, check_guess, is_valid_guess};
pub use stats::Statistics;
