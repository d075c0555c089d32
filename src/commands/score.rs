//! Feedback scoring command
//!
//! Computes the feedback a guess would receive against a target, without
//! requiring either side to be a valid equation.

use crate::core::{Classification, compare, validate_equation};

/// Result of scoring a guess against a target
pub struct ScoreResult {
    pub guess: String,
    pub target: String,
    pub classification: Classification,
    pub guess_valid: bool,
    pub target_valid: bool,
}

/// Score `guess` against `target`
#[must_use]
pub fn score_guess(guess: &str, target: &str) -> ScoreResult {
    ScoreResult {
        guess: guess.to_string(),
        target: target.to_string(),
        classification: compare(guess, target),
        guess_valid: validate_equation(guess),
        target_valid: validate_equation(target),
    }
}
