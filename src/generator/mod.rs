//! Random equation generation
//!
//! Picks an operator uniformly, draws operands from that operator's table,
//! and keeps the result only if it formats to a valid 8-character equation.

pub mod operands;

use crate::core::{Equation, Operator};
use rand::Rng;
use thiserror::Error;
use tracing::{debug, trace, warn};

pub use operands::{MAX_DRAWS, Operands};

/// Generation gave up
///
/// Only reachable if the operand tables stop producing 8-character
/// equations; the documented ranges never trigger it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("no valid {operator} operands after {draws} draws")]
    OperandsExhausted { operator: Operator, draws: usize },

    #[error("no 8-character equation after {attempts} attempts")]
    Exhausted { attempts: usize },
}

/// Generate a random equation with the thread-local RNG
///
/// # Errors
/// See [`generate_equation_with`].
///
/// # Examples
/// ```
/// use nerdle::core::validate_equation;
/// use nerdle::generator::generate_equation;
///
/// let eq = generate_equation().unwrap();
/// assert_eq!(eq.as_str().len(), 8);
/// assert!(validate_equation(eq.as_str()));
/// ```
pub fn generate_equation() -> Result<Equation, GenerateError> {
    generate_equation_with(&mut rand::rng())
}

/// Generate a random equation from the given RNG
///
/// The operator is chosen uniformly; if the formatted candidate is not a
/// valid 8-character equation the whole selection step is retried.
///
/// # Errors
/// Returns a `GenerateError` only if the retry caps are exhausted.
pub fn generate_equation_with<R: Rng>(rng: &mut R) -> Result<Equation, GenerateError> {
    for attempt in 1..=MAX_DRAWS {
        let operator = Operator::ALL[rng.random_range(0..Operator::ALL.len())];
        if let Some(equation) = candidate(operator, rng)? {
            debug!(%equation, attempt, "generated equation");
            return Ok(equation);
        }
    }

    warn!(attempts = MAX_DRAWS, "equation generation exhausted");
    Err(GenerateError::Exhausted {
        attempts: MAX_DRAWS,
    })
}

/// Generate a random equation using a fixed operator
///
/// # Errors
/// Returns a `GenerateError` only if the retry caps are exhausted.
pub fn generate_for<R: Rng>(operator: Operator, rng: &mut R) -> Result<Equation, GenerateError> {
    for attempt in 1..=MAX_DRAWS {
        if let Some(equation) = candidate(operator, rng)? {
            debug!(%equation, attempt, "generated equation");
            return Ok(equation);
        }
    }

    warn!(%operator, attempts = MAX_DRAWS, "equation generation exhausted");
    Err(GenerateError::Exhausted {
        attempts: MAX_DRAWS,
    })
}

fn candidate<R: Rng>(operator: Operator, rng: &mut R) -> Result<Option<Equation>, GenerateError> {
    let text = operands::draw(operator, rng)?.format(operator);
    match Equation::parse(&text) {
        Ok(equation) => Ok(Some(equation)),
        Err(err) => {
            trace!(%text, %err, "discarding candidate");
            Ok(None)
        }
    }
}
