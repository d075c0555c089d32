//! Per-operator operand draws
//!
//! Each operator has its own ranges chosen so the formatted equation is
//! exactly 8 characters:
//!
//! | Operator | Left      | Right          | Result          | Layout    |
//! |----------|-----------|----------------|-----------------|-----------|
//! | `+`      | 10..=89   | 10..=89        | 10..=99         | NN+NN=NN  |
//! | `-`      | 20..=99   | 10..=left-10   | 11..=99         | NN-NN=NN  |
//! | `*`      | 2..=9     | 10..=99        | 101..=999       | N*NN=NNN  |
//! | `/`      | 100..=999 | 10..=99        | 1..=9, exact    | NNN/NN=N  |
//!
//! Draws are rejection-sampled, capped at [`MAX_DRAWS`].

use super::GenerateError;
use crate::core::Operator;
use rand::Rng;
use tracing::{trace, warn};

/// Upper bound on draws per operand triple
///
/// Division, the sparsest table, accepts roughly one draw in 130, so this
/// cap is never reached with the ranges above.
pub const MAX_DRAWS: usize = 100_000;

/// Two operands and the result they produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operands {
    pub left: i64,
    pub right: i64,
    pub result: i64,
}

impl Operands {
    /// Format as `"{left}{op}{right}={result}"`
    #[must_use]
    pub fn format(self, operator: Operator) -> String {
        format!("{}{}{}={}", self.left, operator, self.right, self.result)
    }
}

/// Draw operands for the given operator
///
/// # Errors
/// Returns `GenerateError::OperandsExhausted` if no acceptable draw was found
/// within [`MAX_DRAWS`].
pub fn draw<R: Rng>(operator: Operator, rng: &mut R) -> Result<Operands, GenerateError> {
    match operator {
        Operator::Add => addition(rng),
        Operator::Subtract => subtraction(rng),
        Operator::Multiply => multiplication(rng),
        Operator::Divide => division(rng),
    }
}

/// Two-digit addends with a two-digit sum, e.g. `12+34=46`
///
/// # Errors
/// See [`draw`].
pub fn addition<R: Rng>(rng: &mut R) -> Result<Operands, GenerateError> {
    sample(Operator::Add, rng, |rng| {
        let left = rng.random_range(10..=89);
        let right = rng.random_range(10..=89);
        let result = left + right;
        (10..=99).contains(&result).then_some(Operands {
            left,
            right,
            result,
        })
    })
}

/// Two-digit operands with a positive two-digit difference, e.g. `56-23=33`
///
/// # Errors
/// See [`draw`].
pub fn subtraction<R: Rng>(rng: &mut R) -> Result<Operands, GenerateError> {
    sample(Operator::Subtract, rng, |rng| {
        let left = rng.random_range(20..=99);
        let right = rng.random_range(10..=left - 10);
        let result = left - right;
        (result > 10 && result < 100).then_some(Operands {
            left,
            right,
            result,
        })
    })
}

/// Single digit times two digits with a three-digit product, e.g. `3*34=102`
///
/// # Errors
/// See [`draw`].
pub fn multiplication<R: Rng>(rng: &mut R) -> Result<Operands, GenerateError> {
    sample(Operator::Multiply, rng, |rng| {
        let left = rng.random_range(2..=9);
        let right = rng.random_range(10..=99);
        let result = left * right;
        (result > 100 && result < 1000).then_some(Operands {
            left,
            right,
            result,
        })
    })
}

/// Three-digit dividend, two-digit divisor, exact single-digit quotient,
/// e.g. `252/36=7`
///
/// # Errors
/// See [`draw`].
pub fn division<R: Rng>(rng: &mut R) -> Result<Operands, GenerateError> {
    sample(Operator::Divide, rng, |rng| {
        let left: i64 = rng.random_range(100..=999);
        let right: i64 = rng.random_range(10..=99);
        if left % right != 0 {
            return None;
        }
        let result = left / right;
        (1..=9).contains(&result).then_some(Operands {
            left,
            right,
            result,
        })
    })
}

fn sample<R, F>(operator: Operator, rng: &mut R, mut draw: F) -> Result<Operands, GenerateError>
where
    R: Rng,
    F: FnMut(&mut R) -> Option<Operands>,
{
    for draws in 1..=MAX_DRAWS {
        if let Some(operands) = draw(rng) {
            trace!(%operator, draws, ?operands, "operands accepted");
            return Ok(operands);
        }
    }

    warn!(%operator, draws = MAX_DRAWS, "operand draws exhausted");
    Err(GenerateError::OperandsExhausted {
        operator,
        draws: MAX_DRAWS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const SAMPLES: usize = 200;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x6e65_7264_6c65)
    }

    #[test]
    fn addition_ranges() {
        let mut rng = rng();
        for _ in 0..SAMPLES {
            let Operands {
                left,
                right,
                result,
            } = addition(&mut rng).unwrap();
            assert!((10..=89).contains(&left), "left {left} out of range");
            assert!((10..=89).contains(&right), "right {right} out of range");
            assert!((10..=99).contains(&result), "result {result} out of range");
            assert_eq!(left + right, result);
        }
    }

    #[test]
    fn subtraction_ranges() {
        let mut rng = rng();
        for _ in 0..SAMPLES {
            let Operands {
                left,
                right,
                result,
            } = subtraction(&mut rng).unwrap();
            assert!((20..=99).contains(&left), "left {left} out of range");
            assert!((10..=left - 10).contains(&right), "right {right} out of range");
            assert!(result > 10 && result < 100, "result {result} out of range");
            assert_eq!(left - right, result);
        }
    }

    #[test]
    fn multiplication_ranges() {
        let mut rng = rng();
        for _ in 0..SAMPLES {
            let Operands {
                left,
                right,
                result,
            } = multiplication(&mut rng).unwrap();
            assert!((2..=9).contains(&left), "left {left} out of range");
            assert!((10..=99).contains(&right), "right {right} out of range");
            assert!(result > 100 && result < 1000, "result {result} out of range");
            assert_eq!(left * right, result);
        }
    }

    #[test]
    fn division_ranges() {
        let mut rng = rng();
        for _ in 0..SAMPLES {
            let Operands {
                left,
                right,
                result,
            } = division(&mut rng).unwrap();
            assert!((100..=999).contains(&left), "dividend {left} out of range");
            assert!((10..=99).contains(&right), "divisor {right} out of range");
            assert!((1..=9).contains(&result), "quotient {result} out of range");
            assert_eq!(left % right, 0, "{left} not divisible by {right}");
            assert_eq!(left / right, result);
        }
    }

    #[test]
    fn formatted_operands_are_eight_characters() {
        let mut rng = rng();
        for operator in Operator::ALL {
            for _ in 0..SAMPLES {
                let text = draw(operator, &mut rng).unwrap().format(operator);
                assert_eq!(text.len(), 8, "{text} is not 8 characters");
            }
        }
    }

    #[test]
    fn sample_reports_exhaustion() {
        let mut rng = rng();
        let err = sample(Operator::Add, &mut rng, |_| None).unwrap_err();
        assert_eq!(
            err,
            GenerateError::OperandsExhausted {
                operator: Operator::Add,
                draws: MAX_DRAWS
            }
        );
    }
}
