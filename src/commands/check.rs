//! Equation checking command
//!
//! Validates a single equation and reports why it fails, if it does.

use crate::core::{Equation, EquationError};

/// Result of checking an equation
pub struct CheckResult {
    pub input: String,
    pub verdict: Result<Equation, EquationError>,
}

impl CheckResult {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.verdict.is_ok()
    }

    /// The parsed equation, or the reason it was rejected
    ///
    /// # Errors
    /// Returns the `EquationError` found while checking.
    pub fn ensure_valid(&self) -> Result<&Equation, EquationError> {
        self.verdict.as_ref().map_err(|err| *err)
    }
}

/// Check whether `input` is a valid equation
#[must_use]
pub fn check_equation(input: &str) -> CheckResult {
    CheckResult {
        input: input.to_string(),
        verdict: Equation::parse(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FormatIssue, Operator};

    #[test]
    fn valid_equation() {
        let result = check_equation("3*34=102");
        assert!(result.is_valid());
        assert_eq!(result.verdict.unwrap().operator(), Operator::Multiply);
    }

    #[test]
    fn ensure_valid_propagates_rejection() {
        let valid = check_equation("12+34=46");
        assert_eq!(valid.ensure_valid().map(Equation::as_str), Ok("12+34=46"));

        let invalid = check_equation("10/0=10");
        assert_eq!(
            invalid.ensure_valid().unwrap_err(),
            EquationError::DivisionByZero
        );
    }

    #[test]
    fn reports_reason() {
        let result = check_equation("12+34=47");
        assert!(!result.is_valid());
        assert_eq!(
            result.verdict.unwrap_err(),
            EquationError::MathInvalid {
                actual: 46,
                claimed: 47
            }
        );

        let result = check_equation("12+34");
        assert_eq!(
            result.verdict.unwrap_err(),
            EquationError::FormatInvalid(FormatIssue::Length(5))
        );
    }
}
