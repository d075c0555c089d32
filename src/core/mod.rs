//! Core domain types for the equation game
//!
//! Equations, their validation, and the feedback engine. Everything here is
//! pure computation with no I/O.

mod equation;
mod feedback;

pub use equation::{
    EQUATION_LENGTH, Equation, EquationError, FormatIssue, Operator, VALID_CHARACTERS,
    validate_equation, validate_equation_bytes,
};
pub use feedback::{Classification, Mark, compare};
