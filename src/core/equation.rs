//! Equation representation and validation
//!
//! An equation is exactly 8 ASCII characters of the form `<int><op><int>=<int>`,
//! where the right side is the exact integer value of the left side.
//! `Equation` values can only be obtained through validation, so holding one
//! is proof that the text is well-formed and arithmetically correct.

use rustc_hash::FxHashMap;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use thiserror::Error;

/// Number of characters in every equation
pub const EQUATION_LENGTH: usize = 8;

/// Every character that may appear in an equation
pub const VALID_CHARACTERS: &str = "0123456789+-*/=";

/// Binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators, in symbol order `+ - * /`
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// The operator's character
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Look up an operator by its ASCII symbol
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'+' => Some(Self::Add),
            b'-' => Some(Self::Subtract),
            b'*' => Some(Self::Multiply),
            b'/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Parse an operator from a symbol or a name
    ///
    /// Supported names: "+", "add", "addition", "-", "sub", "subtraction",
    /// "*", "x", "mul", "multiplication", "/", "div", "division"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "+" | "add" | "addition" | "plus" => Some(Self::Add),
            "-" | "sub" | "subtract" | "subtraction" | "minus" => Some(Self::Subtract),
            "*" | "x" | "mul" | "multiply" | "multiplication" | "times" => Some(Self::Multiply),
            "/" | "div" | "divide" | "division" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "addition",
            Self::Subtract => "subtraction",
            Self::Multiply => "multiplication",
            Self::Divide => "division",
        }
    }

    /// Position of this operator in [`Operator::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Evaluate `left <op> right` with exact integer arithmetic
    ///
    /// Division is only accepted when it leaves no remainder.
    ///
    /// # Errors
    /// Returns `DivisionByZero` or `NonExactDivision` for unusable divisions.
    pub const fn apply(self, left: i64, right: i64) -> Result<i64, EquationError> {
        match self {
            Self::Add => Ok(left + right),
            Self::Subtract => Ok(left - right),
            Self::Multiply => Ok(left * right),
            Self::Divide => {
                if right == 0 {
                    Err(EquationError::DivisionByZero)
                } else if left % right != 0 {
                    Err(EquationError::NonExactDivision)
                } else {
                    Ok(left / right)
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Why a string is not a well-formed equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatIssue {
    #[error("must be exactly 8 characters, got {0}")]
    Length(usize),

    #[error("input is not valid text")]
    NotText,

    #[error("invalid character '{0}' (valid characters are 0123456789+-*/=)")]
    InvalidCharacter(char),

    #[error("must contain exactly one '=', found {0}")]
    EqualsCount(usize),

    #[error("left side must be <number><operator><number>")]
    MalformedExpression,

    #[error("right side must be an integer")]
    MalformedResult,
}

/// Reasons an equation is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EquationError {
    #[error("invalid format: {0}")]
    FormatInvalid(#[from] FormatIssue),

    #[error("the left side equals {actual}, not {claimed}")]
    MathInvalid { actual: i64, claimed: i64 },

    #[error("division by zero")]
    DivisionByZero,

    #[error("division leaves a remainder")]
    NonExactDivision,
}

/// A validated 8-character equation such as `12+34=46`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Equation {
    text: String,
    chars: [u8; EQUATION_LENGTH],
    operator: Operator,
}

impl Equation {
    /// Parse and validate an equation
    ///
    /// Checks, in order: length, character set, the `=` count, the shape of
    /// the left side (`<digits><op><digits>` with a single operator), the
    /// right side (an integer), and finally the arithmetic.
    ///
    /// # Errors
    /// Returns the first `EquationError` encountered.
    ///
    /// # Examples
    /// ```
    /// use nerdle::core::{Equation, EquationError};
    ///
    /// let eq = Equation::parse("12+34=46").unwrap();
    /// assert_eq!(eq.as_str(), "12+34=46");
    ///
    /// assert!(matches!(
    ///     Equation::parse("12+34=47"),
    ///     Err(EquationError::MathInvalid { actual: 46, claimed: 47 })
    /// ));
    /// ```
    pub fn parse(text: &str) -> Result<Self, EquationError> {
        let length = text.chars().count();
        if length != EQUATION_LENGTH {
            return Err(FormatIssue::Length(length).into());
        }

        if let Some(bad) = text.chars().find(|&c| !VALID_CHARACTERS.contains(c)) {
            return Err(FormatIssue::InvalidCharacter(bad).into());
        }

        let equals = text.bytes().filter(|&b| b == b'=').count();
        if equals != 1 {
            return Err(FormatIssue::EqualsCount(equals).into());
        }

        // The character check above guarantees ASCII, so byte indexing is safe
        let (left, right) = text
            .split_once('=')
            .ok_or(FormatIssue::EqualsCount(0))?;

        let (lhs, operator, rhs) = parse_expression(left)?;
        let claimed = parse_result(right)?;
        let actual = operator.apply(lhs, rhs)?;

        if actual != claimed {
            return Err(EquationError::MathInvalid { actual, claimed });
        }

        let chars: [u8; EQUATION_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| FormatIssue::Length(text.len()))?;

        Ok(Self {
            text: text.to_string(),
            chars,
            operator,
        })
    }

    /// The equation as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The equation as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; EQUATION_LENGTH] {
        &self.chars
    }

    /// The operator on the left side
    #[inline]
    #[must_use]
    pub const fn operator(&self) -> Operator {
        self.operator
    }
}

/// Count of each character, used by the feedback engine's pool
pub(crate) fn char_counts<T: Copy + Eq + Hash>(chars: &[T]) -> FxHashMap<T, u8> {
    let mut counts = FxHashMap::default();
    for &ch in chars {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

/// Split `<digits><op><digits>` into its parts, rejecting anything else
fn parse_expression(left: &str) -> Result<(i64, Operator, i64), EquationError> {
    let mut operators = left
        .bytes()
        .enumerate()
        .filter_map(|(i, b)| Operator::from_byte(b).map(|op| (i, op)));

    let (position, operator) = operators.next().ok_or(FormatIssue::MalformedExpression)?;
    if operators.next().is_some() {
        return Err(FormatIssue::MalformedExpression.into());
    }

    let lhs = parse_digits(&left[..position]).ok_or(FormatIssue::MalformedExpression)?;
    let rhs = parse_digits(&left[position + 1..]).ok_or(FormatIssue::MalformedExpression)?;

    Ok((lhs, operator, rhs))
}

/// The right side is an integer; a leading minus is allowed there only,
/// and never on zero
fn parse_result(right: &str) -> Result<i64, EquationError> {
    let value = match right.strip_prefix('-') {
        Some(magnitude) => parse_digits(magnitude).filter(|&v| v != 0).map(|v| -v),
        None => parse_digits(right),
    };
    value.ok_or_else(|| FormatIssue::MalformedResult.into())
}

fn parse_digits(digits: &str) -> Option<i64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

impl FromStr for Equation {
    type Err = EquationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&[u8]> for Equation {
    type Error = EquationError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let text = std::str::from_utf8(bytes).map_err(|_| FormatIssue::NotText)?;
        Self::parse(text)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Check whether a string is a correct 8-character equation
///
/// Never panics; every malformed input simply returns `false`.
///
/// # Examples
/// ```
/// use nerdle::core::validate_equation;
///
/// assert!(validate_equation("12+34=46"));
/// assert!(!validate_equation("12+34=47"));
/// assert!(!validate_equation("10/3=3"));
/// assert!(!validate_equation(""));
/// ```
#[must_use]
pub fn validate_equation(text: &str) -> bool {
    Equation::parse(text).is_ok()
}

/// Check raw input bytes, rejecting anything that is not text
#[must_use]
pub fn validate_equation_bytes(bytes: &[u8]) -> bool {
    Equation::try_from(bytes).is_ok()
}
