//! Errors surfaced by the numeric tower.
//!
//! Nothing in the tower recovers from an error: every failure is handed back to
//! the immediate caller and the operands are left untouched.

use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq)]
pub enum NumberError {
    /// The operation received an operand of a variant it doesn't accept.
    InvalidArgument(String),
    /// [Arithmetic error](ArithmeticError).
    Arithmetic(ArithmeticError),
    /// Malformed input given to a parsing constructor.
    Parse(ParseError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// Division of anything by an exact finite zero.
    DivisionByZero,
    /// Casting NaN or an infinity into a machine number.
    NonNumericCast,
    /// Asking for the sign of NaN.
    UndefinedSign,
    /// The named operation only works on finite values.
    NonFinite(&'static str),
    /// The value doesn't fit the requested machine type.
    Overflow,
    /// [`RoundingMode::Unnecessary`](crate::algebra::RoundingMode) found an inexact value.
    RoundingNecessary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    InvalidFormat(String),
    /// A fixed-width rational was given a zero denominator.
    ZeroDenominator,
}

impl NumberError {
    pub(crate) fn invalid_argument(operation: &str, left: &str, right: &str) -> Self {
        crate::error!("cannot apply {operation} to {left} and {right}");
        Self::InvalidArgument(format!(
            "Member class not recognised by {operation}: {left} and {right}"
        ))
    }

    pub(crate) fn division_by_zero() -> Self {
        crate::debug!("division by an exact zero");
        Self::Arithmetic(ArithmeticError::DivisionByZero)
    }

    pub(crate) fn non_numeric_cast() -> Self {
        crate::debug!("attempted to cast a non numeric value");
        Self::Arithmetic(ArithmeticError::NonNumericCast)
    }

    pub(crate) fn invalid_format(input: &str) -> Self {
        match input.trim().is_empty() {
            true => Self::Parse(ParseError::Empty),
            _ => Self::Parse(ParseError::InvalidFormat(input.to_string())),
        }
    }
}

impl Display for NumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(message) => f.write_str(message),
            Self::Arithmetic(err) => write!(f, "{err}"),
            Self::Parse(err) => write!(f, "{err}"),
        }
    }
}

impl Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => f.write_str("Can't divide by zero"),
            Self::NonNumericCast => f.write_str("Can't cast a non numeric value"),
            Self::UndefinedSign => f.write_str("Can't get the sign of a NaN value"),
            Self::NonFinite(operation) => write!(f, "Can't {operation} a NaN or infinite value"),
            Self::Overflow => f.write_str("Value doesn't fit the target type"),
            Self::RoundingNecessary => f.write_str("Rounding necessary"),
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty number literal"),
            Self::InvalidFormat(input) => write!(f, "Invalid number format '{input}'"),
            Self::ZeroDenominator => f.write_str("Rational with a zero denominator is not defined"),
        }
    }
}

impl std::error::Error for NumberError {}

impl From<ArithmeticError> for NumberError {
    fn from(value: ArithmeticError) -> Self {
        NumberError::Arithmetic(value)
    }
}

impl From<ParseError> for NumberError {
    fn from(value: ParseError) -> Self {
        NumberError::Parse(value)
    }
}
