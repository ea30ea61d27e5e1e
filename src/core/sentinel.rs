//! The four states a scalar in the exact tower can be in, and the case tables
//! that decide an operation's outcome from those states alone.
//!
//! Every exact scalar keeps two flags, `neg` and `pos`, next to its magnitude:
//!
//! | neg   | pos   | value   |
//! |-------|-------|---------|
//! | false | false | finite  |
//! | true  | false | `-∞`    |
//! | false | true  | `+∞`    |
//! | true  | true  | NaN     |
//!
//! The helpers here only hand control back to the caller's closure when both
//! operands are finite, so the magnitude of a sentinel is never read.

use std::cmp::Ordering;

use crate::error::{ArithmeticError, NumberError};
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Sentinel {
    Finite,
    NegativeInfinity,
    PositiveInfinity,
    NaN,
}

impl Sentinel {
    #[inline]
    pub(crate) const fn from_flags(neg: bool, pos: bool) -> Self {
        match (neg, pos) {
            (false, false) => Self::Finite,
            (true, false) => Self::NegativeInfinity,
            (false, true) => Self::PositiveInfinity,
            (true, true) => Self::NaN,
        }
    }

    #[inline]
    pub(crate) const fn flags(self) -> (bool, bool) {
        match self {
            Self::Finite => (false, false),
            Self::NegativeInfinity => (true, false),
            Self::PositiveInfinity => (false, true),
            Self::NaN => (true, true),
        }
    }

    /// The infinity carrying `sign`, NaN for a zero sign.
    #[inline]
    pub(crate) const fn infinity(sign: i8) -> Self {
        match sign {
            0 => Self::NaN,
            s if s > 0 => Self::PositiveInfinity,
            _ => Self::NegativeInfinity,
        }
    }

    pub(crate) const fn is_finite(self) -> bool {
        matches!(self, Self::Finite)
    }

    pub(crate) const fn negate(self) -> Self {
        match self {
            Self::NegativeInfinity => Self::PositiveInfinity,
            Self::PositiveInfinity => Self::NegativeInfinity,
            other => other,
        }
    }

    /// What a non-finite state renders as.
    pub(crate) const fn literal(self) -> Option<&'static str> {
        match self {
            Self::Finite => None,
            Self::NegativeInfinity => Some("-Infinity"),
            Self::PositiveInfinity => Some("Infinity"),
            Self::NaN => Some("NaN"),
        }
    }

    /// Recognises the sentinel literals, ignoring case.
    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nan" => Some(Self::NaN),
            "infinity" | "+infinity" => Some(Self::PositiveInfinity),
            "-infinity" => Some(Self::NegativeInfinity),
            _ => None,
        }
    }

    /// Position in the total order `-∞ < finite < +∞ < NaN`.
    const fn rank(self) -> u8 {
        match self {
            Self::NegativeInfinity => 0,
            Self::Finite => 1,
            Self::PositiveInfinity => 2,
            Self::NaN => 3,
        }
    }
}

/// A scalar whose value is a [`Sentinel`] layered over a magnitude.
pub(crate) trait Extended: Sized {
    fn state(&self) -> Sentinel;

    /// Builds the non-finite value for `state`; `Finite` yields zero.
    fn from_state(state: Sentinel) -> Self;

    /// Sign of the finite magnitude.
    fn finite_signum(&self) -> i8;

    /// Sign of the value, infinities included. Meaningless for NaN.
    #[inline]
    fn sign(&self) -> i8 {
        match self.state() {
            Sentinel::PositiveInfinity => 1,
            Sentinel::NegativeInfinity => -1,
            Sentinel::NaN => 0,
            Sentinel::Finite => self.finite_signum(),
        }
    }
}

pub(crate) fn add<T: Extended>(lhs: &T, rhs: &T, finite: impl FnOnce() -> T) -> T {
    use Sentinel::*;

    match (lhs.state(), rhs.state()) {
        (NaN, _) | (_, NaN) => T::from_state(NaN),
        (NegativeInfinity, PositiveInfinity) | (PositiveInfinity, NegativeInfinity) => {
            T::from_state(NaN)
        }
        (NegativeInfinity, _) | (_, NegativeInfinity) => T::from_state(NegativeInfinity),
        (PositiveInfinity, _) | (_, PositiveInfinity) => T::from_state(PositiveInfinity),
        (Finite, Finite) => finite(),
    }
}

pub(crate) fn subtract<T: Extended>(lhs: &T, rhs: &T, finite: impl FnOnce() -> T) -> T {
    use Sentinel::*;

    match (lhs.state(), rhs.state()) {
        (NaN, _) | (_, NaN) => T::from_state(NaN),
        (NegativeInfinity, NegativeInfinity) | (PositiveInfinity, PositiveInfinity) => {
            T::from_state(NaN)
        }
        (NegativeInfinity, _) | (Finite, PositiveInfinity) => T::from_state(NegativeInfinity),
        (PositiveInfinity, _) | (Finite, NegativeInfinity) => T::from_state(PositiveInfinity),
        (Finite, Finite) => finite(),
    }
}

pub(crate) fn multiply<T: Extended>(lhs: &T, rhs: &T, finite: impl FnOnce() -> T) -> T {
    match (lhs.state(), rhs.state()) {
        (Sentinel::NaN, _) | (_, Sentinel::NaN) => T::from_state(Sentinel::NaN),
        (Sentinel::Finite, Sentinel::Finite) => finite(),
        // an infinity times zero has no sign and lands on NaN
        _ => T::from_state(Sentinel::infinity(lhs.sign() * rhs.sign())),
    }
}

/// Division by a finite zero is an error rather than an infinity; a finite
/// value over an infinity is exactly zero.
pub(crate) fn divide<T: Extended>(
    lhs: &T,
    rhs: &T,
    finite: impl FnOnce() -> T,
) -> Result<T> {
    use Sentinel::*;

    match (lhs.state(), rhs.state()) {
        (NaN, _) | (_, NaN) => Ok(T::from_state(NaN)),
        (_, Finite) if rhs.finite_signum() == 0 => Err(NumberError::division_by_zero()),
        (Finite, Finite) => Ok(finite()),
        (Finite, _) => Ok(T::from_state(Finite)),
        (_, Finite) => Ok(T::from_state(Sentinel::infinity(
            lhs.sign() * rhs.finite_signum(),
        ))),
        _ => Ok(T::from_state(NaN)),
    }
}

pub(crate) fn negate<T: Extended>(value: &T, finite: impl FnOnce() -> T) -> T {
    match value.state() {
        Sentinel::Finite => finite(),
        state => T::from_state(state.negate()),
    }
}

pub(crate) fn abs<T: Extended>(value: &T, finite: impl FnOnce() -> T) -> T {
    match value.state() {
        Sentinel::Finite => finite(),
        Sentinel::NaN => T::from_state(Sentinel::NaN),
        _ => T::from_state(Sentinel::PositiveInfinity),
    }
}

/// NaN stays NaN, both infinities and zero invert to zero.
pub(crate) fn inverse<T: Extended>(value: &T, finite: impl FnOnce() -> T) -> T {
    match value.state() {
        Sentinel::NaN => T::from_state(Sentinel::NaN),
        Sentinel::Finite if value.finite_signum() != 0 => finite(),
        _ => T::from_state(Sentinel::Finite),
    }
}

pub(crate) fn signum<T: Extended>(value: &T) -> Result<i8> {
    match value.state() {
        Sentinel::NaN => Err(ArithmeticError::UndefinedSign.into()),
        _ => Ok(value.sign()),
    }
}

/// Total order `-∞ < finite < +∞ < NaN`, NaN equal only to itself.
pub(crate) fn compare<T: Extended>(
    lhs: &T,
    rhs: &T,
    finite: impl FnOnce() -> Ordering,
) -> Ordering {
    match (lhs.state(), rhs.state()) {
        (Sentinel::Finite, Sentinel::Finite) => finite(),
        (a, b) => a.rank().cmp(&b.rank()),
    }
}

/// Powers following `NaN^n = NaN`, `(±∞)^0 = 1` and `(±∞)^-n = 0`; a finite
/// base is handed to `finite`.
pub(crate) fn pow<T: Extended>(
    base: &T,
    exponent: i32,
    one: impl FnOnce() -> T,
    finite: impl FnOnce() -> T,
) -> T {
    use Sentinel::*;

    match (base.state(), exponent) {
        (Finite, _) => finite(),
        (NaN, _) => T::from_state(NaN),
        (_, 0) => one(),
        (_, e) if e < 0 => T::from_state(Finite),
        (NegativeInfinity, e) if e % 2 != 0 => T::from_state(NegativeInfinity),
        _ => T::from_state(PositiveInfinity),
    }
}
