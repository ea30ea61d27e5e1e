//! Arbitrary-precision integers extended with `±∞` and NaN.

use std::{cmp::Ordering, fmt::Display, str::FromStr, sync::LazyLock};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::algebra::{impl_ring_ops, AbelianGroup, ComparableNumber, Ring};
use crate::core::sentinel::{self, Extended, Sentinel};
use crate::error::{ArithmeticError, NumberError};
use crate::Result;

pub static ZERO: LazyLock<ExactInteger> = LazyLock::new(|| ExactInteger::from(0));
pub static ONE: LazyLock<ExactInteger> = LazyLock::new(|| ExactInteger::from(1));
pub static NAN: LazyLock<ExactInteger> = LazyLock::new(ExactInteger::nan);
pub static POSITIVE_INFINITY: LazyLock<ExactInteger> =
    LazyLock::new(ExactInteger::positive_infinity);
pub static NEGATIVE_INFINITY: LazyLock<ExactInteger> =
    LazyLock::new(ExactInteger::negative_infinity);

/// The magnitude is zero whenever either flag is set, so derived equality
/// and hashing treat every NaN as the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExactInteger {
    value: BigInt,
    neg: bool,
    pos: bool,
}

impl ExactInteger {
    pub fn new(value: BigInt) -> Self {
        Self {
            value,
            neg: false,
            pos: false,
        }
    }

    pub fn nan() -> Self {
        Self::from_state(Sentinel::NaN)
    }

    pub fn positive_infinity() -> Self {
        Self::from_state(Sentinel::PositiveInfinity)
    }

    pub fn negative_infinity() -> Self {
        Self::from_state(Sentinel::NegativeInfinity)
    }

    /// The backing magnitude, zero for NaN and both infinities.
    #[inline]
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        !self.neg && !self.pos
    }

    pub fn is_zero(&self) -> bool {
        self.is_finite() && self.value.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.is_finite() && self.value.is_one()
    }

    /// The magnitude of a finite value, for operations undefined elsewhere.
    pub(crate) fn finite(&self, operation: &'static str) -> Result<&BigInt> {
        match self.is_finite() {
            true => Ok(&self.value),
            _ => Err(ArithmeticError::NonFinite(operation).into()),
        }
    }

    fn cast<T>(&self, cast: impl FnOnce(&BigInt) -> Option<T>) -> Result<T> {
        match self.is_finite() {
            true => cast(&self.value).ok_or(ArithmeticError::Overflow.into()),
            _ => Err(NumberError::non_numeric_cast()),
        }
    }

    pub fn to_i32(&self) -> Result<i32> {
        self.cast(ToPrimitive::to_i32)
    }

    pub fn to_i64(&self) -> Result<i64> {
        self.cast(ToPrimitive::to_i64)
    }

    pub fn to_f64(&self) -> f64 {
        match self.state() {
            Sentinel::Finite => self.value.to_f64().unwrap_or(f64::NAN),
            Sentinel::PositiveInfinity => f64::INFINITY,
            Sentinel::NegativeInfinity => f64::NEG_INFINITY,
            Sentinel::NaN => f64::NAN,
        }
    }

    pub fn to_f32(&self) -> f32 {
        self.to_f64() as f32
    }

    /// Integer power. A negative exponent truncates `1 / self^n` towards zero,
    /// so only `1` and `-1` survive it.
    pub fn pow(&self, exponent: i32) -> Self {
        sentinel::pow(self, exponent, Self::one, || {
            match exponent >= 0 {
                true => Self::new(self.value.pow(exponent as u32)),
                _ if self.value.abs().is_one() => {
                    Self::new(self.value.pow(exponent.unsigned_abs()))
                }
                _ => Self::zero(),
            }
        })
    }

    pub fn gcd(&self, other: &Self) -> Result<Self> {
        let (lhs, rhs) = (self.finite("gcd")?, other.finite("gcd")?);
        Ok(Self::new(lhs.gcd(rhs)))
    }

    /// Remainder of the truncated division, taking the sign of `self`.
    pub fn remainder(&self, divisor: &Self) -> Result<Self> {
        let (lhs, rhs) = self.checked_division(divisor, "take the remainder of")?;
        Ok(Self::new(lhs % rhs))
    }

    /// Remainder of the floored division, taking the sign of `divisor`.
    pub fn modulo(&self, divisor: &Self) -> Result<Self> {
        let (lhs, rhs) = self.checked_division(divisor, "take the modulo of")?;
        Ok(Self::new(lhs.mod_floor(rhs)))
    }

    fn checked_division<'a>(
        &'a self,
        divisor: &'a Self,
        operation: &'static str,
    ) -> Result<(&'a BigInt, &'a BigInt)> {
        let (lhs, rhs) = (self.finite(operation)?, divisor.finite(operation)?);
        match rhs.is_zero() {
            true => Err(NumberError::division_by_zero()),
            _ => Ok((lhs, rhs)),
        }
    }

    pub fn is_even(&self) -> Result<bool> {
        Ok(self.finite("test the parity of")?.is_even())
    }

    pub fn is_odd(&self) -> Result<bool> {
        Ok(self.finite("test the parity of")?.is_odd())
    }
}

impl Extended for ExactInteger {
    #[inline]
    fn state(&self) -> Sentinel {
        Sentinel::from_flags(self.neg, self.pos)
    }

    fn from_state(state: Sentinel) -> Self {
        let (neg, pos) = state.flags();
        Self {
            value: BigInt::zero(),
            neg,
            pos,
        }
    }

    fn finite_signum(&self) -> i8 {
        self.value.signum().to_i8().unwrap_or(0)
    }
}

impl AbelianGroup for ExactInteger {
    fn zero() -> Self {
        Self::new(BigInt::zero())
    }

    fn add(&self, rhs: &Self) -> Self {
        sentinel::add(self, rhs, || Self::new(&self.value + &rhs.value))
    }

    fn subtract(&self, rhs: &Self) -> Self {
        sentinel::subtract(self, rhs, || Self::new(&self.value - &rhs.value))
    }

    fn negate(&self) -> Self {
        sentinel::negate(self, || Self::new(-&self.value))
    }
}

impl Ring for ExactInteger {
    fn one() -> Self {
        Self::new(BigInt::one())
    }

    fn multiply(&self, rhs: &Self) -> Self {
        sentinel::multiply(self, rhs, || Self::new(&self.value * &rhs.value))
    }
}

impl_ring_ops!(ExactInteger);

impl ComparableNumber for ExactInteger {
    fn is_nan(&self) -> bool {
        self.neg && self.pos
    }

    fn is_positive_infinity(&self) -> bool {
        self.pos && !self.neg
    }

    fn is_negative_infinity(&self) -> bool {
        self.neg && !self.pos
    }

    fn signum(&self) -> Result<i8> {
        sentinel::signum(self)
    }

    fn abs(&self) -> Self {
        sentinel::abs(self, || Self::new(self.value.abs()))
    }

    fn distance(&self, other: &Self) -> Self {
        other.subtract(self)
    }
}

impl Ord for ExactInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        sentinel::compare(self, other, || self.value.cmp(&other.value))
    }
}

impl PartialOrd for ExactInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<BigInt> for ExactInteger {
    fn from(value: BigInt) -> Self {
        Self::new(value)
    }
}

impl From<i32> for ExactInteger {
    fn from(value: i32) -> Self {
        Self::new(BigInt::from(value))
    }
}

impl From<i64> for ExactInteger {
    fn from(value: i64) -> Self {
        Self::new(BigInt::from(value))
    }
}

impl FromStr for ExactInteger {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self> {
        if let Some(state) = Sentinel::parse(s) {
            return Ok(Self::from_state(state));
        }

        let trimmed = s.trim();
        let (is_negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let magnitude = match unsigned.bytes().all(|b| b.is_ascii_digit()) {
            true => BigInt::parse_bytes(unsigned.as_bytes(), 10),
            _ => None,
        }
        .ok_or_else(|| NumberError::invalid_format(s))?;

        Ok(Self::new(match is_negative {
            true => -magnitude,
            _ => magnitude,
        }))
    }
}

impl Display for ExactInteger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.state().literal() {
            Some(literal) => f.write_str(literal),
            None => write!(f, "{}", self.value),
        }
    }
}
