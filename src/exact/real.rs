//! Arbitrary-precision decimals extended with `±∞` and NaN.
//!
//! Addition, subtraction and multiplication are exact. Division keeps
//! [`DEFAULT_PRECISION`] significant digits unless the quotient terminates
//! sooner, in which case it is exact too.

use std::{cmp::Ordering, fmt::Display, str::FromStr, sync::LazyLock};

use num_bigint::BigInt;
use num_traits::{One, ToPrimitive};

use crate::algebra::{
    impl_field_ops, impl_ring_ops, AbelianGroup, ComparableNumber, Field, Ring, RoundingMode,
    WidensTo,
};
use crate::core::{
    decimal::Decimal,
    sentinel::{self, Extended, Sentinel},
};
use crate::error::{ArithmeticError, NumberError};
use crate::exact::{ExactInteger, ExactRational};
use crate::{Result, DEFAULT_PRECISION};

pub static ZERO: LazyLock<ExactReal> = LazyLock::new(|| ExactReal::from(0));
pub static ONE: LazyLock<ExactReal> = LazyLock::new(|| ExactReal::from(1));
pub static NAN: LazyLock<ExactReal> = LazyLock::new(ExactReal::nan);
pub static POSITIVE_INFINITY: LazyLock<ExactReal> = LazyLock::new(ExactReal::positive_infinity);
pub static NEGATIVE_INFINITY: LazyLock<ExactReal> = LazyLock::new(ExactReal::negative_infinity);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExactReal {
    value: Decimal,
    neg: bool,
    pos: bool,
}

impl ExactReal {
    pub(crate) fn from_decimal(value: Decimal) -> Self {
        Self {
            value,
            neg: false,
            pos: false,
        }
    }

    /// `unscaled × 10^-scale`. A scale whose magnitude passes
    /// [`MAX_EXPONENT`](crate::MAX_EXPONENT) is an overflow.
    pub fn new(unscaled: BigInt, scale: i64) -> Result<Self> {
        Ok(Self::from_decimal(Decimal::with_scale(unscaled, scale)?))
    }

    pub(crate) fn integral(value: BigInt) -> Self {
        Self::from_decimal(Decimal::new(value, 0))
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

    #[inline]
    pub fn is_finite(&self) -> bool {
        !self.neg && !self.pos
    }

    pub fn is_zero(&self) -> bool {
        self.is_finite() && self.value.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.is_finite() && self.value == Decimal::new(BigInt::one(), 0)
    }

    pub fn unscaled(&self) -> &BigInt {
        self.value.unscaled()
    }

    /// Digits after the decimal point, zero for sentinels.
    pub fn scale(&self) -> u32 {
        self.value.scale()
    }

    /// Quotient with `precision` significant digits when it doesn't terminate.
    pub fn divide_with_precision(&self, rhs: &Self, precision: u32) -> Result<Self> {
        sentinel::divide(self, rhs, || {
            Self::from_decimal(self.value.divide(&rhs.value, precision))
        })
    }

    /// Rounds to `scale` fractional digits.
    pub fn round(&self, scale: i64, mode: RoundingMode) -> Result<Self> {
        match self.is_finite() {
            true => Ok(Self::from_decimal(self.value.round(scale, mode)?)),
            _ => Err(ArithmeticError::NonFinite("round").into()),
        }
    }

    /// Exact for non-negative exponents; negative ones divide one by the power.
    pub fn pow(&self, exponent: i32) -> Self {
        sentinel::pow(self, exponent, Self::one, || {
            let power = Self::from_decimal(self.value.pow(exponent.unsigned_abs()));
            match exponent >= 0 {
                true => power,
                _ => sentinel::inverse(&power, || power.reciprocal()),
            }
        })
    }

    /// `1 / self` for a finite non-zero value.
    fn reciprocal(&self) -> Self {
        let one = Decimal::new(BigInt::one(), 0);
        Self::from_decimal(one.divide(&self.value, DEFAULT_PRECISION))
    }

    /// The exact fraction this decimal denotes.
    pub fn to_rational(&self) -> ExactRational {
        match self.state() {
            Sentinel::Finite => {
                let (numer, denom) = self.value.to_fraction();
                ExactRational::new(numer, denom)
            }
            state => ExactRational::from_state(state),
        }
    }

    fn cast<T>(&self, cast: impl FnOnce(&BigInt) -> Option<T>) -> Result<T> {
        match self.is_finite() {
            true => cast(&self.value.trunc()).ok_or(ArithmeticError::Overflow.into()),
            _ => Err(NumberError::non_numeric_cast()),
        }
    }

    /// Truncates towards zero.
    pub fn to_i32(&self) -> Result<i32> {
        self.cast(ToPrimitive::to_i32)
    }

    /// Truncates towards zero.
    pub fn to_i64(&self) -> Result<i64> {
        self.cast(ToPrimitive::to_i64)
    }

    pub fn to_f64(&self) -> f64 {
        match self.state() {
            Sentinel::Finite => self.value.to_f64(),
            Sentinel::PositiveInfinity => f64::INFINITY,
            Sentinel::NegativeInfinity => f64::NEG_INFINITY,
            Sentinel::NaN => f64::NAN,
        }
    }

    pub fn to_f32(&self) -> f32 {
        self.to_f64() as f32
    }
}

impl ExactRational {
    /// The decimal expansion of this fraction cut to `precision` significant
    /// digits when it doesn't terminate.
    pub fn to_real_with_precision(&self, precision: u32) -> ExactReal {
        match self.state() {
            Sentinel::Finite => ExactReal::from_decimal(Decimal::from_ratio(
                self.value().numer(),
                self.value().denom(),
                precision,
            )),
            state => ExactReal::from_state(state),
        }
    }
}

impl Extended for ExactReal {
    #[inline]
    fn state(&self) -> Sentinel {
        Sentinel::from_flags(self.neg, self.pos)
    }

    fn from_state(state: Sentinel) -> Self {
        let (neg, pos) = state.flags();
        Self {
            value: Decimal::zero(),
            neg,
            pos,
        }
    }

    fn finite_signum(&self) -> i8 {
        self.value.signum()
    }
}

impl AbelianGroup for ExactReal {
    fn zero() -> Self {
        Self::from_decimal(Decimal::zero())
    }

    fn add(&self, rhs: &Self) -> Self {
        sentinel::add(self, rhs, || Self::from_decimal(self.value.add(&rhs.value)))
    }

    fn subtract(&self, rhs: &Self) -> Self {
        sentinel::subtract(self, rhs, || {
            Self::from_decimal(self.value.subtract(&rhs.value))
        })
    }

    fn negate(&self) -> Self {
        sentinel::negate(self, || Self::from_decimal(self.value.negate()))
    }
}

impl Ring for ExactReal {
    fn one() -> Self {
        Self::from_decimal(Decimal::new(BigInt::one(), 0))
    }

    fn multiply(&self, rhs: &Self) -> Self {
        sentinel::multiply(self, rhs, || {
            Self::from_decimal(self.value.multiply(&rhs.value))
        })
    }
}

impl Field for ExactReal {
    fn divide(&self, rhs: &Self) -> Result<Self> {
        self.divide_with_precision(rhs, DEFAULT_PRECISION)
    }

    fn inverse(&self) -> Result<Self> {
        Ok(sentinel::inverse(self, || self.reciprocal()))
    }
}

impl_ring_ops!(ExactReal);
impl_field_ops!(ExactReal);

impl ComparableNumber for ExactReal {
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
        sentinel::abs(self, || Self::from_decimal(self.value.abs()))
    }

    fn distance(&self, other: &Self) -> Self {
        other.subtract(self)
    }
}

impl Ord for ExactReal {
    fn cmp(&self, other: &Self) -> Ordering {
        sentinel::compare(self, other, || self.value.cmp(&other.value))
    }
}

impl PartialOrd for ExactReal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<i32> for ExactReal {
    fn from(value: i32) -> Self {
        Self::integral(BigInt::from(value))
    }
}

impl From<i64> for ExactReal {
    fn from(value: i64) -> Self {
        Self::integral(BigInt::from(value))
    }
}

/// The exact binary value of the float, so `0.1` keeps all of its digits.
impl From<f64> for ExactReal {
    fn from(value: f64) -> Self {
        match Decimal::from_f64(value) {
            Some(decimal) => Self::from_decimal(decimal),
            None if value.is_nan() => Self::nan(),
            None if value > 0.0 => Self::positive_infinity(),
            None => Self::negative_infinity(),
        }
    }
}

impl From<f32> for ExactReal {
    fn from(value: f32) -> Self {
        Self::from(f64::from(value))
    }
}

impl From<&ExactInteger> for ExactReal {
    fn from(value: &ExactInteger) -> Self {
        value.widen()
    }
}

impl From<&ExactRational> for ExactReal {
    fn from(value: &ExactRational) -> Self {
        value.widen()
    }
}

impl WidensTo<ExactReal> for ExactInteger {
    fn widen(&self) -> ExactReal {
        match self.state() {
            Sentinel::Finite => ExactReal::integral(self.value().clone()),
            state => ExactReal::from_state(state),
        }
    }
}

impl WidensTo<ExactReal> for ExactRational {
    fn widen(&self) -> ExactReal {
        self.to_real_with_precision(DEFAULT_PRECISION)
    }
}

impl FromStr for ExactReal {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self> {
        match Sentinel::parse(s) {
            Some(state) => Ok(Self::from_state(state)),
            None => s
                .parse::<Decimal>()
                .map(Self::from_decimal)
                .map_err(NumberError::from),
        }
    }
}

impl Display for ExactReal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.state().literal() {
            Some(literal) => f.write_str(literal),
            None => write!(f, "{}", self.value),
        }
    }
}
