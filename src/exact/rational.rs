//! Fractions of arbitrary-precision integers extended with `±∞` and NaN.
//!
//! Finite values are always kept in lowest terms with a positive denominator.
//! Every constructor maps a zero denominator to NaN.

use std::{cmp::Ordering, fmt::Display, str::FromStr, sync::LazyLock};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::algebra::{
    impl_field_ops, impl_ring_ops, AbelianGroup, ComparableNumber, Field, Ring, RoundingMode,
    WidensTo,
};
use crate::core::{
    decimal::Decimal,
    sentinel::{self, Extended, Sentinel},
};
use crate::error::{ArithmeticError, NumberError};
use crate::exact::ExactInteger;
use crate::Result;

pub static ZERO: LazyLock<ExactRational> = LazyLock::new(|| ExactRational::from(0));
pub static ONE: LazyLock<ExactRational> = LazyLock::new(|| ExactRational::from(1));
pub static NAN: LazyLock<ExactRational> = LazyLock::new(ExactRational::nan);
pub static POSITIVE_INFINITY: LazyLock<ExactRational> =
    LazyLock::new(ExactRational::positive_infinity);
pub static NEGATIVE_INFINITY: LazyLock<ExactRational> =
    LazyLock::new(ExactRational::negative_infinity);

/// Digits used when a rational is only needed as a machine float.
const FLOAT_DIGITS: u32 = 32;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExactRational {
    value: BigRational,
    neg: bool,
    pos: bool,
}

impl ExactRational {
    /// `numer / denom` in lowest terms, NaN when `denom` is zero.
    pub fn new(numer: BigInt, denom: BigInt) -> Self {
        match denom.is_zero() {
            true => Self::nan(),
            _ => Self::from(BigRational::new(numer, denom)),
        }
    }

    pub fn fraction(numer: i64, denom: i64) -> Self {
        Self::new(BigInt::from(numer), BigInt::from(denom))
    }

    /// Builds `numer / denom` where either side may itself be a sentinel.
    ///
    /// | numer \ denom | NaN | ±∞  | 0   | finite      |
    /// |---------------|-----|-----|-----|-------------|
    /// | NaN           | NaN | NaN | NaN | NaN         |
    /// | ±∞            | NaN | NaN | NaN | ±∞ by sign  |
    /// | 0             | NaN | 0   | NaN | 0           |
    /// | finite        | NaN | 0   | NaN | reduced     |
    pub fn from_integers(numer: &ExactInteger, denom: &ExactInteger) -> Self {
        use Sentinel::*;

        match (numer.state(), denom.state()) {
            (NaN, _) | (_, NaN) => Self::nan(),
            (_, Finite) if denom.is_zero() => Self::nan(),
            (Finite, Finite) => Self::new(numer.value().clone(), denom.value().clone()),
            (Finite, _) => Self::zero(),
            (_, Finite) => Self::from_state(Sentinel::infinity(
                numer.sign() * denom.finite_signum(),
            )),
            _ => Self::nan(),
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

    /// The backing fraction, zero for NaN and both infinities.
    #[inline]
    pub fn value(&self) -> &BigRational {
        &self.value
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        !self.neg && !self.pos
    }

    pub fn is_zero(&self) -> bool {
        self.is_finite() && self.value.is_zero()
    }

    pub fn is_integer(&self) -> bool {
        self.is_finite() && self.value.is_integer()
    }

    fn finite(&self, operation: &'static str) -> Result<&BigRational> {
        match self.is_finite() {
            true => Ok(&self.value),
            _ => Err(ArithmeticError::NonFinite(operation).into()),
        }
    }

    /// The numerator, carrying the sentinel of a non-finite value.
    pub fn numerator(&self) -> ExactInteger {
        match self.state() {
            Sentinel::Finite => ExactInteger::new(self.value.numer().clone()),
            state => ExactInteger::from_state(state),
        }
    }

    /// The positive denominator, one for a non-finite value.
    pub fn denominator(&self) -> ExactInteger {
        ExactInteger::new(self.value.denom().clone())
    }

    /// Integer part, truncated towards zero.
    pub fn integer_part(&self) -> Result<ExactInteger> {
        let value = self.finite("take the integer part of")?;
        Ok(ExactInteger::new(value.to_integer()))
    }

    /// What's left after removing the integer part; carries the sign of `self`.
    pub fn fractional_part(&self) -> Result<Self> {
        let value = self.finite("take the fractional part of")?;
        Ok(Self::from(value.fract()))
    }

    pub fn round(&self, mode: RoundingMode) -> Result<Self> {
        let value = self.finite("round")?;
        let rounded = mode.divide(value.numer(), value.denom())?;
        Ok(Self::from(BigRational::from_integer(rounded)))
    }

    pub fn round_default(&self) -> Result<Self> {
        self.round(RoundingMode::default())
    }

    pub fn floor(&self) -> Result<Self> {
        self.finite("floor")?;
        self.round(RoundingMode::Floor)
    }

    pub fn ceil(&self) -> Result<Self> {
        self.finite("ceil")?;
        self.round(RoundingMode::Ceiling)
    }

    pub fn truncate(&self) -> Result<Self> {
        self.finite("truncate")?;
        self.round(RoundingMode::Down)
    }

    fn checked_division(
        &self,
        divisor: &Self,
        operation: &'static str,
    ) -> Result<(BigRational, BigRational)> {
        let (lhs, rhs) = (self.finite(operation)?, divisor.finite(operation)?);
        match rhs.is_zero() {
            true => Err(NumberError::division_by_zero()),
            _ => Ok((lhs.clone(), rhs.clone())),
        }
    }

    /// `self - divisor × trunc(self / divisor)`, taking the sign of `self`.
    pub fn remainder(&self, divisor: &Self) -> Result<Self> {
        let (lhs, rhs) = self.checked_division(divisor, "take the remainder of")?;
        let quotient = (&lhs / &rhs).trunc();
        Ok(Self::from(lhs - rhs * quotient))
    }

    /// `self - divisor × floor(self / divisor)`, taking the sign of `divisor`.
    pub fn modulo(&self, divisor: &Self) -> Result<Self> {
        let (lhs, rhs) = self.checked_division(divisor, "take the modulo of")?;
        let quotient = (&lhs / &rhs).floor();
        Ok(Self::from(lhs - rhs * quotient))
    }

    /// Exact power. A zero base raised to a negative power is zero, as its
    /// inverse is.
    pub fn pow(&self, exponent: i32) -> Self {
        sentinel::pow(self, exponent, Self::one, || {
            let magnitude = exponent.unsigned_abs();
            let numer = self.value.numer().pow(magnitude);
            let denom = self.value.denom().pow(magnitude);

            match exponent >= 0 {
                true => Self::new(numer, denom),
                _ if numer.is_zero() => Self::zero(),
                _ => Self::new(denom, numer),
            }
        })
    }

    fn cast<T>(&self, cast: impl FnOnce(&BigInt) -> Option<T>) -> Result<T> {
        match self.is_finite() {
            true => cast(&self.value.to_integer()).ok_or(ArithmeticError::Overflow.into()),
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
            Sentinel::Finite => {
                Decimal::from_ratio(self.value.numer(), self.value.denom(), FLOAT_DIGITS).to_f64()
            }
            Sentinel::PositiveInfinity => f64::INFINITY,
            Sentinel::NegativeInfinity => f64::NEG_INFINITY,
            Sentinel::NaN => f64::NAN,
        }
    }

    pub fn to_f32(&self) -> f32 {
        self.to_f64() as f32
    }
}

impl Extended for ExactRational {
    #[inline]
    fn state(&self) -> Sentinel {
        Sentinel::from_flags(self.neg, self.pos)
    }

    fn from_state(state: Sentinel) -> Self {
        let (neg, pos) = state.flags();
        Self {
            value: BigRational::zero(),
            neg,
            pos,
        }
    }

    fn finite_signum(&self) -> i8 {
        match self.value.is_zero() {
            true => 0,
            _ if self.value.is_negative() => -1,
            _ => 1,
        }
    }
}

impl AbelianGroup for ExactRational {
    fn zero() -> Self {
        Self::from(BigRational::zero())
    }

    fn add(&self, rhs: &Self) -> Self {
        sentinel::add(self, rhs, || Self::from(&self.value + &rhs.value))
    }

    fn subtract(&self, rhs: &Self) -> Self {
        sentinel::subtract(self, rhs, || Self::from(&self.value - &rhs.value))
    }

    fn negate(&self) -> Self {
        sentinel::negate(self, || Self::from(-&self.value))
    }
}

impl Ring for ExactRational {
    fn one() -> Self {
        Self::from(BigRational::one())
    }

    fn multiply(&self, rhs: &Self) -> Self {
        sentinel::multiply(self, rhs, || Self::from(&self.value * &rhs.value))
    }
}

impl Field for ExactRational {
    fn divide(&self, rhs: &Self) -> Result<Self> {
        sentinel::divide(self, rhs, || Self::from(&self.value / &rhs.value))
    }

    fn inverse(&self) -> Result<Self> {
        Ok(sentinel::inverse(self, || Self::from(self.value.recip())))
    }
}

impl_ring_ops!(ExactRational);
impl_field_ops!(ExactRational);

impl ComparableNumber for ExactRational {
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
        sentinel::abs(self, || Self::from(self.value.abs()))
    }

    fn distance(&self, other: &Self) -> Self {
        other.subtract(self)
    }
}

impl Ord for ExactRational {
    fn cmp(&self, other: &Self) -> Ordering {
        sentinel::compare(self, other, || self.value.cmp(&other.value))
    }
}

impl PartialOrd for ExactRational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<BigRational> for ExactRational {
    fn from(value: BigRational) -> Self {
        Self {
            value,
            neg: false,
            pos: false,
        }
    }
}

impl From<i32> for ExactRational {
    fn from(value: i32) -> Self {
        Self::from(BigRational::from_integer(BigInt::from(value)))
    }
}

impl From<i64> for ExactRational {
    fn from(value: i64) -> Self {
        Self::from(BigRational::from_integer(BigInt::from(value)))
    }
}

impl From<&ExactInteger> for ExactRational {
    fn from(value: &ExactInteger) -> Self {
        value.widen()
    }
}

impl WidensTo<ExactRational> for ExactInteger {
    fn widen(&self) -> ExactRational {
        match self.state() {
            Sentinel::Finite => {
                ExactRational::from(BigRational::from_integer(self.value().clone()))
            }
            state => ExactRational::from_state(state),
        }
    }
}

impl FromStr for ExactRational {
    type Err = NumberError;

    /// Accepts the sentinel literals, `p/q` with integer sides, and plain
    /// decimals such as `-1.25`.
    fn from_str(s: &str) -> Result<Self> {
        if let Some(state) = Sentinel::parse(s) {
            return Ok(Self::from_state(state));
        }

        match s.split_once('/') {
            Some((numer, denom)) => Ok(Self::from_integers(
                &numer.parse().map_err(|_| NumberError::invalid_format(s))?,
                &denom.parse().map_err(|_| NumberError::invalid_format(s))?,
            )),
            None => {
                let (numer, denom) = s
                    .parse::<Decimal>()
                    .map_err(|_| NumberError::invalid_format(s))?
                    .to_fraction();
                Ok(Self::new(numer, denom))
            }
        }
    }
}

impl Display for ExactRational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.state().literal() {
            Some(literal) => f.write_str(literal),
            None => write!(f, "{}", self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exact::integer;

    fn q(numer: i64, denom: i64) -> ExactRational {
        ExactRational::fraction(numer, denom)
    }

    fn int(value: i64) -> ExactInteger {
        ExactInteger::from(value)
    }

    #[test]
    fn test_reduction() {
        let half = q(4, 8);
        assert_eq!(half.numerator(), int(1));
        assert_eq!(half.denominator(), int(2));

        let negative = q(6, -4);
        assert_eq!(negative.numerator(), int(-3));
        assert_eq!(negative.denominator(), int(2));
    }

    #[test]
    fn test_zero_denominator_is_nan() {
        assert_eq!(q(3, 0), *NAN);
        assert_eq!(q(0, 0), *NAN);
        assert_eq!(ExactRational::from_integers(&int(-3), &int(0)), *NAN);
        assert_eq!("5/0".parse::<ExactRational>().unwrap(), *NAN);
    }

    #[test]
    fn test_construction_table() {
        let from = ExactRational::from_integers;

        assert_eq!(from(&integer::NAN, &int(2)), *NAN);
        assert_eq!(from(&int(2), &integer::NAN), *NAN);
        assert_eq!(
            from(&integer::POSITIVE_INFINITY, &integer::NEGATIVE_INFINITY),
            *NAN
        );
        assert_eq!(from(&integer::POSITIVE_INFINITY, &int(0)), *NAN);
        assert_eq!(
            from(&integer::POSITIVE_INFINITY, &int(3)),
            *POSITIVE_INFINITY
        );
        assert_eq!(
            from(&integer::NEGATIVE_INFINITY, &int(3)),
            *NEGATIVE_INFINITY
        );
        assert_eq!(
            from(&integer::POSITIVE_INFINITY, &int(-3)),
            *NEGATIVE_INFINITY
        );
        assert_eq!(from(&int(0), &integer::POSITIVE_INFINITY), *ZERO);
        assert_eq!(from(&int(7), &integer::NEGATIVE_INFINITY), *ZERO);
        assert_eq!(from(&int(6), &int(9)), q(2, 3));
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(q(1, 3).add(&q(1, 6)), q(1, 2));
        assert_eq!(&q(1, 2) - &q(3, 4), q(-1, 4));
        assert_eq!(&q(2, 3) * &q(9, 4), q(3, 2));
        assert_eq!(&q(2, 3) / &q(4, 9), Ok(q(3, 2)));
        assert_eq!(q(-2, 3).inverse(), Ok(q(-3, 2)));
    }

    #[test]
    fn test_sentinel_division() {
        assert_eq!(ZERO.divide(&POSITIVE_INFINITY), Ok(ZERO.clone()));
        assert_eq!(q(5, 2).divide(&NEGATIVE_INFINITY), Ok(ZERO.clone()));
        assert_eq!(
            POSITIVE_INFINITY.divide(&POSITIVE_INFINITY),
            Ok(NAN.clone())
        );
        assert_eq!(
            NEGATIVE_INFINITY.divide(&q(-1, 2)),
            Ok(POSITIVE_INFINITY.clone())
        );
        assert_eq!(
            q(1, 2).divide(&ZERO),
            Err(ArithmeticError::DivisionByZero.into())
        );
        assert_eq!(
            POSITIVE_INFINITY.divide(&ZERO),
            Err(ArithmeticError::DivisionByZero.into())
        );
    }

    #[test]
    fn test_inverse_sentinels() {
        assert_eq!(NAN.inverse(), Ok(NAN.clone()));
        assert_eq!(POSITIVE_INFINITY.inverse(), Ok(ZERO.clone()));
        assert_eq!(NEGATIVE_INFINITY.inverse(), Ok(ZERO.clone()));
        assert_eq!(ZERO.inverse(), Ok(ZERO.clone()));
    }

    #[test]
    fn test_parts_and_rounding() {
        let value = q(-7, 2);
        assert_eq!(value.integer_part(), Ok(int(-3)));
        assert_eq!(value.fractional_part(), Ok(q(-1, 2)));
        assert_eq!(value.floor(), Ok(q(-4, 1)));
        assert_eq!(value.ceil(), Ok(q(-3, 1)));
        assert_eq!(value.truncate(), Ok(q(-3, 1)));
        assert_eq!(value.round_default(), Ok(q(-4, 1)));
        assert_eq!(value.round(RoundingMode::HalfEven), Ok(q(-4, 1)));
        assert_eq!(q(5, 2).round(RoundingMode::HalfEven), Ok(q(2, 1)));
        assert_eq!(
            POSITIVE_INFINITY.floor(),
            Err(ArithmeticError::NonFinite("floor").into())
        );
        assert_eq!(
            q(1, 3).round(RoundingMode::Unnecessary),
            Err(ArithmeticError::RoundingNecessary.into())
        );
    }

    #[test]
    fn test_remainder_and_modulo() {
        assert_eq!(q(5, 1).remainder(&q(-3, 1)), Ok(q(2, 1)));
        assert_eq!(q(-5, 1).remainder(&q(3, 1)), Ok(q(-2, 1)));
        assert_eq!(q(5, 1).modulo(&q(-3, 1)), Ok(q(-1, 1)));
        assert_eq!(q(-5, 1).modulo(&q(3, 1)), Ok(q(1, 1)));
        assert_eq!(q(7, 2).modulo(&q(1, 1)), Ok(q(1, 2)));
        assert_eq!(
            q(1, 2).modulo(&ZERO),
            Err(ArithmeticError::DivisionByZero.into())
        );
        assert!(NAN.remainder(&q(1, 2)).is_err());
    }

    #[test]
    fn test_pow() {
        assert_eq!(q(2, 3).pow(3), q(8, 27));
        assert_eq!(q(-2, 3).pow(-2), q(9, 4));
        assert_eq!(ZERO.pow(-2), *ZERO);
        assert_eq!(q(5, 7).pow(0), *ONE);
        assert_eq!(NEGATIVE_INFINITY.pow(3), *NEGATIVE_INFINITY);
        assert_eq!(POSITIVE_INFINITY.pow(-3), *ZERO);
        assert_eq!(NAN.pow(2), *NAN);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("3/-6".parse::<ExactRational>().unwrap(), q(-1, 2));
        assert_eq!("-1.25".parse::<ExactRational>().unwrap(), q(-5, 4));
        assert_eq!("42".parse::<ExactRational>().unwrap(), q(42, 1));
        assert_eq!(
            "Infinity".parse::<ExactRational>().unwrap(),
            *POSITIVE_INFINITY
        );
        assert!("1/2/3".parse::<ExactRational>().is_err());
        assert!("a/b".parse::<ExactRational>().is_err());

        assert_eq!(q(-1, 2).to_string(), "-1/2");
        assert_eq!(q(4, 2).to_string(), "2");
        assert_eq!(NEGATIVE_INFINITY.to_string(), "-Infinity");
    }

    #[test]
    fn test_conversions() {
        assert_eq!(q(-7, 2).to_i32(), Ok(-3));
        assert_eq!(q(1, 4).to_f64(), 0.25);
        assert!((q(1, 3).to_f64() - 1.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(
            NAN.to_i64(),
            Err(ArithmeticError::NonNumericCast.into())
        );
        let widened: ExactRational = integer::NEGATIVE_INFINITY.widen();
        assert_eq!(widened, *NEGATIVE_INFINITY);
        assert_eq!(ExactRational::from(&int(3)), q(3, 1));
    }

    #[test]
    fn test_ordering() {
        let mut values = vec![NAN.clone(), q(1, 2), NEGATIVE_INFINITY.clone(), q(1, 3)];
        values.sort();
        assert_eq!(
            values,
            vec![NEGATIVE_INFINITY.clone(), q(1, 3), q(1, 2), NAN.clone()]
        );
    }
}
