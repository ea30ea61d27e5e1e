//! Arbitrary-precision decimal backing the exact real numbers.
//!
//! A value is `unscaled × 10^-scale`. Values are kept normalised: the scale is
//! never negative and there are no trailing zeros in the unscaled digits while
//! the scale is positive, so two equal decimals always share one representation
//! and the derived equality and hash are numeric ones.

use std::{cmp::Ordering, fmt::Display, str::FromStr};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Float, Signed, Zero};

use crate::algebra::RoundingMode;
use crate::error::{ArithmeticError, ParseError};
use crate::MAX_EXPONENT;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Decimal {
    unscaled: BigInt,
    scale: u32,
}

#[inline]
fn pow10(exponent: u32) -> BigInt {
    BigInt::from(10u8).pow(exponent)
}

/// Number of decimal digits in the magnitude, `1` for zero.
#[inline]
fn digits(value: &BigInt) -> i64 {
    value.magnitude().to_string().len() as i64
}

impl Decimal {
    pub(crate) fn zero() -> Self {
        Self {
            unscaled: BigInt::zero(),
            scale: 0,
        }
    }

    /// Builds `unscaled × 10^-scale` for any scale, negative ones included.
    pub(crate) fn new(unscaled: BigInt, scale: i64) -> Self {
        if unscaled.is_zero() {
            return Self::zero();
        }

        let (mut unscaled, mut scale) = match scale < 0 {
            true => (unscaled * pow10(scale.unsigned_abs() as u32), 0),
            _ => (unscaled, scale as u32),
        };

        let ten = BigInt::from(10u8);
        while scale > 0 {
            let (quotient, remainder) = unscaled.div_rem(&ten);
            if !remainder.is_zero() {
                break;
            }
            unscaled = quotient;
            scale -= 1;
        }

        Self { unscaled, scale }
    }

    /// Like [`new`](Self::new), but refuses a scale whose magnitude passes
    /// [`MAX_EXPONENT`] unless the value is zero.
    pub(crate) fn with_scale(unscaled: BigInt, scale: i64) -> Result<Self, ArithmeticError> {
        if unscaled.is_zero() {
            return Ok(Self::zero());
        }

        match scale.unsigned_abs() <= u64::from(MAX_EXPONENT) {
            true => Ok(Self::new(unscaled, scale)),
            _ => Err(ArithmeticError::Overflow),
        }
    }

    /// Exact binary expansion of a finite float, `None` for NaN or infinities.
    pub(crate) fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        if value == 0.0 {
            return Some(Self::zero());
        }

        let (mantissa, exponent, sign) = Float::integer_decode(value);
        let mantissa = BigInt::from(mantissa) * sign;

        // m × 2^-e is exactly m × 5^e × 10^-e
        Some(match exponent >= 0 {
            true => Self::new(mantissa << exponent as usize, 0),
            _ => {
                let exponent = exponent.unsigned_abs() as u32;
                Self::new(mantissa * BigInt::from(5u8).pow(exponent), exponent as i64)
            }
        })
    }

    /// `numer / denom` with at most `precision` significant digits.
    pub(crate) fn from_ratio(numer: &BigInt, denom: &BigInt, precision: u32) -> Self {
        Self::new(numer.clone(), 0).divide(&Self::new(denom.clone(), 0), precision)
    }

    #[inline]
    pub(crate) fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    #[inline]
    pub(crate) fn scale(&self) -> u32 {
        self.scale
    }

    #[inline]
    pub(crate) fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    pub(crate) fn signum(&self) -> i8 {
        match self.unscaled.is_zero() {
            true => 0,
            _ if self.unscaled.is_negative() => -1,
            _ => 1,
        }
    }

    pub(crate) fn negate(&self) -> Self {
        Self {
            unscaled: -&self.unscaled,
            scale: self.scale,
        }
    }

    pub(crate) fn abs(&self) -> Self {
        Self {
            unscaled: self.unscaled.abs(),
            scale: self.scale,
        }
    }

    /// Both unscaled values brought to the larger of the two scales.
    fn align(&self, other: &Self) -> (BigInt, BigInt, u32) {
        match self.scale.cmp(&other.scale) {
            Ordering::Equal => (self.unscaled.clone(), other.unscaled.clone(), self.scale),
            Ordering::Less => (
                &self.unscaled * pow10(other.scale - self.scale),
                other.unscaled.clone(),
                other.scale,
            ),
            Ordering::Greater => (
                self.unscaled.clone(),
                &other.unscaled * pow10(self.scale - other.scale),
                self.scale,
            ),
        }
    }

    pub(crate) fn add(&self, rhs: &Self) -> Self {
        let (lhs, rhs, scale) = self.align(rhs);
        Self::new(lhs + rhs, scale as i64)
    }

    pub(crate) fn subtract(&self, rhs: &Self) -> Self {
        let (lhs, rhs, scale) = self.align(rhs);
        Self::new(lhs - rhs, scale as i64)
    }

    pub(crate) fn multiply(&self, rhs: &Self) -> Self {
        Self::new(
            &self.unscaled * &rhs.unscaled,
            self.scale as i64 + rhs.scale as i64,
        )
    }

    /// Quotient rounded half up to `precision` significant digits. Terminating
    /// quotients shorter than that come out exact. `rhs` must not be zero.
    pub(crate) fn divide(&self, rhs: &Self, precision: u32) -> Self {
        let precision = precision.max(1) as i64;
        let shift = precision + digits(&rhs.unscaled) - digits(&self.unscaled);

        let (numer, denom) = match shift >= 0 {
            true => (&self.unscaled * pow10(shift as u32), rhs.unscaled.clone()),
            _ => (
                self.unscaled.clone(),
                &rhs.unscaled * pow10(shift.unsigned_abs() as u32),
            ),
        };

        Self::new(
            RoundingMode::half_up(&numer, &denom),
            self.scale as i64 - rhs.scale as i64 + shift,
        )
    }

    pub(crate) fn pow(&self, exponent: u32) -> Self {
        Self::new(
            self.unscaled.pow(exponent),
            self.scale as i64 * exponent as i64,
        )
    }

    /// Rounds to `scale` fractional digits; a negative scale rounds to tens,
    /// hundreds and so on.
    pub(crate) fn round(&self, scale: i64, mode: RoundingMode) -> Result<Self, ArithmeticError> {
        if i64::from(self.scale) <= scale {
            return Ok(self.clone());
        }

        // one digit past the magnitude the quotient is below a tenth, and any
        // larger divisor rounds to the same 0 or ±1
        let limit = digits(&self.unscaled) + 1;
        let shift = i64::from(self.scale)
            .checked_sub(scale)
            .map_or(limit, |shift| shift.min(limit));
        let divisor = pow10(u32::try_from(shift).map_err(|_| ArithmeticError::Overflow)?);
        let rounded = mode.divide(&self.unscaled, &divisor)?;

        Self::with_scale(rounded, scale)
    }

    /// The integer part, truncated towards zero.
    pub(crate) fn trunc(&self) -> BigInt {
        &self.unscaled / pow10(self.scale)
    }

    /// `(numer, denom)` with `denom` a positive power of ten.
    pub(crate) fn to_fraction(&self) -> (BigInt, BigInt) {
        (self.unscaled.clone(), pow10(self.scale))
    }

    /// Nearest double, correctly rounded by the standard parser.
    pub(crate) fn to_f64(&self) -> f64 {
        self.to_string().parse().unwrap_or(f64::NAN)
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let (lhs, rhs, _) = self.align(other);
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Decimal {
    type Err = ParseError;

    /// Accepts `[+-]digits[.digits][(e|E)[+-]digits]`, with digits allowed on
    /// only one side of the point. The resulting scale must stay within
    /// [`MAX_EXPONENT`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        let invalid = || ParseError::InvalidFormat(s.to_string());

        let (mantissa, exponent) = match s.find(['e', 'E']) {
            Some(at) => {
                let exponent = s[at + 1..].parse::<i32>().map_err(|_| invalid())?;
                (&s[..at], exponent as i64)
            }
            None => (s, 0),
        };

        let is_negative = mantissa.starts_with('-');
        let unsigned = mantissa
            .strip_prefix(['+', '-'])
            .unwrap_or(mantissa);

        let (int, fract) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if int.len() + fract.len() == 0 || !is_digits(int) || !is_digits(fract) {
            return Err(invalid());
        }

        let combined = format!("{int}{fract}");
        let unscaled = BigInt::parse_bytes(combined.as_bytes(), 10).ok_or_else(invalid)?;
        let unscaled = match is_negative {
            true => -unscaled,
            _ => unscaled,
        };

        Self::with_scale(unscaled, fract.len() as i64 - exponent).map_err(|_| invalid())
    }
}

impl Display for Decimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = match self.unscaled.is_negative() {
            true => "-",
            _ => "",
        };
        let digits = self.unscaled.magnitude().to_string();
        let scale = self.scale as usize;

        match scale == 0 {
            true => write!(f, "{sign}{digits}"),
            _ => {
                // left pad so there is always one digit before the point
                let digits = format!("{digits:0>width$}", width = scale + 1);
                let (int, fract) = digits.split_at(digits.len() - scale);

                write!(f, "{sign}{int}.{fract}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(decimal("123.45").to_string(), "123.45");
        assert_eq!(decimal("-0.005").to_string(), "-0.005");
        assert_eq!(decimal("+7").to_string(), "7");
        assert_eq!(decimal(".5").to_string(), "0.5");
        assert_eq!(decimal("1.2500").to_string(), "1.25");
        assert_eq!(decimal("1.5e3").to_string(), "1500");
        assert_eq!(decimal("25E-3").to_string(), "0.025");
        assert_eq!(decimal("-0").to_string(), "0");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!("".parse::<Decimal>(), Err(ParseError::Empty));
        for s in ["abc", "1.2.3", "-", ".", "1e", "1x5", "--1"] {
            assert!(s.parse::<Decimal>().is_err(), "{s} should not parse");
        }
    }

    #[test]
    fn test_exponent_bound() {
        let bound = i64::from(MAX_EXPONENT);
        assert_eq!(
            format!("1e-{bound}").parse::<Decimal>().map(|d| d.scale()),
            Ok(MAX_EXPONENT)
        );
        for s in ["1e2147483647", "1e-2147483647", "1.5e1048578", "1e-1048577"] {
            assert_eq!(
                s.parse::<Decimal>(),
                Err(ParseError::InvalidFormat(s.to_string()))
            );
        }
        assert_eq!(
            Decimal::with_scale(BigInt::from(7), bound + 1),
            Err(ArithmeticError::Overflow)
        );
    }

    #[test]
    fn test_normalised_equality() {
        assert_eq!(decimal("2.50"), decimal("2.5"));
        assert_eq!(Decimal::new(BigInt::from(250), 2), decimal("2.5"));
        assert_eq!(Decimal::new(BigInt::from(3), -2), decimal("300"));
    }

    #[test]
    fn test_ordering() {
        assert!(decimal("1.05") > decimal("1.0499"));
        assert!(decimal("-2") < decimal("-1.999"));
        assert_eq!(decimal("10").cmp(&decimal("10.000")), Ordering::Equal);
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(decimal("0.1").add(&decimal("0.2")), decimal("0.3"));
        assert_eq!(decimal("1").subtract(&decimal("0.001")), decimal("0.999"));
        assert_eq!(decimal("-1.5").multiply(&decimal("0.2")), decimal("-0.3"));
        assert_eq!(decimal("1.1").pow(3), decimal("1.331"));
    }

    #[test]
    fn test_division() {
        assert_eq!(decimal("1").divide(&decimal("4"), 128), decimal("0.25"));
        assert_eq!(decimal("-7.5").divide(&decimal("2.5"), 128), decimal("-3"));
        assert_eq!(decimal("2").divide(&decimal("3"), 5), decimal("0.66667"));
        assert_eq!(decimal("200").divide(&decimal("3"), 4), decimal("66.67"));
        assert_eq!(decimal("1").divide(&decimal("3"), 128).scale(), 128);
    }

    #[test]
    fn test_exact_float_expansion() {
        assert_eq!(Decimal::from_f64(2.5), Some(decimal("2.5")));
        assert_eq!(Decimal::from_f64(-1024.0), Some(decimal("-1024")));
        assert_eq!(
            Decimal::from_f64(0.1),
            Some(decimal("0.1000000000000000055511151231257827021181583404541015625"))
        );
        assert_eq!(Decimal::from_f64(f64::NAN), None);
        assert_eq!(Decimal::from_f64(f64::INFINITY), None);
    }

    #[test]
    fn test_rounding() {
        let value = decimal("2.345");
        assert_eq!(value.round(2, RoundingMode::HalfUp), Ok(decimal("2.35")));
        assert_eq!(value.round(2, RoundingMode::HalfEven), Ok(decimal("2.34")));
        assert_eq!(value.round(0, RoundingMode::Ceiling), Ok(decimal("3")));
        assert_eq!(decimal("1250").round(-2, RoundingMode::HalfDown), Ok(decimal("1200")));
        assert_eq!(value.round(5, RoundingMode::Unnecessary), Ok(value.clone()));
        assert!(value.round(1, RoundingMode::Unnecessary).is_err());
        assert_eq!(value.round(i64::MIN, RoundingMode::HalfUp), Ok(Decimal::zero()));
        assert_eq!(decimal("-0.5").round(-2, RoundingMode::Up), Ok(decimal("-100")));
        assert_eq!(
            value.round(i64::MIN, RoundingMode::Up),
            Err(ArithmeticError::Overflow)
        );
    }

    #[test]
    fn test_conversions() {
        assert_eq!(decimal("-12.99").trunc(), BigInt::from(-12));
        assert_eq!(decimal("0.375").to_f64(), 0.375);
        assert_eq!(
            decimal("1.25").to_fraction(),
            (BigInt::from(125), BigInt::from(100))
        );
    }
}
