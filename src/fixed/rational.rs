use std::{cmp::Ordering, fmt::Display, str::FromStr};

use num_integer::{div_floor, gcd, mod_floor};

use crate::algebra::{
    impl_field_ops, impl_ring_ops, AbelianGroup, ComparableNumber, Field, Ring, WidensTo,
};
use crate::core::sentinel::Sentinel;
use crate::error::{NumberError, ParseError};
use crate::exact::{ExactRational, ExactReal};
use crate::fixed::{Integer, Long};
use crate::Result;

/// A reduced fraction of two `i64` with a positive denominator.
///
/// `i64::MAX / 1` and `i64::MIN / 1` stand for `+∞` and `-∞`; any result whose
/// numerator overflows saturates to one of them. There is no NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: i64,
    denom: i64,
}

impl Rational {
    pub const ZERO: Self = Self { numer: 0, denom: 1 };
    pub const ONE: Self = Self { numer: 1, denom: 1 };
    pub const POSITIVE_INFINITY: Self = Self {
        numer: i64::MAX,
        denom: 1,
    };
    pub const NEGATIVE_INFINITY: Self = Self {
        numer: i64::MIN,
        denom: 1,
    };

    pub fn new(numer: i64, denom: i64) -> Result<Self> {
        match denom {
            0 => Err(NumberError::Parse(ParseError::ZeroDenominator)),
            _ => Ok(Self::reduced(i128::from(numer), i128::from(denom))),
        }
    }

    pub const fn integer(value: i64) -> Self {
        Self {
            numer: value,
            denom: 1,
        }
    }

    /// Normalises sign and common factors, then saturates into `i64`.
    /// `denom` must not be zero.
    fn reduced(numer: i128, denom: i128) -> Self {
        let divisor = gcd(numer, denom);
        let (mut numer, mut denom) = (numer / divisor, denom / divisor);
        if denom < 0 {
            (numer, denom) = (-numer, -denom);
        }

        if denom > i128::from(i64::MAX) {
            // Too fine for the denominator, scale both down.
            let limit = i128::from(i64::MAX);
            let factor = (denom + limit - 1) / limit;
            return Self::reduced(div_floor(numer, factor), denom / factor);
        }

        match i64::try_from(numer) {
            Ok(numer) => Self {
                numer,
                denom: denom as i64,
            },
            Err(_) if numer > 0 => Self::POSITIVE_INFINITY,
            Err(_) => Self::NEGATIVE_INFINITY,
        }
    }

    /// Closest fraction to `value` reached by its continued fraction
    /// expansion before either term overflows.
    pub fn approximate(value: f64) -> Result<Self> {
        match value {
            v if v.is_nan() => return Err(NumberError::non_numeric_cast()),
            v if v == f64::INFINITY => return Ok(Self::POSITIVE_INFINITY),
            v if v == f64::NEG_INFINITY => return Ok(Self::NEGATIVE_INFINITY),
            _ => {}
        }

        let limit = i128::from(i64::MAX);
        let (mut h0, mut h1) = (0i128, 1i128);
        let (mut k0, mut k1) = (1i128, 0i128);
        let mut rest = value;

        loop {
            let whole = rest.floor();
            if whole.abs() >= i64::MAX as f64 {
                break;
            }

            let term = whole as i128;
            let (h, k) = (term * h1 + h0, term * k1 + k0);
            if h.abs() > limit || k > limit {
                break;
            }
            (h0, h1, k0, k1) = (h1, h, k1, k);

            let fraction = rest - whole;
            if fraction == 0.0 || h1 as f64 / k1 as f64 == value {
                break;
            }
            rest = 1.0 / fraction;
        }

        Ok(match k1 {
            0 if value > 0.0 => Self::POSITIVE_INFINITY,
            0 => Self::NEGATIVE_INFINITY,
            _ => Self::reduced(h1, k1),
        })
    }

    pub const fn numerator(self) -> i64 {
        self.numer
    }

    pub const fn denominator(self) -> i64 {
        self.denom
    }

    pub const fn is_integer(self) -> bool {
        self.denom == 1
    }

    pub fn floor(self) -> i64 {
        div_floor(self.numer, self.denom)
    }

    pub fn ceil(self) -> i64 {
        match mod_floor(self.numer, self.denom) {
            0 => self.floor(),
            _ => self.floor() + 1,
        }
    }

    /// `self - floor(self)`, always in `[0, 1)`.
    pub fn fractional_part(self) -> Self {
        Self::reduced(
            i128::from(mod_floor(self.numer, self.denom)),
            i128::from(self.denom),
        )
    }

    /// `self - m * floor(self / m)`.
    pub fn modulo(self, modulus: Self) -> Result<Self> {
        let quotient = self.divide(&modulus)?;
        Ok(self.subtract(&modulus.multiply(&Self::integer(quotient.floor()))))
    }

    pub fn to_f64(self) -> f64 {
        match self {
            Self::POSITIVE_INFINITY => f64::INFINITY,
            Self::NEGATIVE_INFINITY => f64::NEG_INFINITY,
            _ => self.numer as f64 / self.denom as f64,
        }
    }

    fn parts(self) -> (i128, i128) {
        (i128::from(self.numer), i128::from(self.denom))
    }
}

impl AbelianGroup for Rational {
    fn zero() -> Self {
        Self::ZERO
    }

    fn add(&self, rhs: &Self) -> Self {
        let ((a, b), (c, d)) = (self.parts(), rhs.parts());
        // |a·d| and |c·b| are below 2^126, so only their sum can overflow
        match (a * d).checked_add(c * b) {
            Some(numer) => Self::reduced(numer, b * d),
            None if a > 0 => Self::POSITIVE_INFINITY,
            None => Self::NEGATIVE_INFINITY,
        }
    }

    fn subtract(&self, rhs: &Self) -> Self {
        self.add(&rhs.negate())
    }

    fn negate(&self) -> Self {
        let (numer, denom) = self.parts();
        Self::reduced(-numer, denom)
    }
}

impl Ring for Rational {
    fn one() -> Self {
        Self::ONE
    }

    fn multiply(&self, rhs: &Self) -> Self {
        let ((a, b), (c, d)) = (self.parts(), rhs.parts());
        Self::reduced(a * c, b * d)
    }
}

impl Field for Rational {
    fn divide(&self, rhs: &Self) -> Result<Self> {
        Ok(self.multiply(&rhs.inverse()?))
    }

    fn inverse(&self) -> Result<Self> {
        match self.numer {
            0 => Err(NumberError::division_by_zero()),
            _ => Ok(Self::reduced(i128::from(self.denom), i128::from(self.numer))),
        }
    }
}

impl_ring_ops!(Rational);
impl_field_ops!(Rational);

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        let ((a, b), (c, d)) = (self.parts(), other.parts());
        (a * d).cmp(&(c * b))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl ComparableNumber for Rational {
    fn is_nan(&self) -> bool {
        false
    }

    fn is_positive_infinity(&self) -> bool {
        *self == Self::POSITIVE_INFINITY
    }

    fn is_negative_infinity(&self) -> bool {
        *self == Self::NEGATIVE_INFINITY
    }

    fn signum(&self) -> Result<i8> {
        Ok(self.numer.signum() as i8)
    }

    fn abs(&self) -> Self {
        match self.numer < 0 {
            true => self.negate(),
            _ => *self,
        }
    }

    fn distance(&self, other: &Self) -> Self {
        other.subtract(self)
    }
}

impl From<Integer> for Rational {
    fn from(value: Integer) -> Self {
        Long::from(value).into()
    }
}

impl From<Long> for Rational {
    fn from(value: Long) -> Self {
        Self::integer(value.0)
    }
}

impl WidensTo<ExactRational> for Rational {
    fn widen(&self) -> ExactRational {
        match *self {
            Self::POSITIVE_INFINITY => ExactRational::positive_infinity(),
            Self::NEGATIVE_INFINITY => ExactRational::negative_infinity(),
            Self { numer, denom } => ExactRational::fraction(numer, denom),
        }
    }
}

impl WidensTo<ExactReal> for Rational {
    fn widen(&self) -> ExactReal {
        let rational: ExactRational = self.widen();
        rational.widen()
    }
}

impl TryFrom<f64> for Rational {
    type Error = NumberError;

    fn try_from(value: f64) -> Result<Self> {
        Self::approximate(value)
    }
}

impl FromStr for Rational {
    type Err = NumberError;

    /// `p/q`, a bare integer, or `Infinity`/`-Infinity`.
    fn from_str(s: &str) -> Result<Self> {
        match Sentinel::parse(s) {
            Some(Sentinel::PositiveInfinity) => return Ok(Self::POSITIVE_INFINITY),
            Some(Sentinel::NegativeInfinity) => return Ok(Self::NEGATIVE_INFINITY),
            Some(_) => return Err(NumberError::invalid_format(s)),
            None => {}
        }

        let parse = |part: &str| {
            part.trim()
                .parse::<i64>()
                .map_err(|_| NumberError::invalid_format(s))
        };

        match s.split_once('/') {
            Some((numer, denom)) => Self::new(parse(numer)?, parse(denom)?),
            None => parse(s).map(Self::integer),
        }
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::POSITIVE_INFINITY => f.write_str("Infinity"),
            Self::NEGATIVE_INFINITY => f.write_str("-Infinity"),
            Self { numer, denom: 1 } => write!(f, "{numer}"),
            Self { numer, denom } => write!(f, "{numer}/{denom}"),
        }
    }
}

impl From<Rational> for f64 {
    fn from(value: Rational) -> Self {
        value.to_f64()
    }
}
