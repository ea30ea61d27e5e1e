//! Complex numbers over [`ExactReal`] components.
//!
//! NaN and infinity are not tracked separately: a complex number is NaN when
//! either component is, and infinite when either component is infinite.
//! Modulus and argument are only ever computed from the double projections of
//! the components and are memoised on first use.

use std::{
    fmt::Display,
    hash::{Hash, Hasher},
    str::FromStr,
    sync::{LazyLock, OnceLock},
};

use crate::algebra::{
    impl_field_ops, impl_ring_ops, power, AbelianGroup, ComparableNumber, Field, Ring, WidensTo,
};
use crate::error::NumberError;
use crate::exact::{real, ExactInteger, ExactRational, ExactReal};
use crate::Result;

pub static ZERO: LazyLock<ExactComplex> = LazyLock::new(|| ExactComplex::from_parts(0, 0));
pub static ONE: LazyLock<ExactComplex> = LazyLock::new(|| ExactComplex::from_parts(1, 0));
pub static MINUS_ONE: LazyLock<ExactComplex> = LazyLock::new(|| ExactComplex::from_parts(-1, 0));
pub static TWO: LazyLock<ExactComplex> = LazyLock::new(|| ExactComplex::from_parts(2, 0));
pub static I: LazyLock<ExactComplex> = LazyLock::new(|| ExactComplex::from_parts(0, 1));
pub static MINUS_I: LazyLock<ExactComplex> = LazyLock::new(|| ExactComplex::from_parts(0, -1));
pub static HALF: LazyLock<ExactComplex> =
    LazyLock::new(|| ExactComplex::from_real(ExactReal::from(0.5)));
pub static NAN: LazyLock<ExactComplex> =
    LazyLock::new(|| ExactComplex::from_real(ExactReal::nan()));
pub static POSITIVE_INFINITY: LazyLock<ExactComplex> =
    LazyLock::new(|| ExactComplex::from_real(ExactReal::positive_infinity()));
pub static NEGATIVE_INFINITY: LazyLock<ExactComplex> =
    LazyLock::new(|| ExactComplex::from_real(ExactReal::negative_infinity()));

#[derive(Debug, Clone)]
pub struct ExactComplex {
    re: ExactReal,
    im: ExactReal,
    modulus: OnceLock<f64>,
    argument: OnceLock<f64>,
}

impl ExactComplex {
    pub fn new(re: ExactReal, im: ExactReal) -> Self {
        Self {
            re,
            im,
            modulus: OnceLock::new(),
            argument: OnceLock::new(),
        }
    }

    pub fn from_real(re: ExactReal) -> Self {
        Self::new(re, real::ZERO.clone())
    }

    fn from_parts(re: i32, im: i32) -> Self {
        Self::new(ExactReal::from(re), ExactReal::from(im))
    }

    /// Both parts expanded exactly from their binary values.
    pub fn from_f64(re: f64, im: f64) -> Self {
        Self::new(ExactReal::from(re), ExactReal::from(im))
    }

    /// `modulus × e^(i·argument)`, remembering both inputs as the cached
    /// modulus and argument.
    pub fn polar(modulus: f64, argument: f64) -> Self {
        let (sin, cos) = argument.sin_cos();

        Self {
            re: ExactReal::from(modulus * cos),
            im: ExactReal::from(modulus * sin),
            modulus: OnceLock::from(modulus),
            argument: OnceLock::from(argument),
        }
    }

    #[inline]
    pub fn real(&self) -> &ExactReal {
        &self.re
    }

    #[inline]
    pub fn imag(&self) -> &ExactReal {
        &self.im
    }

    pub fn is_nan(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    pub fn is_infinite(&self) -> bool {
        self.re.is_infinite() || self.im.is_infinite()
    }

    pub fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }

    /// `|z|` of the double projection.
    pub fn modulus(&self) -> f64 {
        *self
            .modulus
            .get_or_init(|| self.re.to_f64().hypot(self.im.to_f64()))
    }

    /// Phase in `(-π, π]` of the double projection.
    pub fn argument(&self) -> f64 {
        *self
            .argument
            .get_or_init(|| self.im.to_f64().atan2(self.re.to_f64()))
    }

    pub fn norm(&self) -> f64 {
        self.modulus()
    }

    pub fn conjugate(&self) -> Self {
        Self::new(self.re.clone(), self.im.negate())
    }

    /// `re² + im²`, exact.
    pub fn sum_squares(&self) -> ExactReal {
        self.re.multiply(&self.re).add(&self.im.multiply(&self.im))
    }

    pub fn sqr(&self) -> Self {
        let two = ExactReal::from(2);
        Self::new(
            self.re.multiply(&self.re).subtract(&self.im.multiply(&self.im)),
            two.multiply(&self.re.multiply(&self.im)),
        )
    }

    /// Exact integer power; negative exponents invert the result.
    pub fn pow(&self, exponent: i32) -> Result<Self> {
        let raised = power(self, exponent.unsigned_abs());
        match exponent >= 0 {
            true => Ok(raised),
            _ => raised.inverse(),
        }
    }

    pub fn add_real(&self, re: &ExactReal) -> Self {
        Self::new(self.re.add(re), self.im.clone())
    }

    pub fn add_imag(&self, im: &ExactReal) -> Self {
        Self::new(self.re.clone(), self.im.add(im))
    }

    pub fn subtract_real(&self, re: &ExactReal) -> Self {
        Self::new(self.re.subtract(re), self.im.clone())
    }

    pub fn subtract_imag(&self, im: &ExactReal) -> Self {
        Self::new(self.re.clone(), self.im.subtract(im))
    }

    /// Multiplies both parts by a real factor.
    pub fn scale(&self, factor: &ExactReal) -> Self {
        Self::new(self.re.multiply(factor), self.im.multiply(factor))
    }

    pub fn divide_real(&self, divisor: &ExactReal) -> Result<Self> {
        Ok(Self::new(self.re.divide(divisor)?, self.im.divide(divisor)?))
    }
}

impl AbelianGroup for ExactComplex {
    fn zero() -> Self {
        ZERO.clone()
    }

    fn add(&self, rhs: &Self) -> Self {
        Self::new(self.re.add(&rhs.re), self.im.add(&rhs.im))
    }

    fn subtract(&self, rhs: &Self) -> Self {
        Self::new(self.re.subtract(&rhs.re), self.im.subtract(&rhs.im))
    }

    fn negate(&self) -> Self {
        Self::new(self.re.negate(), self.im.negate())
    }
}

impl Ring for ExactComplex {
    fn one() -> Self {
        ONE.clone()
    }

    fn multiply(&self, rhs: &Self) -> Self {
        let (a, b, c, d) = (&self.re, &self.im, &rhs.re, &rhs.im);
        Self::new(
            a.multiply(c).subtract(&b.multiply(d)),
            a.multiply(d).add(&b.multiply(c)),
        )
    }
}

impl Field for ExactComplex {
    /// `(ac + bd) / (c² + d²) + (bc - ad) / (c² + d²) i`.
    fn divide(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(NumberError::division_by_zero());
        }

        let (a, b, c, d) = (&self.re, &self.im, &rhs.re, &rhs.im);
        let denom = rhs.sum_squares();

        Ok(Self::new(
            a.multiply(c).add(&b.multiply(d)).divide(&denom)?,
            b.multiply(c).subtract(&a.multiply(d)).divide(&denom)?,
        ))
    }

    fn inverse(&self) -> Result<Self> {
        match self.is_zero() {
            true => Err(NumberError::division_by_zero()),
            _ => self.conjugate().divide_real(&self.sum_squares()),
        }
    }
}

impl_ring_ops!(ExactComplex);
impl_field_ops!(ExactComplex);

impl PartialEq for ExactComplex {
    fn eq(&self, other: &Self) -> bool {
        self.re == other.re && self.im == other.im
    }
}

impl Eq for ExactComplex {}

impl Hash for ExactComplex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.re.hash(state);
        self.im.hash(state);
    }
}

impl From<f64> for ExactComplex {
    fn from(value: f64) -> Self {
        Self::from_real(ExactReal::from(value))
    }
}

impl From<&ExactReal> for ExactComplex {
    fn from(value: &ExactReal) -> Self {
        value.widen()
    }
}

impl WidensTo<ExactComplex> for ExactReal {
    fn widen(&self) -> ExactComplex {
        ExactComplex::from_real(self.clone())
    }
}

impl WidensTo<ExactComplex> for ExactRational {
    fn widen(&self) -> ExactComplex {
        ExactComplex::from_real(self.widen())
    }
}

impl WidensTo<ExactComplex> for ExactInteger {
    fn widen(&self) -> ExactComplex {
        ExactComplex::from_real(self.widen())
    }
}

/// Position of the sign separating the real and imaginary parts: the last
/// `+` or `-` that neither opens the string nor belongs to an exponent.
fn split_position(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    (1..bytes.len())
        .rev()
        .find(|&at| matches!(bytes[at], b'+' | b'-') && !matches!(bytes[at - 1], b'e' | b'E'))
}

impl FromStr for ExactComplex {
    type Err = NumberError;

    /// Accepts `re`, `im i`, and `re ± im i`, where a bare `i` stands for one.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let invalid = |_| NumberError::invalid_format(s);

        let Some(body) = trimmed.strip_suffix('i') else {
            return Ok(Self::from_real(trimmed.parse().map_err(invalid)?));
        };

        let (re, im) = match split_position(body) {
            Some(at) => body.split_at(at),
            None => ("", body),
        };

        let re = match re.is_empty() {
            true => real::ZERO.clone(),
            _ => re.parse().map_err(invalid)?,
        };
        let im = match im {
            "" | "+" => real::ONE.clone(),
            "-" => real::ONE.negate(),
            im => im.parse().map_err(invalid)?,
        };

        Ok(Self::new(re, im))
    }
}

impl Display for ExactComplex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_nan() {
            return f.write_str("NaN");
        }

        let sign = match self.im.signum() {
            Ok(-1) => "",
            _ => "+",
        };

        write!(f, "{}{sign}{}i", self.re, self.im)
    }
}
