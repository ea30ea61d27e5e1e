use std::{fmt::Display, str::FromStr};

use num_integer::Integer as _;

use crate::algebra::{impl_ring_ops, AbelianGroup, ComparableNumber, Ring, WidensTo};
use crate::core::sentinel::Sentinel;
use crate::error::{ArithmeticError, NumberError};
use crate::exact::{ExactInteger, ExactRational, ExactReal};
use crate::Result;

macro_rules! fixed_integer {
    ($(#[$meta:meta])* $name:ident, $prim:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub $prim);

        impl $name {
            pub const ZERO: Self = Self(0);
            pub const ONE: Self = Self(1);
            pub const POSITIVE_INFINITY: Self = Self(<$prim>::MAX);
            pub const NEGATIVE_INFINITY: Self = Self(<$prim>::MIN);

            pub const fn new(value: $prim) -> Self {
                Self(value)
            }

            pub const fn value(self) -> $prim {
                self.0
            }

            pub const fn is_finite(self) -> bool {
                self.0 != <$prim>::MAX && self.0 != <$prim>::MIN
            }

            fn finite(self, operation: &'static str) -> Result<$prim> {
                match self.is_finite() {
                    true => Ok(self.0),
                    _ => Err(NumberError::Arithmetic(ArithmeticError::NonFinite(operation))),
                }
            }

            pub fn pow(self, exponent: u32) -> Self {
                Self(self.0.saturating_pow(exponent))
            }

            pub fn gcd(self, other: Self) -> Result<Self> {
                Ok(Self(self.finite("gcd")?.gcd(&other.finite("gcd")?)))
            }

            /// Least common multiple, saturating.
            pub fn lcm(self, other: Self) -> Result<Self> {
                let (a, b) = (self.finite("lcm")?, other.finite("lcm")?);
                if a == 0 || b == 0 {
                    return Ok(Self::ZERO);
                }

                Ok(Self((a / a.gcd(&b)).saturating_mul(b).saturating_abs()))
            }

            /// Division discarding the remainder.
            pub fn quotient(self, divisor: Self) -> Result<Self> {
                match divisor.0 {
                    0 => Err(NumberError::division_by_zero()),
                    d => Ok(Self(self.0.saturating_div(d))),
                }
            }

            /// Remainder of [`quotient`](Self::quotient), with the sign of `self`.
            pub fn remainder(self, divisor: Self) -> Result<Self> {
                match divisor.0 {
                    0 => Err(NumberError::division_by_zero()),
                    d => Ok(Self(self.0.wrapping_rem(d))),
                }
            }

            pub const fn is_even(self) -> bool {
                self.0 % 2 == 0
            }

            pub const fn is_odd(self) -> bool {
                !self.is_even()
            }

            pub fn to_f64(self) -> f64 {
                match self.0 {
                    <$prim>::MAX => f64::INFINITY,
                    <$prim>::MIN => f64::NEG_INFINITY,
                    v => v as f64,
                }
            }
        }

        /// Saturating: results past the range stick to the infinities.
        impl AbelianGroup for $name {
            fn zero() -> Self {
                Self::ZERO
            }

            fn add(&self, rhs: &Self) -> Self {
                Self(self.0.saturating_add(rhs.0))
            }

            fn subtract(&self, rhs: &Self) -> Self {
                Self(self.0.saturating_sub(rhs.0))
            }

            fn negate(&self) -> Self {
                Self(self.0.saturating_neg())
            }
        }

        impl Ring for $name {
            fn one() -> Self {
                Self::ONE
            }

            fn multiply(&self, rhs: &Self) -> Self {
                Self(self.0.saturating_mul(rhs.0))
            }
        }

        impl_ring_ops!($name);

        impl ComparableNumber for $name {
            fn is_nan(&self) -> bool {
                false
            }

            fn is_positive_infinity(&self) -> bool {
                self.0 == <$prim>::MAX
            }

            fn is_negative_infinity(&self) -> bool {
                self.0 == <$prim>::MIN
            }

            fn signum(&self) -> Result<i8> {
                Ok(self.0.signum() as i8)
            }

            fn abs(&self) -> Self {
                Self(self.0.saturating_abs())
            }

            fn distance(&self, other: &Self) -> Self {
                Self(other.0.saturating_sub(self.0))
            }
        }

        impl From<$prim> for $name {
            fn from(value: $prim) -> Self {
                Self(value)
            }
        }

        impl WidensTo<ExactInteger> for $name {
            fn widen(&self) -> ExactInteger {
                match self.0 {
                    <$prim>::MAX => ExactInteger::positive_infinity(),
                    <$prim>::MIN => ExactInteger::negative_infinity(),
                    v => ExactInteger::from(v),
                }
            }
        }

        impl WidensTo<ExactRational> for $name {
            fn widen(&self) -> ExactRational {
                let integer: ExactInteger = self.widen();
                integer.widen()
            }
        }

        impl WidensTo<ExactReal> for $name {
            fn widen(&self) -> ExactReal {
                let integer: ExactInteger = self.widen();
                integer.widen()
            }
        }

        impl FromStr for $name {
            type Err = NumberError;

            /// Digits with an optional sign, or `Infinity`/`-Infinity`.
            fn from_str(s: &str) -> Result<Self> {
                match Sentinel::parse(s) {
                    Some(Sentinel::PositiveInfinity) => Ok(Self::POSITIVE_INFINITY),
                    Some(Sentinel::NegativeInfinity) => Ok(Self::NEGATIVE_INFINITY),
                    Some(_) => Err(NumberError::invalid_format(s)),
                    None => s
                        .trim()
                        .parse::<$prim>()
                        .map(Self)
                        .map_err(|_| NumberError::invalid_format(s)),
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self.0 {
                    <$prim>::MAX => f.write_str("Infinity"),
                    <$prim>::MIN => f.write_str("-Infinity"),
                    v => write!(f, "{v}"),
                }
            }
        }
    };
}

fixed_integer!(
    /// 32 bit integer. `i32::MIN` and `i32::MAX` stand for `-∞` and `+∞`.
    Integer,
    i32
);

fixed_integer!(
    /// 64 bit integer. `i64::MIN` and `i64::MAX` stand for `-∞` and `+∞`.
    Long,
    i64
);

impl From<Integer> for Long {
    fn from(value: Integer) -> Self {
        match value.0 {
            i32::MAX => Self::POSITIVE_INFINITY,
            i32::MIN => Self::NEGATIVE_INFINITY,
            v => Self(i64::from(v)),
        }
    }
}
