//! Algebraic capabilities shared by every number in the tower.
//!
//! Generic code written against these traits works for any member, e.g.
//! [`power`] and [`dot`] below are used by the complex and quaternion types.

use std::cmp::Ordering;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

use crate::error::ArithmeticError;
use crate::Result;

pub trait AbelianGroup: Sized {
    fn zero() -> Self;

    fn add(&self, rhs: &Self) -> Self;

    fn negate(&self) -> Self;

    fn subtract(&self, rhs: &Self) -> Self {
        self.add(&rhs.negate())
    }
}

pub trait Ring: AbelianGroup {
    fn one() -> Self;

    fn multiply(&self, rhs: &Self) -> Self;
}

pub trait Field: Ring {
    /// Fails with [`ArithmeticError::DivisionByZero`] for an exact zero divisor.
    fn divide(&self, rhs: &Self) -> Result<Self>;

    fn inverse(&self) -> Result<Self>;
}

/// Numbers carrying a total order in which NaN sits above `+∞`.
///
/// `min` and `max` come from [`Ord`].
pub trait ComparableNumber: Ord + Sized {
    fn is_nan(&self) -> bool;

    fn is_positive_infinity(&self) -> bool;

    fn is_negative_infinity(&self) -> bool;

    fn is_infinite(&self) -> bool {
        self.is_positive_infinity() || self.is_negative_infinity()
    }

    /// `-1`, `0` or `1`. Infinities have their own sign, NaN has none.
    fn signum(&self) -> Result<i8>;

    fn abs(&self) -> Self;

    /// `other - self`.
    fn distance(&self, other: &Self) -> Self;
}

/// Lossless one-way conversion up the tower.
pub trait WidensTo<T> {
    fn widen(&self) -> T;
}

/// Operator sugar over borrowed values: `&a + &b` is `a.add(&b)` and so on.
macro_rules! impl_ring_ops {
    ($($ty:ty),+ $(,)?) => {$(
        impl std::ops::Add for &$ty {
            type Output = $ty;

            fn add(self, rhs: Self) -> $ty {
                $crate::algebra::AbelianGroup::add(self, rhs)
            }
        }

        impl std::ops::Sub for &$ty {
            type Output = $ty;

            fn sub(self, rhs: Self) -> $ty {
                $crate::algebra::AbelianGroup::subtract(self, rhs)
            }
        }

        impl std::ops::Mul for &$ty {
            type Output = $ty;

            fn mul(self, rhs: Self) -> $ty {
                $crate::algebra::Ring::multiply(self, rhs)
            }
        }

        impl std::ops::Neg for &$ty {
            type Output = $ty;

            fn neg(self) -> $ty {
                $crate::algebra::AbelianGroup::negate(self)
            }
        }
    )+};
}

/// `&a / &b`, fallible like [`Field::divide`].
macro_rules! impl_field_ops {
    ($($ty:ty),+ $(,)?) => {$(
        impl std::ops::Div for &$ty {
            type Output = $crate::Result<$ty>;

            fn div(self, rhs: Self) -> Self::Output {
                $crate::algebra::Field::divide(self, rhs)
            }
        }
    )+};
}

pub(crate) use {impl_field_ops, impl_ring_ops};

/// `base` raised to `exponent` by repeated squaring.
pub fn power<R: Ring + Clone>(base: &R, exponent: u32) -> R {
    let mut result = R::one();
    let mut base = base.clone();
    let mut exponent = exponent;

    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result.multiply(&base);
        }
        exponent >>= 1;
        if exponent > 0 {
            base = base.multiply(&base);
        }
    }

    result
}

/// Sum of the pairwise products, zero for empty slices.
pub fn dot<R: Ring>(lhs: &[R], rhs: &[R]) -> R {
    lhs.iter()
        .zip(rhs)
        .fold(R::zero(), |acc, (a, b)| acc.add(&a.multiply(b)))
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Away from zero.
    Up,
    /// Towards zero.
    Down,
    /// Towards positive infinity.
    Ceiling,
    /// Towards negative infinity.
    Floor,
    /// Nearest neighbour, ties away from zero.
    #[default]
    HalfUp,
    /// Nearest neighbour, ties towards zero.
    HalfDown,
    /// Nearest neighbour, ties to the even neighbour.
    HalfEven,
    /// The value must already be exact.
    Unnecessary,
    HalfCeiling,
    HalfFloor,
    HalfOdd,
}

impl RoundingMode {
    /// Rounds `numer / denom` to an integer. `denom` must not be zero.
    pub(crate) fn divide(
        self,
        numer: &BigInt,
        denom: &BigInt,
    ) -> std::result::Result<BigInt, ArithmeticError> {
        let (numer, denom) = match denom.is_negative() {
            true => (-numer, -denom),
            _ => (numer.clone(), denom.clone()),
        };

        // truncated division, the remainder takes the sign of numer
        let (quotient, remainder) = numer.div_rem(&denom);
        if remainder.is_zero() {
            return Ok(quotient);
        }

        let positive = numer.is_positive();
        let half = (remainder.abs() * 2u8).cmp(&denom);
        let past_half = half == Ordering::Greater;
        let tie = half == Ordering::Equal;

        let away = match self {
            Self::Up => true,
            Self::Down => false,
            Self::Ceiling => positive,
            Self::Floor => !positive,
            Self::HalfUp => !matches!(half, Ordering::Less),
            Self::HalfDown => past_half,
            Self::HalfEven => past_half || (tie && quotient.is_odd()),
            Self::HalfOdd => past_half || (tie && quotient.is_even()),
            Self::HalfCeiling => past_half || (tie && positive),
            Self::HalfFloor => past_half || (tie && !positive),
            Self::Unnecessary => return Err(ArithmeticError::RoundingNecessary),
        };

        Ok(match (away, positive) {
            (true, true) => quotient + 1u8,
            (true, false) => quotient - 1u8,
            _ => quotient,
        })
    }

    /// Rounding that can never fail, used for precision-limited division.
    pub(crate) fn half_up(numer: &BigInt, denom: &BigInt) -> BigInt {
        let (numer, denom) = match denom.is_negative() {
            true => (-numer, -denom),
            _ => (numer.clone(), denom.clone()),
        };
        let (quotient, remainder) = numer.div_rem(&denom);

        match (remainder.abs() * 2u8) >= denom {
            true if numer.is_negative() => quotient - 1u8,
            true => quotient + 1u8,
            _ => quotient,
        }
    }
}
