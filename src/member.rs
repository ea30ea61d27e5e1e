//! Mixed-type arithmetic over every number in the crate.
//!
//! [`Member`] holds any fixed or exact number. Two members of the same fixed
//! variant are combined with that variant's own arithmetic; every other pair
//! is lifted into the exact tower and widened to the narrowest type that holds
//! both operands:
//!
//! ```text
//! ExactInteger -> ExactRational -> ExactReal -> ExactComplex -> ExactQuaternion
//!                                                           \-> ExactSupernumber
//! ```
//!
//! Quaternions and supernumbers don't widen into each other, so mixing them is
//! the one pairing that fails. Ordering stops at the reals.

use std::{cmp::Ordering, fmt::Display};

use crate::algebra::{AbelianGroup, ComparableNumber, Field, Ring, WidensTo};
use crate::error::NumberError;
use crate::exact::{
    ExactComplex, ExactInteger, ExactQuaternion, ExactRational, ExactReal, ExactSupernumber,
};
use crate::fixed::{Double, Float, Integer, Long, Rational};
use crate::Result;

#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Integer(Integer),
    Long(Long),
    Rational(Rational),
    Float(Float),
    Double(Double),
    ExactInteger(ExactInteger),
    ExactRational(ExactRational),
    ExactReal(ExactReal),
    ExactComplex(ExactComplex),
    ExactQuaternion(ExactQuaternion),
    ExactSupernumber(ExactSupernumber),
}

/// Position of a member in the exact tower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Rank {
    Integer,
    Rational,
    Real,
    Complex,
    Quaternion,
    Supernumber,
}

impl Rank {
    /// The narrowest rank both sides widen to, if any.
    fn join(self, other: Self) -> Option<Self> {
        match (self, other) {
            (Self::Quaternion, Self::Supernumber) | (Self::Supernumber, Self::Quaternion) => None,
            _ => Some(self.max(other)),
        }
    }
}

/// `add`, `subtract` and `multiply` share their dispatch.
macro_rules! impl_member_op {
    ($(#[$meta:meta])* $method:ident) => {
        $(#[$meta])*
        pub fn $method(&self, rhs: &Self) -> Result<Self> {
            let value = match (self, rhs) {
                (Self::Integer(a), Self::Integer(b)) => Self::Integer(a.$method(b)),
                (Self::Long(a), Self::Long(b)) => Self::Long(a.$method(b)),
                (Self::Rational(a), Self::Rational(b)) => Self::Rational(a.$method(b)),
                (Self::Float(a), Self::Float(b)) => Self::Float(a.$method(b)),
                (Self::Double(a), Self::Double(b)) => Self::Double(a.$method(b)),
                _ => match self.coerce(rhs, Rank::Integer, stringify!($method))? {
                    (Self::ExactInteger(a), Self::ExactInteger(b)) => {
                        Self::ExactInteger(a.$method(&b))
                    }
                    (Self::ExactRational(a), Self::ExactRational(b)) => {
                        Self::ExactRational(a.$method(&b))
                    }
                    (Self::ExactReal(a), Self::ExactReal(b)) => Self::ExactReal(a.$method(&b)),
                    (Self::ExactComplex(a), Self::ExactComplex(b)) => {
                        Self::ExactComplex(a.$method(&b))
                    }
                    (Self::ExactQuaternion(a), Self::ExactQuaternion(b)) => {
                        Self::ExactQuaternion(a.$method(&b))
                    }
                    (Self::ExactSupernumber(a), Self::ExactSupernumber(b)) => {
                        Self::ExactSupernumber(a.$method(&b))
                    }
                    (a, b) => return Err(a.mismatch(&b, stringify!($method))),
                },
            };

            Ok(value)
        }
    };
}

impl Member {
    /// Name of the variant, as used in error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "Integer",
            Self::Long(_) => "Long",
            Self::Rational(_) => "Rational",
            Self::Float(_) => "Float",
            Self::Double(_) => "Double",
            Self::ExactInteger(_) => "ExactInteger",
            Self::ExactRational(_) => "ExactRational",
            Self::ExactReal(_) => "ExactReal",
            Self::ExactComplex(_) => "ExactComplex",
            Self::ExactQuaternion(_) => "ExactQuaternion",
            Self::ExactSupernumber(_) => "ExactSupernumber",
        }
    }

    pub const fn is_fixed(&self) -> bool {
        matches!(
            self,
            Self::Integer(_) | Self::Long(_) | Self::Rational(_) | Self::Float(_) | Self::Double(_)
        )
    }

    const fn rank(&self) -> Rank {
        match self {
            Self::Integer(_) | Self::Long(_) | Self::ExactInteger(_) => Rank::Integer,
            Self::Rational(_) | Self::ExactRational(_) => Rank::Rational,
            Self::Float(_) | Self::Double(_) | Self::ExactReal(_) => Rank::Real,
            Self::ExactComplex(_) => Rank::Complex,
            Self::ExactQuaternion(_) => Rank::Quaternion,
            Self::ExactSupernumber(_) => Rank::Supernumber,
        }
    }

    pub fn is_nan(&self) -> bool {
        match self {
            Self::Integer(v) => v.is_nan(),
            Self::Long(v) => v.is_nan(),
            Self::Rational(v) => v.is_nan(),
            Self::Float(v) => v.is_nan(),
            Self::Double(v) => v.is_nan(),
            Self::ExactInteger(v) => v.is_nan(),
            Self::ExactRational(v) => v.is_nan(),
            Self::ExactReal(v) => v.is_nan(),
            Self::ExactComplex(v) => v.is_nan(),
            Self::ExactQuaternion(v) => v.is_nan(),
            Self::ExactSupernumber(v) => v.is_nan(),
        }
    }

    pub fn is_infinite(&self) -> bool {
        match self {
            Self::Integer(v) => v.is_infinite(),
            Self::Long(v) => v.is_infinite(),
            Self::Rational(v) => v.is_infinite(),
            Self::Float(v) => v.is_infinite(),
            Self::Double(v) => v.is_infinite(),
            Self::ExactInteger(v) => v.is_infinite(),
            Self::ExactRational(v) => v.is_infinite(),
            Self::ExactReal(v) => v.is_infinite(),
            Self::ExactComplex(v) => v.is_infinite(),
            Self::ExactQuaternion(v) => v.is_infinite(),
            Self::ExactSupernumber(v) => v.is_infinite(),
        }
    }

    /// The exact counterpart of a fixed member; exact members are cloned.
    pub fn to_exact(&self) -> Self {
        match self {
            Self::Integer(v) => Self::ExactInteger(v.widen()),
            Self::Long(v) => Self::ExactInteger(v.widen()),
            Self::Rational(v) => Self::ExactRational(v.widen()),
            Self::Float(v) => Self::ExactReal(v.widen()),
            Self::Double(v) => Self::ExactReal(v.widen()),
            exact => exact.clone(),
        }
    }

    /// Widens an exact member up to `rank`. Members at or above `rank` are
    /// returned unchanged.
    fn widen(self, rank: Rank) -> Self {
        if self.rank() >= rank {
            return self;
        }

        match self {
            Self::ExactInteger(v) => Self::ExactRational(v.widen()).widen(rank),
            Self::ExactRational(v) => Self::ExactReal(v.widen()).widen(rank),
            Self::ExactReal(v) => Self::ExactComplex(v.widen()).widen(rank),
            Self::ExactComplex(v) if rank == Rank::Supernumber => Self::ExactSupernumber(v.widen()),
            Self::ExactComplex(v) => Self::ExactQuaternion(v.widen()),
            fixed if fixed.is_fixed() => fixed.to_exact().widen(rank),
            other => other,
        }
    }

    /// Lifts both operands into the exact tower at their common rank, and at
    /// least at `floor`.
    fn coerce(&self, other: &Self, floor: Rank, operation: &str) -> Result<(Self, Self)> {
        let rank = self
            .rank()
            .join(other.rank())
            .ok_or_else(|| self.mismatch(other, operation))?
            .max(floor);

        Ok((self.to_exact().widen(rank), other.to_exact().widen(rank)))
    }

    fn mismatch(&self, other: &Self, operation: &str) -> NumberError {
        NumberError::invalid_argument(operation, self.kind(), other.kind())
    }

    impl_member_op!(add);
    impl_member_op!(subtract);
    impl_member_op!(multiply);

    /// Division. Integers are divided as exact rationals.
    pub fn divide(&self, rhs: &Self) -> Result<Self> {
        let value = match (self, rhs) {
            (Self::Rational(a), Self::Rational(b)) => Self::Rational(a.divide(b)?),
            (Self::Float(a), Self::Float(b)) => Self::Float(a.divide(b)?),
            (Self::Double(a), Self::Double(b)) => Self::Double(a.divide(b)?),
            _ => match self.coerce(rhs, Rank::Rational, "divide")? {
                (Self::ExactRational(a), Self::ExactRational(b)) => {
                    Self::ExactRational(a.divide(&b)?)
                }
                (Self::ExactReal(a), Self::ExactReal(b)) => Self::ExactReal(a.divide(&b)?),
                (Self::ExactComplex(a), Self::ExactComplex(b)) => Self::ExactComplex(a.divide(&b)?),
                (Self::ExactQuaternion(a), Self::ExactQuaternion(b)) => {
                    Self::ExactQuaternion(a.divide(&b)?)
                }
                (Self::ExactSupernumber(a), Self::ExactSupernumber(b)) => {
                    Self::ExactSupernumber(a.divide(&b)?)
                }
                (a, b) => return Err(a.mismatch(&b, "divide")),
            },
        };

        Ok(value)
    }

    pub fn negate(&self) -> Self {
        match self {
            Self::Integer(v) => Self::Integer(v.negate()),
            Self::Long(v) => Self::Long(v.negate()),
            Self::Rational(v) => Self::Rational(v.negate()),
            Self::Float(v) => Self::Float(v.negate()),
            Self::Double(v) => Self::Double(v.negate()),
            Self::ExactInteger(v) => Self::ExactInteger(v.negate()),
            Self::ExactRational(v) => Self::ExactRational(v.negate()),
            Self::ExactReal(v) => Self::ExactReal(v.negate()),
            Self::ExactComplex(v) => Self::ExactComplex(v.negate()),
            Self::ExactQuaternion(v) => Self::ExactQuaternion(v.negate()),
            Self::ExactSupernumber(v) => Self::ExactSupernumber(v.negate()),
        }
    }

    /// Orders two real-valued members in `-∞ < finite < +∞ < NaN`.
    pub fn compare(&self, rhs: &Self) -> Result<Ordering> {
        let ordering = match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Long(a), Self::Long(b)) => a.cmp(b),
            (Self::Rational(a), Self::Rational(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.cmp(b),
            (Self::Double(a), Self::Double(b)) => a.cmp(b),
            _ if self.rank().max(rhs.rank()) >= Rank::Complex => {
                return Err(self.mismatch(rhs, "compare"));
            }
            _ => match self.coerce(rhs, Rank::Integer, "compare")? {
                (Self::ExactInteger(a), Self::ExactInteger(b)) => a.cmp(&b),
                (Self::ExactRational(a), Self::ExactRational(b)) => a.cmp(&b),
                (Self::ExactReal(a), Self::ExactReal(b)) => a.cmp(&b),
                (a, b) => return Err(a.mismatch(&b, "compare")),
            },
        };

        Ok(ordering)
    }
}

macro_rules! impl_from_number {
    ($($variant:ident),+ $(,)?) => {$(
        impl From<$variant> for Member {
            fn from(value: $variant) -> Self {
                Self::$variant(value)
            }
        }
    )+};
}

impl_from_number!(
    Integer,
    Long,
    Rational,
    Float,
    Double,
    ExactInteger,
    ExactRational,
    ExactReal,
    ExactComplex,
    ExactQuaternion,
    ExactSupernumber,
);

impl Display for Member {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Long(v) => write!(f, "{v}"),
            Self::Rational(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::ExactInteger(v) => write!(f, "{v}"),
            Self::ExactRational(v) => write!(f, "{v}"),
            Self::ExactReal(v) => write!(f, "{v}"),
            Self::ExactComplex(v) => write!(f, "{v}"),
            Self::ExactQuaternion(v) => write!(f, "{v}"),
            Self::ExactSupernumber(v) => write!(f, "{v}"),
        }
    }
}
