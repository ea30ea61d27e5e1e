use std::{
    cmp::Ordering,
    fmt::Display,
    hash::{Hash, Hasher},
    str::FromStr,
};

use crate::algebra::{
    impl_field_ops, impl_ring_ops, AbelianGroup, ComparableNumber, Field, Ring, WidensTo,
};
use crate::core::sentinel::Sentinel;
use crate::error::{ArithmeticError, NumberError};
use crate::exact::{ExactComplex, ExactReal};
use crate::Result;

/// Elementary functions forwarded to the primitive.
macro_rules! forward_functions {
    ($($(#[$meta:meta])* $name:ident => $method:ident),+ $(,)?) => {$(
        $(#[$meta])*
        #[inline]
        pub fn $name(self) -> Self {
            Self(self.0.$method())
        }
    )+};
}

macro_rules! fixed_float {
    ($(#[$meta:meta])* $name:ident, $prim:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name(pub $prim);

        impl $name {
            pub const ZERO: Self = Self(0.0);
            pub const ONE: Self = Self(1.0);
            pub const NAN: Self = Self(<$prim>::NAN);
            pub const POSITIVE_INFINITY: Self = Self(<$prim>::INFINITY);
            pub const NEGATIVE_INFINITY: Self = Self(<$prim>::NEG_INFINITY);

            pub const fn new(value: $prim) -> Self {
                Self(value)
            }

            pub const fn value(self) -> $prim {
                self.0
            }

            /// Rounding error carried by a value of this sign: the machine
            /// epsilon over `√2`, with the sign of `self`.
            pub fn epsilon(self) -> Self {
                Self((<$prim>::EPSILON / (2.0 as $prim).sqrt()).copysign(self.0))
            }

            forward_functions! {
                exp => exp,
                /// Natural logarithm.
                ln => ln,
                sin => sin,
                cos => cos,
                tan => tan,
                sinh => sinh,
                cosh => cosh,
                tanh => tanh,
                asin => asin,
                acos => acos,
                atan => atan,
                asinh => asinh,
                acosh => acosh,
                atanh => atanh,
            }

            /// Bits used for hashing: one pattern for every NaN and one for
            /// both zeroes.
            fn canonical_bits(self) -> impl Hash {
                match self.0 {
                    v if v.is_nan() => <$prim>::NAN.to_bits(),
                    v if v == 0.0 => (0.0 as $prim).to_bits(),
                    v => v.to_bits(),
                }
            }
        }

        impl AbelianGroup for $name {
            fn zero() -> Self {
                Self::ZERO
            }

            fn add(&self, rhs: &Self) -> Self {
                Self(self.0 + rhs.0)
            }

            fn subtract(&self, rhs: &Self) -> Self {
                Self(self.0 - rhs.0)
            }

            fn negate(&self) -> Self {
                Self(-self.0)
            }
        }

        impl Ring for $name {
            fn one() -> Self {
                Self::ONE
            }

            fn multiply(&self, rhs: &Self) -> Self {
                Self(self.0 * rhs.0)
            }
        }

        /// Hardware division: a zero divisor yields an infinity or NaN.
        impl Field for $name {
            fn divide(&self, rhs: &Self) -> Result<Self> {
                Ok(Self(self.0 / rhs.0))
            }

            fn inverse(&self) -> Result<Self> {
                Ok(Self(1.0 / self.0))
            }
        }

        impl_ring_ops!($name);
        impl_field_ops!($name);

        impl ComparableNumber for $name {
            fn is_nan(&self) -> bool {
                self.0.is_nan()
            }

            fn is_positive_infinity(&self) -> bool {
                self.0 == <$prim>::INFINITY
            }

            fn is_negative_infinity(&self) -> bool {
                self.0 == <$prim>::NEG_INFINITY
            }

            fn signum(&self) -> Result<i8> {
                match self.0 {
                    v if v.is_nan() => Err(NumberError::Arithmetic(ArithmeticError::UndefinedSign)),
                    v if v > 0.0 => Ok(1),
                    v if v < 0.0 => Ok(-1),
                    _ => Ok(0),
                }
            }

            fn abs(&self) -> Self {
                Self(self.0.abs())
            }

            fn distance(&self, other: &Self) -> Self {
                Self(other.0 - self.0)
            }
        }

        /// `-∞ < finite < +∞ < NaN`, with NaN equal to itself and `-0 == 0`.
        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                match (self.0.is_nan(), other.0.is_nan()) {
                    (true, true) => Ordering::Equal,
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                    _ => self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal),
                }
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.cmp(other) == Ordering::Equal
            }
        }

        impl Eq for $name {}

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.canonical_bits().hash(state);
            }
        }

        impl From<$prim> for $name {
            fn from(value: $prim) -> Self {
                Self(value)
            }
        }

        impl WidensTo<ExactReal> for $name {
            fn widen(&self) -> ExactReal {
                ExactReal::from(self.0)
            }
        }

        impl WidensTo<ExactComplex> for $name {
            fn widen(&self) -> ExactComplex {
                ExactComplex::from_real(ExactReal::from(self.0))
            }
        }

        impl FromStr for $name {
            type Err = NumberError;

            fn from_str(s: &str) -> Result<Self> {
                match Sentinel::parse(s) {
                    Some(Sentinel::NaN) => Ok(Self::NAN),
                    Some(Sentinel::PositiveInfinity) => Ok(Self::POSITIVE_INFINITY),
                    Some(Sentinel::NegativeInfinity) => Ok(Self::NEGATIVE_INFINITY),
                    _ => s
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
                    v if v.is_nan() => f.write_str("NaN"),
                    v if v == <$prim>::INFINITY => f.write_str("Infinity"),
                    v if v == <$prim>::NEG_INFINITY => f.write_str("-Infinity"),
                    v => write!(f, "{v}"),
                }
            }
        }
    };
}

fixed_float!(
    /// Double precision IEEE-754 number.
    Double,
    f64
);

fixed_float!(
    /// Single precision IEEE-754 number.
    Float,
    f32
);

impl From<Float> for Double {
    fn from(value: Float) -> Self {
        Self(f64::from(value.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ieee_arithmetic() {
        assert_eq!(&Double(1.5) + &Double(2.25), Double(3.75));
        assert_eq!(&Double(1.0) - &Double(4.0), Double(-3.0));
        assert_eq!(&Float(1.5) * &Float(-2.0), Float(-3.0));
        assert_eq!(&Double(1.0) / &Double(0.0), Ok(Double::POSITIVE_INFINITY));
        assert!(Double(0.0).divide(&Double(0.0)).unwrap().is_nan());
        assert_eq!(Double(4.0).inverse(), Ok(Double(0.25)));
        assert!(Double::POSITIVE_INFINITY
            .add(&Double::NEGATIVE_INFINITY)
            .is_nan());
    }

    #[test]
    fn test_tower_ordering() {
        let mut values = vec![
            Double::NAN,
            Double::POSITIVE_INFINITY,
            Double(1.0),
            Double::NEGATIVE_INFINITY,
            Double(-1.0),
            Double(0.0),
        ];
        values.sort();

        assert_eq!(
            values,
            vec![
                Double::NEGATIVE_INFINITY,
                Double(-1.0),
                Double(0.0),
                Double(1.0),
                Double::POSITIVE_INFINITY,
                Double::NAN,
            ]
        );
        assert_eq!(Double::NAN, Double::NAN);
        assert_eq!(Double(-0.0), Double(0.0));
        assert_eq!(Float(2.0).max(Float::NAN), Float::NAN);
    }

    #[test]
    fn test_hash_agrees_with_eq() {
        let set: HashSet<Double> = [Double(0.0), Double(-0.0), Double::NAN, Double(f64::NAN)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_signum_and_distance() {
        assert_eq!(Double(-3.0).signum(), Ok(-1));
        assert_eq!(Double(0.0).signum(), Ok(0));
        assert!(Double::NAN.signum().is_err());
        assert_eq!(Double(2.0).distance(&Double(5.5)), Double(3.5));
        assert_eq!(Float(-2.5).abs(), Float(2.5));
    }

    #[test]
    fn test_epsilon_and_functions() {
        assert!(Double(-2.0).epsilon().0 < 0.0);
        assert!(Double(2.0).epsilon().0 < f64::EPSILON);
        assert_eq!(Double(0.0).exp(), Double::ONE);
        assert_eq!(Double(1.0).ln(), Double::ZERO);
    }

    #[test]
    fn test_widening_is_exact() {
        let widened: ExactReal = Double(0.1).widen();
        assert_eq!(widened, ExactReal::from(0.1f64));
        assert_ne!(widened, "0.1".parse::<ExactReal>().unwrap());

        let infinite: ExactReal = Float::NEGATIVE_INFINITY.widen();
        assert_eq!(infinite, ExactReal::negative_infinity());
        assert_eq!(Double::from(Float(0.5)), Double(0.5));
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("-Infinity".parse::<Double>(), Ok(Double::NEGATIVE_INFINITY));
        assert_eq!(" 2.5 ".parse::<Float>(), Ok(Float(2.5)));
        assert!("two".parse::<Double>().is_err());

        assert_eq!(Double::POSITIVE_INFINITY.to_string(), "Infinity");
        assert_eq!(Double::NAN.to_string(), "NaN");
        assert_eq!(Double(1.25).to_string(), "1.25");
    }
}
