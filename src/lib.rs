//! An exact-precision numeric tower.
//!
//! Integers, rationals and decimals of unbounded precision extended with
//! `+∞`, `-∞` and NaN, complex numbers, quaternions and supernumbers built on
//! top of them, fixed-width counterparts over machine numbers, and [`Member`],
//! a tagged union that performs mixed-type arithmetic by widening.

use error::NumberError;

mod core;
pub mod algebra;
pub mod error;
pub mod exact;
pub mod fixed;
pub mod member;

pub use crate::core::log;
pub use algebra::{AbelianGroup, ComparableNumber, Field, Ring, RoundingMode, WidensTo};
pub use exact::{
    ExactComplex, ExactInteger, ExactQuaternion, ExactRational, ExactReal, ExactSupernumber,
};
pub use member::Member;

pub type Result<T> = std::result::Result<T, NumberError>;

/// Significant decimal digits kept when a division doesn't terminate.
pub const DEFAULT_PRECISION: u32 = 128;

/// Largest power of ten, either way, an exact real can be built or rounded
/// with. Parsed exponents and explicit scales past it are rejected.
pub const MAX_EXPONENT: u32 = 1 << 20;
