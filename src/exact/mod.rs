//! Arbitrary precision numbers with sentinel `NaN` and signed infinities.
//!
//! The tower widens left to right: integer, rational, real, complex,
//! quaternion, supernumber.

pub mod complex;
pub mod integer;
pub mod quaternion;
pub mod rational;
pub mod real;
pub mod supernumber;

pub use complex::ExactComplex;
pub use integer::ExactInteger;
pub use quaternion::ExactQuaternion;
pub use rational::ExactRational;
pub use real::ExactReal;
pub use supernumber::ExactSupernumber;
