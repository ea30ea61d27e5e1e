//! Fixed-width numbers backed by machine types.
//!
//! They follow the same algebraic contract as the exact tower but keep the
//! semantics of the underlying hardware type: IEEE-754 for [`Double`] and
//! [`Float`], saturation for [`Integer`], [`Long`] and [`Rational`]. The
//! integer-backed types read their `MIN` and `MAX` values as `-∞` and `+∞`.

pub mod double;
pub mod integer;
pub mod rational;

pub use double::{Double, Float};
pub use integer::{Integer, Long};
pub use rational::Rational;
