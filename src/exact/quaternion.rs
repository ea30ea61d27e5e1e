//! Quaternions `re + xi + yj + zk` over [`ExactReal`] components.
//!
//! Multiplication is not commutative: `ij = k` but `ji = -k`. Like complex
//! numbers, a quaternion is NaN or infinite when any of its components is.

use std::{fmt::Display, sync::LazyLock};

use crate::algebra::{
    impl_field_ops, impl_ring_ops, AbelianGroup, ComparableNumber, Field, Ring, WidensTo,
};
use crate::error::NumberError;
use crate::exact::{real, ExactComplex, ExactReal};
use crate::Result;

pub static ZERO: LazyLock<ExactQuaternion> =
    LazyLock::new(|| ExactQuaternion::from_parts([0, 0, 0, 0]));
pub static ONE: LazyLock<ExactQuaternion> =
    LazyLock::new(|| ExactQuaternion::from_parts([1, 0, 0, 0]));
pub static I: LazyLock<ExactQuaternion> =
    LazyLock::new(|| ExactQuaternion::from_parts([0, 1, 0, 0]));
pub static J: LazyLock<ExactQuaternion> =
    LazyLock::new(|| ExactQuaternion::from_parts([0, 0, 1, 0]));
pub static K: LazyLock<ExactQuaternion> =
    LazyLock::new(|| ExactQuaternion::from_parts([0, 0, 0, 1]));

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExactQuaternion {
    re: ExactReal,
    i: ExactReal,
    j: ExactReal,
    k: ExactReal,
}

impl ExactQuaternion {
    pub fn new(re: ExactReal, i: ExactReal, j: ExactReal, k: ExactReal) -> Self {
        Self { re, i, j, k }
    }

    pub fn from_parts(parts: [i32; 4]) -> Self {
        let [re, i, j, k] = parts.map(ExactReal::from);
        Self::new(re, i, j, k)
    }

    /// `a + bj`, i.e. `a.re + a.im i + b.re j + b.im k`.
    pub fn from_complex_pair(a: &ExactComplex, b: &ExactComplex) -> Self {
        Self::new(
            a.real().clone(),
            a.imag().clone(),
            b.real().clone(),
            b.imag().clone(),
        )
    }

    pub fn real(&self) -> &ExactReal {
        &self.re
    }

    /// The `i`, `j` and `k` components.
    pub fn imag(&self) -> [&ExactReal; 3] {
        [&self.i, &self.j, &self.k]
    }

    fn components(&self) -> [&ExactReal; 4] {
        [&self.re, &self.i, &self.j, &self.k]
    }

    fn map(&self, f: impl Fn(&ExactReal) -> ExactReal) -> Self {
        Self::new(f(&self.re), f(&self.i), f(&self.j), f(&self.k))
    }

    fn zip(&self, other: &Self, f: impl Fn(&ExactReal, &ExactReal) -> ExactReal) -> Self {
        Self::new(
            f(&self.re, &other.re),
            f(&self.i, &other.i),
            f(&self.j, &other.j),
            f(&self.k, &other.k),
        )
    }

    pub fn is_nan(&self) -> bool {
        self.components().iter().any(|c| c.is_nan())
    }

    pub fn is_infinite(&self) -> bool {
        self.components().iter().any(|c| c.is_infinite())
    }

    pub fn is_zero(&self) -> bool {
        self.components().iter().all(|c| c.is_zero())
    }

    pub fn conjugate(&self) -> Self {
        Self::new(
            self.re.clone(),
            self.i.negate(),
            self.j.negate(),
            self.k.negate(),
        )
    }

    /// `re² + i² + j² + k²`, exact.
    pub fn sum_squares(&self) -> ExactReal {
        self.components()
            .iter()
            .fold(real::ZERO.clone(), |acc, c| acc.add(&c.multiply(c)))
    }

    /// Euclidean length of the double projection.
    pub fn norm(&self) -> f64 {
        self.sum_squares().to_f64().sqrt()
    }

    pub fn add_real(&self, re: &ExactReal) -> Self {
        Self::new(self.re.add(re), self.i.clone(), self.j.clone(), self.k.clone())
    }

    pub fn subtract_real(&self, re: &ExactReal) -> Self {
        Self::new(
            self.re.subtract(re),
            self.i.clone(),
            self.j.clone(),
            self.k.clone(),
        )
    }

    /// Multiplies every component by a real factor.
    pub fn scale(&self, factor: &ExactReal) -> Self {
        self.map(|c| c.multiply(factor))
    }

    pub fn divide_real(&self, divisor: &ExactReal) -> Result<Self> {
        Ok(Self::new(
            self.re.divide(divisor)?,
            self.i.divide(divisor)?,
            self.j.divide(divisor)?,
            self.k.divide(divisor)?,
        ))
    }
}

impl AbelianGroup for ExactQuaternion {
    fn zero() -> Self {
        ZERO.clone()
    }

    fn add(&self, rhs: &Self) -> Self {
        self.zip(rhs, |a, b| a.add(b))
    }

    fn subtract(&self, rhs: &Self) -> Self {
        self.zip(rhs, |a, b| a.subtract(b))
    }

    fn negate(&self) -> Self {
        self.map(|c| c.negate())
    }
}

impl Ring for ExactQuaternion {
    fn one() -> Self {
        ONE.clone()
    }

    /// Hamilton product.
    fn multiply(&self, rhs: &Self) -> Self {
        let [a0, a1, a2, a3] = self.components();
        let [b0, b1, b2, b3] = rhs.components();
        let product = |x: &ExactReal, y: &ExactReal| x.multiply(y);

        Self::new(
            product(a0, b0)
                .subtract(&product(a1, b1))
                .subtract(&product(a2, b2))
                .subtract(&product(a3, b3)),
            product(a0, b1)
                .add(&product(a1, b0))
                .add(&product(a2, b3))
                .subtract(&product(a3, b2)),
            product(a0, b2)
                .add(&product(a2, b0))
                .add(&product(a3, b1))
                .subtract(&product(a1, b3)),
            product(a0, b3)
                .add(&product(a3, b0))
                .add(&product(a1, b2))
                .subtract(&product(a2, b1)),
        )
    }
}

impl Field for ExactQuaternion {
    /// Right division, `self × rhs⁻¹`.
    fn divide(&self, rhs: &Self) -> Result<Self> {
        Ok(self.multiply(&rhs.inverse()?))
    }

    fn inverse(&self) -> Result<Self> {
        match self.is_zero() {
            true => Err(NumberError::division_by_zero()),
            _ => self.conjugate().divide_real(&self.sum_squares()),
        }
    }
}

impl_ring_ops!(ExactQuaternion);
impl_field_ops!(ExactQuaternion);

impl From<&ExactComplex> for ExactQuaternion {
    fn from(value: &ExactComplex) -> Self {
        value.widen()
    }
}

impl WidensTo<ExactQuaternion> for ExactComplex {
    fn widen(&self) -> ExactQuaternion {
        ExactQuaternion::from_complex_pair(self, &ExactComplex::zero())
    }
}

impl Display for ExactQuaternion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_nan() {
            return f.write_str("NaN");
        }

        write!(f, "{}", self.re)?;
        for (component, unit) in [(&self.i, 'i'), (&self.j, 'j'), (&self.k, 'k')] {
            let sign = match component.signum() {
                Ok(-1) => "",
                _ => "+",
            };
            write!(f, "{sign}{component}{unit}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quat(parts: [i32; 4]) -> ExactQuaternion {
        ExactQuaternion::from_parts(parts)
    }

    #[test]
    fn test_unit_products() {
        assert_eq!(I.multiply(&J), *K);
        assert_eq!(J.multiply(&K), *I);
        assert_eq!(K.multiply(&I), *J);
        assert_eq!(J.multiply(&I), K.negate());
        assert_eq!(I.multiply(&I), ONE.negate());
        assert_eq!(
            quat([0, 1, 0, 0]).multiply(&quat([0, 0, 1, 0])),
            quat([0, 0, 0, 1])
        );
    }

    #[test]
    fn test_general_product() {
        // (1 + 2i + 3j + 4k)(5 + 6i + 7j + 8k)
        assert_eq!(
            &quat([1, 2, 3, 4]) * &quat([5, 6, 7, 8]),
            quat([-60, 12, 30, 24])
        );
        assert_eq!(
            &quat([5, 6, 7, 8]) * &quat([1, 2, 3, 4]),
            quat([-60, 20, 14, 32])
        );
    }

    #[test]
    fn test_group_operations() {
        assert_eq!(&quat([1, 2, 3, 4]) + &quat([1, -1, 1, -1]), quat([2, 1, 4, 3]));
        assert_eq!(&quat([1, 2, 3, 4]) - &quat([1, -1, 1, -1]), quat([0, 3, 2, 5]));
        assert_eq!(-&quat([1, -2, 3, 0]), quat([-1, 2, -3, 0]));
        assert_eq!(quat([1, 2, 3, 4]).conjugate(), quat([1, -2, -3, -4]));
    }

    #[test]
    fn test_inverse_and_division() {
        let q = quat([1, 1, 1, 1]);
        let inverse = q.inverse().unwrap();
        assert_eq!(inverse.multiply(&q), *ONE);
        assert_eq!(q.multiply(&inverse), *ONE);

        let product = &quat([1, 2, 3, 4]) * &q;
        assert_eq!(&product / &q, Ok(quat([1, 2, 3, 4])));
        assert!(ZERO.inverse().is_err());
        assert!(q.divide(&ZERO).is_err());
    }

    #[test]
    fn test_norm_and_sum_squares() {
        assert_eq!(quat([1, 2, 2, 4]).sum_squares(), ExactReal::from(25));
        assert_eq!(quat([1, 2, 2, 4]).norm(), 5.0);
        assert_eq!(quat([1, 2, 3, 4]).scale(&ExactReal::from(2)), quat([2, 4, 6, 8]));
    }

    #[test]
    fn test_structural_sentinels() {
        let infinite = ExactQuaternion::new(
            ExactReal::from(1),
            ExactReal::negative_infinity(),
            ExactReal::from(0),
            ExactReal::from(0),
        );
        assert!(infinite.is_infinite());
        assert!(!infinite.is_nan());
        assert!(infinite.multiply(&ZERO).is_nan());
    }

    #[test]
    fn test_widening_from_complex() {
        let z = ExactComplex::new(ExactReal::from(3), ExactReal::from(-4));
        assert_eq!(ExactQuaternion::from(&z), quat([3, -4, 0, 0]));
    }

    #[test]
    fn test_display() {
        assert_eq!(quat([1, -2, 0, 3]).to_string(), "1-2i+0j+3k");
    }
}
