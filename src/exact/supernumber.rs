//! Supernumbers over four Grassmann generators `e1..e4`.
//!
//! A supernumber is a complex body plus a soul spread over the sixteen blades
//! of the exterior algebra, grouped by rank:
//!
//! | rank | blades                                 |
//! |------|----------------------------------------|
//! | 1    | `e1 e2 e3 e4`                          |
//! | 2    | `e12 e13 e14 e23 e24 e34`              |
//! | 3    | `e123 e124 e134 e234`                  |
//! | 4    | `e1234`                                |
//!
//! Generators anticommute, `ea eb = -eb ea`, so `ea ea = 0` and any product
//! of five soul factors vanishes.

use std::{array, fmt::Display, sync::LazyLock};

use crate::algebra::{impl_field_ops, impl_ring_ops, AbelianGroup, Field, Ring, WidensTo};
use crate::error::NumberError;
use crate::exact::{complex, ExactComplex};
use crate::Result;

pub static ZERO: LazyLock<ExactSupernumber> =
    LazyLock::new(|| ExactSupernumber::from_body(complex::ZERO.clone()));
pub static ONE: LazyLock<ExactSupernumber> =
    LazyLock::new(|| ExactSupernumber::from_body(complex::ONE.clone()));

/// Generator indices of the rank two blades, in storage order.
const PAIRS: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

/// Generator indices of the rank three blades, in storage order.
const TRIPLES: [(usize, usize, usize); 4] = [(0, 1, 2), (0, 1, 3), (0, 2, 3), (1, 2, 3)];

const RANK2_NAMES: [&str; 6] = ["e12", "e13", "e14", "e23", "e24", "e34"];
const RANK3_NAMES: [&str; 4] = ["e123", "e124", "e134", "e234"];

/// Storage slot of the blade `e(i+1)(j+1)`, `i < j`.
#[inline]
const fn pair(i: usize, j: usize) -> usize {
    match (i, j) {
        (0, 1) => 0,
        (0, 2) => 1,
        (0, 3) => 2,
        (1, 2) => 3,
        (1, 3) => 4,
        _ => 5,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExactSupernumber {
    body: ExactComplex,
    rank1: [ExactComplex; 4],
    rank2: [ExactComplex; 6],
    rank3: [ExactComplex; 4],
    rank4: ExactComplex,
}

impl ExactSupernumber {
    pub fn new(
        body: ExactComplex,
        rank1: [ExactComplex; 4],
        rank2: [ExactComplex; 6],
        rank3: [ExactComplex; 4],
        rank4: ExactComplex,
    ) -> Self {
        Self {
            body,
            rank1,
            rank2,
            rank3,
            rank4,
        }
    }

    /// A supernumber with an empty soul.
    pub fn from_body(body: ExactComplex) -> Self {
        let zero = || complex::ZERO.clone();
        Self::new(
            body,
            array::from_fn(|_| zero()),
            array::from_fn(|_| zero()),
            array::from_fn(|_| zero()),
            zero(),
        )
    }

    /// The generator `e(index+1)`, `None` past the fourth.
    pub fn generator(index: usize) -> Option<Self> {
        let mut generator = Self::from_body(complex::ZERO.clone());
        *generator.rank1.get_mut(index)? = complex::ONE.clone();
        Some(generator)
    }

    pub fn body(&self) -> &ExactComplex {
        &self.body
    }

    pub fn rank1(&self) -> &[ExactComplex; 4] {
        &self.rank1
    }

    pub fn rank2(&self) -> &[ExactComplex; 6] {
        &self.rank2
    }

    pub fn rank3(&self) -> &[ExactComplex; 4] {
        &self.rank3
    }

    pub fn rank4(&self) -> &ExactComplex {
        &self.rank4
    }

    /// The same supernumber with a zero body.
    pub fn soul(&self) -> Self {
        Self {
            body: complex::ZERO.clone(),
            ..self.clone()
        }
    }

    fn components(&self) -> impl Iterator<Item = &ExactComplex> {
        std::iter::once(&self.body)
            .chain(&self.rank1)
            .chain(&self.rank2)
            .chain(&self.rank3)
            .chain(std::iter::once(&self.rank4))
    }

    fn map(&self, f: impl Fn(&ExactComplex) -> ExactComplex) -> Self {
        Self::new(
            f(&self.body),
            self.rank1.each_ref().map(&f),
            self.rank2.each_ref().map(&f),
            self.rank3.each_ref().map(&f),
            f(&self.rank4),
        )
    }

    fn zip(&self, other: &Self, f: impl Fn(&ExactComplex, &ExactComplex) -> ExactComplex) -> Self {
        Self::new(
            f(&self.body, &other.body),
            array::from_fn(|n| f(&self.rank1[n], &other.rank1[n])),
            array::from_fn(|n| f(&self.rank2[n], &other.rank2[n])),
            array::from_fn(|n| f(&self.rank3[n], &other.rank3[n])),
            f(&self.rank4, &other.rank4),
        )
    }

    pub fn is_nan(&self) -> bool {
        self.components().any(ExactComplex::is_nan)
    }

    pub fn is_infinite(&self) -> bool {
        self.components().any(ExactComplex::is_infinite)
    }

    pub fn is_zero(&self) -> bool {
        self.components().all(ExactComplex::is_zero)
    }

    /// Multiplies every component by a complex factor.
    pub fn scale(&self, factor: &ExactComplex) -> Self {
        self.map(|c| c.multiply(factor))
    }
}

impl AbelianGroup for ExactSupernumber {
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

impl Ring for ExactSupernumber {
    fn one() -> Self {
        ONE.clone()
    }

    /// Exterior product. Each output blade collects every way of splitting
    /// it between the two operands, negated when the split needs an odd
    /// number of generator swaps to restore order.
    fn multiply(&self, rhs: &Self) -> Self {
        let (a0, a1, a2, a3, a4) = (&self.body, &self.rank1, &self.rank2, &self.rank3, &self.rank4);
        let (b0, b1, b2, b3, b4) = (&rhs.body, &rhs.rank1, &rhs.rank2, &rhs.rank3, &rhs.rank4);
        let p = |x: &ExactComplex, y: &ExactComplex| x.multiply(y);

        let body = p(a0, b0);

        let rank1 = array::from_fn(|i| p(a0, &b1[i]).add(&p(&a1[i], b0)));

        let rank2 = array::from_fn(|n| {
            let (i, j) = PAIRS[n];
            p(a0, &b2[n])
                .add(&p(&a2[n], b0))
                .add(&p(&a1[i], &b1[j]))
                .subtract(&p(&a1[j], &b1[i]))
        });

        let rank3 = array::from_fn(|n| {
            let (i, j, k) = TRIPLES[n];
            let (ij, ik, jk) = (pair(i, j), pair(i, k), pair(j, k));
            p(a0, &b3[n])
                .add(&p(&a3[n], b0))
                .add(&p(&a1[i], &b2[jk]))
                .subtract(&p(&a1[j], &b2[ik]))
                .add(&p(&a1[k], &b2[ij]))
                .add(&p(&a2[jk], &b1[i]))
                .subtract(&p(&a2[ik], &b1[j]))
                .add(&p(&a2[ij], &b1[k]))
        });

        let rank4 = p(a0, b4)
            .add(&p(a4, b0))
            // e1 e234 - e2 e134 + e3 e124 - e4 e123
            .add(&p(&a1[0], &b3[3]))
            .subtract(&p(&a1[1], &b3[2]))
            .add(&p(&a1[2], &b3[1]))
            .subtract(&p(&a1[3], &b3[0]))
            // -e234 e1 + e134 e2 - e124 e3 + e123 e4
            .subtract(&p(&a3[3], &b1[0]))
            .add(&p(&a3[2], &b1[1]))
            .subtract(&p(&a3[1], &b1[2]))
            .add(&p(&a3[0], &b1[3]))
            // e12 e34 - e13 e24 + e14 e23 + e23 e14 - e24 e13 + e34 e12
            .add(&p(&a2[0], &b2[5]))
            .subtract(&p(&a2[1], &b2[4]))
            .add(&p(&a2[2], &b2[3]))
            .add(&p(&a2[3], &b2[2]))
            .subtract(&p(&a2[4], &b2[1]))
            .add(&p(&a2[5], &b2[0]));

        Self::new(body, rank1, rank2, rank3, rank4)
    }
}

impl Field for ExactSupernumber {
    /// Right division, `self × rhs⁻¹`.
    fn divide(&self, rhs: &Self) -> Result<Self> {
        Ok(self.multiply(&rhs.inverse()?))
    }

    /// `b⁻¹ (1 - n + n² - n³ + n⁴)` with `n = soul / b`; the series stops
    /// because the soul is nilpotent. Only a zero body has no inverse.
    fn inverse(&self) -> Result<Self> {
        if self.body.is_zero() {
            return Err(NumberError::division_by_zero());
        }

        let body_inverse = self.body.inverse()?;
        let step = self.soul().scale(&body_inverse).negate();

        let mut term = ONE.clone();
        let mut series = ONE.clone();
        for _ in 0..4 {
            term = term.multiply(&step);
            series = series.add(&term);
        }

        Ok(series.scale(&body_inverse))
    }
}

impl_ring_ops!(ExactSupernumber);
impl_field_ops!(ExactSupernumber);

impl From<&ExactComplex> for ExactSupernumber {
    fn from(value: &ExactComplex) -> Self {
        value.widen()
    }
}

impl WidensTo<ExactSupernumber> for ExactComplex {
    fn widen(&self) -> ExactSupernumber {
        ExactSupernumber::from_body(self.clone())
    }
}

impl Display for ExactSupernumber {
    /// The body followed by every non-zero soul term, e.g. `2+0i + (1+0i)e12`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.body)?;

        let rank1 = self.rank1.iter().zip(["e1", "e2", "e3", "e4"]);
        let rank2 = self.rank2.iter().zip(RANK2_NAMES);
        let rank3 = self.rank3.iter().zip(RANK3_NAMES);
        let rank4 = std::iter::once((&self.rank4, "e1234"));

        for (coefficient, blade) in rank1.chain(rank2).chain(rank3).chain(rank4) {
            if !coefficient.is_zero() {
                write!(f, " + ({coefficient}){blade}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exact::ExactReal;

    fn e(index: usize) -> ExactSupernumber {
        ExactSupernumber::generator(index).unwrap()
    }

    fn scalar(value: i32) -> ExactComplex {
        ExactComplex::from_real(ExactReal::from(value))
    }

    fn blade2(slot: usize) -> ExactSupernumber {
        let mut value = ZERO.clone();
        value.rank2[slot] = complex::ONE.clone();
        value
    }

    fn blade3(slot: usize) -> ExactSupernumber {
        let mut value = ZERO.clone();
        value.rank3[slot] = complex::ONE.clone();
        value
    }

    fn top() -> ExactSupernumber {
        let mut value = ZERO.clone();
        value.rank4 = complex::ONE.clone();
        value
    }

    #[test]
    fn test_generators_anticommute() {
        for (slot, &(i, j)) in PAIRS.iter().enumerate() {
            assert_eq!(e(i).multiply(&e(j)), blade2(slot));
            assert_eq!(e(j).multiply(&e(i)), blade2(slot).negate());
        }
        for i in 0..4 {
            assert!(e(i).multiply(&e(i)).is_zero());
        }
        assert!(ExactSupernumber::generator(4).is_none());
    }

    #[test]
    fn test_rank_three_products() {
        // e1 e2 e3 = e123, e1 e3 e2 = -e123
        let e123 = e(0).multiply(&e(1)).multiply(&e(2));
        assert_eq!(e123, blade3(0));
        assert_eq!(e(0).multiply(&e(2)).multiply(&e(1)), blade3(0).negate());
        // e2 e13 = -e123
        assert_eq!(e(1).multiply(&blade2(1)), blade3(0).negate());
        // e24 e3 = -e234
        assert_eq!(blade2(4).multiply(&e(2)), blade3(3).negate());
    }

    #[test]
    fn test_top_blade_products() {
        assert_eq!(blade2(0).multiply(&blade2(5)), top());
        assert_eq!(blade2(5).multiply(&blade2(0)), top());
        assert_eq!(blade2(1).multiply(&blade2(4)), top().negate());
        assert_eq!(e(0).multiply(&blade3(3)), top());
        assert_eq!(blade3(3).multiply(&e(0)), top().negate());
        assert_eq!(e(1).multiply(&blade3(2)), top().negate());
        assert_eq!(blade3(0).multiply(&e(3)), top());
        assert!(top().multiply(&e(0)).is_zero());
    }

    #[test]
    fn test_associativity_on_generators() {
        let left = e(3).multiply(&e(1)).multiply(&e(0).multiply(&e(2)));
        let right = e(3).multiply(&e(1).multiply(&e(0))).multiply(&e(2));
        assert_eq!(left, right);
        // e4 e2 e1 e3 is an odd permutation of e1 e2 e3 e4
        assert_eq!(left, top().negate());
    }

    #[test]
    fn test_body_behaves_like_complex() {
        let a = ExactSupernumber::from_body(scalar(3));
        let b = ExactSupernumber::from_body(scalar(-2));
        assert_eq!(a.multiply(&b), ExactSupernumber::from_body(scalar(-6)));
        assert_eq!(&a + &b, ExactSupernumber::from_body(scalar(1)));
        assert_eq!(ONE.multiply(&e(2)), e(2));
    }

    #[test]
    fn test_inverse() {
        let mut value = ExactSupernumber::from_body(scalar(2));
        value.rank1 = [scalar(1), scalar(0), scalar(3), scalar(0)];
        value.rank2[0] = scalar(5);
        value.rank2[5] = scalar(-1);
        value.rank3[1] = scalar(4);
        value.rank4 = scalar(7);

        let inverse = value.inverse().unwrap();
        assert_eq!(value.multiply(&inverse), *ONE);
        assert_eq!(inverse.multiply(&value), *ONE);
        assert_eq!(value.divide(&value), Ok(ONE.clone()));
    }

    #[test]
    fn test_pure_soul_has_no_inverse() {
        assert!(e(0).inverse().is_err());
        assert!(ONE.divide(&ZERO).is_err());
    }

    #[test]
    fn test_scale_and_sentinels() {
        let doubled = e(1).add(&ONE).scale(&scalar(2));
        assert_eq!(doubled.body(), &scalar(2));
        assert_eq!(doubled.rank1()[1], scalar(2));

        let mut infinite = ONE.clone();
        infinite.rank4 = ExactComplex::from_real(ExactReal::positive_infinity());
        assert!(infinite.is_infinite());
        assert!(infinite.multiply(&ZERO).is_nan());
    }

    #[test]
    fn test_display() {
        let value = e(0).multiply(&e(1)).add(&ONE.scale(&scalar(2)));
        assert_eq!(value.to_string(), "2+0i + (1+0i)e12");
        assert_eq!(ZERO.to_string(), "0+0i");
    }
}
