use std::fmt::Debug;

use abacus::algebra::{dot, power};
use abacus::exact::{complex, integer, quaternion, rational, real};
use abacus::{
    AbelianGroup, ComparableNumber, ExactComplex, ExactInteger, ExactQuaternion, ExactRational,
    ExactReal, Field, Result, Ring,
};
use fake::Fake;
use num_bigint::BigInt;

const SAMPLES: usize = 64;

fn assert_ring_laws<T: Ring + PartialEq + Debug>(a: &T, b: &T) {
    assert_eq!(a.add(b).subtract(b), *a, "{a:?} + {b:?} - {b:?}");
    assert_eq!(a.negate().negate(), *a);
    assert_eq!(T::zero().add(a), *a);
    assert_eq!(T::one().multiply(a), *a);
    assert_eq!(a.add(b), b.add(a));
}

fn assert_division_law<T: Field + PartialEq + Debug>(a: &T, b: &T) -> Result<()> {
    assert_eq!(a.multiply(&b.inverse()?), a.divide(b)?, "{a:?} / {b:?}");
    Ok(())
}

fn small() -> i64 {
    (-10_000i64..10_000).fake()
}

fn non_zero() -> i64 {
    match small() {
        0 => 1,
        n => n,
    }
}

fn random_real() -> ExactReal {
    let scale: i64 = (0i64..8).fake();
    ExactReal::new(BigInt::from(small()), scale).unwrap()
}

/// Divisors of the form ±2^i·5^j, whose reciprocals terminate.
fn terminating_real() -> ExactReal {
    let twos: u32 = (0u32..6).fake();
    let fives: u32 = (0u32..4).fake();
    let sign = match (0..2).fake::<u8>() {
        0 => -1,
        _ => 1,
    };
    ExactReal::from(sign * 2i64.pow(twos) * 5i64.pow(fives))
}

#[test]
fn integer_laws() {
    for _ in 0..SAMPLES {
        let (a, b) = (ExactInteger::from(small()), ExactInteger::from(small()));
        assert_ring_laws(&a, &b);
        assert_eq!(
            a.multiply(&b),
            ExactInteger::from(a.to_i64().unwrap() * b.to_i64().unwrap())
        );
    }
}

#[test]
fn rational_laws() -> Result<()> {
    for _ in 0..SAMPLES {
        let a = ExactRational::fraction(small(), non_zero());
        let b = ExactRational::fraction(non_zero(), non_zero());
        assert_ring_laws(&a, &b);
        assert_division_law(&a, &b)?;
    }

    Ok(())
}

#[test]
fn real_laws() -> Result<()> {
    for _ in 0..SAMPLES {
        let (a, b) = (random_real(), random_real());
        assert_ring_laws(&a, &b);
        assert_division_law(&a, &terminating_real())?;
    }

    Ok(())
}

#[test]
fn complex_laws() -> Result<()> {
    // Divisors whose squared modulus is a power of two.
    let divisors = [
        ExactComplex::new(ExactReal::from(1), ExactReal::from(1)),
        ExactComplex::new(ExactReal::from(2), ExactReal::from(-2)),
        ExactComplex::new(ExactReal::from(0), ExactReal::from(4)),
        ExactComplex::new(ExactReal::from(-8), ExactReal::from(0)),
    ];

    for n in 0..SAMPLES {
        let a = ExactComplex::new(random_real(), random_real());
        let b = ExactComplex::new(random_real(), random_real());
        assert_ring_laws(&a, &b);
        assert_division_law(&a, &divisors[n % divisors.len()])?;
    }

    Ok(())
}

#[test]
fn quaternion_laws() -> Result<()> {
    let quat = || {
        let [re, i, j, k] = [(); 4].map(|_| ExactReal::from(small()));
        ExactQuaternion::new(re, i, j, k)
    };

    for _ in 0..SAMPLES {
        let (a, b) = (quat(), quat());
        assert_eq!(a.add(&b).subtract(&b), a);
        assert_eq!(a.negate().negate(), a);
        assert_eq!(quaternion::ZERO.add(&a), a);
        assert_eq!(quaternion::ONE.multiply(&a), a);
        assert_eq!(a.multiply(&b).conjugate(), b.conjugate().multiply(&a.conjugate()));
        assert_division_law(&a, &ExactQuaternion::from_parts([1, 1, 1, 1]))?;
    }

    Ok(())
}

#[test]
fn sentinel_propagation() -> Result<()> {
    let pos = real::POSITIVE_INFINITY.clone();
    let neg = real::NEGATIVE_INFINITY.clone();

    assert_eq!(pos.add(&neg), *real::NAN);
    assert_eq!(pos.add(&pos), pos);
    assert_eq!(pos.multiply(&real::ZERO), *real::NAN);
    assert_eq!(real::ZERO.divide(&pos)?, *real::ZERO);
    assert_eq!(pos.subtract(&pos), *real::NAN);

    assert_eq!(
        integer::POSITIVE_INFINITY.add(&integer::NEGATIVE_INFINITY),
        *integer::NAN
    );
    assert_eq!(
        rational::NEGATIVE_INFINITY.multiply(&ExactRational::fraction(-1, 2)),
        *rational::POSITIVE_INFINITY
    );
    assert!(ExactReal::from(1).divide(&real::ZERO).is_err());

    Ok(())
}

#[test]
fn rational_reduction() {
    let half = ExactRational::fraction(4, 8);
    assert_eq!(half.numerator(), ExactInteger::from(1));
    assert_eq!(half.denominator(), ExactInteger::from(2));

    for _ in 0..SAMPLES {
        let value = ExactRational::fraction(small(), non_zero());
        let gcd = value.numerator().gcd(&value.denominator()).unwrap();
        assert!(gcd.is_one() || value.is_zero(), "{value} is not reduced");
        assert_eq!(value.denominator().signum(), Ok(1));
    }

    assert_eq!(
        ExactRational::fraction(1, 3).add(&ExactRational::fraction(1, 6)),
        ExactRational::fraction(1, 2)
    );
}

#[test]
fn complex_derived_sentinels() {
    let infinite = ExactComplex::new(ExactReal::positive_infinity(), ExactReal::from(0));
    assert!(infinite.is_infinite());

    let nan = ExactComplex::new(ExactReal::nan(), ExactReal::from(5));
    assert!(nan.is_nan());
    assert!(!complex::ONE.is_infinite());
}

#[test]
fn total_order() {
    let mut values = vec![
        ExactReal::nan(),
        ExactReal::positive_infinity(),
        ExactReal::negative_infinity(),
        ExactReal::from(0),
        ExactReal::from(1),
        ExactReal::from(-1),
    ];
    values.sort();

    assert_eq!(
        values,
        vec![
            ExactReal::negative_infinity(),
            ExactReal::from(-1),
            ExactReal::from(0),
            ExactReal::from(1),
            ExactReal::positive_infinity(),
            ExactReal::nan(),
        ]
    );

    for (n, a) in values.iter().enumerate() {
        for (m, b) in values.iter().enumerate() {
            assert_eq!(a.cmp(b), n.cmp(&m), "{a} vs {b}");
        }
    }

    let (lo, hi) = (ExactInteger::from(-4), ExactInteger::positive_infinity());
    assert_eq!(lo.clone().max(hi.clone()), hi);
    assert_eq!(lo.clone().min(integer::NAN.clone()), lo);
}

#[test]
fn quaternion_units() {
    let i = ExactQuaternion::from_parts([0, 1, 0, 0]);
    let j = ExactQuaternion::from_parts([0, 0, 1, 0]);
    assert_eq!(i.multiply(&j), ExactQuaternion::from_parts([0, 0, 0, 1]));
    assert_eq!(j.multiply(&i), ExactQuaternion::from_parts([0, 0, 0, -1]));
}

#[test]
fn generic_algorithms() {
    let two = ExactRational::fraction(2, 3);
    assert_eq!(power(&two, 3), ExactRational::fraction(8, 27));

    let lhs = [ExactInteger::from(1), ExactInteger::from(2), ExactInteger::from(3)];
    let rhs = [ExactInteger::from(4), ExactInteger::from(-5), ExactInteger::from(6)];
    assert_eq!(dot(&lhs, &rhs), ExactInteger::from(12));

    assert_eq!(power(&complex::I.clone(), 2), *complex::MINUS_ONE);
}

#[test]
fn rendering_and_parsing() -> Result<()> {
    assert_eq!(ExactReal::negative_infinity().to_string(), "-Infinity");
    assert_eq!(ExactRational::positive_infinity().to_string(), "Infinity");
    assert_eq!(ExactInteger::nan().to_string(), "NaN");

    assert_eq!("-12/16".parse::<ExactRational>()?, ExactRational::fraction(-3, 4));
    assert_eq!("1.5e2".parse::<ExactReal>()?, ExactReal::from(150));
    assert_eq!(
        "3-4i".parse::<ExactComplex>()?,
        ExactComplex::new(ExactReal::from(3), ExactReal::from(-4))
    );
    assert!("1/0".parse::<ExactRational>()?.is_nan());
    assert!("".parse::<ExactInteger>().is_err());

    Ok(())
}
