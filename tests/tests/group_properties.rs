//! Group-law properties across the toy curve and the registered curves

use jcurve_algorithms::ec::{registry, CurveId, Point};
use jcurve_tests::{TOY_CURVE, TOY_MULTIPLES};
use num_bigint::BigUint;
use proptest::prelude::*;

fn toy_point(k: u64) -> Point {
    TOY_CURVE.generator().mul_u64(k)
}

#[test]
fn test_toy_multiples_match_table() {
    let g = TOY_CURVE.generator();
    for (i, &(x, y)) in TOY_MULTIPLES.iter().enumerate() {
        let point = g.mul_u64(i as u64 + 1);
        let affine = point.to_affine().unwrap();
        assert_eq!(affine.x().value(), &BigUint::from(x), "x of {}G", i + 1);
        assert_eq!(affine.y().value(), &BigUint::from(y), "y of {}G", i + 1);
    }
    assert!(g.mul_u64(19).is_infinity());
}

#[test]
fn test_every_registered_generator_has_order_n() {
    for curve in registry::all() {
        let g = curve.generator();
        assert!(g.mul(curve.n()).is_infinity(), "{}", curve.name());
        let last = g.mul(&(curve.n() - 1u32));
        assert_eq!(last, -&g, "{}", curve.name());
    }
}

#[test]
fn test_operators_agree_with_methods() {
    let curve = registry::curve(CurveId::P224);
    let g = curve.generator();
    let three_g = 3u64 * &g;

    assert_eq!(&three_g - &g, g.double());
    assert_eq!(&g + &g, &g * 2u64);
    assert_eq!(&g * &BigUint::from(3u32), three_g);
    assert!((&three_g + &(-&three_g)).is_infinity());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_toy_addition_is_associative_and_commutative(a in 0u64..19, b in 0u64..19, c in 0u64..19) {
        let (p, q, r) = (toy_point(a), toy_point(b), toy_point(c));
        prop_assert_eq!(p.add(&q), q.add(&p));
        prop_assert_eq!(p.add(&q).add(&r), p.add(&q.add(&r)));
    }

    #[test]
    fn prop_toy_scalar_mult_is_homomorphic(a in 0u64..60, b in 0u64..60) {
        let sum = toy_point(a).add(&toy_point(b));
        prop_assert_eq!(sum, toy_point(a + b));
        prop_assert_eq!(toy_point(a).mul_u64(b), toy_point(a * b));
    }

    #[test]
    fn prop_toy_identity_and_inverse(a in 0u64..19) {
        let p = toy_point(a);
        let inf = TOY_CURVE.infinity();
        prop_assert_eq!(p.add(&inf), p.clone());
        prop_assert!(p.add(&p.neg()).is_infinity());
        prop_assert_eq!(p.neg(), toy_point((19 - a) % 19));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn prop_registered_scalar_mult_distributes(
        index in 0usize..CurveId::ALL.len(),
        a in 1u64..u64::MAX / 2,
        b in 1u64..u64::MAX / 2,
    ) {
        let curve = registry::by_index(index).unwrap();
        let g = curve.generator();
        let lhs = g.mul_u64(a).add(&g.mul_u64(b));
        let rhs = g.mul(&(BigUint::from(a) + BigUint::from(b)));
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn prop_registered_multiples_stay_on_curve(index in 0usize..CurveId::ALL.len(), k in 1u64..u64::MAX) {
        let curve = registry::by_index(index).unwrap();
        let point = curve.generator().mul_u64(k);
        prop_assert!(point.is_on_curve());
        let affine = point.to_affine().unwrap();
        prop_assert!(curve.contains(affine.x().value(), affine.y().value()));
        prop_assert_eq!(affine.to_point(&curve).unwrap(), point);
    }
}
