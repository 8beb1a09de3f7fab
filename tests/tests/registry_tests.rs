//! The registry against the published constants

use jcurve_algorithms::ec::{registry, CurveId};
use jcurve_algorithms::Error;
use jcurve_params::ALL_NIST_CURVES;
use jcurve_tests::uint_from_hex;

#[test]
fn test_registry_matches_constants() {
    assert_eq!(registry::all().len(), ALL_NIST_CURVES.len());
    for (curve, constants) in registry::all().iter().zip(ALL_NIST_CURVES) {
        assert_eq!(curve.name(), constants.name);
        assert_eq!(curve.p(), &uint_from_hex(constants.p));
        assert_eq!(curve.n(), &uint_from_hex(constants.n));
        assert_eq!(curve.params().b, uint_from_hex(constants.b));
        // a = -3 for every NIST prime curve
        assert_eq!(&curve.params().a + 3u32, *curve.p());
        assert_eq!(constants.h, 1);
    }
}

#[test]
fn test_lookup_by_name_and_alias() {
    for (alias, id) in [
        ("P-192", CurveId::P192),
        ("secp224r1", CurveId::P224),
        ("prime256v1", CurveId::P256),
        ("p384", CurveId::P384),
        ("NISTP521", CurveId::P521),
    ] {
        let curve = registry::by_name(alias).unwrap();
        assert_eq!(curve, id.curve(), "{}", alias);
        assert_eq!(alias.parse::<CurveId>().unwrap(), id);
    }
    assert!(matches!(
        registry::by_name("curve25519"),
        Err(Error::UnknownCurve { .. })
    ));
    assert!(registry::by_index(CurveId::ALL.len()).is_none());
}

#[test]
fn test_registry_is_shared_across_threads() {
    let handles: Vec<_> = CurveId::ALL
        .into_iter()
        .map(|id| {
            std::thread::spawn(move || {
                let curve = registry::curve(id);
                curve.generator().mul(curve.n()).is_infinity()
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
