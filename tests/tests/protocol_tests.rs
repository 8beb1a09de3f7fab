//! ECDH and ECDSA through the public traits

use jcurve_algorithms::ec::{CurveId, KeyPair, PublicKey, SecretScalar};
use jcurve_algorithms::hash::{Sha256, Sha384};
use jcurve_api::{Error, KeyAgreement, Serialize, Signature};
use jcurve_kem::Ecdh;
use jcurve_sign::{Ecdsa, EcdsaSignature};
use jcurve_tests::{seeded_rng, uint_from_hex, TOY_CURVE};
use rand::rngs::OsRng;

#[test]
fn test_key_agreement_after_wire_exchange() {
    let mut rng = OsRng;
    for id in CurveId::ALL {
        let ecdh = Ecdh::for_curve(id);
        let client = ecdh.keypair(&mut rng).unwrap();
        let server = ecdh.keypair(&mut rng).unwrap();

        // Each side only sees the other's serialized public key
        let client_wire = client.public().to_bytes();
        let server_wire = server.public().to_bytes();
        let client_view = PublicKey::from_bytes(&server_wire).unwrap();
        let server_view = PublicKey::from_bytes(&client_wire).unwrap();

        let k_client = ecdh.agree(client.secret(), &client_view).unwrap();
        let k_server = ecdh.agree(server.secret(), &server_view).unwrap();
        assert_eq!(k_client, k_server, "{}", id);
    }
}

#[test]
fn test_generic_signature_round_trip() {
    fn round_trip<S: Signature>(scheme: &S, seed: u64) {
        let mut rng = seeded_rng(seed);
        let signer = scheme.keypair(&mut rng).unwrap();
        let other = scheme.keypair(&mut rng).unwrap();
        let message = b"ServerKeyExchange parameters";

        let signature = scheme.sign(message, &S::secret_key(&signer), &mut rng).unwrap();
        assert!(scheme.verify(message, &signature, &S::public_key(&signer)).unwrap());
        assert!(!scheme.verify(message, &signature, &S::public_key(&other)).unwrap());
    }

    for (seed, id) in CurveId::ALL.into_iter().enumerate() {
        round_trip(&Ecdsa::<Sha256>::for_curve(id), seed as u64);
        round_trip(&Ecdsa::<Sha384>::for_curve(id), seed as u64 + 100);
    }
}

#[test]
fn test_signature_survives_wire_and_der() {
    let ecdsa = Ecdsa::<Sha256>::for_curve(CurveId::P256);
    let mut rng = seeded_rng(42);
    let keys = ecdsa.generate_keypair(&mut rng).unwrap();
    let signature = ecdsa.sign(keys.secret(), b"hello", &mut rng).unwrap();

    let from_wire = EcdsaSignature::from_bytes(&signature.to_bytes()).unwrap();
    let from_der = EcdsaSignature::from_der(&signature.to_der()).unwrap();
    assert!(ecdsa.verify(keys.public(), &from_wire, b"hello").unwrap());
    assert!(ecdsa.verify(keys.public(), &from_der, b"hello").unwrap());
}

#[test]
fn test_tampered_signature_fails() {
    let ecdsa = Ecdsa::<Sha256>::for_curve(CurveId::P384);
    let mut rng = seeded_rng(7);
    let keys = ecdsa.generate_keypair(&mut rng).unwrap();
    let signature = ecdsa.sign(keys.secret(), b"payload", &mut rng).unwrap();

    let mut s = signature.s().to_vec();
    s[0] ^= 0x01;
    let tampered = EcdsaSignature::from_components(signature.r(), &s).unwrap();
    assert!(!ecdsa.verify(keys.public(), &tampered, b"payload").unwrap());
}

#[test]
fn test_fixed_key_vectors() {
    // d = 1 gives Q = G
    let ecdh = Ecdh::for_curve(CurveId::P256);
    let curve = ecdh.curve().clone();
    let one = SecretScalar::from_uint(&curve, &uint_from_hex("01")).unwrap();
    let keys = KeyPair::from_secret(&curve, one).unwrap();
    assert_eq!(
        hex::encode(keys.public().x()),
        "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"
    );

    // 2·G, derived by agreeing with d = 2 against G
    let two = SecretScalar::from_uint(&curve, &uint_from_hex("02")).unwrap();
    let shared = ecdh.shared_secret(&two, keys.public()).unwrap();
    assert_eq!(
        hex::encode(shared.as_bytes()),
        "7cf27b188d034f7e8a52380304b51ac3c08969e277f21b35a60b48fc47669978"
    );
}

#[test]
fn test_peer_key_from_another_curve_is_rejected() {
    let mut rng = seeded_rng(3);
    let p256 = Ecdh::for_curve(CurveId::P256);
    let p384 = Ecdh::for_curve(CurveId::P384);
    let ours = p256.generate_keypair(&mut rng).unwrap();
    let theirs = p384.generate_keypair(&mut rng).unwrap();

    assert!(matches!(
        p256.shared_secret(ours.secret(), theirs.public()),
        Err(Error::InvalidPoint { .. })
    ));
}

#[test]
fn test_toy_curve_protocols() {
    let ecdh = Ecdh::new(TOY_CURVE.clone());
    let ecdsa = Ecdsa::<Sha256>::new(TOY_CURVE.clone());
    let mut rng = seeded_rng(19);

    for i in 0u32..50 {
        let a = ecdh.generate_keypair(&mut rng).unwrap();
        let b = ecdh.generate_keypair(&mut rng).unwrap();
        assert_eq!(
            ecdh.shared_secret(a.secret(), b.public()).unwrap(),
            ecdh.shared_secret(b.secret(), a.public()).unwrap()
        );

        let message = i.to_le_bytes();
        let signature = ecdsa.sign(a.secret(), &message, &mut rng).unwrap();
        assert!(ecdsa.verify(a.public(), &signature, &message).unwrap());
    }
}
