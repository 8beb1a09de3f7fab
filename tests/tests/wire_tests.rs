//! Wire framing of keys and signatures as the transport sees them

use jcurve_algorithms::ec::{CurveId, PublicKey};
use jcurve_api::Serialize;
use jcurve_common::wire::{
    ByteVector, DigitallySigned, HashAlgorithm, PublicKeyMessage, SignatureAlgorithm,
    SignatureAndHashAlgorithm, SignatureMessage, Uint16, Uint24, WireFormat,
};
use jcurve_sign::Ecdsa;
use jcurve_tests::seeded_rng;
use proptest::prelude::*;

#[test]
fn test_public_key_message_layout() {
    let ecdsa: Ecdsa = Ecdsa::for_curve(CurveId::P521);
    let mut rng = seeded_rng(1);
    let keys = ecdsa.generate_keypair(&mut rng).unwrap();

    let bytes = keys.public().to_bytes();
    assert_eq!(bytes.len(), 2 * (2 + 66));
    assert_eq!(&bytes[..2], &[0x00, 66]);
    assert_eq!(&bytes[2..68], keys.public().x());
    assert_eq!(&bytes[68..70], &[0x00, 66]);

    let message = PublicKeyMessage::from_wire(&bytes).unwrap();
    assert_eq!(PublicKey::from(message), *keys.public());
}

#[test]
fn test_digitally_signed_over_the_wire() {
    let ecdsa: Ecdsa = Ecdsa::for_curve(CurveId::P256);
    let mut rng = seeded_rng(2);
    let keys = ecdsa.generate_keypair(&mut rng).unwrap();
    let signed = ecdsa
        .sign_digitally_signed(keys.secret(), b"params", &mut rng)
        .unwrap();

    let bytes = signed.to_wire();
    // hash, signature, then a two-byte length
    assert_eq!(bytes[0], HashAlgorithm::Sha256.code());
    assert_eq!(bytes[1], SignatureAlgorithm::Ecdsa.code());
    assert_eq!(u16::from_be_bytes([bytes[2], bytes[3]]) as usize, bytes.len() - 4);

    let decoded = DigitallySigned::from_wire(&bytes).unwrap();
    assert_eq!(decoded, signed);
    assert!(ecdsa
        .verify_digitally_signed(keys.public(), &decoded, b"params")
        .unwrap());
}

#[test]
fn test_unknown_algorithm_code_is_rejected() {
    let signed = DigitallySigned::new(
        SignatureAndHashAlgorithm::new(HashAlgorithm::Sha256, SignatureAlgorithm::Ecdsa),
        vec![1, 2, 3],
    )
    .unwrap();
    let mut bytes = signed.to_wire();
    bytes[1] = 9;
    assert!(DigitallySigned::from_wire(&bytes).is_err());
}

proptest! {
    #[test]
    fn prop_signature_message_round_trip(
        r in proptest::collection::vec(any::<u8>(), 0..80),
        s in proptest::collection::vec(any::<u8>(), 0..80),
    ) {
        let message = SignatureMessage::new(r.clone(), s.clone()).unwrap();
        let bytes = message.to_wire();
        prop_assert_eq!(bytes.len(), message.encoded_len());
        let decoded = SignatureMessage::from_wire(&bytes).unwrap();
        prop_assert_eq!(decoded.r.as_bytes(), &r[..]);
        prop_assert_eq!(decoded.s.as_bytes(), &s[..]);
    }

    #[test]
    fn prop_truncated_vectors_are_rejected(payload in proptest::collection::vec(any::<u8>(), 1..64)) {
        let vector = ByteVector::<255>::new(payload).unwrap();
        let bytes = vector.to_wire();
        prop_assert!(ByteVector::<255>::from_wire(&bytes[..bytes.len() - 1]).is_err());
    }

    #[test]
    fn prop_uint_values_round_trip(v in 0u64..(1 << 16), w in 0u64..(1 << 24)) {
        let a = Uint16::new(v).unwrap();
        let b = Uint24::new(w).unwrap();
        prop_assert_eq!(Uint16::from_wire(&a.to_wire()).unwrap(), a);
        prop_assert_eq!(Uint24::from_wire(&b.to_wire()).unwrap(), b);
    }
}
