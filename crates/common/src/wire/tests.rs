use super::*;
use proptest::prelude::*;

#[test]
fn test_prefix_width() {
    assert_eq!(prefix_width(0), 1);
    assert_eq!(prefix_width(1), 1);
    assert_eq!(prefix_width(255), 1);
    assert_eq!(prefix_width(256), 2);
    assert_eq!(prefix_width(1024), 2);
    assert_eq!(prefix_width(65535), 2);
    assert_eq!(prefix_width(65536), 3);
    assert_eq!(prefix_width((1 << 24) - 1), 3);
}

#[test]
fn test_uint_encoding() {
    assert_eq!(Uint8::new(0xab).unwrap().to_wire(), vec![0xab]);
    assert_eq!(Uint16::new(0x0102).unwrap().to_wire(), vec![1, 2]);
    assert_eq!(Uint24::new(0x010203).unwrap().to_wire(), vec![1, 2, 3]);
    assert_eq!(Uint32::new(7).unwrap().to_wire(), vec![0, 0, 0, 7]);
    assert_eq!(Uint64::new(u64::MAX).unwrap().to_wire(), vec![0xff; 8]);

    assert!(Uint8::new(256).is_err());
    assert!(Uint24::new(1 << 24).is_err());

    let (v, used) = Uint24::decode(&[0, 0, 9, 0xee]).unwrap();
    assert_eq!(v.value(), 9);
    assert_eq!(used, 3);
}

#[test]
fn test_uint_truncated_input() {
    assert_eq!(
        Uint32::decode(&[1, 2]),
        Err(Error::InvalidLength {
            context: "Uint32",
            expected: 4,
            actual: 2
        })
    );
}

#[test]
fn test_byte_vector_prefix_follows_ceiling() {
    let small: ByteVector<255> = ByteVector::new(vec![1, 2, 3]).unwrap();
    assert_eq!(small.to_wire(), vec![3, 1, 2, 3]);

    let coord: ByteVector<1024> = ByteVector::new(vec![0xaa; 2]).unwrap();
    assert_eq!(coord.to_wire(), vec![0, 2, 0xaa, 0xaa]);
    assert_eq!(coord.encoded_len(), 4);

    let empty: ByteVector<0> = ByteVector::new(Vec::new()).unwrap();
    assert_eq!(empty.to_wire(), vec![0]);
}

#[test]
fn test_byte_vector_rejects_oversized() {
    assert!(ByteVector::<4>::new(vec![0u8; 5]).is_err());
    // Declared length 5 beyond ceiling 4
    assert!(matches!(
        ByteVector::<4>::decode(&[5, 1, 2, 3, 4, 5]),
        Err(Error::SerializationError { .. })
    ));
}

#[test]
fn test_byte_vector_truncated_body() {
    assert!(matches!(
        ByteVector::<1024>::decode(&[0, 4, 1, 2]),
        Err(Error::InvalidLength {
            expected: 4,
            actual: 2,
            ..
        })
    ));
    assert!(matches!(
        ByteVector::<1024>::decode(&[0]),
        Err(Error::InvalidLength { .. })
    ));
}

#[test]
fn test_from_wire_rejects_trailing_bytes() {
    assert!(matches!(
        ByteVector::<255>::from_wire(&[1, 9, 9]),
        Err(Error::SerializationError { .. })
    ));
}

#[test]
fn test_algorithm_codes() {
    assert_eq!(HashAlgorithm::Sha256.code(), 4);
    assert_eq!(HashAlgorithm::try_from(6).unwrap(), HashAlgorithm::Sha512);
    assert!(HashAlgorithm::try_from(7).is_err());
    assert_eq!(SignatureAlgorithm::Ecdsa.code(), 3);
    assert!(SignatureAlgorithm::try_from(4).is_err());
    assert_eq!(HashAlgorithm::ALL.len(), 7);
    assert_eq!(SignatureAlgorithm::ALL.len(), 4);

    let pair = SignatureAndHashAlgorithm::new(HashAlgorithm::Sha256, SignatureAlgorithm::Ecdsa);
    assert_eq!(pair.to_wire(), vec![4, 3]);
    assert_eq!(SignatureAndHashAlgorithm::default().to_wire(), vec![0, 0]);
}

#[test]
fn test_digitally_signed_layout() {
    let pair = SignatureAndHashAlgorithm::new(HashAlgorithm::Sha384, SignatureAlgorithm::Ecdsa);
    let signed = DigitallySigned::new(pair, vec![0x30, 0x00]).unwrap();
    assert_eq!(signed.to_wire(), vec![5, 3, 0, 2, 0x30, 0x00]);
    assert_eq!(DigitallySigned::from_wire(&signed.to_wire()).unwrap(), signed);
}

#[test]
fn test_public_key_message_layout() {
    let msg = PublicKeyMessage::new(vec![1, 2], vec![3]).unwrap();
    assert_eq!(msg.to_wire(), hex::decode("00020102000103").unwrap());
    assert!(PublicKeyMessage::new(vec![0u8; 1025], vec![]).is_err());
}

proptest! {
    #[test]
    fn prop_signature_message_roundtrip(
        r in proptest::collection::vec(any::<u8>(), 0..80),
        s in proptest::collection::vec(any::<u8>(), 0..80),
    ) {
        let msg = SignatureMessage::new(r.clone(), s.clone()).unwrap();
        let bytes = msg.to_wire();
        prop_assert_eq!(bytes.len(), msg.encoded_len());
        let back = SignatureMessage::from_wire(&bytes).unwrap();
        prop_assert_eq!(back.r.as_bytes(), &r[..]);
        prop_assert_eq!(back.s.as_bytes(), &s[..]);
    }

    #[test]
    fn prop_truncation_never_panics(
        body in proptest::collection::vec(any::<u8>(), 0..40),
        cut in 0usize..44,
    ) {
        let msg = PublicKeyMessage::new(body.clone(), body).unwrap();
        let bytes = msg.to_wire();
        let cut = cut.min(bytes.len());
        let decoded = PublicKeyMessage::from_wire(&bytes[..cut]);
        if cut == bytes.len() {
            prop_assert!(decoded.is_ok());
        } else {
            prop_assert!(decoded.is_err());
        }
    }
}
