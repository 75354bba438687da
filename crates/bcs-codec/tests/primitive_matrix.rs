use bcs_codec::{
    from_bytes, to_bytes, BcsDecoder, BcsEncoder, CodecError, Decoder, Encoder, I128, I256, U128,
    U256,
};
use malachite::Integer;

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[test]
fn unsigned_integers_are_fixed_width_little_endian() {
    let cases: Vec<(Vec<u8>, &str)> = vec![
        (to_bytes(&1u8).unwrap(), "01"),
        (to_bytes(&0xffu8).unwrap(), "ff"),
        (to_bytes(&0x0102u16).unwrap(), "0201"),
        (to_bytes(&0xdead_beefu32).unwrap(), "efbeadde"),
        (to_bytes(&1_700_312_272u64).unwrap(), "d0b4586500000000"),
        (to_bytes(&u64::MAX).unwrap(), "ffffffffffffffff"),
        (
            to_bytes(&U128::from(1u128)).unwrap(),
            "01000000000000000000000000000000",
        ),
    ];
    for (actual, expected) in cases {
        assert_eq!(hex(&actual), expected);
    }
}

#[test]
fn signed_integers_are_twos_complement() {
    assert_eq!(hex(&to_bytes(&-1i8).unwrap()), "ff");
    assert_eq!(hex(&to_bytes(&i16::MIN).unwrap()), "0080");
    assert_eq!(hex(&to_bytes(&-2i32).unwrap()), "feffffff");
    assert_eq!(hex(&to_bytes(&i64::MAX).unwrap()), "ffffffffffffff7f");
    assert_eq!(
        hex(&to_bytes(&I128::min()).unwrap()),
        format!("{}80", "00".repeat(15))
    );
    assert_eq!(hex(&to_bytes(&I256::from(-1i128)).unwrap()), "ff".repeat(32));
}

#[test]
fn wide_integers_from_arbitrary_precision() {
    let value: Integer = "340282366920938463463374607431768211456".parse().unwrap();
    let wide = U256::try_from(&value).unwrap();
    let bytes = to_bytes(&wide).unwrap();
    assert_eq!(bytes.len(), 32);
    assert_eq!(bytes[16], 1);
    assert_eq!(from_bytes::<U256>(&bytes), Ok(wide));
    assert_eq!(Integer::from(from_bytes::<U256>(&bytes).unwrap()), value);
    assert!(U128::try_from(&value).is_err());
}

#[test]
fn bool_and_option_bytes() {
    assert_eq!(to_bytes(&true).unwrap(), vec![1]);
    assert_eq!(to_bytes(&false).unwrap(), vec![0]);
    assert_eq!(from_bytes::<bool>(&[2]), Err(CodecError::InvalidBool(2)));
    assert_eq!(to_bytes(&Some(true)).unwrap(), vec![1, 1]);
    assert_eq!(from_bytes::<Option<bool>>(&[0]), Ok(None));
}

#[test]
fn strings_are_length_prefixed_utf8() {
    assert_eq!(hex(&to_bytes("").unwrap()), "00");
    assert_eq!(hex(&to_bytes("çå∞≠¢õß∂ƒ∫").unwrap()).len(), 2 + 48);
    assert_eq!(&hex(&to_bytes(&"a".repeat(128)).unwrap())[..4], "8001");
    assert_eq!(from_bytes::<String>(&[0x01, 0xff]), Err(CodecError::InvalidUtf8));
}

#[test]
fn truncated_input_is_an_error() {
    let full = to_bytes(&1_700_312_272u64).unwrap();
    for len in 0..full.len() {
        assert_eq!(
            from_bytes::<u64>(&full[..len]),
            Err(CodecError::UnexpectedEndOfInput),
            "prefix of length {len}"
        );
    }
    assert_eq!(
        from_bytes::<String>(&[0x05, b'a', b'b']),
        Err(CodecError::UnexpectedEndOfInput)
    );
    assert_eq!(
        from_bytes::<Vec<u16>>(&[0x02, 0x01, 0x00, 0x02]),
        Err(CodecError::UnexpectedEndOfInput)
    );
}

#[test]
fn primitives_written_by_hand_read_back_in_order() {
    let mut encoder = BcsEncoder::new();
    encoder.write_u8(7).unwrap();
    encoder.write_str("move").unwrap();
    encoder.write_bytes(&[0xca, 0xfe]).unwrap();
    encoder.write_fixed_bytes(&[1, 2, 3, 4]).unwrap();
    encoder.write_variant_index(2).unwrap();
    encoder.write_i64(-5).unwrap();
    let bytes = encoder.into_bytes();

    let mut decoder = BcsDecoder::new(&bytes);
    assert_eq!(decoder.read_u8(), Ok(7));
    assert_eq!(decoder.read_str(), Ok("move".to_string()));
    assert_eq!(decoder.read_bytes(), Ok(vec![0xca, 0xfe]));
    assert_eq!(decoder.read_fixed_bytes(4), Ok(vec![1, 2, 3, 4]));
    assert_eq!(decoder.read_variant_index(), Ok(2));
    assert_eq!(decoder.read_i64(), Ok(-5));
    assert_eq!(decoder.finish(), Ok(()));
}

#[test]
fn floats_are_not_supported() {
    let mut encoder = BcsEncoder::new();
    assert_eq!(encoder.write_f32(0.5), Err(CodecError::Unimplemented("f32")));
    assert_eq!(encoder.write_f64(0.5), Err(CodecError::Unimplemented("f64")));
    assert!(encoder.as_bytes().is_empty());
    let mut decoder = BcsDecoder::new(&[0; 8]);
    assert_eq!(decoder.read_f32(), Err(CodecError::Unimplemented("f32")));
}
