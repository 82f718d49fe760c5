use proptest::prelude::*;
use tson::prelude::*;
use tson_strategy::*;

fn is_truncation(e: &DecodingError) -> bool {
    match e.kind() {
        ErrorKind::Truncated | ErrorKind::MissingTerminator => true,
        _ => false,
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 1_000, ..ProptestConfig::default() })]

    #[test]
    fn decode_int(i in proptest::num::i64::ANY) {
        let enc = format!("i:{};", i);

        let dec: i64 = decode_full(enc.as_bytes()).unwrap();

        prop_assert_eq!(dec, i);
    }

    #[test]
    fn decode_float(f in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
        let enc = format!("d:{};", f);

        let dec: f64 = decode_full(enc.as_bytes()).unwrap();

        prop_assert_eq!(dec, f);
    }

    #[test]
    fn decode_bool_any_byte(b in any::<u8>()) {
        let enc = [b'b', b':', b, b';'];

        let dec: bool = decode_full(&enc).unwrap();

        prop_assert_eq!(dec, b == b'1');
    }

    #[test]
    fn decode_text(s in arb_bs()) {
        let mut enc = format!("s:{}:\"", s.len()).into_bytes();
        enc.extend_from_slice(&s);
        enc.extend_from_slice(b"\";");

        let dec: Bytes = decode_full(&enc).unwrap();

        prop_assert_eq!(dec, s);
    }

    #[test]
    fn decode_tree((ts, enc) in arb_encoded()) {
        let dec: Tson = decode_full(&enc).unwrap();

        prop_assert_eq!(dec, ts);
    }

    #[test]
    fn keys_in_any_order((elems, pairs) in arb_shuffled_list()) {
        let enc = to_wire_pairs(&pairs);

        let dec: Vec<Tson> = decode_full(&enc).unwrap();

        prop_assert_eq!(dec, elems);
    }

    #[test]
    fn mixed_keys_never_coerce(ts in arb_scalar(), key in arb_bs(), ix in 0i64..4) {
        let mut enc = b"a:2:{".to_vec();
        to_wire(&Tson::Int(ix), &mut enc);
        to_wire(&ts, &mut enc);
        to_wire(&Tson::Byt(key), &mut enc);
        to_wire(&ts, &mut enc);
        enc.push(b'}');

        prop_assert_eq!(decode_full::<Tson>(&enc), Err(DecodingError::HeterogeneousKeys));
    }

    #[test]
    fn truncation_fails((_, enc) in arb_encoded(), cut in any::<prop::sample::Index>()) {
        let end = cut.index(enc.len());

        let err = decode_full::<Tson>(&enc[..end]).unwrap_err();

        prop_assert!(is_truncation(&err), "prefix of length {} failed with {:?}", end, err);
    }
}
