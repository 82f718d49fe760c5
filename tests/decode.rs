use std::collections::HashMap;
use tson::prelude::*;

#[test]
fn integer() {
    let mut n: i64 = 0;
    decode_into(b"i:42;", &mut n).unwrap();
    assert_eq!(n, 42);

    let mut small: i32 = 0;
    decode_into(b"i:1;", &mut small).unwrap();
    assert_eq!(small, 1);
}

#[test]
fn text() {
    let mut s = String::new();
    decode_into(br#"s:5:"hello";"#, &mut s).unwrap();
    assert_eq!(s, "hello");

    let s: String = decode_full(br#"s:6:"a:1:{}";"#).unwrap();
    assert_eq!(s, "a:1:{}");
}

#[test]
fn boolean() {
    let mut b = false;
    decode_into(b"b:1;", &mut b).unwrap();
    assert!(b);
    decode_into(b"b:0;", &mut b).unwrap();
    assert!(!b);

    let b: bool = decode_full(b"b:7;").unwrap();
    assert!(!b);
}

#[test]
fn floats() {
    let mut double = 0f64;
    decode_into(b"d:6.5;", &mut double).unwrap();
    assert_eq!(double, 6.5);

    let mut single = 0f32;
    decode_into(b"d:6.5;", &mut single).unwrap();
    assert_eq!(single, 6.5);

    let half: f16 = decode_full(b"d:6.5;").unwrap();
    assert_eq!(half.to_f32(), 6.5);
}

#[test]
fn int_array() {
    let mut ary: Vec<Tson> = vec![];
    decode_into(b"a:3:{i:0;i:1;i:1;i:2;i:2;i:3;}", &mut ary).unwrap();

    assert_eq!(ary.len(), 3);
    for (i, val) in ary.iter().enumerate() {
        assert_eq!(val, &Tson::Int(i as i64 + 1));
    }

    let typed: Vec<u16> = decode_full(b"a:3:{i:0;i:1;i:1;i:2;i:2;i:3;}").unwrap();
    assert_eq!(typed, vec![1, 2, 3]);
}

#[test]
fn string_map() {
    let mut mapping: HashMap<String, Tson> = HashMap::new();
    decode_into(br#"a:2:{s:3:"one";i:1;s:3:"two";i:2;}"#, &mut mapping).unwrap();

    assert_eq!(mapping.len(), 2);
    assert_eq!(mapping["one"], Tson::Int(1));
    assert_eq!(mapping["two"], Tson::Int(2));
}

#[test]
fn sparse_list() {
    let ts: Tson = decode_full(b"a:2:{i:0;b:1;i:2;b:0;}").unwrap();
    assert_eq!(
        ts,
        Tson::Array(vec![Tson::Bool(true), Tson::Null, Tson::Bool(false)])
    );

    let opts: Vec<Option<bool>> = decode_full(b"a:2:{i:2;b:0;i:0;b:1;}").unwrap();
    assert_eq!(opts, vec![Some(true), None, Some(false)]);
}

#[test]
fn mixed_keys() {
    let err = decode_full::<Tson>(br#"a:2:{i:0;i:1;s:1:"x";i:2;}"#).unwrap_err();
    assert_eq!(err, DecodingError::HeterogeneousKeys);

    let mut dest: HashMap<String, i64> = HashMap::new();
    assert!(decode_into(br#"a:2:{i:0;i:1;s:1:"x";i:2;}"#, &mut dest).is_err());
    assert!(dest.is_empty());
}

#[test]
fn type_mismatch_leaves_destination() {
    let mut s = String::from("before");
    let err = decode_into(b"a:1:{i:0;i:1;}", &mut s).unwrap_err();
    assert_eq!(
        err,
        DecodingError::TypeMismatch {
            expected: "String",
            found: TType::Array,
        }
    );
    assert_eq!(s, "before");
}

#[test]
fn nested_structure() {
    let input = br#"a:2:{s:4:"name";s:3:"bob";s:4:"tags";a:2:{i:0;s:1:"a";i:1;s:1:"b";}}"#;
    let ts: Tson = decode_full(input).unwrap();
    let fields = ts.to_vecmap().unwrap();

    assert_eq!(fields.get(&b"name"[..]), Some(&Tson::from("bob")));
    let tags: Vec<String> = fields.get(&b"tags"[..]).cloned().unwrap().into_rep().unwrap();
    assert_eq!(tags, vec!["a", "b"]);
}

#[test]
fn binary_text_content() {
    let mut input = b"s:4:\"".to_vec();
    input.extend_from_slice(&[0, 0xff, b'"', b';']);
    input.extend_from_slice(b"\";");

    let s: Bytes = decode_full(&input).unwrap();
    assert_eq!(&s[..], &[0, 0xff, b'"', b';']);
    assert_eq!(
        decode_full::<String>(&input).unwrap_err().kind(),
        ErrorKind::TypeMismatch
    );
}

#[test]
fn every_prefix_fails() {
    let input = br#"a:3:{i:0;s:3:"x;}";i:1;a:1:{s:1:"k";b:1;}i:2;i:-17;}"#;
    let full: Tson = decode_full(input).unwrap();
    assert_eq!(full.to_vec().unwrap().len(), 3);

    for end in 0..input.len() {
        let kind = decode_full::<Tson>(&input[..end]).unwrap_err().kind();
        assert!(
            kind == ErrorKind::Truncated || kind == ErrorKind::MissingTerminator,
            "prefix {:?} failed with {:?}",
            String::from_utf8_lossy(&input[..end]),
            kind
        );
    }
}
