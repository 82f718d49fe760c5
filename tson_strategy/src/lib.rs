//! Proptest strategies producing TSON input together with the value it should decode
//! to.

use bytes::Bytes;
use proptest::prelude::*;
use tson::{vecmap::VecMap, Tson};

/// Writes the wire form of `ts`. Lists are written with keys in index order.
///
/// # Panics
///
/// Panics on [`Tson::Null`], which has no wire form.
pub fn to_wire(ts: &Tson, out: &mut Vec<u8>) {
    match ts {
        Tson::Null => panic!("holes have no wire form"),
        Tson::Bool(b) => out.extend_from_slice(if *b { b"b:1;" } else { b"b:0;" }),
        Tson::Int(i) => out.extend_from_slice(format!("i:{};", i).as_bytes()),
        Tson::Float(f) => out.extend_from_slice(format!("d:{};", f).as_bytes()),
        Tson::Byt(s) => write_text(s, out),
        Tson::Array(a) => {
            out.extend_from_slice(format!("a:{}:{{", a.len()).as_bytes());
            for (i, v) in a.iter().enumerate() {
                to_wire(&Tson::Int(i as i64), out);
                to_wire(v, out);
            }
            out.push(b'}');
        }
        Tson::Map(m) => {
            out.extend_from_slice(format!("a:{}:{{", m.len()).as_bytes());
            for (k, v) in m.iter() {
                write_text(k, out);
                to_wire(v, out);
            }
            out.push(b'}');
        }
    }
}

fn write_text(s: &Bytes, out: &mut Vec<u8>) {
    out.extend_from_slice(format!("s:{}:\"", s.len()).as_bytes());
    out.extend_from_slice(s);
    out.extend_from_slice(b"\";");
}

/// Writes an integer-keyed aggregate with its pairs in the given order.
pub fn to_wire_pairs(pairs: &[(i64, Tson)]) -> Vec<u8> {
    let mut out = format!("a:{}:{{", pairs.len()).into_bytes();
    for (k, v) in pairs {
        to_wire(&Tson::Int(*k), &mut out);
        to_wire(v, &mut out);
    }
    out.push(b'}');
    out
}

/// arbitrary bytestring content, including delimiters and non-UTF-8 bytes
pub fn arb_bs() -> impl Strategy<Value = Bytes> {
    prop::collection::vec(any::<u8>(), 0..24).prop_map(Bytes::from)
}

/// arbitrary scalar TSON without floats
pub fn arb_scalar() -> impl Strategy<Value = Tson> {
    prop_oneof![
        any::<bool>().prop_map(Tson::Bool),
        any::<i64>().prop_map(Tson::Int),
        arb_bs().prop_map(Tson::Byt),
    ]
}

/// arbitrary TSON for use with proptest
///
/// Floats are left out because, under the default terminator rule, a float is only
/// decodable when no `;` follows it.
pub fn arb_tson() -> impl Strategy<Value = Tson> {
    arb_scalar().prop_recursive(
        4,  // max depth
        32, // max nodes
        6,  // max items per collection
        |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 1..6).prop_map(Tson::Array),
                prop::collection::btree_map(arb_bs(), inner, 1..6)
                    .prop_map(|m| Tson::Map(VecMap::from(m))),
            ]
        },
    )
}

/// arbitrary TSON paired with its wire form
pub fn arb_encoded() -> impl Strategy<Value = (Tson, Vec<u8>)> {
    arb_tson().prop_map(|ts| {
        let mut out = Vec::new();
        to_wire(&ts, &mut out);
        (ts, out)
    })
}

/// arbitrary dense list, with its pairs in a shuffled order
pub fn arb_shuffled_list() -> impl Strategy<Value = (Vec<Tson>, Vec<(i64, Tson)>)> {
    prop::collection::vec(arb_scalar(), 1..12).prop_flat_map(|elems| {
        let pairs: Vec<(i64, Tson)> = elems
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, v)| (i as i64, v))
            .collect();
        (Just(elems), Just(pairs).prop_shuffle())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_form() {
        let mut out = Vec::new();
        to_wire(
            &Tson::Array(vec![Tson::Int(1), Tson::from("ab")]),
            &mut out,
        );
        assert_eq!(out, b"a:2:{i:0;i:1;i:1;s:2:\"ab\";}".to_vec());
    }
}
