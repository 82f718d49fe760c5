#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};
use tson::prelude::*;

const N_BIG_ARR: usize = 2000;

fn big_arr() -> Vec<u8> {
    let mut out = format!("a:{}:{{", N_BIG_ARR).into_bytes();
    for i in 0..N_BIG_ARR {
        out.extend_from_slice(format!("i:{};i:{};", i, i * 7).as_bytes());
    }
    out.push(b'}');
    out
}

const N_MAP: usize = 10;

fn big_map() -> Vec<u8> {
    let mut out = format!("a:{}:{{", N_MAP).into_bytes();
    for i in 0..N_MAP {
        let key = format!("key{}", i);
        out.extend_from_slice(format!("s:{}:\"{}\";", key.len(), key).as_bytes());
        out.extend_from_slice(&big_arr());
    }
    out.push(b'}');
    out
}

fn tson_i64_decode(c: &mut Criterion) {
    c.bench_function("TSON i64 decode", |b| {
        b.iter(|| decode_full::<i64>(black_box(b"i:1000000;")))
    });
}

fn tson_str_decode(c: &mut Criterion) {
    let mut enc = b"s:10000:\"".to_vec();
    enc.extend((0..10_000).map(|x| b'a' + (x % 26) as u8));
    enc.extend_from_slice(b"\";");
    let buf = Bytes::from(enc);

    c.bench_function("TSON string decode", move |b| {
        b.iter(|| decode_bytes::<Bytes>(black_box(buf.clone())))
    });
}

fn tson_arr_decode(c: &mut Criterion) {
    let enc = big_arr();
    c.bench_function(
        &format!("Decoding a list of {} bytes", enc.len()),
        move |b| b.iter(|| decode_full::<Vec<i64>>(black_box(&enc))),
    );
}

fn tson_map_decode(c: &mut Criterion) {
    let enc = big_map();
    c.bench_function(
        &format!("Decoding a map of {} bytes", enc.len()),
        move |b| b.iter(|| decode_full::<Tson>(black_box(&enc))),
    );
}

criterion_group!(
    benches,
    tson_i64_decode,
    tson_str_decode,
    tson_arr_decode,
    tson_map_decode
);
criterion_main!(benches);
