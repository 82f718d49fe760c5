pub use crate::{
    encoding::{decode_bytes, decode_full, decode_into, decode_with, DecodeOptions, Decoder},
    errors::{DecodingError, ErrorKind},
    rep::*,
    vecmap::VecMap,
    TType, Tson,
};
pub use bytes::Bytes;
pub use half::f16;
pub use num_bigint::BigInt;
