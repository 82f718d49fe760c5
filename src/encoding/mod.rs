//! # TSON decoder
//!
//! Decode functions for TSON.
//!
//! # Example
//!
//! ```
//! use tson::prelude::*;
//! use std::collections::HashMap;
//!
//! let input = br#"a:2:{s:1:"x";i:1;s:1:"y";i:2;}"#;
//!
//! // decode into a generic value first
//! let ts: Tson = decode_full(input).unwrap();
//! assert_eq!(ts.ttype(), TType::Map);
//!
//! // or go straight to the type you want
//! let point: HashMap<String, i32> = decode_full(input).unwrap();
//! assert_eq!(point["y"], 2);
//! ```

use crate::{errors::DecodingError, rep::FromTson};
use bytes::Bytes;
use log::{debug, trace};

pub mod aggregate;
pub mod de;
pub use de::{Decoder, Parsed};
mod constants;
use constants::*;

/// Which `;` ends a float.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FloatTerminator {
    /// The last `;` of the remaining input. A float followed by any other
    /// `;`-terminated token fails to parse.
    Last,
    /// The first `;` after the tag.
    First,
}

/// Limits and behavior switches for decoding.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DecodeOptions {
    /// Maximum number of nested aggregates.
    pub max_depth: usize,
    /// An aggregate with `n` pairs and integer keys may use keys in
    /// `[0, n * max_sparse_factor)`.
    pub max_sparse_factor: usize,
    /// Where floats end.
    pub float_terminator: FloatTerminator,
    /// Reject input with bytes left over after the root value.
    pub strict_trailing: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            max_depth: DEFAULT_MAX_DEPTH,
            max_sparse_factor: DEFAULT_SPARSE_FACTOR,
            float_terminator: FloatTerminator::Last,
            strict_trailing: false,
        }
    }
}

/// Decodes `bs` according to `options`, then binds the result into `T`.
///
/// # Example
///
/// ```
/// use tson::{encoding::{decode_with, DecodeOptions, FloatTerminator}, prelude::*};
///
/// let opts = DecodeOptions {
///     float_terminator: FloatTerminator::First,
///     ..DecodeOptions::default()
/// };
///
/// let fs: Vec<f64> = decode_with(&opts, Bytes::from_static(b"a:2:{i:0;d:0.5;i:1;d:1.5;}")).unwrap();
/// assert_eq!(fs, vec![0.5, 1.5]);
/// ```
pub fn decode_with<T: FromTson>(options: &DecodeOptions, bs: Bytes) -> Result<T, DecodingError> {
    trace!("decoding {} bytes", bs.len());

    let res = Decoder::new(*options)
        .parse_value(bs)
        .and_then(|(ts, rest)| {
            if options.strict_trailing && !rest.is_empty() {
                Err(DecodingError::TrailingBytes {
                    remaining: rest.len(),
                })
            } else {
                T::from_tson(ts)
            }
        });

    if let Err(e) = &res {
        debug!("decoding failed: {}", e);
    }
    res
}

/// Decodes a [`Bytes`] buffer without copying it. Bytestrings in the result share
/// the buffer.
pub fn decode_bytes<T: FromTson>(bs: Bytes) -> Result<T, DecodingError> {
    decode_with(&DecodeOptions::default(), bs)
}

/// Decodes a byte slice into `T`, returns an error if decoding or binding fails.
///
/// Bytes after the first complete value are ignored.
///
/// # Example
///
/// ```
/// use tson::prelude::*;
///
/// let f: f32 = decode_full(b"d:6.5;").unwrap();
/// assert_eq!(f, 6.5);
///
/// let err = decode_full::<String>(b"i:1;").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::TypeMismatch);
/// ```
pub fn decode_full<T: FromTson>(bs: &[u8]) -> Result<T, DecodingError> {
    decode_bytes(Bytes::copy_from_slice(bs))
}

/// Decodes `bs` and writes the result into `dest`. On failure `dest` is left as it was.
///
/// # Example
///
/// ```
/// use tson::prelude::*;
///
/// let mut s = String::from("unchanged");
///
/// assert!(decode_into(b"s:5:\"hel", &mut s).is_err());
/// assert_eq!(s, "unchanged");
///
/// decode_into(b"s:5:\"hello\";", &mut s).unwrap();
/// assert_eq!(s, "hello");
/// ```
pub fn decode_into<T: FromTson>(bs: &[u8], dest: &mut T) -> Result<(), DecodingError> {
    *dest = decode_full(bs)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::ErrorKind, Tson};

    #[test]
    fn trailing_bytes_are_ignored_by_default() {
        let n: i64 = decode_full(b"i:1;garbage").unwrap();
        assert_eq!(n, 1);
    }

    #[test]
    fn strict_trailing() {
        let opts = DecodeOptions {
            strict_trailing: true,
            ..DecodeOptions::default()
        };
        assert_eq!(
            decode_with::<i64>(&opts, Bytes::from_static(b"i:1;xy")),
            Err(DecodingError::TrailingBytes { remaining: 2 })
        );
        assert_eq!(decode_with::<i64>(&opts, Bytes::from_static(b"i:1;")), Ok(1));
    }

    #[test]
    fn decode_into_leaves_dest_on_mismatch() {
        let mut n = 7u8;
        let err = decode_into(b"i:300;", &mut n).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(n, 7);
    }

    #[test]
    fn decode_bytes_shares_the_buffer() {
        let buf = Bytes::from_static(b"s:3:\"abc\";");
        let ts: Tson = decode_bytes(buf.clone()).unwrap();
        let s = ts.to_bytes().unwrap();
        assert_eq!(s.as_ptr(), buf[5..].as_ptr());
    }

    #[test]
    fn sparse_factor_is_configurable() {
        let opts = DecodeOptions {
            max_sparse_factor: 1,
            ..DecodeOptions::default()
        };
        let sparse = Bytes::from_static(b"a:2:{i:0;i:0;i:2;i:2;}");
        assert_eq!(
            decode_with::<Tson>(&opts, sparse.clone()).unwrap_err().kind(),
            ErrorKind::KeyOutOfRange
        );
        assert!(decode_bytes::<Tson>(sparse).is_ok());
    }
}
