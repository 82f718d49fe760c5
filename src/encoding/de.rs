//! Scalar parsers and the value parser.
//!
//! Every parser takes the remaining input by value and hands back the decoded item
//! together with whatever it did not consume. Nothing is shared between calls, so
//! nested aggregates are plain recursive calls.

use super::{aggregate, constants::*, DecodeOptions, FloatTerminator};
use crate::{errors::DecodingError, Tson};
use bytes::{Buf, Bytes};
use std::{convert::TryFrom, str::FromStr};

/// A decoded item and the bytes that follow it.
pub type Parsed<T> = Result<(T, Bytes), DecodingError>;

/// TSON type tags.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Tag {
    /// `i`
    Int,
    /// `d`
    Float,
    /// `b`
    Bool,
    /// `s`
    Byt,
    /// `a`
    Aggregate,
}

impl TryFrom<u8> for Tag {
    type Error = DecodingError;

    fn try_from(byte: u8) -> Result<Tag, DecodingError> {
        match byte {
            TAG_INT => Ok(Tag::Int),
            TAG_FLOAT => Ok(Tag::Float),
            TAG_BOOL => Ok(Tag::Bool),
            TAG_BYT => Ok(Tag::Byt),
            TAG_AGG => Ok(Tag::Aggregate),
            unknown => Err(DecodingError::UnknownType {
                tag: unknown as char,
            }),
        }
    }
}

fn parse_field<T: FromStr>(field: &[u8]) -> Result<T, DecodingError> {
    std::str::from_utf8(field)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| DecodingError::malformed(field))
}

/// Splits off the bytes before `end`, dropping the terminator at `end`.
fn split_field(mut bs: Bytes, end: usize) -> (Bytes, Bytes) {
    let field = bs.split_to(end);
    bs.advance(1);
    (field, bs)
}

/// Reads a base-10 signed integer terminated by `term`.
///
/// # Example
///
/// ```
/// use tson::{encoding::de::read_int, prelude::*};
///
/// let (n, rest) = read_int(Bytes::from_static(b"-12;tail"), b';').unwrap();
///
/// assert_eq!(n, -12);
/// assert_eq!(rest, Bytes::from_static(b"tail"));
/// ```
pub fn read_int(bs: Bytes, term: u8) -> Parsed<i64> {
    if bs.len() < 2 {
        return Err(DecodingError::Truncated);
    }

    let end = bs
        .iter()
        .position(|&b| b == term)
        .ok_or(DecodingError::Truncated)?;
    let (field, rest) = split_field(bs, end);

    Ok((parse_field(&field)?, rest))
}

/// Reads a non-negative length or count terminated by `:`.
pub(crate) fn read_len(bs: Bytes) -> Parsed<usize> {
    let (n, rest) = read_int(bs, COLON)?;
    let len = usize::try_from(n).map_err(|_| DecodingError::MalformedNumber {
        text: n.to_string(),
    })?;
    Ok((len, rest))
}

/// Reads a float terminated by `;`, choosing the terminator as `term` directs.
///
/// # Example
///
/// ```
/// use tson::{encoding::{de::read_float, FloatTerminator}, prelude::*};
///
/// let (f, _) = read_float(Bytes::from_static(b"6.5;"), FloatTerminator::Last).unwrap();
/// assert_eq!(f, 6.5);
///
/// // with the default rule an embedded terminator ends up inside the number
/// assert!(read_float(Bytes::from_static(b"1;2;"), FloatTerminator::Last).is_err());
/// ```
pub fn read_float(bs: Bytes, term: FloatTerminator) -> Parsed<f64> {
    if bs.len() < 2 {
        return Err(DecodingError::Truncated);
    }

    let end = match term {
        FloatTerminator::Last => bs.iter().rposition(|&b| b == SEMI),
        FloatTerminator::First => bs.iter().position(|&b| b == SEMI),
    }
    .ok_or(DecodingError::Truncated)?;
    let (field, rest) = split_field(bs, end);

    let f: f64 = parse_field(&field)?;
    // only a spelled-out infinity may decode as one; `1e400` overflows
    if f.is_infinite() && !spells_infinity(&field) {
        return Err(DecodingError::malformed(&field));
    }
    Ok((f, rest))
}

fn spells_infinity(field: &[u8]) -> bool {
    field
        .windows(3)
        .any(|w| w.eq_ignore_ascii_case(b"inf"))
}

/// Reads a boolean. `1` is true and any other byte is false.
pub fn read_bool(mut bs: Bytes) -> Parsed<bool> {
    if bs.len() < 2 {
        return Err(DecodingError::Truncated);
    }
    if bs[1] != SEMI {
        return Err(DecodingError::missing(SEMI));
    }

    let val = bs[0] == TRUE_BYTE;
    bs.advance(2);
    Ok((val, bs))
}

/// Reads a length-prefixed bytestring. The content is a zero-copy slice of `bs`.
///
/// # Example
///
/// ```
/// use tson::{encoding::de::read_text, prelude::*};
///
/// let (s, rest) = read_text(Bytes::from_static(b"3:\"a;}\";")).unwrap();
///
/// assert_eq!(s, Bytes::from_static(b"a;}"));
/// assert!(rest.is_empty());
/// ```
pub fn read_text(bs: Bytes) -> Parsed<Bytes> {
    let (len, mut bs) = read_len(bs)?;

    // opening quote, content, closing quote, terminator
    let need = len.checked_add(3).ok_or(DecodingError::Truncated)?;
    if bs.len() < need {
        return Err(DecodingError::Truncated);
    }
    if bs[0] != QUOTE || bs[len + 1] != QUOTE {
        return Err(DecodingError::missing(QUOTE));
    }
    if bs[len + 2] != SEMI {
        return Err(DecodingError::missing(SEMI));
    }

    bs.advance(1);
    let text = bs.split_to(len);
    bs.advance(2);
    Ok((text, bs))
}

/// Decodes [`Tson`] values according to a set of [`DecodeOptions`].
#[derive(Copy, Clone, Debug, Default)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    /// Creates a decoder.
    pub fn new(options: DecodeOptions) -> Decoder { Decoder { options } }

    /// The options this decoder was built with.
    pub fn options(&self) -> &DecodeOptions { &self.options }

    /// Decodes one value from the front of `bs`, returning it with the unconsumed rest.
    ///
    /// # Example
    ///
    /// ```
    /// use tson::{encoding::Decoder, prelude::*};
    ///
    /// let (ts, rest) = Decoder::default()
    ///     .parse_value(Bytes::from_static(b"b:1;i:2;"))
    ///     .unwrap();
    ///
    /// assert_eq!(ts, Tson::Bool(true));
    /// assert_eq!(rest, Bytes::from_static(b"i:2;"));
    /// ```
    pub fn parse_value(&self, bs: Bytes) -> Parsed<Tson> { self.value_at(bs, 0) }

    /// Decodes one value whose enclosing aggregates are `depth` levels deep.
    pub(crate) fn value_at(&self, mut bs: Bytes, depth: usize) -> Parsed<Tson> {
        if bs.len() < 2 {
            return Err(DecodingError::Truncated);
        }

        let tag = Tag::try_from(bs[0])?;
        if bs[1] != COLON {
            return Err(DecodingError::missing(COLON));
        }
        bs.advance(2);

        match tag {
            Tag::Int => read_int(bs, SEMI).map(|(i, rest)| (Tson::Int(i), rest)),
            Tag::Float => {
                read_float(bs, self.options.float_terminator).map(|(f, rest)| (Tson::Float(f), rest))
            }
            Tag::Bool => read_bool(bs).map(|(b, rest)| (Tson::Bool(b), rest)),
            Tag::Byt => read_text(bs).map(|(s, rest)| (Tson::Byt(s), rest)),
            Tag::Aggregate => aggregate::read_aggregate(self, bs, depth + 1),
        }
    }
}
