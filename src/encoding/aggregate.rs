//! Aggregate decoding and reification.
//!
//! An aggregate is decoded as a sequence of key/value pairs first. Only once every pair
//! is in hand are the keys classified, which decides whether the aggregate becomes a
//! dense [`Tson::Array`] or a [`Tson::Map`].

use super::{
    constants::*,
    de::{read_len, Decoder, Parsed},
};
use crate::{errors::DecodingError, vecmap::VecMap, Tson};
use bytes::{Buf, Bytes};
use log::trace;
use smallvec::SmallVec;
use std::convert::TryFrom;

/// Pairs of small aggregates stay on the stack.
type Pairs = SmallVec<[(Key, Tson); 8]>;

/// An aggregate key. Only integers and bytestrings may be keys.
#[derive(Clone, Debug, PartialEq)]
pub enum Key {
    /// An `i:` key, naming a list index.
    Int(i64),
    /// An `s:` key, naming a map entry.
    Text(Bytes),
}

impl TryFrom<Tson> for Key {
    type Error = DecodingError;

    fn try_from(ts: Tson) -> Result<Key, DecodingError> {
        match ts {
            Tson::Int(i) => Ok(Key::Int(i)),
            Tson::Byt(s) => Ok(Key::Text(s)),
            _ => Err(DecodingError::HeterogeneousKeys),
        }
    }
}

/// The result of classifying the keys of an aggregate.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum KeyShape {
    /// There were no keys.
    Empty,
    /// Every key is an integer.
    Ints,
    /// Every key is a bytestring.
    Texts,
    /// Both integer and bytestring keys were present.
    Mixed,
}

impl KeyShape {
    /// Classifies `keys` in a single pass.
    ///
    /// # Example
    ///
    /// ```
    /// use tson::{encoding::aggregate::{Key, KeyShape}, prelude::*};
    ///
    /// let keys = vec![Key::Int(0), Key::Text(Bytes::from_static(b"x"))];
    ///
    /// assert_eq!(KeyShape::classify(&keys), KeyShape::Mixed);
    /// assert_eq!(KeyShape::classify(&keys[..1]), KeyShape::Ints);
    /// assert_eq!(KeyShape::classify(&[]), KeyShape::Empty);
    /// ```
    pub fn classify<'a, I: IntoIterator<Item = &'a Key>>(keys: I) -> KeyShape {
        use KeyShape::*;
        let mut shape = Empty;
        for key in keys {
            shape = match (shape, key) {
                (Empty, Key::Int(_)) | (Ints, Key::Int(_)) => Ints,
                (Empty, Key::Text(_)) | (Texts, Key::Text(_)) => Texts,
                _ => return Mixed,
            };
        }
        shape
    }
}

fn expect(bs: &mut Bytes, delim: u8) -> Result<(), DecodingError> {
    match bs.first() {
        None => Err(DecodingError::Truncated),
        Some(&b) if b == delim => {
            bs.advance(1);
            Ok(())
        }
        Some(_) => Err(DecodingError::missing(delim)),
    }
}

/// Reads an aggregate nested `depth` levels deep, starting at its count field.
pub(crate) fn read_aggregate(de: &Decoder, bs: Bytes, depth: usize) -> Parsed<Tson> {
    let limit = de.options().max_depth;
    if depth > limit {
        return Err(DecodingError::DepthLimitExceeded { limit });
    }

    let (count, mut bs) = read_len(bs)?;
    expect(&mut bs, OPEN_BRACE)?;

    // grows with the pairs actually decoded, never with the declared count
    let mut pairs = Pairs::new();
    for _ in 0..count {
        let (key, rest) = de.value_at(bs, depth)?;
        let key = Key::try_from(key)?;
        let (val, rest) = de.value_at(rest, depth)?;
        pairs.push((key, val));
        bs = rest;
    }
    expect(&mut bs, CLOSE_BRACE)?;

    let ts = reify(pairs, count, de.options().max_sparse_factor)?;
    Ok((ts, bs))
}

/// Turns decoded pairs into a list or a map.
fn reify(pairs: Pairs, count: usize, sparse_factor: usize) -> Result<Tson, DecodingError> {
    let shape = KeyShape::classify(pairs.iter().map(|(k, _)| k));
    trace!("reifying {} pairs with {:?} keys", pairs.len(), shape);

    match shape {
        KeyShape::Empty => Ok(Tson::Array(Vec::new())),
        KeyShape::Ints => dense(pairs, count.saturating_mul(sparse_factor)),
        KeyShape::Texts => {
            let map: VecMap<Bytes, Tson> = pairs
                .into_iter()
                .filter_map(|(key, val)| match key {
                    Key::Text(k) => Some((k, val)),
                    Key::Int(_) => None,
                })
                .collect();
            Ok(Tson::Map(map))
        }
        KeyShape::Mixed => Err(DecodingError::HeterogeneousKeys),
    }
}

/// Builds a list from integer-keyed pairs. Keys must lie in `[0, limit)`; indices with
/// no key hold [`Tson::Null`].
fn dense(pairs: Pairs, limit: usize) -> Result<Tson, DecodingError> {
    let mut len = 0;
    for (key, _) in &pairs {
        if let Key::Int(i) = *key {
            let ix = usize::try_from(i)
                .ok()
                .filter(|ix| *ix < limit)
                .ok_or(DecodingError::KeyOutOfRange { key: i, limit })?;
            len = len.max(ix + 1);
        }
    }

    let mut out = vec![Tson::Null; len];
    for (key, val) in pairs {
        if let Key::Int(i) = key {
            out[i as usize] = val;
        }
    }
    Ok(Tson::Array(out))
}
