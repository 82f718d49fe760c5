//! Binding decoded [`Tson`] into Rust types.
//!
//! Each implementation of [`FromTson`] is one conversion rule: it accepts the value
//! kinds it knows how to convert and returns [`DecodingError::TypeMismatch`] for all
//! others. Containers apply the rule of their element type to every element.

use crate::{errors::DecodingError, vecmap::*, TType, Tson, Tson::*};
use bytes::Bytes;
use half::f16;
use num_bigint::BigInt;
use num_traits::NumCast;
use std::{
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
    iter::FromIterator,
    vec::IntoIter,
};

/// A value that can be bound from [`Tson`].
pub trait FromTson: Sized {
    /// Converts value from [`Tson`].
    ///
    /// # Arguments
    ///
    /// `ts: Tson` - The value to be converted from [`Tson`].
    ///
    /// # Example
    ///
    /// ```
    /// use tson::prelude::*;
    ///
    /// let ts = Tson::from("foo");
    ///
    /// assert_eq!(String::from_tson(ts).unwrap(), "foo");
    /// ```
    fn from_tson(ts: Tson) -> Result<Self, DecodingError>;
}

impl FromTson for Tson {
    fn from_tson(ts: Tson) -> Result<Self, DecodingError> { Ok(ts) }
}

impl FromTson for bool {
    fn from_tson(ts: Tson) -> Result<Self, DecodingError> { ts.to_bool() }
}

macro_rules! int_from_tson {
    ($($t:ty),*) => {
        $(
            impl FromTson for $t {
                fn from_tson(ts: Tson) -> Result<Self, DecodingError> {
                    match ts {
                        Int(i) => <$t as NumCast>::from(i)
                            .ok_or_else(|| DecodingError::mismatch(stringify!($t), TType::Int)),
                        _ => Err(DecodingError::mismatch(stringify!($t), ts.ttype())),
                    }
                }
            }
        )*
    };
}

int_from_tson!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl FromTson for BigInt {
    fn from_tson(ts: Tson) -> Result<Self, DecodingError> {
        match ts {
            Int(i) => Ok(BigInt::from(i)),
            _ => Err(DecodingError::mismatch("BigInt", ts.ttype())),
        }
    }
}

macro_rules! float_from_tson {
    ($t:ty, $from_f64:expr, $from_i64:expr) => {
        impl FromTson for $t {
            fn from_tson(ts: Tson) -> Result<Self, DecodingError> {
                match ts {
                    Float(f) => Ok($from_f64(f)),
                    Int(i) => Ok($from_i64(i)),
                    _ => Err(DecodingError::mismatch(stringify!($t), ts.ttype())),
                }
            }
        }
    };
}

float_from_tson!(f64, |f: f64| f, |i: i64| i as f64);
float_from_tson!(f32, |f: f64| f as f32, |i: i64| i as f32);
float_from_tson!(f16, f16::from_f64, |i: i64| f16::from_f64(i as f64));

impl FromTson for Bytes {
    fn from_tson(ts: Tson) -> Result<Self, DecodingError> {
        match ts {
            Byt(s) => Ok(s),
            _ => Err(DecodingError::mismatch("Bytes", ts.ttype())),
        }
    }
}

impl FromTson for String {
    fn from_tson(ts: Tson) -> Result<Self, DecodingError> {
        match ts {
            Byt(s) => String::from_utf8(s.to_vec())
                .map_err(|_| DecodingError::mismatch("String", TType::Bytes)),
            _ => Err(DecodingError::mismatch("String", ts.ttype())),
        }
    }
}

impl<T: FromTson> FromTson for Option<T> {
    fn from_tson(ts: Tson) -> Result<Self, DecodingError> {
        match ts {
            Null => Ok(None),
            ts => T::from_tson(ts).map(Some),
        }
    }
}

impl<T: FromTson> FromTson for Vec<T> {
    fn from_tson(ts: Tson) -> Result<Self, DecodingError> {
        ts.into_vec()?.into_iter().map(T::from_tson).collect()
    }
}

fn tuple_elems(ts: Tson, len: usize, name: &'static str) -> Result<IntoIter<Tson>, DecodingError> {
    let arr = ts.into_vec()?;
    if arr.len() == len {
        Ok(arr.into_iter())
    } else {
        Err(DecodingError::mismatch(name, TType::Array))
    }
}

impl<A: FromTson, B: FromTson> FromTson for (A, B) {
    fn from_tson(ts: Tson) -> Result<Self, DecodingError> {
        let iter = &mut tuple_elems(ts, 2, "(A, B)")?;
        Ok((take_elem(iter)?, take_elem(iter)?))
    }
}

impl<A: FromTson, B: FromTson, C: FromTson> FromTson for (A, B, C) {
    fn from_tson(ts: Tson) -> Result<Self, DecodingError> {
        let iter = &mut tuple_elems(ts, 3, "(A, B, C)")?;
        Ok((take_elem(iter)?, take_elem(iter)?, take_elem(iter)?))
    }
}

/// Keys a map destination can use.
pub trait FromTsonKey: Sized {
    /// Converts a decoded map key.
    fn from_key(key: Bytes) -> Result<Self, DecodingError>;
}

impl FromTsonKey for Bytes {
    fn from_key(key: Bytes) -> Result<Self, DecodingError> { Ok(key) }
}

impl FromTsonKey for String {
    fn from_key(key: Bytes) -> Result<Self, DecodingError> { String::from_tson(Byt(key)) }
}

fn map_entries<K, T, M>(ts: Tson) -> Result<M, DecodingError>
where
    K: FromTsonKey,
    T: FromTson,
    M: FromIterator<(K, T)>,
{
    ts.into_vecmap()?
        .into_iter()
        .map(|(k, v)| Ok((K::from_key(k)?, T::from_tson(v)?)))
        .collect()
}

impl<T: FromTson> FromTson for VecMap<Bytes, T> {
    fn from_tson(ts: Tson) -> Result<Self, DecodingError> { map_entries(ts) }
}

impl<K, T, S> FromTson for HashMap<K, T, S>
where
    K: FromTsonKey + Eq + Hash,
    T: FromTson,
    S: BuildHasher + Default,
{
    fn from_tson(ts: Tson) -> Result<Self, DecodingError> { map_entries(ts) }
}

impl<K, T, S> FromTson for hashbrown::HashMap<K, T, S>
where
    K: FromTsonKey + Eq + Hash,
    T: FromTson,
    S: BuildHasher + Default,
{
    fn from_tson(ts: Tson) -> Result<Self, DecodingError> { map_entries(ts) }
}

impl<K: FromTsonKey + Ord, T: FromTson> FromTson for BTreeMap<K, T> {
    fn from_tson(ts: Tson) -> Result<Self, DecodingError> { map_entries(ts) }
}

/// Removes the field `name` from a decoded map and binds it as `T`. Used to bind
/// structs by hand.
///
/// # Example
///
/// ```
/// use tson::prelude::*;
///
/// #[derive(Debug, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
///     label: Option<String>,
/// }
///
/// impl FromTson for Point {
///     fn from_tson(ts: Tson) -> Result<Point, DecodingError> {
///         let mut fields = ts.into_vecmap()?;
///         Ok(Point {
///             x: take_field(&mut fields, "x")?,
///             y: take_field(&mut fields, "y")?,
///             label: take_field(&mut fields, "label")?,
///         })
///     }
/// }
///
/// let p: Point = decode_full(br#"a:2:{s:1:"x";i:1;s:1:"y";i:-2;}"#).unwrap();
///
/// assert_eq!(p, Point { x: 1, y: -2, label: None });
/// ```
///
/// A missing field binds like [`Tson::Null`], so only `Option` fields may be absent.
pub fn take_field<T: FromTson>(fields: &mut VecMap<Bytes, Tson>, name: &str) -> Result<T, DecodingError> {
    T::from_tson(fields.remove(name.as_bytes()).unwrap_or(Null))
}

/// Gets the next element from an iterator of [`Tson`] values as `T`. A missing element
/// binds like [`Tson::Null`].
///
/// # Example
///
/// ```
/// use tson::prelude::*;
///
/// let elems: Vec<Tson> = decode_full(b"a:2:{i:0;i:7;i:1;b:1;}").unwrap();
/// let iter = &mut elems.into_iter();
///
/// let first: u8 = take_elem(iter).unwrap();
/// let second: bool = take_elem(iter).unwrap();
/// let third: Option<bool> = take_elem(iter).unwrap();
///
/// assert_eq!((first, second, third), (7, true, None));
/// ```
pub fn take_elem<T: FromTson>(iter: &mut IntoIter<Tson>) -> Result<T, DecodingError> {
    T::from_tson(iter.next().unwrap_or(Null))
}
