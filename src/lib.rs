//! # TSON
//!
//! TSON (Tagged Serialized Object Notation) is a compact, length-prefixed, typed text
//! format. This crate decodes it into a generic [`Tson`] value and binds that value
//! into strongly typed Rust destinations.
//!
//! # Usage
//!
//! The trait [`FromTson`] specifies how a [`Tson`] value is converted into a Rust type.
//! Most of the time you only need one of the entry points in [`encoding`]:
//!
//! ```
//! use tson::prelude::*;
//!
//! // decode straight into a typed value
//! let n: i64 = decode_full(b"i:42;").unwrap();
//! assert_eq!(n, 42);
//!
//! // or into an existing destination, which is left untouched on failure
//! let mut words: Vec<String> = vec![];
//! decode_into(br#"a:2:{i:0;s:3:"foo";i:1;s:3:"bar";}"#, &mut words).unwrap();
//! assert_eq!(words, vec!["foo", "bar"]);
//!
//! assert!(decode_into(b"i:42;", &mut words).is_err());
//! assert_eq!(words.len(), 2);
//! ```
//!
//! If you want to look at the data before committing to a type, decode into [`Tson`]:
//!
//! ```
//! use tson::prelude::*;
//!
//! let ts: Tson = decode_full(br#"a:2:{s:3:"one";i:1;s:3:"two";i:2;}"#).unwrap();
//!
//! let map = ts.to_vecmap().unwrap();
//! assert_eq!(map.get(&b"one"[..]), Some(&Tson::Int(1)));
//! ```
//!
//! # An overview of TSON types
//!
//! | Tag | Decodes to      | Binds into                                        |
//! | --- | ---             | ---                                               |
//! | `i` | [`Tson::Int`]   | any primitive integer, [`BigInt`], any float      |
//! | `d` | [`Tson::Float`] | [`f64`], [`f32`], [`f16`]                         |
//! | `b` | [`Tson::Bool`]  | [`bool`]                                          |
//! | `s` | [`Tson::Byt`]   | [`Bytes`], [`String`] (when UTF-8)                |
//! | `a` | [`Tson::Array`] or [`Tson::Map`] | `Vec<T>`, tuples, maps           |
//!
//! [`Tson::Null`] never appears on the wire; it fills the holes of sparse lists.
//!
//! [`BigInt`]: num_bigint::BigInt
//! [`f16`]: half::f16
//!
//! # Wire format
//!
//! ```text
//! value      := integer | float | boolean | text | aggregate
//! integer    := "i:" digits ";"
//! float      := "d:" number ";"
//! boolean    := "b:" ("0"|"1") ";"
//! text       := "s:" digits ":" "\"" <digits-bytes of content> "\"" ";"
//! aggregate  := "a:" digits ":" "{" (value value){digits times} "}"
//! ```
//!
//! ## Integers
//!
//! Base-10 signed 64-bit integers with an optional leading `-`.
//!
//! ## Floats
//!
//! Anything [`f64`]'s parser accepts. By default the terminator is the *last* `;` of the
//! remaining input, see [`FloatTerminator`](encoding::FloatTerminator).
//!
//! ## Booleans
//!
//! `1` is true, any other byte is false.
//!
//! ## Bytestrings
//!
//! The length counts raw bytes, not characters. Content is copied verbatim; no escaping
//! is performed, so content may contain quotes, digits and braces.
//!
//! ## Aggregates
//!
//! The count is the number of key/value *pairs*. Keys must be all integers or all
//! strings:
//!
//! * all integers reify as a dense [`Tson::Array`] of length `max(key) + 1`, with
//!   [`Tson::Null`] filling missing indices;
//! * all strings reify as a [`Tson::Map`];
//! * anything else is [`DecodingError::HeterogeneousKeys`].
//!
//! Duplicate keys are allowed; the last one wins.

#![warn(
    deprecated_in_future,
    unsafe_code,
    unused_labels,
    keyword_idents,
    missing_copy_implementations,
    missing_debug_implementations,
    macro_use_extern_crate,
    unreachable_pub,
    trivial_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![allow(clippy::cast_lossless)]

#[macro_use]
pub mod util;

pub mod encoding;
pub mod errors;
pub mod prelude;
pub mod rep;
pub mod vecmap;

use bytes::Bytes;
use errors::DecodingError;
use rep::FromTson;
use vecmap::*;

#[derive(PartialEq, Clone, Debug)]
/// [`Tson`] and its variants.
///
/// # Example
///
/// ```
/// use tson::prelude::*;
///
/// let b = Tson::Bool(true);
///
/// let val = match b {
///     Tson::Bool(b) => b,
///     _ => panic!(),
/// };
///
/// assert!(val);
/// ```
pub enum Tson {
    /// The hole value. Fills the indices of a list that were not present as keys.
    Null,
    /// Boolean.
    Bool(bool),
    /// Signed 64-bit integer.
    Int(i64),
    /// Double precision floating point number.
    Float(f64),
    /// Bytestring, taken verbatim from the input.
    Byt(Bytes),
    /// Dense list, from an aggregate with integer keys.
    Array(Vec<Tson>),
    /// String-keyed map, from an aggregate with string keys.
    Map(VecMap<Bytes, Tson>),
}

/// The kind of a [`Tson`] value.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TType {
    Null,
    Bool,
    Int,
    Float,
    Bytes,
    Array,
    Map,
}

use Tson::*;

impl Tson {
    /// Returns the kind of the value.
    ///
    /// # Example
    ///
    /// ```
    /// use tson::prelude::*;
    ///
    /// assert_eq!(Tson::Int(1).ttype(), TType::Int);
    /// ```
    pub fn ttype(&self) -> TType {
        match self {
            Null => TType::Null,
            Bool(_) => TType::Bool,
            Int(_) => TType::Int,
            Float(_) => TType::Float,
            Byt(_) => TType::Bytes,
            Array(_) => TType::Array,
            Map(_) => TType::Map,
        }
    }

    /// Indicates whether a value is [`Null`].
    pub fn is_null(&self) -> bool {
        match self {
            Null => true,
            _ => false,
        }
    }

    /// Converts a [`Tson`] value to a slice of [`Tson`].
    /// This will return a [`DecodingError`] if the value is not a [`Tson::Array`].
    ///
    /// # Example
    ///
    /// ```
    /// use tson::prelude::*;
    ///
    /// let ts: Tson = decode_full(b"a:1:{i:0;b:1;}").unwrap();
    ///
    /// assert_eq!(ts.to_vec().unwrap(), &[Tson::Bool(true)]);
    /// ```
    pub fn to_vec(&self) -> Result<&[Tson], DecodingError> {
        match self {
            Array(a) => Ok(a),
            _ => Err(DecodingError::mismatch("Vec<Tson>", self.ttype())),
        }
    }

    /// Consumes a [`Tson`] value, converting it into a vector of [`Tson`] values.
    /// This will return a [`DecodingError`] if the value is not a [`Tson::Array`].
    pub fn into_vec(self) -> Result<Vec<Tson>, DecodingError> {
        match self {
            Array(a) => Ok(a),
            _ => Err(DecodingError::mismatch("Vec<Tson>", self.ttype())),
        }
    }

    /// Converts a [`Tson`] value to a [`VecMap`].
    /// This will return a [`DecodingError`] if the value is not a [`Tson::Map`].
    pub fn to_vecmap(&self) -> Result<&VecMap<Bytes, Tson>, DecodingError> {
        match self {
            Map(vmap) => Ok(vmap),
            _ => Err(DecodingError::mismatch("VecMap<Bytes, Tson>", self.ttype())),
        }
    }

    /// Consumes a [`Tson`] value, converting it into a [`VecMap`].
    ///
    /// An empty [`Tson::Array`] is accepted as an empty map, since an aggregate
    /// without pairs carries no key kind.
    pub fn into_vecmap(self) -> Result<VecMap<Bytes, Tson>, DecodingError> {
        match self {
            Map(vmap) => Ok(vmap),
            Array(ref a) if a.is_empty() => Ok(VecMap::new()),
            _ => Err(DecodingError::mismatch("VecMap<Bytes, Tson>", self.ttype())),
        }
    }

    /// Consumes a [`Tson`] value, converting it to a value of type `T`.
    ///
    /// # Example
    ///
    /// ```
    /// use tson::prelude::*;
    ///
    /// let num: u8 = Tson::Int(1).into_rep().unwrap();
    ///
    /// assert_eq!(num, 1);
    /// ```
    pub fn into_rep<T: FromTson>(self) -> Result<T, DecodingError> { T::from_tson(self) }

    /// Tries to convert a value to a [`bool`].
    pub fn to_bool(&self) -> Result<bool, DecodingError> {
        match self {
            Bool(b) => Ok(*b),
            _ => Err(DecodingError::mismatch("bool", self.ttype())),
        }
    }

    /// Tries to convert a value to an [`i64`].
    pub fn to_int(&self) -> Result<i64, DecodingError> {
        match self {
            Int(i) => Ok(*i),
            _ => Err(DecodingError::mismatch("i64", self.ttype())),
        }
    }

    /// Tries to convert a value to an [`f64`].
    pub fn to_float(&self) -> Result<f64, DecodingError> {
        match self {
            Float(f) => Ok(*f),
            _ => Err(DecodingError::mismatch("f64", self.ttype())),
        }
    }

    /// Tries to convert a value to [`Bytes`].
    ///
    /// # Example
    ///
    /// ```
    /// use tson::prelude::*;
    ///
    /// let foo = Tson::from("This is an example");
    ///
    /// assert_eq!(foo.to_bytes().unwrap(), &b"This is an example"[..]);
    /// ```
    pub fn to_bytes(&self) -> Result<&Bytes, DecodingError> {
        match self {
            Byt(s) => Ok(s),
            _ => Err(DecodingError::mismatch("Bytes", self.ttype())),
        }
    }
}

impl std::fmt::Display for Tson {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        fn fmt_map(m: &VecMap<Bytes, Tson>, indent: usize) -> String {
            let mut map_string: String = "{".to_owned();
            for (i, (k, v)) in m.iter().enumerate() {
                if i == 0 {
                    map_string.push_str(&format!("\n{:indent$}", "", indent = indent + 2));
                } else {
                    map_string.push_str(&format!(",\n{:indent$}", "", indent = indent + 2));
                }

                let value = fmt_helper(v, indent + 2);
                map_string.push_str(&format!(
                    "{key}: {value}",
                    key = util::fmt_bytes(k),
                    value = value,
                ));

                // check if we're at last element
                if i == m.len() - 1 {
                    map_string.push_str(&format!("\n{:indent$}", "", indent = indent));
                }
            }
            map_string.push('}');

            map_string
        }

        fn fmt_helper(ts: &Tson, indent: usize) -> String {
            match ts {
                Null => "NULL".to_owned(),
                Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_owned(),
                Byt(bytes) => util::fmt_bytes(bytes),
                Float(float) => format!("{:?}", float),
                Int(i) => format!("{}", i),
                Array(a) => {
                    let mut arr_string: String = "[".to_owned();
                    for (i, ts) in a.iter().enumerate() {
                        if i != 0 {
                            arr_string.push_str(", ");
                        }
                        arr_string.push_str(&fmt_helper(ts, indent));
                    }
                    arr_string.push(']');

                    arr_string
                }
                Map(m) => fmt_map(m, indent),
            }
        }

        write!(f, "{}", fmt_helper(self, 0))
    }
}

impl From<&str> for Tson {
    fn from(s: &str) -> Tson { Byt(Bytes::copy_from_slice(s.as_bytes())) }
}

impl<T: Into<Tson>> From<Vec<T>> for Tson {
    fn from(v: Vec<T>) -> Tson { Array(v.into_iter().map(T::into).collect()) }
}

impl<T: Into<Tson>> From<VecMap<Bytes, T>> for Tson {
    fn from(v: VecMap<Bytes, T>) -> Tson {
        Map(v.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

from_fn!(Tson, bool, Bool);
from_fn!(Tson, i64, Int);
from_fn!(Tson, f64, Float);
from_fn!(Tson, Bytes, Byt);
from_fn!(Tson, String, |s: String| Byt(Bytes::from(s)));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivial_tests() {
        assert!(Null.is_null());

        assert!(Tson::from(5i64).to_int().is_ok());

        assert!(Tson::from(true).to_bool().unwrap());

        assert_eq!(
            Tson::from("word").to_bytes().unwrap(),
            &Bytes::from_static(b"word")
        );
    }

    #[test]
    fn accessors_report_kind() {
        match Tson::from(1.5).to_int() {
            Err(DecodingError::TypeMismatch { expected, found }) => {
                assert_eq!(expected, "i64");
                assert_eq!(found, TType::Float);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn empty_array_is_an_empty_map() {
        assert!(Array(vec![]).into_vecmap().unwrap().is_empty());
        assert!(Array(vec![Null]).into_vecmap().is_err());
    }

    #[test]
    fn display() {
        let ts = Tson::from(vec![Tson::from(1i64), Null, Tson::from("x")]);
        assert_eq!(ts.to_string(), "[1, NULL, \"x\"]");

        let m: VecMap<Bytes, Tson> = vec![(Bytes::from_static(b"k"), Tson::from(false))].into();
        assert_eq!(Tson::from(m).to_string(), "{\n  \"k\": FALSE\n}");
    }
}
