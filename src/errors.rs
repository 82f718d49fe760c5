//! Errors produced while decoding TSON and binding it into Rust types.

use crate::TType;
use failure::Fail;

#[derive(Debug, Clone, PartialEq, Fail)]
/// An error encountered when decoding or binding fails.
///
/// Every parser returns exactly one of these; nested failures are propagated
/// unchanged to the caller.
pub enum DecodingError {
    /// Fewer bytes were available than the grammar requires.
    #[fail(display = "input ended before the value was complete")]
    Truncated,
    /// A required delimiter was absent.
    #[fail(display = "expected delimiter `{}`", expected)]
    MissingTerminator {
        /// The delimiter the grammar requires at this position.
        expected: char,
    },
    /// A digit field did not parse as a number.
    #[fail(display = "malformed number: {:?}", text)]
    MalformedNumber {
        /// The offending field, lossily converted to text.
        text: String,
    },
    /// The type tag did not match any known kind.
    #[fail(display = "found unknown type tag: {:?}", tag)]
    UnknownType {
        /// The tag byte.
        tag: char,
    },
    /// An aggregate mixed integer and text keys, or used another kind as a key.
    #[fail(display = "aggregate keys are not uniformly integers or uniformly strings")]
    HeterogeneousKeys,
    /// An integer key cannot index a dense list of bounded size.
    #[fail(display = "integer key {} is outside of [0, {})", key, limit)]
    KeyOutOfRange {
        /// The key as decoded.
        key: i64,
        /// The exclusive upper bound for keys in this aggregate.
        limit: usize,
    },
    /// Aggregates were nested deeper than allowed.
    #[fail(display = "aggregates nested deeper than {}", limit)]
    DepthLimitExceeded {
        /// The configured maximum depth.
        limit: usize,
    },
    /// Bytes remained after the root value.
    #[fail(display = "{} bytes remained after the value", remaining)]
    TrailingBytes {
        /// Number of undecoded bytes.
        remaining: usize,
    },
    /// The decoded value cannot be converted into the requested type.
    #[fail(display = "cannot convert {:?} into {}", found, expected)]
    TypeMismatch {
        /// Name of the destination type.
        expected: &'static str,
        /// Kind of the decoded value.
        found: TType,
    },
}

/// Fieldless view of [`DecodingError`], convenient for matching.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// See [`DecodingError::Truncated`].
    Truncated,
    /// See [`DecodingError::MissingTerminator`].
    MissingTerminator,
    /// See [`DecodingError::MalformedNumber`].
    MalformedNumber,
    /// See [`DecodingError::UnknownType`].
    UnknownType,
    /// See [`DecodingError::HeterogeneousKeys`].
    HeterogeneousKeys,
    /// See [`DecodingError::KeyOutOfRange`].
    KeyOutOfRange,
    /// See [`DecodingError::DepthLimitExceeded`].
    DepthLimitExceeded,
    /// See [`DecodingError::TrailingBytes`].
    TrailingBytes,
    /// See [`DecodingError::TypeMismatch`].
    TypeMismatch,
}

impl DecodingError {
    /// Returns the kind of this error.
    ///
    /// # Example
    ///
    /// ```
    /// use tson::prelude::*;
    ///
    /// let err = decode_full::<i64>(b"i:4").unwrap_err();
    ///
    /// assert_eq!(err.kind(), ErrorKind::Truncated);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        use DecodingError::*;
        match self {
            Truncated => ErrorKind::Truncated,
            MissingTerminator { .. } => ErrorKind::MissingTerminator,
            MalformedNumber { .. } => ErrorKind::MalformedNumber,
            UnknownType { .. } => ErrorKind::UnknownType,
            HeterogeneousKeys => ErrorKind::HeterogeneousKeys,
            KeyOutOfRange { .. } => ErrorKind::KeyOutOfRange,
            DepthLimitExceeded { .. } => ErrorKind::DepthLimitExceeded,
            TrailingBytes { .. } => ErrorKind::TrailingBytes,
            TypeMismatch { .. } => ErrorKind::TypeMismatch,
        }
    }

    pub(crate) fn missing(expected: u8) -> Self {
        DecodingError::MissingTerminator {
            expected: expected as char,
        }
    }

    pub(crate) fn malformed(field: &[u8]) -> Self {
        DecodingError::MalformedNumber {
            text: String::from_utf8_lossy(field).into_owned(),
        }
    }

    pub(crate) fn mismatch(expected: &'static str, found: TType) -> Self {
        DecodingError::TypeMismatch { expected, found }
    }
}
