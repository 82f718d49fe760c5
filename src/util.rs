use bytes::Bytes;

#[macro_export]
/// Helper macro to make implementing `From` easier.
macro_rules! from_fn {
    ($to:ty, $from:ty, $fn:expr) => {
        impl From<$from> for $to {
            fn from(f: $from) -> $to { $fn(f) }
        }
    };
}

/// Renders a bytestring as a quoted string when it is valid UTF-8, and as hex
/// otherwise.
///
/// # Example
///
/// ```
/// use tson::{prelude::*, util::fmt_bytes};
///
/// assert_eq!(fmt_bytes(&Bytes::from_static(b"hi")), "\"hi\"");
/// assert_eq!(fmt_bytes(&Bytes::from_static(&[0xff, 0x01])), "b\"ff01\"");
/// ```
pub fn fmt_bytes(bytes: &Bytes) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => format!("{:?}", s),
        Err(_) => {
            let mut bytes_string: String = "b\"".to_owned();
            bytes
                .iter()
                .for_each(|c| bytes_string.push_str(&format!("{:02x}", c)));
            bytes_string.push('"');

            bytes_string
        }
    }
}
