/// Integer tag, `i`
pub(crate) const TAG_INT: u8 = b'i';
/// Float tag, `d`
pub(crate) const TAG_FLOAT: u8 = b'd';
/// Boolean tag, `b`
pub(crate) const TAG_BOOL: u8 = b'b';
/// Bytestring tag, `s`
pub(crate) const TAG_BYT: u8 = b's';
/// Aggregate tag, `a`
pub(crate) const TAG_AGG: u8 = b'a';

/// Separates a tag from its payload, and terminates length and count fields.
pub(crate) const COLON: u8 = b':';
/// Terminates scalars.
pub(crate) const SEMI: u8 = b';';
/// Surrounds bytestring content.
pub(crate) const QUOTE: u8 = b'"';
pub(crate) const OPEN_BRACE: u8 = b'{';
pub(crate) const CLOSE_BRACE: u8 = b'}';

/// The byte that decodes as `true`; anything else is `false`.
pub(crate) const TRUE_BYTE: u8 = b'1';

/// Default for [`DecodeOptions::max_depth`](super::DecodeOptions::max_depth).
pub(crate) const DEFAULT_MAX_DEPTH: usize = 128;
/// Default for
/// [`DecodeOptions::max_sparse_factor`](super::DecodeOptions::max_sparse_factor).
pub(crate) const DEFAULT_SPARSE_FACTOR: usize = 8;
