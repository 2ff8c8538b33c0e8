//! Error types for glyph decoding and font table lookups

use thiserror::Error;

/// Error type for Z1 font operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GlyphError {
    /// Packed record slice is not exactly 8 bytes
    #[error("invalid glyph record length: {0} bytes, expected 8")]
    InvalidRecordLength(usize),

    /// Column count nibble is outside 0..=5
    #[error("invalid column count: {0}")]
    InvalidColumnCount(u8),

    /// Dup-prev tag on the first column
    #[error("dup-prev tag on column 0")]
    InvalidTagPlacement,

    /// Mono append and bold append on the same column
    #[error("conflicting mono and bold append tags on column {column}")]
    ConflictingTags { column: usize },

    /// Character code outside the 32..=127 table
    #[error("unknown character code: {0}")]
    UnknownCharacterCode(u32),

    /// Packed table is not 96 records long
    #[error("invalid font table length: {0} bytes, expected 768")]
    InvalidTableLength(usize),

    /// Font id outside 0..=3
    #[error("invalid style id: {0}")]
    InvalidStyle(u8),

    /// A record inside a packed table failed to decode
    #[error("glyph {code}: {source}")]
    Record {
        code: u8,
        #[source]
        source: Box<GlyphError>,
    },
}

/// Result type for Z1 font operations
pub type Result<T> = std::result::Result<T, GlyphError>;
