/// Errors that can occur while decoding a code.
///
/// Every variant means the input is unusable as a whole; no partial answers
/// are ever returned alongside them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Nothing left after stripping whitespace and invisible characters.
    #[error("code is empty")]
    EmptyInput,

    /// A data glyph is not part of the alphabet.
    #[error("unknown symbol {0:?} in code")]
    UnknownSymbol(char),

    /// The payload has no glyph left to act as checksum.
    #[error("code has no checksum symbol")]
    MissingChecksum,

    /// The trailing checksum glyph is not part of the alphabet.
    #[error("checksum symbol {0:?} is not a valid symbol")]
    InvalidChecksumSymbol(char),

    /// The data does not add up to the embedded checksum.
    #[error("checksum mismatch (computed {computed}, embedded {embedded}); code is incomplete or was modified")]
    ChecksumMismatch { computed: u16, embedded: u16 },
}

/// A string that is not one of the recognised avatar glyphs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a recognised avatar: {0:?}")]
pub struct AvatarError(pub String);

pub type Result<T> = std::result::Result<T, DecodeError>;
