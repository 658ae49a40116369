use relcode_codec::DecodeError;

/// Errors that can occur in session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Session storage could not be read or written.
    #[error("session storage error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored session state is not valid JSON.
    #[error("session state is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Stored session state has a format version this build cannot read.
    #[error("unsupported session state version {0}")]
    UnsupportedVersion(u32),

    /// An imported code could not be decoded.
    #[error("could not read code: {0}")]
    Decode(#[from] DecodeError),

    /// The question id is not in the catalog.
    #[error("unknown question: {0}")]
    UnknownQuestion(String),

    /// The option index is past the question's option count.
    #[error("question {question} has {count} options, index {index} is out of range")]
    OptionOutOfRange {
        question: String,
        index: usize,
        count: usize,
    },

    /// The module id is not in the catalog.
    #[error("unknown module: {0}")]
    UnknownModule(String),

    /// No archive is stored under the name.
    #[error("no archive named {0:?}")]
    UnknownArchive(String),

    /// A value does not correspond to any attitude level.
    #[error("invalid attitude value {0}")]
    InvalidAttitude(u8),
}

pub type Result<T> = std::result::Result<T, SessionError>;
