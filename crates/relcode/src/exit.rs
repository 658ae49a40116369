use std::fmt;
use std::io;

use relcode_catalog::CatalogError;
use relcode_codec::DecodeError;
use relcode_session::SessionError;

// Exit codes shared with the rest of the tooling family.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound => FAILURE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn catalog_error(context: &str, err: CatalogError) -> CliError {
    match err {
        CatalogError::LoadFailed(_) => CliError::new(FAILURE, format!("{context}: {err}")),
        other => CliError::new(DATA_INVALID, format!("{context}: {other}")),
    }
}

pub fn decode_error(context: &str, err: DecodeError) -> CliError {
    CliError::new(DATA_INVALID, format!("{context}: {err}"))
}

pub fn session_error(context: &str, err: SessionError) -> CliError {
    match err {
        SessionError::Io(source) => io_error(context, source),
        SessionError::Decode(err) => decode_error(context, err),
        SessionError::UnknownQuestion(_)
        | SessionError::OptionOutOfRange { .. }
        | SessionError::UnknownModule(_)
        | SessionError::UnknownArchive(_) => CliError::new(USAGE, format!("{context}: {err}")),
        other => CliError::new(DATA_INVALID, format!("{context}: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_failures_are_data_invalid() {
        let err = decode_error("decode failed", DecodeError::EmptyInput);
        assert_eq!(err.code, DATA_INVALID);
        assert!(err.message.starts_with("decode failed: "));
    }

    #[test]
    fn session_lookup_failures_are_usage() {
        let err = session_error("set failed", SessionError::UnknownQuestion("x".into()));
        assert_eq!(err.code, USAGE);
    }

    #[test]
    fn permission_denied_maps_to_50() {
        let err = io_error(
            "save failed",
            io::Error::new(io::ErrorKind::PermissionDenied, "nope"),
        );
        assert_eq!(err.code, PERMISSION_DENIED);
    }
}
