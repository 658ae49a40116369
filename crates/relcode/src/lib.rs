//! Shareable emoji codes for relationship-preference questionnaires.
//!
//! relcode turns a person's answers into a short, checksummed string of
//! emoji that survives copy-paste through chat apps, and turns it back.
//!
//! # Crate Structure
//!
//! - [`catalog`]: question catalog and canonical answer-slot layout
//! - [`codec`]: emoji alphabet, block compression, checksum, encode/decode
//! - [`session`]: profile state with explicit load/save (behind `session` feature)
//!
//! # Example
//!
//! ```
//! use relcode::catalog::{Answers, Catalog};
//! use relcode::codec::{decode, encode, Avatar};
//!
//! let catalog = Catalog::embedded();
//! let mut answers = Answers::new();
//! answers.insert("core_time".to_string(), vec![4, 0, 3, 0, 0]);
//!
//! let code = encode(catalog, &answers, Avatar::DEFAULT);
//! let decoded = decode(catalog, &code).unwrap();
//! assert_eq!(decoded.answers, answers);
//! ```

/// Re-export catalog types.
pub mod catalog {
    pub use relcode_catalog::*;
}

/// Re-export codec types.
pub mod codec {
    pub use relcode_codec::*;
}

/// Re-export session types (requires `session` feature).
#[cfg(feature = "session")]
pub mod session {
    pub use relcode_session::*;
}
