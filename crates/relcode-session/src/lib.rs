//! Profile session state for relcode.
//!
//! A [`Session`] holds one person's answers, avatar, enabled modules and
//! named archives. It is loaded from a [`SessionStore`] once and written back
//! with an explicit [`Session::save`] after each mutation.

pub mod attitude;
pub mod config;
pub mod error;
pub mod session;
pub mod store;

pub use attitude::Attitude;
pub use config::SessionConfig;
pub use error::{Result, SessionError};
pub use session::{Session, SessionState, DEFAULT_MODULES, STATE_VERSION};
pub use store::{FileStore, MemoryStore, SessionStore};
