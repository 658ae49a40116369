//! Question catalog for relcode.
//!
//! The catalog is an ordered list of modules, each holding ordered questions,
//! each holding ordered options. Flattening it yields one attitude slot per
//! option, which is the coordinate system the answer codec works in. The
//! layout is recomputed from the catalog every time and never transmitted.

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod validator;

pub use catalog::{Answers, Catalog, SlotRange, EMBEDDED_CATALOG};
pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
pub use model::{CatalogMeta, Module, OptionLabel, Question};
