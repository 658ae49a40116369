use std::sync::OnceLock;

use jsonschema::Validator;
use serde_json::Value;

use crate::error::{CatalogError, Result};

/// JSON Schema every catalog document must satisfy.
pub const CATALOG_SCHEMA: &str = include_str!("../data/catalog.schema.json");

fn catalog_validator() -> Result<&'static Validator> {
    static VALIDATOR: OnceLock<std::result::Result<Validator, String>> = OnceLock::new();

    VALIDATOR
        .get_or_init(|| {
            let schema: Value = serde_json::from_str(CATALOG_SCHEMA).map_err(|err| err.to_string())?;
            jsonschema::validator_for(&schema).map_err(|err| err.to_string())
        })
        .as_ref()
        .map_err(|message| CatalogError::SchemaViolation(format!("catalog schema: {message}")))
}

/// Validate a parsed catalog document against [`CATALOG_SCHEMA`].
///
/// Reports the first few violations joined into a single message.
pub fn validate_document(document: &Value) -> Result<()> {
    let validator = catalog_validator()?;

    let mut errors = validator.iter_errors(document);
    if let Some(first) = errors.next() {
        let mut message = first.to_string();
        for err in errors.take(3) {
            message.push_str("; ");
            message.push_str(&err.to_string());
        }
        return Err(CatalogError::SchemaViolation(message));
    }

    Ok(())
}
