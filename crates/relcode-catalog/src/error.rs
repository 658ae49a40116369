/// Errors that can occur while loading or validating a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to load catalog: {0}")]
    LoadFailed(String),

    /// The catalog is not valid JSON or does not match the model.
    #[error("catalog is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The catalog document violates the catalog schema.
    #[error("catalog schema violation: {0}")]
    SchemaViolation(String),

    /// Two modules share the same id.
    #[error("duplicate module id: {0}")]
    DuplicateModule(String),

    /// Two questions share the same id.
    #[error("duplicate question id: {0}")]
    DuplicateQuestion(String),

    /// A question has no options and would occupy no slots.
    #[error("question {0} has no options")]
    EmptyOptions(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
