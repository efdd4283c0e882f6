use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// Caller supplied a filter that is malformed or names no known record.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The operational store could not answer a query.
    #[error("Data access error: {0}")]
    DataAccess(String),

    /// A renderer could not produce a complete payload.
    #[error("Export generation error: {0}")]
    ExportGeneration(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
