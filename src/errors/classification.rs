use super::types::ReportError;

/// Hint for callers that wrap report requests in their own resilience layer.
/// The report core itself never retries.
#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub retryable: bool,
}

impl ReportError {
    /// Classify this error to determine its type and whether an outer layer may retry it.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            // Store outages may clear on their own
            ReportError::DataAccess(_) => ErrorClassification {
                error_type: "DataAccessError",
                retryable: true,
            },
            ReportError::Io(_) => ErrorClassification {
                error_type: "IoError",
                retryable: true,
            },

            ReportError::Validation(_) => ErrorClassification {
                error_type: "ValidationError",
                retryable: false,
            },
            ReportError::ExportGeneration(_) => ErrorClassification {
                error_type: "ExportGenerationError",
                retryable: false,
            },
            ReportError::Config(_) => ErrorClassification {
                error_type: "ConfigError",
                retryable: false,
            },
            ReportError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                retryable: false,
            },
            ReportError::Yaml(_) => ErrorClassification {
                error_type: "YamlError",
                retryable: false,
            },
            ReportError::Internal(_) => ErrorClassification {
                error_type: "InternalError",
                retryable: false,
            },
        }
    }
}
