use thiserror::Error;

#[derive(Error, Debug)]
pub enum LottoError {
    #[error("Source unavailable at {endpoint}: {reason}")]
    SourceUnavailable { endpoint: String, reason: String },

    #[error("Malformed recommendation: {reason}")]
    MalformedRecommendation { reason: String },

    #[error("Number generation exhausted after {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl LottoError {
    pub fn source_unavailable(endpoint: impl Into<String>, reason: impl ToString) -> Self {
        Self::SourceUnavailable {
            endpoint: endpoint.into(),
            reason: reason.to_string(),
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedRecommendation {
            reason: reason.into(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LottoError::SourceUnavailable { .. } => ErrorSeverity::Medium,
            LottoError::MalformedRecommendation { .. } | LottoError::ValidationError { .. } => {
                ErrorSeverity::High
            }
            LottoError::ConfigError { .. }
            | LottoError::InvalidConfigValueError { .. }
            | LottoError::MissingConfigError { .. } => ErrorSeverity::High,
            LottoError::GenerationExhausted { .. }
            | LottoError::IoError(_)
            | LottoError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    /// Data-unavailable conditions are contained by the caller; everything
    /// else is a contract or internal failure.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, LottoError::SourceUnavailable { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LottoError::SourceUnavailable { .. } => {
                "Lottery data is currently unavailable".to_string()
            }
            LottoError::MalformedRecommendation { .. } => {
                "The recommendation service returned an unusable result".to_string()
            }
            LottoError::GenerationExhausted { .. } => {
                "Random number generation failed unexpectedly".to_string()
            }
            LottoError::ConfigError { message } => format!("Configuration problem: {}", message),
            LottoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            LottoError::MissingConfigError { field } => {
                format!("Missing setting '{}'", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LottoError::SourceUnavailable { .. } => {
                "Check that the lottery API is reachable at the configured base URL and try again"
            }
            LottoError::MalformedRecommendation { .. } => {
                "Use random generation instead or report the recommendation payload"
            }
            LottoError::GenerationExhausted { .. } => "The random source is broken; restart the tool",
            LottoError::ConfigError { .. }
            | LottoError::InvalidConfigValueError { .. }
            | LottoError::MissingConfigError { .. } => {
                "Fix the configuration file or command-line flags"
            }
            LottoError::ValidationError { .. } => "Check the arguments passed to the command",
            LottoError::IoError(_) | LottoError::SerializationError(_) => {
                "Run again with --verbose for details"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, LottoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_source_failures_are_recoverable() {
        assert!(LottoError::source_unavailable("/drawings", "timeout").is_recoverable());
        assert!(!LottoError::malformed("missing 'third'").is_recoverable());
        assert!(!LottoError::GenerationExhausted { attempts: 10_000 }.is_recoverable());
    }

    #[test]
    fn test_severity_mapping() {
        assert_eq!(
            LottoError::source_unavailable("/drawings", "refused").severity(),
            ErrorSeverity::Medium
        );
        assert_eq!(
            LottoError::GenerationExhausted { attempts: 1 }.severity(),
            ErrorSeverity::Critical
        );
    }

    #[test]
    fn test_contract_and_config_failures_are_high_severity() {
        assert_eq!(LottoError::malformed("missing 'sixth'").severity(), ErrorSeverity::High);
        assert_eq!(
            LottoError::ValidationError { message: "round must be positive".to_string() }
                .severity(),
            ErrorSeverity::High
        );
        assert_eq!(
            LottoError::MissingConfigError { field: "source.base_url".to_string() }.severity(),
            ErrorSeverity::High
        );
    }

    #[test]
    fn test_display_includes_endpoint() {
        let err = LottoError::source_unavailable("/drawings/frequent", "HTTP 500");
        assert_eq!(
            err.to_string(),
            "Source unavailable at /drawings/frequent: HTTP 500"
        );
    }
}
