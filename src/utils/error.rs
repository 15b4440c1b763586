use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Backend request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Backend rejected the request with status {status}: {detail}")]
    BackendRejected { status: u16, detail: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown option '{value}' for {field}")]
    UnknownOption { field: String, value: String },

    #[error("Lead form has {} invalid field(s): {}", violations.len(), format_violations(violations))]
    InvalidLead { violations: Vec<FieldViolation> },

    #[error("Session '{session_id}' not found")]
    SessionNotFound { session_id: String },
}

/// One rejected form field, reported back to the visitor next to the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

fn format_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{} ({})", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Network,
    Storage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl QuoteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            QuoteError::ApiError(_) | QuoteError::BackendRejected { .. } => ErrorCategory::Network,
            QuoteError::IoError(_) | QuoteError::SessionNotFound { .. } => ErrorCategory::Storage,
            QuoteError::ConfigError { .. }
            | QuoteError::InvalidConfigValueError { .. }
            | QuoteError::TomlError(_) => ErrorCategory::Configuration,
            QuoteError::SerializationError(_)
            | QuoteError::UnknownOption { .. }
            | QuoteError::InvalidLead { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            QuoteError::SessionNotFound { .. } => ErrorSeverity::Low,
            QuoteError::ApiError(_) | QuoteError::BackendRejected { .. } => ErrorSeverity::Medium,
            QuoteError::InvalidLead { .. }
            | QuoteError::UnknownOption { .. }
            | QuoteError::SerializationError(_) => ErrorSeverity::High,
            QuoteError::IoError(_)
            | QuoteError::TomlError(_)
            | QuoteError::ConfigError { .. }
            | QuoteError::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            QuoteError::InvalidLead { violations } => {
                let lines: Vec<String> = violations
                    .iter()
                    .map(|v| format!("  - {}: {}", v.field, v.message))
                    .collect();
                format!("Please fix the following fields:\n{}", lines.join("\n"))
            }
            QuoteError::UnknownOption { field, value } => {
                format!("'{}' is not a valid choice for {}", value, field)
            }
            QuoteError::ApiError(_) => "Could not reach the lead service".to_string(),
            QuoteError::BackendRejected { detail, .. } => detail.clone(),
            QuoteError::SessionNotFound { session_id } => {
                format!("No saved quote for session {}", session_id)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check the lead form values against the allowed options",
            ErrorCategory::Configuration => "Review the TOML configuration and environment variables",
            ErrorCategory::Network => "Check the backend endpoint and retry later",
            ErrorCategory::Storage => "Make sure the session storage path exists and is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, QuoteError>;
