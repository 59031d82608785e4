use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum A11yError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("Unknown impact tier: {0}")]
    UnknownImpact(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unexpected error: {0}")]
    Unknown(String),
}

impl A11yError {
    pub fn input(message: impl Into<String>) -> Self {
        A11yError::Input(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        A11yError::Config(message.into())
    }

    pub fn to_payload(&self) -> ErrorPayload {
        match self {
            A11yError::Io(e) => ErrorPayload::new(
                ErrorCategory::Input,
                e.to_string(),
                "Check file paths and permissions.",
            ),
            A11yError::Serialization(e) => ErrorPayload::new(
                ErrorCategory::Input,
                e.to_string(),
                "Check that the file contains valid audit JSON.",
            ),
            A11yError::Input(msg) => ErrorPayload::new(
                ErrorCategory::Input,
                msg.to_string(),
                "Verify the audit/violation JSON shape; run with --verbose for details.",
            ),
            A11yError::UnknownImpact(msg) => ErrorPayload::new(
                ErrorCategory::Severity,
                format!("Unknown impact tier: {}", msg),
                "Use one of: critical, serious, moderate, minor.",
            ),
            A11yError::Config(msg) => ErrorPayload::new(
                ErrorCategory::Config,
                msg.to_string(),
                "Check config file keys and flag values (e.g., weights, --noise-threshold).",
            ),
            A11yError::Unknown(msg) => ErrorPayload::new(
                ErrorCategory::Unknown,
                msg.to_string(),
                "Re-run with --verbose; file an issue if persistent.",
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, A11yError>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Input,
    Severity,
    Config,
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub category: ErrorCategory,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

impl ErrorPayload {
    pub fn new(category: ErrorCategory, message: String, remediation: impl Into<String>) -> Self {
        Self {
            category,
            message,
            remediation: Some(remediation.into()),
        }
    }
}
