use serde::Serialize;
use thiserror::Error;

/// Failures from the single outbound call to the Exa API.
#[derive(Debug, Error)]
pub enum ExaError {
    #[error("Exa API request failed: {0}")]
    Transport(String),

    #[error("Exa API error {status}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Failed to parse Exa response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ExaError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ExaError::Decode(error.to_string())
        } else {
            ExaError::Transport(error.to_string())
        }
    }
}

/// Machine-readable kind attached to every error that crosses a function
/// boundary. Serialized kebab-case on the callable wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    FailedPrecondition,
    NotFound,
    Internal,
}

/// Transport-agnostic error carried out of a handler. Each entrypoint maps
/// this to its own wire shape: HTTP status + JSON body, or a structured
/// error payload on the callable transport.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct FunctionError {
    pub kind: ErrorKind,
    pub message: String,
    pub detail: Option<String>,
}

impl FunctionError {
    pub fn failed_precondition(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::FailedPrecondition,
            message: message.into(),
            detail: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::NotFound,
            message: message.into(),
            detail: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Internal,
            message: message.into(),
            detail: None,
        }
    }
}

impl From<ExaError> for FunctionError {
    fn from(error: ExaError) -> Self {
        match error {
            ExaError::UpstreamStatus { status, body } => Self {
                kind: ErrorKind::Internal,
                message: format!("Exa API error {status}"),
                detail: Some(body),
            },
            other => Self::internal(other.to_string()),
        }
    }
}
