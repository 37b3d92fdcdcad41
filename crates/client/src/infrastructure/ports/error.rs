//! Error types for port operations.

use quillpost_domain::DomainError;
use quillpost_shared::ErrorBody;

/// Failure of a call to the backend platform.
///
/// Rejections are classified by HTTP status; the platform's error `kind`
/// (e.g. `document_not_found`) is kept for callers that need finer detail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
    /// No session, or a session without the required scope (401).
    #[error("Unauthorized ({kind}): {message}")]
    Unauthorized { kind: String, message: String },

    /// Authenticated but not allowed (403).
    #[error("Forbidden ({kind}): {message}")]
    Forbidden { kind: String, message: String },

    /// Document, file or route missing (404).
    #[error("Not found ({kind}): {message}")]
    NotFound { kind: String, message: String },

    /// Id or unique attribute already taken (409).
    #[error("Conflict ({kind}): {message}")]
    Conflict { kind: String, message: String },

    /// Any other non-success response.
    #[error("Request rejected with status {code} ({kind}): {message}")]
    Rejected {
        code: u16,
        kind: String,
        message: String,
    },

    /// The request never produced a response.
    #[error("Request failed in {operation}: {message}")]
    Transport {
        operation: &'static str,
        message: String,
    },

    /// A success response that could not be understood.
    #[error("Invalid response in {operation}: {message}")]
    InvalidResponse {
        operation: &'static str,
        message: String,
    },
}

impl PlatformError {
    /// Classify a decoded error body.
    pub fn from_body(body: ErrorBody) -> Self {
        let ErrorBody {
            message,
            code,
            kind,
            ..
        } = body;
        match code {
            401 => Self::Unauthorized { kind, message },
            403 => Self::Forbidden { kind, message },
            404 => Self::NotFound { kind, message },
            409 => Self::Conflict { kind, message },
            _ => Self::Rejected {
                code,
                kind,
                message,
            },
        }
    }

    /// Classify a response whose body was not a platform error body.
    pub fn from_status(status: u16, text: impl Into<String>) -> Self {
        Self::from_body(ErrorBody::new(status, "", text))
    }

    pub fn transport(operation: &'static str, message: impl ToString) -> Self {
        Self::Transport {
            operation,
            message: message.to_string(),
        }
    }

    pub fn invalid_response(operation: &'static str, message: impl ToString) -> Self {
        Self::InvalidResponse {
            operation,
            message: message.to_string(),
        }
    }

    /// A payload that decoded but failed domain validation.
    pub fn invalid_payload(operation: &'static str, error: DomainError) -> Self {
        Self::invalid_response(operation, error)
    }

    /// The authorization-denied signal.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    /// Platform error type, when the platform supplied one.
    pub fn kind(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { kind, .. }
            | Self::Forbidden { kind, .. }
            | Self::NotFound { kind, .. }
            | Self::Conflict { kind, .. }
            | Self::Rejected { kind, .. } => Some(kind.as_str()).filter(|k| !k.is_empty()),
            Self::Transport { .. } | Self::InvalidResponse { .. } => None,
        }
    }
}
