//! Error bodies returned by the platform.

use serde::{Deserialize, Serialize};

/// JSON body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub code: u16,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub version: String,
}

impl ErrorBody {
    pub fn new(code: u16, kind: &str, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code,
            kind: kind.to_string(),
            version: String::new(),
        }
    }
}

/// Well-known values of [`ErrorBody::kind`].
pub mod error_types {
    pub const GENERAL_UNAUTHORIZED_SCOPE: &str = "general_unauthorized_scope";
    pub const USER_INVALID_CREDENTIALS: &str = "user_invalid_credentials";
    pub const USER_ALREADY_EXISTS: &str = "user_already_exists";
    pub const USER_SESSION_NOT_FOUND: &str = "user_session_not_found";
    pub const DOCUMENT_NOT_FOUND: &str = "document_not_found";
    pub const DOCUMENT_ALREADY_EXISTS: &str = "document_already_exists";
    pub const DOCUMENT_INVALID_STRUCTURE: &str = "document_invalid_structure";
    pub const STORAGE_FILE_NOT_FOUND: &str = "storage_file_not_found";
    pub const STORAGE_FILE_ALREADY_EXISTS: &str = "storage_file_already_exists";
    pub const GENERAL_ARGUMENT_INVALID: &str = "general_argument_invalid";
}
