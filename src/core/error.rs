//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FetchError`] - Transport failures for HTTP requests
//! - [`DecodeError`] - Malformed or invalid backend responses
//! - [`ApiError`] - What a backend call can fail with, as seen by the views
//! - [`StorageError`] - localStorage persistence failures
//!
//! None of these are fatal; every error is scoped to the view that made the
//! request.

use thiserror::Error;

use crate::models::{FieldErrors, VirtualPath};

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Browser window not available")]
    NoWindow,
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, connection refused, ...)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status) with no usable body
    #[error("HTTP error: {0}")]
    HttpError(u16),
    #[error("Failed to read response")]
    ResponseReadFailed,
    #[error("Invalid response content")]
    InvalidContent,
    #[error("Request timed out")]
    Timeout,
}

/// Errors found while decoding and validating a backend response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("JSON parse error: {0}")]
    Json(String),
    /// A listing child resolved to the root location
    #[error("entry '{0}' has no path")]
    InvalidPath(String),
    #[error("entry at '{0}' has an empty name")]
    EmptyName(VirtualPath),
    #[error("listing contains '{0}' more than once")]
    DuplicatePath(VirtualPath),
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Errors surfaced by [`crate::core::ApiClient`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("Invalid response: {0}")]
    Decode(#[from] DecodeError),
    /// Field-level rejection (sign-in form)
    #[error("{0}")]
    Validation(FieldErrors),
    #[error("Not found: {0}")]
    NotFound(VirtualPath),
    #[error("Not a folder: {0}")]
    NotADirectory(VirtualPath),
    #[error("Not signed in")]
    Unauthorized,
}

impl ApiError {
    /// Whether the error means the session is missing or expired.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized | Self::Fetch(FetchError::HttpError(401 | 403))
        )
    }

    /// Whether the error is about the requested location rather than the
    /// network or the session.
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::NotADirectory(_))
    }
}

/// localStorage operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("localStorage not available")]
    StorageUnavailable,
    #[error("failed to serialize value")]
    SerializationFailed,
    #[error("failed to write to localStorage")]
    WriteFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(FetchError::HttpError(500).to_string(), "HTTP error: 500");
        assert_eq!(
            ApiError::from(FetchError::Timeout).to_string(),
            "Request timed out"
        );
    }

    #[test]
    fn test_error_classes() {
        assert!(ApiError::Unauthorized.is_unauthorized());
        assert!(ApiError::Fetch(FetchError::HttpError(401)).is_unauthorized());
        assert!(!ApiError::Fetch(FetchError::HttpError(500)).is_unauthorized());
        assert!(ApiError::NotFound(VirtualPath::new("/gone")).is_invalid_path());
        assert!(!ApiError::Fetch(FetchError::Timeout).is_invalid_path());
    }

    #[test]
    fn test_decode_error_from_json() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        assert!(matches!(DecodeError::from(err), DecodeError::Json(_)));
    }
}
