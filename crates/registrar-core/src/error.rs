//! Error types for the Registrar application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the Registrar domain.
///
/// Validation failures are not represented here: a rejected draft produces a
/// [`ValidationReport`](crate::record::ValidationReport), which is a normal
/// outcome rather than an error.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrarError {
    /// A draft field name that the check-in form does not have.
    #[error("Unknown draft field: '{0}'")]
    UnknownField(String),

    /// A status value outside `Active`, `Pending`, `Cancelled`.
    #[error("Invalid check-in status: '{0}' (expected Active, Pending or Cancelled)")]
    InvalidStatus(String),

    /// The assistant was asked a blank question.
    #[error("Cannot send an empty message to the assistant")]
    EmptyUtterance,

    /// A reply is still pending for this overlay.
    #[error("The assistant is still answering the previous message")]
    AssistantBusy,

    /// A reply arrived for an overlay session that is no longer open.
    #[error("Reply belongs to assistant session '{0}' which is no longer open")]
    StaleReply(String),

    /// A reply arrived while the overlay was not waiting for one.
    #[error("No assistant reply is pending")]
    NoPendingReply,

    /// The capture device was denied or absent.
    #[error("Media capture unavailable: {0}")]
    MediaUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RegistrarError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an UnknownField error
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField(name.into())
    }

    /// Creates an InvalidStatus error
    pub fn invalid_status(value: impl Into<String>) -> Self {
        Self::InvalidStatus(value.into())
    }

    /// Creates a MediaUnavailable error
    pub fn media_unavailable(reason: impl Into<String>) -> Self {
        Self::MediaUnavailable(reason.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this error came from user input on the check-in form
    pub fn is_form_input(&self) -> bool {
        matches!(self, Self::UnknownField(_) | Self::InvalidStatus(_))
    }

    /// Check if this is a stale assistant reply
    pub fn is_stale_reply(&self) -> bool {
        matches!(self, Self::StaleReply(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for RegistrarError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for RegistrarError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for RegistrarError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, RegistrarError>`.
pub type Result<T> = std::result::Result<T, RegistrarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_input_errors() {
        assert!(RegistrarError::unknown_field("badge").is_form_input());
        assert!(RegistrarError::invalid_status("Done").is_form_input());
        assert!(!RegistrarError::AssistantBusy.is_form_input());
    }

    #[test]
    fn test_io_error_conversion_keeps_kind() {
        let err: RegistrarError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        match err {
            RegistrarError::Io { message } => assert!(message.contains("NotFound")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
