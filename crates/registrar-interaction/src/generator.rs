//! The text-generation collaborator seam.

use async_trait::async_trait;
use thiserror::Error;

/// One request to a text-generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Model identifier, e.g. `gemini-3-flash-preview`.
    pub model: String,
    /// System context sent alongside the user text.
    pub system_instruction: String,
    /// What the user asked.
    pub utterance: String,
}

/// Failure talking to a text-generation service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// No API key is configured.
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    /// The request never produced an HTTP response.
    #[error("Request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The response carried no text.
    #[error("Response contained no text")]
    EmptyResponse,
}

/// A service that turns a system context plus a user utterance into text.
///
/// One call is one attempt; implementations do not retry.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}

/// Stand-in used when no service is configured. Every call fails with
/// [`GenerationError::MissingCredentials`].
#[derive(Debug, Clone)]
pub struct UnconfiguredGenerator {
    reason: String,
}

impl UnconfiguredGenerator {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl TextGenerator for UnconfiguredGenerator {
    async fn generate(&self, _request: &GenerationRequest) -> Result<String, GenerationError> {
        Err(GenerationError::MissingCredentials(self.reason.clone()))
    }
}
