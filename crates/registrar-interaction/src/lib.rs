//! External collaborators for the Registrar console: the text-generation
//! service and the assistant bridge built on it.

pub mod bridge;
pub mod config;
pub mod gemini_api_agent;
pub mod generator;

pub use bridge::{AssistantBridge, CONNECTIVITY_FALLBACK, EMPTY_REPLY_FALLBACK};
pub use gemini_api_agent::GeminiApiAgent;
pub use generator::{GenerationError, GenerationRequest, TextGenerator, UnconfiguredGenerator};
