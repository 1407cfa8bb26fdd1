//! Assistant bridge: turns a question plus the record snapshot into a reply.

use crate::generator::{GenerationRequest, TextGenerator};
use registrar_core::CheckInRecord;
use registrar_core::assistant::build_system_context;
use std::sync::Arc;

/// Shown when the service fails in any way.
pub const CONNECTIVITY_FALLBACK: &str =
    "I'm experiencing connectivity issues. Please try again later.";

/// Shown when the service answers with no usable text.
pub const EMPTY_REPLY_FALLBACK: &str = "I'm sorry, I couldn't process that request.";

/// Forwards assistant questions to a [`TextGenerator`].
///
/// The bridge only reads records. It never returns an error: failures are
/// logged and replaced by [`CONNECTIVITY_FALLBACK`].
#[derive(Clone)]
pub struct AssistantBridge {
    generator: Arc<dyn TextGenerator>,
    model: String,
    election_date: String,
}

impl AssistantBridge {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        model: impl Into<String>,
        election_date: impl Into<String>,
    ) -> Self {
        Self {
            generator,
            model: model.into(),
            election_date: election_date.into(),
        }
    }

    /// Asks one question about `records` and returns the text to show.
    pub async fn ask(&self, utterance: &str, records: &[CheckInRecord]) -> String {
        let system_instruction = match build_system_context(&self.election_date, records) {
            Ok(context) => context,
            Err(err) => {
                tracing::error!("AI Chat Error: failed to build context: {err}");
                return CONNECTIVITY_FALLBACK.to_string();
            }
        };

        let request = GenerationRequest {
            model: self.model.clone(),
            system_instruction,
            utterance: utterance.to_string(),
        };

        match self.generator.generate(&request).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => EMPTY_REPLY_FALLBACK.to_string(),
            Err(err) => {
                tracing::error!(record_count = records.len(), "AI Chat Error: {err}");
                CONNECTIVITY_FALLBACK.to_string()
            }
        }
    }
}
