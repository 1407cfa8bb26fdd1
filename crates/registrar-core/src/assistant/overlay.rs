//! Assistant chat overlay state.
//!
//! An [`AssistantOverlay`] lives from the moment the chat is opened until it
//! is closed. Sending is split in two phases: [`AssistantOverlay::begin_send`]
//! appends the user's message right away and hands out a [`PendingReply`];
//! [`AssistantOverlay::settle`] appends the reply once the external call has
//! finished. Only one reply may be pending at a time.

use super::message::{ConversationMessage, MessageRole};
use crate::error::{RegistrarError, Result};
use uuid::Uuid;

/// First message of every new transcript.
pub const GREETING: &str =
    "Hello! I'm your Registrar Assistant. How can I help you manage the check-ins today?";

/// Ticket for a reply that has not arrived yet.
///
/// Carries the overlay session it belongs to, so that a reply finishing after
/// its overlay was closed can be recognised and dropped. Not `Clone`: each
/// ticket settles at most once.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingReply {
    session_id: String,
    utterance: String,
}

impl PendingReply {
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// The question that was sent.
    pub fn utterance(&self) -> &str {
        &self.utterance
    }
}

/// One open assistant chat and its append-only transcript.
#[derive(Debug, Clone)]
pub struct AssistantOverlay {
    session_id: String,
    transcript: Vec<ConversationMessage>,
    pending: bool,
}

impl Default for AssistantOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl AssistantOverlay {
    /// Opens a fresh overlay whose transcript holds only the greeting.
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            transcript: vec![ConversationMessage::assistant(GREETING)],
            pending: false,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn transcript(&self) -> &[ConversationMessage] {
        &self.transcript
    }

    /// True between `begin_send` and `settle`.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Records the user's message and marks a reply as pending.
    ///
    /// Blank messages are refused, as is a second send while a reply is still
    /// outstanding. Neither refusal touches the transcript.
    pub fn begin_send(&mut self, utterance: &str) -> Result<PendingReply> {
        if utterance.trim().is_empty() {
            return Err(RegistrarError::EmptyUtterance);
        }
        if self.pending {
            return Err(RegistrarError::AssistantBusy);
        }

        self.transcript.push(ConversationMessage::user(utterance));
        self.pending = true;
        tracing::debug!(session_id = %self.session_id, "assistant request pending");

        Ok(PendingReply {
            session_id: self.session_id.clone(),
            utterance: utterance.to_string(),
        })
    }

    /// Appends the reply for `pending` and clears the pending flag.
    ///
    /// Replies addressed to a different overlay session are refused with
    /// [`RegistrarError::StaleReply`], and replies arriving while nothing is
    /// pending with [`RegistrarError::NoPendingReply`]. Both leave this
    /// overlay untouched.
    pub fn settle(&mut self, pending: PendingReply, reply: impl Into<String>) -> Result<()> {
        if pending.session_id != self.session_id {
            return Err(RegistrarError::StaleReply(pending.session_id));
        }
        if !self.pending {
            return Err(RegistrarError::NoPendingReply);
        }

        self.transcript.push(ConversationMessage::assistant(reply));
        self.pending = false;
        tracing::debug!(session_id = %self.session_id, "assistant request settled");
        Ok(())
    }

    /// The most recent assistant message.
    pub fn last_reply(&self) -> Option<&ConversationMessage> {
        self.transcript
            .iter()
            .rev()
            .find(|message| message.role == MessageRole::Assistant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_overlay_starts_with_greeting() {
        let overlay = AssistantOverlay::new();
        assert_eq!(overlay.transcript().len(), 1);
        assert_eq!(overlay.transcript()[0].role, MessageRole::Assistant);
        assert_eq!(overlay.transcript()[0].content, GREETING);
        assert!(!overlay.is_pending());
    }

    #[test]
    fn test_two_phase_send_orders_messages() {
        let mut overlay = AssistantOverlay::new();

        let pending = overlay.begin_send("How many check-ins?").unwrap();
        assert!(overlay.is_pending());
        assert_eq!(overlay.transcript().len(), 2);
        assert_eq!(overlay.transcript()[1].role, MessageRole::User);
        assert_eq!(pending.utterance(), "How many check-ins?");

        overlay.settle(pending, "Two so far.").unwrap();
        assert!(!overlay.is_pending());
        assert_eq!(overlay.transcript().len(), 3);
        assert_eq!(overlay.last_reply().unwrap().content, "Two so far.");
    }

    #[test]
    fn test_second_send_while_pending_is_refused() {
        let mut overlay = AssistantOverlay::new();
        let _pending = overlay.begin_send("first").unwrap();

        assert_eq!(overlay.begin_send("second"), Err(RegistrarError::AssistantBusy));
        assert_eq!(overlay.transcript().len(), 2);
    }

    #[test]
    fn test_reply_without_pending_send_is_refused() {
        let mut overlay = AssistantOverlay::new();
        let pending = overlay.begin_send("q").unwrap();
        overlay.settle(pending, "first").unwrap();

        let duplicate = PendingReply {
            session_id: overlay.session_id().to_string(),
            utterance: "q".to_string(),
        };
        assert_eq!(
            overlay.settle(duplicate, "second"),
            Err(RegistrarError::NoPendingReply)
        );
        assert_eq!(overlay.transcript().len(), 3);
        assert_eq!(overlay.last_reply().unwrap().content, "first");
    }

    #[test]
    fn test_blank_utterance_is_refused() {
        let mut overlay = AssistantOverlay::new();
        assert_eq!(overlay.begin_send("   "), Err(RegistrarError::EmptyUtterance));
        assert!(!overlay.is_pending());
        assert_eq!(overlay.transcript().len(), 1);
    }

    #[test]
    fn test_reply_for_closed_overlay_is_stale() {
        let mut old = AssistantOverlay::new();
        let pending = old.begin_send("question").unwrap();

        let mut fresh = AssistantOverlay::new();
        let err = fresh.settle(pending, "late answer").unwrap_err();

        assert!(err.is_stale_reply());
        assert_eq!(fresh.transcript().len(), 1);
        assert!(!fresh.is_pending());
    }
}
