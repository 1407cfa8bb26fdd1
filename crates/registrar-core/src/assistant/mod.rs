//! Assistant chat domain module.
//!
//! - `message`: transcript entries (`MessageRole`, `ConversationMessage`)
//! - `overlay`: the open chat, its transcript and the pending-reply state
//! - `context`: the system instruction built from the record snapshot

mod context;
mod message;
mod overlay;

pub use context::build_system_context;
pub use message::{ConversationMessage, MessageRole};
pub use overlay::{AssistantOverlay, GREETING, PendingReply};
