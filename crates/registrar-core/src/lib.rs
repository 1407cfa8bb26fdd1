pub mod assistant;
pub mod config;
pub mod error;
pub mod live_feed;
pub mod record;
pub mod view;
pub mod workflow;

// Re-export common types
pub use error::{RegistrarError, Result};
pub use record::{CheckInRecord, CheckInStatus, Draft, DraftField, RecordStore};
pub use view::{View, ViewRouter};
pub use workflow::{CheckInWorkflow, SubmitOutcome, SubmitStatus};
