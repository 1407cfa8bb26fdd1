//! Check-in record domain module.
//!
//! # Module Structure
//!
//! - `model`: records, drafts and their value types
//! - `validator`: field rules applied on submit
//! - `check_in_id`: random badge code generation
//! - `store`: the in-memory, newest-first record list

mod check_in_id;
mod model;
mod store;
mod validator;

pub use check_in_id::generate_check_in_id;
pub use model::{CheckInRecord, CheckInStatus, Draft, DraftField};
pub use store::RecordStore;
pub use validator::{
    CHECK_IN_ID_FORMAT, CHECK_IN_ID_PATTERN, CHECK_IN_TIME_REQUIRED, VISITOR_ID_REQUIRED,
    ValidationReport, is_valid_check_in_id, validate,
};
