//! Field rules for the check-in form.

use super::model::Draft;
use once_cell::sync::Lazy;
use regex::Regex;

pub const VISITOR_ID_REQUIRED: &str = "Visitor ID is required";
pub const CHECK_IN_TIME_REQUIRED: &str = "Check In Time is required";
pub const CHECK_IN_ID_FORMAT: &str = "Check In ID must start with a letter followed by 4 digits";

/// One uppercase letter followed by exactly four digits, e.g. `A1234`.
pub static CHECK_IN_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][0-9]{4}$").expect("check-in id pattern is valid"));

/// The outcome of validating a [`Draft`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    /// Human-readable messages in rule order. Empty when the draft is valid.
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Returns true if `value` is a well-formed badge code.
pub fn is_valid_check_in_id(value: &str) -> bool {
    CHECK_IN_ID_PATTERN.is_match(value)
}

/// Checks a draft against every field rule.
///
/// Rules are independent: all violations are collected. Emptiness is literal,
/// so a visitor ID of a single space passes the required check.
pub fn validate(draft: &Draft) -> ValidationReport {
    let mut errors = Vec::new();

    if draft.visitor_id.is_empty() {
        errors.push(VISITOR_ID_REQUIRED.to_string());
    }
    if draft.check_in_time.is_empty() {
        errors.push(CHECK_IN_TIME_REQUIRED.to_string());
    }
    if !is_valid_check_in_id(&draft.check_in_id) {
        errors.push(CHECK_IN_ID_FORMAT.to_string());
    }

    ValidationReport { errors }
}
