//! Check-in record domain model.
//!
//! This module contains the committed [`CheckInRecord`], the in-progress
//! [`Draft`] the check-in form edits, and the value types they share.

use crate::error::{RegistrarError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a voter check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CheckInStatus {
    /// The voter is checked in. Initial selection on the form.
    #[default]
    Active,
    /// The check-in awaits confirmation.
    Pending,
    /// The check-in was withdrawn.
    Cancelled,
}

impl CheckInStatus {
    /// All statuses in form order.
    pub const ALL: [CheckInStatus; 3] = [
        CheckInStatus::Active,
        CheckInStatus::Pending,
        CheckInStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckInStatus::Active => "Active",
            CheckInStatus::Pending => "Pending",
            CheckInStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for CheckInStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckInStatus {
    type Err = RegistrarError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| RegistrarError::invalid_status(trimmed))
    }
}

/// A committed, immutable check-in entry.
///
/// Field names serialize in camelCase so the JSON snapshot handed to the
/// assistant matches the names shown on the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRecord {
    /// Internal unique identifier, assigned on commit.
    pub id: String,
    pub visitor_id: String,
    /// Always the election date; there is no calendar logic.
    pub check_in_date: String,
    pub check_in_time: String,
    /// Badge code, `^[A-Z][0-9]{4}$` for every validated record.
    pub check_in_id: String,
    pub status: CheckInStatus,
}

/// The addressable fields of a [`Draft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    VisitorId,
    CheckInTime,
    CheckInId,
    Status,
}

impl DraftField {
    pub const ALL: [DraftField; 4] = [
        DraftField::VisitorId,
        DraftField::CheckInTime,
        DraftField::CheckInId,
        DraftField::Status,
    ];

    /// The form name of the field.
    pub fn name(&self) -> &'static str {
        match self {
            DraftField::VisitorId => "visitorId",
            DraftField::CheckInTime => "checkInTime",
            DraftField::CheckInId => "checkInId",
            DraftField::Status => "status",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DraftField {
    type Err = RegistrarError;

    /// Accepts the form name (`checkInId`) as well as `check_in_id` and
    /// `check-in-id` spellings, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        Self::ALL
            .into_iter()
            .find(|field| field.name().to_ascii_lowercase() == normalized)
            .ok_or_else(|| RegistrarError::unknown_field(s.trim()))
    }
}

/// Unvalidated, in-progress check-in form data.
///
/// The check-in date and the record `id` are not part of the draft; both are
/// injected when the draft is committed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub visitor_id: String,
    pub check_in_time: String,
    pub check_in_id: String,
    pub status: CheckInStatus,
}

impl Draft {
    /// Sets a single field from its textual form value.
    ///
    /// Text fields accept any value, including the empty string. The status
    /// field must parse; on failure the draft is left unchanged.
    pub fn set(&mut self, field: DraftField, value: &str) -> Result<()> {
        match field {
            DraftField::VisitorId => self.visitor_id = value.to_string(),
            DraftField::CheckInTime => self.check_in_time = value.to_string(),
            DraftField::CheckInId => self.check_in_id = value.to_string(),
            DraftField::Status => self.status = value.parse()?,
        }
        Ok(())
    }

    /// Returns the textual value of a field.
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::VisitorId => &self.visitor_id,
            DraftField::CheckInTime => &self.check_in_time,
            DraftField::CheckInId => &self.check_in_id,
            DraftField::Status => self.status.as_str(),
        }
    }

    /// Returns true when the draft equals a freshly reset form.
    pub fn is_empty(&self) -> bool {
        *self == Draft::default()
    }

    /// Finalizes the draft into a record.
    pub fn into_record(self, id: String, check_in_date: impl Into<String>) -> CheckInRecord {
        CheckInRecord {
            id,
            visitor_id: self.visitor_id,
            check_in_date: check_in_date.into(),
            check_in_time: self.check_in_time,
            check_in_id: self.check_in_id,
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing_is_case_insensitive() {
        assert_eq!("active".parse::<CheckInStatus>().unwrap(), CheckInStatus::Active);
        assert_eq!("PENDING".parse::<CheckInStatus>().unwrap(), CheckInStatus::Pending);
        assert_eq!(" Cancelled ".parse::<CheckInStatus>().unwrap(), CheckInStatus::Cancelled);
    }

    #[test]
    fn test_status_parsing_rejects_unknown_values() {
        let err = "Done".parse::<CheckInStatus>().unwrap_err();
        assert_eq!(err, RegistrarError::invalid_status("Done"));
    }

    #[test]
    fn test_draft_field_spellings() {
        assert_eq!("checkInId".parse::<DraftField>().unwrap(), DraftField::CheckInId);
        assert_eq!("check_in_time".parse::<DraftField>().unwrap(), DraftField::CheckInTime);
        assert_eq!("visitor-id".parse::<DraftField>().unwrap(), DraftField::VisitorId);
        assert_eq!("Status".parse::<DraftField>().unwrap(), DraftField::Status);
        assert!("checkInDate".parse::<DraftField>().is_err());
    }

    #[test]
    fn test_invalid_status_leaves_draft_unchanged() {
        let mut draft = Draft::default();
        draft.set(DraftField::Status, "Pending").unwrap();

        assert!(draft.set(DraftField::Status, "Unknown").is_err());
        assert_eq!(draft.status, CheckInStatus::Pending);
    }

    #[test]
    fn test_record_serializes_in_camel_case() {
        let record = Draft {
            visitor_id: "V-9".to_string(),
            check_in_time: "08:00".to_string(),
            check_in_id: "C4821".to_string(),
            status: CheckInStatus::Active,
        }
        .into_record("abc".to_string(), "06/02/2026");

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["visitorId"], "V-9");
        assert_eq!(json["checkInDate"], "06/02/2026");
        assert_eq!(json["checkInId"], "C4821");
        assert_eq!(json["status"], "Active");
    }
}
