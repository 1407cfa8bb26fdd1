//! Check-in workflow: draft capture, validation and commit.
//!
//! The workflow owns the in-progress [`Draft`] and the errors from the most
//! recent rejected submit. It never owns the record list; a successful submit
//! appends to the [`RecordStore`] it is handed.

use crate::error::Result;
use crate::record::{
    CheckInRecord, Draft, DraftField, RecordStore, ValidationReport, generate_check_in_id, validate,
};
use rand::Rng;
use uuid::Uuid;

/// How the most recent submit ended.
///
/// Validation happens entirely inside [`CheckInWorkflow::submit`], so between
/// calls the workflow is always editing its draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Committed,
    Rejected,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The draft passed validation and this record was prepended to the store.
    Committed(CheckInRecord),
    /// The draft failed validation; the store is unchanged.
    Rejected(Vec<String>),
}

impl SubmitOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, SubmitOutcome::Committed(_))
    }
}

/// Drives a single check-in form.
#[derive(Debug, Clone)]
pub struct CheckInWorkflow {
    election_date: String,
    draft: Draft,
    errors: Vec<String>,
    last_outcome: Option<SubmitStatus>,
}

impl CheckInWorkflow {
    /// Creates a workflow with an empty draft. Committed records are stamped
    /// with `election_date`.
    pub fn new(election_date: impl Into<String>) -> Self {
        Self {
            election_date: election_date.into(),
            draft: Draft::default(),
            errors: Vec::new(),
            last_outcome: None,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Errors from the last rejected submit. Cleared by a successful submit.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// How the most recent submit ended, if there was one.
    pub fn last_outcome(&self) -> Option<SubmitStatus> {
        self.last_outcome
    }

    /// Sets a draft field. No validation happens here.
    pub fn update_field(&mut self, field: DraftField, value: &str) -> Result<()> {
        self.draft.set(field, value)?;
        tracing::debug!(field = %field, "draft field updated");
        Ok(())
    }

    /// Pre-fills the check-in ID with a random badge code and returns it.
    pub fn generate_check_in_id<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String {
        let id = generate_check_in_id(rng);
        self.draft.check_in_id = id.clone();
        tracing::debug!(check_in_id = %id, "generated check-in id");
        id
    }

    /// Validates the draft and, if it passes, commits it to `store`.
    ///
    /// On success the record gets a fresh UUID and the election date, becomes
    /// the first entry of the store, and the draft and errors are cleared. On
    /// failure the errors are kept for display and the draft is left as is.
    pub fn submit(&mut self, store: &mut RecordStore) -> SubmitOutcome {
        let ValidationReport { errors } = validate(&self.draft);

        if errors.is_empty() {
            let draft = std::mem::take(&mut self.draft);
            let record = draft.into_record(Uuid::new_v4().to_string(), self.election_date.clone());
            store.append(record.clone());
            self.errors.clear();
            self.last_outcome = Some(SubmitStatus::Committed);
            tracing::info!(
                record_id = %record.id,
                check_in_id = %record.check_in_id,
                "check-in committed"
            );
            SubmitOutcome::Committed(record)
        } else {
            self.errors = errors.clone();
            self.last_outcome = Some(SubmitStatus::Rejected);
            tracing::debug!(error_count = errors.len(), "check-in rejected");
            SubmitOutcome::Rejected(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{CHECK_IN_ID_FORMAT, CheckInStatus, VISITOR_ID_REQUIRED};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const DATE: &str = "06/02/2026";

    fn fill(workflow: &mut CheckInWorkflow, visitor: &str, time: &str, badge: &str) {
        workflow.update_field(DraftField::VisitorId, visitor).unwrap();
        workflow.update_field(DraftField::CheckInTime, time).unwrap();
        workflow.update_field(DraftField::CheckInId, badge).unwrap();
    }

    #[test]
    fn test_new_workflow_has_empty_draft() {
        let workflow = CheckInWorkflow::new(DATE);
        assert!(workflow.draft().is_empty());
        assert!(workflow.errors().is_empty());
        assert_eq!(workflow.last_outcome(), None);
    }

    #[test]
    fn test_successful_submit_commits_and_resets() {
        let mut store = RecordStore::seeded(DATE);
        let mut workflow = CheckInWorkflow::new(DATE);
        fill(&mut workflow, "V-9", "08:00", "C4821");
        workflow.update_field(DraftField::Status, "Active").unwrap();

        let outcome = workflow.submit(&mut store);

        let SubmitOutcome::Committed(record) = outcome else {
            panic!("expected commit");
        };
        assert_eq!(store.len(), 3);
        assert_eq!(store.list()[0], record);
        assert_eq!(record.visitor_id, "V-9");
        assert_eq!(record.check_in_time, "08:00");
        assert_eq!(record.check_in_id, "C4821");
        assert_eq!(record.check_in_date, DATE);
        assert_eq!(record.status, CheckInStatus::Active);
        assert!(Uuid::parse_str(&record.id).is_ok());
        assert!(workflow.draft().is_empty());
        assert!(workflow.errors().is_empty());
        assert_eq!(workflow.last_outcome(), Some(SubmitStatus::Committed));
    }

    #[test]
    fn test_failed_submit_keeps_draft_and_store() {
        let mut store = RecordStore::seeded(DATE);
        let mut workflow = CheckInWorkflow::new(DATE);
        fill(&mut workflow, "", "08:00", "zzzz");

        let outcome = workflow.submit(&mut store);

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(vec![
                VISITOR_ID_REQUIRED.to_string(),
                CHECK_IN_ID_FORMAT.to_string()
            ])
        );
        assert_eq!(store.len(), 2);
        assert_eq!(workflow.draft().check_in_time, "08:00");
        assert_eq!(workflow.draft().check_in_id, "zzzz");
        assert_eq!(workflow.errors().len(), 2);
        assert_eq!(workflow.last_outcome(), Some(SubmitStatus::Rejected));
    }

    #[test]
    fn test_commit_after_rejection_clears_errors() {
        let mut store = RecordStore::new();
        let mut workflow = CheckInWorkflow::new(DATE);
        fill(&mut workflow, "", "08:00", "C4821");
        assert!(!workflow.submit(&mut store).is_committed());

        workflow.update_field(DraftField::VisitorId, "V-10").unwrap();
        assert!(workflow.submit(&mut store).is_committed());
        assert!(workflow.errors().is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_commits_get_unique_ids() {
        let mut store = RecordStore::new();
        let mut workflow = CheckInWorkflow::new(DATE);
        for _ in 0..3 {
            fill(&mut workflow, "V-1", "08:00", "A1111");
            assert!(workflow.submit(&mut store).is_committed());
        }

        let mut ids: Vec<&str> = store.list().iter().map(|r| r.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_generated_id_is_placed_in_draft() {
        let mut workflow = CheckInWorkflow::new(DATE);
        let mut rng = StdRng::seed_from_u64(3);

        let id = workflow.generate_check_in_id(&mut rng);

        assert_eq!(workflow.draft().check_in_id, id);
        assert!(crate::record::is_valid_check_in_id(&id));
    }

    #[test]
    fn test_update_field_rejects_bad_status() {
        let mut workflow = CheckInWorkflow::new(DATE);
        assert!(workflow.update_field(DraftField::Status, "Gone").is_err());
        assert_eq!(workflow.draft().status, CheckInStatus::Active);
    }
}
