use registrar_core::assistant::{AssistantOverlay, MessageRole, build_system_context};
use registrar_core::config::DEFAULT_ELECTION_DATE;
use registrar_core::record::{CHECK_IN_ID_FORMAT, VISITOR_ID_REQUIRED};
use registrar_core::{
    CheckInStatus, CheckInWorkflow, DraftField, RecordStore, SubmitOutcome, View, ViewRouter,
};

fn fill(workflow: &mut CheckInWorkflow, fields: &[(DraftField, &str)]) {
    for (field, value) in fields {
        workflow.update_field(*field, value).expect("field should update");
    }
}

#[test]
fn test_valid_draft_is_committed_at_head_of_store() {
    let mut store = RecordStore::seeded(DEFAULT_ELECTION_DATE);
    let mut workflow = CheckInWorkflow::new(DEFAULT_ELECTION_DATE);
    let before = store.len();

    fill(
        &mut workflow,
        &[
            (DraftField::VisitorId, "V-9"),
            (DraftField::CheckInTime, "08:00"),
            (DraftField::CheckInId, "C4821"),
            (DraftField::Status, "Active"),
        ],
    );
    let outcome = workflow.submit(&mut store);

    let SubmitOutcome::Committed(record) = outcome else {
        panic!("draft should have been committed");
    };
    assert_eq!(store.len(), before + 1);
    assert_eq!(store.list()[0].id, record.id);
    assert_eq!(record.check_in_date, DEFAULT_ELECTION_DATE);
    assert_eq!(record.status, CheckInStatus::Active);
    assert!(!["1", "2"].contains(&record.id.as_str()));
    assert!(workflow.draft().is_empty());
}

#[test]
fn test_invalid_draft_reports_two_errors_and_leaves_store() {
    let mut store = RecordStore::seeded(DEFAULT_ELECTION_DATE);
    let mut workflow = CheckInWorkflow::new(DEFAULT_ELECTION_DATE);

    fill(
        &mut workflow,
        &[
            (DraftField::VisitorId, ""),
            (DraftField::CheckInTime, "08:00"),
            (DraftField::CheckInId, "zzzz"),
        ],
    );
    let outcome = workflow.submit(&mut store);

    let SubmitOutcome::Rejected(errors) = outcome else {
        panic!("draft should have been rejected");
    };
    assert_eq!(errors, vec![VISITOR_ID_REQUIRED, CHECK_IN_ID_FORMAT]);
    assert_eq!(store.len(), 2);
    assert_eq!(workflow.draft().check_in_id, "zzzz");
    assert_eq!(workflow.errors(), errors.as_slice());
}

#[test]
fn test_router_and_overlay_are_independent() {
    let mut router = ViewRouter::new();
    router.toggle();
    router.toggle();
    assert_eq!(router.current(), View::Dashboard);

    router.open_assistant();
    assert_eq!(router.current(), View::Dashboard);
    assert!(router.is_assistant_open());
}

#[test]
fn test_assistant_context_sees_committed_records() {
    let mut store = RecordStore::seeded(DEFAULT_ELECTION_DATE);
    let mut workflow = CheckInWorkflow::new(DEFAULT_ELECTION_DATE);
    fill(
        &mut workflow,
        &[
            (DraftField::VisitorId, "V-77"),
            (DraftField::CheckInTime, "11:30"),
            (DraftField::CheckInId, "Q9001"),
            (DraftField::Status, "cancelled"),
        ],
    );
    assert!(workflow.submit(&mut store).is_committed());

    let context = build_system_context(DEFAULT_ELECTION_DATE, store.list()).unwrap();
    assert!(context.contains("Q9001"));
    assert!(context.contains("\"status\":\"Cancelled\""));
}

#[test]
fn test_reopening_overlay_starts_a_fresh_transcript() {
    let mut first = AssistantOverlay::new();
    let pending = first.begin_send("Is station 4 open?").unwrap();
    first.settle(pending, "Yes.").unwrap();
    assert_eq!(first.transcript().len(), 3);

    let second = AssistantOverlay::new();
    assert_ne!(first.session_id(), second.session_id());
    assert_eq!(second.transcript().len(), 1);
    assert_eq!(second.transcript()[0].role, MessageRole::Assistant);
}
