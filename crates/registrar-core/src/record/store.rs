use super::model::{CheckInRecord, CheckInStatus};

/// In-memory list of check-in records, newest first.
///
/// Records can be added but never changed or removed. The store is owned by
/// the application controller; the check-in workflow appends to it and the
/// assistant reads snapshots of it.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<CheckInRecord>,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the two fixture records shown at startup.
    ///
    /// Fixtures bypass validation.
    pub fn seeded(election_date: &str) -> Self {
        let fixture = |id: &str, visitor_id: &str, time: &str, badge: &str, status: CheckInStatus| {
            CheckInRecord {
                id: id.to_string(),
                visitor_id: visitor_id.to_string(),
                check_in_date: election_date.to_string(),
                check_in_time: time.to_string(),
                check_in_id: badge.to_string(),
                status,
            }
        };

        Self {
            records: vec![
                fixture("1", "V-1002", "08:15 AM", "A8429", CheckInStatus::Active),
                fixture("2", "V-1003", "09:02 AM", "B1102", CheckInStatus::Pending),
            ],
        }
    }

    /// Inserts a record at the head of the list.
    pub fn append(&mut self, record: CheckInRecord) {
        self.records.insert(0, record);
    }

    /// All records, newest first.
    pub fn list(&self) -> &[CheckInRecord] {
        &self.records
    }

    /// Owned copy of the current records, for handing to another task.
    pub fn snapshot(&self) -> Vec<CheckInRecord> {
        self.records.clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
