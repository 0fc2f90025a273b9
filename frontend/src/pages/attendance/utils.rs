use crate::api::{AttendanceRecord, AttendanceStatus};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Lookup table for "the" record of an `(employee_id, date)` pair, rebuilt
/// whenever the snapshot changes. The backend is assumed to keep the pair
/// unique but that is unverified, so the index keeps the first record seen
/// for a key — the same answer a linear first-match scan would give.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendanceIndex {
    map: HashMap<(String, NaiveDate), AttendanceRecord>,
}

impl AttendanceIndex {
    pub fn build(records: &[AttendanceRecord]) -> Self {
        let mut map = HashMap::with_capacity(records.len());
        for record in records {
            map.entry((record.employee_id.clone(), record.date))
                .or_insert_with(|| record.clone());
        }
        Self { map }
    }

    pub fn get(&self, employee_id: &str, date: NaiveDate) -> Option<&AttendanceRecord> {
        self.map.get(&(employee_id.to_string(), date))
    }

    /// None reads as "Not marked".
    pub fn status_for(&self, employee_id: &str, date: NaiveDate) -> Option<AttendanceStatus> {
        self.get(employee_id, date).map(|record| record.status)
    }
}

/// The date input yields `YYYY-MM-DD` or an empty string when cleared.
pub fn parse_selected_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
