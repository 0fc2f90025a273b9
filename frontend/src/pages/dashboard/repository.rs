use crate::api::{AttendanceRecord, AttendanceStatus, Employee};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How many records the recent-attendance list shows.
pub const RECENT_LIMIT: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_employees: usize,
    pub present_today: usize,
    pub attendance_rate: u32,
}

/// Derive the headline numbers from the current snapshot. `today` is the
/// render-time date; only records matching it exactly count as present.
pub fn compute_stats(
    employees: &[Employee],
    attendance: &[AttendanceRecord],
    today: NaiveDate,
) -> DashboardStats {
    let total_employees = employees.len();
    let present_today = attendance
        .iter()
        .filter(|r| r.date == today && r.status == AttendanceStatus::Present)
        .count();
    let attendance_rate = if total_employees > 0 {
        ((present_today as f64 / total_employees as f64) * 100.0).round() as u32
    } else {
        // An empty roster reads as 0%, never a division by zero.
        0
    };
    DashboardStats {
        total_employees,
        present_today,
        attendance_rate,
    }
}

/// First records in snapshot order. The API lists newest first; the client
/// never re-sorts.
pub fn recent_attendance(attendance: &[AttendanceRecord]) -> Vec<AttendanceRecord> {
    attendance.iter().take(RECENT_LIMIT).cloned().collect()
}
