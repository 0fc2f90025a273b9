#[cfg(not(target_arch = "wasm32"))]
pub mod ssr;

pub mod helpers {
    use crate::api::{AttendanceRecord, AttendanceStatus, Department, Employee};
    use chrono::NaiveDate;

    pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    pub fn employee(employee_id: &str, full_name: &str, department: Department) -> Employee {
        Employee {
            employee_id: employee_id.into(),
            full_name: full_name.into(),
            email: format!("{}@example.com", employee_id.to_lowercase()),
            department,
        }
    }

    pub fn record(
        id: i64,
        employee_id: &str,
        on: NaiveDate,
        status: AttendanceStatus,
    ) -> AttendanceRecord {
        AttendanceRecord {
            id,
            employee_id: employee_id.into(),
            full_name: Some(format!("Employee {}", employee_id)),
            department: Some(Department::Engineering.as_str().into()),
            date: on,
            status,
        }
    }
}
