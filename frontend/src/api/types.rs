use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The closed set of departments the roster form offers. The backend stores
/// the same strings verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "HR")]
    Hr,
    Engineering,
    Sales,
    Marketing,
}

impl Department {
    pub const ALL: [Department; 4] = [
        Department::Hr,
        Department::Engineering,
        Department::Sales,
        Department::Marketing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Hr => "HR",
            Department::Engineering => "Engineering",
            Department::Sales => "Sales",
            Department::Marketing => "Marketing",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.as_str() == value)
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: Department,
}

/// Creation payload: an Employee minus anything server-assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: Department,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        })
    }
}

/// One attendance row as the backend lists it: `full_name` and `department`
/// are denormalized copies joined server-side, so they may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub employee_id: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkAttendanceRequest {
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiError {
    /// A message the backend supplied in an `{error}` body.
    pub fn server(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "API_ERROR".to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn is_server_message(&self) -> bool {
        self.code == "API_ERROR"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserialize_employee_ignores_server_fields() {
        let raw = json!({
            "id": 7,
            "employee_id": "EMP001",
            "full_name": "Jane Doe",
            "email": "jane@example.com",
            "department": "HR"
        });
        let employee: Employee = serde_json::from_value(raw).unwrap();
        assert_eq!(employee.employee_id, "EMP001");
        assert_eq!(employee.department, Department::Hr);
    }

    #[test]
    fn department_round_trips_exact_strings() {
        for department in Department::ALL {
            let value = serde_json::to_value(department).unwrap();
            assert_eq!(value, json!(department.as_str()));
            assert_eq!(Department::parse(department.as_str()), Some(department));
        }
        assert_eq!(Department::parse(""), None);
        assert_eq!(Department::parse("hr"), None);
    }

    #[test]
    fn deserialize_attendance_record_with_missing_join_fields() {
        let raw = json!({
            "id": 3,
            "employee_id": "EMP002",
            "full_name": null,
            "department": null,
            "date": "2025-06-01",
            "status": "Absent"
        });
        let record: AttendanceRecord = serde_json::from_value(raw).unwrap();
        assert!(record.full_name.is_none());
        assert_eq!(record.status, AttendanceStatus::Absent);
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    }

    #[test]
    fn serialize_mark_request_uses_wire_date_format() {
        let request = MarkAttendanceRequest {
            employee_id: "EMP001".into(),
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            status: AttendanceStatus::Present,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["date"], json!("2025-06-02"));
        assert_eq!(value["status"], json!("Present"));
    }

    #[test]
    fn api_error_parses_bare_error_body() {
        let err: ApiError =
            serde_json::from_value(json!({ "error": "Employee ID already exists" })).unwrap();
        assert_eq!(err.error, "Employee ID already exists");
        assert!(err.code.is_empty());
        assert!(err.details.is_none());
    }

    #[test]
    fn api_error_helpers_set_expected_codes() {
        assert_eq!(ApiError::server("dup").code, "API_ERROR");
        assert_eq!(ApiError::validation("bad").code, "VALIDATION_ERROR");
        assert_eq!(ApiError::unknown("boom").code, "UNKNOWN");
        assert_eq!(ApiError::request_failed("net").code, "REQUEST_FAILED");
        assert!(ApiError::server("dup").is_server_message());
        assert!(!ApiError::unknown("boom").is_server_message());
        assert_eq!(format!("{}", ApiError::server("dup")), "dup");
    }
}
