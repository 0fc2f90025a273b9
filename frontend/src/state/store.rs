use crate::api::{
    ApiClient, ApiError, AttendanceRecord, Employee, MarkAttendanceRequest, NewEmployee,
};
use leptos::*;

/// Fixed remediation hint shown in the persistent banner on fetch failure.
pub const FETCH_ERROR_HINT: &str = "Failed to fetch data. Make sure the backend is running.";

/// Snapshot of the server-side collections at last fetch time. Single source
/// of truth for every view; discarded and re-fetched on each page mount.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreState {
    pub employees: Vec<Employee>,
    pub attendance: Vec<AttendanceRecord>,
    pub loading: bool,
    pub fetch_error: Option<String>,
}

pub fn use_store() -> (ReadSignal<StoreState>, WriteSignal<StoreState>) {
    match use_context::<(ReadSignal<StoreState>, WriteSignal<StoreState>)>() {
        Some(ctx) => ctx,
        None => {
            let (read, write) = create_signal(StoreState::default());
            provide_context((read, write));
            (read, write)
        }
    }
}

/// Re-fetch both collections. Each collection is replaced atomically as its
/// response arrives; a failure leaves whatever was already in place and sets
/// the banner message instead.
pub async fn refresh(api: &ApiClient, set_store: WriteSignal<StoreState>) -> Result<(), ApiError> {
    set_store.update(|state| {
        state.loading = true;
        state.fetch_error = None;
    });
    let result = reload_collections(api, set_store).await;
    if let Err(err) = &result {
        log::error!("snapshot refresh failed: {err}");
        set_store.update(|state| state.fetch_error = Some(FETCH_ERROR_HINT.to_string()));
    }
    set_store.update(|state| state.loading = false);
    result
}

async fn reload_collections(
    api: &ApiClient,
    set_store: WriteSignal<StoreState>,
) -> Result<(), ApiError> {
    let employees = api.list_employees().await?;
    set_store.update(|state| state.employees = employees);
    let attendance = api.list_attendance(None).await?;
    set_store.update(|state| state.attendance = attendance);
    Ok(())
}

/// Create an employee, then re-fetch. The error from a failed creation is
/// returned untouched so the caller can surface a server-supplied message;
/// a failed re-fetch after a successful creation is already surfaced through
/// the banner.
pub async fn add_employee(
    api: &ApiClient,
    set_store: WriteSignal<StoreState>,
    payload: NewEmployee,
) -> Result<(), ApiError> {
    api.create_employee(&payload).await?;
    let _ = refresh(api, set_store).await;
    Ok(())
}

pub async fn delete_employee(
    api: &ApiClient,
    set_store: WriteSignal<StoreState>,
    employee_id: &str,
) -> Result<(), ApiError> {
    api.delete_employee(employee_id).await?;
    let _ = refresh(api, set_store).await;
    Ok(())
}

pub async fn mark_attendance(
    api: &ApiClient,
    set_store: WriteSignal<StoreState>,
    payload: MarkAttendanceRequest,
) -> Result<(), ApiError> {
    api.mark_attendance(&payload).await?;
    let _ = refresh(api, set_store).await;
    Ok(())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::AttendanceStatus;
    use httpmock::prelude::*;
    use serde_json::json;

    fn employee_json(id: &str) -> serde_json::Value {
        json!({
            "id": 1,
            "employee_id": id,
            "full_name": "Jane Doe",
            "email": "jane@example.com",
            "department": "Engineering"
        })
    }

    fn record_json(id: i64, employee_id: &str, date: &str, status: &str) -> serde_json::Value {
        json!({
            "id": id,
            "employee_id": employee_id,
            "full_name": "Jane Doe",
            "department": "Engineering",
            "date": date,
            "status": status
        })
    }

    #[tokio::test]
    async fn refresh_replaces_both_collections() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/employees");
            then.status(200).json_body(json!([employee_json("EMP001")]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/attendance");
            then.status(200)
                .json_body(json!([record_json(1, "EMP001", "2025-06-02", "Present")]));
        });

        let runtime = create_runtime();
        let (store, set_store) = create_signal(StoreState::default());
        let api = ApiClient::new_with_base_url(server.url("/api"));

        refresh(&api, set_store).await.unwrap();

        let state = store.get_untracked();
        assert_eq!(state.employees.len(), 1);
        assert_eq!(state.attendance.len(), 1);
        assert!(!state.loading);
        assert!(state.fetch_error.is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn refresh_failure_keeps_last_known_snapshot_and_sets_banner() {
        let server = MockServer::start_async().await;
        let mut employees_mock = server.mock(|when, then| {
            when.method(GET).path("/api/employees");
            then.status(200).json_body(json!([employee_json("EMP001")]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/attendance");
            then.status(200)
                .json_body(json!([record_json(1, "EMP001", "2025-06-02", "Present")]));
        });

        let runtime = create_runtime();
        let (store, set_store) = create_signal(StoreState::default());
        let api = ApiClient::new_with_base_url(server.url("/api"));
        refresh(&api, set_store).await.unwrap();

        employees_mock.delete();
        server.mock(|when, then| {
            when.method(GET).path("/api/employees");
            then.status(500).json_body(json!({ "error": "boom" }));
        });

        assert!(refresh(&api, set_store).await.is_err());
        let state = store.get_untracked();
        assert_eq!(state.employees.len(), 1);
        assert_eq!(state.attendance.len(), 1);
        assert_eq!(state.fetch_error.as_deref(), Some(FETCH_ERROR_HINT));
        assert!(!state.loading);
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_creation_leaves_snapshot_untouched() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/employees");
            then.status(409)
                .json_body(json!({ "error": "Employee ID already exists" }));
        });

        let runtime = create_runtime();
        let (store, set_store) = create_signal(StoreState::default());
        let api = ApiClient::new_with_base_url(server.url("/api"));
        let before = store.get_untracked();

        let err = add_employee(
            &api,
            set_store,
            NewEmployee {
                employee_id: "EMP001".into(),
                full_name: "Jane Doe".into(),
                email: "jane@example.com".into(),
                department: crate::api::Department::Hr,
            },
        )
        .await
        .unwrap_err();

        assert!(err.is_server_message());
        assert_eq!(err.error, "Employee ID already exists");
        assert_eq!(store.get_untracked(), before);
        runtime.dispose();
    }

    #[tokio::test]
    async fn marking_absent_over_present_yields_single_updated_record() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/attendance");
            then.status(201)
                .json_body(json!({ "message": "Attendance updated successfully" }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/employees");
            then.status(200).json_body(json!([employee_json("EMP001")]));
        });
        // The backend upserted, so the re-fetch sees one record for the pair.
        server.mock(|when, then| {
            when.method(GET).path("/api/attendance");
            then.status(200)
                .json_body(json!([record_json(1, "EMP001", "2025-06-02", "Absent")]));
        });

        let runtime = create_runtime();
        let (store, set_store) = create_signal(StoreState {
            attendance: vec![AttendanceRecord {
                id: 1,
                employee_id: "EMP001".into(),
                full_name: Some("Jane Doe".into()),
                department: Some("Engineering".into()),
                date: chrono::NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
                status: AttendanceStatus::Present,
            }],
            ..Default::default()
        });
        let api = ApiClient::new_with_base_url(server.url("/api"));

        mark_attendance(
            &api,
            set_store,
            MarkAttendanceRequest {
                employee_id: "EMP001".into(),
                date: chrono::NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
                status: AttendanceStatus::Absent,
            },
        )
        .await
        .unwrap();

        let state = store.get_untracked();
        let matching: Vec<_> = state
            .attendance
            .iter()
            .filter(|r| r.employee_id == "EMP001")
            .collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].status, AttendanceStatus::Absent);
        runtime.dispose();
    }

    #[test]
    fn use_store_creates_default_state_outside_context() {
        let runtime = create_runtime();
        let (store, _set_store) = use_store();
        let state = store.get_untracked();
        assert!(state.employees.is_empty());
        assert!(state.attendance.is_empty());
        assert!(!state.loading);
        assert!(state.fetch_error.is_none());
        runtime.dispose();
    }
}
