use super::utils::{parse_selected_date, AttendanceIndex};
use crate::api::{ApiClient, ApiError, AttendanceStatus, MarkAttendanceRequest};
use crate::state::store::{self, use_store, StoreState};
use crate::utils::{
    dialog,
    time::{format_ymd, today_local},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct AttendanceViewModel {
    pub store: (ReadSignal<StoreState>, WriteSignal<StoreState>),
    pub refresh_resource: Resource<(), Result<(), ApiError>>,
    /// Raw value of the date input; defaults to today.
    pub selected_date: RwSignal<String>,
    pub index: Memo<AttendanceIndex>,
    pub mark_action: Action<MarkAttendanceRequest, Result<(), ApiError>>,
}

impl AttendanceViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let (store_read, store_write) = use_store();

        let api_for_mount = api.clone();
        let refresh_resource = create_resource(
            || (),
            move |_| {
                let api = api_for_mount.clone();
                async move { store::refresh(&api, store_write).await }
            },
        );

        let selected_date = create_rw_signal(format_ymd(today_local()));
        let index =
            create_memo(move |_| store_read.with(|s| AttendanceIndex::build(&s.attendance)));

        let api_for_mark = api.clone();
        let mark_action = create_action(move |payload: &MarkAttendanceRequest| {
            let api = api_for_mark.clone();
            let payload = payload.clone();
            async move { store::mark_attendance(&api, store_write, payload).await }
        });

        create_effect(move |_| {
            if let Some(Err(err)) = mark_action.value().get() {
                log::error!("attendance marking failed: {err}");
                dialog::alert("Failed to mark attendance");
            }
        });

        Self {
            store: (store_read, store_write),
            refresh_resource,
            selected_date,
            index,
            mark_action,
        }
    }

    /// Marking is suppressed while the selected date does not parse; repeated
    /// marks for the same pair go through untouched, the backend upserts.
    pub fn handle_mark(&self) -> Callback<(String, AttendanceStatus)> {
        let selected_date = self.selected_date;
        let mark_action = self.mark_action;
        Callback::new(move |(employee_id, status): (String, AttendanceStatus)| {
            let Some(date) = parse_selected_date(&selected_date.get_untracked()) else {
                return;
            };
            mark_action.dispatch(MarkAttendanceRequest {
                employee_id,
                date,
                status,
            });
        })
    }
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    match use_context::<AttendanceViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = AttendanceViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
