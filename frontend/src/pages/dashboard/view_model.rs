use crate::api::{ApiClient, ApiError, AttendanceRecord};
use crate::pages::dashboard::repository::{self, DashboardStats};
use crate::state::store::{self, use_store, StoreState};
use crate::utils::time::today_local;
use leptos::*;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub store: (ReadSignal<StoreState>, WriteSignal<StoreState>),
    pub refresh_resource: Resource<(), Result<(), ApiError>>,
    pub stats: Signal<DashboardStats>,
    pub recent: Signal<Vec<AttendanceRecord>>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let (store_read, store_write) = use_store();

        // Mounting the page discards the previous snapshot's authority and
        // re-fetches both collections.
        let refresh_resource = create_resource(
            || (),
            move |_| {
                let api = api.clone();
                async move { store::refresh(&api, store_write).await }
            },
        );

        let stats = Signal::derive(move || {
            store_read.with(|s| repository::compute_stats(&s.employees, &s.attendance, today_local()))
        });
        let recent =
            Signal::derive(move || store_read.with(|s| repository::recent_attendance(&s.attendance)));

        Self {
            store: (store_read, store_write),
            refresh_resource,
            stats,
            recent,
        }
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
