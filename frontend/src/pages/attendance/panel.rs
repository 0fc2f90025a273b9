use crate::pages::attendance::{
    components::{HistorySection, MarkingSection},
    layout::AttendanceFrame,
    view_model::use_attendance_view_model,
};
use leptos::*;

#[component]
pub fn AttendancePage() -> impl IntoView {
    let vm = use_attendance_view_model();
    let (store, _set_store) = vm.store;

    let employees = Signal::derive(move || store.with(|s| s.employees.clone()));
    let attendance = Signal::derive(move || store.with(|s| s.attendance.clone()));
    let loading = Signal::derive(move || store.with(|s| s.loading));

    view! {
        <AttendanceFrame>
            <div class="space-y-6">
                <MarkingSection
                    employees=employees
                    index={vm.index.into()}
                    selected_date={vm.selected_date}
                    loading=loading
                    on_mark=vm.handle_mark()
                />
                <HistorySection attendance=attendance loading=loading />
            </div>
        </AttendanceFrame>
    }
}
