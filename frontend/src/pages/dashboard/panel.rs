use crate::pages::dashboard::{
    components::{RecentAttendanceSection, StatsSection},
    layout::DashboardFrame,
    view_model::use_dashboard_view_model,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();

    view! {
        <DashboardFrame>
            <div class="space-y-6">
                <StatsSection stats={vm.stats} />
                <RecentAttendanceSection recent={vm.recent} />
            </div>
        </DashboardFrame>
    }
}
