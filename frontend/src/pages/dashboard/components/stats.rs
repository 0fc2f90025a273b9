use crate::components::cards::StatCard;
use crate::pages::dashboard::repository::DashboardStats;
use crate::utils::time::{format_ymd, today_local};
use leptos::*;

#[component]
pub fn StatsSection(stats: Signal<DashboardStats>) -> impl IntoView {
    let total = Signal::derive(move || stats.get().total_employees.to_string());
    let present = Signal::derive(move || stats.get().present_today.to_string());
    let rate = Signal::derive(move || format!("{}%", stats.get().attendance_rate));
    let present_label = Signal::derive(move || format!("Present Today ({})", format_ymd(today_local())));

    view! {
        <div class="grid grid-cols-1 sm:grid-cols-3 gap-6">
            <StatCard label="Total Employees" value=total />
            <StatCard label=present_label value=present />
            <StatCard label="Attendance Rate Today" value=rate />
        </div>
    }
}
