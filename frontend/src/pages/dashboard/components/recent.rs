use crate::api::AttendanceRecord;
use crate::components::{common::StatusBadge, empty_state::EmptyState};
use crate::utils::time::format_ymd;
use leptos::*;

#[component]
pub fn RecentAttendanceSection(recent: Signal<Vec<AttendanceRecord>>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6">
            <h2 class="text-lg font-semibold text-fg mb-4">"Recent Attendance"</h2>
            <Show
                when=move || !recent.get().is_empty()
                fallback=|| view! { <EmptyState title="No attendance records yet" /> }
            >
                <table class="min-w-full divide-y divide-border">
                    <thead>
                        <tr>
                            <th class="px-3 py-2 text-left text-xs font-semibold text-fg-muted uppercase tracking-wider">"Employee"</th>
                            <th class="px-3 py-2 text-left text-xs font-semibold text-fg-muted uppercase tracking-wider">"Date"</th>
                            <th class="px-3 py-2 text-left text-xs font-semibold text-fg-muted uppercase tracking-wider">"Status"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        <For
                            each=move || recent.get()
                            key=|record| record.id
                            children=move |record: AttendanceRecord| {
                                let name = record
                                    .full_name
                                    .clone()
                                    .unwrap_or_else(|| record.employee_id.clone());
                                view! {
                                    <tr>
                                        <td class="px-3 py-2 text-sm text-fg">{name}</td>
                                        <td class="px-3 py-2 text-sm text-fg-muted">{format_ymd(record.date)}</td>
                                        <td class="px-3 py-2 text-sm"><StatusBadge status=record.status /></td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
