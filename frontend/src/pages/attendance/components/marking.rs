use crate::api::{AttendanceStatus, Employee};
use crate::components::{common::LoadingIndicator, common::StatusBadge, empty_state::EmptyState};
use crate::pages::attendance::utils::{parse_selected_date, AttendanceIndex};
use leptos::*;

#[component]
pub fn MarkingSection(
    employees: Signal<Vec<Employee>>,
    index: Signal<AttendanceIndex>,
    selected_date: RwSignal<String>,
    loading: Signal<bool>,
    on_mark: Callback<(String, AttendanceStatus)>,
) -> impl IntoView {
    let parsed_date = Signal::derive(move || parse_selected_date(&selected_date.get()));

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-lg font-semibold text-fg">"Mark Attendance"</h2>
                <input
                    type="date"
                    class="rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                    prop:value=move || selected_date.get()
                    on:change=move |ev| selected_date.set(event_target_value(&ev))
                />
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingIndicator /> }>
                <Show
                    when=move || !employees.get().is_empty()
                    fallback=|| view! { <EmptyState title="Add employees first to mark attendance" /> }
                >
                    <table class="min-w-full divide-y divide-border">
                        <thead>
                            <tr>
                                <th class="px-3 py-2 text-left text-xs font-semibold text-fg-muted uppercase tracking-wider">"Employee"</th>
                                <th class="px-3 py-2 text-left text-xs font-semibold text-fg-muted uppercase tracking-wider">"Department"</th>
                                <th class="px-3 py-2 text-left text-xs font-semibold text-fg-muted uppercase tracking-wider">"Status"</th>
                                <th class="px-3 py-2 text-left text-xs font-semibold text-fg-muted uppercase tracking-wider">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            <For
                                each=move || employees.get()
                                key=|employee| employee.employee_id.clone()
                                children=move |employee: Employee| {
                                    let status_id = employee.employee_id.clone();
                                    let present_id = employee.employee_id.clone();
                                    let absent_id = employee.employee_id.clone();
                                    view! {
                                        <tr>
                                            <td class="px-3 py-2 text-sm text-fg">{employee.full_name.clone()}</td>
                                            <td class="px-3 py-2 text-sm text-fg-muted">{employee.department.to_string()}</td>
                                            <td class="px-3 py-2 text-sm">
                                                {move || {
                                                    let status = parsed_date
                                                        .get()
                                                        .and_then(|date| index.with(|i| i.status_for(&status_id, date)));
                                                    match status {
                                                        Some(status) => view! { <StatusBadge status=status /> }.into_view(),
                                                        None => view! { <span class="text-fg-muted">"Not marked"</span> }.into_view(),
                                                    }
                                                }}
                                            </td>
                                            <td class="px-3 py-2 text-sm">
                                                <div class="flex gap-2">
                                                    <button
                                                        type="button"
                                                        class="inline-flex items-center justify-center rounded-md px-3 py-1.5 text-sm font-semibold border border-status-success-border text-status-success-text hover:bg-status-success-bg"
                                                        on:click=move |_| on_mark.call((present_id.clone(), AttendanceStatus::Present))
                                                    >
                                                        "Present"
                                                    </button>
                                                    <button
                                                        type="button"
                                                        class="inline-flex items-center justify-center rounded-md px-3 py-1.5 text-sm font-semibold border border-status-error-border text-status-error-text hover:bg-status-error-bg"
                                                        on:click=move |_| on_mark.call((absent_id.clone(), AttendanceStatus::Absent))
                                                    >
                                                        "Absent"
                                                    </button>
                                                </div>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </Show>
        </div>
    }
}
