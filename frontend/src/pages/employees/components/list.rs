use crate::api::Employee;
use crate::components::{common::LoadingIndicator, empty_state::EmptyState};
use leptos::*;

#[component]
pub fn EmployeeList(
    employees: Signal<Vec<Employee>>,
    loading: Signal<bool>,
    on_delete: Callback<Employee>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6">
            <h2 class="text-lg font-semibold text-fg mb-4">"All Employees"</h2>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingIndicator /> }>
                <Show
                    when=move || !employees.get().is_empty()
                    fallback=|| view! { <EmptyState title="No employees found" /> }
                >
                    <table class="min-w-full divide-y divide-border">
                        <thead>
                            <tr>
                                <th class="px-3 py-2 text-left text-xs font-semibold text-fg-muted uppercase tracking-wider">"ID"</th>
                                <th class="px-3 py-2 text-left text-xs font-semibold text-fg-muted uppercase tracking-wider">"Name"</th>
                                <th class="px-3 py-2 text-left text-xs font-semibold text-fg-muted uppercase tracking-wider">"Email"</th>
                                <th class="px-3 py-2 text-left text-xs font-semibold text-fg-muted uppercase tracking-wider">"Department"</th>
                                <th class="px-3 py-2 text-left text-xs font-semibold text-fg-muted uppercase tracking-wider">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            <For
                                each=move || employees.get()
                                key=|employee| employee.employee_id.clone()
                                children=move |employee: Employee| {
                                    let for_delete = employee.clone();
                                    view! {
                                        <tr>
                                            <td class="px-3 py-2 text-sm text-fg">{employee.employee_id.clone()}</td>
                                            <td class="px-3 py-2 text-sm text-fg">{employee.full_name.clone()}</td>
                                            <td class="px-3 py-2 text-sm text-fg-muted">{employee.email.clone()}</td>
                                            <td class="px-3 py-2 text-sm text-fg-muted">{employee.department.to_string()}</td>
                                            <td class="px-3 py-2 text-sm">
                                                <button
                                                    type="button"
                                                    class="inline-flex items-center justify-center rounded-md px-3 py-1.5 text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover"
                                                    on:click=move |_| on_delete.call(for_delete.clone())
                                                >
                                                    "Delete"
                                                </button>
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
