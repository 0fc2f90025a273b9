use crate::api::Department;
use crate::pages::employees::utils::EmployeeFormState;
use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::*;

#[component]
pub fn EmployeeForm(
    form: RwSignal<EmployeeFormState>,
    on_submit: Callback<SubmitEvent>,
    on_cancel: Callback<MouseEvent>,
) -> impl IntoView {
    let submit_disabled = Signal::derive(move || !form.get().is_valid());

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6">
            <h2 class="text-lg font-semibold text-fg mb-4">"Add New Employee"</h2>
            <form on:submit=move |ev| on_submit.call(ev)>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    <div>
                        <label class="block text-sm font-medium text-fg-muted mb-1">"Employee ID"</label>
                        <input
                            class="w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                            placeholder="e.g. EMP001"
                            prop:value=move || form.get().employee_id
                            on:input=move |ev| form.update(|draft| draft.employee_id = event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-fg-muted mb-1">"Full Name"</label>
                        <input
                            class="w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                            placeholder="e.g. John Doe"
                            prop:value=move || form.get().full_name
                            on:input=move |ev| form.update(|draft| draft.full_name = event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-fg-muted mb-1">"Email Address"</label>
                        <input
                            type="email"
                            class="w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                            placeholder="e.g. john@example.com"
                            prop:value=move || form.get().email
                            on:input=move |ev| form.update(|draft| draft.email = event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-fg-muted mb-1">"Department"</label>
                        <select
                            class="w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                            on:change=move |ev| form.update(|draft| draft.department = event_target_value(&ev))
                        >
                            <option value="" selected=move || form.get().department.is_empty()>
                                "Select Department"
                            </option>
                            {Department::ALL
                                .iter()
                                .map(|department| {
                                    let value = department.as_str();
                                    view! {
                                        <option
                                            value=value
                                            selected=move || form.get().department == value
                                        >
                                            {value}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                </div>
                <div class="flex gap-3 mt-4">
                    <button
                        type="submit"
                        class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                        disabled=move || submit_disabled.get()
                    >
                        "Save Employee"
                    </button>
                    <button
                        type="button"
                        class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold border border-border text-fg hover:bg-surface-muted"
                        on:click=move |ev| on_cancel.call(ev)
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
