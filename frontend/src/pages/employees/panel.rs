use crate::components::confirm_dialog::ConfirmDialog;
use crate::pages::employees::{
    components::{EmployeeForm, EmployeeList},
    layout::EmployeesFrame,
    view_model::use_employees_view_model,
};
use leptos::*;

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let vm = use_employees_view_model();
    let (store, _set_store) = vm.store;

    let employees = Signal::derive(move || store.with(|s| s.employees.clone()));
    let loading = Signal::derive(move || store.with(|s| s.loading));
    let show_form = vm.show_form;
    let dialog_open = Signal::derive(move || vm.pending_delete.get().is_some());
    let dialog_message = Signal::derive(move || {
        let name = vm
            .pending_delete
            .get()
            .map(|employee| employee.full_name)
            .unwrap_or_default();
        format!(
            "Are you sure you want to delete {}? All their attendance records will also be deleted.",
            name
        )
    });

    view! {
        <EmployeesFrame>
            <div class="flex items-center justify-between mb-6">
                <h1 class="text-2xl font-bold text-fg">"Employee Management"</h1>
                <button
                    type="button"
                    class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                    on:click=vm.handle_toggle_form()
                >
                    "Add Employee"
                </button>
            </div>

            <Show when=move || show_form.get()>
                <EmployeeForm
                    form={vm.form}
                    on_submit=Callback::new(vm.handle_submit())
                    on_cancel=Callback::new(vm.handle_cancel_form())
                />
            </Show>

            <EmployeeList
                employees=employees
                loading=loading
                on_delete=vm.request_delete()
            />

            <ConfirmDialog
                is_open=dialog_open
                title="Delete employee"
                message=dialog_message
                confirm_label="Delete"
                destructive=true
                on_confirm=Callback::new(vm.handle_confirm_delete())
                on_cancel=Callback::new(vm.handle_cancel_delete())
            />
        </EmployeesFrame>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Department;
    use crate::state::store::StoreState;
    use crate::test_support::helpers::employee;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn roster_lists_the_snapshot() {
        let html = render_to_string(move || {
            let (read, write) = create_signal(StoreState {
                employees: vec![
                    employee("EMP001", "Jane Doe", Department::Engineering),
                    employee("EMP002", "John Roe", Department::Sales),
                ],
                ..Default::default()
            });
            provide_context((read, write));
            view! { <EmployeesPage /> }
        });
        assert!(html.contains("Employee Management"));
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("John Roe"));
        assert!(html.contains("emp001@example.com"));
        assert!(html.contains("Engineering"));
        // The add form starts hidden and the dialog starts closed.
        assert!(!html.contains("Add New Employee"));
        assert!(!html.contains("role=\"dialog\""));
    }

    #[test]
    fn empty_roster_shows_the_empty_state() {
        let html = render_to_string(move || {
            let (read, write) = create_signal(StoreState::default());
            provide_context((read, write));
            view! { <EmployeesPage /> }
        });
        assert!(html.contains("No employees found"));
    }
}
