use super::utils::EmployeeFormState;
use crate::api::{ApiClient, ApiError, Employee, NewEmployee};
use crate::state::store::{self, use_store, StoreState};
use crate::utils::dialog;
use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::*;

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub store: (ReadSignal<StoreState>, WriteSignal<StoreState>),
    pub refresh_resource: Resource<(), Result<(), ApiError>>,
    pub form: RwSignal<EmployeeFormState>,
    pub show_form: RwSignal<bool>,
    pub pending_delete: RwSignal<Option<Employee>>,
    pub add_action: Action<NewEmployee, Result<(), ApiError>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
}

impl EmployeesViewModel {
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

        let form = create_rw_signal(EmployeeFormState::default());
        let show_form = create_rw_signal(false);
        let pending_delete = create_rw_signal(None::<Employee>);

        let api_for_add = api.clone();
        let add_action = create_action(move |payload: &NewEmployee| {
            let api = api_for_add.clone();
            let payload = payload.clone();
            async move { store::add_employee(&api, store_write, payload).await }
        });

        let api_for_delete = api.clone();
        let delete_action = create_action(move |employee_id: &String| {
            let api = api_for_delete.clone();
            let employee_id = employee_id.clone();
            async move { store::delete_employee(&api, store_write, &employee_id).await }
        });

        // A failed creation shows the server-supplied message when there is
        // one; every other mutation failure gets the generic text.
        create_effect(move |_| {
            if let Some(Err(err)) = add_action.value().get() {
                let message = if err.is_server_message() {
                    err.error.clone()
                } else {
                    "Failed to add employee".to_string()
                };
                dialog::alert(&message);
            }
        });
        create_effect(move |_| {
            if let Some(Err(err)) = delete_action.value().get() {
                log::error!("employee deletion failed: {err}");
                dialog::alert("Failed to delete employee");
            }
        });

        Self {
            store: (store_read, store_write),
            refresh_resource,
            form,
            show_form,
            pending_delete,
            add_action,
            delete_action,
        }
    }

    /// hidden → editing and back; the draft resets on every return to hidden.
    pub fn toggle_form(&self) {
        self.show_form.update(|open| *open = !*open);
        if !self.show_form.get_untracked() {
            self.form.update(|draft| draft.reset());
        }
    }

    pub fn close_form(&self) {
        self.show_form.set(false);
        self.form.update(|draft| draft.reset());
    }

    pub fn handle_toggle_form(&self) -> impl Fn(MouseEvent) {
        let vm = *self;
        move |_| vm.toggle_form()
    }

    pub fn handle_cancel_form(&self) -> impl Fn(MouseEvent) {
        let vm = *self;
        move |_| vm.close_form()
    }

    /// Submit dispatches only a valid draft, then resets and hides the form.
    pub fn handle_submit(&self) -> impl Fn(SubmitEvent) {
        let form = self.form;
        let show_form = self.show_form;
        let add_action = self.add_action;
        move |ev| {
            ev.prevent_default();
            let Some(request) = form.get_untracked().to_request() else {
                return;
            };
            add_action.dispatch(request);
            form.update(|draft| draft.reset());
            show_form.set(false);
        }
    }

    pub fn request_delete(&self) -> Callback<Employee> {
        let pending_delete = self.pending_delete;
        Callback::new(move |employee: Employee| {
            pending_delete.set(Some(employee));
        })
    }

    /// Confirming runs the deletion; either path closes the dialog.
    pub fn handle_confirm_delete(&self) -> impl Fn(()) {
        let pending_delete = self.pending_delete;
        let delete_action = self.delete_action;
        move |_| {
            if let Some(employee) = pending_delete.get_untracked() {
                delete_action.dispatch(employee.employee_id);
            }
            pending_delete.set(None);
        }
    }

    pub fn handle_cancel_delete(&self) -> impl Fn(()) {
        let pending_delete = self.pending_delete;
        move |_| pending_delete.set(None)
    }
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    match use_context::<EmployeesViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = EmployeesViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Department;
    use crate::test_support::helpers::employee;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn cancelling_delete_clears_pending_without_dispatch() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            let vm = EmployeesViewModel::new();
            vm.pending_delete
                .set(Some(employee("EMP001", "Jane Doe", Department::Hr)));

            (vm.handle_cancel_delete())(());
            assert!(vm.pending_delete.get_untracked().is_none());
            assert_eq!(vm.delete_action.version().get_untracked(), 0);
            leptos_reactive::suppress_resource_load(false);
        });
    }

    #[test]
    fn closing_the_form_resets_the_draft() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            let vm = EmployeesViewModel::new();
            vm.show_form.set(true);
            vm.form.update(|draft| draft.employee_id = "EMP001".into());

            vm.toggle_form();
            assert!(!vm.show_form.get_untracked());
            assert_eq!(vm.form.get_untracked(), EmployeeFormState::default());

            vm.toggle_form();
            assert!(vm.show_form.get_untracked());
            vm.close_form();
            assert!(!vm.show_form.get_untracked());
            assert_eq!(vm.form.get_untracked(), EmployeeFormState::default());
            leptos_reactive::suppress_resource_load(false);
        });
    }
}
