use leptos::*;
use leptos_router::*;

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test_support;

use api::ApiClient;
use pages::{attendance::AttendancePage, dashboard::DashboardPage, employees::EmployeesPage};
use state::store::StoreState;

/// Application root. The API client and the snapshot store live in context
/// here so every page works against the same state.
#[component]
pub fn App() -> impl IntoView {
    provide_context(ApiClient::new());
    let (store, set_store) = create_signal(StoreState::default());
    provide_context((store, set_store));

    view! {
        <Router>
            <Routes>
                <Route path="/" view=DashboardPage/>
                <Route path="/employees" view=EmployeesPage/>
                <Route path="/attendance" view=AttendancePage/>
            </Routes>
        </Router>
    }
}
