use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn EmployeesFrame(children: Children) -> impl IntoView {
    view! { <Layout>{children()}</Layout> }
}
