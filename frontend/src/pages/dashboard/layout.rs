use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn DashboardFrame(children: Children) -> impl IntoView {
    view! {
        <Layout>
            <h1 class="text-2xl font-bold text-fg mb-6">"Dashboard Overview"</h1>
            {children()}
        </Layout>
    }
}
