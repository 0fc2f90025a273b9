use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn AttendanceFrame(children: Children) -> impl IntoView {
    view! {
        <Layout>
            <h1 class="text-2xl font-bold text-fg mb-6">"Attendance Tracking"</h1>
            {children()}
        </Layout>
    }
}
