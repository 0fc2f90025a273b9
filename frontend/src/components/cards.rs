use leptos::*;

#[component]
pub fn StatCard(
    #[prop(into)] label: MaybeSignal<String>,
    #[prop(into)] value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated overflow-hidden shadow rounded-lg p-6">
            <p class="text-sm font-medium text-fg-muted truncate">{move || label.get()}</p>
            <p class="mt-1 text-3xl font-semibold text-fg">{move || value.get()}</p>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn stat_card_renders_label_and_value() {
        let html = render_to_string(|| {
            view! { <StatCard label="Total Employees" value=Signal::derive(|| "42".to_string()) /> }
        });
        assert!(html.contains("Total Employees"));
        assert!(html.contains("42"));
    }
}
