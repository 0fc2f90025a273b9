use leptos::*;

/// Persistent banner for fetch failures. Display-only recovery: the user
/// retries by navigating or acting again.
#[component]
pub fn FetchErrorBanner(error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded my-2">
                <span class="font-bold">{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}
