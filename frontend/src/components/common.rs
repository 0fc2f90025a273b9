use crate::api::AttendanceStatus;
use leptos::*;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center gap-2 py-12 text-fg-muted">
            <span class="h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            <span class="text-sm">"Loading..."</span>
        </div>
    }
}

#[component]
pub fn StatusBadge(status: AttendanceStatus) -> impl IntoView {
    let class = match status {
        AttendanceStatus::Present => {
            "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-semibold bg-status-success-bg text-status-success-text"
        }
        AttendanceStatus::Absent => {
            "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-semibold bg-status-error-bg text-status-error-text"
        }
    };
    view! { <span class=class>{status.to_string()}</span> }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn status_badge_renders_status_text() {
        let html = render_to_string(|| view! { <StatusBadge status=AttendanceStatus::Present /> });
        assert!(html.contains("Present"));
        assert!(html.contains("bg-status-success-bg"));

        let html = render_to_string(|| view! { <StatusBadge status=AttendanceStatus::Absent /> });
        assert!(html.contains("Absent"));
        assert!(html.contains("bg-status-error-bg"));
    }
}
