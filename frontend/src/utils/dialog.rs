/// Blocking browser alert. Mutation failures are surfaced here and nowhere
/// else; the snapshot stays untouched.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}
