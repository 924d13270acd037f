//! Blocking user notifications via `window.alert`.

pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(err) = window.alert_with_message(message) {
                log::warn!("[NOTIFY] alert failed: {:?}", err);
            }
        }
        None => log::warn!("[NOTIFY] no window for alert: {}", message),
    }
}
