use log::warn;

/// Blocking yes/no prompt. Answers "no" when there is no window.
pub fn confirm(message: &str) -> bool {
    match web_sys::window().map(|w| w.confirm_with_message(message)) {
        Some(Ok(answer)) => answer,
        _ => {
            warn!("confirm dialog unavailable");
            false
        }
    }
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_err() {
            warn!("alert dialog unavailable: {message}");
        }
    }
}
