//! Browser Dialogs
//!
//! Blocking `alert`/`confirm`, used for failures and destructive actions.

use pantry_core::Confirm;

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// `window.confirm` as the row-action prompt
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        confirm(message)
    }
}
