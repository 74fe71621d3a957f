//! User feedback for failed calls.

use crate::api::{ApiError, GATEWAY_ERROR};
use gloo_console::error;

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

/// Reports a failed call: alert for the user, details on the console.
pub fn report(err: &ApiError) {
    alert(GATEWAY_ERROR);
    error!(err.to_string());
}
