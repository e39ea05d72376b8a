//! Copy and download handlers for the response body
//!
//! Both actions operate on the formatted body (pretty-printed JSON or raw
//! text) of the last result and report their outcome as a notification.

use super::helpers::{apply, log_debug};
use crate::actions::AppAction;
use crate::state::AppState;
use crate::types::Notification;
use arboard::Clipboard;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use std::time::{SystemTime, UNIX_EPOCH};

/// Copy the formatted response body to the system clipboard
pub fn handle_copy_response(state: &Arc<RwLock<AppState>>) {
    let Some(formatted) = formatted_body(state) else {
        log_debug("No response available to copy");
        return;
    };

    let copied = Clipboard::new().and_then(|mut clipboard| clipboard.set_text(formatted));

    match copied {
        Ok(()) => apply(
            state,
            AppAction::Notify(Notification::info(
                "Copied to clipboard",
                "Response data has been copied.",
            )),
        ),
        Err(e) => apply(
            state,
            AppAction::Notify(Notification::destructive("Copy failed", &e.to_string())),
        ),
    }
}

/// Save the formatted response body to `api-response-<epoch-ms>.json`
pub fn handle_download_response(state: &Arc<RwLock<AppState>>) {
    let Some(formatted) = formatted_body(state) else {
        log_debug("No response available to save");
        return;
    };

    let file_name = format!("api-response-{}.json", epoch_ms());
    let path = dirs::download_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(file_name);

    match fs::write(&path, formatted) {
        Ok(()) => apply(
            state,
            AppAction::Notify(Notification::info(
                "Response saved",
                &path.display().to_string(),
            )),
        ),
        Err(e) => apply(
            state,
            AppAction::Notify(Notification::destructive("Save failed", &e.to_string())),
        ),
    }
}

fn formatted_body(state: &Arc<RwLock<AppState>>) -> Option<String> {
    let s = state.read().unwrap();
    if s.request.in_flight {
        return None;
    }
    s.request
        .current_response
        .as_ref()
        .map(|result| result.body.formatted())
}

fn epoch_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}
