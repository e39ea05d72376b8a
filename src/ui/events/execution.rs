//! Request execution handlers
//!
//! Space dispatches the form as a request; Enter on a sidebar entry either
//! toggles a collection or loads the entry into the form.

use super::helpers::{apply, log_debug};
use super::navigation::sync_sidebar_selection;
use crate::actions::AppAction;
use crate::config;
use crate::executor;
use crate::state::AppState;
use crate::types::{Notification, SidebarItem};
use ratatui::widgets::ListState;
use std::sync::{Arc, RwLock};

/// Handle the send key. The single-in-flight invariant is enforced here:
/// a second send while one request is running is rejected outright.
pub fn handle_send(state: &Arc<RwLock<AppState>>) {
    let spec = {
        let s = state.read().unwrap();
        if s.request.in_flight {
            log_debug("Send ignored: a request is already in flight");
            return;
        }
        s.form.to_request_spec()
    };

    if let Err(message) = config::validate_url(&spec.url) {
        let mut s = state.write().unwrap();
        s.notify(Notification::destructive("Request not sent", &message));
        return;
    }

    log_debug(&format!("Executing: {} {}", spec.method.as_str(), spec.url));
    executor::send_request_background(Arc::clone(state), spec);
}

/// Handle Enter on the sidebar: toggle a collection or load a request
pub fn handle_sidebar_select(state: &Arc<RwLock<AppState>>, list_state: &mut ListState) {
    let item = state.read().unwrap().selected_sidebar_item().cloned();

    match item {
        Some(SidebarItem::CollectionHeader { index, .. }) => {
            apply(state, AppAction::ToggleCollection(index));
            sync_sidebar_selection(state, list_state);
        }
        Some(SidebarItem::Request(request)) => {
            apply(state, AppAction::LoadRequest(request));
        }
        None => {}
    }
}
