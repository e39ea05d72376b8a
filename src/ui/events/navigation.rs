//! Sidebar list navigation

use crate::state::AppState;
use ratatui::widgets::ListState;
use std::sync::{Arc, RwLock};

pub fn sidebar_down(state: &Arc<RwLock<AppState>>, list_state: &mut ListState) {
    let index = {
        let mut s = state.write().unwrap();
        let max_index = s.sidebar_len().saturating_sub(1);
        if s.ui.sidebar_selected < max_index {
            s.ui.sidebar_selected += 1;
        }
        s.ui.sidebar_selected
    };
    list_state.select(Some(index));
}

pub fn sidebar_up(state: &Arc<RwLock<AppState>>, list_state: &mut ListState) {
    let index = {
        let mut s = state.write().unwrap();
        s.ui.sidebar_selected = s.ui.sidebar_selected.saturating_sub(1);
        s.ui.sidebar_selected
    };
    list_state.select(Some(index));
}

/// Re-sync the widget selection after the item list was rebuilt
pub fn sync_sidebar_selection(state: &Arc<RwLock<AppState>>, list_state: &mut ListState) {
    let index = state.read().unwrap().ui.sidebar_selected;
    list_state.select(Some(index));
}
