//! Sidebar search handlers
//!
//! `/` activates search mode; typing filters collections and history by
//! case-insensitive substring over name and URL.

use super::helpers::{collect_paste_batch, log_debug};
use super::navigation::sync_sidebar_selection;
use crate::state::AppState;
use crate::types::{InputMode, PanelFocus};
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;
use std::sync::{Arc, RwLock};

/// Activate search mode and move focus to the sidebar so results are visible
pub fn enter_search_mode(state: &Arc<RwLock<AppState>>) {
    let mut s = state.write().unwrap();
    s.input.mode = InputMode::Searching;
    s.ui.panel_focus = PanelFocus::Sidebar;
}

pub fn handle_search_input(
    key: KeyEvent,
    state: &Arc<RwLock<AppState>>,
    list_state: &mut ListState,
) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            // Exit search mode and keep the filter active
            let mut s = state.write().unwrap();
            s.input.mode = InputMode::Normal;
        }
        KeyCode::Esc => {
            // Exit search mode and clear the filter
            {
                let mut s = state.write().unwrap();
                s.input.mode = InputMode::Normal;
                s.search.query.clear();
                s.ui.sidebar_selected = 0;
                s.update_sidebar_items();
            }
            sync_sidebar_selection(state, list_state);
        }
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            {
                let mut s = state.write().unwrap();
                s.search.query.clear();
                s.ui.sidebar_selected = 0;
                s.update_sidebar_items();
            }
            sync_sidebar_selection(state, list_state);
        }
        KeyCode::Backspace => {
            {
                let mut s = state.write().unwrap();
                s.search.query.pop();
                s.ui.sidebar_selected = 0;
                s.update_sidebar_items();
            }
            sync_sidebar_selection(state, list_state);
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let batch = collect_paste_batch(c);
            {
                let mut s = state.write().unwrap();
                s.search.query.push_str(&batch);
                s.ui.sidebar_selected = 0;
                s.update_sidebar_items();
                log_debug(&format!("Search query: '{}'", s.search.query));
            }
            sync_sidebar_selection(state, list_state);
        }
        _ => {}
    }
    Ok(())
}
