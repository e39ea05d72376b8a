//! Inline text editing for form fields
//!
//! One scratch buffer serves every editable field (URL, header name/value,
//! body, auth credentials). `begin_edit` seeds the buffer from the current
//! value; Enter (or Ctrl+S for the body) commits it back through the
//! reducer, Esc discards it.

use super::helpers::{apply, collect_paste_batch, delete_last_word};
use crate::actions::AppAction;
use crate::state::AppState;
use crate::types::InputMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::{Arc, RwLock};

/// Enter an editing mode, seeding the buffer from the edited field
pub fn begin_edit(state: &Arc<RwLock<AppState>>, mode: InputMode) {
    let mut s = state.write().unwrap();

    let seed = match &mode {
        InputMode::EditingUrl => s.form.url.clone(),
        InputMode::EditingHeaderName(index) => s
            .form
            .headers
            .get(*index)
            .map(|h| h.name.clone())
            .unwrap_or_default(),
        InputMode::EditingHeaderValue(index) => s
            .form
            .headers
            .get(*index)
            .map(|h| h.value.clone())
            .unwrap_or_default(),
        InputMode::EditingBody => s.form.body.clone(),
        InputMode::EditingToken => s.form.token.clone(),
        InputMode::EditingUsername => s.form.username.clone(),
        InputMode::EditingPassword => s.form.password.clone(),
        InputMode::Normal | InputMode::Searching => return,
    };

    s.input.buffer = seed;
    s.input.mode = mode;
}

pub fn handle_edit_input(key: KeyEvent, state: &Arc<RwLock<AppState>>) {
    let mode = state.read().unwrap().input.mode.clone();
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => cancel(state),
        KeyCode::Char('s') if ctrl && mode == InputMode::EditingBody => confirm(state),
        KeyCode::Enter if mode == InputMode::EditingBody => {
            let mut s = state.write().unwrap();
            s.input.buffer.push('\n');
        }
        KeyCode::Enter => confirm(state),
        KeyCode::Backspace => {
            let mut s = state.write().unwrap();
            s.input.buffer.pop();
        }
        KeyCode::Char('w') if ctrl => {
            let mut s = state.write().unwrap();
            delete_last_word(&mut s.input.buffer);
        }
        KeyCode::Char('l') if ctrl => {
            let mut s = state.write().unwrap();
            s.input.buffer.clear();
        }
        KeyCode::Char(c) if !ctrl => {
            let batch = collect_paste_batch(c);
            let mut s = state.write().unwrap();
            s.input.buffer.push_str(&batch);
        }
        _ => {}
    }
}

/// Commit the buffer to the edited field and return to normal mode
fn confirm(state: &Arc<RwLock<AppState>>) {
    let (mode, buffer) = {
        let s = state.read().unwrap();
        (s.input.mode.clone(), s.input.buffer.clone())
    };

    let action = match mode {
        InputMode::EditingUrl => Some(AppAction::SetUrl(buffer)),
        InputMode::EditingHeaderName(index) => Some(AppAction::SetHeaderName {
            index,
            name: buffer,
        }),
        InputMode::EditingHeaderValue(index) => Some(AppAction::SetHeaderValue {
            index,
            value: buffer,
        }),
        InputMode::EditingBody => Some(AppAction::SetBody(buffer)),
        InputMode::EditingToken => Some(AppAction::SetToken(buffer)),
        InputMode::EditingUsername => Some(AppAction::SetUsername(buffer)),
        InputMode::EditingPassword => Some(AppAction::SetPassword(buffer)),
        InputMode::Normal | InputMode::Searching => None,
    };

    if let Some(action) = action {
        apply(state, action);
    }

    let mut s = state.write().unwrap();
    s.input.mode = InputMode::Normal;
    s.input.buffer.clear();
}

fn cancel(state: &Arc<RwLock<AppState>>) {
    let mut s = state.write().unwrap();
    s.input.mode = InputMode::Normal;
    s.input.buffer.clear();
}
