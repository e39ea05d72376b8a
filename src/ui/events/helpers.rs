//! Helper functions for event handling
//!
//! - State locking helpers (apply actions)
//! - Paste batching
//! - Word deletion for text inputs
//! - Debug logging

use crate::actions::{apply_action, AppAction};
use crate::state::AppState;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::{Arc, RwLock};

/// Apply a single action to state
pub fn apply(state: &Arc<RwLock<AppState>>, action: AppAction) {
    let mut s = state.write().unwrap();
    apply_action(action, &mut s);
}

/// Collect a batch of characters for paste support
///
/// When a character is typed, this function checks for any immediately
/// available character events and batches them together. This enables fast
/// paste operations in terminals.
pub fn collect_paste_batch(initial_char: char) -> String {
    let mut chars = vec![initial_char];

    // Drain any immediately available character events
    while let Ok(true) = event::poll(std::time::Duration::from_millis(0)) {
        if let Ok(Event::Key(next_key)) = event::read() {
            match next_key.code {
                KeyCode::Char(next_c) if !next_key.modifiers.contains(KeyModifiers::CONTROL) => {
                    chars.push(next_c);
                }
                _ => {
                    // Non-character or control key, stop batching
                    break;
                }
            }
        } else {
            break;
        }
    }

    chars.into_iter().collect()
}

/// Delete the trailing word from an edit buffer (Ctrl+W)
pub fn delete_last_word(buffer: &mut String) {
    while buffer.ends_with(' ') {
        buffer.pop();
    }
    while let Some(c) = buffer.chars().last() {
        if c == ' ' {
            break;
        }
        buffer.pop();
    }
}

/// Log debug message to /tmp/api-sandbox.log
pub fn log_debug(msg: &str) {
    let _ = OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/api-sandbox.log")
        .and_then(|mut f| writeln!(f, "{msg}"));
}
