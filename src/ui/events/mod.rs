//! Event handling system
//!
//! Processes user input and translates it into state-changing actions.
//! Input modes:
//! - Normal: navigation and commands, dispatched by the focused panel
//! - Searching: sidebar filter input
//! - Editing*: inline text editing of a form field
//!
//! # Architecture
//!
//! Key events generate `AppAction`s that are applied to `AppState` via
//! `apply_action` in actions.rs; side effects (network, clipboard, files)
//! live in the handler submodules.
//!
//! # Lock Management
//!
//! Handlers acquire short read/write locks on `Arc<RwLock<AppState>>` and
//! never hold one across an await point.

mod editing;
mod execution;
mod export;
mod helpers;
mod navigation;
mod search;

use crate::actions::AppAction;
use crate::state::AppState;
use crate::types::{AuthMode, FormTab, InputMode, PanelFocus};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use helpers::{apply, log_debug};
use ratatui::widgets::ListState;
use std::sync::{Arc, RwLock};

/// Event handler for managing user input and state updates
#[derive(Debug, Default)]
pub struct EventHandler {
    pub should_quit: bool,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Main event entry point - dispatches on the current input mode
    pub fn handle_events(
        &mut self,
        state: Arc<RwLock<AppState>>,
        list_state: &mut ListState,
    ) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                let input_mode = state.read().unwrap().input.mode.clone();

                match input_mode {
                    InputMode::Normal => self.handle_normal_key(key, &state, list_state),
                    InputMode::Searching => {
                        search::handle_search_input(key, &state, list_state)?;
                    }
                    _ => editing::handle_edit_input(key, &state),
                }
            }
        }
        Ok(())
    }

    fn handle_normal_key(
        &mut self,
        key: KeyEvent,
        state: &Arc<RwLock<AppState>>,
        list_state: &mut ListState,
    ) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Global commands first; Ctrl combinations must win over plain chars
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('d') if ctrl => {
                apply(state, AppAction::ScrollResponseDown);
                return;
            }
            KeyCode::Char('u') if ctrl => {
                apply(state, AppAction::ScrollResponseUp);
                return;
            }
            KeyCode::Tab => {
                apply(state, AppAction::FocusNextPanel);
                return;
            }
            KeyCode::Char('1') => {
                apply(state, AppAction::FocusPanel(PanelFocus::Sidebar));
                return;
            }
            KeyCode::Char('2') => {
                apply(state, AppAction::FocusPanel(PanelFocus::Request));
                return;
            }
            KeyCode::Char('3') => {
                apply(state, AppAction::FocusPanel(PanelFocus::Response));
                return;
            }
            KeyCode::Char('/') => {
                search::enter_search_mode(state);
                return;
            }
            KeyCode::Char(' ') => {
                execution::handle_send(state);
                return;
            }
            _ => {}
        }

        let panel = state.read().unwrap().ui.panel_focus;
        match panel {
            PanelFocus::Sidebar => self.handle_sidebar_key(key, state, list_state),
            PanelFocus::Request => self.handle_request_key(key, state),
            PanelFocus::Response => self.handle_response_key(key, state),
        }
    }

    fn handle_sidebar_key(
        &mut self,
        key: KeyEvent,
        state: &Arc<RwLock<AppState>>,
        list_state: &mut ListState,
    ) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => navigation::sidebar_down(state, list_state),
            KeyCode::Char('k') | KeyCode::Up => navigation::sidebar_up(state, list_state),
            KeyCode::Enter => execution::handle_sidebar_select(state, list_state),
            KeyCode::Char('t') => {
                let other = state.read().unwrap().ui.sidebar_tab.other();
                apply(state, AppAction::SetSidebarTab(other));
                navigation::sync_sidebar_selection(state, list_state);
            }
            _ => {}
        }
    }

    fn handle_request_key(&mut self, key: KeyEvent, state: &Arc<RwLock<AppState>>) {
        match key.code {
            KeyCode::Char('m') => {
                apply(state, AppAction::CycleMethod);
                return;
            }
            KeyCode::Char('u') => {
                editing::begin_edit(state, InputMode::EditingUrl);
                return;
            }
            KeyCode::Char('h') | KeyCode::Left => {
                apply(state, AppAction::PrevFormTab);
                return;
            }
            KeyCode::Char('l') | KeyCode::Right => {
                apply(state, AppAction::NextFormTab);
                return;
            }
            _ => {}
        }

        let (form_tab, auth_mode, selected_header, header_count, supports_body) = {
            let s = state.read().unwrap();
            (
                s.ui.form_tab,
                s.form.auth_mode,
                s.form.selected_header,
                s.form.headers.len(),
                s.form.method.supports_body(),
            )
        };

        match form_tab {
            FormTab::Headers => match key.code {
                KeyCode::Char('j') | KeyCode::Down => apply(state, AppAction::SelectHeaderDown),
                KeyCode::Char('k') | KeyCode::Up => apply(state, AppAction::SelectHeaderUp),
                KeyCode::Char('a') => apply(state, AppAction::AddHeaderRow),
                KeyCode::Char('d') => apply(state, AppAction::RemoveSelectedHeader),
                KeyCode::Char('e') if selected_header < header_count => {
                    editing::begin_edit(state, InputMode::EditingHeaderName(selected_header));
                }
                KeyCode::Char('v') if selected_header < header_count => {
                    editing::begin_edit(state, InputMode::EditingHeaderValue(selected_header));
                }
                _ => {}
            },
            FormTab::Body => {
                if key.code == KeyCode::Char('e') {
                    if supports_body {
                        editing::begin_edit(state, InputMode::EditingBody);
                    } else {
                        log_debug("Body editing ignored: GET requests carry no body");
                    }
                }
            }
            FormTab::Auth => match key.code {
                KeyCode::Char('t') => apply(state, AppAction::CycleAuthMode),
                KeyCode::Char('e') => match auth_mode {
                    AuthMode::Bearer => editing::begin_edit(state, InputMode::EditingToken),
                    AuthMode::Basic => editing::begin_edit(state, InputMode::EditingUsername),
                    AuthMode::None => {}
                },
                KeyCode::Char('v') if auth_mode == AuthMode::Basic => {
                    editing::begin_edit(state, InputMode::EditingPassword);
                }
                _ => {}
            },
            FormTab::Params => {}
        }
    }

    fn handle_response_key(&mut self, key: KeyEvent, state: &Arc<RwLock<AppState>>) {
        match key.code {
            KeyCode::Char('h') | KeyCode::Left => apply(state, AppAction::PrevResponseTab),
            KeyCode::Char('l') | KeyCode::Right => apply(state, AppAction::NextResponseTab),
            KeyCode::Char('y') => export::handle_copy_response(state),
            KeyCode::Char('D') => export::handle_download_response(state),
            _ => {}
        }
    }
}
