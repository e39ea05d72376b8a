use crate::config::Config;
use crate::state::AppState;
use crate::types::InputMode;
use crate::ui;
use crate::ui::draw;
use color_eyre::Result;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::ListState,
    DefaultTerminal, Frame,
};
use std::sync::{Arc, RwLock};
use std::time::Instant;

#[derive(Debug)]
pub struct App {
    state: Arc<RwLock<AppState>>,
    list_state: ListState,
    spinner_index: usize,
    last_tick: Instant,
    event_handler: ui::EventHandler,
}

impl Default for App {
    fn default() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        let config = Config::load().unwrap_or_default();

        let mut state = AppState::default();
        if let Some(url) = config.request.default_url {
            state.form.url = url;
        }
        state.update_sidebar_items();

        Self {
            state: Arc::new(RwLock::new(state)),
            list_state,
            spinner_index: 0,
            last_tick: Instant::now(),
            event_handler: ui::EventHandler::new(),
        }
    }
}

impl App {
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        // Main UI loop
        while !self.event_handler.should_quit {
            // Update spinner animation
            if self.last_tick.elapsed().as_millis() > 100 {
                self.spinner_index = self.spinner_index.wrapping_add(1);
                self.last_tick = Instant::now();
            }

            self.clear_expired_notification();

            terminal.draw(|frame| self.draw(frame))?;

            self.event_handler
                .handle_events(Arc::clone(&self.state), &mut self.list_state)?;
        }

        Ok(())
    }

    fn clear_expired_notification(&self) {
        let expired = {
            let s = self.state.read().unwrap();
            s.ui.notification
                .as_ref()
                .map(|n| n.is_expired())
                .unwrap_or(false)
        };
        if expired {
            self.state.write().unwrap().ui.notification = None;
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let state = self.state.read().unwrap();

        // Main layout: Header, Body, Footer
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Body
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(main_chunks[1]);

        let main_panel_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(body_chunks[1]);

        draw::render_header(frame, main_chunks[0], &state);
        draw::render_sidebar_panel(frame, body_chunks[0], &state, &mut self.list_state);
        draw::render_request_panel(frame, main_panel_chunks[0], &state);
        draw::render_response_panel(frame, main_panel_chunks[1], &state, self.spinner_index);
        draw::render_footer(frame, main_chunks[2], &state);

        // Modals render last, above everything else
        if state.input.mode == InputMode::EditingBody {
            draw::render_body_editor_modal(frame, &state);
        }

        if let Some(notification) = &state.ui.notification {
            draw::render_notification(frame, notification);
        }
    }
}
