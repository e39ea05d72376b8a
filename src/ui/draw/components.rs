//! Reusable UI components
//!
//! Shared pieces used across the screen:
//! - Header (title, last status, auth mode)
//! - Footer (command help)
//! - Tab bar rendering
//! - Notification toast overlay

use crate::state::AppState;
use crate::types::{InputMode, Notification, PanelFocus, Severity};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the application header with last status and auth mode
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let status_text = if state.request.in_flight {
        "Sending...".to_owned()
    } else if let Some(response) = &state.request.current_response {
        format!("{} {}", response.status, response.status_text)
    } else {
        "Idle".to_owned()
    };

    let header_text = format!(
        "api sandbox - client-only API testing [{status_text}] | auth: {}",
        state.form.auth_mode.label()
    );

    let header = Paragraph::new(header_text)
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

/// Render the footer with command help for the focused panel
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let footer_text = match &state.input.mode {
        InputMode::Normal => match state.ui.panel_focus {
            PanelFocus::Sidebar => {
                "Tab:Panel j/k:Nav Enter:Load/Toggle t:Collections/History /:Search Space:Send q:Quit"
            }
            PanelFocus::Request => {
                "Tab:Panel h/l:Tab m:Method u:URL e/v:Edit a:Add d:Delete Space:Send q:Quit"
            }
            PanelFocus::Response => {
                "Tab:Panel h/l:Tab Ctrl+d/u:Scroll y:Copy D:Download Space:Send q:Quit"
            }
        },
        InputMode::Searching => "Type to filter | Enter: Keep filter | Esc: Clear | Ctrl+L: Clear",
        InputMode::EditingBody => "Type to edit | Enter: Newline | Ctrl+S: Save | Esc: Cancel",
        _ => "Type to edit | Enter: Confirm | Ctrl+W: Delete word | Esc: Cancel",
    };

    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title("Commands"));

    frame.render_widget(footer, area);
}

/// Render a one-line `[ A ] [ B ]` tab bar with the active tab highlighted
pub fn render_tab_bar(frame: &mut Frame, area: Rect, labels: &[&str], active: usize) {
    let mut spans = Vec::new();

    for (index, label) in labels.iter().enumerate() {
        let style = if index == active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        spans.push(Span::styled("[ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled((*label).to_owned(), style));
        spans.push(Span::styled(" ]", Style::default().fg(Color::DarkGray)));
        if index + 1 < labels.len() {
            spans.push(Span::raw(" "));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the notification toast in the bottom-right corner, above the footer
pub fn render_notification(frame: &mut Frame, notification: &Notification) {
    let area = frame.area();

    let width = area.width.saturating_sub(2).min(48);
    let height = 4;
    if width < 12 || area.height < height + 4 {
        return;
    }

    let toast_area = Rect {
        x: area.width.saturating_sub(width + 1),
        y: area.height.saturating_sub(height + 4),
        width,
        height,
    };

    let border_color = match notification.severity {
        Severity::Info => Color::Cyan,
        Severity::Destructive => Color::Red,
    };

    frame.render_widget(Clear, toast_area);

    let block = Block::default()
        .title(format!(" {} ", notification.title))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(Color::Rgb(30, 30, 30)).fg(Color::White));

    let inner = block.inner(toast_area);
    frame.render_widget(block, toast_area);

    let description = Paragraph::new(notification.description.clone())
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });
    frame.render_widget(description, inner);
}
