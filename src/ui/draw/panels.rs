//! Main panel rendering
//!
//! - Sidebar panel (left): collections tree or history list with search
//! - Request panel (top right): method/URL line and the form tabs
//! - Response panel (bottom right): loading / empty / populated views

use super::components::render_tab_bar;
use super::styling;
use super::tabs::*;
use crate::state::AppState;
use crate::types::{
    status_bucket, FormTab, InputMode, PanelFocus, ResponseTab, SidebarItem, SidebarTab,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const SPINNER_FRAMES: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// Render the left panel: sidebar tabs, search bar, and the filtered list
pub fn render_sidebar_panel(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    list_state: &mut ListState,
) {
    let border_color = if state.ui.panel_focus == PanelFocus::Sidebar {
        styling::focused_border()
    } else {
        styling::unfocused_border()
    };

    let block = Block::default()
        .title("[1] Sidebar")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Length(1), // Search bar
            Constraint::Min(0),    // List
        ])
        .split(inner);

    let active_tab = match state.ui.sidebar_tab {
        SidebarTab::Collections => 0,
        SidebarTab::History => 1,
    };
    render_tab_bar(frame, chunks[0], &["Collections", "History"], active_tab);

    render_search_line(frame, chunks[1], state);

    if state.search.items.is_empty() {
        let message = if state.search.query.is_empty() {
            "No saved requests"
        } else {
            "No matching requests - press Esc to clear search"
        };
        let empty = Paragraph::new(message).style(Style::default().fg(Color::Yellow));
        frame.render_widget(empty, chunks[2]);
        return;
    }

    let items: Vec<ListItem> = state
        .search
        .items
        .iter()
        .map(|item| match item {
            SidebarItem::CollectionHeader {
                name,
                count,
                expanded,
                ..
            } => {
                let icon = if *expanded { "▼" } else { "▶" };
                ListItem::new(Line::from(Span::styled(
                    format!("{icon} {name} ({count})"),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )))
            }
            SidebarItem::Request(request) => {
                let mut spans = vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{:7}", request.method.as_str()),
                        Style::default()
                            .fg(styling::method_color(request.method))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                    Span::raw(request.name.clone()),
                ];
                if let Some(age) = request.age_label {
                    spans.push(Span::styled(
                        format!(" · {age}"),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                ListItem::new(Line::from(spans))
            }
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    frame.render_stateful_widget(list, chunks[2], list_state);
}

/// Render the request panel: method + URL line, then the active form tab
pub fn render_request_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let border_color = if state.ui.panel_focus == PanelFocus::Request {
        styling::focused_border()
    } else {
        styling::unfocused_border()
    };

    let block = Block::default()
        .title("[2] Request")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Method + URL
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Tab content
        ])
        .split(inner);

    render_method_url_line(frame, chunks[0], state);

    let labels: Vec<&str> = FormTab::ALL.iter().map(|t| t.label()).collect();
    let active = FormTab::ALL
        .iter()
        .position(|t| *t == state.ui.form_tab)
        .unwrap_or(0);
    render_tab_bar(frame, chunks[1], &labels, active);

    match state.ui.form_tab {
        FormTab::Headers => render_form_headers_tab(frame, chunks[2], state),
        FormTab::Body => render_form_body_tab(frame, chunks[2], state),
        FormTab::Auth => render_form_auth_tab(frame, chunks[2], state),
        FormTab::Params => render_form_params_tab(frame, chunks[2]),
    }
}

/// Render the response panel: loading, empty, or the populated viewer
pub fn render_response_panel(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    spinner_index: usize,
) {
    let border_color = if state.ui.panel_focus == PanelFocus::Response {
        styling::focused_border()
    } else {
        styling::unfocused_border()
    };

    let block = Block::default()
        .title("[3] Response")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.request.in_flight {
        let spinner = SPINNER_FRAMES[spinner_index % SPINNER_FRAMES.len()];
        let loading = Paragraph::new(format!("{spinner} Sending request...\n\nPlease wait..."))
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(loading, inner);
        return;
    }

    let Some(result) = &state.request.current_response else {
        let empty = Paragraph::new(
            "Ready to send your first request?\n\nEnter a URL above and press Space to send.",
        )
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: false });
        frame.render_widget(empty, inner);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status line
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Tab content
        ])
        .split(inner);

    let bucket = status_bucket(result.status);
    let status_line = Line::from(vec![
        Span::styled(
            format!("● {} {}", result.status, result.status_text),
            Style::default()
                .fg(styling::bucket_color(bucket))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{}ms", result.elapsed_ms),
            Style::default().fg(Color::White),
        ),
        Span::raw("  "),
        Span::styled(
            format_size_kb(result.size_bytes),
            Style::default().fg(Color::White),
        ),
        Span::styled("   y:Copy D:Download", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(status_line), chunks[0]);

    let labels: Vec<&str> = ResponseTab::ALL.iter().map(|t| t.label()).collect();
    let active = ResponseTab::ALL
        .iter()
        .position(|t| *t == state.ui.response_tab)
        .unwrap_or(0);
    render_tab_bar(frame, chunks[1], &labels, active);

    match state.ui.response_tab {
        ResponseTab::Body => {
            render_response_body_tab(frame, chunks[2], result, state.ui.response_scroll)
        }
        ResponseTab::Headers => {
            render_response_headers_tab(frame, chunks[2], result, state.ui.headers_scroll)
        }
        ResponseTab::Raw => {
            render_response_raw_tab(frame, chunks[2], result, state.ui.response_scroll)
        }
    }
}

fn render_method_url_line(frame: &mut Frame, area: Rect, state: &AppState) {
    let url_display = if state.input.mode == InputMode::EditingUrl {
        format!("{}▊", state.input.buffer)
    } else {
        state.form.url.clone()
    };

    let url_style = if state.input.mode == InputMode::EditingUrl {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let hint = if state.request.in_flight {
        "  Sending..."
    } else {
        "  [Space to send]"
    };

    let line = Line::from(vec![
        Span::styled(
            format!("{:7}", state.form.method.as_str()),
            Style::default()
                .fg(styling::method_color(state.form.method))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(url_display, url_style),
        Span::styled(hint, Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_search_line(frame: &mut Frame, area: Rect, state: &AppState) {
    let is_active = matches!(state.input.mode, InputMode::Searching);

    let (text, style) = if is_active {
        (
            format!("/{}_", state.search.query),
            Style::default().fg(Color::Cyan),
        )
    } else if !state.search.query.is_empty() {
        (
            format!(
                "/{} [{} matches]",
                state.search.query,
                state.matched_request_count()
            ),
            Style::default().fg(Color::Green),
        )
    } else {
        (
            "Press / to search".to_owned(),
            Style::default().fg(Color::DarkGray),
        )
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}
