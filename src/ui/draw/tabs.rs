//! Tab content rendering
//!
//! Request form tabs: headers (with inline editing), body preview, auth,
//! params hint. Response viewer tabs: formatted body, headers list, raw text.

use crate::state::AppState;
use crate::types::{AuthMode, InputMode, ResponseResult};
use crate::utils::mask_secret;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Render the Headers form tab: one row per entry with inline editing
pub fn render_form_headers_tab(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    if state.form.headers.is_empty() {
        lines.push(Line::from(Span::styled(
            "No headers - press 'a' to add one",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for (index, header) in state.form.headers.iter().enumerate() {
        let is_selected = state.form.selected_header == index;

        let name_display = match &state.input.mode {
            InputMode::EditingHeaderName(i) if *i == index => {
                format!("[{}▊]", state.input.buffer)
            }
            _ if header.name.is_empty() => "[_____]".to_owned(),
            _ => header.name.clone(),
        };

        let value_display = match &state.input.mode {
            InputMode::EditingHeaderValue(i) if *i == index => {
                format!("[{}▊]", state.input.buffer)
            }
            _ if header.value.is_empty() => "[_____]".to_owned(),
            _ => header.value.clone(),
        };

        let indicator = if is_selected { "→ " } else { "  " };
        let name_style = if is_selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let value_style = if is_selected {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };

        lines.push(Line::from(vec![
            Span::styled(
                indicator,
                Style::default().fg(if is_selected {
                    Color::Yellow
                } else {
                    Color::DarkGray
                }),
            ),
            Span::styled(name_display, name_style),
            Span::styled(": ", Style::default().fg(Color::DarkGray)),
            Span::styled(value_display, value_style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Incomplete rows are dropped when the request is sent",
        Style::default().fg(Color::DarkGray),
    )));

    let content = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(content, area);
}

/// Render the Body form tab: preview of the request body, or the GET notice
pub fn render_form_body_tab(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    if !state.form.method.supports_body() {
        lines.push(Line::from(Span::styled(
            "GET requests don't support a request body",
            Style::default().fg(Color::DarkGray),
        )));
    } else if state.form.body.is_empty() {
        lines.push(Line::from(Span::styled(
            "Press 'e' to edit the request body (JSON, XML, etc.)",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        for line in state.form.body.lines() {
            lines.push(Line::from(Span::styled(
                line.to_owned(),
                Style::default().fg(Color::Yellow),
            )));
        }
    }

    let content = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(content, area);
}

/// Render the Auth form tab for the selected mode
pub fn render_form_auth_tab(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("Type: ", Style::default().fg(Color::Cyan)),
        Span::styled(
            state.form.auth_mode.label(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  [press 't' to change]", Style::default().fg(Color::DarkGray)),
    ]));
    lines.push(Line::from(""));

    match state.form.auth_mode {
        AuthMode::None => {
            lines.push(Line::from(Span::styled(
                "Requests are sent without credentials",
                Style::default().fg(Color::DarkGray),
            )));
        }
        AuthMode::Bearer => {
            let token_display = if state.input.mode == InputMode::EditingToken {
                format!("{}▊", state.input.buffer)
            } else if state.form.token.is_empty() {
                "[_____]".to_owned()
            } else {
                mask_secret(&state.form.token)
            };
            lines.push(Line::from(vec![
                Span::styled("Token: ", Style::default().fg(Color::Cyan)),
                Span::styled(token_display, Style::default().fg(Color::Yellow)),
                Span::styled("  [press 'e' to edit]", Style::default().fg(Color::DarkGray)),
            ]));
        }
        AuthMode::Basic => {
            let username_display = if state.input.mode == InputMode::EditingUsername {
                format!("{}▊", state.input.buffer)
            } else if state.form.username.is_empty() {
                "[_____]".to_owned()
            } else {
                state.form.username.clone()
            };
            let password_display = if state.input.mode == InputMode::EditingPassword {
                format!("{}▊", state.input.buffer)
            } else {
                mask_secret(&state.form.password)
            };
            lines.push(Line::from(vec![
                Span::styled("Username: ", Style::default().fg(Color::Cyan)),
                Span::styled(username_display, Style::default().fg(Color::Yellow)),
                Span::styled("  [press 'e' to edit]", Style::default().fg(Color::DarkGray)),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Password: ", Style::default().fg(Color::Cyan)),
                Span::styled(password_display, Style::default().fg(Color::Yellow)),
                Span::styled("  [press 'v' to edit]", Style::default().fg(Color::DarkGray)),
            ]));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Basic credentials are not applied to outgoing requests yet",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let content = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(content, area);
}

/// Render the Params form tab (informational only)
pub fn render_form_params_tab(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Query parameters can be added directly to the URL above.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "Example: ?param1=value1&param2=value2",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

/// Render the formatted response body
pub fn render_response_body_tab(
    frame: &mut Frame,
    area: Rect,
    result: &ResponseResult,
    scroll: usize,
) {
    let formatted = result.body.formatted();
    let lines: Vec<Line> = formatted.lines().map(|l| Line::from(l.to_owned())).collect();

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll as u16, 0));

    frame.render_widget(content, area);
}

/// Render the response headers list, sorted by name
pub fn render_response_headers_tab(
    frame: &mut Frame,
    area: Rect,
    result: &ResponseResult,
    scroll: usize,
) {
    let mut lines: Vec<Line> = Vec::new();

    if result.headers.is_empty() {
        lines.push(Line::from(Span::styled(
            "No headers",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        let mut header_vec: Vec<_> = result.headers.iter().collect();
        header_vec.sort_by_key(|(name, _)| name.as_str());

        for (name, value) in header_vec {
            lines.push(Line::from(vec![
                Span::styled(format!("{name}: "), Style::default().fg(Color::Cyan)),
                Span::raw(value.clone()),
            ]));
        }
    }

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll as u16, 0));

    frame.render_widget(content, area);
}

/// Render the raw response text
pub fn render_response_raw_tab(
    frame: &mut Frame,
    area: Rect,
    result: &ResponseResult,
    scroll: usize,
) {
    let raw = result.body.raw();
    let lines: Vec<Line> = raw.lines().map(|l| Line::from(l.to_owned())).collect();

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll as u16, 0));

    frame.render_widget(content, area);
}

/// Size display: bytes as KB with two decimals
pub fn format_size_kb(size_bytes: usize) -> String {
    format!("{:.2} KB", size_bytes as f64 / 1024.0)
}
