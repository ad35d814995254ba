//! Tab rendering for the request and response panels
//!
//! - Params / Headers tabs (editable key-value rows)
//! - Body tab (request body preview)
//! - Response body (JSON highlighting) and response headers

use super::styling;
use crate::response::{display_body, tokenize_json_line};
use crate::state::AppState;
use crate::types::{InputMode, KeyValueEntry, KvField, KvTarget, ResponseBody, ResponseResult};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Render the Params or Headers tab
pub fn render_entries_tab(frame: &mut Frame, area: Rect, state: &AppState, target: KvTarget) {
    let entries = state.request.draft.entries(target);
    let mut lines: Vec<Line> = Vec::new();

    if entries.is_empty() {
        lines.push(Line::from(Span::styled(
            "No rows. Press 'a' to add one",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for (idx, entry) in entries.iter().enumerate() {
        let editing = match &state.input.mode {
            InputMode::EditingEntry {
                target: t,
                index,
                field,
            } if *t == target && *index == idx => Some(*field),
            _ => None,
        };
        let is_selected = state.ui.selected_entry == idx;
        lines.push(build_entry_line(
            entry,
            is_selected,
            editing,
            &state.input.buffer,
        ));
    }

    if target == KvTarget::Params {
        let preview = crate::request::build_url(&state.request.draft.url, entries);
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Preview URL:",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            preview,
            Style::default().fg(Color::Yellow),
        )));
    }

    let content = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(content, area);
}

/// Render the Body tab
pub fn render_body_tab(frame: &mut Frame, area: Rect, state: &AppState) {
    let draft = &state.request.draft;
    let mut lines: Vec<Line> = Vec::new();

    if !draft.method.supports_body() {
        lines.push(Line::from(Span::styled(
            format!("{} requests are sent without a body", draft.method),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    if draft.body.is_empty() {
        lines.push(Line::from(Span::styled(
            "Empty body. Press 'b' to edit",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.extend(
            draft
                .body
                .lines()
                .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(Color::Yellow)))),
        );
    }

    let content = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(content, area);
}

/// Render the response body, highlighted when it is JSON
pub fn render_response_body(frame: &mut Frame, area: Rect, response: &ResponseResult, scroll: usize) {
    let text = display_body(&response.body);
    let lines = match &response.body {
        ResponseBody::Json(_) => highlight_json(&text),
        ResponseBody::Raw(_) => text.lines().map(|line| Line::from(line.to_string())).collect(),
    };

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));
    frame.render_widget(content, area);
}

/// Render the response headers, sorted by name
pub fn render_response_headers(frame: &mut Frame, area: Rect, response: &ResponseResult, scroll: usize) {
    let mut lines: Vec<Line> = Vec::new();

    if response.headers.is_empty() {
        lines.push(Line::from(Span::styled(
            "No headers",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        let mut header_vec: Vec<_> = response.headers.iter().collect();
        header_vec.sort_by_key(|(k, _)| k.as_str());

        for (key, value) in header_vec {
            lines.push(Line::from(vec![
                Span::styled(format!("{key}: "), Style::default().fg(Color::Cyan)),
                Span::raw(value.to_string()),
            ]));
        }
    }

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));
    frame.render_widget(content, area);
}

/// Turn pretty-printed JSON into styled lines
pub fn highlight_json(text: &str) -> Vec<Line<'static>> {
    text.lines()
        .map(|line| {
            Line::from(
                tokenize_json_line(line)
                    .into_iter()
                    .map(|(kind, token)| Span::styled(token.to_string(), styling::json_token_style(kind)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}

/// Helper function to build a single key-value row with styling
fn build_entry_line(
    entry: &KeyValueEntry,
    is_selected: bool,
    editing: Option<KvField>,
    buffer: &str,
) -> Line<'static> {
    let indicator = if is_selected { "→ " } else { "  " };
    let checkbox = if entry.enabled { "[x] " } else { "[ ] " };

    let cell = |field: KvField, current: &str, placeholder: &str| -> Span<'static> {
        if editing == Some(field) {
            Span::styled(
                format!("{buffer}▊"),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        } else if current.is_empty() {
            Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray))
        } else {
            let style = match (entry.enabled, is_selected) {
                (false, _) => Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT),
                (true, true) => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                (true, false) => Style::default().fg(Color::White),
            };
            Span::styled(current.to_string(), style)
        }
    };

    Line::from(vec![
        Span::styled(
            indicator,
            Style::default().fg(if is_selected {
                Color::Yellow
            } else {
                Color::DarkGray
            }),
        ),
        Span::styled(
            checkbox,
            Style::default().fg(if entry.enabled {
                Color::Green
            } else {
                Color::DarkGray
            }),
        ),
        cell(KvField::Key, &entry.key, "key"),
        Span::styled(" = ", Style::default().fg(Color::DarkGray)),
        cell(KvField::Value, &entry.value, "value"),
    ])
}
