//! Main panel rendering
//!
//! - Sidebar (left side) - collections tree and history
//! - Request panel - Params / Headers / Body tabs
//! - Response panel - summary line with Body / Headers tabs

use super::{styling, tabs::*};
use crate::response::format_size_kb;
use crate::state::AppState;
use crate::types::{KvTarget, PanelFocus, RequestTab, ResponseTab, SidebarItem};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the sidebar with collections and history
pub fn render_sidebar(frame: &mut Frame, area: Rect, state: &AppState) {
    let items: Vec<ListItem> = state
        .sidebar_items()
        .into_iter()
        .map(|item| ListItem::new(sidebar_line(item)))
        .collect();

    let focused = state.ui.panel_focus == PanelFocus::Sidebar;
    let list = List::new(items)
        .block(
            Block::default()
                .title("[1] Collections & History")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(styling::border_color(focused))),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    let mut list_state = ListState::default().with_selected(focused.then_some(state.ui.sidebar_selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Render the request panel with its tab bar
pub fn render_request_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.ui.panel_focus == PanelFocus::Request;
    let block = Block::default()
        .title("[2] Request")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(styling::border_color(focused)));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // Split into: Tab bar (1 line) + Content area (rest)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner_area);

    let draft = &state.request.draft;
    let active = state.ui.request_tab;
    let params_label = format!("1 Params ({})", draft.keyed_count(KvTarget::Params));
    let headers_label = format!("2 Headers ({})", draft.keyed_count(KvTarget::Headers));

    let tabs = Line::from(vec![
        Span::styled("[ ", Style::default().fg(Color::DarkGray)),
        Span::styled(params_label, styling::tab_style(active == RequestTab::Params)),
        Span::styled(" ] [ ", Style::default().fg(Color::DarkGray)),
        Span::styled(headers_label, styling::tab_style(active == RequestTab::Headers)),
        Span::styled(" ] [ ", Style::default().fg(Color::DarkGray)),
        Span::styled("3 Body", styling::tab_style(active == RequestTab::Body)),
        Span::styled(" ]", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(tabs), chunks[0]);

    match active {
        RequestTab::Params => render_entries_tab(frame, chunks[1], state, KvTarget::Params),
        RequestTab::Headers => render_entries_tab(frame, chunks[1], state, KvTarget::Headers),
        RequestTab::Body => render_body_tab(frame, chunks[1], state),
    }
}

/// Render the response panel: summary, tab bar and the active tab
pub fn render_response_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.ui.panel_focus == PanelFocus::Response;
    let title = if state.ui.copied {
        "[3] Response ✓ Copied"
    } else {
        "[3] Response"
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(styling::border_color(focused)));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let Some(response) = &state.request.response else {
        let hint = if state.request.in_flight {
            Span::styled("Sending request...", Style::default().fg(Color::Yellow))
        } else {
            Span::styled(
                "Press [s] or [Enter] to send the request",
                Style::default().fg(Color::DarkGray),
            )
        };
        frame.render_widget(Paragraph::new(hint), inner_area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Summary
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Content
        ])
        .split(inner_area);

    if response.is_transport_error() {
        let message = response.body.error_message().unwrap_or("Request failed");
        let error = Paragraph::new(vec![
            Line::from(Span::styled(
                "Could not send request",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("{} ms", response.time)),
            Line::from(""),
            Line::from(Span::styled(message.to_string(), Style::default().fg(Color::Red))),
        ])
        .wrap(ratatui::widgets::Wrap { trim: false });
        frame.render_widget(error, inner_area);
        return;
    }

    let summary = Line::from(vec![
        Span::styled(
            format!("{} {}", response.status, response.status_text),
            Style::default()
                .fg(styling::status_color(response.status))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(format!("{} ms", response.time), Style::default().fg(Color::Gray)),
        Span::raw("   "),
        Span::styled(format_size_kb(response.size), Style::default().fg(Color::Gray)),
    ]);
    frame.render_widget(Paragraph::new(summary), chunks[0]);

    let active = state.ui.response_tab;
    let tabs = Line::from(vec![
        Span::styled("[ ", Style::default().fg(Color::DarkGray)),
        Span::styled("Body", styling::tab_style(active == ResponseTab::Body)),
        Span::styled(" ] [ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("Headers ({})", response.headers.len()),
            styling::tab_style(active == ResponseTab::Headers),
        ),
        Span::styled(" ]", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(tabs), chunks[1]);

    match active {
        ResponseTab::Body => render_response_body(frame, chunks[2], response, state.ui.response_scroll),
        ResponseTab::Headers => {
            render_response_headers(frame, chunks[2], response, state.ui.response_scroll)
        }
    }
}

// ============================================================================
// Private Helper Functions
// ============================================================================

fn sidebar_line(item: SidebarItem) -> Line<'static> {
    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    match item {
        SidebarItem::CollectionsHeader { expanded } => Line::from(Span::styled(
            format!("{} Collections", expand_icon(expanded)),
            header_style,
        )),
        SidebarItem::Collection {
            name,
            count,
            expanded,
            ..
        } => Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{} {name}", expand_icon(expanded)),
                Style::default().fg(Color::White),
            ),
            Span::styled(format!(" ({count})"), Style::default().fg(Color::DarkGray)),
        ]),
        SidebarItem::SavedRequest { method, name, .. } => Line::from(vec![
            Span::raw("      "),
            Span::styled(format!("{:7}", method.as_str()), styling::method_style(method)),
            Span::raw(name),
        ]),
        SidebarItem::HistoryHeader { count, expanded } => Line::from(Span::styled(
            format!("{} History ({count})", expand_icon(expanded)),
            header_style,
        )),
        SidebarItem::History {
            method,
            url,
            status,
            timestamp,
            ..
        } => Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{:7}", method.as_str()), styling::method_style(method)),
            Span::styled(
                format!("{status:>3} "),
                Style::default().fg(styling::status_color(status)),
            ),
            Span::styled(
                timestamp.format("%H:%M:%S ").to_string(),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(url),
        ]),
    }
}

fn expand_icon(expanded: bool) -> &'static str {
    if expanded {
        "▼"
    } else {
        "▶"
    }
}
