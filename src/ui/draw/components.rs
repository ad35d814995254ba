//! Reusable UI components
//!
//! - Header (title, auth status)
//! - Request bar (method, URL, send state)
//! - Footer (command help)

use super::styling;
use crate::state::AppState;
use crate::types::{AuthState, InputMode, PanelFocus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the application header with auth info
pub fn render_header(frame: &mut Frame, area: Rect, auth: &AuthState) {
    let auth_status = get_auth_status_text(auth);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "lazy api tester",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(auth_status, Style::default().fg(Color::Gray)),
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

/// Method selector, URL input and send indicator
pub fn render_request_bar(frame: &mut Frame, area: Rect, state: &AppState, spinner_index: usize) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(10), // Method
            Constraint::Min(0),     // URL
            Constraint::Length(14), // Send
        ])
        .split(area);

    let focused = state.ui.panel_focus == PanelFocus::Request;
    let method = state.request.draft.method;

    let method_widget = Paragraph::new(Span::styled(method.as_str(), styling::method_style(method)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("m")
                .border_style(Style::default().fg(styling::border_color(focused))),
        );
    frame.render_widget(method_widget, chunks[0]);

    let editing = state.input.mode == InputMode::EditingUrl;
    let url_text = if editing {
        format!("{}▊", state.input.buffer)
    } else {
        state.request.draft.url.clone()
    };
    let url_style = if editing {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let url_widget = Paragraph::new(Span::styled(url_text, url_style)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("URL (u)")
            .border_style(Style::default().fg(if editing {
                Color::Yellow
            } else {
                styling::border_color(focused)
            })),
    );
    frame.render_widget(url_widget, chunks[1]);

    let spinner = ["⠋", "⠙", "⠹", "⠸"];
    let send_text = if state.request.in_flight {
        Span::styled(
            format!("{} Sending", spinner[spinner_index % spinner.len()]),
            Style::default().fg(Color::Yellow),
        )
    } else {
        Span::styled(
            "Send ⏎",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
    };
    let send_widget = Paragraph::new(send_text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(send_widget, chunks[2]);
}

/// Render the footer with command help for the current mode
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let footer_text = match state.input.mode {
        InputMode::Normal => match state.ui.panel_focus {
            PanelFocus::Sidebar => {
                "Tab:Panel j/k:Nav Enter:Load/Toggle n:New collection S:Save here d:Delete c/h:Sections | s:Send l:Login q:Quit"
            }
            PanelFocus::Request => {
                "Tab:Panel s/Enter:Send m/M:Method u:URL 1/2/3:Tabs a:Add e/v:Edit Space:Toggle d:Delete b:Body S:Save | q:Quit"
            }
            PanelFocus::Response => {
                "Tab:Panel r:Body/Headers y:Copy Ctrl+u/d:Scroll | s:Send l:Login q:Quit"
            }
        },
        InputMode::EditingUrl | InputMode::EditingEntry { .. } | InputMode::NamingCollection => {
            "Type to edit  |  Enter: Confirm  |  Ctrl+W: Delete word  |  Esc: Cancel"
        }
        InputMode::EditingBody => "Enter: Newline  |  Ctrl+S: Save  |  Ctrl+F: Format JSON  |  Esc: Cancel",
        InputMode::Authenticating => "Tab: Switch field  |  Ctrl+T: Login/Sign Up  |  Enter: Submit  |  Esc: Close",
        InputMode::ConfirmLogout => "Y: Logout  |  N: Cancel",
    };

    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title("Commands"));

    frame.render_widget(footer, area);
}

/// Get authentication status display text
fn get_auth_status_text(auth: &AuthState) -> String {
    match &auth.user {
        Some(user) => format!("● {} | 'l':logout", user.display_name()),
        None => "○ Not logged in | 'l':login".to_string(),
    }
}
