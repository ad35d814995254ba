//! Styling utilities and color schemes
//!
//! This module contains color helpers and style constants used throughout the UI.

use crate::response::{JsonTokenKind, StatusClass};
use crate::types::HttpMethod;
use ratatui::style::{Color, Modifier, Style};

/// Get the color for an HTTP method
pub fn method_color(method: HttpMethod) -> Color {
    match method {
        HttpMethod::Get => Color::Green,
        HttpMethod::Post => Color::Blue,
        HttpMethod::Put => Color::Yellow,
        HttpMethod::Delete => Color::Red,
        HttpMethod::Patch => Color::Cyan,
    }
}

pub fn method_style(method: HttpMethod) -> Style {
    Style::default()
        .fg(method_color(method))
        .add_modifier(Modifier::BOLD)
}

pub fn status_color(status: u16) -> Color {
    match StatusClass::from_status(status) {
        StatusClass::Success => Color::Green,
        StatusClass::Redirect => Color::Yellow,
        StatusClass::Error => Color::Red,
        StatusClass::Unknown => Color::Gray,
    }
}

pub fn json_token_style(kind: JsonTokenKind) -> Style {
    match kind {
        JsonTokenKind::Key => Style::default().fg(Color::Magenta),
        JsonTokenKind::String => Style::default().fg(Color::Green),
        JsonTokenKind::Boolean => Style::default().fg(Color::Blue),
        JsonTokenKind::Null => Style::default().fg(Color::Gray),
        JsonTokenKind::Number => Style::default().fg(Color::Rgb(255, 165, 0)),
        JsonTokenKind::Plain => Style::default(),
    }
}

pub fn focused_border() -> Color {
    Color::Cyan
}

pub fn unfocused_border() -> Color {
    Color::DarkGray
}

pub fn border_color(focused: bool) -> Color {
    if focused {
        focused_border()
    } else {
        unfocused_border()
    }
}

/// Style for the selected tab label
pub fn tab_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// Background shared by every modal
pub fn modal_style() -> Style {
    Style::default().bg(Color::Rgb(30, 30, 30)).fg(Color::White)
}

pub fn help_style() -> Style {
    Style::default().fg(Color::Rgb(150, 150, 150))
}
