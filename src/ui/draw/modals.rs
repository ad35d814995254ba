//! Modal dialog rendering
//!
//! - Login / sign-up modal
//! - Logout confirmation
//! - New collection name prompt
//! - Request body editor

use super::styling;
use crate::state::AppState;
use crate::types::AuthField;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Centered rectangle of the given size, clipped to the frame
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

fn modal_block(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .style(styling::modal_style())
}

fn field_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// Render the login / sign-up modal. Nothing entered here is verified.
pub fn render_auth_modal(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let modal_width = (area.width as f32 * 0.5).min(60.0) as u16;
    let modal_area = centered_rect(area, modal_width, 11);

    frame.render_widget(Clear, modal_area);

    let form = &state.input.auth_form;
    let title = format!(" {} ", form.mode.title());
    let block = modal_block(&title, Color::Magenta);
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Email label
            Constraint::Length(1), // Email input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Password label
            Constraint::Length(1), // Password input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let email_active = form.active_field == AuthField::Email;
    let password_active = form.active_field == AuthField::Password;

    let email_label = if email_active { "► Email:" } else { "  Email:" };
    frame.render_widget(
        Paragraph::new(email_label).style(Style::default().fg(Color::LightCyan)),
        chunks[0],
    );
    let email_text = if email_active {
        format!("{}▊", form.email)
    } else {
        form.email.clone()
    };
    frame.render_widget(
        Paragraph::new(email_text).style(field_style(email_active)),
        chunks[1],
    );

    let password_label = if password_active {
        "► Password:"
    } else {
        "  Password:"
    };
    frame.render_widget(
        Paragraph::new(password_label).style(Style::default().fg(Color::LightCyan)),
        chunks[3],
    );
    let masked = "•".repeat(form.password.chars().count());
    let password_text = if password_active {
        format!("{masked}▊")
    } else {
        masked
    };
    frame.render_widget(
        Paragraph::new(password_text).style(field_style(password_active)),
        chunks[4],
    );

    let help = Paragraph::new(format!(
        "Enter: {}  |  Tab: Switch field  |  Ctrl+T: Toggle Login/Sign Up  |  Esc: Close",
        form.mode.title()
    ))
    .style(styling::help_style())
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(help, chunks[6]);
}

/// Render the logout confirmation modal
pub fn render_logout_confirmation_modal(frame: &mut Frame) {
    let area = frame.area();
    let modal_width = (area.width as f32 * 0.5).min(50.0) as u16;
    let modal_area = centered_rect(area, modal_width, 6);

    frame.render_widget(Clear, modal_area);

    let block = modal_block(" Logout? ", Color::Red);
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(inner);

    let message = Paragraph::new("Your display name will be cleared.")
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(message, chunks[0]);

    let actions = Paragraph::new("[Y] Yes, logout  |  [N] Cancel")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(actions, chunks[1]);
}

/// Render the new-collection name prompt
pub fn render_collection_name_modal(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let modal_width = (area.width as f32 * 0.5).min(60.0) as u16;
    let modal_area = centered_rect(area, modal_width, 6);

    frame.render_widget(Clear, modal_area);

    let block = modal_block(" New Collection ", Color::Cyan);
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new("Name:").style(Style::default().fg(Color::LightCyan)),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(format!("{}▊", state.input.buffer)).style(field_style(true)),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new("Enter: Create  |  Esc: Cancel")
            .style(styling::help_style())
            .alignment(Alignment::Center),
        chunks[2],
    );
}

/// Render the multi-line body editor
pub fn render_body_editor_modal(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Larger modal for multi-line editing
    let modal_width = (area.width as f32 * 0.8).min(100.0) as u16;
    let modal_height = (area.height as f32 * 0.7).min(30.0) as u16;
    let modal_area = centered_rect(area, modal_width, modal_height);

    frame.render_widget(Clear, modal_area);

    let block = modal_block(" Edit Request Body ", Color::Green);
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Body content (grows)
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let body_text = Paragraph::new(state.input.body_editor.content_with_cursor())
        .style(Style::default().fg(Color::Yellow))
        .wrap(Wrap { trim: false });
    frame.render_widget(body_text, chunks[0]);

    let help = Paragraph::new("Ctrl+S: Save  |  Ctrl+F: Format JSON  |  Ctrl+L: Clear  |  Esc: Cancel")
        .style(styling::help_style())
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[1]);
}
