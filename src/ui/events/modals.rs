//! Modal dialog handlers
//!
//! This module handles user input for modal dialogs:
//! - Login / sign-up form
//! - Logout confirmation

use super::helpers::{apply, collect_paste_batch};
use crate::actions::AppAction;
use crate::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::{Arc, RwLock};

/// Handle `l`: open the login modal, or ask to log out when already logged in
pub fn handle_auth_dialog(state: Arc<RwLock<AppState>>) {
    let logged_in = state.read().unwrap().auth.is_authenticated();
    if logged_in {
        apply(state, AppAction::RequestLogout);
    } else {
        apply(state, AppAction::OpenAuthModal);
    }
}

/// Handle input inside the login / sign-up modal (with paste batching support)
pub fn handle_auth_input(key: KeyEvent, state: Arc<RwLock<AppState>>) {
    match key.code {
        KeyCode::Esc => apply(state, AppAction::CloseAuthModal),
        KeyCode::Enter => apply(state, AppAction::SubmitAuth),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            apply(state, AppAction::SwitchAuthField)
        }
        KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply(state, AppAction::ToggleAuthFormMode)
        }
        KeyCode::Backspace => apply(state, AppAction::BackspaceAuthField),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let (batch, _) = collect_paste_batch(c);
            apply(state, AppAction::AppendToAuthField(batch));
        }
        _ => {}
    }
}

/// Handle the logout confirmation modal
pub fn handle_logout_confirmation(key: KeyEvent, state: Arc<RwLock<AppState>>) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            apply(state, AppAction::ConfirmLogout);
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            apply(state, AppAction::CancelLogout);
        }
        _ => {}
    }
}
