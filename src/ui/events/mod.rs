//! Event handling system for lazy-api-tester
//!
//! This module processes user input and translates it into state-changing actions.
//! It handles multiple input modes:
//! - Normal: Standard navigation and commands
//! - EditingUrl / EditingEntry / NamingCollection: Single-line text input
//! - EditingBody: Multi-line body editor
//! - Authenticating / ConfirmLogout: Auth modals
//!
//! # Architecture
//!
//! The EventHandler uses an action pattern where input events generate AppActions
//! that are applied to AppState via the apply_action function in actions.rs.
//!
//! # Lock Management
//!
//! This module frequently acquires locks on Arc<RwLock<AppState>>. Care must be
//! taken to minimize lock duration and avoid deadlocks. See handle_events for
//! the main event loop.

mod editing;
mod execution;
mod helpers;
mod modals;
mod navigation;
mod yank;

use helpers::apply;

use crate::actions::AppAction;
use crate::state::AppState;
use crate::types::{InputMode, KvField, PanelFocus, RequestTab};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::sync::{Arc, RwLock};

/// Event handler for managing user input and state updates
#[derive(Debug, Default)]
pub struct EventHandler {
    pub should_quit: bool,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Main event handling loop - dispatches to appropriate handlers based on input mode
    pub fn handle_events(
        &mut self,
        state: Arc<RwLock<AppState>>,
        client: &reqwest::Client,
        copied_flash_ms: u64,
    ) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                let input_mode = state.read().unwrap().input.mode.clone();

                match input_mode {
                    InputMode::EditingUrl
                    | InputMode::EditingEntry { .. }
                    | InputMode::NamingCollection => editing::handle_line_input(key, state),
                    InputMode::EditingBody => editing::handle_body_input(key, state),
                    InputMode::Authenticating => modals::handle_auth_input(key, state),
                    InputMode::ConfirmLogout => modals::handle_logout_confirmation(key, state),
                    InputMode::Normal => {
                        self.handle_normal_key(key, state, client, copied_flash_ms)
                    }
                }
            }
        }
        Ok(())
    }

    fn handle_normal_key(
        &mut self,
        key: KeyEvent,
        state: Arc<RwLock<AppState>>,
        client: &reqwest::Client,
        copied_flash_ms: u64,
    ) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            // QUIT
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
            }

            // -- with modifiers
            // Ctrl+u: Scroll response up
            KeyCode::Char('u') if ctrl => apply(state, AppAction::ScrollUp),
            // Ctrl+d: Scroll response down
            KeyCode::Char('d') if ctrl => apply(state, AppAction::ScrollDown),

            // panel focus
            KeyCode::Tab => apply(state, AppAction::FocusNext),
            KeyCode::BackTab => apply(state, AppAction::FocusPrev),

            // nav
            KeyCode::Char('j') | KeyCode::Down => navigation::handle_down(state),
            KeyCode::Char('k') | KeyCode::Up => navigation::handle_up(state),

            // send, or activate the selected sidebar row
            KeyCode::Enter => {
                let panel = state.read().unwrap().ui.panel_focus;
                if panel == PanelFocus::Sidebar {
                    navigation::handle_sidebar_enter(state);
                } else {
                    execution::handle_send(state, client);
                }
            }
            KeyCode::Char('s') => {
                execution::handle_send(state, client);
            }

            // method
            KeyCode::Char('m') => apply(state, AppAction::CycleMethodForward),
            KeyCode::Char('M') => apply(state, AppAction::CycleMethodBackward),

            // url
            KeyCode::Char('u') => apply(state, AppAction::StartEditingUrl),

            // request tabs
            KeyCode::Char('1') => helpers::apply_many(
                state,
                vec![
                    AppAction::NavigateToPanel(PanelFocus::Request),
                    AppAction::SetRequestTab(RequestTab::Params),
                ],
            ),
            KeyCode::Char('2') => helpers::apply_many(
                state,
                vec![
                    AppAction::NavigateToPanel(PanelFocus::Request),
                    AppAction::SetRequestTab(RequestTab::Headers),
                ],
            ),
            KeyCode::Char('3') => helpers::apply_many(
                state,
                vec![
                    AppAction::NavigateToPanel(PanelFocus::Request),
                    AppAction::SetRequestTab(RequestTab::Body),
                ],
            ),

            // params / headers rows
            KeyCode::Char('a') => editing::handle_add_entry(state),
            KeyCode::Char('e') => editing::handle_entry_edit(state, KvField::Key),
            KeyCode::Char('v') => editing::handle_entry_edit(state, KvField::Value),
            KeyCode::Char(' ') => editing::handle_toggle_entry(state),
            KeyCode::Char('d') => navigation::handle_delete(state),

            // body
            KeyCode::Char('b') => apply(state, AppAction::StartEditingBody),

            // collections
            KeyCode::Char('n') => apply(state, AppAction::StartNamingCollection),
            KeyCode::Char('S') => {
                let target = state.read().unwrap().target_collection();
                match target {
                    Some(id) => apply(state, AppAction::SaveToCollection(id)),
                    None => tracing::debug!("no collection to save into"),
                }
            }
            KeyCode::Char('c') => apply(state, AppAction::ToggleCollectionsSection),
            KeyCode::Char('h') => apply(state, AppAction::ToggleHistorySection),

            // response
            KeyCode::Char('y') => yank::handle_yank_response(state, copied_flash_ms),
            KeyCode::Char('r') => apply(state, AppAction::ToggleResponseTab),

            // auth
            KeyCode::Char('l') => modals::handle_auth_dialog(state),

            _ => {}
        }
    }
}
