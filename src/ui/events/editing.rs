//! Text editing handlers
//!
//! This module handles:
//! - Entering edit mode for the URL, a key/value cell, the body or a new collection name
//! - Single-line buffer input (with paste batching)
//! - The multi-line body editor

use super::helpers::{apply, collect_paste_batch};
use crate::actions::AppAction;
use crate::state::AppState;
use crate::types::{KvField, PanelFocus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::{Arc, RwLock};

/// `e` / `v`: edit the key or value of the selected row
pub fn handle_entry_edit(state: Arc<RwLock<AppState>>, field: KvField) {
    let action = {
        let s = state.read().unwrap();
        if s.ui.panel_focus != PanelFocus::Request {
            return;
        }
        let Some(target) = s.ui.request_tab.kv_target() else {
            return;
        };
        if s.request.draft.entries(target).is_empty() {
            return;
        }
        AppAction::StartEditingEntry {
            target,
            index: s.ui.selected_entry,
            field,
        }
    };
    apply(state, action);
}

/// `a`: append a blank row to the active list and start editing its key
pub fn handle_add_entry(state: Arc<RwLock<AppState>>) {
    let target = {
        let s = state.read().unwrap();
        if s.ui.panel_focus != PanelFocus::Request {
            return;
        }
        match s.ui.request_tab.kv_target() {
            Some(target) => target,
            None => return,
        }
    };

    let mut s = state.write().unwrap();
    crate::actions::apply_action(AppAction::AddEntry(target), &mut s);
    let index = s.ui.selected_entry;
    crate::actions::apply_action(
        AppAction::StartEditingEntry {
            target,
            index,
            field: KvField::Key,
        },
        &mut s,
    );
}

/// `space`: enable or disable the selected row
pub fn handle_toggle_entry(state: Arc<RwLock<AppState>>) {
    let action = {
        let s = state.read().unwrap();
        match (s.ui.panel_focus, s.ui.request_tab.kv_target()) {
            (PanelFocus::Request, Some(target)) => AppAction::ToggleEntry {
                target,
                index: s.ui.selected_entry,
            },
            _ => return,
        }
    };
    apply(state, action);
}

/// Handle input for the single-line buffer modes (URL, key/value cell,
/// collection name)
pub fn handle_line_input(key: KeyEvent, state: Arc<RwLock<AppState>>) {
    match key.code {
        KeyCode::Enter => apply(state, AppAction::ConfirmEdit),
        KeyCode::Esc => apply(state, AppAction::CancelEdit),
        KeyCode::Backspace => apply(state, AppAction::BackspaceBuffer),
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply(state, AppAction::DeleteWordBuffer)
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let (batch, count) = collect_paste_batch(c);
            if count > 1 {
                tracing::debug!(count, "pasted into input buffer");
            }
            apply(state, AppAction::AppendToBuffer(batch));
        }
        _ => {}
    }
}

/// Handle input for the multi-line body editor
pub fn handle_body_input(key: KeyEvent, state: Arc<RwLock<AppState>>) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => apply(state, AppAction::CancelEdit),
        KeyCode::Char('s') if ctrl => apply(state, AppAction::ConfirmEdit),
        KeyCode::Char('f') if ctrl => {
            let mut s = state.write().unwrap();
            if let Err(e) = s.input.body_editor.format_json() {
                tracing::warn!(error = %e, "body is not valid JSON, leaving it unformatted");
            }
        }
        KeyCode::Char(c) if !ctrl => {
            let mut s = state.write().unwrap();
            s.input.body_editor.handle_paste_batch(c);
        }
        _ => {
            let mut s = state.write().unwrap();
            s.input.body_editor.handle_key_event(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{InputMode, KvTarget, RequestTab};

    fn shared() -> Arc<RwLock<AppState>> {
        let state = Arc::new(RwLock::new(AppState::default()));
        {
            let mut s = state.write().unwrap();
            s.ui.panel_focus = PanelFocus::Request;
            s.ui.request_tab = RequestTab::Headers;
        }
        state
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_add_entry_starts_editing_new_key() {
        let state = shared();
        handle_add_entry(state.clone());

        let s = state.read().unwrap();
        let last = s.request.draft.entries(KvTarget::Headers).len() - 1;
        assert_eq!(
            s.input.mode,
            InputMode::EditingEntry {
                target: KvTarget::Headers,
                index: last,
                field: KvField::Key,
            }
        );
        assert!(s.input.buffer.is_empty());
    }

    #[test]
    fn test_entry_edit_ignored_outside_request_panel() {
        let state = shared();
        state.write().unwrap().ui.panel_focus = PanelFocus::Sidebar;

        handle_entry_edit(state.clone(), KvField::Value);
        assert_eq!(state.read().unwrap().input.mode, InputMode::Normal);
    }

    #[test]
    fn test_line_input_edits_and_confirms() {
        let state = shared();
        handle_add_entry(state.clone());
        {
            let mut s = state.write().unwrap();
            crate::actions::apply_action(AppAction::AppendToBuffer("X-Trace".into()), &mut s);
        }
        handle_line_input(key(KeyCode::Backspace, KeyModifiers::NONE), state.clone());
        handle_line_input(key(KeyCode::Enter, KeyModifiers::NONE), state.clone());

        let s = state.read().unwrap();
        let entries = s.request.draft.entries(KvTarget::Headers);
        assert_eq!(entries.last().map(|e| e.key.as_str()), Some("X-Trac"));
        assert_eq!(s.input.mode, InputMode::Normal);
    }

    #[test]
    fn test_body_editor_save_and_cancel() {
        let state = shared();
        apply(state.clone(), AppAction::StartEditingBody);
        {
            let mut s = state.write().unwrap();
            s.input.body_editor.set_content("{\"a\":1}".to_string());
        }
        handle_body_input(key(KeyCode::Char('f'), KeyModifiers::CONTROL), state.clone());
        handle_body_input(key(KeyCode::Char('s'), KeyModifiers::CONTROL), state.clone());
        assert_eq!(state.read().unwrap().request.draft.body, "{\n  \"a\": 1\n}");

        apply(state.clone(), AppAction::StartEditingBody);
        handle_body_input(key(KeyCode::Char('l'), KeyModifiers::CONTROL), state.clone());
        handle_body_input(key(KeyCode::Esc, KeyModifiers::NONE), state.clone());

        let s = state.read().unwrap();
        assert_eq!(s.request.draft.body, "{\n  \"a\": 1\n}");
        assert_eq!(s.input.mode, InputMode::Normal);
    }
}
