//! Helper functions for event handling
//!
//! This module contains utility functions used across event handlers:
//! - State locking helpers (apply actions)
//! - Paste batching

use crate::actions::{apply_action, AppAction};
use crate::state::AppState;
use crate::types::{KvTarget, PanelFocus};
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use std::sync::{Arc, RwLock};

/// Apply a single action to state
pub fn apply(state: Arc<RwLock<AppState>>, action: AppAction) {
    let mut s = state.write().unwrap();
    apply_action(action, &mut s);
}

/// Apply multiple actions to state
pub fn apply_many(state: Arc<RwLock<AppState>>, actions: Vec<AppAction>) {
    let mut s = state.write().unwrap();
    for action in actions {
        apply_action(action, &mut s);
    }
}

/// Focused panel and, when the request panel shows Params or Headers, the
/// list the row keys act on
pub fn focus_snapshot(state: &Arc<RwLock<AppState>>) -> (PanelFocus, Option<KvTarget>) {
    let s = state.read().unwrap();
    (s.ui.panel_focus, s.ui.request_tab.kv_target())
}

/// Collect a batch of characters for paste support
///
/// When a character is typed, this function checks for any immediately available
/// character events and batches them together. This enables fast paste operations
/// in terminals.
///
/// Returns a tuple of (batched_string, character_count)
pub fn collect_paste_batch(initial_char: char) -> (String, usize) {
    let mut chars = vec![initial_char];

    // Drain any immediately available character events
    while let Ok(true) = event::poll(std::time::Duration::from_millis(0)) {
        if let Ok(Event::Key(next_key)) = event::read() {
            match next_key.code {
                KeyCode::Char(next_c) if !next_key.modifiers.contains(KeyModifiers::CONTROL) => {
                    chars.push(next_c);
                }
                _ => {
                    // Non-character or control key, stop batching
                    break;
                }
            }
        } else {
            break;
        }
    }

    let count = chars.len();
    let batch_str: String = chars.into_iter().collect();
    (batch_str, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RequestTab;

    #[test]
    fn test_apply_many_runs_in_order() {
        let state = Arc::new(RwLock::new(AppState::default()));
        apply_many(
            state.clone(),
            vec![
                AppAction::NavigateToPanel(PanelFocus::Request),
                AppAction::SetRequestTab(RequestTab::Headers),
                AppAction::FocusNext,
            ],
        );

        let (focus, target) = focus_snapshot(&state);
        assert_eq!(focus, PanelFocus::Response);
        assert_eq!(target, Some(KvTarget::Headers));
    }
}
