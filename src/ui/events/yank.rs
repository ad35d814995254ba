//! Yank (copy) handlers
//!
//! Copies the displayed response body to the system clipboard and flashes
//! a "Copied" marker in the response panel title.

use super::helpers::apply;
use crate::actions::AppAction;
use crate::error::Result;
use crate::response::copy_text;
use crate::state::AppState;
use arboard::Clipboard;
use std::sync::{Arc, RwLock};
use std::time::Duration;

/// Copy the response body (pretty JSON or raw text) to the clipboard
pub fn handle_yank_response(state: Arc<RwLock<AppState>>, flash_ms: u64) {
    let text = {
        let state_read = state.read().unwrap();
        match &state_read.request.response {
            Some(response) => copy_text(response),
            None => {
                tracing::debug!("no response available to copy");
                return;
            }
        }
    };

    if let Err(e) = set_clipboard(text) {
        tracing::warn!(error = %e, "failed to copy response");
        return;
    }

    let generation = {
        let mut s = state.write().unwrap();
        crate::actions::apply_action(AppAction::MarkCopied, &mut s);
        s.ui.copied_generation
    };

    // Spawn task to clear flash after delay
    let state_clone = state.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(flash_ms)).await;
        apply(state_clone, AppAction::ClearCopied(generation));
    });
}

fn set_clipboard(text: String) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
