//! Request execution handlers
//!
//! This module handles:
//! - Sending the current draft (Enter / `s`)
//! - Ignoring the send key while a request is outstanding

use crate::actions::{apply_action, AppAction};
use crate::request::execute_request_background;
use crate::state::AppState;
use std::sync::{Arc, RwLock};

/// Send the draft unless a request is already in flight.
/// Returns true when a request was started.
pub fn handle_send(state: Arc<RwLock<AppState>>, client: &reqwest::Client) -> bool {
    let mut s = state.write().unwrap();
    if s.request.in_flight {
        tracing::debug!("request already in progress, ignoring send");
        return false;
    }

    // The draft is captured with the in-flight flag so later edits do not leak in
    apply_action(AppAction::StartRequest, &mut s);
    let draft = s.request.draft.clone();
    drop(s); // Release lock before spawning task

    execute_request_background(state, client.clone(), draft);
    true
}
