//! Navigation handlers
//!
//! This module handles:
//! - Moving through the sidebar and the params/headers rows (j/k)
//! - Activating sidebar rows (load a request, fold a section or collection)
//! - Deleting the selected row, collection or saved request

use super::helpers::{apply, focus_snapshot};
use crate::actions::AppAction;
use crate::state::AppState;
use crate::types::{PanelFocus, SidebarItem};
use std::sync::{Arc, RwLock};

/// Move selection down in the focused panel
pub fn handle_down(state: Arc<RwLock<AppState>>) {
    match focus_snapshot(&state) {
        (PanelFocus::Sidebar, _) => apply(state, AppAction::SidebarDown),
        (PanelFocus::Request, Some(_)) => apply(state, AppAction::EntryDown),
        (PanelFocus::Response, _) => apply(state, AppAction::ScrollDown),
        (PanelFocus::Request, None) => {}
    }
}

/// Move selection up in the focused panel
pub fn handle_up(state: Arc<RwLock<AppState>>) {
    match focus_snapshot(&state) {
        (PanelFocus::Sidebar, _) => apply(state, AppAction::SidebarUp),
        (PanelFocus::Request, Some(_)) => apply(state, AppAction::EntryUp),
        (PanelFocus::Response, _) => apply(state, AppAction::ScrollUp),
        (PanelFocus::Request, None) => {}
    }
}

/// Enter on a sidebar row
pub fn handle_sidebar_enter(state: Arc<RwLock<AppState>>) {
    let item = state.read().unwrap().selected_sidebar_item();
    let action = match item {
        Some(SidebarItem::CollectionsHeader { .. }) => AppAction::ToggleCollectionsSection,
        Some(SidebarItem::HistoryHeader { .. }) => AppAction::ToggleHistorySection,
        Some(SidebarItem::Collection { id, .. }) => AppAction::ToggleCollectionExpanded(id),
        Some(SidebarItem::SavedRequest {
            collection_id,
            request_id,
            ..
        }) => AppAction::LoadSavedRequest {
            collection_id,
            request_id,
        },
        Some(SidebarItem::History { index, .. }) => AppAction::LoadHistoryEntry(index),
        None => return,
    };
    tracing::debug!(?action, "sidebar enter");
    apply(state, action);
}

/// `d`: delete the selected row in the request panel, or the selected
/// collection / saved request in the sidebar
pub fn handle_delete(state: Arc<RwLock<AppState>>) {
    let action = {
        let s = state.read().unwrap();
        match (s.ui.panel_focus, s.ui.request_tab.kv_target()) {
            (PanelFocus::Request, Some(target)) => Some(AppAction::RemoveEntry {
                target,
                index: s.ui.selected_entry,
            }),
            (PanelFocus::Sidebar, _) => match s.selected_sidebar_item() {
                Some(SidebarItem::Collection { id, .. }) => Some(AppAction::DeleteCollection(id)),
                Some(SidebarItem::SavedRequest {
                    collection_id,
                    request_id,
                    ..
                }) => Some(AppAction::DeleteSavedRequest {
                    collection_id,
                    request_id,
                }),
                _ => None,
            },
            _ => None,
        }
    };

    if let Some(action) = action {
        apply(state, action);
    }
}
