use chrono::{DateTime, Utc};

use crate::state::AppState;
use crate::types::{
    AuthField, AuthFormMode, EntityId, HistoryEntry, InputMode, KeyValueEntry,
    KvField, KvTarget, PanelFocus, RequestDraft, RequestTab, ResponseResult, ResponseTab,
};

/// Represents all possible state-changing actions in the application
/// This pattern separates input handling from state mutations, making the code
/// more testable
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    // Navigation actions
    NavigateToPanel(PanelFocus),
    FocusNext,
    FocusPrev,
    SetRequestTab(RequestTab),
    ToggleResponseTab,
    SidebarUp,
    SidebarDown,
    EntryUp,
    EntryDown,

    // Scrolling actions
    ScrollUp,
    ScrollDown,

    // Sidebar sections
    ToggleCollectionsSection,
    ToggleHistorySection,

    // Draft editing
    CycleMethodForward,
    CycleMethodBackward,
    SetUrl(String),
    AddEntry(KvTarget),
    SetEntryKey {
        target: KvTarget,
        index: usize,
        key: String,
    },
    SetEntryValue {
        target: KvTarget,
        index: usize,
        value: String,
    },
    ToggleEntry {
        target: KvTarget,
        index: usize,
    },
    RemoveEntry {
        target: KvTarget,
        index: usize,
    },
    SetBody(String),

    // Collections
    CreateCollection(String),
    DeleteCollection(EntityId),
    SaveToCollection(EntityId),
    DeleteSavedRequest {
        collection_id: EntityId,
        request_id: EntityId,
    },
    ToggleCollectionExpanded(EntityId),
    LoadSavedRequest {
        collection_id: EntityId,
        request_id: EntityId,
    },

    // History
    LoadHistoryEntry(usize),

    // Request lifecycle
    StartRequest,
    FinishRequest {
        draft: RequestDraft,
        url: String,
        response: ResponseResult,
        timestamp: DateTime<Utc>,
    },

    // Copy feedback
    MarkCopied,
    ClearCopied(u64),

    // Text input
    StartEditingUrl,
    StartEditingEntry {
        target: KvTarget,
        index: usize,
        field: KvField,
    },
    StartEditingBody,
    StartNamingCollection,
    AppendToBuffer(String),
    BackspaceBuffer,
    DeleteWordBuffer,
    ConfirmEdit,
    CancelEdit,

    // Authentication
    OpenAuthModal,
    CloseAuthModal,
    ToggleAuthFormMode,
    SwitchAuthField,
    AppendToAuthField(String),
    BackspaceAuthField,
    SubmitAuth,
    RequestLogout,
    ConfirmLogout,
    CancelLogout,
}

/// Apply an action to the application state
/// All state mutations should go through this function to maintain consistency
pub fn apply_action(action: AppAction, state: &mut AppState) {
    match action {
        // Navigation
        AppAction::NavigateToPanel(panel) => {
            state.ui.panel_focus = panel;
        }
        AppAction::FocusNext => {
            state.ui.panel_focus = match state.ui.panel_focus {
                PanelFocus::Sidebar => PanelFocus::Request,
                PanelFocus::Request => PanelFocus::Response,
                PanelFocus::Response => PanelFocus::Sidebar,
            };
        }
        AppAction::FocusPrev => {
            state.ui.panel_focus = match state.ui.panel_focus {
                PanelFocus::Sidebar => PanelFocus::Response,
                PanelFocus::Request => PanelFocus::Sidebar,
                PanelFocus::Response => PanelFocus::Request,
            };
        }
        AppAction::SetRequestTab(tab) => {
            state.ui.request_tab = tab;
            state.ui.selected_entry = 0;
        }
        AppAction::ToggleResponseTab => {
            state.ui.response_tab = match state.ui.response_tab {
                ResponseTab::Body => ResponseTab::Headers,
                ResponseTab::Headers => ResponseTab::Body,
            };
            state.ui.response_scroll = 0;
        }
        AppAction::SidebarUp => {
            state.ui.sidebar_selected = state.ui.sidebar_selected.saturating_sub(1);
        }
        AppAction::SidebarDown => {
            state.ui.sidebar_selected = state.ui.sidebar_selected.saturating_add(1);
            state.clamp_sidebar_selection();
        }
        AppAction::EntryUp => {
            state.ui.selected_entry = state.ui.selected_entry.saturating_sub(1);
        }
        AppAction::EntryDown => {
            state.ui.selected_entry = state.ui.selected_entry.saturating_add(1);
            state.clamp_entry_selection();
        }

        // Scrolling
        AppAction::ScrollUp => {
            state.ui.response_scroll = state.ui.response_scroll.saturating_sub(5);
        }
        AppAction::ScrollDown => {
            state.ui.response_scroll = state.ui.response_scroll.saturating_add(5);
            state.clamp_response_scroll();
        }

        AppAction::ToggleCollectionsSection => {
            state.ui.collections_expanded = !state.ui.collections_expanded;
            state.clamp_sidebar_selection();
        }
        AppAction::ToggleHistorySection => {
            state.ui.history_expanded = !state.ui.history_expanded;
            state.clamp_sidebar_selection();
        }

        // Draft
        AppAction::CycleMethodForward => {
            state.request.draft.method = state.request.draft.method.next();
        }
        AppAction::CycleMethodBackward => {
            state.request.draft.method = state.request.draft.method.prev();
        }
        AppAction::SetUrl(url) => {
            state.request.draft.url = url;
        }
        AppAction::AddEntry(target) => {
            let entries = state.request.draft.entries_mut(target);
            entries.push(KeyValueEntry::blank());
            state.ui.selected_entry = entries.len() - 1;
        }
        AppAction::SetEntryKey { target, index, key } => {
            if let Some(entry) = state.request.draft.entries_mut(target).get_mut(index) {
                entry.key = key;
            }
        }
        AppAction::SetEntryValue {
            target,
            index,
            value,
        } => {
            if let Some(entry) = state.request.draft.entries_mut(target).get_mut(index) {
                entry.value = value;
            }
        }
        AppAction::ToggleEntry { target, index } => {
            if let Some(entry) = state.request.draft.entries_mut(target).get_mut(index) {
                entry.enabled = !entry.enabled;
            }
        }
        AppAction::RemoveEntry { target, index } => {
            let entries = state.request.draft.entries_mut(target);
            if index < entries.len() {
                entries.remove(index);
            }
            state.clamp_entry_selection();
        }
        AppAction::SetBody(body) => {
            state.request.draft.body = body;
        }

        // Collections
        AppAction::CreateCollection(name) => {
            let id = state.next_id();
            state.collections.create(&name, id);
        }
        AppAction::DeleteCollection(id) => {
            state.collections.delete(id);
            state.clamp_sidebar_selection();
        }
        AppAction::SaveToCollection(collection_id) => {
            let id = state.next_id();
            let draft = &state.request.draft;
            state.collections.save_request(collection_id, draft, id);
        }
        AppAction::DeleteSavedRequest {
            collection_id,
            request_id,
        } => {
            state.collections.delete_request(collection_id, request_id);
            state.clamp_sidebar_selection();
        }
        AppAction::ToggleCollectionExpanded(id) => {
            state.collections.toggle_expanded(id);
            state.clamp_sidebar_selection();
        }
        AppAction::LoadSavedRequest {
            collection_id,
            request_id,
        } => {
            if let Some(saved) = state.collections.find_request(collection_id, request_id) {
                state.request.draft.load_from(saved);
                state.ui.selected_entry = 0;
            }
        }

        AppAction::LoadHistoryEntry(index) => {
            if let Some(entry) = state.history.get(index) {
                state.request.draft.load_from(entry);
                state.ui.selected_entry = 0;
            }
        }

        // Request lifecycle
        AppAction::StartRequest => {
            state.request.in_flight = true;
        }
        AppAction::FinishRequest {
            draft,
            url,
            response,
            timestamp,
        } => {
            let id = state.next_id();
            state.history.push(HistoryEntry {
                id,
                url,
                method: draft.method,
                timestamp,
                headers: draft.headers,
                params: draft.params,
                body: draft.body,
                response: response.clone(),
            });
            state.request.response = Some(response);
            state.request.in_flight = false;
            state.ui.response_scroll = 0;
        }

        // Copy feedback
        AppAction::MarkCopied => {
            state.ui.copied = true;
            state.ui.copied_generation += 1;
        }
        AppAction::ClearCopied(generation) => {
            if state.ui.copied_generation == generation {
                state.ui.copied = false;
            }
        }

        // Text input
        AppAction::StartEditingUrl => {
            state.input.buffer = state.request.draft.url.clone();
            state.input.mode = InputMode::EditingUrl;
        }
        AppAction::StartEditingEntry {
            target,
            index,
            field,
        } => {
            if let Some(entry) = state.request.draft.entries(target).get(index) {
                state.input.buffer = match field {
                    KvField::Key => entry.key.clone(),
                    KvField::Value => entry.value.clone(),
                };
                state.input.mode = InputMode::EditingEntry {
                    target,
                    index,
                    field,
                };
            }
        }
        AppAction::StartEditingBody => {
            let body = state.request.draft.body.clone();
            state.input.body_editor.set_content(body);
            state.input.mode = InputMode::EditingBody;
        }
        AppAction::StartNamingCollection => {
            state.input.buffer.clear();
            state.input.mode = InputMode::NamingCollection;
        }
        AppAction::AppendToBuffer(text) => {
            state.input.buffer.push_str(&text);
        }
        AppAction::BackspaceBuffer => {
            state.input.buffer.pop();
        }
        AppAction::DeleteWordBuffer => {
            delete_word(&mut state.input.buffer);
        }
        AppAction::ConfirmEdit => {
            let text = std::mem::take(&mut state.input.buffer);
            let mode = std::mem::replace(&mut state.input.mode, InputMode::Normal);
            match mode {
                InputMode::EditingUrl => apply_action(AppAction::SetUrl(text), state),
                InputMode::EditingEntry {
                    target,
                    index,
                    field: KvField::Key,
                } => apply_action(AppAction::SetEntryKey { target, index, key: text }, state),
                InputMode::EditingEntry {
                    target,
                    index,
                    field: KvField::Value,
                } => apply_action(
                    AppAction::SetEntryValue {
                        target,
                        index,
                        value: text,
                    },
                    state,
                ),
                InputMode::EditingBody => {
                    let body = state.input.body_editor.content().to_string();
                    state.input.body_editor.clear();
                    apply_action(AppAction::SetBody(body), state);
                }
                InputMode::NamingCollection => {
                    apply_action(AppAction::CreateCollection(text), state)
                }
                InputMode::Normal | InputMode::Authenticating | InputMode::ConfirmLogout => {
                    state.input.mode = mode;
                }
            }
        }
        AppAction::CancelEdit => {
            state.input.buffer.clear();
            state.input.body_editor.clear();
            state.input.mode = InputMode::Normal;
        }

        // Authentication
        AppAction::OpenAuthModal => {
            state.input.auth_form = Default::default();
            state.input.mode = InputMode::Authenticating;
        }
        AppAction::CloseAuthModal => {
            state.input.auth_form.password.clear();
            state.input.mode = InputMode::Normal;
        }
        AppAction::ToggleAuthFormMode => {
            state.input.auth_form.mode = match state.input.auth_form.mode {
                AuthFormMode::Login => AuthFormMode::SignUp,
                AuthFormMode::SignUp => AuthFormMode::Login,
            };
        }
        AppAction::SwitchAuthField => {
            state.input.auth_form.active_field = match state.input.auth_form.active_field {
                AuthField::Email => AuthField::Password,
                AuthField::Password => AuthField::Email,
            };
        }
        AppAction::AppendToAuthField(text) => {
            let form = &mut state.input.auth_form;
            match form.active_field {
                AuthField::Email => form.email.push_str(&text),
                AuthField::Password => form.password.push_str(&text),
            }
        }
        AppAction::BackspaceAuthField => {
            let form = &mut state.input.auth_form;
            match form.active_field {
                AuthField::Email => form.email.pop(),
                AuthField::Password => form.password.pop(),
            };
        }
        AppAction::SubmitAuth => {
            let form = std::mem::take(&mut state.input.auth_form);
            let id = state.next_id();
            tracing::info!(mode = form.mode.title(), "user signed in");
            state.auth.login(form.email, id);
            state.input.mode = InputMode::Normal;
        }
        AppAction::RequestLogout => {
            if state.auth.is_authenticated() {
                state.input.mode = InputMode::ConfirmLogout;
            }
        }
        AppAction::ConfirmLogout => {
            if let Some(user) = &state.auth.user {
                tracing::info!(user_id = user.id, "user signed out");
            }
            state.auth.logout();
            state.input.mode = InputMode::Normal;
        }
        AppAction::CancelLogout => {
            state.input.mode = InputMode::Normal;
        }
    }
}

/// Helper function to delete the last word from a string (Ctrl+W behavior)
fn delete_word(s: &mut String) {
    // Trim trailing whitespace first
    *s = s.trim_end().to_string();

    // Find last whitespace and truncate there
    if let Some(pos) = s.rfind(char::is_whitespace) {
        s.truncate(pos);
    } else {
        // No whitespace found, clear entire string
        s.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::DEFAULT_COLLECTION_ID;
    use crate::history::MAX_HISTORY_ENTRIES;
    use crate::types::{HttpMethod, SidebarItem};

    fn create_test_state() -> AppState {
        AppState::default()
    }

    fn finish(state: &mut AppState, url: &str, status: u16) {
        let mut draft = state.request.draft.clone();
        draft.url = url.to_string();
        let mut response = ResponseResult::transport_error("x", 1);
        response.status = status;
        apply_action(
            AppAction::FinishRequest {
                draft,
                url: url.to_string(),
                response,
                timestamp: Utc::now(),
            },
            state,
        );
    }

    #[test]
    fn test_focus_cycle() {
        let mut state = create_test_state();
        assert_eq!(state.ui.panel_focus, PanelFocus::Request);

        apply_action(AppAction::FocusNext, &mut state);
        assert_eq!(state.ui.panel_focus, PanelFocus::Response);
        apply_action(AppAction::FocusNext, &mut state);
        assert_eq!(state.ui.panel_focus, PanelFocus::Sidebar);
        apply_action(AppAction::FocusPrev, &mut state);
        assert_eq!(state.ui.panel_focus, PanelFocus::Response);

        apply_action(AppAction::NavigateToPanel(PanelFocus::Request), &mut state);
        assert_eq!(state.ui.panel_focus, PanelFocus::Request);
    }

    #[test]
    fn test_method_cycle() {
        let mut state = create_test_state();
        apply_action(AppAction::CycleMethodForward, &mut state);
        assert_eq!(state.request.draft.method, HttpMethod::Post);
        apply_action(AppAction::CycleMethodBackward, &mut state);
        apply_action(AppAction::CycleMethodBackward, &mut state);
        assert_eq!(state.request.draft.method, HttpMethod::Patch);
    }

    #[test]
    fn test_entry_lifecycle() {
        let mut state = create_test_state();
        let target = KvTarget::Headers;

        apply_action(AppAction::AddEntry(target), &mut state);
        assert_eq!(state.request.draft.headers.len(), 2);
        assert_eq!(state.ui.selected_entry, 1);

        apply_action(
            AppAction::SetEntryKey {
                target,
                index: 1,
                key: "X-Id".to_string(),
            },
            &mut state,
        );
        apply_action(
            AppAction::SetEntryValue {
                target,
                index: 1,
                value: "7".to_string(),
            },
            &mut state,
        );
        assert_eq!(state.request.draft.headers[1], KeyValueEntry::new("X-Id", "7"));

        apply_action(AppAction::ToggleEntry { target, index: 1 }, &mut state);
        assert!(!state.request.draft.headers[1].enabled);

        apply_action(AppAction::RemoveEntry { target, index: 1 }, &mut state);
        assert_eq!(state.request.draft.headers.len(), 1);
        assert_eq!(state.ui.selected_entry, 0);

        // Out of range is a no-op
        apply_action(AppAction::RemoveEntry { target, index: 9 }, &mut state);
        apply_action(AppAction::ToggleEntry { target, index: 9 }, &mut state);
        assert_eq!(state.request.draft.headers.len(), 1);
    }

    #[test]
    fn test_finish_request_records_history() {
        let mut state = create_test_state();
        apply_action(AppAction::StartRequest, &mut state);
        assert!(state.request.in_flight);

        finish(&mut state, "https://a.com/x?q=1", 200);

        assert!(!state.request.in_flight);
        assert_eq!(state.request.response.as_ref().map(|r| r.status), Some(200));
        assert_eq!(state.history.len(), 1);
        assert_eq!(state.history.get(0).unwrap().url, "https://a.com/x?q=1");
    }

    #[test]
    fn test_history_cap_after_many_sends() {
        let mut state = create_test_state();
        for i in 0..=MAX_HISTORY_ENTRIES {
            finish(&mut state, &format!("https://a.com/{i}"), 200);
        }
        assert_eq!(state.history.len(), MAX_HISTORY_ENTRIES);
        assert_eq!(
            state.history.get(0).unwrap().url,
            format!("https://a.com/{MAX_HISTORY_ENTRIES}")
        );
        assert!(state
            .history
            .entries()
            .iter()
            .all(|e| e.url != "https://a.com/0"));
    }

    #[test]
    fn test_last_finish_wins() {
        let mut state = create_test_state();
        finish(&mut state, "https://a.com/slow", 500);
        finish(&mut state, "https://a.com/fast", 201);
        assert_eq!(state.request.response.as_ref().map(|r| r.status), Some(201));
        assert_eq!(state.history.len(), 2);
    }

    fn stored_draft() -> RequestDraft {
        RequestDraft {
            url: "https://a.com/items".to_string(),
            method: HttpMethod::Put,
            headers: vec![
                KeyValueEntry::new("Authorization", "Bearer abc"),
                KeyValueEntry::new("X-Off", "1").disabled(),
            ],
            params: vec![KeyValueEntry::new("q", "1")],
            body: "{\"stored\":true}".to_string(),
        }
    }

    fn scramble_draft(state: &mut AppState) {
        state.request.draft = RequestDraft {
            url: "https://other".to_string(),
            method: HttpMethod::Get,
            headers: vec![KeyValueEntry::new("Accept", "text/plain")],
            params: vec![],
            body: "current body".to_string(),
        };
    }

    #[test]
    fn test_load_history_entry() {
        let mut state = create_test_state();
        state.request.draft = stored_draft();
        finish(&mut state, "https://a.com/items", 200);

        scramble_draft(&mut state);
        apply_action(AppAction::LoadHistoryEntry(0), &mut state);

        assert_eq!(state.request.draft, stored_draft());
    }

    #[test]
    fn test_load_history_entry_with_empty_body_keeps_current_body() {
        let mut state = create_test_state();
        state.request.draft = RequestDraft {
            body: String::new(),
            ..stored_draft()
        };
        finish(&mut state, "https://a.com/items", 200);

        scramble_draft(&mut state);
        apply_action(AppAction::LoadHistoryEntry(0), &mut state);

        let draft = &state.request.draft;
        assert_eq!(draft.url, "https://a.com/items");
        assert_eq!(draft.method, HttpMethod::Put);
        assert_eq!(draft.headers, stored_draft().headers);
        assert_eq!(draft.params, stored_draft().params);
        assert_eq!(draft.body, "current body");
    }

    #[test]
    fn test_save_and_load_saved_request() {
        let mut state = create_test_state();
        state.request.draft = RequestDraft {
            url: "https://example.com/widgets/7".to_string(),
            ..stored_draft()
        };
        apply_action(AppAction::SaveToCollection(DEFAULT_COLLECTION_ID), &mut state);

        let collection = state.collections.get(DEFAULT_COLLECTION_ID).unwrap();
        assert_eq!(collection.requests.len(), 1);
        let request_id = collection.requests[0].id;
        assert_eq!(collection.requests[0].name, "7");

        scramble_draft(&mut state);
        apply_action(
            AppAction::LoadSavedRequest {
                collection_id: DEFAULT_COLLECTION_ID,
                request_id,
            },
            &mut state,
        );

        let draft = &state.request.draft;
        assert_eq!(draft.url, "https://example.com/widgets/7");
        assert_eq!(draft.method, HttpMethod::Put);
        assert_eq!(draft.headers, stored_draft().headers);
        assert_eq!(draft.params, stored_draft().params);
        assert_eq!(draft.body, "{\"stored\":true}");
        // Loading does not remove it
        assert_eq!(
            state.collections.get(DEFAULT_COLLECTION_ID).unwrap().requests.len(),
            1
        );
    }

    #[test]
    fn test_load_saved_request_with_empty_body_keeps_current_body() {
        let mut state = create_test_state();
        state.request.draft = RequestDraft {
            body: String::new(),
            ..stored_draft()
        };
        apply_action(AppAction::SaveToCollection(DEFAULT_COLLECTION_ID), &mut state);
        let request_id = state.collections.get(DEFAULT_COLLECTION_ID).unwrap().requests[0].id;

        scramble_draft(&mut state);
        apply_action(
            AppAction::LoadSavedRequest {
                collection_id: DEFAULT_COLLECTION_ID,
                request_id,
            },
            &mut state,
        );

        assert_eq!(state.request.draft.headers, stored_draft().headers);
        assert_eq!(state.request.draft.body, "current body");
    }

    #[test]
    fn test_collection_actions() {
        let mut state = create_test_state();
        apply_action(AppAction::CreateCollection("  ".to_string()), &mut state);
        assert_eq!(state.collections.collections().len(), 1);

        apply_action(AppAction::CreateCollection("Users".to_string()), &mut state);
        assert_eq!(state.collections.collections().len(), 2);
        let id = state.collections.collections()[1].id;
        assert_ne!(id, DEFAULT_COLLECTION_ID);

        apply_action(AppAction::SaveToCollection(id), &mut state);
        apply_action(AppAction::DeleteCollection(id), &mut state);
        assert_eq!(state.collections.collections().len(), 1);
        assert!(state.collections.get(id).is_none());
    }

    #[test]
    fn test_sidebar_navigation_clamps() {
        let mut state = create_test_state();
        for _ in 0..10 {
            apply_action(AppAction::SidebarDown, &mut state);
        }
        // Collections header, default collection, history header
        assert_eq!(state.ui.sidebar_selected, 2);
        assert!(matches!(
            state.selected_sidebar_item(),
            Some(SidebarItem::HistoryHeader { .. })
        ));

        apply_action(AppAction::ToggleCollectionsSection, &mut state);
        assert_eq!(state.ui.sidebar_selected, 1);
    }

    #[test]
    fn test_edit_url_confirm_and_cancel() {
        let mut state = create_test_state();
        apply_action(AppAction::StartEditingUrl, &mut state);
        assert_eq!(state.input.mode, InputMode::EditingUrl);
        assert_eq!(state.input.buffer, state.request.draft.url);

        apply_action(AppAction::DeleteWordBuffer, &mut state);
        apply_action(AppAction::AppendToBuffer("http://localhost".to_string()), &mut state);
        apply_action(AppAction::ConfirmEdit, &mut state);
        assert_eq!(state.request.draft.url, "http://localhost");
        assert_eq!(state.input.mode, InputMode::Normal);

        apply_action(AppAction::StartEditingUrl, &mut state);
        apply_action(AppAction::BackspaceBuffer, &mut state);
        apply_action(AppAction::CancelEdit, &mut state);
        assert_eq!(state.request.draft.url, "http://localhost");
    }

    #[test]
    fn test_edit_entry_value() {
        let mut state = create_test_state();
        apply_action(
            AppAction::StartEditingEntry {
                target: KvTarget::Headers,
                index: 0,
                field: KvField::Value,
            },
            &mut state,
        );
        assert_eq!(state.input.buffer, "application/json");

        apply_action(AppAction::BackspaceBuffer, &mut state);
        apply_action(AppAction::BackspaceBuffer, &mut state);
        apply_action(AppAction::BackspaceBuffer, &mut state);
        apply_action(AppAction::BackspaceBuffer, &mut state);
        apply_action(AppAction::AppendToBuffer("xml".to_string()), &mut state);
        apply_action(AppAction::ConfirmEdit, &mut state);
        assert_eq!(state.request.draft.headers[0].value, "application/xml");
    }

    #[test]
    fn test_edit_body_through_editor() {
        let mut state = create_test_state();
        apply_action(AppAction::StartEditingBody, &mut state);
        assert_eq!(state.input.mode, InputMode::EditingBody);
        state.input.body_editor.clear();
        state.input.body_editor.insert_str("not json");
        apply_action(AppAction::ConfirmEdit, &mut state);
        assert_eq!(state.request.draft.body, "not json");
    }

    #[test]
    fn test_naming_collection() {
        let mut state = create_test_state();
        apply_action(AppAction::StartNamingCollection, &mut state);
        apply_action(AppAction::AppendToBuffer("Orders".to_string()), &mut state);
        apply_action(AppAction::ConfirmEdit, &mut state);
        assert_eq!(state.collections.collections()[1].name, "Orders");
        assert_eq!(state.input.mode, InputMode::Normal);
    }

    #[test]
    fn test_auth_flow() {
        let mut state = create_test_state();
        apply_action(AppAction::OpenAuthModal, &mut state);
        assert_eq!(state.input.mode, InputMode::Authenticating);

        apply_action(AppAction::ToggleAuthFormMode, &mut state);
        assert_eq!(state.input.auth_form.mode, AuthFormMode::SignUp);

        apply_action(AppAction::AppendToAuthField("jane@x.io".to_string()), &mut state);
        apply_action(AppAction::SwitchAuthField, &mut state);
        apply_action(AppAction::AppendToAuthField("secret".to_string()), &mut state);
        apply_action(AppAction::BackspaceAuthField, &mut state);
        assert_eq!(state.input.auth_form.password, "secre");

        apply_action(AppAction::SubmitAuth, &mut state);
        assert_eq!(state.input.mode, InputMode::Normal);
        assert_eq!(
            state.auth.user.as_ref().map(|u| u.display_name()),
            Some("jane")
        );
        assert!(state.input.auth_form.password.is_empty());

        apply_action(AppAction::RequestLogout, &mut state);
        assert_eq!(state.input.mode, InputMode::ConfirmLogout);
        apply_action(AppAction::CancelLogout, &mut state);
        assert!(state.auth.is_authenticated());

        apply_action(AppAction::RequestLogout, &mut state);
        apply_action(AppAction::ConfirmLogout, &mut state);
        assert!(!state.auth.is_authenticated());
    }

    #[test]
    fn test_empty_auth_submission_succeeds() {
        let mut state = create_test_state();
        apply_action(AppAction::OpenAuthModal, &mut state);
        apply_action(AppAction::SubmitAuth, &mut state);
        assert!(state.auth.is_authenticated());
    }

    #[test]
    fn test_copied_flag_generation() {
        let mut state = create_test_state();
        apply_action(AppAction::MarkCopied, &mut state);
        let first = state.ui.copied_generation;
        apply_action(AppAction::MarkCopied, &mut state);

        apply_action(AppAction::ClearCopied(first), &mut state);
        assert!(state.ui.copied);

        apply_action(AppAction::ClearCopied(state.ui.copied_generation), &mut state);
        assert!(!state.ui.copied);
    }

    fn long_response(lines: usize) -> ResponseResult {
        let body = (0..lines).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        ResponseResult {
            status: 200,
            status_text: "OK".to_string(),
            time: 1,
            headers: [("content-type".to_string(), "text/plain".to_string())].into(),
            body: crate::types::ResponseBody::Raw(body),
            size: 0,
        }
    }

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let mut state = create_test_state();
        apply_action(AppAction::ScrollDown, &mut state);
        assert_eq!(state.ui.response_scroll, 0);

        state.request.response = Some(long_response(12));
        for _ in 0..20_000 {
            apply_action(AppAction::ScrollDown, &mut state);
        }
        assert_eq!(state.ui.response_scroll, 11);

        apply_action(AppAction::ToggleResponseTab, &mut state);
        apply_action(AppAction::ScrollDown, &mut state);
        assert_eq!(state.ui.response_scroll, 0);
    }

    #[test]
    fn test_response_tab_and_scroll() {
        let mut state = create_test_state();
        state.request.response = Some(long_response(30));
        apply_action(AppAction::ScrollDown, &mut state);
        apply_action(AppAction::ScrollDown, &mut state);
        assert_eq!(state.ui.response_scroll, 10);
        apply_action(AppAction::ScrollUp, &mut state);
        assert_eq!(state.ui.response_scroll, 5);

        apply_action(AppAction::ToggleResponseTab, &mut state);
        assert_eq!(state.ui.response_tab, ResponseTab::Headers);
        assert_eq!(state.ui.response_scroll, 0);
    }

    #[test]
    fn test_delete_word() {
        let mut s = "hello world foo".to_string();
        delete_word(&mut s);
        assert_eq!(s, "hello world");

        delete_word(&mut s);
        assert_eq!(s, "hello");

        delete_word(&mut s);
        assert_eq!(s, "");
    }
}
