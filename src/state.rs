use crate::collections::{CollectionStore, DEFAULT_COLLECTION_ID};
use crate::config::Config;
use crate::editor::BodyEditor;
use crate::history::History;
use crate::response::display_body;
use crate::types::{
    AuthField, AuthFormMode, AuthState, EntityId, InputMode, PanelFocus, RequestDraft,
    RequestTab, ResponseResult, ResponseTab, SidebarItem,
};

/// The draft being composed and the outcome of the last send
#[derive(Debug, Clone, Default)]
pub struct RequestState {
    pub draft: RequestDraft,
    pub response: Option<ResponseResult>,
    /// Gates the send key while a request is outstanding
    pub in_flight: bool,
}

/// Focus, selection and scroll positions
#[derive(Debug, Clone)]
pub struct UiState {
    pub panel_focus: PanelFocus,
    pub request_tab: RequestTab,
    pub response_tab: ResponseTab,

    /// Selected row in the params/headers table
    pub selected_entry: usize,
    /// Selected row in the flattened sidebar
    pub sidebar_selected: usize,
    pub collections_expanded: bool,
    pub history_expanded: bool,

    /// Scroll offset for the response panel (lines)
    pub response_scroll: usize,

    pub copied: bool,
    /// Bumped on every copy so a stale timer cannot clear a newer flash
    pub copied_generation: u64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            panel_focus: PanelFocus::Request,
            request_tab: RequestTab::Params,
            response_tab: ResponseTab::Body,
            selected_entry: 0,
            sidebar_selected: 0,
            collections_expanded: true,
            history_expanded: true,
            response_scroll: 0,
            copied: false,
            copied_generation: 0,
        }
    }
}

/// Contents of the login / sign-up modal
#[derive(Debug, Clone)]
pub struct AuthForm {
    pub mode: AuthFormMode,
    pub email: String,
    /// Never stored anywhere else and cleared when the modal closes
    pub password: String,
    pub active_field: AuthField,
}

impl Default for AuthForm {
    fn default() -> Self {
        Self {
            mode: AuthFormMode::Login,
            email: String::new(),
            password: String::new(),
            active_field: AuthField::Email,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InputState {
    pub mode: InputMode,
    /// Buffer for single-line inputs (URL, key/value cells, collection name)
    pub buffer: String,
    pub body_editor: BodyEditor,
    pub auth_form: AuthForm,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            mode: InputMode::Normal,
            buffer: String::new(),
            body_editor: BodyEditor::new(),
            auth_form: AuthForm::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub request: RequestState,
    pub collections: CollectionStore,
    pub history: History,
    pub auth: AuthState,
    pub ui: UiState,
    pub input: InputState,
    id_counter: EntityId,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            request: RequestState::default(),
            collections: CollectionStore::with_default(),
            history: History::new(),
            auth: AuthState::new(),
            ui: UiState::default(),
            input: InputState::default(),
            id_counter: DEFAULT_COLLECTION_ID + 1,
        }
    }
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let mut state = Self::default();
        if let Some(url) = &config.request.default_url {
            state.request.draft.url = url.clone();
        }
        state
    }

    /// Fresh id for a collection, saved request, history entry or user
    pub fn next_id(&mut self) -> EntityId {
        let id = self.id_counter;
        self.id_counter += 1;
        id
    }

    /// Flatten collections and history into the rows shown in the sidebar
    pub fn sidebar_items(&self) -> Vec<SidebarItem> {
        let mut items = vec![SidebarItem::CollectionsHeader {
            expanded: self.ui.collections_expanded,
        }];

        if self.ui.collections_expanded {
            for collection in self.collections.collections() {
                let expanded = self.collections.is_expanded(collection.id);
                items.push(SidebarItem::Collection {
                    id: collection.id,
                    name: collection.name.clone(),
                    count: collection.requests.len(),
                    expanded,
                });
                if expanded {
                    items.extend(collection.requests.iter().map(|req| SidebarItem::SavedRequest {
                        collection_id: collection.id,
                        request_id: req.id,
                        method: req.method,
                        name: req.name.clone(),
                    }));
                }
            }
        }

        items.push(SidebarItem::HistoryHeader {
            count: self.history.len(),
            expanded: self.ui.history_expanded,
        });
        if self.ui.history_expanded {
            items.extend(
                self.history
                    .entries()
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| SidebarItem::History {
                        index,
                        method: entry.method,
                        url: entry.url.clone(),
                        status: entry.response.status,
                        timestamp: entry.timestamp,
                    }),
            );
        }

        items
    }

    pub fn selected_sidebar_item(&self) -> Option<SidebarItem> {
        self.sidebar_items().into_iter().nth(self.ui.sidebar_selected)
    }

    /// Collection the selected sidebar row belongs to, falling back to the
    /// first collection
    pub fn target_collection(&self) -> Option<EntityId> {
        match self.selected_sidebar_item() {
            Some(SidebarItem::Collection { id, .. }) => Some(id),
            Some(SidebarItem::SavedRequest { collection_id, .. }) => Some(collection_id),
            _ => self.collections.collections().first().map(|c| c.id),
        }
    }

    /// Keep the sidebar selection inside the current list
    pub fn clamp_sidebar_selection(&mut self) {
        let len = self.sidebar_items().len();
        self.ui.sidebar_selected = self.ui.sidebar_selected.min(len.saturating_sub(1));
    }

    /// Keep the table selection inside the active params/headers list
    pub fn clamp_entry_selection(&mut self) {
        let len = self
            .ui
            .request_tab
            .kv_target()
            .map(|target| self.request.draft.entries(target).len())
            .unwrap_or(0);
        self.ui.selected_entry = self.ui.selected_entry.min(len.saturating_sub(1));
    }

    /// Lines in the active response tab
    pub fn response_line_count(&self) -> usize {
        let Some(response) = &self.request.response else {
            return 0;
        };
        match self.ui.response_tab {
            ResponseTab::Body => display_body(&response.body).lines().count(),
            ResponseTab::Headers => response.headers.len(),
        }
    }

    /// Keep the response scroll offset on the last line at most
    pub fn clamp_response_scroll(&mut self) {
        let max = self.response_line_count().saturating_sub(1);
        self.ui.response_scroll = self.ui.response_scroll.min(max);
    }
}
