use std::collections::HashSet;

use crate::types::{Collection, EntityId, RequestDraft, SavedRequest};

pub const DEFAULT_COLLECTION_ID: EntityId = 1;
pub const DEFAULT_COLLECTION_NAME: &str = "My Collection";

/// In-memory collections plus their expanded/collapsed state in the sidebar
#[derive(Debug, Clone, Default)]
pub struct CollectionStore {
    collections: Vec<Collection>,
    expanded: HashSet<EntityId>,
}

impl CollectionStore {
    /// Store seeded with the default, expanded collection
    pub fn with_default() -> Self {
        let mut store = Self::default();
        store.collections.push(Collection {
            id: DEFAULT_COLLECTION_ID,
            name: DEFAULT_COLLECTION_NAME.to_string(),
            requests: Vec::new(),
        });
        store.expanded.insert(DEFAULT_COLLECTION_ID);
        store
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn get(&self, id: EntityId) -> Option<&Collection> {
        self.collections.iter().find(|c| c.id == id)
    }

    pub fn is_expanded(&self, id: EntityId) -> bool {
        self.expanded.contains(&id)
    }

    /// Append a new expanded collection. Returns `None` for a blank name.
    pub fn create(&mut self, name: &str, id: EntityId) -> Option<EntityId> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        self.collections.push(Collection {
            id,
            name: name.to_string(),
            requests: Vec::new(),
        });
        self.expanded.insert(id);
        tracing::debug!(id, name, "collection created");
        Some(id)
    }

    /// Remove a collection together with every request saved in it
    pub fn delete(&mut self, id: EntityId) -> bool {
        let before = self.collections.len();
        self.collections.retain(|c| c.id != id);
        self.expanded.remove(&id);

        let removed = self.collections.len() != before;
        if removed {
            tracing::debug!(id, "collection deleted");
        }
        removed
    }

    /// Snapshot the draft into the given collection
    pub fn save_request(
        &mut self,
        collection_id: EntityId,
        draft: &RequestDraft,
        id: EntityId,
    ) -> Option<EntityId> {
        let collection = self.collections.iter_mut().find(|c| c.id == collection_id)?;
        let name = derive_request_name(&draft.url);

        tracing::debug!(collection_id, id, name = %name, "request saved");
        collection.requests.push(SavedRequest {
            id,
            url: draft.url.clone(),
            method: draft.method,
            headers: draft.headers.clone(),
            params: draft.params.clone(),
            body: draft.body.clone(),
            name,
        });
        Some(id)
    }

    pub fn delete_request(&mut self, collection_id: EntityId, request_id: EntityId) -> bool {
        let Some(collection) = self.collections.iter_mut().find(|c| c.id == collection_id) else {
            return false;
        };

        let before = collection.requests.len();
        collection.requests.retain(|r| r.id != request_id);
        collection.requests.len() != before
    }

    pub fn find_request(&self, collection_id: EntityId, request_id: EntityId) -> Option<&SavedRequest> {
        self.get(collection_id)?
            .requests
            .iter()
            .find(|r| r.id == request_id)
    }

    pub fn toggle_expanded(&mut self, id: EntityId) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }
}

/// Name for a saved request: the text after the last `/` of the URL, or
/// `"Request"` when that is empty
pub fn derive_request_name(url: &str) -> String {
    url.rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or("Request")
        .to_string()
}
