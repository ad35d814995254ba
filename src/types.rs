use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{self, Display};

/// Identifier for collections, saved requests and history entries
pub type EntityId = u64;

pub const DEFAULT_URL: &str = "https://jsonplaceholder.typicode.com/posts/1";
pub const DEFAULT_BODY: &str = "{\n  \"title\": \"Test\",\n  \"body\": \"Hello World\",\n  \"userId\": 1\n}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 5] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }

    /// Only POST/PUT/PATCH ever carry a request body
    pub fn supports_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Patch => reqwest::Method::PATCH,
        }
    }
}

/// A header or query parameter row. Disabled rows are kept for re-enabling
/// but never reach the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValueEntry {
    pub key: String,
    pub value: String,
    pub enabled: bool,
}

impl KeyValueEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            enabled: true,
        }
    }

    pub fn blank() -> Self {
        Self::new("", "")
    }

    #[cfg(test)]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Whether this row takes part in request construction
    pub fn is_active(&self) -> bool {
        self.enabled && !self.key.is_empty()
    }
}

/// The live, editable request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDraft {
    pub url: String,
    pub method: HttpMethod,
    pub headers: Vec<KeyValueEntry>,
    pub params: Vec<KeyValueEntry>,
    pub body: String,
}

impl Default for RequestDraft {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            method: HttpMethod::Get,
            headers: vec![KeyValueEntry::new("Content-Type", "application/json")],
            params: vec![KeyValueEntry::blank()],
            body: DEFAULT_BODY.to_string(),
        }
    }
}

impl RequestDraft {
    pub fn entries(&self, target: KvTarget) -> &Vec<KeyValueEntry> {
        match target {
            KvTarget::Params => &self.params,
            KvTarget::Headers => &self.headers,
        }
    }

    pub fn entries_mut(&mut self, target: KvTarget) -> &mut Vec<KeyValueEntry> {
        match target {
            KvTarget::Params => &mut self.params,
            KvTarget::Headers => &mut self.headers,
        }
    }

    /// Replace the draft with a saved or historical request. An empty body on
    /// the source leaves the current body in place.
    pub fn load_from(&mut self, source: &impl DraftSource) {
        self.url = source.url().to_string();
        self.method = source.method();
        self.headers = source.headers().to_vec();
        self.params = source.params().to_vec();
        if !source.body().is_empty() {
            self.body = source.body().to_string();
        }
    }

    /// Number of rows with a key, shown next to the tab label
    pub fn keyed_count(&self, target: KvTarget) -> usize {
        self.entries(target)
            .iter()
            .filter(|e| !e.key.is_empty())
            .count()
    }
}

/// Response payload, either parsed JSON or the raw text
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Json(serde_json::Value),
    Raw(String),
}

impl ResponseBody {
    pub fn to_value(&self) -> serde_json::Value {
        match self {
            ResponseBody::Json(value) => value.clone(),
            ResponseBody::Raw(text) => serde_json::Value::String(text.clone()),
        }
    }

    /// The `error` field of a transport failure body
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ResponseBody::Json(value) => value.get("error").and_then(|v| v.as_str()),
            ResponseBody::Raw(_) => None,
        }
    }
}

/// Represents the outcome of one send
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseResult {
    /// HTTP status code, 0 for transport failures
    pub status: u16,

    pub status_text: String,

    /// Whole milliseconds from dispatch until the transport call resolved
    pub time: u64,

    /// Response headers as reported by the transport
    pub headers: HashMap<String, String>,

    pub body: ResponseBody,

    /// Length of the JSON-serialized body, see `response::body_size`
    pub size: usize,
}

impl ResponseResult {
    /// Creates the synthetic result used for transport failures
    pub fn transport_error(message: impl Into<String>, time: u64) -> Self {
        let body = ResponseBody::Json(serde_json::json!({ "error": message.into() }));
        let size = crate::response::body_size(&body);
        Self {
            status: 0,
            status_text: "Error".to_string(),
            time,
            headers: HashMap::new(),
            body,
            size,
        }
    }

    pub fn is_transport_error(&self) -> bool {
        self.status == 0
    }
}

/// Immutable snapshot of one execution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub id: EntityId,
    pub url: String,
    pub method: HttpMethod,
    pub timestamp: DateTime<Utc>,
    pub headers: Vec<KeyValueEntry>,
    pub params: Vec<KeyValueEntry>,
    pub body: String,
    pub response: ResponseResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedRequest {
    pub id: EntityId,
    pub url: String,
    pub method: HttpMethod,
    pub headers: Vec<KeyValueEntry>,
    pub params: Vec<KeyValueEntry>,
    pub body: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collection {
    pub id: EntityId,
    pub name: String,
    pub requests: Vec<SavedRequest>,
}

/// Anything that can repopulate the draft
pub trait DraftSource {
    fn url(&self) -> &str;
    fn method(&self) -> HttpMethod;
    fn headers(&self) -> &[KeyValueEntry];
    fn params(&self) -> &[KeyValueEntry];
    fn body(&self) -> &str;
}

impl DraftSource for SavedRequest {
    fn url(&self) -> &str {
        &self.url
    }
    fn method(&self) -> HttpMethod {
        self.method
    }
    fn headers(&self) -> &[KeyValueEntry] {
        &self.headers
    }
    fn params(&self) -> &[KeyValueEntry] {
        &self.params
    }
    fn body(&self) -> &str {
        &self.body
    }
}

impl DraftSource for HistoryEntry {
    fn url(&self) -> &str {
        &self.url
    }
    fn method(&self) -> HttpMethod {
        self.method
    }
    fn headers(&self) -> &[KeyValueEntry] {
        &self.headers
    }
    fn params(&self) -> &[KeyValueEntry] {
        &self.params
    }
    fn body(&self) -> &str {
        &self.body
    }
}

/// Display-only login. Nothing here is checked or sent anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub email: String,
    pub id: EntityId,
}

impl AuthUser {
    /// Local part of the email, used as the display name
    pub fn display_name(&self) -> &str {
        self.email.split('@').next().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<AuthUser>,
}

impl AuthState {
    pub fn new() -> Self {
        Self { user: None }
    }

    pub fn login(&mut self, email: String, id: EntityId) {
        self.user = Some(AuthUser { email, id });
    }

    pub fn logout(&mut self) {
        self.user = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFormMode {
    Login,
    SignUp,
}

impl AuthFormMode {
    pub fn title(&self) -> &'static str {
        match self {
            AuthFormMode::Login => "Login",
            AuthFormMode::SignUp => "Sign Up",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Email,
    Password,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    EditingUrl,
    EditingEntry { target: KvTarget, index: usize, field: KvField },
    EditingBody,
    NamingCollection,
    Authenticating,
    ConfirmLogout,
}

/// Which key-value list an action refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KvTarget {
    Params,
    Headers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KvField {
    Key,
    Value,
}

/// Tracks which main panel has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    Sidebar,
    Request,
    Response,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestTab {
    Params,
    Headers,
    Body,
}

impl RequestTab {
    pub fn kv_target(&self) -> Option<KvTarget> {
        match self {
            RequestTab::Params => Some(KvTarget::Params),
            RequestTab::Headers => Some(KvTarget::Headers),
            RequestTab::Body => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseTab {
    Body,
    Headers,
}

/// One row of the flattened sidebar
#[derive(Debug, Clone, PartialEq)]
pub enum SidebarItem {
    CollectionsHeader {
        expanded: bool,
    },
    Collection {
        id: EntityId,
        name: String,
        count: usize,
        expanded: bool,
    },
    SavedRequest {
        collection_id: EntityId,
        request_id: EntityId,
        method: HttpMethod,
        name: String,
    },
    HistoryHeader {
        count: usize,
        expanded: bool,
    },
    History {
        index: usize,
        method: HttpMethod,
        url: String,
        status: u16,
        timestamp: DateTime<Utc>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_cycle_wraps() {
        assert_eq!(HttpMethod::Get.next(), HttpMethod::Post);
        assert_eq!(HttpMethod::Patch.next(), HttpMethod::Get);
        assert_eq!(HttpMethod::Get.prev(), HttpMethod::Patch);
    }

    #[test]
    fn test_supports_body() {
        assert!(HttpMethod::Post.supports_body());
        assert!(HttpMethod::Put.supports_body());
        assert!(HttpMethod::Patch.supports_body());
        assert!(!HttpMethod::Get.supports_body());
        assert!(!HttpMethod::Delete.supports_body());
    }

    #[test]
    fn test_entry_is_active() {
        assert!(KeyValueEntry::new("a", "1").is_active());
        assert!(!KeyValueEntry::new("a", "1").disabled().is_active());
        assert!(!KeyValueEntry::new("", "1").is_active());
    }

    #[test]
    fn test_default_draft_is_seeded() {
        let draft = RequestDraft::default();
        assert_eq!(draft.method, HttpMethod::Get);
        assert_eq!(draft.url, DEFAULT_URL);
        assert_eq!(draft.headers.len(), 1);
        assert_eq!(draft.headers[0].key, "Content-Type");
        assert_eq!(draft.params, vec![KeyValueEntry::blank()]);
        assert_eq!(draft.keyed_count(KvTarget::Params), 0);
        assert_eq!(draft.keyed_count(KvTarget::Headers), 1);
    }

    #[test]
    fn test_transport_error_shape() {
        let result = ResponseResult::transport_error("connection refused", 12);
        assert_eq!(result.status, 0);
        assert_eq!(result.status_text, "Error");
        assert!(result.headers.is_empty());
        assert_eq!(result.body.error_message(), Some("connection refused"));
        assert_eq!(result.time, 12);
        assert!(result.is_transport_error());
    }

    #[test]
    fn test_display_name_is_local_part() {
        let user = AuthUser {
            email: "jane@example.com".to_string(),
            id: 1,
        };
        assert_eq!(user.display_name(), "jane");

        let user = AuthUser {
            email: String::new(),
            id: 2,
        };
        assert_eq!(user.display_name(), "");
    }

    #[test]
    fn test_load_from_keeps_body_when_source_body_empty() {
        let saved = SavedRequest {
            id: 3,
            url: "https://example.com/users".to_string(),
            method: HttpMethod::Delete,
            headers: vec![],
            params: vec![KeyValueEntry::new("page", "2")],
            body: String::new(),
            name: "users".to_string(),
        };

        let mut draft = RequestDraft::default();
        draft.load_from(&saved);

        assert_eq!(draft.url, saved.url);
        assert_eq!(draft.method, HttpMethod::Delete);
        assert!(draft.headers.is_empty());
        assert_eq!(draft.params, saved.params);
        assert_eq!(draft.body, DEFAULT_BODY);
    }

    #[test]
    fn test_method_serializes_uppercase() {
        let json = serde_json::to_string(&HttpMethod::Delete).unwrap();
        assert_eq!(json, "\"DELETE\"");
    }
}
