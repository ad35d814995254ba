use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Instant;
use url::form_urlencoded;

use crate::actions::{apply_action, AppAction};
use crate::state::AppState;
use crate::types::{HttpMethod, KeyValueEntry, RequestDraft, ResponseBody, ResponseResult};

/// The request as it goes on the wire, derived from a draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl OutgoingRequest {
    pub fn from_draft(draft: &RequestDraft) -> Self {
        Self {
            method: draft.method,
            url: build_url(&draft.url, &draft.params),
            headers: effective_headers(&draft.headers),
            body: outgoing_body(draft.method, &draft.body),
        }
    }
}

/// Active header rows in order. A repeated key overwrites the earlier value
/// but keeps its position.
pub fn effective_headers(entries: &[KeyValueEntry]) -> Vec<(String, String)> {
    let mut headers: Vec<(String, String)> = Vec::new();
    for entry in entries.iter().filter(|e| e.is_active()) {
        match headers.iter_mut().find(|(key, _)| *key == entry.key) {
            Some((_, value)) => *value = entry.value.clone(),
            None => headers.push((entry.key.clone(), entry.value.clone())),
        }
    }
    headers
}

/// Append active params as a form-encoded query string. Duplicate keys are
/// all sent.
pub fn build_url(url: &str, params: &[KeyValueEntry]) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for entry in params.iter().filter(|e| e.is_active()) {
        query.append_pair(&entry.key, &entry.value);
        any = true;
    }

    if !any {
        return url.to_string();
    }

    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}{}", query.finish())
}

/// Body is only attached for POST/PUT/PATCH, and only when non-empty
pub fn outgoing_body(method: HttpMethod, body: &str) -> Option<String> {
    (method.supports_body() && !body.is_empty()).then(|| body.to_string())
}

/// Send one request. Every failure is folded into a status-0 result.
pub async fn execute_request(client: &reqwest::Client, request: &OutgoingRequest) -> ResponseResult {
    let mut builder = client.request(request.method.into(), request.url.as_str());
    for (key, value) in &request.headers {
        builder = builder.header(key.as_str(), value.as_str());
    }
    if let Some(body) = &request.body {
        builder = builder.body(body.clone());
    }

    tracing::info!(method = %request.method, url = %request.url, "sending request");

    let start = Instant::now();
    let response = match builder.send().await {
        Ok(response) => response,
        Err(e) => {
            let time = start.elapsed().as_millis() as u64;
            tracing::warn!(url = %request.url, error = %e, "request failed");
            return ResponseResult::transport_error(e.to_string(), time);
        }
    };
    // Timing stops once the response head arrives
    let time = start.elapsed().as_millis() as u64;

    let status = response.status().as_u16();
    // Canonical phrase for the code; empty for codes without one
    let status_text = response
        .status()
        .canonical_reason()
        .unwrap_or_default()
        .to_string();
    let headers = flatten_headers(response.headers());

    let is_json = headers
        .get("content-type")
        .is_some_and(|ct| ct.contains("application/json"));

    let text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            let time = start.elapsed().as_millis() as u64;
            tracing::warn!(url = %request.url, error = %e, "failed to read response body");
            return ResponseResult::transport_error(e.to_string(), time);
        }
    };

    let body = if is_json {
        serde_json::from_str(&text)
            .map(ResponseBody::Json)
            .unwrap_or(ResponseBody::Raw(text))
    } else {
        ResponseBody::Raw(text)
    };
    let size = crate::response::body_size(&body);

    tracing::info!(status, time, size, "response received");

    ResponseResult {
        status,
        status_text,
        time,
        headers,
        body,
        size,
    }
}

/// Lowercase names, repeated values joined with ", "
fn flatten_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, String> {
    let mut flat: HashMap<String, String> = HashMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        flat.entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }
    flat
}

/// Send a draft snapshot and record the outcome: the response becomes the
/// displayed one and a history entry is pushed. The caller marks the request
/// in flight.
pub async fn send_draft(
    state: &Arc<RwLock<AppState>>,
    client: &reqwest::Client,
    draft: RequestDraft,
) {
    let outgoing = OutgoingRequest::from_draft(&draft);
    let response = execute_request(client, &outgoing).await;

    let mut s = state.write().unwrap();
    apply_action(
        AppAction::FinishRequest {
            draft,
            url: outgoing.url,
            response,
            timestamp: Utc::now(),
        },
        &mut s,
    );
}

/// Executes a draft snapshot in the background
pub fn execute_request_background(
    state: Arc<RwLock<AppState>>,
    client: reqwest::Client,
    draft: RequestDraft,
) {
    tokio::spawn(async move {
        send_draft(&state, &client, draft).await;
    });
}
