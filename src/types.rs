use serde_json::Value;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// How long a notification stays visible before the app clears it
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

/// Status text reported when no HTTP response was received
pub const NETWORK_ERROR_STATUS_TEXT: &str = "Network Error";

/// Static hint attached to every transport-level error body
pub const TRANSPORT_ERROR_HINT: &str =
    "This could be due to CORS restrictions, network issues, or an invalid URL.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// Cycle order matches the method dropdown of the request form
    pub fn next(&self) -> Method {
        match self {
            Method::Get => Method::Post,
            Method::Post => Method::Put,
            Method::Put => Method::Patch,
            Method::Patch => Method::Delete,
            Method::Delete => Method::Get,
        }
    }

    /// Only non-GET requests may carry a body
    pub fn supports_body(&self) -> bool {
        !matches!(self, Method::Get)
    }
}

/// One (name, value) row of the Headers tab
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderEntry {
    pub name: String,
    pub value: String,
}

impl HeaderEntry {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_owned(),
            value: value.to_owned(),
        }
    }

    /// Rows with an empty name or value are dropped before sending
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.value.is_empty()
    }
}

/// Authentication variant attached to an outgoing request.
///
/// Basic is selectable in the form but never applied to the wire request;
/// the conventional Base64 encoding is intentionally not assumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Auth {
    None,
    Bearer { token: String },
    Basic { username: String, password: String },
}

/// Form-level auth selection; the concrete `Auth` value is assembled from the
/// form fields when a request is snapshotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    None,
    Bearer,
    Basic,
}

impl AuthMode {
    pub fn label(&self) -> &'static str {
        match self {
            AuthMode::None => "No Auth",
            AuthMode::Bearer => "Bearer Token",
            AuthMode::Basic => "Basic Auth",
        }
    }

    pub fn next(&self) -> AuthMode {
        match self {
            AuthMode::None => AuthMode::Bearer,
            AuthMode::Bearer => AuthMode::Basic,
            AuthMode::Basic => AuthMode::None,
        }
    }
}

/// The fully assembled description of one outgoing HTTP call
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub method: Method,
    pub url: String,
    pub headers: Vec<HeaderEntry>,
    pub body: Option<String>,
    pub auth: Auth,
}

/// Response payload after content-type sniffing
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    /// Branch on the response content type. A payload that claims to be JSON
    /// but does not parse keeps its raw text; the real status code is not
    /// discarded for a decode problem.
    pub fn from_payload(text: &str, is_json: bool) -> Self {
        if is_json {
            match serde_json::from_str::<Value>(text) {
                Ok(value) => ResponseBody::Json(value),
                Err(_) => ResponseBody::Text(text.to_owned()),
            }
        } else {
            ResponseBody::Text(text.to_owned())
        }
    }

    /// UTF-8 byte length of the raw text, or of the compact JSON
    /// serialization for parsed bodies
    pub fn size_bytes(&self) -> usize {
        match self {
            ResponseBody::Text(text) => text.len(),
            ResponseBody::Json(value) => {
                serde_json::to_string(value).map(|s| s.len()).unwrap_or(0)
            }
        }
    }

    /// Pretty form shown in the Body tab and used for copy/save
    pub fn formatted(&self) -> String {
        match self {
            ResponseBody::Text(text) => text.clone(),
            ResponseBody::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
        }
    }

    /// Raw tab content: text bodies verbatim, structured bodies pretty-printed
    pub fn raw(&self) -> String {
        self.formatted()
    }
}

/// The normalized outcome of one execution attempt, covering both real
/// responses and transport failures
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseResult {
    /// HTTP status code; 0 means no response was received
    pub status: u16,
    pub status_text: String,
    /// Response headers, duplicates resolved last-write-wins
    pub headers: HashMap<String, String>,
    pub body: ResponseBody,
    /// Wall-clock dispatch-to-completion time, success or failure
    pub elapsed_ms: u64,
    /// Byte length of the body serialization; 0 on transport failure
    pub size_bytes: usize,
}

impl ResponseResult {
    /// Uniform shape for anything that prevented receipt of a response
    pub fn transport_error(message: &str, elapsed_ms: u64) -> Self {
        let message = if message.is_empty() {
            "Unknown error occurred"
        } else {
            message
        };
        Self {
            status: 0,
            status_text: NETWORK_ERROR_STATUS_TEXT.to_owned(),
            headers: HashMap::new(),
            body: ResponseBody::Json(serde_json::json!({
                "error": "Failed to fetch",
                "message": message,
                "details": TRANSPORT_ERROR_HINT,
            })),
            elapsed_ms,
            size_bytes: 0,
        }
    }

    pub fn is_transport_error(&self) -> bool {
        self.status == 0
    }

    /// Underlying failure description for transport errors
    pub fn transport_message(&self) -> Option<&str> {
        match &self.body {
            ResponseBody::Json(value) if self.status == 0 => {
                value.get("message").and_then(Value::as_str)
            }
            _ => None,
        }
    }
}

/// Visual class of the status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBucket {
    Success,
    Warning,
    Error,
}

pub fn status_bucket(status: u16) -> StatusBucket {
    match status {
        200..=299 => StatusBucket::Success,
        0 | 400..=599 => StatusBucket::Error,
        _ => StatusBucket::Warning,
    }
}

/// A saved request shown in the sidebar (collections or history)
#[derive(Debug, Clone, PartialEq)]
pub struct SavedRequest {
    pub name: String,
    pub method: Method,
    pub url: String,
    /// Relative age shown for history entries only
    pub age_label: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub struct Collection {
    pub name: String,
    pub requests: Vec<SavedRequest>,
    pub expanded: bool,
}

/// Flattened sidebar line, built from collections/history after filtering
#[derive(Debug, Clone)]
pub enum SidebarItem {
    CollectionHeader {
        index: usize,
        name: String,
        count: usize,
        expanded: bool,
    },
    Request(SavedRequest),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    Sidebar,
    Request,
    Response,
}

impl PanelFocus {
    pub fn next(&self) -> PanelFocus {
        match self {
            PanelFocus::Sidebar => PanelFocus::Request,
            PanelFocus::Request => PanelFocus::Response,
            PanelFocus::Response => PanelFocus::Sidebar,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarTab {
    Collections,
    History,
}

impl SidebarTab {
    pub fn other(&self) -> SidebarTab {
        match self {
            SidebarTab::Collections => SidebarTab::History,
            SidebarTab::History => SidebarTab::Collections,
        }
    }
}

/// Tabs of the request form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTab {
    Headers,
    Body,
    Auth,
    Params,
}

impl FormTab {
    pub const ALL: [FormTab; 4] = [FormTab::Headers, FormTab::Body, FormTab::Auth, FormTab::Params];

    pub fn next(&self) -> FormTab {
        match self {
            FormTab::Headers => FormTab::Body,
            FormTab::Body => FormTab::Auth,
            FormTab::Auth => FormTab::Params,
            FormTab::Params => FormTab::Headers,
        }
    }

    pub fn prev(&self) -> FormTab {
        match self {
            FormTab::Headers => FormTab::Params,
            FormTab::Body => FormTab::Headers,
            FormTab::Auth => FormTab::Body,
            FormTab::Params => FormTab::Auth,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormTab::Headers => "Headers",
            FormTab::Body => "Body",
            FormTab::Auth => "Auth",
            FormTab::Params => "Params",
        }
    }
}

/// Tabs of the response viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseTab {
    Body,
    Headers,
    Raw,
}

impl ResponseTab {
    pub const ALL: [ResponseTab; 3] = [ResponseTab::Body, ResponseTab::Headers, ResponseTab::Raw];

    pub fn next(&self) -> ResponseTab {
        match self {
            ResponseTab::Body => ResponseTab::Headers,
            ResponseTab::Headers => ResponseTab::Raw,
            ResponseTab::Raw => ResponseTab::Body,
        }
    }

    pub fn prev(&self) -> ResponseTab {
        match self {
            ResponseTab::Body => ResponseTab::Raw,
            ResponseTab::Headers => ResponseTab::Body,
            ResponseTab::Raw => ResponseTab::Headers,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResponseTab::Body => "Response Body",
            ResponseTab::Headers => "Headers",
            ResponseTab::Raw => "Raw",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    EditingUrl,
    EditingHeaderName(usize),
    EditingHeaderValue(usize),
    EditingBody,
    EditingToken,
    EditingUsername,
    EditingPassword,
    Searching,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Destructive,
}

/// Fire-and-forget toast shown in the corner of the screen
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub posted_at: Instant,
}

impl Notification {
    pub fn info(title: &str, description: &str) -> Self {
        Self {
            title: title.to_owned(),
            description: description.to_owned(),
            severity: Severity::Info,
            posted_at: Instant::now(),
        }
    }

    pub fn destructive(title: &str, description: &str) -> Self {
        Self {
            title: title.to_owned(),
            description: description.to_owned(),
            severity: Severity::Destructive,
            posted_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.posted_at.elapsed() > NOTIFICATION_TTL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_bucket_mapping() {
        assert_eq!(status_bucket(200), StatusBucket::Success);
        assert_eq!(status_bucket(201), StatusBucket::Success);
        assert_eq!(status_bucket(301), StatusBucket::Warning);
        assert_eq!(status_bucket(404), StatusBucket::Error);
        assert_eq!(status_bucket(500), StatusBucket::Error);
        assert_eq!(status_bucket(0), StatusBucket::Error);
        assert_eq!(status_bucket(100), StatusBucket::Warning);
    }

    #[test]
    fn test_body_from_json_payload() {
        let body = ResponseBody::from_payload(r#"{"id":1}"#, true);
        assert_eq!(body, ResponseBody::Json(json!({"id": 1})));
    }

    #[test]
    fn test_body_from_text_payload() {
        let body = ResponseBody::from_payload("hello world", false);
        assert_eq!(body, ResponseBody::Text("hello world".to_owned()));
    }

    #[test]
    fn test_unparseable_json_keeps_raw_text() {
        // Decode failure must not be promoted to a transport error
        let body = ResponseBody::from_payload("not json {", true);
        assert_eq!(body, ResponseBody::Text("not json {".to_owned()));
    }

    #[test]
    fn test_size_bytes_matches_compact_serialization() {
        let body = ResponseBody::Json(json!({"a": 1}));
        assert_eq!(body.size_bytes(), r#"{"a":1}"#.len());

        let text = ResponseBody::Text("héllo".to_owned());
        assert_eq!(text.size_bytes(), "héllo".len()); // UTF-8 bytes, not chars
    }

    #[test]
    fn test_formatted_json_uses_two_space_indent() {
        let body = ResponseBody::Json(json!({"a": 1}));
        assert_eq!(body.formatted(), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_transport_error_shape() {
        let result = ResponseResult::transport_error("connection refused", 42);
        assert_eq!(result.status, 0);
        assert_eq!(result.status_text, NETWORK_ERROR_STATUS_TEXT);
        assert!(result.headers.is_empty());
        assert_eq!(result.size_bytes, 0);
        assert_eq!(result.elapsed_ms, 42);
        assert!(result.is_transport_error());
        assert_eq!(result.transport_message(), Some("connection refused"));

        match &result.body {
            ResponseBody::Json(value) => {
                assert_eq!(value["error"], "Failed to fetch");
                assert_eq!(value["details"], TRANSPORT_ERROR_HINT);
            }
            ResponseBody::Text(_) => panic!("transport error body should be structured"),
        }
    }

    #[test]
    fn test_transport_error_empty_message_falls_back() {
        let result = ResponseResult::transport_error("", 0);
        assert_eq!(result.transport_message(), Some("Unknown error occurred"));
    }

    #[test]
    fn test_method_cycle_covers_all_methods() {
        let mut seen = vec![Method::Get];
        let mut current = Method::Get;
        for _ in 0..4 {
            current = current.next();
            seen.push(current);
        }
        assert_eq!(current.next(), Method::Get);
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn test_only_get_rejects_body() {
        assert!(!Method::Get.supports_body());
        assert!(Method::Post.supports_body());
        assert!(Method::Delete.supports_body());
    }
}
