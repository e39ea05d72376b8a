//! The request executor: builds the outgoing request from a `RequestSpec`
//! snapshot, performs exactly one attempt, and normalizes every outcome
//! (including transport failures) into a `ResponseResult`. It never returns
//! an error, never retries, and never logs.

use crate::state::AppState;
use crate::types::{Auth, Method, Notification, RequestSpec, ResponseBody, ResponseResult};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Instant;

/// Spawns the background task for one request. Maintains the
/// single-in-flight flag and posts the completion/failure notification;
/// callers must check `request.in_flight` before invoking.
pub fn send_request_background(state: Arc<RwLock<AppState>>, spec: RequestSpec) {
    {
        let mut s = state.write().unwrap();
        s.request.in_flight = true;
        s.request.current_response = None;
    }

    tokio::spawn(async move {
        let result = execute(&spec).await;
        let notification = completion_notification(&result);

        let mut s = state.write().unwrap();
        s.request.in_flight = false;
        s.request.current_response = Some(result);
        s.ui.response_scroll = 0;
        s.ui.headers_scroll = 0;
        s.notify(notification);
    });
}

fn completion_notification(result: &ResponseResult) -> Notification {
    if result.is_transport_error() {
        Notification::destructive(
            "Request failed",
            result.transport_message().unwrap_or("Unknown error"),
        )
    } else {
        Notification::info(
            "Request completed",
            &format!(
                "{} {} • {}ms",
                result.status, result.status_text, result.elapsed_ms
            ),
        )
    }
}

impl RequestSpec {
    /// Outgoing header set: empty rows dropped, bearer token synthesized
    /// into `Authorization` over any user-supplied value.
    pub fn outgoing_headers(&self) -> Vec<(String, String)> {
        let mut headers: Vec<(String, String)> = self
            .headers
            .iter()
            .filter(|h| h.is_complete())
            .map(|h| (h.name.clone(), h.value.clone()))
            .collect();

        if let Auth::Bearer { token } = &self.auth {
            if !token.is_empty() {
                headers.retain(|(name, _)| !name.eq_ignore_ascii_case("authorization"));
                headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
            }
        }

        headers
    }

    /// GET requests never carry a body regardless of form state
    pub fn outgoing_body(&self) -> Option<&str> {
        if !self.method.supports_body() {
            return None;
        }
        self.body.as_deref().filter(|b| !b.is_empty())
    }
}

/// One attempt, any outcome captured in the returned value
pub async fn execute(spec: &RequestSpec) -> ResponseResult {
    let started = Instant::now();

    let client = reqwest::Client::new();
    let mut builder = client.request(to_reqwest_method(spec.method), spec.url.as_str());

    for (name, value) in spec.outgoing_headers() {
        builder = builder.header(name, value);
    }

    if let Some(body) = spec.outgoing_body() {
        builder = builder.body(body.to_owned());
    }

    // Builder errors (bad URL, invalid header bytes) surface here as well
    match builder.send().await {
        Ok(response) => {
            let status = response.status().as_u16();
            let status_text = response
                .status()
                .canonical_reason()
                .unwrap_or("")
                .to_owned();

            let is_json = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(|v| v.contains("application/json"))
                .unwrap_or(false);

            // Duplicate header names resolve last-write-wins
            let headers: HashMap<String, String> = response
                .headers()
                .iter()
                .map(|(name, value)| {
                    (
                        name.as_str().to_owned(),
                        value.to_str().unwrap_or("").to_owned(),
                    )
                })
                .collect();

            match response.text().await {
                Ok(text) => {
                    let body = ResponseBody::from_payload(&text, is_json);
                    let size_bytes = body.size_bytes();
                    ResponseResult {
                        status,
                        status_text,
                        headers,
                        body,
                        elapsed_ms: elapsed_ms(started),
                        size_bytes,
                    }
                }
                Err(e) => ResponseResult::transport_error(&e.to_string(), elapsed_ms(started)),
            }
        }
        Err(e) => ResponseResult::transport_error(&e.to_string(), elapsed_ms(started)),
    }
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HeaderEntry;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::sync::oneshot;

    fn spec(method: Method, url: &str) -> RequestSpec {
        RequestSpec {
            method,
            url: url.to_owned(),
            headers: Vec::new(),
            body: None,
            auth: Auth::None,
        }
    }

    // ------------------------------------------------------------------
    // Pure helpers
    // ------------------------------------------------------------------

    #[test]
    fn test_empty_header_rows_are_dropped() {
        let mut s = spec(Method::Get, "http://localhost/");
        s.headers = vec![
            HeaderEntry::new("Content-Type", "application/json"),
            HeaderEntry::new("", "orphan-value"),
            HeaderEntry::new("X-Orphan", ""),
        ];

        assert_eq!(
            s.outgoing_headers(),
            vec![("Content-Type".to_owned(), "application/json".to_owned())]
        );
    }

    #[test]
    fn test_bearer_token_overrides_user_authorization() {
        let mut s = spec(Method::Get, "http://localhost/");
        s.headers = vec![HeaderEntry::new("authorization", "Bearer stale")];
        s.auth = Auth::Bearer {
            token: "fresh".to_owned(),
        };

        let headers = s.outgoing_headers();
        assert_eq!(
            headers,
            vec![("Authorization".to_owned(), "Bearer fresh".to_owned())]
        );
    }

    #[test]
    fn test_empty_bearer_token_synthesizes_nothing() {
        let mut s = spec(Method::Get, "http://localhost/");
        s.auth = Auth::Bearer {
            token: String::new(),
        };
        assert!(s.outgoing_headers().is_empty());
    }

    #[test]
    fn test_basic_auth_is_not_applied() {
        let mut s = spec(Method::Get, "http://localhost/");
        s.auth = Auth::Basic {
            username: "user".to_owned(),
            password: "pass".to_owned(),
        };
        assert!(s.outgoing_headers().is_empty());
    }

    #[test]
    fn test_get_never_carries_a_body() {
        let mut s = spec(Method::Get, "http://localhost/");
        s.body = Some("{\"a\":1}".to_owned());
        assert_eq!(s.outgoing_body(), None);

        s.method = Method::Post;
        assert_eq!(s.outgoing_body(), Some("{\"a\":1}"));
    }

    #[test]
    fn test_empty_body_is_not_attached() {
        let mut s = spec(Method::Post, "http://localhost/");
        s.body = Some(String::new());
        assert_eq!(s.outgoing_body(), None);
    }

    #[test]
    fn test_completion_notifications() {
        use crate::types::Severity;

        let ok = ResponseResult {
            status: 200,
            status_text: "OK".to_owned(),
            headers: HashMap::new(),
            body: ResponseBody::Text("done".to_owned()),
            elapsed_ms: 12,
            size_bytes: 4,
        };
        let notification = completion_notification(&ok);
        assert_eq!(notification.title, "Request completed");
        assert_eq!(notification.description, "200 OK • 12ms");
        assert_eq!(notification.severity, Severity::Info);

        let failed = ResponseResult::transport_error("connection refused", 7);
        let notification = completion_notification(&failed);
        assert_eq!(notification.title, "Request failed");
        assert_eq!(notification.description, "connection refused");
        assert_eq!(notification.severity, Severity::Destructive);
    }

    // ------------------------------------------------------------------
    // Round trips against a local fixture server
    // ------------------------------------------------------------------

    fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack.windows(needle.len()).position(|w| w == needle)
    }

    /// Read one HTTP request: headers, then content-length bytes of body
    async fn read_http_request(stream: &mut TcpStream) -> Vec<u8> {
        let mut data = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = match stream.read(&mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(n) => n,
            };
            data.extend_from_slice(&buf[..n]);

            if let Some(header_end) = find_subsequence(&data, b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&data[..header_end]).to_lowercase();
                let content_length = head
                    .lines()
                    .find_map(|l| l.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if data.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        data
    }

    fn http_response(status_line: &str, content_type: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: {content_type}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    /// Serve one canned response; the captured request bytes come back on
    /// the channel
    async fn spawn_fixture(response: String) -> (String, oneshot::Receiver<Vec<u8>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            if let Ok((mut stream, _)) = listener.accept().await {
                let request = read_http_request(&mut stream).await;
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
                let _ = tx.send(request);
            }
        });

        (format!("http://{addr}"), rx)
    }

    /// Serve one response that echoes the received request body as JSON
    async fn spawn_echo_fixture() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            if let Ok((mut stream, _)) = listener.accept().await {
                let request = read_http_request(&mut stream).await;
                let body_start = find_subsequence(&request, b"\r\n\r\n")
                    .map(|i| i + 4)
                    .unwrap_or(request.len());
                let body = request[body_start..].to_vec();
                let head = format!(
                    "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n",
                    body.len()
                );
                let _ = stream.write_all(head.as_bytes()).await;
                let _ = stream.write_all(&body).await;
                let _ = stream.shutdown().await;
            }
        });

        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_get_json_round_trip() {
        let (url, _rx) =
            spawn_fixture(http_response("200 OK", "application/json", r#"{"id":1}"#)).await;

        let result = execute(&spec(Method::Get, &url)).await;

        assert_eq!(result.status, 200);
        assert_eq!(result.status_text, "OK");
        assert_eq!(result.body, ResponseBody::Json(json!({"id": 1})));
        assert_eq!(result.size_bytes, r#"{"id":1}"#.len());
        assert_eq!(
            result.headers.get("content-type").map(String::as_str),
            Some("application/json")
        );
    }

    #[tokio::test]
    async fn test_post_body_echoes_back() {
        let url = spawn_echo_fixture().await;

        let mut s = spec(Method::Post, &url);
        s.body = Some(r#"{"a":1}"#.to_owned());
        let result = execute(&s).await;

        assert_eq!(result.status, 200);
        assert_eq!(result.body, ResponseBody::Json(json!({"a": 1})));
    }

    #[tokio::test]
    async fn test_plain_text_body_stays_raw() {
        let (url, _rx) = spawn_fixture(http_response("200 OK", "text/plain", "hello")).await;

        let result = execute(&spec(Method::Get, &url)).await;

        assert_eq!(result.body, ResponseBody::Text("hello".to_owned()));
        assert_eq!(result.size_bytes, 5);
    }

    #[tokio::test]
    async fn test_http_error_status_is_not_a_failure() {
        let (url, _rx) = spawn_fixture(http_response(
            "404 Not Found",
            "application/json",
            r#"{"missing":true}"#,
        ))
        .await;

        let result = execute(&spec(Method::Get, &url)).await;

        assert_eq!(result.status, 404);
        assert_eq!(result.status_text, "Not Found");
        assert!(!result.is_transport_error());
        assert_eq!(result.body, ResponseBody::Json(json!({"missing": true})));
    }

    #[tokio::test]
    async fn test_unparseable_json_keeps_real_status() {
        let (url, _rx) =
            spawn_fixture(http_response("200 OK", "application/json", "oops {")).await;

        let result = execute(&spec(Method::Get, &url)).await;

        assert_eq!(result.status, 200);
        assert_eq!(result.body, ResponseBody::Text("oops {".to_owned()));
    }

    #[tokio::test]
    async fn test_unreachable_host_becomes_transport_error() {
        // Bind then drop to get a port nothing is listening on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = execute(&spec(Method::Get, &format!("http://{addr}/"))).await;

        assert_eq!(result.status, 0);
        assert_eq!(result.status_text, "Network Error");
        assert!(result.headers.is_empty());
        assert_eq!(result.size_bytes, 0);
        assert!(result.transport_message().is_some());
        match &result.body {
            ResponseBody::Json(value) => assert!(value.get("error").is_some()),
            ResponseBody::Text(_) => panic!("transport error body should be structured"),
        }
    }

    #[tokio::test]
    async fn test_malformed_url_becomes_transport_error() {
        let result = execute(&spec(Method::Get, "not a url")).await;
        assert_eq!(result.status, 0);
        assert!(result.transport_message().is_some());
    }

    #[tokio::test]
    async fn test_get_sends_no_body_on_the_wire() {
        let (url, rx) = spawn_fixture(http_response("200 OK", "text/plain", "ok")).await;

        let mut s = spec(Method::Get, &url);
        s.body = Some("should never leave the form".to_owned());
        execute(&s).await;

        let request = rx.await.unwrap();
        let body_start = find_subsequence(&request, b"\r\n\r\n").unwrap() + 4;
        assert!(request[body_start..].is_empty());
        assert!(!String::from_utf8_lossy(&request).contains("should never leave the form"));
    }

    #[tokio::test]
    async fn test_bearer_override_on_the_wire() {
        let (url, rx) = spawn_fixture(http_response("200 OK", "text/plain", "ok")).await;

        let mut s = spec(Method::Get, &url);
        s.headers = vec![HeaderEntry::new("Authorization", "Bearer stale")];
        s.auth = Auth::Bearer {
            token: "fresh".to_owned(),
        };
        execute(&s).await;

        let request = String::from_utf8_lossy(&rx.await.unwrap()).to_lowercase();
        assert!(request.contains("authorization: bearer fresh"));
        assert!(!request.contains("stale"));
    }
}
