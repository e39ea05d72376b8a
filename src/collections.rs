//! Fixture data provider for the sidebar.
//!
//! Collections and history are in-memory sample records; nothing here is
//! persisted or mutated beyond the expand/collapse flag. The only contract
//! with the rest of the app is "list of request-shaped records".

use crate::types::{Collection, Method, SavedRequest};

pub fn sample_collections() -> Vec<Collection> {
    vec![
        Collection {
            name: "JSONPlaceholder API".to_owned(),
            expanded: true,
            requests: vec![
                SavedRequest {
                    name: "Get all posts".to_owned(),
                    method: Method::Get,
                    url: "https://jsonplaceholder.typicode.com/posts".to_owned(),
                    age_label: None,
                },
                SavedRequest {
                    name: "Get post by ID".to_owned(),
                    method: Method::Get,
                    url: "https://jsonplaceholder.typicode.com/posts/1".to_owned(),
                    age_label: None,
                },
                SavedRequest {
                    name: "Create new post".to_owned(),
                    method: Method::Post,
                    url: "https://jsonplaceholder.typicode.com/posts".to_owned(),
                    age_label: None,
                },
            ],
        },
        Collection {
            name: "User Management".to_owned(),
            expanded: false,
            requests: vec![
                SavedRequest {
                    name: "Get users".to_owned(),
                    method: Method::Get,
                    url: "https://jsonplaceholder.typicode.com/users".to_owned(),
                    age_label: None,
                },
                SavedRequest {
                    name: "Update user".to_owned(),
                    method: Method::Put,
                    url: "https://jsonplaceholder.typicode.com/users/1".to_owned(),
                    age_label: None,
                },
            ],
        },
    ]
}

/// Recency-ordered history entries, newest first
pub fn recent_history() -> Vec<SavedRequest> {
    vec![
        SavedRequest {
            name: "Get posts".to_owned(),
            method: Method::Get,
            url: "https://jsonplaceholder.typicode.com/posts".to_owned(),
            age_label: Some("just now"),
        },
        SavedRequest {
            name: "Get users".to_owned(),
            method: Method::Get,
            url: "https://jsonplaceholder.typicode.com/users".to_owned(),
            age_label: Some("1 hour ago"),
        },
    ]
}

/// Case-insensitive substring match over name and URL. An empty query
/// matches everything.
pub fn matches(request: &SavedRequest, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    request.name.to_lowercase().contains(&query) || request.url.to_lowercase().contains(&query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, url: &str) -> SavedRequest {
        SavedRequest {
            name: name.to_owned(),
            method: Method::Get,
            url: url.to_owned(),
            age_label: None,
        }
    }

    #[test]
    fn test_empty_query_matches_all() {
        assert!(matches(&request("Get posts", "https://example.com"), ""));
    }

    #[test]
    fn test_match_on_name_is_case_insensitive() {
        let req = request("Get All Posts", "https://example.com/posts");
        assert!(matches(&req, "all posts"));
        assert!(matches(&req, "ALL"));
    }

    #[test]
    fn test_match_on_url() {
        let req = request("Users", "https://jsonplaceholder.typicode.com/users");
        assert!(matches(&req, "typicode"));
        assert!(!matches(&req, "github"));
    }

    #[test]
    fn test_fixtures_are_non_empty() {
        let collections = sample_collections();
        assert!(!collections.is_empty());
        assert!(collections.iter().all(|c| !c.requests.is_empty()));
        assert!(!recent_history().is_empty());
    }
}
