use crate::collections;
use crate::types::{
    Auth, AuthMode, Collection, FormTab, HeaderEntry, InputMode, Method, Notification, PanelFocus,
    RequestSpec, ResponseResult, ResponseTab, SavedRequest, SidebarItem, SidebarTab,
};

/// Everything the request form holds. Pure UI state; the executor only ever
/// sees the `RequestSpec` snapshot taken at send time.
#[derive(Debug, Clone)]
pub struct FormState {
    pub method: Method,
    pub url: String,
    pub headers: Vec<HeaderEntry>,
    pub body: String,
    pub auth_mode: AuthMode,
    pub token: String,
    pub username: String,
    pub password: String,
    /// Selected row in the Headers tab
    pub selected_header: usize,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            method: Method::Get,
            url: "https://jsonplaceholder.typicode.com/posts".to_owned(),
            headers: vec![HeaderEntry::new("Content-Type", "application/json")],
            body: String::new(),
            auth_mode: AuthMode::None,
            token: String::new(),
            username: String::new(),
            password: String::new(),
            selected_header: 0,
        }
    }
}

impl FormState {
    /// Snapshot the form into the immutable spec handed to the executor
    pub fn to_request_spec(&self) -> RequestSpec {
        let auth = match self.auth_mode {
            AuthMode::None => Auth::None,
            AuthMode::Bearer => Auth::Bearer {
                token: self.token.clone(),
            },
            AuthMode::Basic => Auth::Basic {
                username: self.username.clone(),
                password: self.password.clone(),
            },
        };

        RequestSpec {
            method: self.method,
            url: self.url.clone(),
            headers: self.headers.clone(),
            body: if self.body.is_empty() {
                None
            } else {
                Some(self.body.clone())
            },
            auth,
        }
    }
}

/// The single-in-flight request and its latest outcome
#[derive(Debug, Clone, Default)]
pub struct RequestState {
    pub in_flight: bool,
    pub current_response: Option<ResponseResult>,
}

/// Fixture-backed sidebar data
#[derive(Debug, Clone)]
pub struct DataState {
    pub collections: Vec<Collection>,
    pub history: Vec<SavedRequest>,
}

impl Default for DataState {
    fn default() -> Self {
        Self {
            collections: collections::sample_collections(),
            history: collections::recent_history(),
        }
    }
}

/// Sidebar filter plus the flattened render list it produces
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: String,
    pub items: Vec<SidebarItem>,
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub panel_focus: PanelFocus,
    pub sidebar_tab: SidebarTab,
    pub form_tab: FormTab,
    pub response_tab: ResponseTab,
    pub sidebar_selected: usize,
    /// Scroll offset for the response body/raw tabs (lines)
    pub response_scroll: usize,
    /// Scroll offset for the response headers tab (lines)
    pub headers_scroll: usize,
    pub notification: Option<Notification>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            panel_focus: PanelFocus::Request,
            sidebar_tab: SidebarTab::Collections,
            form_tab: FormTab::Headers,
            response_tab: ResponseTab::Body,
            sidebar_selected: 0,
            response_scroll: 0,
            headers_scroll: 0,
            notification: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TextInputState {
    pub mode: InputMode,
    /// Scratch buffer for the value being edited; committed on Enter
    pub buffer: String,
}

impl Default for TextInputState {
    fn default() -> Self {
        Self {
            mode: InputMode::Normal,
            buffer: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: FormState,
    pub request: RequestState,
    pub data: DataState,
    pub search: SearchState,
    pub ui: UiState,
    pub input: TextInputState,
}

impl AppState {
    /// Rebuild the flattened sidebar list from the active tab, the fixture
    /// data, and the search query. Collections with no matching requests are
    /// hidden while a query is active.
    pub fn update_sidebar_items(&mut self) {
        let mut items = Vec::new();

        match self.ui.sidebar_tab {
            SidebarTab::Collections => {
                for (index, collection) in self.data.collections.iter().enumerate() {
                    let matching: Vec<&SavedRequest> = collection
                        .requests
                        .iter()
                        .filter(|r| collections::matches(r, &self.search.query))
                        .collect();

                    if matching.is_empty() && !self.search.query.is_empty() {
                        continue;
                    }

                    items.push(SidebarItem::CollectionHeader {
                        index,
                        name: collection.name.clone(),
                        count: matching.len(),
                        expanded: collection.expanded,
                    });

                    if collection.expanded {
                        for request in matching {
                            items.push(SidebarItem::Request(request.clone()));
                        }
                    }
                }
            }
            SidebarTab::History => {
                for request in &self.data.history {
                    if collections::matches(request, &self.search.query) {
                        items.push(SidebarItem::Request(request.clone()));
                    }
                }
            }
        }

        self.search.items = items;

        if self.ui.sidebar_selected >= self.search.items.len() {
            self.ui.sidebar_selected = self.search.items.len().saturating_sub(1);
        }
    }

    pub fn sidebar_len(&self) -> usize {
        self.search.items.len()
    }

    pub fn selected_sidebar_item(&self) -> Option<&SidebarItem> {
        self.search.items.get(self.ui.sidebar_selected)
    }

    /// Total requests across all collections, for the header line
    pub fn matched_request_count(&self) -> usize {
        self.search
            .items
            .iter()
            .filter(|item| matches!(item, SidebarItem::Request(_)))
            .count()
    }

    pub fn notify(&mut self, notification: Notification) {
        self.ui.notification = Some(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Auth;

    #[test]
    fn test_form_defaults_match_sample_request() {
        let form = FormState::default();
        assert_eq!(form.method, Method::Get);
        assert_eq!(form.url, "https://jsonplaceholder.typicode.com/posts");
        assert_eq!(
            form.headers,
            vec![HeaderEntry::new("Content-Type", "application/json")]
        );
    }

    #[test]
    fn test_snapshot_empty_body_becomes_none() {
        let form = FormState::default();
        let spec = form.to_request_spec();
        assert_eq!(spec.body, None);
        assert_eq!(spec.auth, Auth::None);
    }

    #[test]
    fn test_snapshot_bearer_auth() {
        let form = FormState {
            auth_mode: AuthMode::Bearer,
            token: "tok-123".to_owned(),
            ..FormState::default()
        };
        assert_eq!(
            form.to_request_spec().auth,
            Auth::Bearer {
                token: "tok-123".to_owned()
            }
        );
    }

    #[test]
    fn test_sidebar_items_hide_collapsed_requests() {
        let mut state = AppState::default();
        state.update_sidebar_items();

        // Fixtures: first collection expanded (3 requests), second collapsed
        let headers = state
            .search
            .items
            .iter()
            .filter(|i| matches!(i, SidebarItem::CollectionHeader { .. }))
            .count();
        assert_eq!(headers, 2);
        assert_eq!(state.matched_request_count(), 3);
    }

    #[test]
    fn test_sidebar_filter_hides_empty_collections() {
        let mut state = AppState::default();
        state.search.query = "users".to_owned();
        state.update_sidebar_items();

        // Only "User Management" matches; it is collapsed so just its header shows
        assert_eq!(state.search.items.len(), 1);
        match &state.search.items[0] {
            SidebarItem::CollectionHeader { name, count, .. } => {
                assert_eq!(name, "User Management");
                assert_eq!(*count, 2);
            }
            SidebarItem::Request(_) => panic!("expected a collection header"),
        }
    }

    #[test]
    fn test_sidebar_history_filtering() {
        let mut state = AppState::default();
        state.ui.sidebar_tab = SidebarTab::History;
        state.search.query = "posts".to_owned();
        state.update_sidebar_items();

        assert_eq!(state.search.items.len(), 1);
    }

    #[test]
    fn test_selection_clamped_after_filter() {
        let mut state = AppState::default();
        state.update_sidebar_items();
        state.ui.sidebar_selected = state.sidebar_len() - 1;

        state.search.query = "no-such-request".to_owned();
        state.update_sidebar_items();
        assert_eq!(state.ui.sidebar_selected, 0);
    }
}
