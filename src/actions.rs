use crate::state::AppState;
use crate::types::{
    HeaderEntry, Notification, PanelFocus, ResponseTab, SavedRequest, SidebarTab,
};

/// Scroll lines per action (Ctrl+U / Ctrl+D)
pub const SCROLL_LINES_PER_ACTION: usize = 5;

/// Represents all possible state-changing actions in the application.
/// This pattern separates input handling from state mutations, making the
/// code more testable; every UI mutation goes through `apply_action`.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    // Panel and tab navigation
    FocusPanel(PanelFocus),
    FocusNextPanel,
    SetSidebarTab(SidebarTab),
    NextFormTab,
    PrevFormTab,
    NextResponseTab,
    PrevResponseTab,

    // Form mutations
    CycleMethod,
    SetUrl(String),
    SetBody(String),
    AddHeaderRow,
    RemoveSelectedHeader,
    SelectHeaderUp,
    SelectHeaderDown,
    SetHeaderName { index: usize, name: String },
    SetHeaderValue { index: usize, value: String },
    CycleAuthMode,
    SetToken(String),
    SetUsername(String),
    SetPassword(String),

    // Sidebar
    ToggleCollection(usize),
    LoadRequest(SavedRequest),

    // Response viewer scrolling
    ScrollResponseUp,
    ScrollResponseDown,

    // Notifications
    Notify(Notification),
    ClearNotification,
}

/// Apply an action to the application state.
/// Pure state transformation; side effects (network, clipboard, files) live
/// in the event handlers that emit these actions.
pub fn apply_action(action: AppAction, state: &mut AppState) {
    match action {
        AppAction::FocusPanel(panel) => {
            state.ui.panel_focus = panel;
        }
        AppAction::FocusNextPanel => {
            state.ui.panel_focus = state.ui.panel_focus.next();
        }
        AppAction::SetSidebarTab(tab) => {
            if state.ui.sidebar_tab != tab {
                state.ui.sidebar_tab = tab;
                state.ui.sidebar_selected = 0;
                state.update_sidebar_items();
            }
        }
        AppAction::NextFormTab => {
            state.ui.form_tab = state.ui.form_tab.next();
        }
        AppAction::PrevFormTab => {
            state.ui.form_tab = state.ui.form_tab.prev();
        }
        AppAction::NextResponseTab => {
            state.ui.response_tab = state.ui.response_tab.next();
        }
        AppAction::PrevResponseTab => {
            state.ui.response_tab = state.ui.response_tab.prev();
        }

        AppAction::CycleMethod => {
            state.form.method = state.form.method.next();
        }
        AppAction::SetUrl(url) => {
            state.form.url = url;
        }
        AppAction::SetBody(body) => {
            state.form.body = body;
        }
        AppAction::AddHeaderRow => {
            state.form.headers.push(HeaderEntry::default());
            state.form.selected_header = state.form.headers.len() - 1;
        }
        AppAction::RemoveSelectedHeader => {
            let index = state.form.selected_header;
            if index < state.form.headers.len() {
                state.form.headers.remove(index);
                if state.form.selected_header >= state.form.headers.len() {
                    state.form.selected_header = state.form.headers.len().saturating_sub(1);
                }
            }
        }
        AppAction::SelectHeaderUp => {
            state.form.selected_header = state.form.selected_header.saturating_sub(1);
        }
        AppAction::SelectHeaderDown => {
            if state.form.selected_header + 1 < state.form.headers.len() {
                state.form.selected_header += 1;
            }
        }
        AppAction::SetHeaderName { index, name } => {
            if let Some(header) = state.form.headers.get_mut(index) {
                header.name = name;
            }
        }
        AppAction::SetHeaderValue { index, value } => {
            if let Some(header) = state.form.headers.get_mut(index) {
                header.value = value;
            }
        }
        AppAction::CycleAuthMode => {
            state.form.auth_mode = state.form.auth_mode.next();
        }
        AppAction::SetToken(token) => {
            state.form.token = token;
        }
        AppAction::SetUsername(username) => {
            state.form.username = username;
        }
        AppAction::SetPassword(password) => {
            state.form.password = password;
        }

        AppAction::ToggleCollection(index) => {
            if let Some(collection) = state.data.collections.get_mut(index) {
                collection.expanded = !collection.expanded;
            }
            state.update_sidebar_items();
        }
        AppAction::LoadRequest(request) => {
            state.form.method = request.method;
            state.form.url = request.url.clone();
            state.notify(Notification::info(
                "Request loaded",
                &format!("Loaded {} {}", request.method.as_str(), request.name),
            ));
        }

        AppAction::ScrollResponseUp => match state.ui.response_tab {
            ResponseTab::Body | ResponseTab::Raw => {
                state.ui.response_scroll =
                    state.ui.response_scroll.saturating_sub(SCROLL_LINES_PER_ACTION);
            }
            ResponseTab::Headers => {
                state.ui.headers_scroll =
                    state.ui.headers_scroll.saturating_sub(SCROLL_LINES_PER_ACTION);
            }
        },
        AppAction::ScrollResponseDown => match state.ui.response_tab {
            ResponseTab::Body | ResponseTab::Raw => {
                state.ui.response_scroll =
                    state.ui.response_scroll.saturating_add(SCROLL_LINES_PER_ACTION);
            }
            ResponseTab::Headers => {
                state.ui.headers_scroll =
                    state.ui.headers_scroll.saturating_add(SCROLL_LINES_PER_ACTION);
            }
        },

        AppAction::Notify(notification) => {
            state.notify(notification);
        }
        AppAction::ClearNotification => {
            state.ui.notification = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Method, Severity};

    fn state() -> AppState {
        let mut state = AppState::default();
        state.update_sidebar_items();
        state
    }

    #[test]
    fn test_focus_cycles_through_all_panels() {
        let mut s = state();
        assert_eq!(s.ui.panel_focus, PanelFocus::Request);
        apply_action(AppAction::FocusNextPanel, &mut s);
        assert_eq!(s.ui.panel_focus, PanelFocus::Response);
        apply_action(AppAction::FocusNextPanel, &mut s);
        assert_eq!(s.ui.panel_focus, PanelFocus::Sidebar);
        apply_action(AppAction::FocusNextPanel, &mut s);
        assert_eq!(s.ui.panel_focus, PanelFocus::Request);
    }

    #[test]
    fn test_load_request_populates_form_and_notifies() {
        let mut s = state();
        let request = SavedRequest {
            name: "Get users".to_owned(),
            method: Method::Put,
            url: "https://example.com/users/1".to_owned(),
            age_label: None,
        };

        apply_action(AppAction::LoadRequest(request), &mut s);

        assert_eq!(s.form.method, Method::Put);
        assert_eq!(s.form.url, "https://example.com/users/1");
        let notification = s.ui.notification.expect("should notify");
        assert_eq!(notification.title, "Request loaded");
        assert_eq!(notification.description, "Loaded PUT Get users");
        assert_eq!(notification.severity, Severity::Info);
    }

    #[test]
    fn test_header_row_add_remove() {
        let mut s = state();
        assert_eq!(s.form.headers.len(), 1);

        apply_action(AppAction::AddHeaderRow, &mut s);
        assert_eq!(s.form.headers.len(), 2);
        assert_eq!(s.form.selected_header, 1);

        apply_action(AppAction::RemoveSelectedHeader, &mut s);
        assert_eq!(s.form.headers.len(), 1);
        assert_eq!(s.form.selected_header, 0);

        apply_action(AppAction::RemoveSelectedHeader, &mut s);
        assert!(s.form.headers.is_empty());
        // Removing from an empty list is a no-op
        apply_action(AppAction::RemoveSelectedHeader, &mut s);
        assert!(s.form.headers.is_empty());
    }

    #[test]
    fn test_set_header_out_of_bounds_is_ignored() {
        let mut s = state();
        apply_action(
            AppAction::SetHeaderName {
                index: 99,
                name: "X-Test".to_owned(),
            },
            &mut s,
        );
        assert_eq!(s.form.headers.len(), 1);
        assert_eq!(s.form.headers[0].name, "Content-Type");
    }

    #[test]
    fn test_toggle_collection_rebuilds_items() {
        let mut s = state();
        let before = s.sidebar_len();

        // Second fixture collection starts collapsed; expanding adds its rows
        apply_action(AppAction::ToggleCollection(1), &mut s);
        assert_eq!(s.sidebar_len(), before + 2);

        apply_action(AppAction::ToggleCollection(1), &mut s);
        assert_eq!(s.sidebar_len(), before);
    }

    #[test]
    fn test_scroll_targets_follow_active_tab() {
        let mut s = state();
        apply_action(AppAction::ScrollResponseDown, &mut s);
        assert_eq!(s.ui.response_scroll, SCROLL_LINES_PER_ACTION);
        assert_eq!(s.ui.headers_scroll, 0);

        apply_action(AppAction::NextResponseTab, &mut s);
        assert_eq!(s.ui.response_tab, ResponseTab::Headers);
        apply_action(AppAction::ScrollResponseDown, &mut s);
        assert_eq!(s.ui.headers_scroll, SCROLL_LINES_PER_ACTION);

        apply_action(AppAction::ScrollResponseUp, &mut s);
        apply_action(AppAction::ScrollResponseUp, &mut s);
        assert_eq!(s.ui.headers_scroll, 0);
    }

    #[test]
    fn test_cycle_auth_mode() {
        use crate::types::AuthMode;
        let mut s = state();
        assert_eq!(s.form.auth_mode, AuthMode::None);
        apply_action(AppAction::CycleAuthMode, &mut s);
        assert_eq!(s.form.auth_mode, AuthMode::Bearer);
        apply_action(AppAction::CycleAuthMode, &mut s);
        assert_eq!(s.form.auth_mode, AuthMode::Basic);
        apply_action(AppAction::CycleAuthMode, &mut s);
        assert_eq!(s.form.auth_mode, AuthMode::None);
    }
}
