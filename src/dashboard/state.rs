//! Dashboard State
//!
//! Transition logic for the admin dashboard, free of IO. The async driver in
//! [`super::controller`] feeds it API results; the UI only reads it.

use crate::contacts::{ContactMessage, ContactsError};

/// Message shown when the list cannot be loaded
pub const LOAD_ERROR_MESSAGE: &str =
    "Could not connect to the server. Check that the backend is running.";

/// Alert shown when a delete fails
pub const DELETE_ERROR_MESSAGE: &str = "Could not delete the message.";

/// What the dashboard is showing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DashboardView {
    /// Nothing requested yet
    #[default]
    Idle,
    Loading,
    Empty,
    Populated,
    Error(String),
}

/// The four mutually exclusive page regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Loading,
    Empty,
    List,
    Error,
}

/// Records, view and the open detail for the admin dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    view: DashboardView,
    messages: Vec<ContactMessage>,
    /// Identifier of the record shown in the detail view
    open: Option<String>,
    loading: bool,
    alert: Option<String>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    /// The one region that is visible
    pub fn region(&self) -> Region {
        match self.view {
            DashboardView::Idle | DashboardView::Loading => Region::Loading,
            DashboardView::Empty => Region::Empty,
            DashboardView::Populated => Region::List,
            DashboardView::Error(_) => Region::Error,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Records from the last successful load
    pub fn messages(&self) -> &[ContactMessage] {
        &self.messages
    }

    /// Displayed message count
    pub fn count(&self) -> usize {
        self.messages.len()
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.view {
            DashboardView::Error(message) => Some(message),
            _ => None,
        }
    }

    /// The record shown in the detail view
    pub fn current(&self) -> Option<&ContactMessage> {
        let id = self.open.as_deref()?;
        self.messages.iter().find(|m| m.id == id)
    }

    /// Pending user-facing alert (failed delete)
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Enter `Loading`; `false` when a load is already in flight
    pub fn begin_refresh(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.view = DashboardView::Loading;
        true
    }

    /// Apply the outcome of a `list` call
    pub fn finish_refresh(&mut self, result: Result<Vec<ContactMessage>, ContactsError>) {
        self.loading = false;

        match result {
            Ok(messages) if messages.is_empty() => {
                self.messages = messages;
                self.view = DashboardView::Empty;
            }
            Ok(messages) => {
                self.messages = messages;
                self.view = DashboardView::Populated;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load messages");
                self.view = DashboardView::Error(LOAD_ERROR_MESSAGE.to_string());
            }
        }
    }

    /// Open the detail view for `id`; no-op when it is not loaded
    pub fn open_detail(&mut self, id: &str) -> bool {
        if self.messages.iter().any(|m| m.id == id) {
            self.open = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn close_detail(&mut self) {
        self.open = None;
    }

    /// Record a failed delete
    pub fn delete_failed(&mut self) {
        self.alert = Some(DELETE_ERROR_MESSAGE.to_string());
    }

    /// Take the pending alert so it is shown once
    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(id: &str) -> ContactMessage {
        ContactMessage {
            id: id.to_string(),
            first_name: "Ana".to_string(),
            last_name: "Pérez".to_string(),
            email: "ana@example.com".to_string(),
            phone: None,
            message: "Hola, necesito una web".to_string(),
            created_at: None,
        }
    }

    #[test]
    fn test_initial_state_shows_loading_region() {
        let state = DashboardState::new();
        assert_eq!(state.view(), &DashboardView::Idle);
        assert_eq!(state.region(), Region::Loading);
        assert_eq!(state.count(), 0);
    }

    #[test]
    fn test_refresh_guard() {
        let mut state = DashboardState::new();
        assert!(state.begin_refresh());
        assert!(!state.begin_refresh());

        state.finish_refresh(Ok(vec![]));
        assert!(state.begin_refresh());
    }

    #[test]
    fn test_populated_and_empty() {
        let mut state = DashboardState::new();
        state.begin_refresh();
        state.finish_refresh(Ok(vec![message("1"), message("2")]));
        assert_eq!(state.view(), &DashboardView::Populated);
        assert_eq!(state.region(), Region::List);
        assert_eq!(state.count(), 2);

        state.begin_refresh();
        assert_eq!(state.region(), Region::Loading);
        state.finish_refresh(Ok(vec![]));
        assert_eq!(state.view(), &DashboardView::Empty);
        assert_eq!(state.count(), 0);
    }

    #[test]
    fn test_error_keeps_previous_records_hidden() {
        let mut state = DashboardState::new();
        state.begin_refresh();
        state.finish_refresh(Ok(vec![message("1")]));

        state.begin_refresh();
        state.finish_refresh(Err(ContactsError::Http {
            status: 500,
            message: "Internal Server Error".to_string(),
        }));

        assert_eq!(state.region(), Region::Error);
        assert_eq!(state.error_message(), Some(LOAD_ERROR_MESSAGE));
        assert_eq!(state.messages().len(), 1);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_open_and_close_detail() {
        let mut state = DashboardState::new();
        state.begin_refresh();
        state.finish_refresh(Ok(vec![message("1"), message("2")]));

        assert!(!state.open_detail("missing"));
        assert!(state.current().is_none());

        assert!(state.open_detail("2"));
        assert_eq!(state.current().map(|m| m.id.as_str()), Some("2"));

        state.close_detail();
        assert!(state.current().is_none());
    }

    #[test]
    fn test_open_record_disappears_after_reload() {
        let mut state = DashboardState::new();
        state.begin_refresh();
        state.finish_refresh(Ok(vec![message("1"), message("2")]));
        state.open_detail("1");

        state.begin_refresh();
        state.finish_refresh(Ok(vec![message("2")]));
        assert!(state.current().is_none());
    }

    #[test]
    fn test_alert_is_taken_once() {
        let mut state = DashboardState::new();
        state.delete_failed();
        assert_eq!(state.take_alert().as_deref(), Some(DELETE_ERROR_MESSAGE));
        assert_eq!(state.take_alert(), None);
    }
}
