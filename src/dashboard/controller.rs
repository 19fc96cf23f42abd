//! Dashboard Controller
//!
//! Drives [`DashboardState`] with an injected [`ContactsApi`]. Runs on one
//! cooperative event loop: state lives in a `RefCell` and no borrow is held
//! across an await point.

use std::cell::{Ref, RefCell};

use super::state::DashboardState;
use crate::contacts::{ContactMessage, ContactsApi, ContactsError};

/// Result of [`Dashboard::delete_current`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// No record was open
    NothingOpen,
    /// The confirmation gate said no
    Cancelled,
    /// Deleted and the list reloaded
    Deleted,
    /// The API refused; an alert is pending and nothing else changed
    Failed(ContactsError),
}

type Observer = Box<dyn Fn(&DashboardState)>;

/// Admin dashboard: the loaded records and the detail view
pub struct Dashboard<A> {
    api: A,
    state: RefCell<DashboardState>,
    observer: Option<Observer>,
}

impl<A: ContactsApi> Dashboard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: RefCell::new(DashboardState::new()),
            observer: None,
        }
    }

    /// Call `observer` with a snapshot after every transition
    pub fn with_observer(mut self, observer: impl Fn(&DashboardState) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Borrow the current state
    pub fn state(&self) -> Ref<'_, DashboardState> {
        self.state.borrow()
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    fn update<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> R {
        let result = f(&mut self.state.borrow_mut());
        self.notify();
        result
    }

    fn notify(&self) {
        if let Some(observer) = &self.observer {
            let snapshot = self.snapshot();
            observer(&snapshot);
        }
    }

    /// Reload the list; `false` when a load was already in flight
    pub async fn refresh(&self) -> bool {
        if !self.update(DashboardState::begin_refresh) {
            tracing::debug!("Refresh already in progress, ignoring");
            return false;
        }

        tracing::debug!(origin = %self.api.origin(), "Loading messages");
        let result = self.api.list().await;
        self.update(|state| state.finish_refresh(result));
        true
    }

    /// Show the detail view for a loaded record
    pub fn open_detail(&self, id: &str) -> bool {
        self.update(|state| state.open_detail(id))
    }

    pub fn close_detail(&self) {
        self.update(DashboardState::close_detail);
    }

    /// Delete the open record after `confirm` approves it
    pub async fn delete_current(
        &self,
        confirm: impl FnOnce(&ContactMessage) -> bool,
    ) -> DeleteOutcome {
        let id = {
            let state = self.state.borrow();
            let Some(message) = state.current() else {
                return DeleteOutcome::NothingOpen;
            };
            if !confirm(message) {
                return DeleteOutcome::Cancelled;
            }
            message.id.clone()
        };

        match self.api.delete(&id).await {
            Ok(_) => {
                self.close_detail();
                self.refresh().await;
                DeleteOutcome::Deleted
            }
            Err(e) => {
                tracing::warn!(%id, error = %e, "Delete failed");
                self.update(DashboardState::delete_failed);
                DeleteOutcome::Failed(e)
            }
        }
    }

    /// Take the pending alert, if any
    pub fn take_alert(&self) -> Option<String> {
        self.update(DashboardState::take_alert)
    }
}
