//! Dashboard Handle
//!
//! One [`Dashboard`] per admin page. Its observer mirrors every transition
//! into a signal the view reads from.

use leptos::*;
use std::rc::Rc;

use genealina::{ContactMessage, Dashboard, DashboardState, DeleteOutcome};

use crate::api::GlooContacts;

const CONFIRM_DELETE: &str = "Delete this message?";

#[derive(Clone)]
pub struct DashboardHandle {
    dashboard: Rc<Dashboard<GlooContacts>>,
    /// Latest state snapshot
    pub state: RwSignal<DashboardState>,
}

/// Create the dashboard, provide it as context and start the first load
pub fn provide_dashboard() -> DashboardHandle {
    let state = create_rw_signal(DashboardState::new());
    let dashboard = Dashboard::new(GlooContacts::new()).with_observer(move |snapshot| {
        state.set(snapshot.clone());
    });

    let handle = DashboardHandle {
        dashboard: Rc::new(dashboard),
        state,
    };
    provide_context(handle.clone());
    handle.refresh();
    handle
}

pub fn use_dashboard() -> DashboardHandle {
    use_context::<DashboardHandle>().expect("DashboardHandle not provided")
}

impl DashboardHandle {
    /// Reload the list (ignored while a load is running)
    pub fn refresh(&self) {
        let dashboard = Rc::clone(&self.dashboard);
        spawn_local(async move {
            dashboard.refresh().await;
        });
    }

    pub fn open(&self, id: &str) {
        self.dashboard.open_detail(id);
    }

    pub fn close(&self) {
        self.dashboard.close_detail();
    }

    /// Delete the open message after a browser confirm
    pub fn delete_current(&self) {
        let dashboard = Rc::clone(&self.dashboard);
        spawn_local(async move {
            let outcome = dashboard.delete_current(confirm_delete).await;
            if let DeleteOutcome::Failed(e) = outcome {
                web_sys::console::error_1(&format!("Delete failed: {}", e).into());
                if let (Some(alert), Some(window)) = (dashboard.take_alert(), web_sys::window()) {
                    let _ = window.alert_with_message(&alert);
                }
            }
        });
    }
}

fn confirm_delete(_message: &ContactMessage) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(CONFIRM_DELETE).ok())
        .unwrap_or(false)
}
