//! Global Application State
//!
//! Reactive state shared by the marketing page components.

use leptos::*;

use genealina::site::{Notice, NavMenu, NOTICE_DISMISS_AFTER};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Mobile navigation menu
    pub menu: RwSignal<NavMenu>,
    /// Header uses its scrolled style
    pub scrolled: RwSignal<bool>,
    /// Section id of the highlighted nav link
    pub active_section: RwSignal<Option<String>>,
    /// Banner shown after a form submission
    pub notice: RwSignal<Option<Notice>>,
    /// Bumped on every new notice so stale timers do not clear a newer one
    notice_seq: RwSignal<u32>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        menu: create_rw_signal(NavMenu::new()),
        scrolled: create_rw_signal(false),
        active_section: create_rw_signal(None),
        notice: create_rw_signal(None),
        notice_seq: create_rw_signal(0),
    };

    provide_context(state);
}

/// Global state from context
pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not provided")
}

impl GlobalState {
    /// Show a banner (auto-clears after timeout)
    pub fn show_notice(&self, notice: Notice) {
        let seq = self.notice_seq.get_untracked().wrapping_add(1);
        self.notice_seq.set(seq);
        self.notice.set(Some(notice));

        let notice_signal = self.notice;
        let seq_signal = self.notice_seq;
        gloo_timers::callback::Timeout::new(NOTICE_DISMISS_AFTER.as_millis() as u32, move || {
            if seq_signal.get_untracked() == seq {
                notice_signal.set(None);
            }
        })
        .forget();
    }

    pub fn clear_notice(&self) {
        self.notice.set(None);
    }
}
