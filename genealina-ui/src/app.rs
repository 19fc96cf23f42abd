//! App Root Component
//!
//! Routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::pages::{Admin, Landing};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    view! {
        <Router>
            <Routes>
                <Route path="/" view=Landing />
                <Route path="/admin" view=Admin />
                <Route path="/*any" view=NotFound />
            </Routes>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1 class="not-found__title">"Page Not Found"</h1>
            <p class="not-found__description">"The page you're looking for doesn't exist."</p>
            <A href="/" class="btn btn--primary">"Go to the home page"</A>
        </div>
    }
}
