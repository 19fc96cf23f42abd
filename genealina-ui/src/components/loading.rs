//! Loading Component

use leptos::*;

/// Spinner with a caption
#[component]
pub fn Loading(
    #[prop(default = "Loading messages...")]
    label: &'static str,
) -> impl IntoView {
    view! {
        <div id="loadingState" class="loading-state">
            <div class="loading-spinner" />
            <p>{label}</p>
        </div>
    }
}
