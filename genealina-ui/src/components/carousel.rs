//! Technology Carousel Component

use leptos::*;

use genealina::site::carousel::{animation_duration_css, critical_icons, track_items};

/// Infinite logo strip
#[component]
pub fn TechCarousel() -> impl IntoView {
    // Fires on resize so the duration is written again
    let resized = create_trigger();
    let resize_handle = window_event_listener(ev::resize, move |_| resized.notify());
    on_cleanup(move || resize_handle.remove());

    view! {
        {critical_icons().map(|icon| view! {
            <link rel="preload" as="image" href=icon />
        }).collect_view()}

        <div class="tech-carousel">
            <div
                id="tech-track"
                class="tech-carousel__track"
                style:animation-duration=move || {
                    resized.track();
                    animation_duration_css()
                }
            >
                {track_items().map(|tech| view! {
                    <div class="tech-item">
                        <img src=tech.icon alt=tech.name class="tech-item__icon" loading="lazy" />
                        <span class="tech-item__name">{tech.name}</span>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
