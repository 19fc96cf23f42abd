//! Navigation Component
//!
//! Fixed header with the mobile menu, scrolled style and active-section link.

use leptos::*;
use wasm_bindgen::JsCast;

use genealina::site::nav::{header_is_scrolled, scroll_target};
use genealina::site::{ActiveLinkTracker, MenuEvent, SectionBounds};

use crate::state::global::{use_global_state, GlobalState};

/// Section ids with their link labels, in page order
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("services", "Services"),
    ("about", "About"),
    ("technologies", "Technologies"),
    ("contact", "Contact"),
];

/// Navigation header component
#[component]
pub fn Header() -> impl IntoView {
    let state = use_global_state();
    let header_ref = create_node_ref::<html::Header>();
    let menu_ref = create_node_ref::<html::Div>();
    let toggle_ref = create_node_ref::<html::Button>();
    let tracker = store_value(ActiveLinkTracker::new());

    let on_scroll = move || {
        let Some(window) = web_sys::window() else {
            return;
        };
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        state.scrolled.set(header_is_scrolled(scroll_y));

        let sections = page_sections();
        let mut active = None;
        tracker.update_value(|t| active = t.update(&sections, scroll_y).map(str::to_string));
        if state.active_section.get_untracked() != active {
            state.active_section.set(active);
        }
    };

    // Highlight the right link before the first scroll
    request_animation_frame(on_scroll);
    let scroll_handle = window_event_listener(ev::scroll, move |_| on_scroll());

    let click_handle = window_event_listener(ev::click, move |ev: ev::MouseEvent| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
            return;
        };
        let in_menu = menu_ref
            .get_untracked()
            .map(|el| el.contains(Some(&target)))
            .unwrap_or(false);
        let in_toggle = toggle_ref
            .get_untracked()
            .map(|el| el.contains(Some(&target)))
            .unwrap_or(false);
        if !in_menu && !in_toggle {
            close_menu(state, MenuEvent::OutsideClick);
        }
    });

    let key_handle = window_event_listener(ev::keydown, move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            close_menu(state, MenuEvent::Escape);
        }
    });

    on_cleanup(move || {
        scroll_handle.remove();
        click_handle.remove();
        key_handle.remove();
        lock_body_scroll(false);
    });

    // Body scrolling follows the menu
    create_effect(move |_| lock_body_scroll(state.menu.get().locks_scroll()));

    let on_link_click = move |ev: ev::MouseEvent, id: &'static str| {
        ev.prevent_default();
        close_menu(state, MenuEvent::LinkClicked);

        let header_height = header_ref
            .get_untracked()
            .map(|el| el.offset_height() as f64)
            .unwrap_or(0.0);
        scroll_to_section(id, header_height);
    };

    view! {
        <header
            id="header"
            node_ref=header_ref
            class=move || if state.scrolled.get() { "header scroll-header" } else { "header" }
        >
            <nav class="nav container">
                <a href="#home" class="nav__logo" on:click=move |ev| on_link_click(ev, "home")>
                    "Genealina Labs"
                </a>

                <div
                    id="nav-menu"
                    node_ref=menu_ref
                    class=move || if state.menu.get().is_open() { "nav__menu show-menu" } else { "nav__menu" }
                >
                    <ul class="nav__list">
                        {NAV_LINKS.into_iter().map(move |(id, label)| view! {
                            <li class="nav__item">
                                <a
                                    href=format!("#{}", id)
                                    class=move || {
                                        if state.active_section.get().as_deref() == Some(id) {
                                            "nav__link active-link"
                                        } else {
                                            "nav__link"
                                        }
                                    }
                                    on:click=move |ev| on_link_click(ev, id)
                                >
                                    {label}
                                </a>
                            </li>
                        }).collect_view()}
                    </ul>

                    <button
                        id="nav-close"
                        class="nav__close"
                        aria-label="Close menu"
                        on:click=move |_| close_menu(state, MenuEvent::CloseButton)
                    >
                        "✕"
                    </button>
                </div>

                <button
                    id="nav-toggle"
                    node_ref=toggle_ref
                    class=move || if state.menu.get().is_open() { "nav__toggle active" } else { "nav__toggle" }
                    aria-label="Open menu"
                    on:click=move |_| state.menu.update(|menu| {
                        menu.handle(MenuEvent::Toggle);
                    })
                >
                    "☰"
                </button>
            </nav>
        </header>
    }
}

fn close_menu(state: GlobalState, event: MenuEvent) {
    if state.menu.get_untracked().is_open() {
        state.menu.update(|menu| {
            menu.handle(event);
        });
    }
}

fn lock_body_scroll(locked: bool) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let overflow = if locked { "hidden" } else { "" };
    let _ = body.style().set_property("overflow", overflow);
}

/// Geometry of every `section[id]` on the page
fn page_sections() -> Vec<SectionBounds> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| SectionBounds::new(el.id(), el.offset_top() as f64, el.offset_height() as f64))
        .collect()
}

fn scroll_to_section(id: &str, header_height: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let target = window
        .document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    if let Some(section) = target {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(scroll_target(section.offset_top() as f64, header_height));
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
