//! Reveal on Scroll Component
//!
//! Binds an `IntersectionObserver` to the animated elements of the page.
//! Renders nothing.

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use genealina::site::reveal::{
    reveal_selector, REVEALED_CLASS, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD,
};
use genealina::RevealTracker;

const KEY_ATTRIBUTE: &str = "data-reveal";

type EntryCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

#[component]
pub fn ScrollReveal() -> impl IntoView {
    let binding: Rc<RefCell<Option<(IntersectionObserver, EntryCallback)>>> =
        Rc::new(RefCell::new(None));

    {
        let binding = Rc::clone(&binding);
        // Wait for the page sections to be in the DOM
        request_animation_frame(move || match observe_page() {
            Ok(bound) => *binding.borrow_mut() = Some(bound),
            Err(e) => web_sys::console::error_1(&e),
        });
    }

    on_cleanup(move || {
        if let Some((observer, _callback)) = binding.borrow_mut().take() {
            observer.disconnect();
        }
    });
}

fn observe_page() -> Result<(IntersectionObserver, EntryCallback), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let tracker = Rc::new(RefCell::new(RevealTracker::<u32>::new()));

    let callback_tracker = Rc::clone(&tracker);
    let callback: EntryCallback = Closure::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some(key) = target
                    .get_attribute(KEY_ATTRIBUTE)
                    .and_then(|k| k.parse::<u32>().ok())
                else {
                    continue;
                };

                if callback_tracker
                    .borrow_mut()
                    .on_intersection(&key, entry.is_intersecting())
                {
                    let _ = target.class_list().add_1(REVEALED_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    let elements = document.query_selector_all(&reveal_selector())?;
    for i in 0..elements.length() {
        let Some(element) = elements.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        if tracker.borrow_mut().observe(i) {
            element.set_attribute(KEY_ATTRIBUTE, &i.to_string())?;
            observer.observe(&element);
        }
    }

    Ok((observer, callback))
}
