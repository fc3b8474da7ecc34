//! Reveal-on-scroll: an IntersectionObserver marks `.fade-in` elements
//! visible the first time they enter the viewport, and the skills and
//! projects sections each kick off a staggered cascade over their items.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

const SKILL_STAGGER_MS: u32 = 100;
const SKILL_RISE_PX: f64 = 20.0;
const CARD_STAGGER_MS: u32 = 150;
const CARD_RISE_PX: f64 = 30.0;
// Lets the transition property land before the visible state flips.
const GRACE_MS: u32 = 50;

pub fn attach(document: &Document) {
    let doc = document.clone();
    let on_intersect = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let _ = target.class_list().add_1("visible");

                if target.id() == "about" {
                    stagger_items(
                        &doc,
                        ".skill-item",
                        SKILL_STAGGER_MS,
                        SKILL_RISE_PX,
                        "all 0.5s ease",
                    );
                }
                if target.id() == "projects" {
                    stagger_items(
                        &doc,
                        ".project-card",
                        CARD_STAGGER_MS,
                        CARD_RISE_PX,
                        "all 0.6s ease",
                    );
                }

                // Reveal is one-shot; stop watching this element.
                observer.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -50px 0px");

    let observer = match IntersectionObserver::new_with_options(
        on_intersect.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(_) => return,
    };
    on_intersect.forget();

    if let Ok(elements) = document.query_selector_all(".fade-in") {
        for i in 0..elements.length() {
            if let Some(node) = elements.get(i) {
                let element: Element = node.unchecked_into();
                observer.observe(&element);
            }
        }
    }
}

/// Two-phase staggered cascade: at each item's offset, hide it and install
/// the transition; one grace period later, flip it to its settled state.
fn stagger_items(
    document: &Document,
    selector: &str,
    stagger_ms: u32,
    rise_px: f64,
    transition: &str,
) {
    let items = match document.query_selector_all(selector) {
        Ok(items) => items,
        Err(_) => return,
    };

    for index in 0..items.length() {
        let node = match items.get(index) {
            Some(node) => node,
            None => continue,
        };
        let item: HtmlElement = match node.dyn_into() {
            Ok(item) => item,
            Err(_) => continue,
        };

        let transition = transition.to_string();
        Timeout::new(index * stagger_ms, move || {
            let style = item.style();
            let _ = style.set_property("opacity", "0");
            let _ = style.set_property("transform", &format!("translateY({}px)", rise_px));
            let _ = style.set_property("transition", &transition);

            Timeout::new(GRACE_MS, move || {
                let style = item.style();
                let _ = style.set_property("opacity", "1");
                let _ = style.set_property("transform", "translateY(0)");
            })
            .forget();
        })
        .forget();
    }
}
