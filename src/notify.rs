//! Transient top-right notifications. At most one is on screen at a time:
//! showing a new one removes whatever is still in the document first.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

const SLIDE_IN_DELAY_MS: u32 = 100;
const DISMISS_AFTER_MS: u32 = 5_000;
const SLIDE_OUT_MS: u32 = 300;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NotifyKind {
    Success,
    Error,
}

impl NotifyKind {
    fn class_name(self) -> &'static str {
        match self {
            NotifyKind::Success => "notification success",
            NotifyKind::Error => "notification error",
        }
    }

    fn accent(self) -> &'static str {
        match self {
            NotifyKind::Success => "var(--accent-color)",
            NotifyKind::Error => "#ef4444",
        }
    }
}

pub fn show(document: &Document, message: &str, kind: NotifyKind) {
    // Drop any notification still on screen, including ones mid-animation.
    if let Ok(existing) = document.query_selector_all(".notification") {
        for i in 0..existing.length() {
            if let Some(node) = existing.get(i) {
                if let Some(element) = node.dyn_ref::<Element>() {
                    element.remove();
                }
            }
        }
    }

    let element = match document.create_element("div") {
        Ok(element) => element,
        Err(_) => return,
    };
    element.set_class_name(kind.class_name());
    element.set_text_content(Some(message));

    let element: HtmlElement = match element.dyn_into() {
        Ok(element) => element,
        Err(_) => return,
    };
    element.style().set_css_text(&format!(
        "position: fixed; \
         top: 100px; \
         right: 20px; \
         background: {}; \
         color: white; \
         padding: 15px 20px; \
         border-radius: 10px; \
         font-weight: 500; \
         z-index: 10000; \
         transform: translateX(100%); \
         transition: transform 0.3s ease; \
         max-width: 300px; \
         box-shadow: 0 10px 30px rgba(0, 0, 0, 0.3);",
        kind.accent()
    ));

    if let Some(body) = document.body() {
        let _ = body.append_child(&element);
    }

    // Slide in once the transition property has taken effect.
    let slide_in = element.clone();
    Timeout::new(SLIDE_IN_DELAY_MS, move || {
        let _ = slide_in.style().set_property("transform", "translateX(0)");
    })
    .forget();

    // Auto-dismiss: slide out, then detach once the exit transition is done.
    // Timers are never cancelled; removing an already-detached element is a
    // no-op, so a newer notification replacing this one is harmless.
    let dismiss = element.clone();
    Timeout::new(DISMISS_AFTER_MS, move || {
        let _ = dismiss.style().set_property("transform", "translateX(100%)");
        Timeout::new(SLIDE_OUT_MS, move || {
            dismiss.remove();
        })
        .forget();
    })
    .forget();
}
