//! Smooth anchor scrolling plus the per-tick scroll state: active nav link,
//! progress bar width and the navbar's scrolled class.

use gloo_console::log;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::geometry::{self, ScrollSnapshot, SectionBounds};

pub fn attach(document: &Document) {
    if document.get_element_by_id("navbar").is_none()
        || document.get_element_by_id("scrollProgress").is_none()
    {
        log!("navbar or scroll progress element not found; scroll styling will be partial");
    }
    attach_anchor_clicks(document);
    attach_scroll_listener(document);
}

/// Intercepts every in-page anchor and replaces the default jump with a
/// smooth scroll that leaves the fixed header clear. An anchor whose fragment
/// does not resolve stays inert (default is still suppressed).
fn attach_anchor_clicks(document: &Document) {
    let anchors = match document.query_selector_all(r##"a[href^="#"]"##) {
        Ok(anchors) => anchors,
        Err(_) => return,
    };

    for i in 0..anchors.length() {
        let node = match anchors.get(i) {
            Some(node) => node,
            None => continue,
        };
        let anchor: Element = node.unchecked_into();

        let document = document.clone();
        let link = anchor.clone();
        let on_click = Closure::wrap(Box::new(move |event: web_sys::Event| {
            event.prevent_default();

            let href = match link.get_attribute("href") {
                Some(href) => href,
                None => return,
            };
            if let Some(target) = document.query_selector(&href).ok().flatten() {
                let window = web_sys::window().unwrap();
                let page_y = window.page_y_offset().unwrap_or(0.0);
                let top =
                    geometry::anchor_scroll_top(target.get_bounding_client_rect().top(), page_y);

                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        }) as Box<dyn FnMut(web_sys::Event)>);

        anchor
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .unwrap();
        on_click.forget();
    }
}

fn attach_scroll_listener(document: &Document) {
    let window = web_sys::window().unwrap();

    let document = document.clone();
    let window_handle = window.clone();
    let on_scroll = Closure::wrap(Box::new(move || {
        update_active_link(&document);
        update_progress(&document, &window_handle);
        update_navbar(&document, &window_handle);
    }) as Box<dyn FnMut()>);

    window
        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
        .unwrap();
    on_scroll.forget();
}

/// Fresh viewport-relative bounds for every identified section.
fn measure_sections(document: &Document) -> Vec<SectionBounds> {
    let mut bounds = Vec::new();
    let sections = match document.query_selector_all("section") {
        Ok(sections) => sections,
        Err(_) => return bounds,
    };
    for i in 0..sections.length() {
        let node = match sections.get(i) {
            Some(node) => node,
            None => continue,
        };
        let section: Element = node.unchecked_into();
        let id = match section.get_attribute("id") {
            Some(id) => id,
            None => continue,
        };
        bounds.push(SectionBounds {
            id,
            top: section.get_bounding_client_rect().top(),
            height: section.client_height() as f64,
        });
    }
    bounds
}

fn update_active_link(document: &Document) {
    let sections = measure_sections(document);
    let current = geometry::current_section(&sections).map(|id| format!("#{}", id));

    let links = match document.query_selector_all(".nav-link") {
        Ok(links) => links,
        Err(_) => return,
    };
    for i in 0..links.length() {
        let node = match links.get(i) {
            Some(node) => node,
            None => continue,
        };
        let link: Element = node.unchecked_into();
        let _ = link.class_list().remove_1("active");
        if let Some(ref current) = current {
            if link.get_attribute("href").as_deref() == Some(current.as_str()) {
                let _ = link.class_list().add_1("active");
            }
        }
    }
}

fn update_progress(document: &Document, window: &Window) {
    let bar = match document.get_element_by_id("scrollProgress") {
        Some(bar) => bar,
        None => return,
    };
    let root = match document.document_element() {
        Some(root) => root,
        None => return,
    };

    let snapshot = ScrollSnapshot {
        scroll_top: window.page_y_offset().unwrap_or(0.0),
        scroll_height: root.scroll_height() as f64,
        viewport_height: window.inner_height().unwrap().as_f64().unwrap_or(0.0),
    };
    let percent = geometry::progress_percent(&snapshot);

    if let Some(bar) = bar.dyn_ref::<HtmlElement>() {
        let _ = bar.style().set_property("width", &format!("{}%", percent));
    }
}

fn update_navbar(document: &Document, window: &Window) {
    let navbar = match document.get_element_by_id("navbar") {
        Some(navbar) => navbar,
        None => return,
    };
    if geometry::navbar_scrolled(window.scroll_y().unwrap_or(0.0)) {
        let _ = navbar.class_list().add_1("scrolled");
    } else {
        let _ = navbar.class_list().remove_1("scrolled");
    }
}
