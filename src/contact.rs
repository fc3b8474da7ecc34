//! Contact form: validation, payload assembly and the fire-and-forget POST.
//!
//! The endpoint is opaque (`no-cors`), so the response is never inspected;
//! transport failure is the only error signal after validation passes.

use std::cell::Cell;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use chrono::Local;
use gloo_console::{error, log};
use gloo_net::http::Request;
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement,
    RequestMode,
};

use crate::config;
use crate::notify::{self, NotifyKind};

const SENDING_LABEL: &str = "Sending...";
const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";
const FAILURE_MESSAGE: &str = "Sorry, there was an error sending your message. Please try again.";

/// Trimmed field values as read from the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    MissingField,
    InvalidEmail,
}

impl FormError {
    pub fn message(self) -> &'static str {
        match self {
            FormError::MissingField => "Please fill in all fields",
            FormError::InvalidEmail => "Please enter a valid email address",
        }
    }
}

#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    name: String,
    email: String,
    subject: String,
    message: String,
    timestamp: String,
    user_agent: String,
    referrer: String,
}

impl ContactPayload {
    pub fn new(
        fields: ContactFields,
        timestamp: String,
        user_agent: String,
        referrer: String,
    ) -> Self {
        let referrer = if referrer.is_empty() {
            "Direct".to_string()
        } else {
            referrer
        };
        ContactPayload {
            name: fields.name,
            email: fields.email,
            subject: fields.subject,
            message: fields.message,
            timestamp,
            user_agent,
            referrer,
        }
    }
}

/// Transport failure, the only signal the opaque endpoint can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError(String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        TransportError(message.into())
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub type SubmitFuture = Pin<Box<dyn Future<Output = Result<(), TransportError>>>>;

/// Delivery capability for the form payload: success or failure only, the
/// response body is never readable.
pub trait Transport {
    fn submit(&self, payload: &ContactPayload) -> SubmitFuture;
}

/// Fire-and-forget `no-cors` POST to the fixed endpoint.
pub struct HttpTransport;

impl Transport for HttpTransport {
    fn submit(&self, payload: &ContactPayload) -> SubmitFuture {
        let request = Request::post(config::contact_endpoint())
            .mode(RequestMode::NoCors)
            .header("Content-Type", "application/json")
            .json(payload);
        Box::pin(async move {
            request
                .map_err(|e| TransportError::new(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError::new(e.to_string()))?;
            Ok(())
        })
    }
}

/// Presence first, then email shape; the form is left untouched either way.
pub fn validate(fields: &ContactFields) -> Result<(), FormError> {
    if fields.name.is_empty()
        || fields.email.is_empty()
        || fields.subject.is_empty()
        || fields.message.is_empty()
    {
        return Err(FormError::MissingField);
    }
    if !is_valid_email(&fields.email) {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}

/// `local@domain` where both sides are non-empty and whitespace-free, with
/// exactly one `@` and an interior `.` somewhere in the domain.
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if local.chars().any(char::is_whitespace) || domain.chars().any(char::is_whitespace) {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1)
}

pub fn attach(document: &Document) {
    attach_with_transport(document, Rc::new(HttpTransport));
}

pub fn attach_with_transport(document: &Document, transport: Rc<dyn Transport>) {
    let form = match document
        .get_element_by_id("contactForm")
        .and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
    {
        Some(form) => form,
        None => {
            log!("contact form not found, skipping form wiring");
            return;
        }
    };

    // Guards against a second submission racing the disabled button.
    let in_flight = Rc::new(Cell::new(false));

    let document = document.clone();
    let form_handle = form.clone();
    let on_submit = Closure::wrap(Box::new(move |event: web_sys::Event| {
        event.prevent_default();
        if in_flight.get() {
            return;
        }

        let fields = read_fields(&form_handle);
        if let Err(err) = validate(&fields) {
            notify::show(&document, err.message(), NotifyKind::Error);
            return;
        }

        let submit_btn = match document
            .get_element_by_id("submitBtn")
            .and_then(|element| element.dyn_into::<HtmlButtonElement>().ok())
        {
            Some(button) => button,
            None => return,
        };
        let original_label = submit_btn.text_content().unwrap_or_default();
        submit_btn.set_text_content(Some(SENDING_LABEL));
        submit_btn.set_disabled(true);
        in_flight.set(true);

        let payload = build_payload(fields);
        let pending = transport.submit(&payload);
        let document = document.clone();
        let form = form_handle.clone();
        let in_flight = in_flight.clone();
        spawn_local(async move {
            match pending.await {
                Ok(()) => {
                    notify::show(&document, SUCCESS_MESSAGE, NotifyKind::Success);
                    form.reset();
                }
                Err(e) => {
                    error!("contact submission failed:", e.to_string());
                    notify::show(&document, FAILURE_MESSAGE, NotifyKind::Error);
                }
            }
            // Always restore the button, whatever the transport did.
            submit_btn.set_text_content(Some(&original_label));
            submit_btn.set_disabled(false);
            in_flight.set(false);
        });
    }) as Box<dyn FnMut(web_sys::Event)>);

    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .unwrap();
    on_submit.forget();
}

fn read_fields(form: &HtmlFormElement) -> ContactFields {
    ContactFields {
        name: input_value(form, r#"input[name="name"]"#),
        email: input_value(form, r#"input[name="email"]"#),
        subject: input_value(form, r#"input[name="subject"]"#),
        message: textarea_value(form, r#"textarea[name="message"]"#),
    }
}

fn input_value(form: &HtmlFormElement, selector: &str) -> String {
    form.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value().trim().to_string())
        .unwrap_or_default()
}

fn textarea_value(form: &HtmlFormElement, selector: &str) -> String {
    form.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlTextAreaElement>().ok())
        .map(|area| area.value().trim().to_string())
        .unwrap_or_default()
}

fn build_payload(fields: ContactFields) -> ContactPayload {
    let window = web_sys::window().unwrap();
    let user_agent = window.navigator().user_agent().unwrap_or_default();
    let referrer = window
        .document()
        .map(|document| document.referrer())
        .unwrap_or_default();
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    ContactPayload::new(fields, timestamp, user_agent, referrer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, email: &str, subject: &str, message: &str) -> ContactFields {
        ContactFields {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn accepts_simple_addresses() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@c.com"));
        assert!(!is_valid_email("a@"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@com."));
    }

    #[test]
    fn validate_requires_every_field() {
        assert_eq!(
            validate(&fields("", "a@b.co", "S", "M")),
            Err(FormError::MissingField)
        );
        assert_eq!(
            validate(&fields("A", "", "S", "M")),
            Err(FormError::MissingField)
        );
        assert_eq!(
            validate(&fields("A", "a@b.co", "", "M")),
            Err(FormError::MissingField)
        );
        assert_eq!(
            validate(&fields("A", "a@b.co", "S", "")),
            Err(FormError::MissingField)
        );
    }

    #[test]
    fn missing_field_reported_before_bad_email() {
        assert_eq!(
            validate(&fields("", "not-an-email", "S", "M")),
            Err(FormError::MissingField)
        );
    }

    #[test]
    fn validate_accepts_complete_input() {
        assert_eq!(validate(&fields("A", "a@b.co", "S", "M")), Ok(()));
        assert_eq!(
            validate(&fields("A", "bad-email", "S", "M")),
            Err(FormError::InvalidEmail)
        );
    }

    #[test]
    fn payload_serializes_with_camel_case_keys() {
        let payload = ContactPayload::new(
            fields("A", "a@b.co", "S", "M"),
            "2026-08-30 12:00:00".to_string(),
            "TestAgent/1.0".to_string(),
            "https://example.com/".to_string(),
        );
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["name"], "A");
        assert_eq!(value["userAgent"], "TestAgent/1.0");
        assert_eq!(value["referrer"], "https://example.com/");
        assert_eq!(value["timestamp"], "2026-08-30 12:00:00");
        assert!(value.get("user_agent").is_none());
    }

    #[test]
    fn empty_referrer_becomes_direct_sentinel() {
        let payload = ContactPayload::new(
            fields("A", "a@b.co", "S", "M"),
            "ts".to_string(),
            "ua".to_string(),
            String::new(),
        );
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["referrer"], "Direct");
    }
}
