//! Browser tests. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use std::{cell::RefCell, rc::Rc};

use futures::{future::LocalBoxFuture, FutureExt};
use gloo_timers::future::TimeoutFuture;
use js_sys::Promise;
use mon_traiteur::{
    config::SiteConfig,
    dom::{el, Style},
    forms::{MailError, MailSender, SubmissionRecord, CATERING_NEEDS, RENTAL_NEEDS},
    pages::{contact, home, quote},
    reveal::{self, RevealOptions, FADE_CLASS},
    shell::Shell,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

wasm_bindgen_test_configure!(run_in_browser);

/// Sender that records every record it is given, and fails when asked to.
#[derive(Default)]
struct RecordingSender {
    fail: bool,
    sent: RefCell<Vec<(String, SubmissionRecord)>>,
}

impl MailSender for RecordingSender {
    fn send<'a>(
        &'a self,
        service_id: &'a str,
        _template_id: &'a str,
        record: &'a SubmissionRecord,
    ) -> LocalBoxFuture<'a, Result<(), MailError>> {
        async move {
            self.sent
                .borrow_mut()
                .push((service_id.to_string(), record.clone()));

            if self.fail {
                Err(MailError::Rejected("refused".to_string()))
            } else {
                Ok(())
            }
        }
        .boxed_local()
    }
}

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Fresh mount element appended to the body.
fn mount(document: &Document) -> Element {
    let mount = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&mount).unwrap();
    mount
}

fn shell_with(sender: Rc<RecordingSender>) -> (Document, Element, Shell) {
    let document = document();
    let mount = mount(&document);
    let shell = Shell::new(&document, &mount, SiteConfig::default(), sender);

    (document, mount, shell)
}

/// Fixed element carrying the fade class, `top` pixels below the top of the viewport.
fn fading_element(document: &Document, top: i32) -> HtmlElement {
    let element = el("div")
        .class(FADE_CLASS)
        .style(
            Style::new()
                .set("position", "fixed")
                .set("top", format!("{top}px"))
                .set("height", "50px")
                .set("width", "100px"),
        )
        .create_element(document)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();

    document.body().unwrap().append_child(&element).unwrap();
    element
}

fn opacity(element: &HtmlElement) -> String {
    element.style().get_property_value("opacity").unwrap()
}

/// Let spawned tasks run to completion.
async fn settle() {
    for _ in 0..3 {
        JsFuture::from(Promise::resolve(&JsValue::NULL)).await.unwrap();
    }
}

fn set_input(document: &Document, id: &str, value: &str) {
    document
        .get_element_by_id(id)
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap()
        .set_value(value);
}

fn fill_contact_form(document: &Document) {
    set_input(document, "name", "Jean Dupont");
    set_input(document, "email", "jean@example.lu");
    set_input(document, "phone", "+352 123 456");
    document
        .get_element_by_id("message")
        .unwrap()
        .dyn_into::<HtmlTextAreaElement>()
        .unwrap()
        .set_value("Un buffet pour 40 personnes");
}

fn check(form: &Element, value: &str) {
    form.query_selector(&format!("input[value=\"{value}\"]"))
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap()
        .set_checked(true);
}

fn submit(document: &Document, form_id: &str) {
    let form = document.get_element_by_id(form_id).unwrap();
    form.dispatch_event(&Event::new("submit").unwrap()).unwrap();
}

#[wasm_bindgen_test]
fn element_is_materialised() {
    let document = document();

    let element = el("a")
        .class("btn btn-primary")
        .attr("href", "#/devis")
        .attr("required", true)
        .style(Style::new().set("maxWidth", "800px"))
        .text("Obtenir ")
        .child(None::<mon_traiteur::dom::Element>)
        .child(el("span").text("un Devis"))
        .create_element(&document)
        .unwrap();

    assert_eq!(element.tag_name(), "A");
    assert_eq!(element.class_name(), "btn btn-primary");
    assert_eq!(element.get_attribute("href").as_deref(), Some("#/devis"));
    assert!(element.has_attribute("required"));
    assert_eq!(element.child_nodes().length(), 2);
    assert_eq!(element.text_content().as_deref(), Some("Obtenir un Devis"));

    let style = element.dyn_ref::<HtmlElement>().unwrap().style();
    assert_eq!(style.get_property_value("max-width").unwrap(), "800px");
}

#[wasm_bindgen_test]
fn render_replaces_the_whole_root() {
    let (_, mount, shell) = shell_with(Rc::default());

    shell.render_app(home()).unwrap();
    shell.render_app(contact()).unwrap();

    let children = mount.children();
    assert_eq!(children.length(), 3);
    assert_eq!(children.item(0).unwrap().tag_name(), "HEADER");
    assert_eq!(children.item(1).unwrap().tag_name(), "MAIN");
    assert_eq!(children.item(2).unwrap().tag_name(), "FOOTER");

    assert!(mount.query_selector("#contactForm").unwrap().is_some());
    assert!(mount.query_selector(".stats").unwrap().is_none());

    mount.remove();
}

#[wasm_bindgen_test]
fn hamburger_toggles_the_menu() {
    let (document, mount, shell) = shell_with(Rc::default());
    shell.render_app(home()).unwrap();

    let button = document
        .get_element_by_id("hamburgerBtn")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    let nav = document.get_element_by_id("mainNav").unwrap();

    button.click();
    assert!(nav.class_list().contains("active"));
    assert!(button.class_list().contains("active"));

    button.click();
    assert!(!nav.class_list().contains("active"));

    mount.remove();
}

#[wasm_bindgen_test]
async fn successful_submission_resets_the_form() {
    let sender = Rc::new(RecordingSender::default());
    let (document, mount, shell) = shell_with(Rc::clone(&sender));
    shell.render_app(contact()).unwrap();

    fill_contact_form(&document);
    submit(&document, "contactForm");
    settle().await;

    let sent = sender.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "service_yby0s41");
    assert_eq!(sent[0].1.get("name"), Some("Jean Dupont"));
    assert_eq!(sent[0].1.get("message"), Some("Un buffet pour 40 personnes"));

    let status = document.get_element_by_id("contactStatus").unwrap();
    assert!(status.query_selector(".success-message").unwrap().is_some());

    let name = document
        .get_element_by_id("name")
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap();
    assert_eq!(name.value(), "");

    mount.remove();
}

#[wasm_bindgen_test]
async fn failed_submission_keeps_the_fields() {
    let sender = Rc::new(RecordingSender {
        fail: true,
        ..Default::default()
    });
    let (document, mount, shell) = shell_with(Rc::clone(&sender));
    shell.render_app(contact()).unwrap();

    fill_contact_form(&document);
    submit(&document, "contactForm");
    settle().await;

    let status = document.get_element_by_id("contactStatus").unwrap();
    assert!(status.query_selector(".error-message").unwrap().is_some());
    assert_eq!(status.child_element_count(), 1);

    let email = document
        .get_element_by_id("email")
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap();
    assert_eq!(email.value(), "jean@example.lu");

    mount.remove();
}

#[wasm_bindgen_test]
async fn quote_submission_joins_checked_groups() {
    let sender = Rc::new(RecordingSender::default());
    let (document, mount, shell) = shell_with(Rc::clone(&sender));
    shell.render_app(quote()).unwrap();

    set_input(&document, "quoteName", "Marie Weber");
    set_input(&document, "quoteEmail", "marie@example.lu");
    set_input(&document, "quotePhone", "+352 654 321");
    set_input(&document, "quoteGuests", "60");
    set_input(&document, "quoteBudget", "35");
    let form = document.get_element_by_id("quoteForm").unwrap();
    check(&form, "Entrées");
    check(&form, "Desserts");

    submit(&document, "quoteForm");
    settle().await;

    let sent = sender.sent.borrow();
    assert_eq!(sent.len(), 1);

    let record = &sent[0].1;
    assert_eq!(record.get("name"), Some("Marie Weber"));
    assert_eq!(record.get("guests"), Some("60"));
    assert_eq!(record.get(CATERING_NEEDS), Some("Entrées, Desserts"));
    assert_eq!(record.get(RENTAL_NEEDS), Some(""));

    let status = document.get_element_by_id("quoteStatus").unwrap();
    assert!(status.query_selector(".success-message").unwrap().is_some());

    mount.remove();
}

#[wasm_bindgen_test]
async fn reveal_shows_only_elements_in_view() {
    let document = document();
    let visible = fading_element(&document, 0);
    let below = fading_element(&document, 5000);
    assert_eq!(opacity(&visible), "");

    let observer = reveal::observe(&document, &RevealOptions::default()).unwrap();
    TimeoutFuture::new(300).await;

    assert_eq!(opacity(&visible), "1");
    assert_eq!(opacity(&below), "");

    observer.disconnect();
    visible.remove();
    below.remove();
}

#[wasm_bindgen_test]
async fn each_render_restarts_the_reveal_pass() {
    let document = document();
    let mount = mount(&document);
    let config = SiteConfig {
        reveal_delay_ms: 0,
        ..Default::default()
    };
    let shell = Shell::new(
        &document,
        &mount,
        config,
        Rc::new(RecordingSender::default()),
    );

    shell.render_app(home()).unwrap();
    assert!(!shell.is_observing());

    TimeoutFuture::new(50).await;
    assert!(shell.is_observing());

    shell.render_app(contact()).unwrap();
    assert!(!shell.is_observing());

    TimeoutFuture::new(50).await;
    assert!(shell.is_observing());

    mount.remove();
}
