use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::{prelude::Closure, JsCast};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Element, Event, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

use super::{FormField, FormHandler, FormKind, FormStatus, FormView, MailSender};
use crate::{
    config::MailConfig,
    dom::{EventType, Location},
    SiteError,
};

/// A mounted form and its status region.
pub struct DomForm {
    document: Document,
    form: HtmlFormElement,
    status: Element,
}

impl DomForm {
    /// Look up the form of the provided kind. Returns [`None`] if the current page has no such
    /// form, and an error if the form is present without its status region.
    pub fn find(document: &Document, kind: FormKind) -> Result<Option<Self>, SiteError> {
        let Some(form) = document.get_element_by_id(kind.form_id()) else {
            return Ok(None);
        };

        let form = form
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| SiteError::MissingElement(kind.form_id().to_string()))?;

        let status = document
            .get_element_by_id(kind.status_id())
            .ok_or_else(|| SiteError::MissingElement(kind.status_id().to_string()))?;

        Ok(Some(Self {
            document: document.clone(),
            form,
            status,
        }))
    }
}

impl FormView for DomForm {
    fn fields(&self) -> Vec<FormField> {
        let elements = self.form.elements();

        (0..elements.length())
            .filter_map(|index| elements.item(index))
            .filter_map(|element| read_field(&element))
            .collect()
    }

    fn show_status(&self, status: &FormStatus) -> Result<(), SiteError> {
        let location = Location::parent(&self.status);

        location.clear()?;
        location.mount(&status.render().create_element(&self.document)?)?;

        Ok(())
    }

    fn reset(&self) {
        self.form.reset();
    }
}

/// Snapshot a form control. Buttons and unnamed controls are skipped.
fn read_field(element: &Element) -> Option<FormField> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        let name = input.name();

        return match input.type_().as_str() {
            _ if name.is_empty() => None,
            "submit" | "button" | "reset" | "image" => None,
            "checkbox" | "radio" => {
                Some(FormField::checkbox(name, input.value(), input.checked()))
            }
            _ => Some(FormField::text(name, input.value())),
        };
    }

    let (name, value) = if let Some(text_area) = element.dyn_ref::<HtmlTextAreaElement>() {
        (text_area.name(), text_area.value())
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        (select.name(), select.value())
    } else {
        return None;
    };

    (!name.is_empty()).then(|| FormField::text(name, value))
}

/// Bind submit handlers to every known form present in the document. Returns the number of forms
/// bound.
pub fn attach(
    document: &Document,
    sender: &Rc<dyn MailSender>,
    mail: &MailConfig,
) -> Result<usize, SiteError> {
    let mut attached = 0;

    for kind in FormKind::ALL {
        let Some(form) = DomForm::find(document, kind)? else {
            continue;
        };

        let handler = Rc::new(FormHandler::new(kind, mail.clone(), Rc::clone(sender)));

        // The closure looks the form up again rather than holding it, so JS can free both once the
        // page is replaced
        let callback: Function = Closure::<dyn Fn(_)>::new({
            let document = document.clone();

            move |event: Event| {
                event.prevent_default();

                let view = match DomForm::find(&document, kind) {
                    Ok(Some(view)) => view,
                    Ok(None) => return,
                    Err(error) => {
                        log::error!("cannot submit {kind}: {error}");
                        return;
                    }
                };

                let record = handler.collect(&view);

                let handler = Rc::clone(&handler);
                spawn_local(async move {
                    if let Err(error) = handler.deliver(&view, record).await {
                        log::error!("failed to report {kind} outcome: {error}");
                    }
                });
            }
        })
        .into_js_value()
        .unchecked_into();

        form.form
            .add_event_listener_with_callback(EventType::Submit.as_str(), &callback)?;

        attached += 1;
    }

    Ok(attached)
}
