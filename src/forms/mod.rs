//! Lead generation forms. Fields are read synchronously when a form is submitted, then the
//! record is handed to a [`MailSender`] and the outcome is shown in the form's status region.

mod dom;
mod mail;

use std::{collections::BTreeMap, fmt, rc::Rc};

use js_sys::{Object, Reflect};
use wasm_bindgen::JsValue;

use crate::{
    config::MailConfig,
    dom::{el, Element},
    SiteError,
};
pub use dom::{attach, DomForm};
pub use mail::{EmailJs, MailError, MailSender};

/// Checkbox group of the quote form listing the courses wanted.
pub const CATERING_NEEDS: &str = "catering_needs";

/// Checkbox group of the quote form listing rentals wanted.
pub const RENTAL_NEEDS: &str = "rental_needs";

/// Separator used when joining the checked values of a group.
pub const GROUP_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    Quote,
}

impl FormKind {
    pub const ALL: [FormKind; 2] = [FormKind::Contact, FormKind::Quote];

    pub fn form_id(self) -> &'static str {
        match self {
            FormKind::Contact => "contactForm",
            FormKind::Quote => "quoteForm",
        }
    }

    /// Id of the region that displays the outcome of a submission.
    pub fn status_id(self) -> &'static str {
        match self {
            FormKind::Contact => "contactStatus",
            FormKind::Quote => "quoteStatus",
        }
    }

    /// Checkbox groups that are sent as a single joined value.
    pub fn checkbox_groups(self) -> &'static [&'static str] {
        match self {
            FormKind::Contact => &[],
            FormKind::Quote => &[CATERING_NEEDS, RENTAL_NEEDS],
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            FormKind::Contact => "✓ Message envoyé avec succès! Nous vous contacterons bientôt.",
            FormKind::Quote => "✓ Devis envoyé avec succès! Nous vous contacterons bientôt.",
        }
    }

    pub fn failure_message(self) -> &'static str {
        "✗ Erreur lors de l'envoi. Veuillez réessayer ou nous appeler directement."
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.form_id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Any control whose value is sent as is (inputs, text areas, selects).
    Text,
    Checkbox { checked: bool },
}

/// Snapshot of a named form control at the moment of submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: String,
    pub kind: FieldKind,
}

impl FormField {
    pub fn text<N, V>(name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            value: value.into(),
            kind: FieldKind::Text,
        }
    }

    pub fn checkbox<N, V>(name: N, value: V, checked: bool) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            value: value.into(),
            kind: FieldKind::Checkbox { checked },
        }
    }
}

/// Flat mapping of field name to value, built fresh on every submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionRecord(BTreeMap<String, String>);

impl SubmissionRecord {
    /// Build a record from fields in document order. Checkboxes belonging to one of `groups` are
    /// joined into a single value of their checked values, in document order. Groups with nothing
    /// checked are sent as an empty string. Other checkboxes and radios sharing a name keep the
    /// checked value, or an empty string if none is checked. Unnamed fields are skipped.
    pub fn collect(fields: &[FormField], groups: &[&str]) -> Self {
        let mut record = BTreeMap::new();

        for field in fields.iter().filter(|field| !field.name.is_empty()) {
            if groups.contains(&field.name.as_str()) {
                continue;
            }

            match field.kind {
                FieldKind::Text | FieldKind::Checkbox { checked: true } => {
                    record.insert(field.name.clone(), field.value.clone());
                }
                // An unchecked option never replaces a choice made under the same name
                FieldKind::Checkbox { checked: false } => {
                    record.entry(field.name.clone()).or_default();
                }
            }
        }

        for group in groups {
            let checked = fields
                .iter()
                .filter(|field| {
                    field.name == *group && field.kind == FieldKind::Checkbox { checked: true }
                })
                .map(|field| field.value.as_str())
                .collect::<Vec<_>>();

            record.insert(group.to_string(), checked.join(GROUP_SEPARATOR));
        }

        Self(record)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Convert into a plain JS object, as expected by the mail service.
    pub fn to_js_object(&self) -> Result<Object, JsValue> {
        let object = Object::new();

        for (name, value) in self.iter() {
            Reflect::set(&object, &JsValue::from_str(name), &JsValue::from_str(value))?;
        }

        Ok(object)
    }
}

/// Outcome shown in the status region after a send attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Success(&'static str),
    Failure(&'static str),
}

impl FormStatus {
    pub fn message(&self) -> &'static str {
        match self {
            FormStatus::Success(message) | FormStatus::Failure(message) => message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FormStatus::Success(_))
    }

    /// Content placed in the status region.
    pub fn render(&self) -> Element {
        let class_name = match self {
            FormStatus::Success(_) => "success-message",
            FormStatus::Failure(_) => "error-message",
        };

        el("div").class(class_name).text(self.message())
    }
}

/// A form as seen by its handler.
pub trait FormView {
    /// Current state of every control in the form, in document order.
    fn fields(&self) -> Vec<FormField>;

    /// Replace the content of the status region.
    fn show_status(&self, status: &FormStatus) -> Result<(), SiteError>;

    /// Return every control to its empty or default state.
    fn reset(&self);
}

/// Submission behaviour shared by both forms.
pub struct FormHandler<M>
where
    M: MailSender + ?Sized,
{
    kind: FormKind,
    mail: MailConfig,
    sender: Rc<M>,
}

impl<M> FormHandler<M>
where
    M: MailSender + ?Sized,
{
    pub fn new(kind: FormKind, mail: MailConfig, sender: Rc<M>) -> Self {
        Self { kind, mail, sender }
    }

    /// Read the submission record from the form. Must run within the submit event, before
    /// control is yielded.
    pub fn collect<V>(&self, view: &V) -> SubmissionRecord
    where
        V: FormView + ?Sized,
    {
        SubmissionRecord::collect(&view.fields(), self.kind.checkbox_groups())
    }

    /// Send a collected record and report the outcome. The form is reset only after a successful
    /// send. Send failures are not errors of this method, they are reported through the status.
    pub async fn deliver<V>(
        &self,
        view: &V,
        record: SubmissionRecord,
    ) -> Result<FormStatus, SiteError>
    where
        V: FormView + ?Sized,
    {
        let result = self
            .sender
            .send(&self.mail.service_id, &self.mail.template_id, &record)
            .await;

        let status = match result {
            Ok(()) => {
                log::debug!("{} sent with {} fields", self.kind, record.len());
                FormStatus::Success(self.kind.success_message())
            }
            Err(error) => {
                log::error!("{} failed to send: {error}", self.kind);
                FormStatus::Failure(self.kind.failure_message())
            }
        };

        view.show_status(&status)?;

        if status.is_success() {
            view.reset();
        }

        Ok(status)
    }

    /// Collect and deliver in one step.
    pub async fn submit<V>(&self, view: &V) -> Result<FormStatus, SiteError>
    where
        V: FormView + ?Sized,
    {
        let record = self.collect(view);
        self.deliver(view, record).await
    }
}
