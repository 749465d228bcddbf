use futures::{future::LocalBoxFuture, FutureExt};
use js_sys::{Object, Promise};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::SubmissionRecord;
use crate::{config::MailConfig, error::describe_js};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MailError {
    /// The service was reached, but the send failed.
    #[error("mail delivery rejected: {0}")]
    Rejected(String),

    /// The service could not be called, eg its script isn't loaded.
    #[error("mail delivery unavailable: {0}")]
    Unavailable(String),
}

/// External service that delivers submission records by email.
pub trait MailSender {
    /// Send a record using the provided service and template. Resolves once the service has
    /// accepted or refused the record.
    fn send<'a>(
        &'a self,
        service_id: &'a str,
        template_id: &'a str,
        record: &'a SubmissionRecord,
    ) -> LocalBoxFuture<'a, Result<(), MailError>>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = emailjs, js_name = init, catch)]
    fn emailjs_init(public_key: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = emailjs, js_name = send, catch)]
    fn emailjs_send(service_id: &str, template_id: &str, params: &Object)
        -> Result<Promise, JsValue>;
}

/// [`MailSender`] backed by the EmailJS browser SDK, loaded by the host page as the global
/// `emailjs`.
pub struct EmailJs;

impl EmailJs {
    /// Create the sender, initialising the SDK when a public key is configured. A failed
    /// initialisation is logged, and surfaces again on the first send.
    pub fn new(config: &MailConfig) -> Self {
        if let Some(public_key) = &config.public_key {
            if let Err(error) = emailjs_init(public_key) {
                log::warn!("failed to initialise emailjs: {}", describe_js(&error));
            }
        }

        Self
    }
}

impl MailSender for EmailJs {
    fn send<'a>(
        &'a self,
        service_id: &'a str,
        template_id: &'a str,
        record: &'a SubmissionRecord,
    ) -> LocalBoxFuture<'a, Result<(), MailError>> {
        async move {
            let unavailable = |error: JsValue| MailError::Unavailable(describe_js(&error));

            let params = record.to_js_object().map_err(unavailable)?;
            let promise = emailjs_send(service_id, template_id, &params).map_err(unavailable)?;

            JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|error| MailError::Rejected(describe_js(&error)))
        }
        .boxed_local()
    }
}
