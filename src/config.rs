use web_sys::DomStringMap;

use crate::{reveal::RevealOptions, SiteError};

/// Id of the element that the site renders into.
pub const MOUNT_ID: &str = "app";

/// Identifiers passed to the mail delivery service with every submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub service_id: String,
    pub template_id: String,

    /// Public key used to initialise the service, if the host page doesn't do it itself.
    pub public_key: Option<String>,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            service_id: "service_yby0s41".to_string(),
            template_id: "template_awpwg28".to_string(),
            public_key: None,
        }
    }
}

/// Runtime configuration of the site. Defaults can be overridden by `data-*` attributes on the
/// mount element, eg `<div id="app" data-reveal-delay="200">`.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub mail: MailConfig,
    pub reveal: RevealOptions,

    /// Delay between mounting a page and starting the reveal pass, in milliseconds.
    pub reveal_delay_ms: u32,

    /// Top margin of the `main` wrapper, clearing the fixed header.
    pub content_offset: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            mail: MailConfig::default(),
            reveal: RevealOptions::default(),
            reveal_delay_ms: 100,
            content_offset: "80px".to_string(),
        }
    }
}

impl SiteConfig {
    /// Read overrides from the dataset of the mount element.
    pub fn from_dataset(dataset: &DomStringMap) -> Result<Self, SiteError> {
        Self::default().with_overrides(|key| dataset.get(key))
    }

    /// Apply overrides provided by `lookup`, which is called with dataset keys (the camel case
    /// form of the `data-*` attribute names).
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, SiteError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(service_id) = lookup("mailService") {
            self.mail.service_id = service_id;
        }

        if let Some(template_id) = lookup("mailTemplate") {
            self.mail.template_id = template_id;
        }

        if let Some(public_key) = lookup("mailPublicKey") {
            self.mail.public_key = Some(public_key).filter(|key| !key.trim().is_empty());
        }

        if let Some(threshold) = lookup("revealThreshold") {
            self.reveal.threshold = threshold
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|threshold| (0.0..=1.0).contains(threshold))
                .ok_or(SiteError::Config {
                    key: "data-reveal-threshold",
                    value: threshold,
                })?;
        }

        if let Some(margin) = lookup("revealMargin") {
            self.reveal.root_margin = margin;
        }

        if let Some(delay) = lookup("revealDelay") {
            self.reveal_delay_ms = delay.trim().parse().map_err(|_| SiteError::Config {
                key: "data-reveal-delay",
                value: delay,
            })?;
        }

        Ok(self)
    }
}
