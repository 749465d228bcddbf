use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised while bootstrapping or rendering the site.
#[derive(Debug, Error)]
pub enum SiteError {
    /// An exception thrown by a browser API.
    #[error("JS exception: {0}")]
    Js(String),

    #[error("missing browser global `{0}`")]
    MissingGlobal(&'static str),

    /// An element that a template is expected to produce is not in the document.
    #[error("no element with id `{0}` in the document")]
    MissingElement(String),

    #[error("invalid value `{value}` for `{key}`")]
    Config { key: &'static str, value: String },

    #[error("invalid page `{page}`: {reason}")]
    InvalidPage { page: String, reason: &'static str },
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        Self::Js(describe_js(&value))
    }
}

impl From<SiteError> for JsValue {
    fn from(error: SiteError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

/// Readable description of a thrown JS value, preferring its string form.
pub fn describe_js(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
