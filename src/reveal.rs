//! One-shot reveal of fade-flagged elements as they scroll into view.

use js_sys::Array;
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::{dom::Style, SiteError};

/// Class marking an element as hidden until it is revealed.
pub const FADE_CLASS: &str = "fade-in-up";

/// Options passed to the [`IntersectionObserver`].
#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that must be visible before it is revealed.
    pub threshold: f64,

    /// Margin around the viewport, in CSS margin syntax.
    pub root_margin: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -100px 0px".to_string(),
        }
    }
}

/// Visual state of a fade-flagged element. Elements start [`FadeState::Hidden`] (styled by the
/// fade class) and move to [`FadeState::Revealed`] at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FadeState {
    #[default]
    Hidden,
    Revealed,
}

impl FadeState {
    /// Advance the state with an observation. The observer's threshold decides when an entry is
    /// reported, so any intersecting entry reveals a hidden element. Returns `true` only for the
    /// observation that reveals the element.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        match self {
            FadeState::Hidden if is_intersecting => {
                *self = FadeState::Revealed;
                true
            }
            _ => false,
        }
    }
}

/// Inline style applied to an element when it is revealed.
pub fn revealed_style() -> Style {
    Style::new()
        .set("opacity", "1")
        .set("transform", "translateY(0)")
}

/// Observe every fade-flagged element currently in the document. Each element is revealed the
/// first time it is reported intersecting, and is then unobserved. Elements inserted later are not
/// picked up by this observer.
pub fn observe(
    document: &Document,
    options: &RevealOptions,
) -> Result<IntersectionObserver, SiteError> {
    let callback = Closure::<dyn Fn(_, _)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry = entry.unchecked_into::<IntersectionObserverEntry>();

                // Revealed elements are unobserved, so every observed element is still hidden
                let mut state = FadeState::Hidden;
                if state.observe(entry.is_intersecting()) {
                    let target = entry.target();

                    if let Err(error) = reveal(&target) {
                        log::error!("failed to reveal element: {error}");
                    }

                    observer.unobserve(&target);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    let elements = document.query_selector_all(&format!(".{FADE_CLASS}"))?;
    for index in 0..elements.length() {
        if let Some(element) = elements
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        {
            observer.observe(&element);
        }
    }

    log::debug!("observing {} fade-in elements", elements.length());

    Ok(observer)
}

/// Move an element to its revealed visual state.
fn reveal(target: &Element) -> Result<(), SiteError> {
    let Some(element) = target.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };

    let style = element.style();
    for (property, value) in revealed_style().iter() {
        style.set_property(property, value)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_hidden_until_intersecting() {
        let mut state = FadeState::default();

        assert!(!state.observe(false));
        assert!(!state.observe(false));
        assert_eq!(state, FadeState::Hidden);

        assert!(state.observe(true));
        assert_eq!(state, FadeState::Revealed);
    }

    #[test]
    fn reveals_exactly_once() {
        let mut state = FadeState::Hidden;

        assert!(state.observe(true));
        assert!(!state.observe(true));
        assert!(!state.observe(false));
        assert_eq!(state, FadeState::Revealed);
    }

    #[test]
    fn revealed_style_resets_offset() {
        let style = revealed_style();

        assert_eq!(style.get("opacity"), Some("1"));
        assert_eq!(style.get("transform"), Some("translateY(0)"));
    }

    #[test]
    fn default_options() {
        let options = RevealOptions::default();

        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin, "0px 0px -100px 0px");
    }
}
