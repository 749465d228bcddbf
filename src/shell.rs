use std::{cell::RefCell, rc::Rc};

use gloo_timers::callback::Timeout;
use web_sys::{Document, IntersectionObserver};

use crate::{
    config::SiteConfig,
    dom::{el, Element, Location, Style},
    forms::{self, MailSender},
    pages::{footer, header},
    reveal, SiteError,
};

/// The three top level children of the mount element, in order: the header, a `main` wrapper
/// around `content` offset below the fixed header, and the footer.
pub fn layout(content: Element, offset: &str) -> [Element; 3] {
    [
        header(),
        el("main")
            .style(Style::new().set("marginTop", offset))
            .child(content),
        footer(),
    ]
}

/// Owns the mount element. Every render replaces its whole content.
pub struct Shell {
    document: Document,
    root: Location,
    config: SiteConfig,
    sender: Rc<dyn MailSender>,

    /// Reveal pass scheduled by the last render. Dropping it cancels the pass.
    pending_reveal: RefCell<Option<Timeout>>,

    /// Observer started by the last reveal pass.
    observer: Rc<RefCell<Option<IntersectionObserver>>>,
}

impl Shell {
    pub fn new(
        document: &Document,
        root: &web_sys::Element,
        config: SiteConfig,
        sender: Rc<dyn MailSender>,
    ) -> Self {
        Self {
            document: document.clone(),
            root: Location::parent(root),
            config,
            sender,
            pending_reveal: RefCell::new(None),
            observer: Rc::new(RefCell::new(None)),
        }
    }

    /// Replace the content of the mount element with the header, `content` and the footer, bind
    /// any forms in `content`, then schedule the reveal pass.
    pub fn render_app(&self, content: Element) -> Result<(), SiteError> {
        self.stop_reveal();
        self.root.clear()?;

        for element in layout(content, &self.config.content_offset) {
            self.root.mount(&element.create_element(&self.document)?)?;
        }

        let bound = forms::attach(&self.document, &self.sender, &self.config.mail)?;
        if bound > 0 {
            log::debug!("bound {bound} forms");
        }

        self.schedule_reveal();

        Ok(())
    }

    /// As [`Shell::render_app()`], logging any failure.
    pub fn show(&self, content: Element) {
        if let Err(error) = self.render_app(content) {
            log::error!("failed to render page: {error}");
        }
    }

    /// Whether a reveal pass has started for the page currently shown.
    pub fn is_observing(&self) -> bool {
        self.observer.borrow().is_some()
    }

    /// Cancel a pending reveal pass, and disconnect the observer of the previous page.
    fn stop_reveal(&self) {
        self.pending_reveal.borrow_mut().take();

        if let Some(observer) = self.observer.borrow_mut().take() {
            observer.disconnect();
        }
    }

    fn schedule_reveal(&self) {
        let document = self.document.clone();
        let options = self.config.reveal.clone();
        let observer = Rc::clone(&self.observer);

        let timeout = Timeout::new(self.config.reveal_delay_ms, move || {
            match reveal::observe(&document, &options) {
                Ok(started) => {
                    if let Some(previous) = observer.borrow_mut().replace(started) {
                        previous.disconnect();
                    }
                }
                Err(error) => log::error!("failed to start reveal pass: {error}"),
            }
        });

        self.pending_reveal.replace(Some(timeout));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_wraps_content_between_header_and_footer() {
        let [header, main, footer] = layout(el("div").id("page").text("contenu"), "80px");

        assert_eq!(header.tag(), "header");
        assert_eq!(main.tag(), "main");
        assert_eq!(footer.tag(), "footer");

        assert_eq!(main.inline_style().get("margin-top"), Some("80px"));
        assert_eq!(main.child_nodes().len(), 1);
        assert_eq!(
            main.find_by_id("page").map(Element::text_content),
            Some("contenu".to_string())
        );
    }

    #[test]
    fn offset_follows_configuration() {
        let [_, main, _] = layout(el("div"), "120px");

        assert_eq!(main.inline_style().get("marginTop"), Some("120px"));
    }
}
