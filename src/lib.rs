//! Single page site for Mon Traiteur. Pages are rendered into the mount element in the browser
//! and navigated with the location fragment (eg `#/devis`).

pub mod config;
pub mod dom;
mod error;
pub mod forms;
pub mod pages;
pub mod reveal;
pub mod router;
pub mod shell;

use std::{cell::RefCell, rc::Rc};

use wasm_bindgen::{prelude::*, JsCast};
use web_sys::HtmlElement;

use config::{SiteConfig, MOUNT_ID};
pub use error::SiteError;
use forms::{EmailJs, MailSender};
use shell::Shell;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Configure the panic hook to log to console.error
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    // A logger may already be installed by the host
    let _ = console_log::init_with_level(log::Level::Debug);

    start().map_err(JsValue::from)
}

/// Render the page named by the current location, and follow every later navigation.
fn start() -> Result<(), SiteError> {
    let window = web_sys::window().ok_or(SiteError::MissingGlobal("window"))?;
    let document = window
        .document()
        .ok_or(SiteError::MissingGlobal("document"))?;

    let mount = document
        .get_element_by_id(MOUNT_ID)
        .ok_or_else(|| SiteError::MissingElement(MOUNT_ID.to_string()))?;

    let config = match mount.dyn_ref::<HtmlElement>() {
        Some(mount) => SiteConfig::from_dataset(&mount.dataset())?,
        None => SiteConfig::default(),
    };
    log::debug!("starting with {config:?}");

    let sender: Rc<dyn MailSender> = Rc::new(EmailJs::new(&config.mail));
    let shell = Rc::new(Shell::new(&document, &mount, config, sender));

    let router = Rc::new(RefCell::new(pages::router(&shell)));
    router
        .borrow_mut()
        .navigate(&window.location().hash().unwrap_or_default());
    router.borrow().render();

    router::listen(&window, &router)?;

    Ok(())
}
