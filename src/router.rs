use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
};

use wasm_bindgen::{prelude::Closure, JsCast};
use web_sys::{Event, ScrollBehavior, ScrollToOptions, Window};

use crate::{dom::EventType, SiteError};

/// Path rendered for an empty fragment, and used as the fallback for unknown paths.
pub const ROOT_PATH: &str = "/";

/// Callback that renders a page.
pub type RouteHandler = Rc<dyn Fn()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterState {
    Idle,
    Rendering,
}

/// Resets the router to [`RouterState::Idle`] once a render completes, including if the handler
/// panics.
struct RenderGuard<'a>(&'a Cell<RouterState>);

impl Drop for RenderGuard<'_> {
    fn drop(&mut self) {
        self.0.set(RouterState::Idle);
    }
}

/// Hash fragment router. Owns the route table and the current path, which is only changed through
/// [`Router::navigate()`] and only read by [`Router::render()`].
pub struct Router {
    routes: HashMap<String, RouteHandler>,
    current_path: String,
    state: Cell<RouterState>,
}

impl Router {
    /// Create an empty router, positioned at the root path.
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
            current_path: ROOT_PATH.to_string(),
            state: Cell::new(RouterState::Idle),
        }
    }

    /// Register a handler for a path. Registering the same path again replaces the handler.
    pub fn register<S, F>(&mut self, path: S, handler: F)
    where
        S: AsRef<str>,
        F: 'static + Fn(),
    {
        self.routes
            .insert(path.as_ref().to_string(), Rc::new(handler) as RouteHandler);
    }

    /// Move to the path named by a location fragment (eg `#/services`).
    pub fn navigate(&mut self, fragment: &str) {
        self.current_path = path_from_fragment(fragment);
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn state(&self) -> RouterState {
        self.state.get()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.routes.contains_key(path)
    }

    /// Run the handler for the current path, falling back to the root handler. Returns the path
    /// of the handler that ran, or [`None`] if no handler matched or a render is already running.
    pub fn render(&self) -> Option<&str> {
        if self.state.get() == RouterState::Rendering {
            log::warn!("ignoring render of `{}` during a render", self.current_path);
            return None;
        }

        let (path, handler) = self.resolve()?;

        self.state.set(RouterState::Rendering);
        let _guard = RenderGuard(&self.state);

        log::debug!("rendering `{path}`");
        handler();

        Some(path)
    }

    fn resolve(&self) -> Option<(&str, &RouteHandler)> {
        self.routes
            .get_key_value(self.current_path.as_str())
            .or_else(|| {
                log::warn!("no route for `{}`, using `{ROOT_PATH}`", self.current_path);
                self.routes.get_key_value(ROOT_PATH)
            })
            .map(|(path, handler)| (path.as_str(), handler))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a location fragment to a route path. The leading `#` is dropped, and an empty fragment
/// maps to [`ROOT_PATH`].
pub fn path_from_fragment(fragment: &str) -> String {
    let path = fragment.strip_prefix('#').unwrap_or(fragment);

    if path.is_empty() {
        ROOT_PATH.to_string()
    } else {
        path.to_string()
    }
}

/// Re-render on every `hashchange` of the window, then scroll back to the top of the page.
pub fn listen(window: &Window, router: &Rc<RefCell<Router>>) -> Result<(), SiteError> {
    let callback = Closure::<dyn Fn(_)>::new({
        let window = window.clone();
        let router = Rc::clone(router);

        move |_event: Event| {
            let fragment = window.location().hash().unwrap_or_default();
            router.borrow_mut().navigate(&fragment);
            router.borrow().render();

            scroll_to_top(&window);
        }
    });

    window.add_event_listener_with_callback(
        EventType::HashChange.as_str(),
        callback.as_ref().unchecked_ref(),
    )?;

    // The listener lives for the rest of the page
    callback.forget();

    Ok(())
}

fn scroll_to_top(window: &Window) {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);

    window.scroll_to_with_scroll_to_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Router whose handlers record the name they were registered with.
    fn recording_router(paths: &[&'static str]) -> (Router, Rc<RefCell<Vec<&'static str>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut router = Router::new();

        for &path in paths {
            let calls = Rc::clone(&calls);
            router.register(path, move || calls.borrow_mut().push(path));
        }

        (router, calls)
    }

    #[test]
    fn renders_the_registered_handler() {
        let (mut router, calls) = recording_router(&["/", "/services", "/contact"]);

        router.navigate("#/services");
        assert_eq!(router.render(), Some("/services"));

        router.navigate("#/contact");
        assert_eq!(router.render(), Some("/contact"));

        assert_eq!(*calls.borrow(), ["/services", "/contact"]);
    }

    #[test]
    fn unknown_path_falls_back_to_root() {
        let (mut router, calls) = recording_router(&["/", "/services"]);

        router.navigate("#/nope");
        assert_eq!(router.current_path(), "/nope");
        assert_eq!(router.render(), Some("/"));
        assert_eq!(*calls.borrow(), ["/"]);
    }

    #[test]
    fn nothing_runs_without_root() {
        let (mut router, calls) = recording_router(&["/services"]);

        router.navigate("#/nope");
        assert_eq!(router.render(), None);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn empty_fragment_is_root() {
        assert_eq!(path_from_fragment(""), "/");
        assert_eq!(path_from_fragment("#"), "/");
        assert_eq!(path_from_fragment("#/"), "/");
        assert_eq!(path_from_fragment("#/devis"), "/devis");

        let (mut router, calls) = recording_router(&["/", "/services"]);
        router.navigate("#/services");
        router.navigate("");
        assert_eq!(router.render(), Some("/"));
        assert_eq!(*calls.borrow(), ["/"]);
    }

    #[test]
    fn last_registration_wins() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut router = Router::new();

        for label in ["first", "second"] {
            let calls = Rc::clone(&calls);
            router.register("/", move || calls.borrow_mut().push(label));
        }

        router.render();
        assert_eq!(*calls.borrow(), ["second"]);
    }

    #[test]
    fn render_is_not_reentrant() {
        let router = Rc::new(RefCell::new(Router::new()));
        let nested = Rc::new(Cell::new(None));

        router.borrow_mut().register("/", {
            let router = Rc::clone(&router);
            let nested = Rc::clone(&nested);

            move || {
                let router = router.borrow();
                assert_eq!(router.state(), RouterState::Rendering);
                nested.set(Some(router.render().is_some()));
            }
        });

        assert_eq!(router.borrow().render(), Some("/"));
        assert_eq!(nested.get(), Some(false));
        assert_eq!(router.borrow().state(), RouterState::Idle);
    }
}
