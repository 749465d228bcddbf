//! Page templates. Each template is a pure function producing the body of one page; the header
//! and footer are added by the shell.

mod contact;
mod event;
mod home;
mod layout;
mod quote;
mod services;

use std::rc::Rc;

pub use contact::contact;
pub use event::{
    Cta, Description, EventPage, ANNIVERSAIRES, ENTREPRISE, EVENEMENTS_SOCIAUX, FOOD_TRUCK,
};
pub use home::home;
pub use layout::{event_card, footer, header, EventCard, EVENT_CARDS};
pub use quote::quote;
pub use services::services;

use crate::{dom::Element, router::Router, shell::Shell, SiteError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Services,
    Event(&'static EventPage),
    Contact,
    Quote,
}

impl Page {
    pub fn render(&self) -> Element {
        match self {
            Page::Home => home(),
            Page::Services => services(),
            Page::Event(page) => page.render(),
            Page::Contact => contact(),
            Page::Quote => quote(),
        }
    }

    pub fn validate(&self) -> Result<(), SiteError> {
        match self {
            Page::Event(page) => page.validate(),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub page: Page,
}

/// Every page of the site, by path.
pub fn routes() -> [Route; 8] {
    use Page::*;

    [
        Route {
            path: "/",
            page: Home,
        },
        Route {
            path: "/services",
            page: Services,
        },
        Route {
            path: "/entreprise",
            page: Event(&ENTREPRISE),
        },
        Route {
            path: "/food-truck",
            page: Event(&FOOD_TRUCK),
        },
        Route {
            path: "/evenements-sociaux",
            page: Event(&EVENEMENTS_SOCIAUX),
        },
        Route {
            path: "/anniversaires",
            page: Event(&ANNIVERSAIRES),
        },
        Route {
            path: "/contact",
            page: Contact,
        },
        Route {
            path: "/devis",
            page: Quote,
        },
    ]
}

/// Register a handler for each valid route, passing the rendered page to `show`. Invalid pages
/// are logged and left unregistered, so their path falls back to the home page. Returns the
/// number of routes registered.
pub fn register<I, F>(router: &mut Router, routes: I, show: F) -> usize
where
    I: IntoIterator<Item = Route>,
    F: 'static + Clone + Fn(Element),
{
    let mut registered = 0;

    for Route { path, page } in routes {
        if let Err(error) = page.validate() {
            log::error!("not registering `{path}`: {error}");
            continue;
        }

        let show = show.clone();
        router.register(path, move || show(page.render()));
        registered += 1;
    }

    registered
}

/// Build the site router, rendering every page through the shell.
pub fn router(shell: &Rc<Shell>) -> Router {
    let mut router = Router::new();

    let shell = Rc::clone(shell);
    let registered = register(&mut router, routes(), move |content| shell.show(content));
    log::debug!("registered {registered} routes");

    router
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::{forms::FormKind, router::ROOT_PATH};

    fn recording_router<I>(routes: I) -> (Router, Rc<RefCell<Vec<Element>>>)
    where
        I: IntoIterator<Item = Route>,
    {
        let shown = Rc::new(RefCell::new(Vec::new()));
        let mut router = Router::new();

        register(&mut router, routes, {
            let shown = Rc::clone(&shown);
            move |content| shown.borrow_mut().push(content)
        });

        (router, shown)
    }

    fn internal_links(element: &Element) -> Vec<&str> {
        element
            .find_by_tag("a")
            .into_iter()
            .filter_map(|link| link.attribute("href"))
            .filter_map(|href| href.strip_prefix('#'))
            .collect()
    }

    #[test]
    fn every_route_is_registered() {
        let (router, _) = recording_router(routes());

        assert!(router.contains(ROOT_PATH));
        for route in routes() {
            assert!(router.contains(route.path), "missing `{}`", route.path);
        }
    }

    #[test]
    fn every_internal_link_resolves() {
        let (router, _) = recording_router(routes());

        let pages = routes().map(|route| route.page.render());
        for element in pages.iter().chain([&header(), &footer()]) {
            for path in internal_links(element) {
                assert!(router.contains(path), "dead link `#{path}`");
            }
        }
    }

    #[test]
    fn navigation_renders_the_matching_page() {
        let (mut router, shown) = recording_router(routes());

        router.navigate("#/devis");
        assert_eq!(router.render(), Some("/devis"));

        router.navigate("#/nope");
        assert_eq!(router.render(), Some("/"));

        let shown = shown.borrow();
        assert!(shown[0].find_by_id(FormKind::Quote.form_id()).is_some());
        assert_eq!(shown[1].find_by_class("stat-card").len(), 4);
    }

    #[test]
    fn invalid_pages_are_not_registered() {
        static BROKEN: EventPage = EventPage {
            features: &[],
            ..ENTREPRISE
        };

        let mut router = Router::new();
        let registered = register(
            &mut router,
            [
                Route {
                    path: "/",
                    page: Page::Home,
                },
                Route {
                    path: "/broken",
                    page: Page::Event(&BROKEN),
                },
            ],
            |_| (),
        );

        assert_eq!(registered, 1);
        assert!(!router.contains("/broken"));
    }

    #[test]
    fn event_pages_match_their_cards() {
        for card in EVENT_CARDS {
            let path = card.href.trim_start_matches('#');
            let route = routes().into_iter().find(|route| route.path == path).unwrap();

            assert!(matches!(route.page, Page::Event(_)), "`{path}`");
        }
    }

    #[test]
    fn forms_live_on_their_pages() {
        assert!(contact().find_by_id(FormKind::Contact.form_id()).is_some());
        assert!(quote().find_by_id(FormKind::Quote.form_id()).is_some());
        assert!(home().find_by_tag("form").is_empty());
    }
}
