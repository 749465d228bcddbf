//! Pieces shared between pages: the header and footer placed by the shell, event cards and the
//! recurring hero, heading and call to action sections.

use wasm_bindgen::JsCast;
use web_sys::Event;

use crate::{
    dom::{el, Element, EventType, Style},
    reveal::FADE_CLASS,
};

pub const HAMBURGER_ID: &str = "hamburgerBtn";
pub const NAV_ID: &str = "mainNav";

/// Class toggled on the hamburger button and the navigation while the menu is open.
pub const ACTIVE_CLASS: &str = "active";

pub const PHONE_HREF: &str = "tel:+352691393199";
pub const PHONE_LABEL: &str = "📞 +352 691 393 199";

/// Link to one of the event pages, as shown on the home and services pages.
#[derive(Debug, Clone, Copy)]
pub struct EventCard {
    pub href: &'static str,
    pub image: &'static str,
    pub alt: &'static str,
    pub title: &'static str,
}

pub const EVENT_CARDS: [EventCard; 4] = [
    EventCard {
        href: "#/entreprise",
        image: "assets/entreprise.png",
        alt: "Service Entreprise",
        title: "Entreprise",
    },
    EventCard {
        href: "#/food-truck",
        image: "assets/foodtruck.png",
        alt: "Food Truck",
        title: "Food Truck",
    },
    EventCard {
        href: "#/evenements-sociaux",
        image: "assets/social.png",
        alt: "Événements Sociaux",
        title: "Événements Sociaux",
    },
    EventCard {
        href: "#/anniversaires",
        image: "assets/anniversaires.png",
        alt: "Anniversaires",
        title: "Anniversaires",
    },
];

/// Join a base class with the fade class, so the element is picked up by the reveal pass.
pub fn fade(class_name: &str) -> String {
    if class_name.is_empty() {
        FADE_CLASS.to_string()
    } else {
        format!("{class_name} {FADE_CLASS}")
    }
}

pub fn link<H, S>(href: H, text: S) -> Element
where
    H: AsRef<str>,
    S: AsRef<str>,
{
    el("a").attr("href", href.as_ref()).text(text)
}

/// Site header with the logo, navigation and the hamburger toggle for small screens.
pub fn header() -> Element {
    let links = [
        link("#/", "Accueil"),
        link("#/services", "Services"),
        link("#/contact", "Contact"),
        link(PHONE_HREF, PHONE_LABEL).class("phone-link"),
        link("#/devis", "Obtenir un Devis").class("btn btn-primary btn-sm"),
    ];

    // Following any navigation link closes the menu
    let nav = el("nav")
        .class("nav")
        .id(NAV_ID)
        .children(links.map(|link| link.on(EventType::Click, close_menu)));

    let hamburger = el("button")
        .class("hamburger")
        .id(HAMBURGER_ID)
        .attr("aria-label", "Toggle menu")
        .on(EventType::Click, toggle_menu)
        .children([el("span"), el("span"), el("span")]);

    el("header").class("header").child(
        el("div")
            .class("header-content")
            .child(link("#/", "Mon Traiteur").class("logo"))
            .child(hamburger)
            .child(nav),
    )
}

pub fn footer() -> Element {
    let about = el("div")
        .class("footer-section")
        .child(el("h3").text("Mon Traiteur"))
        .child(el("p").text("Service traiteur de prestige au Luxembourg depuis plus de 20 ans."));

    let services = el("div")
        .class("footer-section")
        .child(el("h3").text("Nos Services"))
        .children(EVENT_CARDS.iter().map(|card| link(card.href, card.title)));

    let contact = el("div")
        .class("footer-section")
        .child(el("h3").text("Contact"))
        .child(el("p").text("Tél: +352 691 393 199"))
        .child(el("p").text("Email: contact@montraiteur.lu"))
        .child(el("p").text("Luxembourg et environs"));

    el("footer")
        .class("footer")
        .child(
            el("div")
                .class("footer-content")
                .children([about, services, contact]),
        )
        .child(el("div").class("footer-bottom").child(el("p").text(
            "© 2025 Mon Traiteur Luxembourg - Fait avec passion. Tous droits réservés.",
        )))
}

pub fn event_card(card: &EventCard) -> Element {
    el("a")
        .attr("href", card.href)
        .class(fade("event-card"))
        .child(
            el("img")
                .attr("src", card.image)
                .attr("alt", card.alt)
                .class("event-image"),
        )
        .child(
            el("div")
                .class("event-content")
                .child(el("h3").class("event-title").text(card.title))
                .child(el("span").class("event-link").text("En savoir plus")),
        )
}

/// Grid of cards for every event page.
pub fn events_grid() -> Element {
    el("div")
        .class("events-grid")
        .children(EVENT_CARDS.iter().map(event_card))
}

/// Full width banner opening a page. Inner pages pass a `(height, min-height)` pair to shrink it.
pub fn hero(
    size: Option<(&str, &str)>,
    background: Option<Element>,
    heading: Element,
    lead: &str,
    actions: Option<Element>,
) -> Element {
    let section = el("section").class("hero");
    let section = match size {
        Some((height, min_height)) => section.style(
            Style::new()
                .set("height", height)
                .set("minHeight", min_height),
        ),
        None => section,
    };

    section
        .child(el("div").class("hero-bg").child(background))
        .child(el("div").class("hero-overlay"))
        .child(
            el("div")
                .class("hero-content")
                .child(heading)
                .child(el("p").text(lead))
                .child(actions),
        )
}

/// Centered title and lead paragraph above a section's content.
pub fn section_heading(spacing: &str, title: &str, lead: &str) -> Element {
    el("div")
        .class(fade(&format!("text-center {spacing}")))
        .child(el("h2").text(title))
        .child(el("p").text(lead))
}

pub fn satisfaction_list(items: &[&str]) -> Element {
    el("ul")
        .class("satisfaction-list")
        .children(items.iter().map(|item| el("li").text(item)))
}

/// Closing section pointing to the quote page and the phone number.
pub fn cta_section(title: &str, lead: &str, button: &str) -> Element {
    el("section").class("cta-section").child(
        el("div").class("container").child(
            el("div")
                .class(fade("cta-content"))
                .child(el("h2").text(title))
                .child(el("p").text(lead))
                .child(
                    el("div")
                        .class("cta-buttons")
                        .child(link("#/devis", button).class("btn btn-primary"))
                        .child(link(PHONE_HREF, PHONE_LABEL).class("btn btn-outline")),
                ),
        ),
    )
}

fn menu_elements(event: &Event) -> Vec<web_sys::Element> {
    let Some(document) = event
        .current_target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
        .and_then(|node| node.owner_document())
    else {
        return Vec::new();
    };

    [HAMBURGER_ID, NAV_ID]
        .into_iter()
        .filter_map(|id| document.get_element_by_id(id))
        .collect()
}

fn toggle_menu(event: Event) {
    for element in menu_elements(&event) {
        if let Err(error) = element.class_list().toggle(ACTIVE_CLASS) {
            log::warn!("failed to toggle menu: {error:?}");
        }
    }
}

fn close_menu(event: Event) {
    for element in menu_elements(&event) {
        if let Err(error) = element.class_list().remove_1(ACTIVE_CLASS) {
            log::warn!("failed to close menu: {error:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hamburger_toggles_and_links_close() {
        let header = header();

        let hamburger = header.find_by_id(HAMBURGER_ID).unwrap();
        assert!(hamburger.has_listener(&EventType::Click));
        assert_eq!(hamburger.find_by_tag("span").len(), 3);

        let nav = header.find_by_id(NAV_ID).unwrap();
        let links = nav.find_by_tag("a");
        assert_eq!(links.len(), 5);
        assert!(links.iter().all(|link| link.has_listener(&EventType::Click)));
    }

    #[test]
    fn footer_links_every_event_page() {
        let footer = footer();
        let hrefs = footer
            .find_by_tag("a")
            .into_iter()
            .filter_map(|link| link.attribute("href"))
            .collect::<Vec<_>>();

        assert_eq!(
            hrefs,
            [
                "#/entreprise",
                "#/food-truck",
                "#/evenements-sociaux",
                "#/anniversaires"
            ]
        );
        assert_eq!(footer.find_by_class("footer-section").len(), 3);
    }

    #[test]
    fn event_cards_fade_in() {
        let card = event_card(&EVENT_CARDS[1]);

        assert!(card.has_class("event-card"));
        assert!(card.has_class(FADE_CLASS));
        assert_eq!(card.attribute("href"), Some("#/food-truck"));
        assert_eq!(card.find_by_class("event-title")[0].text_content(), "Food Truck");
    }

    #[test]
    fn hero_size_is_optional() {
        let full = hero(None, None, el("h1").text("Titre"), "Texte", None);
        assert!(full.inline_style().is_empty());

        let short = hero(Some(("60vh", "400px")), None, el("h1").text("Titre"), "Texte", None);
        assert_eq!(short.inline_style().get("min-height"), Some("400px"));
        assert_eq!(short.find_by_tag("h1")[0].text_content(), "Titre");
    }
}
