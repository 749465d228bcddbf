//! Event type pages, all rendered from one template.

use super::layout::{fade, hero, link};
use crate::{
    dom::{el, Element, Style},
    SiteError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Description {
    pub title: &'static str,
    pub text: &'static str,
}

/// Closing call to action, linking to the quote page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cta {
    pub title: &'static str,
    pub text: &'static str,
    pub button: &'static str,
}

/// Content of an event page. Every field is required; [`EventPage::validate()`] additionally
/// rejects blank text and an empty feature list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventPage {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image: &'static str,
    pub description: Description,

    /// Shown as a list, in order.
    pub features: &'static [&'static str],

    pub cta: Cta,
}

impl EventPage {
    pub fn validate(&self) -> Result<(), SiteError> {
        let text = [
            ("blank title", self.title),
            ("blank subtitle", self.subtitle),
            ("blank image", self.image),
            ("blank description title", self.description.title),
            ("blank description text", self.description.text),
            ("blank call to action title", self.cta.title),
            ("blank call to action text", self.cta.text),
            ("blank call to action button", self.cta.button),
        ];

        let reason = text
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
            .map(|(reason, _)| reason)
            .or_else(|| self.features.is_empty().then_some("no features"))
            .or_else(|| {
                self.features
                    .iter()
                    .any(|feature| feature.trim().is_empty())
                    .then_some("blank feature")
            });

        match reason {
            Some(reason) => Err(SiteError::InvalidPage {
                page: self.title.to_string(),
                reason,
            }),
            None => Ok(()),
        }
    }

    pub fn render(&self) -> Element {
        let text_dark = || Style::new().set("color", "var(--text-dark)");

        let description = el("div")
            .class(fade(""))
            .child(el("h2").class("mb-md").text(self.description.title))
            .child(
                el("p")
                    .class("mb-lg")
                    .style(
                        Style::new()
                            .set("fontSize", "1.125rem")
                            .set("maxWidth", "800px"),
                    )
                    .text(self.description.text),
            );

        let features = el("div")
            .class(fade(""))
            .child(el("h3").class("mb-md").text("Ce que nous proposons"))
            .child(
                el("ul")
                    .class("satisfaction-list")
                    .style(text_dark())
                    .children(
                        self.features
                            .iter()
                            .map(|feature| el("li").style(text_dark()).text(feature)),
                    ),
            );

        let cta = el("div")
            .class(fade("text-center mt-xl"))
            .child(el("h3").class("mb-md").text(self.cta.title))
            .child(el("p").class("mb-md").text(self.cta.text))
            .child(link("#/devis", self.cta.button).class("btn btn-primary"));

        el("div")
            .child(hero(
                Some(("60vh", "400px")),
                Some(el("img").attr("src", self.image).attr("alt", self.title)),
                el("h1").text(self.title),
                self.subtitle,
                None,
            ))
            .child(
                el("section").class("section").child(
                    el("div")
                        .class("container")
                        .children([description, features, cta]),
                ),
            )
    }
}

pub const ENTREPRISE: EventPage = EventPage {
    title: "Service Entreprise",
    subtitle: "Traiteur professionnel pour vos événements d'entreprise",
    image: "assets/entreprise.png",
    description: Description {
        title: "Un service adapté à vos besoins professionnels",
        text: "Nous comprenons l'importance de vos événements d'entreprise. Nos prestations traiteur sont conçues pour impressionner vos clients et collaborateurs avec une cuisine raffinée et un service impeccable.",
    },
    features: &[
        "Buffets professionnels pour séminaires et conférences",
        "Pauses café et déjeuners d'affaires",
        "Cocktails dînatoires pour événements corporate",
        "Service en salle ou buffet selon vos préférences",
        "Menus adaptés aux régimes alimentaires spécifiques",
        "Vaisselle et décoration incluses",
        "Personnel expérimenté et discret",
    ],
    cta: Cta {
        title: "Prêt à organiser votre événement d'entreprise?",
        text: "Contactez-nous pour discuter de vos besoins et obtenir un devis personnalisé",
        button: "Demander un Devis",
    },
};

pub const FOOD_TRUCK: EventPage = EventPage {
    title: "Food Truck Mobile",
    subtitle: "La solution parfaite pour vos événements extérieurs",
    image: "assets/foodtruck.png",
    description: Description {
        title: "Cuisine de qualité, service mobile",
        text: "Notre food truck apporte une touche conviviale et originale à vos événements. Nous nous déplaçons où vous le souhaitez pour offrir une expérience culinaire unique à vos invités.",
    },
    features: &[
        "Cuisine fraîche préparée sur place",
        "Large choix de menus internationaux",
        "Service rapide et efficace",
        "Idéal pour festivals, marchés et événements privés",
        "Installation autonome complète",
        "Options végétariennes et véganes disponibles",
        "Personnel formé et professionnel",
    ],
    cta: Cta {
        title: "Envie d'un food truck pour votre événement?",
        text: "Faites appel à notre food truck mobile pour une expérience culinaire mémorable",
        button: "Réserver le Food Truck",
    },
};

pub const EVENEMENTS_SOCIAUX: EventPage = EventPage {
    title: "Événements Sociaux",
    subtitle: "Des prestations d'exception pour vos moments précieux",
    image: "assets/social.png",
    description: Description {
        title: "Créez des souvenirs inoubliables",
        text: "Mariages, galas, anniversaires de mariage... Nous créons des expériences culinaires sur mesure qui subliment vos événements les plus importants avec élégance et raffinement.",
    },
    features: &[
        "Menu personnalisé en collaboration avec nos chefs",
        "Service à table avec personnel expérimenté",
        "Décoration de table élégante",
        "Coordination avec vos autres prestataires",
        "Options de menu dégustation",
        "Vin et champagne sélectionnés",
        "Desserts et pièce montée sur demande",
        "Service irréprochable du début à la fin",
    ],
    cta: Cta {
        title: "Organisez l'événement de vos rêves",
        text: "Rencontrons-nous pour créer ensemble un menu unique qui ravira vos invités",
        button: "Planifier mon Événement",
    },
};

pub const ANNIVERSAIRES: EventPage = EventPage {
    title: "Anniversaires & Célébrations",
    subtitle: "Célébrez vos moments spéciaux avec style",
    image: "assets/anniversaires.png",
    description: Description {
        title: "Des fêtes mémorables pour tous les âges",
        text: "Qu'il s'agisse d'un anniversaire d'enfant ou d'une célébration entre adultes, nous créons des buffets colorés et savoureux qui raviront tous vos invités.",
    },
    features: &[
        "Menus adaptés à tous les âges",
        "Buffets festifs et colorés",
        "Gâteaux d'anniversaire personnalisés",
        "Options finger food et amuse-bouches",
        "Animations culinaires pour enfants",
        "Service flexible selon le nombre d'invités",
        "Décoration de table thématique",
        "Formules tout compris disponibles",
    ],
    cta: Cta {
        title: "Prêt à célébrer?",
        text: "Contactez-nous pour créer une fête d'anniversaire inoubliable",
        button: "Organiser ma Fête",
    },
};
