use super::{
    home::STARS,
    layout::{cta_section, events_grid, fade, hero, satisfaction_list, section_heading},
};
use crate::dom::{el, Element};

const COMMITMENTS: [&str; 6] = [
    "Ingrédients frais et de qualité supérieure",
    "Menus personnalisés selon vos préférences",
    "Service professionnel et ponctuel",
    "Cuisine internationale variée",
    "Équipe expérimentée et passionnée",
    "Prix compétitifs et transparents",
];

pub fn services() -> Element {
    let event_types = el("section").class("section").child(
        el("div")
            .class("container")
            .child(section_heading(
                "mb-lg",
                "Types d'Événements",
                "Découvrez nos services de traiteur adaptés à chaque occasion",
            ))
            .child(events_grid()),
    );

    let commitment = el("div")
        .class(fade(""))
        .child(el("h3").text("Notre Engagement"))
        .child(el("p").text(
            "Avec plus de 20 ans d'expérience, nous garantissons la qualité et le professionnalisme à chaque étape de votre événement.",
        ))
        .child(satisfaction_list(&COMMITMENTS));

    let testimonial = el("div")
        .class(fade("testimonial-card"))
        .child(el("span").class("testimonial-percentage").text("100%"))
        .child(el("h3").text("Satisfaction Client"))
        .child(
            el("p")
                .class("testimonial-text")
                .text("\"Un service de qualité exceptionnelle qui a ravi tous nos invités!\""),
        )
        .child(el("div").class("stars").text(STARS));

    let satisfaction = el("section").class("satisfaction-section").child(
        el("div")
            .class("container")
            .child(section_heading(
                "mb-xl",
                "Satisfaction Garantie",
                "Nous mettons notre expertise à votre service pour créer des moments inoubliables",
            ))
            .child(
                el("div")
                    .class("satisfaction-grid")
                    .child(commitment)
                    .child(testimonial),
            ),
    );

    el("div")
        .child(hero(
            Some(("60vh", "400px")),
            None,
            el("h1").text("Nos Services"),
            "Des prestations traiteur professionnelles pour tous vos événements au Luxembourg",
            None,
        ))
        .child(event_types)
        .child(satisfaction)
        .child(cta_section(
            "Prêt à organiser votre événement ?",
            "Contactez-nous pour discuter de votre projet et recevoir un devis personnalisé",
            "Obtenir un Devis Gratuit",
        ))
}
