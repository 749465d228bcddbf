use super::layout::{
    cta_section, events_grid, fade, hero, link, satisfaction_list, section_heading,
};
use crate::dom::{el, Element, Style};

const STATS: [(&str, &str); 4] = [
    ("20+", "Années d'expérience"),
    ("70+", "Prestations par an"),
    ("500+", "Clients satisfaits"),
    ("100%", "Satisfaction garantie"),
];

/// Icon, title and text of each advantage card.
const ADVANTAGES: [(&str, &str, &str); 5] = [
    (
        "assets/icon-plat-chaud.png",
        "Qualité Premium",
        "Ingrédients frais sélectionnés quotidiennement auprès de producteurs locaux. Nous garantissons une qualité irréprochable pour chaque prestation.",
    ),
    (
        "assets/icon-chef.png",
        "Équipe Expérimentée",
        "Nos chefs et serveurs professionnels possèdent plus de 20 ans d'expérience dans la restauration haut de gamme et le service événementiel.",
    ),
    (
        "assets/icon-assiette.png",
        "Sur Mesure",
        "Chaque menu est personnalisé selon vos goûts, vos besoins diététiques et le thème de votre événement. Flexibilité totale garantie.",
    ),
    (
        "assets/icon-qualite.png",
        "Service Certifié",
        "Certifications et respect strict des normes d'hygiène et de sécurité alimentaire. Votre satisfaction est notre priorité absolue.",
    ),
    (
        "assets/icon-livraison.png",
        "Livraison Soignée",
        "Livraison et installation complètes. Nos équipes gèrent tout de A à Z pour que vous puissiez profiter pleinement de votre événement.",
    ),
];

const PROCESS: [(&str, &str); 4] = [
    (
        "Consultation",
        "Nous discutons ensemble de vos besoins, du type d'événement, du nombre d'invités et de vos préférences culinaires.",
    ),
    (
        "Menu Personnalisé",
        "Nos chefs créent un menu sur mesure adapté à vos goûts, votre budget et aux contraintes alimentaires de vos invités.",
    ),
    (
        "Préparation",
        "Nous préparons tous les plats avec soin en utilisant des ingrédients frais de première qualité sélectionnés le jour même.",
    ),
    (
        "Service Impeccable",
        "Notre équipe professionnelle assure un service irréprochable le jour J pour que votre événement soit parfait.",
    ),
];

const COMMITMENTS: [&str; 8] = [
    "Ingrédients frais et de qualité supérieure",
    "Menus personnalisés selon vos préférences",
    "Service professionnel et ponctuel",
    "Cuisine internationale variée",
    "Équipe expérimentée et passionnée",
    "Prix compétitifs et transparents",
    "Vaisselle et décoration incluses",
    "Respect des normes d'hygiène strictes",
];

/// Quote and author of each testimonial.
const TESTIMONIALS: [(&str, &str); 3] = [
    (
        "\"Un service exceptionnel du début à la fin. Les plats étaient délicieux et magnifiquement présentés. Nos invités parlent encore de notre mariage 6 mois après!\"",
        "— Marie & Jean-Luc",
    ),
    (
        "\"Le food truck a été un énorme succès lors de notre festival d'entreprise. Service rapide, nourriture de qualité, et l'équipe était formidable!\"",
        "— Thomas K., DRH",
    ),
    (
        "\"Professionnels, ponctuels et d'une gentillesse remarquable. Le buffet pour les 50 ans de maman était parfait. Merci pour tout!\"",
        "— Isabelle D.",
    ),
];

pub const STARS: &str = "★★★★★";

pub fn home() -> Element {
    el("div")
        .child(home_hero())
        .child(stats())
        .child(advantages())
        .child(events())
        .child(process())
        .child(satisfaction())
        .child(testimonials())
        .child(cta_section(
            "Prêt à organiser votre événement ?",
            "Contactez-nous dès aujourd'hui pour un devis gratuit et personnalisé",
            "Demander un Devis Gratuit",
        ))
}

fn home_hero() -> Element {
    let background = el("img")
        .attr("src", "assets/entreprise.png")
        .attr("alt", "Catering Background")
        .style(
            Style::new()
                .set("width", "100%")
                .set("height", "100%")
                .set("objectFit", "cover"),
        );

    let heading = el("h1")
        .text("Service Traiteur ")
        .child(el("span").class("accent").text("de Prestige"));

    let actions = el("div")
        .class("hero-buttons")
        .child(link("#/devis", "Obtenir un Devis").class("btn btn-primary"))
        .child(link("#/services", "Nos Services").class("btn btn-outline"));

    hero(
        None,
        Some(background),
        heading,
        "Des repas délicieux et sur mesure pour tous vos événements au Luxembourg",
        Some(actions),
    )
}

fn stats() -> Element {
    el("div").class("container").child(
        el("div")
            .class("stats")
            .children(STATS.iter().map(|(number, label)| {
                el("div")
                    .class(fade("stat-card"))
                    .child(el("span").class("stat-number").text(number))
                    .child(el("span").class("stat-label").text(label))
            })),
    )
}

fn advantages() -> Element {
    let cards = ADVANTAGES.iter().map(|(icon, title, text)| {
        el("div")
            .class(fade("advantage-card"))
            .child(
                el("img")
                    .attr("src", *icon)
                    .attr("alt", *title)
                    .class("advantage-icon-img"),
            )
            .child(el("h3").text(title))
            .child(el("p").text(text))
    });

    el("section").class("section advantages-section").child(
        el("div")
            .class("container")
            .child(section_heading(
                "mb-xl",
                "Nos Points Forts",
                "Ce qui fait de nous le choix numéro 1 pour votre traiteur au Luxembourg",
            ))
            .child(el("div").class("advantages-grid").children(cards)),
    )
}

fn events() -> Element {
    el("section").class("section").child(
        el("div")
            .class("container")
            .child(section_heading(
                "mb-lg",
                "Événements pris en charge",
                "Que ce soit pour un service Food Truck, un anniversaire, un événement d'entreprise ou une fête privée, nous vous proposons des repas délicieux et sur mesure",
            ))
            .child(events_grid()),
    )
}

fn process() -> Element {
    let steps = PROCESS
        .iter()
        .enumerate()
        .map(|(index, (title, text))| {
            el("div")
                .class(fade("process-step"))
                .child(el("div").class("process-number").text((index + 1).to_string()))
                .child(el("h3").text(title))
                .child(el("p").text(text))
        });

    el("section").class("section process-section").child(
        el("div")
            .class("container")
            .child(section_heading(
                "mb-xl",
                "Notre Processus",
                "De la prise de contact à la réalisation de votre événement",
            ))
            .child(el("div").class("process-grid").children(steps)),
    )
}

fn satisfaction() -> Element {
    let commitment = el("div")
        .class(fade(""))
        .child(el("h3").text("Notre Engagement Qualité"))
        .child(el("p").text(
            "Avec plus de 20 ans d'expérience dans le domaine de la restauration au Luxembourg, nous mettons notre savoir-faire à votre service pour faire de votre événement un moment unique et inoubliable.",
        ))
        .child(el("p").text(
            "Notre équipe de chefs passionnés utilise uniquement des ingrédients frais et de saison pour créer des menus qui raviront vos invités. Chaque plat est préparé avec soin et attention aux détails.",
        ))
        .child(satisfaction_list(&COMMITMENTS));

    let testimonial = el("div")
        .class(fade("testimonial-card"))
        .child(el("span").class("testimonial-percentage").text("100%"))
        .child(el("h3").text("Satisfaction Client"))
        .child(el("p").class("testimonial-text").text(
            "\"Service impeccable et nourriture délicieuse. Nos invités étaient ravis! Mon Traiteur a transformé notre événement d'entreprise en une expérience gastronomique exceptionnelle.\"",
        ))
        .child(el("div").class("stars").text(STARS))
        .child(el("p").class("testimonial-author").text("— Sophie M., Manager Luxembourg"));

    el("section").class("satisfaction-section").child(
        el("div")
            .class("container")
            .child(section_heading(
                "mb-xl",
                "Pourquoi Nous Choisir",
                "Plus de 20 ans d'excellence culinaire au service de vos événements",
            ))
            .child(
                el("div")
                    .class("satisfaction-grid")
                    .child(commitment)
                    .child(testimonial),
            ),
    )
}

fn testimonials() -> Element {
    let boxes = TESTIMONIALS.iter().map(|(quote, author)| {
        el("div")
            .class(fade("testimonial-box"))
            .child(el("div").class("stars").text(STARS))
            .child(el("p").text(quote))
            .child(el("p").class("testimonial-author").text(author))
    });

    el("section").class("section testimonials-section").child(
        el("div")
            .class("container")
            .child(section_heading(
                "mb-xl",
                "Ce que disent nos clients",
                "Des centaines de clients satisfaits nous font confiance pour leurs événements",
            ))
            .child(el("div").class("testimonials-grid").children(boxes)),
    )
}
