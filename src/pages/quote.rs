use super::{
    contact::{form_group, input, status_region, submit_button},
    layout::{fade, hero},
};
use crate::{
    dom::{el, Element, Style},
    forms::{FormKind, CATERING_NEEDS, RENTAL_NEEDS},
};

pub const COURSES: [&str; 4] = ["Amuse bouche", "Entrées", "Plats", "Desserts"];

pub const RENTALS: [&str; 8] = [
    "Besoin d'un DJ",
    "Besoin d'équipements de DJ",
    "Location d'une limousine",
    "Location de couverts",
    "Location de tables basses",
    "Location de tables haute (ronde)",
    "Location de bans",
    "Location de chaises",
];

/// Group of checkboxes sharing `name`, one per item, in order.
fn checkbox_group(name: &str, items: &[&str]) -> Element {
    el("div")
        .class("checkbox-group")
        .children(items.iter().map(|item| {
            el("label")
                .class("checkbox-label")
                .child(
                    el("input")
                        .attr("type", "checkbox")
                        .attr("name", name)
                        .attr("value", *item),
                )
                .child(el("span").text(item))
        }))
}

fn quote_form() -> Element {
    el("form")
        .id(FormKind::Quote.form_id())
        .child(
            el("p")
                .class("mb-md")
                .text("Les champs marqués d'un * sont obligatoires"),
        )
        .child(form_group(
            Some("quoteName"),
            "Prénom + Nom *",
            input("text", "quoteName", "name").attr("required", true),
        ))
        .child(form_group(
            Some("quoteEmail"),
            "Email *",
            input("email", "quoteEmail", "email").attr("required", true),
        ))
        .child(form_group(
            Some("quotePhone"),
            "Numéro de téléphone *",
            input("tel", "quotePhone", "phone").attr("required", true),
        ))
        .child(form_group(
            Some("quoteDate"),
            "Date du Catering",
            input("date", "quoteDate", "date"),
        ))
        .child(form_group(
            Some("quoteGuests"),
            "Quantité de personnes *",
            input("number", "quoteGuests", "guests")
                .attr("min", "1")
                .attr("required", true),
        ))
        .child(form_group(
            None,
            "Besoin d'un Catering *",
            checkbox_group(CATERING_NEEDS, &COURSES),
        ))
        .child(form_group(
            Some("quoteBudget"),
            "Budget par personne? (Min. 20€) *",
            input("number", "quoteBudget", "budget")
                .attr("placeholder", "20")
                .attr("min", "20")
                .attr("required", true),
        ))
        .child(form_group(
            None,
            "Besoin de location?",
            checkbox_group(RENTAL_NEEDS, &RENTALS),
        ))
        .child(form_group(
            Some("quoteMessage"),
            "Votre message",
            el("textarea")
                .id("quoteMessage")
                .attr("name", "message")
                .attr("rows", "4"),
        ))
        .child(status_region(FormKind::Quote))
        .child(submit_button("Soumettre la demande"))
}

pub fn quote() -> Element {
    el("div")
        .child(hero(
            Some(("40vh", "300px")),
            None,
            el("h1").text("Obtenir un Devis"),
            "Remplissez le formulaire ci-dessous pour recevoir une offre personnalisée",
            None,
        ))
        .child(
            el("section").class("section").child(
                el("div")
                    .class("container")
                    .style(Style::new().set("maxWidth", "800px"))
                    .child(
                        el("div")
                            .class("contact-grid")
                            .style(Style::new().set("gridTemplateColumns", "1fr"))
                            .child(el("div").class(fade("")).child(quote_form())),
                    ),
            ),
        )
}
