use super::layout::{fade, hero};
use crate::{
    dom::{el, Element, Style},
    forms::FormKind,
};

/// Labelled control inside a `form-group`.
pub(super) fn form_group<L>(id: Option<&str>, label: L, control: Element) -> Element
where
    L: AsRef<str>,
{
    let label = el("label").text(label);
    let label = match id {
        Some(id) => label.attr("for", id),
        None => label,
    };

    el("div").class("form-group").child(label).child(control)
}

/// Region that displays the outcome of a submission.
pub(super) fn status_region(kind: FormKind) -> Element {
    el("div").id(kind.status_id()).class("form-status")
}

pub(super) fn submit_button(label: &str) -> Element {
    el("button")
        .attr("type", "submit")
        .class("btn btn-primary")
        .style(Style::new().set("width", "100%"))
        .text(label)
}

pub(super) fn input(kind: &str, id: &str, name: &str) -> Element {
    el("input").attr("type", kind).id(id).attr("name", name)
}

fn contact_form() -> Element {
    el("form")
        .id(FormKind::Contact.form_id())
        .child(form_group(
            Some("name"),
            "Prénom + Nom *",
            input("text", "name", "name").attr("required", true),
        ))
        .child(form_group(
            Some("email"),
            "Email *",
            input("email", "email", "email").attr("required", true),
        ))
        .child(form_group(
            Some("phone"),
            "Numéro de téléphone *",
            input("tel", "phone", "phone")
                .attr("placeholder", "+352 ...")
                .attr("required", true),
        ))
        .child(form_group(
            Some("message"),
            "Votre message *",
            el("textarea")
                .id("message")
                .attr("name", "message")
                .attr("placeholder", "Écrivez votre message...")
                .attr("required", true),
        ))
        .child(status_region(FormKind::Contact))
        .child(submit_button("Envoyer le message"))
}

fn info_card(icon: &str, title: &str, lines: &[&str]) -> Element {
    el("div")
        .class("info-card")
        .child(el("div").class("info-icon").text(icon))
        .child(
            el("div")
                .class("info-content")
                .child(el("h4").text(title))
                .children(lines.iter().map(|line| el("p").text(line))),
        )
}

pub fn contact() -> Element {
    let message = el("div")
        .class(fade(""))
        .child(el("h2").class("mb-md").text("Envoyez-nous un message"))
        .child(
            el("p")
                .class("mb-lg")
                .text("Remplissez le formulaire et nous vous répondrons rapidement"),
        )
        .child(contact_form());

    let info = el("div").class(fade("")).child(
        el("div")
            .class("contact-info-cards")
            .child(info_card("📞", "Téléphone", &["+352 691 393 199"]))
            .child(info_card("✉️", "Email", &["contact@montraiteur.lu"]))
            .child(info_card("📍", "Localisation", &["Luxembourg et environs"]))
            .child(info_card(
                "🕒",
                "Horaires d'ouverture",
                &[
                    "Lundi - Vendredi: 9h00 - 18h00",
                    "Samedi: 10h00 - 16h00",
                    "Dimanche: Fermé",
                ],
            )),
    );

    el("div")
        .child(hero(
            Some(("50vh", "300px")),
            None,
            el("h1").text("Contactez-nous"),
            "Une question ? Un projet ? Nous sommes là pour vous aider",
            None,
        ))
        .child(
            el("section").class("contact-section section").child(
                el("div")
                    .class("container")
                    .child(el("div").class("contact-grid").child(message).child(info)),
            ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_form_fields() {
        let page = contact();
        let form = page.find_by_id("contactForm").unwrap();

        let names = form
            .find_all(|element| element.attribute("name").is_some())
            .into_iter()
            .filter_map(|element| element.attribute("name"))
            .collect::<Vec<_>>();
        assert_eq!(names, ["name", "email", "phone", "message"]);

        assert!(form.find_by_id("contactStatus").is_some());
        assert_eq!(
            form.find_by_tag("button")[0].attribute("type"),
            Some("submit")
        );
        assert!(form
            .find_all(|element| element.attribute("name").is_some())
            .iter()
            .all(|element| element.attribute("required") == Some("")));
    }

    #[test]
    fn labels_point_at_their_controls() {
        let page = contact();

        for label in page.find_by_tag("label") {
            let target = label.attribute("for").unwrap();
            assert!(page.find_by_id(target).is_some(), "no control `{target}`");
        }
    }

    #[test]
    fn opening_hours_are_listed() {
        let page = contact();
        let cards = page.find_by_class("info-card");

        assert_eq!(cards.len(), 4);
        assert_eq!(cards[3].find_by_tag("p").len(), 3);
    }
}
