use crate::view::{Element, Node};

/// Contact page with the restaurant's details and a message form.
#[must_use]
pub fn contact() -> Element {
    let detail = |heading: &str, value: &str| -> Vec<Node> {
        vec![
            Element::new("h3").text(heading).into(),
            Element::new("p").text(value).into(),
        ]
    };

    Element::new("div")
        .class("contact-container")
        .child(Element::new("h1").text("Contact Us"))
        .child(Element::new("p").text(
            "We would love to hear from you! Please fill out the form below and we will get in touch with you shortly.",
        ))
        .child(
            Element::new("div")
                .class("contact-details")
                .children(detail("Our Address", "123 Delicious Street, Foodville, Taste Country"))
                .children(detail("Phone", "(123) 456-7890"))
                .children(detail("Email", "contact@ourrestaurant.com")),
        )
        .child(
            Element::new("form")
                .class("contact-form")
                .child(labelled("Name:", Element::new("input").attr("type", "text")))
                .child(labelled("Email:", Element::new("input").attr("type", "email")))
                .child(labelled(
                    "Message:",
                    Element::new("textarea").attr("rows", "5"),
                ))
                .child(Element::new("button").attr("type", "submit").text("Submit")),
        )
}

fn labelled(label: &str, field: Element) -> Element {
    let name = label.trim_end_matches(':').to_lowercase();
    Element::new("label")
        .text(label)
        .child(field.attr("name", name).attr("required", ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_form_fields() {
        let tree = contact();
        let names: Vec<_> = tree
            .find_all(|e| matches!(e.tag(), "input" | "textarea"))
            .into_iter()
            .filter_map(|e| e.attribute("name"))
            .collect();
        assert_eq!(names, ["name", "email", "message"]);
        assert!(tree.text_content().contains("(123) 456-7890"));
    }
}
