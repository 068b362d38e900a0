use crate::services::Profile;
use crate::view::Element;

use super::LoadState;

/// Contact handle shown on both profile cards.
const CONTACT_HANDLE: &str = "@1998amansinha";

/// Props for [`about`].
#[derive(Debug, Clone, Copy)]
pub struct AboutProps<'a> {
    pub user_name: &'a str,
    pub profile: &'a LoadState<Profile>,
}

/// About page with both profile cards.
#[must_use]
pub fn about(props: AboutProps<'_>) -> Element {
    Element::new("div")
        .class("about")
        .child(Element::new("h1").text("About"))
        .child(Element::new("h3").text("This is our about page"))
        .child(
            Element::new("p")
                .class("logged-in-user")
                .text(format!("Logged in as: {}", props.user_name)),
        )
        .child(
            Element::new("div")
                .class("user-cards")
                .child(user(props.user_name))
                .child(user_class(props.profile)),
        )
}

/// Profile card rendered straight from props.
#[must_use]
pub fn user(name: &str) -> Element {
    profile_card("This is a Functional Component", name, "Dehradun")
}

/// Profile card backed by a fetched GitHub profile.
///
/// Fields stay empty until the profile has loaded.
#[must_use]
pub fn user_class(profile: &LoadState<Profile>) -> Element {
    let (name, location) = profile.as_loaded().map_or(("", ""), |p| {
        (
            p.name.as_deref().unwrap_or(p.login.as_str()),
            p.location.as_deref().unwrap_or(p.login.as_str()),
        )
    });

    let card = profile_card("This is a Class Component", name, location);
    match profile.as_loaded().and_then(|p| p.avatar_url.as_deref()) {
        Some(avatar) => card.child(
            Element::new("img")
                .class("avatar")
                .attr("src", avatar)
                .attr("alt", name),
        ),
        None => card,
    }
}

fn profile_card(title: &str, name: &str, location: &str) -> Element {
    Element::new("div")
        .class("user-card")
        .child(Element::new("h1").text(title))
        .child(Element::new("h2").class("user-name").text(format!("Name: {name}")))
        .child(
            Element::new("h3")
                .class("user-location")
                .text(format!("Location: {location}")),
        )
        .child(Element::new("h4").text(format!("Contact: {CONTACT_HANDLE}")))
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_user_card() {
        let tree = user("Aman");
        assert_eq!(tree.find_by_class("user-name")[0].text_content(), "Name: Aman");
        assert_eq!(
            tree.find_by_class("user-location")[0].text_content(),
            "Location: Dehradun"
        );
    }

    #[test]
    fn test_user_class_before_load_is_blank() {
        let tree = user_class(&LoadState::Loading);
        assert_eq!(tree.find_by_class("user-name")[0].text_content(), "Name: ");
        assert!(tree.find_by_class("avatar").is_empty());
    }

    #[test]
    fn test_user_class_after_load() {
        let profile = Profile {
            login: "octocat".to_string(),
            name: Some("The Octocat".to_string()),
            location: None,
            avatar_url: Some("https://avatars/1".to_string()),
            bio: None,
        };
        let tree = user_class(&LoadState::Loaded(profile));
        assert_eq!(
            tree.find_by_class("user-name")[0].text_content(),
            "Name: The Octocat"
        );
        assert_eq!(
            tree.find_by_class("user-location")[0].text_content(),
            "Location: octocat"
        );
        assert_eq!(tree.find_by_class("avatar").len(), 1);
    }

    #[test]
    fn test_about_includes_both_cards() {
        let tree = about(AboutProps {
            user_name: "Aman",
            profile: &LoadState::Loading,
        });
        assert_eq!(tree.find_by_class("user-card").len(), 2);
        assert!(tree.text_content().contains("Logged in as: Aman"));
    }
}
