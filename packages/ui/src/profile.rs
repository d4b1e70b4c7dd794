//! # Applicant profile modal
//!
//! Shows one applicant's profile inside a modal dialog that the hosting page
//! owns. The work is split so each step can be tested on its own:
//!
//! 1. [`ApplicantProfileView::from_user`] shapes a [`User`] into a typed view
//!    model (fallback picture, badges, detail rows, requirement names).
//! 2. [`render_applicant_profile`] turns the view model into markup through the
//!    [`ApplicantProfileCard`](crate::views::ApplicantProfileCard) component.
//! 3. [`show_applicant_profile_modal`] looks the applicant up, injects the markup
//!    into the page's container element and asks the modal to show itself.
//!
//! The markup uses Bootstrap and Font Awesome classes; the hosting page is
//! expected to load both.

use dioxus::prelude::*;
use store::{DataStore, Notifier, ProfileConfig, StorageArea, StoreError, User, UserId};

use crate::badges::{disability_label, generate_applicant_badges, Badge};
use crate::views::{ApplicantProfileCard, ApplicantProfileCardProps};

pub const APPLICANT_NOT_FOUND: &str = "Applicant not found!";
const NOT_AVAILABLE: &str = "N/A";

/// One labelled row of the personal-details table.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

/// Everything the profile modal displays, already defaulted.
#[derive(Clone, Debug, PartialEq)]
pub struct ApplicantProfileView {
    pub picture_url: String,
    pub name: String,
    pub email: String,
    pub badges: Vec<Badge>,
    pub details: Vec<DetailRow>,
    /// Display names of uploaded requirement documents.
    pub requirements: Vec<String>,
}

impl ApplicantProfileView {
    pub fn from_user(user: &User, config: &ProfileConfig) -> Self {
        let profile = &user.profile;

        let picture_url = profile
            .profile_picture_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(&config.placeholder_image)
            .to_string();

        let gender = profile
            .gender
            .as_deref()
            .filter(|g| !g.is_empty())
            .unwrap_or(NOT_AVAILABLE)
            .to_string();

        let skills = profile.skills().join(", ");
        let skills = if skills.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            skills
        };

        let mut details = vec![
            DetailRow {
                label: "Gender",
                value: gender,
            },
            DetailRow {
                label: "Skills",
                value: skills,
            },
        ];
        if profile.is_pwd() {
            details.push(DetailRow {
                label: "Disability Type",
                value: disability_label(profile),
            });
        }

        Self {
            picture_url,
            name: profile.name.clone(),
            email: user.email.clone(),
            badges: generate_applicant_badges(Some(profile)),
            details,
            requirements: profile
                .requirements()
                .iter()
                .map(|r| r.name.clone())
                .collect(),
        }
    }
}

/// Render the profile card to an HTML fragment.
pub fn render_applicant_profile(view: &ApplicantProfileView) -> String {
    let mut dom = VirtualDom::new_with_props(
        ApplicantProfileCard,
        ApplicantProfileCardProps::builder().view(view.clone()).build(),
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Look up a user by id and shape their profile.
pub fn load_applicant_profile<A: StorageArea>(
    store: &DataStore<A>,
    applicant_id: UserId,
    config: &ProfileConfig,
) -> Result<Option<ApplicantProfileView>, StoreError> {
    Ok(store
        .find_user(applicant_id)?
        .map(|user| ApplicantProfileView::from_user(&user, config)))
}

/// The page hosting the profile container.
pub trait HostPage: Notifier {
    fn has_element(&self, element_id: &str) -> bool;
    /// Replace the element's content with `html`.
    fn set_inner_html(&self, element_id: &str, html: &str);
}

/// A modal dialog the page created; `show` reveals it.
pub trait ModalHandle {
    fn show(&self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileOutcome {
    Shown,
    /// The user was alerted; nothing was rendered.
    ApplicantNotFound,
    /// The container element is missing from the page; nothing was rendered.
    ContainerMissing,
}

/// Render applicant `applicant_id` into the page's profile container and show `modal`.
pub fn show_applicant_profile_modal<A: StorageArea>(
    store: &DataStore<A>,
    page: &impl HostPage,
    applicant_id: UserId,
    modal: &impl ModalHandle,
    config: &ProfileConfig,
) -> Result<ProfileOutcome, StoreError> {
    let Some(view) = load_applicant_profile(store, applicant_id, config)? else {
        page.alert(APPLICANT_NOT_FOUND);
        return Ok(ProfileOutcome::ApplicantNotFound);
    };

    if !page.has_element(&config.container_id) {
        tracing::error!(
            "Modal body with ID \"{}\" not found!",
            config.container_id
        );
        return Ok(ProfileOutcome::ContainerMissing);
    }

    page.set_inner_html(&config.container_id, &render_applicant_profile(&view));
    modal.show();
    Ok(ProfileOutcome::Shown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use store::{MemoryArea, Profile, Requirement, UserRole};

    #[derive(Default)]
    struct FakePage {
        elements: RefCell<HashMap<String, String>>,
        alerts: RefCell<Vec<String>>,
    }

    impl FakePage {
        fn with_container(id: &str, content: &str) -> Self {
            let page = Self::default();
            page.elements
                .borrow_mut()
                .insert(id.to_string(), content.to_string());
            page
        }

        fn content(&self, id: &str) -> Option<String> {
            self.elements.borrow().get(id).cloned()
        }
    }

    impl Notifier for FakePage {
        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }

    impl HostPage for FakePage {
        fn has_element(&self, element_id: &str) -> bool {
            self.elements.borrow().contains_key(element_id)
        }

        fn set_inner_html(&self, element_id: &str, html: &str) {
            if let Some(content) = self.elements.borrow_mut().get_mut(element_id) {
                *content = html.to_string();
            }
        }
    }

    #[derive(Default)]
    struct FakeModal {
        shown: Cell<u32>,
    }

    impl ModalHandle for FakeModal {
        fn show(&self) {
            self.shown.set(self.shown.get() + 1);
        }
    }

    fn maria() -> User {
        User::new(2, "maria.santos@email.com", "password", UserRole::Applicant).with_profile(
            Profile {
                name: "Maria Santos".to_string(),
                gender: Some("Female".to_string()),
                is_pwd: Some(true),
                pwd_type: Some("Orthopedic".to_string()),
                profile_picture_url: Some("https://i.pravatar.cc/150?u=maria".to_string()),
                skills: Some(vec!["Welding".to_string(), "Technical Drawing".to_string()]),
                requirements: Some(vec![Requirement::new("NBI_Clearance.pdf")]),
                ..Profile::default()
            },
        )
    }

    fn store_with(users: &[User]) -> DataStore<MemoryArea> {
        let store = DataStore::new(MemoryArea::new());
        store.save_users(users).unwrap();
        store
    }

    #[test]
    fn test_view_from_full_profile() {
        let view = ApplicantProfileView::from_user(&maria(), &ProfileConfig::default());
        assert_eq!(view.picture_url, "https://i.pravatar.cc/150?u=maria");
        assert_eq!(view.name, "Maria Santos");
        assert_eq!(view.email, "maria.santos@email.com");
        assert_eq!(
            view.details,
            vec![
                DetailRow {
                    label: "Gender",
                    value: "Female".to_string()
                },
                DetailRow {
                    label: "Skills",
                    value: "Welding, Technical Drawing".to_string()
                },
                DetailRow {
                    label: "Disability Type",
                    value: "Orthopedic".to_string()
                },
            ]
        );
        assert_eq!(view.requirements, vec!["NBI_Clearance.pdf"]);
        assert_eq!(view.badges.len(), 1);
    }

    #[test]
    fn test_view_defaults() {
        let user = User::new(4, "bare@email.com", "password", UserRole::Applicant)
            .with_profile(Profile {
                name: "Bare".to_string(),
                gender: Some(String::new()),
                profile_picture_url: Some(String::new()),
                ..Profile::default()
            });
        let view = ApplicantProfileView::from_user(&user, &ProfileConfig::default());

        assert_eq!(view.picture_url, "https://via.placeholder.com/150");
        assert_eq!(view.details.len(), 2);
        assert_eq!(view.details[0].value, "N/A");
        assert_eq!(view.details[1].value, "N/A");
        assert!(view.badges.is_empty());
        assert!(view.requirements.is_empty());
    }

    #[test]
    fn test_pwd_without_type_is_specified() {
        let mut user = maria();
        user.profile.pwd_type = Some(String::new());
        let view = ApplicantProfileView::from_user(&user, &ProfileConfig::default());
        assert_eq!(view.details[2].value, "Specified");
    }

    #[test]
    fn test_render_contains_profile() {
        let view = ApplicantProfileView::from_user(&maria(), &ProfileConfig::default());
        let html = render_applicant_profile(&view);

        assert!(html.contains("https://i.pravatar.cc/150?u=maria"));
        assert!(html.contains("Maria Santos"));
        assert!(html.contains("maria.santos@email.com"));
        assert!(html.contains("Disability Type"));
        assert!(html.contains("Welding, Technical Drawing"));
        assert!(html.contains("NBI_Clearance.pdf"));
        assert!(html.contains("fa-paperclip"));
        assert!(!html.contains("No documents uploaded."));
    }

    #[test]
    fn test_render_empty_requirements() {
        let mut user = maria();
        user.profile.requirements = Some(Vec::new());
        user.profile.is_pwd = Some(false);
        let view = ApplicantProfileView::from_user(&user, &ProfileConfig::default());
        let html = render_applicant_profile(&view);

        assert!(html.contains("No documents uploaded."));
        assert!(!html.contains("Disability Type"));
        assert!(!html.contains("fa-paperclip"));
    }

    #[test]
    fn test_null_lists_render_defaults() {
        let area = MemoryArea::new();
        area.set_item(
            "users",
            r#"[{"id":7,"email":"null@email.com","password":"p","role":"applicant",
                 "profile":{"name":"Null Lists","skills":null,"requirements":null,"pwd_type":null,"is_pwd":true}}]"#,
        )
        .unwrap();
        let store = DataStore::new(area);
        let page = FakePage::with_container("applicantProfileBody", "");

        let outcome = show_applicant_profile_modal(
            &store,
            &page,
            7,
            &FakeModal::default(),
            &ProfileConfig::default(),
        )
        .unwrap();

        assert_eq!(outcome, ProfileOutcome::Shown);
        let html = page.content("applicantProfileBody").unwrap();
        assert!(html.contains("N/A"));
        assert!(html.contains("No documents uploaded."));
        assert!(html.contains("PWD (Specified)"));
    }

    #[test]
    fn test_profile_text_is_escaped() {
        let mut user = maria();
        user.profile.name = "<script>x</script>".to_string();
        user.profile.requirements = Some(vec![Requirement::new("<img src=x onerror=alert(1)>")]);
        let html = render_applicant_profile(&ApplicantProfileView::from_user(
            &user,
            &ProfileConfig::default(),
        ));

        assert!(html.contains("&lt;script&gt;x"));
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<img src=x"));
    }

    #[test]
    fn test_show_renders_and_shows() {
        let store = store_with(&[maria()]);
        let page = FakePage::with_container("applicantProfileBody", "");
        let modal = FakeModal::default();

        let outcome =
            show_applicant_profile_modal(&store, &page, 2, &modal, &ProfileConfig::default())
                .unwrap();

        assert_eq!(outcome, ProfileOutcome::Shown);
        assert_eq!(modal.shown.get(), 1);
        assert!(page
            .content("applicantProfileBody")
            .unwrap()
            .contains("Maria Santos"));
        assert!(page.alerts.borrow().is_empty());
    }

    #[test]
    fn test_unknown_applicant_alerts() {
        let store = store_with(&[maria()]);
        let page = FakePage::with_container("applicantProfileBody", "previous");
        let modal = FakeModal::default();

        let outcome =
            show_applicant_profile_modal(&store, &page, 42, &modal, &ProfileConfig::default())
                .unwrap();

        assert_eq!(outcome, ProfileOutcome::ApplicantNotFound);
        assert_eq!(*page.alerts.borrow(), vec![APPLICANT_NOT_FOUND.to_string()]);
        assert_eq!(page.content("applicantProfileBody").as_deref(), Some("previous"));
        assert_eq!(modal.shown.get(), 0);
    }

    #[test]
    fn test_missing_container() {
        let store = store_with(&[maria()]);
        let page = FakePage::with_container("somethingElse", "");
        let modal = FakeModal::default();

        let outcome =
            show_applicant_profile_modal(&store, &page, 2, &modal, &ProfileConfig::default())
                .unwrap();

        assert_eq!(outcome, ProfileOutcome::ContainerMissing);
        assert_eq!(modal.shown.get(), 0);
        assert!(page.alerts.borrow().is_empty());
        assert_eq!(page.content("somethingElse").as_deref(), Some(""));
    }

    #[test]
    fn test_configured_container() {
        let store = store_with(&[maria()]);
        let page = FakePage::with_container("profileBody", "");
        let modal = FakeModal::default();
        let config = ProfileConfig {
            container_id: "profileBody".to_string(),
            ..ProfileConfig::default()
        };

        let outcome = show_applicant_profile_modal(&store, &page, 2, &modal, &config).unwrap();
        assert_eq!(outcome, ProfileOutcome::Shown);
    }

    #[test]
    fn test_malformed_users_propagates() {
        let area = MemoryArea::new();
        area.set_item("users", "[{").unwrap();
        let store = DataStore::new(area);
        let page = FakePage::with_container("applicantProfileBody", "");

        let result = show_applicant_profile_modal(
            &store,
            &page,
            2,
            &FakeModal::default(),
            &ProfileConfig::default(),
        );
        assert!(matches!(result, Err(StoreError::Parse { .. })));
    }
}
