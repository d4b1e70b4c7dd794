//! Applicant list with the profile modal.

use dioxus::prelude::*;
use store::{Notifier, User};
use ui::views::{ApplicantBadges, ModalOverlay};
use ui::{
    generate_applicant_badges, make_store, platform_host, show_applicant_profile_modal,
    use_config, use_session, HostPage, LogoutButton, ModalHandle,
};

use crate::Route;

/// The in-app profile modal, driven like a page-owned one: the profile markup
/// lands in `body` and `show` opens the overlay.
struct ProfileModal {
    container_id: String,
    body: Signal<String>,
    open: Signal<bool>,
}

impl Notifier for ProfileModal {
    fn alert(&self, message: &str) {
        platform_host().alert(message);
    }
}

impl HostPage for ProfileModal {
    fn has_element(&self, element_id: &str) -> bool {
        element_id == self.container_id
    }

    fn set_inner_html(&self, _element_id: &str, html: &str) {
        let mut body = self.body;
        body.set(html.to_string());
    }
}

impl ModalHandle for ProfileModal {
    fn show(&self) {
        let mut open = self.open;
        open.set(true);
    }
}

#[component]
pub fn Applicants() -> Element {
    let session = use_session();
    let config = use_config();
    let nav = use_navigator();
    let body = use_signal(String::new);
    let mut open = use_signal(|| false);

    let Some(user) = session().user else {
        nav.replace(Route::Login {});
        return rsx! {};
    };

    let store = make_store();
    let applicants: Vec<User> = match store.users() {
        Ok(users) => users.into_iter().filter(User::is_applicant).collect(),
        Err(e) => {
            tracing::error!("Failed to read users: {}", e);
            Vec::new()
        }
    };
    let lmi_open = match store.get_settings() {
        Ok(settings) => settings.lmi_submission_open,
        Err(e) => {
            tracing::error!("Failed to read settings: {}", e);
            false
        }
    };

    rsx! {
        div {
            class: "container py-4",
            div {
                class: "d-flex justify-content-between align-items-center mb-3",
                h2 { class: "h4 mb-0", "Applicants" }
                div {
                    span { class: "text-muted me-3", "{user.display_name()} ({user.role})" }
                    LogoutButton { class: "btn btn-outline-secondary btn-sm" }
                }
            }

            p {
                class: "small text-muted",
                if lmi_open { "LMI submission is open." } else { "LMI submission is closed." }
            }

            table {
                class: "table table-hover bg-white applicant-table",
                thead {
                    tr {
                        th { "Applicant ID" }
                        th { "Name" }
                        th { "Email" }
                        th {}
                    }
                }
                tbody {
                    for applicant in applicants {
                        tr {
                            key: "{applicant.id}",
                            td { "{applicant.profile.applicant_id.clone().unwrap_or_default()}" }
                            td {
                                "{applicant.profile.name}"
                                ApplicantBadges {
                                    badges: generate_applicant_badges(Some(&applicant.profile)),
                                }
                            }
                            td { "{applicant.email}" }
                            td {
                                class: "text-end",
                                button {
                                    class: "btn btn-sm btn-primary",
                                    onclick: {
                                        let id = applicant.id;
                                        let profile_config = config.profile.clone();
                                        move |_| {
                                            let modal = ProfileModal {
                                                container_id: profile_config.container_id.clone(),
                                                body,
                                                open,
                                            };
                                            if let Err(e) = show_applicant_profile_modal(
                                                &make_store(),
                                                &modal,
                                                id,
                                                &modal,
                                                &profile_config,
                                            ) {
                                                tracing::error!("Failed to load applicant {}: {}", id, e);
                                            }
                                        }
                                    },
                                    "View Profile"
                                }
                            }
                        }
                    }
                }
            }
        }

        if open() {
            ModalOverlay {
                title: "Applicant Profile",
                on_close: move |_| open.set(false),
                div {
                    id: config.profile.container_id.clone(),
                    dangerous_inner_html: "{body}",
                }
            }
        }
    }
}
