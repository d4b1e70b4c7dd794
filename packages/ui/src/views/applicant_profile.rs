use dioxus::prelude::*;

use crate::badges::Badge;
use crate::profile::ApplicantProfileView;

/// Inline special-status badges.
#[component]
pub fn ApplicantBadges(badges: Vec<Badge>) -> Element {
    rsx! {
        for badge in badges.iter() {
            span {
                class: badge.class(),
                "{badge.text()}"
            }
        }
    }
}

/// Two-column profile card: picture and identity on the left, personal
/// details and uploaded requirements on the right.
#[component]
pub fn ApplicantProfileCard(view: ApplicantProfileView) -> Element {
    rsx! {
        div {
            class: "row",
            div {
                class: "col-md-4 text-center",
                img {
                    src: "{view.picture_url}",
                    class: "img-fluid rounded-circle mb-3",
                    alt: "Profile Picture",
                    width: "150",
                    height: "150",
                }
                h4 { "{view.name}" }
                div {
                    ApplicantBadges { badges: view.badges.clone() }
                }
                p { class: "text-muted small", "{view.email}" }
            }
            div {
                class: "col-md-8",
                h5 {
                    i { class: "fas fa-user-circle me-2" }
                    "Personal Details"
                }
                table {
                    class: "table table-sm table-borderless",
                    tbody {
                        for row in view.details.iter() {
                            tr {
                                th { style: "width: 120px;", "{row.label}:" }
                                td { "{row.value}" }
                            }
                        }
                    }
                }
                hr {}
                h5 {
                    i { class: "fas fa-file-alt me-2" }
                    "Uploaded Requirements"
                }
                ul {
                    class: "list-group",
                    if view.requirements.is_empty() {
                        li { class: "list-group-item text-muted", "No documents uploaded." }
                    } else {
                        for name in view.requirements.iter() {
                            li {
                                class: "list-group-item",
                                i { class: "fas fa-paperclip me-2" }
                                "{name}"
                            }
                        }
                    }
                }
            }
        }
    }
}
