//! Special-status badges shown next to an applicant's name.

use dioxus::prelude::*;
use store::Profile;

use crate::views::{ApplicantBadges, ApplicantBadgesProps};

/// Disability label used when a PWD applicant left the subtype blank.
pub const UNSPECIFIED_DISABILITY: &str = "Specified";

#[derive(Clone, Debug, PartialEq)]
pub enum Badge {
    /// Person with disability, with the declared disability type.
    Pwd { disability: String },
    SeniorCitizen,
}

impl Badge {
    pub fn class(&self) -> &'static str {
        match self {
            Badge::Pwd { .. } => "badge bg-primary ms-2",
            Badge::SeniorCitizen => "badge bg-success ms-2",
        }
    }

    pub fn text(&self) -> String {
        match self {
            Badge::Pwd { disability } => format!("PWD ({disability})"),
            Badge::SeniorCitizen => "Senior Citizen".to_string(),
        }
    }
}

/// Badges for a profile; PWD always precedes Senior Citizen.
pub fn generate_applicant_badges(profile: Option<&Profile>) -> Vec<Badge> {
    let Some(profile) = profile else {
        return Vec::new();
    };

    let mut badges = Vec::new();
    if profile.is_pwd() {
        badges.push(Badge::Pwd {
            disability: disability_label(profile),
        });
    }
    if profile.is_senior() {
        badges.push(Badge::SeniorCitizen);
    }
    badges
}

/// Declared disability subtype, or [`UNSPECIFIED_DISABILITY`] when blank.
pub fn disability_label(profile: &Profile) -> String {
    match profile.pwd_type() {
        "" => UNSPECIFIED_DISABILITY.to_string(),
        declared => declared.to_string(),
    }
}

/// Render badges to an HTML fragment. No badges renders as an empty string.
pub fn render_badges(badges: &[Badge]) -> String {
    if badges.is_empty() {
        return String::new();
    }
    let mut dom = VirtualDom::new_with_props(
        ApplicantBadges,
        ApplicantBadgesProps::builder().badges(badges.to_vec()).build(),
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
