//! # Lookup tables shared by every page
//!
//! | Enum | Wire form | Purpose |
//! |------|-----------|---------|
//! | [`UserRole`] | lowercase (`"applicant"`) | Which portal a user logs into. |
//! | [`ApplicationStatus`] | display label (`"For Screening"`) | Stage of a job application, from PESO screening through the employer's decision. |
//!
//! Both serialize to the exact strings the pages compare against, so records
//! stay readable by any script sharing the same storage.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Applicant,
    Employer,
    Admin,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Applicant, UserRole::Employer, UserRole::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Applicant => "applicant",
            UserRole::Employer => "employer",
            UserRole::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserRole::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("Unknown role: {s}"))
    }
}

/// Status of an application, in workflow order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationStatus {
    #[serde(rename = "For Screening")]
    ForScreening,
    #[serde(rename = "Withdrawn")]
    Withdrawn,
    #[serde(rename = "Not Qualified (by PESO)")]
    NotQualified,
    #[serde(rename = "Referred to Employer")]
    Referred,
    #[serde(rename = "Under Review")]
    UnderReview,
    #[serde(rename = "For Initial Interview")]
    ForInitialInterview,
    #[serde(rename = "For Exam")]
    ForExam,
    #[serde(rename = "For Final Interview")]
    ForFinalInterview,
    #[serde(rename = "Job Offer")]
    JobOffer,
    #[serde(rename = "Hired")]
    Hired,
    #[serde(rename = "Not Selected (by Employer)")]
    NotSelected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 11] = [
        ApplicationStatus::ForScreening,
        ApplicationStatus::Withdrawn,
        ApplicationStatus::NotQualified,
        ApplicationStatus::Referred,
        ApplicationStatus::UnderReview,
        ApplicationStatus::ForInitialInterview,
        ApplicationStatus::ForExam,
        ApplicationStatus::ForFinalInterview,
        ApplicationStatus::JobOffer,
        ApplicationStatus::Hired,
        ApplicationStatus::NotSelected,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::ForScreening => "For Screening",
            ApplicationStatus::Withdrawn => "Withdrawn",
            ApplicationStatus::NotQualified => "Not Qualified (by PESO)",
            ApplicationStatus::Referred => "Referred to Employer",
            ApplicationStatus::UnderReview => "Under Review",
            ApplicationStatus::ForInitialInterview => "For Initial Interview",
            ApplicationStatus::ForExam => "For Exam",
            ApplicationStatus::ForFinalInterview => "For Final Interview",
            ApplicationStatus::JobOffer => "Job Offer",
            ApplicationStatus::Hired => "Hired",
            ApplicationStatus::NotSelected => "Not Selected (by Employer)",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApplicationStatus::ALL
            .into_iter()
            .find(|status| status.label() == s)
            .ok_or_else(|| format!("Unknown application status: {s}"))
    }
}
