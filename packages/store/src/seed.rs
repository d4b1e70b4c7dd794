//! First-run demo data.
//!
//! [`initialize_mock_data`] installs a fixed set of collections the first time
//! the portal is opened against empty storage, so every page has accounts to
//! log in with. The presence of the `users` key is the sentinel: once it holds
//! anything, initialization is a no-op.

use serde_json::Value;

use crate::area::{keys, StorageArea};
use crate::constants::UserRole;
use crate::data::DataStore;
use crate::error::StoreError;
use crate::host::Notifier;
use crate::models::{applicant_code, Profile, Requirement, Resume, Settings, User};

pub const SEED_NOTICE: &str = "No data found. Initializing with default mock data.";

const SEED_YEAR: i32 = 2025;
const DEFAULT_PASSWORD: &str = "password";

/// Seed the store unless `users` already exists. Returns whether it wrote anything.
pub fn initialize_mock_data<A: StorageArea>(
    store: &DataStore<A>,
    notifier: &impl Notifier,
) -> Result<bool, StoreError> {
    if store.contains(keys::USERS) {
        return Ok(false);
    }

    notifier.alert(SEED_NOTICE);

    let empty: [Value; 0] = [];
    store.save_users(&mock_users())?;
    store.save_data(keys::JOBS, &empty)?;
    store.save_data(keys::APPLICATIONS, &empty)?;
    store.save_data(keys::NOTIFICATIONS, &empty)?;
    store.save_settings(&Settings {
        lmi_submission_open: false,
    })?;

    tracing::debug!("seeded default mock data");
    Ok(true)
}

/// The default accounts: one administrator and three sample applicants.
pub fn mock_users() -> Vec<User> {
    vec![
        User::new(99, "admin@peso.gov", DEFAULT_PASSWORD, UserRole::Admin)
            .with_profile(Profile::named("PESO Administrator")),
        mock_applicant(
            1,
            "juan.dela.cruz@email.com",
            Profile {
                name: "Juan Dela Cruz".to_string(),
                phone: Some("09123456789".to_string()),
                gender: Some("Male".to_string()),
                profile_picture_url: Some("https://i.pravatar.cc/150?u=juan".to_string()),
                skills: Some(vec!["MS Office".to_string(), "Customer Service".to_string()]),
                resume: Some(Some(Resume::new("juan_resume.pdf"))),
                requirements: Some(vec![Requirement::new("NBI_Clearance.pdf")]),
                ..Profile::default()
            },
        ),
        mock_applicant(
            2,
            "maria.santos@email.com",
            Profile {
                name: "Maria Santos".to_string(),
                phone: Some("09987654321".to_string()),
                gender: Some("Female".to_string()),
                is_pwd: Some(true),
                pwd_type: Some("Orthopedic".to_string()),
                profile_picture_url: Some("https://i.pravatar.cc/150?u=maria".to_string()),
                skills: Some(vec!["Welding".to_string(), "Technical Drawing".to_string()]),
                ..Profile::default()
            },
        ),
        mock_applicant(
            3,
            "pedro.penduko@email.com",
            Profile {
                name: "Pedro Penduko".to_string(),
                phone: Some("09171112222".to_string()),
                gender: Some("Male".to_string()),
                is_senior: Some(true),
                profile_picture_url: Some("https://i.pravatar.cc/150?u=pedro".to_string()),
                skills: Some(vec!["Gardening".to_string(), "Driving".to_string()]),
                ..Profile::default()
            },
        ),
    ]
}

/// Applicants carry every profile key, even when unset, so page scripts can
/// index into them directly.
fn mock_applicant(id: u64, email: &str, profile: Profile) -> User {
    User::new(id, email, DEFAULT_PASSWORD, UserRole::Applicant).with_profile(Profile {
        applicant_id: Some(applicant_code(SEED_YEAR, id as u32)),
        is_pwd: profile.is_pwd.or(Some(false)),
        pwd_type: profile.pwd_type.clone().or(Some(String::new())),
        is_senior: profile.is_senior.or(Some(false)),
        resume: profile.resume.clone().or(Some(None)),
        requirements: profile.requirements.clone().or(Some(Vec::new())),
        ..profile
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryArea;
    use std::cell::RefCell;
    use std::collections::HashSet;

    #[derive(Default)]
    struct RecordingNotifier {
        alerts: RefCell<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn test_first_run_seeds_everything() {
        let area = MemoryArea::new();
        let store = DataStore::new(area.clone());
        let notifier = RecordingNotifier::default();

        assert!(initialize_mock_data(&store, &notifier).unwrap());
        assert_eq!(*notifier.alerts.borrow(), vec![SEED_NOTICE.to_string()]);

        let users = store.users().unwrap();
        assert_eq!(users.len(), 4);
        assert_eq!(
            users.iter().filter(|u| u.role == UserRole::Applicant).count(),
            3
        );
        let admin = store.find_user(99).unwrap().unwrap();
        assert_eq!(admin.role, UserRole::Admin);
        assert_eq!(admin.profile.name, "PESO Administrator");

        for key in [keys::JOBS, keys::APPLICATIONS, keys::NOTIFICATIONS] {
            assert_eq!(area.get_item(key).as_deref(), Some("[]"));
        }
        assert!(!store.get_settings().unwrap().lmi_submission_open);
        assert_eq!(area.write_count(), 5);
    }

    #[test]
    fn test_second_run_is_noop() {
        let area = MemoryArea::new();
        let store = DataStore::new(area.clone());
        let notifier = RecordingNotifier::default();

        assert!(initialize_mock_data(&store, &notifier).unwrap());
        let writes = area.write_count();
        let before = store.users().unwrap();

        assert!(!initialize_mock_data(&store, &notifier).unwrap());
        assert_eq!(area.write_count(), writes);
        assert_eq!(store.users().unwrap(), before);
        assert_eq!(notifier.alerts.borrow().len(), 1);
    }

    #[test]
    fn test_existing_users_are_kept() {
        let area = MemoryArea::new();
        let store = DataStore::new(area.clone());
        store.save_users(&[]).unwrap();

        assert!(!initialize_mock_data(&store, &RecordingNotifier::default()).unwrap());
        assert!(store.users().unwrap().is_empty());
        assert!(area.get_item(keys::JOBS).is_none());
    }

    #[test]
    fn test_mock_users_are_consistent() {
        let users = mock_users();
        let ids: HashSet<_> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids.len(), users.len());

        let maria = users.iter().find(|u| u.id == 2).unwrap();
        assert!(maria.profile.is_pwd());
        assert_eq!(maria.profile.pwd_type(), "Orthopedic");
        assert_eq!(maria.profile.applicant_id.as_deref(), Some("PESO-2025-000002"));

        let pedro = users.iter().find(|u| u.id == 3).unwrap();
        assert!(pedro.profile.is_senior() && !pedro.profile.is_pwd());
    }

    #[test]
    fn test_seeded_users_json_shape() {
        let area = MemoryArea::new();
        let store = DataStore::new(area.clone());
        initialize_mock_data(&store, &RecordingNotifier::default()).unwrap();

        let stored: Value = serde_json::from_str(&area.get_item(keys::USERS).unwrap()).unwrap();
        let expected = serde_json::json!([
            {
                "id": 99, "email": "admin@peso.gov", "password": "password", "role": "admin",
                "profile": { "name": "PESO Administrator" }
            },
            {
                "id": 1, "email": "juan.dela.cruz@email.com", "password": "password", "role": "applicant",
                "profile": {
                    "applicantId": "PESO-2025-000001", "name": "Juan Dela Cruz", "phone": "09123456789",
                    "gender": "Male", "is_pwd": false, "pwd_type": "", "is_senior": false,
                    "profile_picture_url": "https://i.pravatar.cc/150?u=juan",
                    "skills": ["MS Office", "Customer Service"],
                    "resume": { "fileName": "juan_resume.pdf" },
                    "requirements": [{ "name": "NBI_Clearance.pdf" }]
                }
            },
            {
                "id": 2, "email": "maria.santos@email.com", "password": "password", "role": "applicant",
                "profile": {
                    "applicantId": "PESO-2025-000002", "name": "Maria Santos", "phone": "09987654321",
                    "gender": "Female", "is_pwd": true, "pwd_type": "Orthopedic", "is_senior": false,
                    "profile_picture_url": "https://i.pravatar.cc/150?u=maria",
                    "skills": ["Welding", "Technical Drawing"], "resume": null, "requirements": []
                }
            },
            {
                "id": 3, "email": "pedro.penduko@email.com", "password": "password", "role": "applicant",
                "profile": {
                    "applicantId": "PESO-2025-000003", "name": "Pedro Penduko", "phone": "09171112222",
                    "gender": "Male", "is_pwd": false, "pwd_type": "", "is_senior": true,
                    "profile_picture_url": "https://i.pravatar.cc/150?u=pedro",
                    "skills": ["Gardening", "Driving"], "resume": null, "requirements": []
                }
            }
        ]);
        assert_eq!(stored, expected);
        assert_eq!(
            area.get_item(keys::SETTINGS).as_deref(),
            Some(r#"{"lmiSubmissionOpen":false}"#)
        );
    }
}
