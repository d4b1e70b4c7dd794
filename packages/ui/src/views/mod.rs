mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod applicant_profile;
pub use applicant_profile::{
    ApplicantBadges, ApplicantBadgesProps, ApplicantProfileCard, ApplicantProfileCardProps,
};
