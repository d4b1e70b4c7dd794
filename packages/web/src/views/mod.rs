mod login;
pub use login::Login;

mod applicants;
pub use applicants::Applicants;
