//! Localized email copy, one table per email category.
//!
//! Each table maps a language code to the fragment map for that language.
//! Fragment values are format strings with `{name}` placeholders, filled in
//! by [`crate::models::render`].

pub mod access_granted;
pub mod alert;
pub mod invite;
pub mod new_dashboard;
pub mod password_reset;
pub mod share_analysis;
pub mod share_dashboard;

pub use access_granted::ACCESS_GRANTED_EMAIL_TRANSLATIONS;
pub use alert::ALERT_EMAIL_TRANSLATIONS;
pub use invite::INVITE_EMAIL_TRANSLATIONS;
pub use new_dashboard::NEW_DASHBOARD_EMAIL_TRANSLATIONS;
pub use password_reset::PASSWORD_RESET_EMAIL_TRANSLATIONS;
pub use share_analysis::SHARE_ANALYSIS_EMAIL_TRANSLATIONS;
pub use share_dashboard::SHARE_DASHBOARD_EMAIL_TRANSLATIONS;

/// Fragment name -> format string.
pub type FragmentMap = phf::Map<&'static str, &'static str>;

/// Language code -> fragments.
pub type TemplateTable = phf::Map<&'static str, &'static FragmentMap>;
