use serde::{Deserialize, Serialize};

use crate::translations::{
    ACCESS_GRANTED_EMAIL_TRANSLATIONS, ALERT_EMAIL_TRANSLATIONS, INVITE_EMAIL_TRANSLATIONS,
    NEW_DASHBOARD_EMAIL_TRANSLATIONS, PASSWORD_RESET_EMAIL_TRANSLATIONS,
    SHARE_ANALYSIS_EMAIL_TRANSLATIONS, SHARE_DASHBOARD_EMAIL_TRANSLATIONS, TemplateTable,
};

/// Kind of transactional email the mailer can send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailCategory {
    Invite,
    PasswordReset,
    Alert,
    AccessGranted,
    NewDashboard,
    ShareAnalysis,
    ShareDashboard,
}

pub const EMAIL_CATEGORIES: &[EmailCategory] = &[
    EmailCategory::Invite,
    EmailCategory::PasswordReset,
    EmailCategory::Alert,
    EmailCategory::AccessGranted,
    EmailCategory::NewDashboard,
    EmailCategory::ShareAnalysis,
    EmailCategory::ShareDashboard,
];

impl EmailCategory {
    pub fn table(&self) -> &'static TemplateTable {
        match self {
            EmailCategory::Invite => &INVITE_EMAIL_TRANSLATIONS,
            EmailCategory::PasswordReset => &PASSWORD_RESET_EMAIL_TRANSLATIONS,
            EmailCategory::Alert => &ALERT_EMAIL_TRANSLATIONS,
            EmailCategory::AccessGranted => &ACCESS_GRANTED_EMAIL_TRANSLATIONS,
            EmailCategory::NewDashboard => &NEW_DASHBOARD_EMAIL_TRANSLATIONS,
            EmailCategory::ShareAnalysis => &SHARE_ANALYSIS_EMAIL_TRANSLATIONS,
            EmailCategory::ShareDashboard => &SHARE_DASHBOARD_EMAIL_TRANSLATIONS,
        }
    }

    /// Short key used in logs and errors.
    pub fn key(&self) -> &'static str {
        match self {
            EmailCategory::Invite => "invite",
            EmailCategory::PasswordReset => "password_reset",
            EmailCategory::Alert => "alert",
            EmailCategory::AccessGranted => "access_granted",
            EmailCategory::NewDashboard => "new_dashboard",
            EmailCategory::ShareAnalysis => "share_analysis",
            EmailCategory::ShareDashboard => "share_dashboard",
        }
    }

    /// Name of the static table backing this category.
    pub fn table_name(&self) -> &'static str {
        match self {
            EmailCategory::Invite => "INVITE_EMAIL_TRANSLATIONS",
            EmailCategory::PasswordReset => "PASSWORD_RESET_EMAIL_TRANSLATIONS",
            EmailCategory::Alert => "ALERT_EMAIL_TRANSLATIONS",
            EmailCategory::AccessGranted => "ACCESS_GRANTED_EMAIL_TRANSLATIONS",
            EmailCategory::NewDashboard => "NEW_DASHBOARD_EMAIL_TRANSLATIONS",
            EmailCategory::ShareAnalysis => "SHARE_ANALYSIS_EMAIL_TRANSLATIONS",
            EmailCategory::ShareDashboard => "SHARE_DASHBOARD_EMAIL_TRANSLATIONS",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        EMAIL_CATEGORIES
            .iter()
            .copied()
            .find(|category| category.key().eq_ignore_ascii_case(key.trim()))
    }

    pub fn all() -> &'static [EmailCategory] {
        EMAIL_CATEGORIES
    }

    /// Language codes with copy for this category, sorted.
    pub fn languages(&self) -> Vec<&'static str> {
        let mut languages: Vec<&'static str> = self.table().keys().copied().collect();
        languages.sort_unstable();
        languages
    }

    pub fn has_language(&self, language: &str) -> bool {
        self.table().contains_key(language)
    }
}

impl std::fmt::Display for EmailCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
