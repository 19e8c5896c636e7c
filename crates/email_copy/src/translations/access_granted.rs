use phf::phf_map;

use super::{FragmentMap, TemplateTable};

static ACCESS_GRANTED_EN: FragmentMap = phf_map! {
    "subject" => "{dashboard_owner} shared a dashboard with you",
    "preheader" => "You now have access to \"{dashboard_name}\".",
    "email_header" => "You've Been Granted Access",
    "greeting" => "Hi {first_name},",
    "intro" => "{dashboard_owner} has granted you {granted_permissions} access to the dashboard \"{dashboard_name}\" on {platform_name}.",
    "btn_text" => "Open Dashboard",
    "support" => "If you have any questions, contact us at {support_email}.",
    "signoff" => "Best regards,",
    "signoff_team" => "The {platform_name} Team",
};

// Only English copy exists for this email.
pub static ACCESS_GRANTED_EMAIL_TRANSLATIONS: TemplateTable = phf_map! {
    "en" => &ACCESS_GRANTED_EN,
};
