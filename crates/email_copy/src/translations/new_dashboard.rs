use phf::phf_map;

use super::{FragmentMap, TemplateTable};

static NEW_DASHBOARD_EN: FragmentMap = phf_map! {
    "subject" => "Your new dashboard \"{dashboard_name}\" is ready",
    "preheader" => "Your dashboard was created on {platform_name}.",
    "email_header" => "Dashboard Created",
    "greeting" => "Hi {first_name},",
    "intro" => "Your dashboard \"{dashboard_name}\" was created on {platform_name}. You can find it at any time in your list of dashboards.",
    "btn_text" => "View Dashboard",
    "support" => "If you have any questions, contact us at {support_email}.",
    "signoff" => "Best regards,",
    "signoff_team" => "The {platform_name} Team",
};

pub static NEW_DASHBOARD_EMAIL_TRANSLATIONS: TemplateTable = phf_map! {
    "en" => &NEW_DASHBOARD_EN,
};
