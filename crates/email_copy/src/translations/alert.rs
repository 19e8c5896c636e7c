use phf::phf_map;

use super::{FragmentMap, TemplateTable};

static ALERT_EN: FragmentMap = phf_map! {
    "subject" => "Your {platform_name} alert summary",
    "preheader" => "New alerts were triggered for the indicators you follow.",
    "email_header" => "Alert Summary",
    "greeting" => "Hi {first_name},",
    "intro" => "The following alerts were triggered for the indicators you follow on {platform_name}:",
    "title_td" => "Alert",
    "geography_td" => "Geography",
    "previous_alert_txt" => "Previously triggered alerts",
    "no_alert_text" => "No alerts were triggered during this period.",
    "btn_text" => "View All Alerts",
    "support" => "If you have any questions, contact us at {support_email}.",
    "signoff" => "Best regards,",
    "signoff_team" => "The {platform_name} Team",
};

static ALERT_BR: FragmentMap = phf_map! {
    "subject" => "Resumo de alertas do {platform_name}",
    "preheader" => "Novos alertas foram disparados para os indicadores que você acompanha.",
    "email_header" => "Resumo de Alertas",
    "greeting" => "Olá {first_name},",
    "intro" => "Os seguintes alertas foram disparados para os indicadores que você acompanha no {platform_name}:",
    "title_td" => "Alerta",
    "geography_td" => "Localidade",
    "previous_alert_txt" => "Alertas disparados anteriormente",
    "no_alert_text" => "Nenhum alerta foi disparado neste período.",
    "btn_text" => "Ver Todos os Alertas",
    "support" => "Em caso de dúvidas, entre em contato pelo e-mail {support_email}.",
    "signoff" => "Atenciosamente,",
    "signoff_team" => "Equipe {platform_name}",
};

pub static ALERT_EMAIL_TRANSLATIONS: TemplateTable = phf_map! {
    "en" => &ALERT_EN,
    "br" => &ALERT_BR,
};
