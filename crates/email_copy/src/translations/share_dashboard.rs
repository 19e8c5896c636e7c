use phf::phf_map;

use super::{FragmentMap, TemplateTable};

static SHARE_DASHBOARD_EN: FragmentMap = phf_map! {
    "subject" => "{sender_name} shared the dashboard \"{dashboard_name}\" with you",
    "preheader" => "A dashboard from {platform_name} is waiting for you.",
    "email_header" => "A Dashboard Was Shared With You",
    "greeting" => "Hi {first_name},",
    "intro" => "{sender_name} shared the dashboard \"{dashboard_name}\" from {platform_name} with you.",
    "message_intro" => "Message from {sender_name}:",
    "btn_text" => "Access the Dashboard",
    "support" => "If you have any questions, contact us at {support_email}.",
    "signoff" => "Best regards,",
    "signoff_team" => "The {platform_name} Team",
};

static SHARE_DASHBOARD_BR: FragmentMap = phf_map! {
    "subject" => "{sender_name} compartilhou o painel \"{dashboard_name}\" com você",
    "preheader" => "Um painel do {platform_name} está esperando por você.",
    "email_header" => "Um Painel Foi Compartilhado com Você",
    "greeting" => "Olá {first_name},",
    "intro" => "{sender_name} compartilhou com você o painel \"{dashboard_name}\" do {platform_name}.",
    "message_intro" => "Mensagem de {sender_name}:",
    "btn_text" => "Acesse o Painel",
    "support" => "Em caso de dúvidas, entre em contato pelo e-mail {support_email}.",
    "signoff" => "Atenciosamente,",
    "signoff_team" => "Equipe {platform_name}",
};

pub static SHARE_DASHBOARD_EMAIL_TRANSLATIONS: TemplateTable = phf_map! {
    "en" => &SHARE_DASHBOARD_EN,
    "br" => &SHARE_DASHBOARD_BR,
};
