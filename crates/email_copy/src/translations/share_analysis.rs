use phf::phf_map;

use super::{FragmentMap, TemplateTable};

static SHARE_ANALYSIS_EN: FragmentMap = phf_map! {
    "subject" => "{sender_name} shared an analysis with you",
    "preheader" => "An analysis from {platform_name} is waiting for you.",
    "email_header" => "An Analysis Was Shared With You",
    "greeting" => "Hi {first_name},",
    "intro" => "{sender_name} shared an analysis from {platform_name} with you.",
    "message_intro" => "Message from {sender_name}:",
    "btn_text" => "Access the Analysis",
    "support" => "If you have any questions, contact us at {support_email}.",
    "signoff" => "Best regards,",
    "signoff_team" => "The {platform_name} Team",
};

static SHARE_ANALYSIS_BR: FragmentMap = phf_map! {
    "subject" => "{sender_name} compartilhou uma análise com você",
    "preheader" => "Uma análise do {platform_name} está esperando por você.",
    "email_header" => "Uma Análise Foi Compartilhada com Você",
    "greeting" => "Olá {first_name},",
    "intro" => "{sender_name} compartilhou com você uma análise do {platform_name}.",
    "message_intro" => "Mensagem de {sender_name}:",
    "btn_text" => "Acesse a Análise",
    "support" => "Em caso de dúvidas, entre em contato pelo e-mail {support_email}.",
    "signoff" => "Atenciosamente,",
    "signoff_team" => "Equipe {platform_name}",
};

pub static SHARE_ANALYSIS_EMAIL_TRANSLATIONS: TemplateTable = phf_map! {
    "en" => &SHARE_ANALYSIS_EN,
    "br" => &SHARE_ANALYSIS_BR,
};
