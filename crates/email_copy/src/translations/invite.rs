use phf::phf_map;

use super::{FragmentMap, TemplateTable};

static INVITE_EN: FragmentMap = phf_map! {
    "subject" => "You've been invited to {platform_name}",
    "preheader" => "Your {platform_name} account is ready to be activated.",
    "email_header" => "Welcome to {platform_name}",
    "greeting" => "Hi {first_name},",
    "intro" => "You have been invited to join {platform_name}. Click the button below to set your password and activate your account.",
    "btn_text" => "Activate My Account",
    "expiration" => "This invitation link will expire in {expiration_days} days.",
    "support" => "If you have any questions, contact us at {support_email}.",
    "signoff" => "Best regards,",
    "signoff_team" => "The {platform_name} Team",
};

static INVITE_BR: FragmentMap = phf_map! {
    "subject" => "Você foi convidado para o {platform_name}",
    "preheader" => "Sua conta no {platform_name} está pronta para ser ativada.",
    "email_header" => "Bem-vindo ao {platform_name}",
    "greeting" => "Olá {first_name},",
    "intro" => "Você foi convidado a participar do {platform_name}. Clique no botão abaixo para definir sua senha e ativar sua conta.",
    "btn_text" => "Ativar Minha Conta",
    "expiration" => "Este link de convite expira em {expiration_days} dias.",
    "support" => "Em caso de dúvidas, entre em contato pelo e-mail {support_email}.",
    "signoff" => "Atenciosamente,",
    "signoff_team" => "Equipe {platform_name}",
};

pub static INVITE_EMAIL_TRANSLATIONS: TemplateTable = phf_map! {
    "en" => &INVITE_EN,
    "br" => &INVITE_BR,
};
