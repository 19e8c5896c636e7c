use phf::phf_map;

use super::{FragmentMap, TemplateTable};

static PASSWORD_RESET_EN: FragmentMap = phf_map! {
    "subject" => "Reset your {platform_name} password",
    "preheader" => "We received a request to reset your password.",
    "email_header" => "Password Reset",
    "greeting" => "Hi {first_name},",
    "intro" => "Someone requested a password reset for your {platform_name} account. Click the button below to choose a new password.",
    "btn_text" => "Reset Password",
    "expiration" => "This link will expire in {expiration_days} days.",
    "ignore_text" => "If you did not request a password reset, you can safely ignore this email. Your password will not change.",
    "support" => "If you have any questions, contact us at {support_email}.",
    "signoff" => "Best regards,",
    "signoff_team" => "The {platform_name} Team",
};

static PASSWORD_RESET_BR: FragmentMap = phf_map! {
    "subject" => "Redefina sua senha do {platform_name}",
    "preheader" => "Recebemos uma solicitação para redefinir sua senha.",
    "email_header" => "Redefinição de Senha",
    "greeting" => "Olá {first_name},",
    "intro" => "Foi solicitada a redefinição de senha da sua conta no {platform_name}. Clique no botão abaixo para escolher uma nova senha.",
    "btn_text" => "Redefinir Senha",
    "expiration" => "Este link expira em {expiration_days} dias.",
    "ignore_text" => "Se você não solicitou a redefinição de senha, ignore este e-mail. Sua senha não será alterada.",
    "support" => "Em caso de dúvidas, entre em contato pelo e-mail {support_email}.",
    "signoff" => "Atenciosamente,",
    "signoff_team" => "Equipe {platform_name}",
};

pub static PASSWORD_RESET_EMAIL_TRANSLATIONS: TemplateTable = phf_map! {
    "en" => &PASSWORD_RESET_EN,
    "br" => &PASSWORD_RESET_BR,
};
