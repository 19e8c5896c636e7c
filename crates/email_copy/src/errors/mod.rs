use thiserror::Error;

/// Centralized error type for email copy lookups and rendering
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailCopyError {
    #[error("No '{language}' templates for {category} email")]
    LanguageNotFound {
        category: &'static str,
        language: String,
    },

    #[error("Fragment '{fragment}' missing from '{language}' {category} email")]
    FragmentNotFound {
        category: &'static str,
        language: String,
        fragment: String,
    },

    #[error("No value for placeholder '{name}'")]
    MissingArgument { name: String },

    #[error("Unbalanced brace at byte {position}")]
    UnbalancedBrace { position: usize },
}

/// Alias for fallible operations in the email copy registry
pub type EmailCopyResult<T> = Result<T, EmailCopyError>;
