use crate::errors::{EmailCopyError, EmailCopyResult};
use crate::models::category::EmailCategory;
use crate::translations::FragmentMap;

pub const DEFAULT_LANGUAGE: &str = "en";

/// What a lookup does when the requested language or fragment is missing.
///
/// The registry never falls back on its own: callers opt in explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Report the miss.
    #[default]
    Strict,
    /// Retry once with the given language code.
    Language(&'static str),
}

impl FallbackPolicy {
    /// Falls back to English.
    pub const fn english() -> Self {
        FallbackPolicy::Language(DEFAULT_LANGUAGE)
    }
}

/// All fragments for one category and language.
///
/// The language code is looked up as given; it is not normalized or validated.
pub fn template_set(category: EmailCategory, language: &str) -> EmailCopyResult<&'static FragmentMap> {
    category
        .table()
        .get(language)
        .copied()
        .ok_or_else(|| EmailCopyError::LanguageNotFound {
            category: category.key(),
            language: language.to_string(),
        })
}

pub fn lookup(category: EmailCategory, language: &str, fragment: &str) -> EmailCopyResult<&'static str> {
    template_set(category, language)?
        .get(fragment)
        .copied()
        .ok_or_else(|| EmailCopyError::FragmentNotFound {
            category: category.key(),
            language: language.to_string(),
            fragment: fragment.to_string(),
        })
}

/// Like [`lookup`], applying `policy` on a miss.
///
/// When the fallback language misses too, its error is returned.
pub fn lookup_with_fallback(
    category: EmailCategory,
    language: &str,
    fragment: &str,
    policy: FallbackPolicy,
) -> EmailCopyResult<&'static str> {
    match (lookup(category, language, fragment), policy) {
        (Ok(template), _) => Ok(template),
        (Err(err), FallbackPolicy::Strict) => Err(err),
        (Err(err), FallbackPolicy::Language(fallback)) => {
            if fallback == language {
                return Err(err);
            }
            log::debug!(
                "Falling back to '{}' for {} email fragment '{}': {}",
                fallback,
                category,
                fragment,
                err
            );
            lookup(category, fallback, fragment)
        }
    }
}
