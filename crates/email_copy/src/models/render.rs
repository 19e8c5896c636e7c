use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{EmailCopyError, EmailCopyResult};
use crate::models::category::EmailCategory;
use crate::models::lookup::{FallbackPolicy, lookup_with_fallback};

/// Matches an escaped brace pair or a `{name}` placeholder.
static PLACEHOLDER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{|\}\}|\{(?P<name>[A-Za-z_][A-Za-z0-9_]*)\}")
        .expect("Failed to compile placeholder regex")
});

/// Named values substituted into email copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateArgs {
    values: BTreeMap<String, String>,
}

impl TemplateArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl ToString) {
        self.values.insert(name.into(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for TemplateArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = TemplateArgs::new();
        for (name, value) in iter {
            args.insert(name, value);
        }
        args
    }
}

fn check_literal(template: &str, start: usize, end: usize) -> EmailCopyResult<()> {
    match template[start..end].find(['{', '}']) {
        Some(offset) => Err(EmailCopyError::UnbalancedBrace {
            position: start + offset,
        }),
        None => Ok(()),
    }
}

/// Fills `{name}` placeholders in `template`.
///
/// `{{` and `}}` produce literal braces. Every placeholder needs a value in
/// `args`; unused arguments are ignored.
///
/// # Example
///
/// ```
/// use email_copy::{TemplateArgs, render};
///
/// let args = TemplateArgs::new().with("first_name", "Ana");
/// assert_eq!(render("Hi {first_name},", &args).unwrap(), "Hi Ana,");
/// ```
pub fn render(template: &str, args: &TemplateArgs) -> EmailCopyResult<String> {
    let mut output = String::with_capacity(template.len());
    let mut last = 0;

    for captures in PLACEHOLDER_PATTERN.captures_iter(template) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        check_literal(template, last, whole.start())?;
        output.push_str(&template[last..whole.start()]);

        match captures.name("name") {
            Some(name) => {
                let value = args.get(name.as_str()).ok_or_else(|| EmailCopyError::MissingArgument {
                    name: name.as_str().to_string(),
                })?;
                output.push_str(value);
            }
            None => output.push_str(&whole.as_str()[..1]),
        }
        last = whole.end();
    }

    check_literal(template, last, template.len())?;
    output.push_str(&template[last..]);
    Ok(output)
}

/// Placeholder names in order of first appearance.
pub fn placeholders(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for captures in PLACEHOLDER_PATTERN.captures_iter(template) {
        if let Some(name) = captures.name("name") {
            if !names.iter().any(|known| known == name.as_str()) {
                names.push(name.as_str().to_string());
            }
        }
    }
    names
}

/// Looks up a fragment and renders it in one step.
pub fn render_fragment(
    category: EmailCategory,
    language: &str,
    fragment: &str,
    args: &TemplateArgs,
    policy: FallbackPolicy,
) -> EmailCopyResult<String> {
    let template = lookup_with_fallback(category, language, fragment, policy)?;
    render(template, args)
}
