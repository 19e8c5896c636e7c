use std::collections::BTreeSet;

use anyhow::{Result, bail};
use email_copy::{EmailCategory, lookup, placeholders, template_set};
use indicator_registry::{DataSourceDescriptor, IndicatorRegistry};
use serde::Serialize;

/// Placeholders the mailer knows how to fill.
pub const KNOWN_PLACEHOLDERS: &[&str] = &[
    "first_name",
    "platform_name",
    "support_email",
    "expiration_days",
    "dashboard_name",
    "dashboard_owner",
    "granted_permissions",
    "sender_name",
];

#[derive(Debug, Serialize)]
pub struct RegistrySummary {
    pub groups: usize,
    pub hidden_groups: usize,
    pub indicators: usize,
    pub data_sources: usize,
    pub first_group: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EmailCatalogSummary {
    pub category: &'static str,
    pub table: &'static str,
    pub languages: Vec<&'static str>,
    pub fragments: usize,
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub registry: RegistrySummary,
    pub email_catalogs: Vec<EmailCatalogSummary>,
}

pub fn summarize_registry(registry: &IndicatorRegistry<DataSourceDescriptor>) -> RegistrySummary {
    RegistrySummary {
        groups: registry.count_groups(),
        hidden_groups: registry.groups().len() - registry.visible_groups().len(),
        indicators: registry.count_indicators(),
        data_sources: registry.data_sources().len(),
        first_group: registry.groups().first().map(|g| g.group_id.clone()),
    }
}

/// Problems found in one category's copy; empty when the category is usable.
pub fn email_catalog_problems(category: EmailCategory) -> Vec<String> {
    let mut problems = Vec::new();

    let english = match template_set(category, "en") {
        Ok(fragments) => fragments,
        Err(e) => {
            problems.push(e.to_string());
            return problems;
        }
    };
    let reference: BTreeSet<&str> = english.keys().copied().collect();

    for language in category.languages() {
        let Ok(fragments) = template_set(category, language) else {
            continue;
        };
        let names: BTreeSet<&str> = fragments.keys().copied().collect();
        for missing in reference.difference(&names) {
            problems.push(format!("{} '{}' lacks fragment '{}'", category, language, missing));
        }
        for extra in names.difference(&reference) {
            problems.push(format!("{} '{}' has extra fragment '{}'", category, language, extra));
        }

        for fragment in &names {
            let Ok(template) = lookup(category, language, fragment) else {
                continue;
            };
            for name in placeholders(template) {
                if !KNOWN_PLACEHOLDERS.contains(&name.as_str()) {
                    problems.push(format!(
                        "{} '{}' fragment '{}' uses unknown placeholder '{}'",
                        category, language, fragment, name
                    ));
                }
            }
        }
    }

    problems
}

pub fn check_email_catalogs() -> Result<Vec<EmailCatalogSummary>> {
    let mut summaries = Vec::new();
    let mut problems = Vec::new();

    for category in EmailCategory::all() {
        let found = email_catalog_problems(*category);
        if found.is_empty() {
            log::debug!("{} copy is consistent", category.table_name());
        }
        problems.extend(found);

        summaries.push(EmailCatalogSummary {
            category: category.key(),
            table: category.table_name(),
            languages: category.languages(),
            fragments: template_set(*category, "en").map(|f| f.len()).unwrap_or(0),
        });
    }

    if !problems.is_empty() {
        for problem in &problems {
            log::error!("{}", problem);
        }
        bail!("{} problem(s) found in email copy", problems.len());
    }

    Ok(summaries)
}
