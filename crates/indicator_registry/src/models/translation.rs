use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::indicator::IndicatorGroup;

/// Replacement display strings keyed by group id or indicator id.
///
/// # Example
/// ```rust
/// use indicator_registry::models::translation::TranslationOverrides;
///
/// let overrides = TranslationOverrides::from_pairs(&[("g1", "New Text")]);
///
/// assert_eq!(overrides.translate("g1", "Old Text"), "New Text");
/// assert_eq!(overrides.translate("g2", "Old Text"), "Old Text");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationOverrides {
    entries: HashMap<String, String>,
}

impl TranslationOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn insert(&mut self, identifier: &str, text: &str) {
        self.entries.insert(identifier.to_string(), text.to_string());
    }

    /// Entries from `other` replace entries with the same key.
    pub fn merge(&mut self, other: TranslationOverrides) {
        self.entries.extend(other.entries);
    }

    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.entries.get(identifier).map(String::as_str)
    }

    /// Returns the override for `identifier`, or `default_text` when none exists.
    pub fn translate<'a>(&'a self, identifier: &str, default_text: &'a str) -> &'a str {
        self.get(identifier).unwrap_or(default_text)
    }

    /// Replaces group and indicator text in place.
    ///
    /// Overrides are a total replace, so applying them again is a no-op.
    /// Returns the number of labels replaced.
    pub fn apply(&self, groups: &mut [IndicatorGroup]) -> usize {
        let mut replaced = 0;

        for group in groups.iter_mut() {
            if let Some(text) = self.get(&group.group_id) {
                group.group_text = text.to_string();
                replaced += 1;
            }

            for indicator in group.indicators.iter_mut() {
                if let Some(text) = self.get(&indicator.id) {
                    indicator.text = text.to_string();
                    replaced += 1;
                }
            }
        }

        replaced
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
