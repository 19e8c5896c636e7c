use std::env;
use std::path::PathBuf;

use crate::catalog;
use crate::errors::{RegistryError, RegistryResult};
use crate::models::loader::{load_groups_from_dir, load_overrides_from_file};
use crate::models::registry::{DuplicatePolicy, RegistryBuilder};

pub const ASSET_DIR_VAR: &str = "INDICATOR_ASSET_DIR";
pub const TRANSLATIONS_VAR: &str = "INDICATOR_TRANSLATIONS";
pub const DUPLICATE_POLICY_VAR: &str = "INDICATOR_DUPLICATE_POLICY";
pub const SKIP_BUILTIN_VAR: &str = "INDICATOR_SKIP_BUILTIN";

/// Where registry data comes from and how conflicts are handled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Directory of JSON group files, appended after the built-in catalog.
    pub asset_dir: Option<PathBuf>,
    /// JSON translation file merged over the built-in overrides.
    pub translations_path: Option<PathBuf>,
    pub duplicate_policy: DuplicatePolicy,
    pub include_builtin: bool,
}

impl RegistryConfig {
    pub fn from_env() -> RegistryResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> RegistryResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let duplicate_policy = match non_empty(DUPLICATE_POLICY_VAR) {
            Some(value) => DuplicatePolicy::parse(&value).ok_or_else(|| {
                RegistryError::Config(format!(
                    "{} must be 'reject' or 'last-writer-wins', got '{}'",
                    DUPLICATE_POLICY_VAR, value
                ))
            })?,
            None => DuplicatePolicy::default(),
        };

        let skip_builtin = match non_empty(SKIP_BUILTIN_VAR) {
            Some(value) => parse_flag(&value).ok_or_else(|| {
                RegistryError::Config(format!(
                    "{} must be a boolean flag, got '{}'",
                    SKIP_BUILTIN_VAR, value
                ))
            })?,
            None => false,
        };

        Ok(Self {
            asset_dir: non_empty(ASSET_DIR_VAR).map(PathBuf::from),
            translations_path: non_empty(TRANSLATIONS_VAR).map(PathBuf::from),
            duplicate_policy,
            include_builtin: !skip_builtin,
        })
    }

    /// Built-in catalog only, rejecting duplicates.
    pub fn builtin() -> Self {
        Self {
            include_builtin: true,
            ..Self::default()
        }
    }

    /// Reads every configured asset and returns a builder ready to `build`.
    pub async fn into_builder(self) -> RegistryResult<RegistryBuilder> {
        let mut builder = if self.include_builtin {
            catalog::builder()
        } else {
            RegistryBuilder::new()
        };
        builder = builder.with_policy(self.duplicate_policy);

        if let Some(dir) = &self.asset_dir {
            for source in load_groups_from_dir(dir).await? {
                builder = builder.add_source(source);
            }
        }

        if let Some(path) = &self.translations_path {
            builder = builder.with_overrides(load_overrides_from_file(path).await?);
        }

        if builder.source_count() == 0 {
            log::warn!("Registry configuration has no group sources");
        }

        Ok(builder)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::data_source::DescriptorFactory;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = RegistryConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.asset_dir, None);
        assert_eq!(config.translations_path, None);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Reject);
        assert!(config.include_builtin);
        assert_eq!(config, RegistryConfig::builtin());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = RegistryConfig::from_lookup(lookup_from(&[
            (ASSET_DIR_VAR, "/srv/indicators"),
            (TRANSLATIONS_VAR, "/srv/translations.json"),
            (DUPLICATE_POLICY_VAR, "last-writer-wins"),
            (SKIP_BUILTIN_VAR, "true"),
        ]))
        .unwrap();

        assert_eq!(config.asset_dir, Some(PathBuf::from("/srv/indicators")));
        assert_eq!(config.translations_path, Some(PathBuf::from("/srv/translations.json")));
        assert_eq!(config.duplicate_policy, DuplicatePolicy::LastWriterWins);
        assert!(!config.include_builtin);
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = RegistryConfig::from_lookup(lookup_from(&[(ASSET_DIR_VAR, "  ")])).unwrap();
        assert_eq!(config.asset_dir, None);
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        let result = RegistryConfig::from_lookup(lookup_from(&[(DUPLICATE_POLICY_VAR, "first")]));
        assert!(matches!(result, Err(RegistryError::Config(_))));

        let result = RegistryConfig::from_lookup(lookup_from(&[(SKIP_BUILTIN_VAR, "maybe")]));
        assert!(matches!(result, Err(RegistryError::Config(_))));
    }

    #[tokio::test]
    async fn test_into_builder_appends_assets_after_builtin() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("extra.json"),
            r#"[{"groupId": "extra", "groupText": "Extra", "groupTextShort": "Extra", "indicators": [{"id": "extra_1", "text": "Extra 1"}]}]"#,
        )
        .unwrap();
        let translations = dir.path().join("translations.txt");
        std::fs::write(&translations, r#"{"extra_1": "Extra Traduzido"}"#).unwrap();

        let config = RegistryConfig {
            asset_dir: Some(dir.path().to_path_buf()),
            translations_path: Some(translations),
            ..RegistryConfig::builtin()
        };
        let registry = config.into_builder().await.unwrap().build(&DescriptorFactory).unwrap();

        let last = registry.groups().last().unwrap();
        assert_eq!(last.group_id, "extra");
        assert_eq!(registry.lookup("extra_1").unwrap().text, "Extra Traduzido");
        assert_eq!(
            registry.groups()[0].group_id,
            catalog::GROUP_SOURCES[0][0].group_id
        );
    }

    #[tokio::test]
    async fn test_into_builder_without_builtin() {
        let config = RegistryConfig {
            include_builtin: false,
            ..RegistryConfig::default()
        };
        let registry = config.into_builder().await.unwrap().build(&DescriptorFactory).unwrap();

        assert_eq!(registry.count_groups(), 0);
    }
}
