use std::path::{Path, PathBuf};
use tokio::fs;

use crate::errors::RegistryResult;
use crate::models::indicator::IndicatorGroup;
use crate::models::translation::TranslationOverrides;

/// Parses one group-list from JSON text (an array of groups).
pub fn parse_groups(content: &str) -> RegistryResult<Vec<IndicatorGroup>> {
    Ok(serde_json::from_str(content)?)
}

pub fn parse_overrides(content: &str) -> RegistryResult<TranslationOverrides> {
    Ok(serde_json::from_str(content)?)
}

pub async fn load_groups_from_file(path: &Path) -> RegistryResult<Vec<IndicatorGroup>> {
    let content = fs::read_to_string(path).await?;
    let groups = parse_groups(&content)?;
    log::debug!("Loaded {} groups from {}", groups.len(), path.display());
    Ok(groups)
}

pub async fn save_groups_to_file(groups: &[IndicatorGroup], path: &Path) -> RegistryResult<()> {
    let json = serde_json::to_string_pretty(groups)?;
    fs::write(path, json).await?;
    Ok(())
}

pub async fn load_overrides_from_file(path: &Path) -> RegistryResult<TranslationOverrides> {
    let content = fs::read_to_string(path).await?;
    let overrides = parse_overrides(&content)?;
    log::debug!("Loaded {} translation overrides from {}", overrides.len(), path.display());
    Ok(overrides)
}

/// Loads every `*.json` file in `dir` as one group-list each.
///
/// Files are read in lexicographic filename order so the resulting registry
/// order does not depend on directory iteration order.
pub async fn load_groups_from_dir(dir: &Path) -> RegistryResult<Vec<Vec<IndicatorGroup>>> {
    let mut paths: Vec<PathBuf> = Vec::new();
    let mut entries = fs::read_dir(dir).await?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let is_json = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));
        if is_json && entry.file_type().await?.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut sources = Vec::with_capacity(paths.len());
    for path in &paths {
        sources.push(load_groups_from_file(path).await?);
    }

    log::info!("Loaded {} group files from {}", sources.len(), dir.display());
    Ok(sources)
}
