use std::collections::{HashMap, HashSet};

use crate::errors::{RegistryError, RegistryResult};
use crate::models::data_source::DataSourceFactory;
use crate::models::indicator::{Indicator, IndicatorGroup, IndicatorGroupDef};
use crate::models::translation::TranslationOverrides;

/// What to do when two groups share a `group_id` or two indicators share an `id`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Abort construction with a configuration error.
    #[default]
    Reject,
    /// Keep every group. Lookups by indicator id or group id resolve to the
    /// last-processed definition.
    LastWriterWins,
}

impl DuplicatePolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "reject" => Some(Self::Reject),
            "last-writer-wins" | "last_writer_wins" => Some(Self::LastWriterWins),
            _ => None,
        }
    }
}

/// Collects group-lists in order and turns them into an [`IndicatorRegistry`].
///
/// Construction runs a fixed pipeline: concatenate, validate, translate,
/// index, materialize. Data sources therefore always see translated text.
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    sources: Vec<Vec<IndicatorGroup>>,
    overrides: TranslationOverrides,
    policy: DuplicatePolicy,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_overrides(mut self, overrides: TranslationOverrides) -> Self {
        self.overrides.merge(overrides);
        self
    }

    /// Appends one group-list. Lists are concatenated in the order added.
    pub fn add_source(mut self, groups: Vec<IndicatorGroup>) -> Self {
        self.sources.push(groups);
        self
    }

    pub fn add_static(self, groups: &[IndicatorGroupDef]) -> Self {
        self.add_source(groups.iter().map(IndicatorGroup::from).collect())
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    pub fn build<F>(self, factory: &F) -> RegistryResult<IndicatorRegistry<F::Source>>
    where
        F: DataSourceFactory,
    {
        let source_count = self.sources.len();
        let mut groups = concatenate(self.sources);
        validate(&groups, self.policy)?;

        let replaced = self.overrides.apply(&mut groups);
        log::debug!("Applied {} translation overrides", replaced);

        let (valid_fields, id_lookup) = index(&groups);
        let data_sources = materialize(&groups, factory);

        log::info!(
            "Built indicator registry from {} sources: {} groups, {} indicators",
            source_count,
            groups.len(),
            valid_fields.len()
        );

        Ok(IndicatorRegistry {
            groups,
            valid_fields,
            id_lookup,
            data_sources,
        })
    }
}

fn concatenate(sources: Vec<Vec<IndicatorGroup>>) -> Vec<IndicatorGroup> {
    sources.into_iter().flatten().collect()
}

fn validate(groups: &[IndicatorGroup], policy: DuplicatePolicy) -> RegistryResult<()> {
    let mut group_ids: HashSet<&str> = HashSet::new();
    let mut owners: HashMap<&str, &str> = HashMap::new();

    for group in groups {
        if group.group_id.trim().is_empty() {
            return Err(RegistryError::InvalidDefinition(format!(
                "group '{}' has an empty groupId",
                group.group_text
            )));
        }

        if !group_ids.insert(&group.group_id) {
            match policy {
                DuplicatePolicy::Reject => {
                    return Err(RegistryError::DuplicateGroupId {
                        group_id: group.group_id.clone(),
                    });
                }
                DuplicatePolicy::LastWriterWins => {
                    log::warn!("Duplicate group id '{}'", group.group_id);
                }
            }
        }

        for indicator in &group.indicators {
            if indicator.id.trim().is_empty() {
                return Err(RegistryError::InvalidDefinition(format!(
                    "indicator '{}' in group '{}' has an empty id",
                    indicator.text, group.group_id
                )));
            }

            if let Some(first_group) = owners.insert(&indicator.id, &group.group_id) {
                match policy {
                    DuplicatePolicy::Reject => {
                        return Err(RegistryError::DuplicateIndicatorId {
                            id: indicator.id.clone(),
                            first_group: first_group.to_string(),
                            second_group: group.group_id.clone(),
                        });
                    }
                    DuplicatePolicy::LastWriterWins => {
                        log::warn!(
                            "Indicator id '{}' redefined by group '{}' (was '{}')",
                            indicator.id,
                            group.group_id,
                            first_group
                        );
                    }
                }
            }
        }
    }

    Ok(())
}

fn index(groups: &[IndicatorGroup]) -> (HashSet<String>, HashMap<String, (usize, usize)>) {
    let mut valid_fields = HashSet::new();
    let mut id_lookup = HashMap::new();

    for (group_idx, group) in groups.iter().enumerate() {
        for (indicator_idx, indicator) in group.indicators.iter().enumerate() {
            valid_fields.insert(indicator.id.clone());
            id_lookup.insert(indicator.id.clone(), (group_idx, indicator_idx));
        }
    }

    (valid_fields, id_lookup)
}

fn materialize<F: DataSourceFactory>(groups: &[IndicatorGroup], factory: &F) -> Vec<F::Source> {
    groups
        .iter()
        .map(|group| {
            log::debug!("Building data source for group '{}'", group.group_id);
            factory.build_data_source(&group.group_id, &group.group_text, std::slice::from_ref(group))
        })
        .collect()
}

/// Read-only view over every indicator group, built once by [`RegistryBuilder`].
#[derive(Debug, Clone)]
pub struct IndicatorRegistry<S> {
    groups: Vec<IndicatorGroup>,
    valid_fields: HashSet<String>,
    id_lookup: HashMap<String, (usize, usize)>,
    data_sources: Vec<S>,
}

impl<S> IndicatorRegistry<S> {
    /// Groups in registry order.
    pub fn groups(&self) -> &[IndicatorGroup] {
        &self.groups
    }

    /// Last group with `group_id`, matching the indicator lookup rule.
    pub fn group(&self, group_id: &str) -> Option<&IndicatorGroup> {
        self.groups.iter().rfind(|group| group.group_id == group_id)
    }

    pub fn visible_groups(&self) -> Vec<&IndicatorGroup> {
        self.groups
            .iter()
            .filter(|group| !group.hidden_by_default)
            .collect()
    }

    pub fn valid_fields(&self) -> &HashSet<String> {
        &self.valid_fields
    }

    pub fn is_valid_field(&self, id: &str) -> bool {
        self.valid_fields.contains(id)
    }

    /// Splits `ids` into known and unknown indicator ids, keeping input order.
    pub fn validate_fields<'a>(&self, ids: &[&'a str]) -> (Vec<&'a str>, Vec<&'a str>) {
        ids.iter().copied().partition(|id| self.is_valid_field(id))
    }

    pub fn lookup(&self, id: &str) -> Option<&Indicator> {
        let (group_idx, indicator_idx) = self.id_lookup.get(id)?;
        self.groups.get(*group_idx)?.indicators.get(*indicator_idx)
    }

    /// Group that owns the lookup entry for `id`.
    pub fn owner_group(&self, id: &str) -> Option<&IndicatorGroup> {
        let (group_idx, _) = self.id_lookup.get(id)?;
        self.groups.get(*group_idx)
    }

    pub fn lookup_ids(&self) -> impl Iterator<Item = &str> {
        self.id_lookup.keys().map(String::as_str)
    }

    /// Data sources, index-aligned with [`groups`](Self::groups).
    pub fn data_sources(&self) -> &[S] {
        &self.data_sources
    }

    pub fn data_source_for(&self, group_id: &str) -> Option<&S> {
        let position = self.groups.iter().rposition(|group| group.group_id == group_id)?;
        self.data_sources.get(position)
    }

    pub fn groups_with_sources(&self) -> impl Iterator<Item = (&IndicatorGroup, &S)> {
        self.groups.iter().zip(self.data_sources.iter())
    }

    pub fn search_indicators(&self, search: &str) -> Vec<(&IndicatorGroup, &Indicator)> {
        self.groups
            .iter()
            .flat_map(|group| {
                group
                    .indicators
                    .iter()
                    .filter(|indicator| indicator.text_contains(search))
                    .map(move |indicator| (group, indicator))
            })
            .collect()
    }

    pub fn count_groups(&self) -> usize {
        self.groups.len()
    }

    pub fn count_indicators(&self) -> usize {
        self.groups.iter().map(|group| group.indicators.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::data_source::{DataSourceDescriptor, DescriptorFactory};

    fn group(group_id: &str, text: &str, ids: &[&str]) -> IndicatorGroup {
        ids.iter().fold(IndicatorGroup::new(group_id, text, text), |g, id| {
            g.with_indicator(Indicator::new(id, &format!("Indicator {}", id)))
        })
    }

    fn build(builder: RegistryBuilder) -> IndicatorRegistry<DataSourceDescriptor> {
        builder.build(&DescriptorFactory).unwrap()
    }

    #[test]
    fn test_concatenation_preserves_order() {
        let registry = build(
            RegistryBuilder::new()
                .add_source(vec![group("a", "A", &["a1"]), group("b", "B", &["b1"])])
                .add_source(vec![group("c", "C", &["c1"])]),
        );

        let ids: Vec<&str> = registry.groups().iter().map(|g| g.group_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(registry.groups()[0].group_id, "a");
    }

    #[test]
    fn test_valid_fields_match_lookup_keys() {
        let registry = build(
            RegistryBuilder::new()
                .add_source(vec![group("a", "A", &["a1", "a2"])])
                .add_source(vec![group("b", "B", &["b1"])]),
        );

        let lookup_keys: HashSet<String> = registry.lookup_ids().map(str::to_string).collect();
        assert_eq!(registry.valid_fields(), &lookup_keys);

        for id in registry.valid_fields() {
            assert_eq!(&registry.lookup(id).unwrap().id, id);
        }
    }

    #[test]
    fn test_data_sources_aligned_with_groups() {
        let registry = build(
            RegistryBuilder::new()
                .add_source(vec![group("a", "A", &["a1"]), group("b", "B", &["b1", "b2"])]),
        );

        assert_eq!(registry.data_sources().len(), registry.groups().len());
        for (group, source) in registry.groups_with_sources() {
            assert_eq!(source.name, group.group_id);
            assert_eq!(source.fields, group.indicator_ids());
        }
        assert_eq!(registry.data_source_for("b").unwrap().fields, vec!["b1", "b2"]);
        assert!(registry.data_source_for("z").is_none());
    }

    #[test]
    fn test_translation_override_scenario() {
        let source = vec![
            IndicatorGroup::new("g1", "Old Text", "Old")
                .with_indicator(Indicator::new("x1", "Old Indicator")),
        ];
        let registry = build(
            RegistryBuilder::new()
                .add_source(source)
                .with_overrides(TranslationOverrides::from_pairs(&[
                    ("g1", "New Text"),
                    ("x1", "New Indicator"),
                ])),
        );

        assert_eq!(registry.groups()[0].group_text, "New Text");
        assert_eq!(registry.lookup("x1").unwrap().text, "New Indicator");
    }

    #[test]
    fn test_factory_sees_translated_text() {
        let registry = RegistryBuilder::new()
            .add_source(vec![group("g1", "Old Text", &["x1"])])
            .with_overrides(TranslationOverrides::from_pairs(&[("g1", "New Text")]))
            .build(&|_: &str, group_text: &str, _: &[IndicatorGroup]| group_text.to_string())
            .unwrap();

        assert_eq!(registry.data_sources(), &["New Text".to_string()]);
    }

    #[test]
    fn test_duplicate_indicator_rejected_by_default() {
        let result = RegistryBuilder::new()
            .add_source(vec![group("a", "A", &["dup"])])
            .add_source(vec![group("b", "B", &["dup"])])
            .build(&DescriptorFactory);

        match result {
            Err(RegistryError::DuplicateIndicatorId { id, first_group, second_group }) => {
                assert_eq!(id, "dup");
                assert_eq!(first_group, "a");
                assert_eq!(second_group, "b");
            }
            other => panic!("expected duplicate indicator error, got {:?}", other.map(|r| r.count_groups())),
        }
    }

    #[test]
    fn test_duplicate_group_rejected_by_default() {
        let result = RegistryBuilder::new()
            .add_source(vec![group("a", "A", &["a1"]), group("a", "A again", &["a2"])])
            .build(&DescriptorFactory);

        assert!(matches!(result, Err(RegistryError::DuplicateGroupId { group_id }) if group_id == "a"));
    }

    #[test]
    fn test_last_writer_wins_policy() {
        let mut second = group("b", "B", &["dup"]);
        second.indicators[0].text = "Second owner".to_string();

        let registry = build(
            RegistryBuilder::new()
                .with_policy(DuplicatePolicy::LastWriterWins)
                .add_source(vec![group("a", "A", &["dup", "a2"])])
                .add_source(vec![second]),
        );

        assert_eq!(registry.count_groups(), 2);
        assert_eq!(registry.count_indicators(), 3);
        assert_eq!(registry.valid_fields().len(), 2);
        assert_eq!(registry.lookup("dup").unwrap().text, "Second owner");
        assert_eq!(registry.owner_group("dup").unwrap().group_id, "b");
    }

    #[test]
    fn test_last_writer_wins_repeated_group_id() {
        let registry = build(
            RegistryBuilder::new()
                .with_policy(DuplicatePolicy::LastWriterWins)
                .add_source(vec![group("g", "First", &["x1"])])
                .add_source(vec![group("g", "Second", &["x2"])]),
        );

        assert_eq!(registry.count_groups(), 2);
        assert_eq!(registry.data_sources().len(), 2);
        assert_eq!(registry.group("g").unwrap().group_text, "Second");
        assert_eq!(registry.data_source_for("g").unwrap().fields, vec!["x2"]);
        assert_eq!(registry.data_source_for("g").unwrap().text, "Second");
        assert_eq!(registry.owner_group("x2").unwrap().group_text, "Second");
        assert_eq!(registry.owner_group("x1").unwrap().group_text, "First");
    }

    #[test]
    fn test_empty_ids_are_invalid() {
        let result = RegistryBuilder::new()
            .add_source(vec![group("", "No id", &["x1"])])
            .build(&DescriptorFactory);
        assert!(matches!(result, Err(RegistryError::InvalidDefinition(_))));

        let result = RegistryBuilder::new()
            .add_source(vec![group("g1", "G1", &[" "])])
            .build(&DescriptorFactory);
        assert!(matches!(result, Err(RegistryError::InvalidDefinition(_))));
    }

    #[test]
    fn test_validate_fields_partitions_ids() {
        let registry = build(RegistryBuilder::new().add_source(vec![group("a", "A", &["a1", "a2"])]));

        let (valid, invalid) = registry.validate_fields(&["a2", "zz", "a1", ""]);
        assert_eq!(valid, vec!["a2", "a1"]);
        assert_eq!(invalid, vec!["zz", ""]);
        assert!(registry.is_valid_field("a1"));
        assert!(!registry.is_valid_field("A1"));
    }

    #[test]
    fn test_visible_groups_and_search() {
        let registry = build(
            RegistryBuilder::new()
                .add_source(vec![group("a", "A", &["a1"]), group("b", "B", &["b1"]).hidden()]),
        );

        let visible: Vec<&str> = registry.visible_groups().iter().map(|g| g.group_id.as_str()).collect();
        assert_eq!(visible, vec!["a"]);

        let hits = registry.search_indicators("indicator b");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0.group_id, "b");
        assert_eq!(hits[0].1.id, "b1");
        assert!(registry.search_indicators("xyz").is_empty());
    }

    #[test]
    fn test_empty_builder() {
        let registry = build(RegistryBuilder::new());

        assert_eq!(registry.count_groups(), 0);
        assert!(registry.valid_fields().is_empty());
        assert!(registry.data_sources().is_empty());
        assert!(registry.lookup("anything").is_none());
    }

    #[test]
    fn test_duplicate_policy_parse() {
        assert_eq!(DuplicatePolicy::parse("reject"), Some(DuplicatePolicy::Reject));
        assert_eq!(DuplicatePolicy::parse(" Last-Writer-Wins "), Some(DuplicatePolicy::LastWriterWins));
        assert_eq!(DuplicatePolicy::parse("last_writer_wins"), Some(DuplicatePolicy::LastWriterWins));
        assert_eq!(DuplicatePolicy::parse("ignore"), None);
        assert_eq!(DuplicatePolicy::default(), DuplicatePolicy::Reject);
    }

    #[test]
    fn test_registry_is_shareable_across_threads() {
        let registry = std::sync::Arc::new(build(
            RegistryBuilder::new().add_source(vec![group("a", "A", &["a1"])]),
        ));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = std::sync::Arc::clone(&registry);
                std::thread::spawn(move || registry.is_valid_field("a1"))
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
