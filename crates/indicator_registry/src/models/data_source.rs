use serde::{Deserialize, Serialize};

use crate::models::indicator::IndicatorGroup;

/// Builds the query-layer handle for one indicator group.
///
/// The registry calls this once per group, in registry order, after
/// translation overrides have been applied. Implementations must be
/// deterministic for identical inputs.
pub trait DataSourceFactory {
    type Source;

    fn build_data_source(
        &self,
        group_id: &str,
        group_text: &str,
        groups: &[IndicatorGroup],
    ) -> Self::Source;
}

impl<F, S> DataSourceFactory for F
where
    F: Fn(&str, &str, &[IndicatorGroup]) -> S,
{
    type Source = S;

    fn build_data_source(
        &self,
        group_id: &str,
        group_text: &str,
        groups: &[IndicatorGroup],
    ) -> S {
        self(group_id, group_text, groups)
    }
}

/// Query source description handed to the analytics engine.
///
/// # Fields
/// * `name` - Source name (the group id)
/// * `text` - Display name (the translated group text)
/// * `fields` - Indicator ids the source can answer, in group order
/// * `dimensions` - Union of all indicators' dimensions, first-seen order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSourceDescriptor {
    pub name: String,
    pub text: String,
    pub fields: Vec<String>,
    pub dimensions: Vec<String>,
}

impl DataSourceDescriptor {
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }
}

/// Default factory producing [`DataSourceDescriptor`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptorFactory;

impl DataSourceFactory for DescriptorFactory {
    type Source = DataSourceDescriptor;

    fn build_data_source(
        &self,
        group_id: &str,
        group_text: &str,
        groups: &[IndicatorGroup],
    ) -> DataSourceDescriptor {
        let mut fields = Vec::new();
        let mut dimensions: Vec<String> = Vec::new();

        for indicator in groups.iter().flat_map(|g| g.indicators.iter()) {
            fields.push(indicator.id.clone());
            for dimension in &indicator.enable_dimensions {
                if !dimensions.contains(dimension) {
                    dimensions.push(dimension.clone());
                }
            }
        }

        DataSourceDescriptor {
            name: group_id.to_string(),
            text: group_text.to_string(),
            fields,
            dimensions,
        }
    }
}
