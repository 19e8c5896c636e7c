use serde::{Deserialize, Serialize};

/// A single queryable health statistic.
///
/// # Fields
/// * `id` - Identifier, unique across the whole registry
/// * `text` - Human-readable label (may be replaced by a translation override)
/// * `enable_dimensions` - Dimensions that can break this indicator down
/// * `kind` - Optional tag, e.g. `"error_margin"`
///
/// # Example
/// ```rust
/// use indicator_registry::models::indicator::Indicator;
///
/// let indicator = Indicator::new("sim_obitos_cap_09", "Doenças do aparelho circulatório");
///
/// assert_eq!(indicator.id, "sim_obitos_cap_09");
/// assert!(indicator.enable_dimensions.is_empty());
/// assert!(indicator.kind.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Indicator {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enable_dimensions: Vec<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Indicator {
    pub fn new(id: &str, text: &str) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            enable_dimensions: Vec::new(),
            kind: None,
        }
    }

    pub fn with_dimensions(mut self, dimensions: &[&str]) -> Self {
        self.enable_dimensions = dimensions.iter().map(|d| d.to_string()).collect();
        self
    }

    pub fn with_kind(mut self, kind: &str) -> Self {
        self.kind = Some(kind.to_string());
        self
    }

    pub fn supports_dimension(&self, dimension: &str) -> bool {
        self.enable_dimensions.iter().any(|d| d == dimension)
    }

    pub fn text_contains(&self, search: &str) -> bool {
        self.text.to_lowercase().contains(&search.to_lowercase())
    }
}

/// A named collection of related indicators, displayed together.
///
/// Indicator order is preserved exactly as defined; consumers render it as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorGroup {
    pub group_id: String,
    pub group_text: String,
    pub group_text_short: String,
    #[serde(default)]
    pub hidden_by_default: bool,
    pub indicators: Vec<Indicator>,
}

impl IndicatorGroup {
    pub fn new(group_id: &str, group_text: &str, group_text_short: &str) -> Self {
        Self {
            group_id: group_id.to_string(),
            group_text: group_text.to_string(),
            group_text_short: group_text_short.to_string(),
            hidden_by_default: false,
            indicators: Vec::new(),
        }
    }

    pub fn hidden(mut self) -> Self {
        self.hidden_by_default = true;
        self
    }

    pub fn with_indicator(mut self, indicator: Indicator) -> Self {
        self.indicators.push(indicator);
        self
    }

    pub fn find_indicator(&self, id: &str) -> Option<&Indicator> {
        self.indicators.iter().find(|indicator| indicator.id == id)
    }

    pub fn indicator_ids(&self) -> Vec<&str> {
        self.indicators.iter().map(|i| i.id.as_str()).collect()
    }

    pub fn has_indicators(&self) -> bool {
        !self.indicators.is_empty()
    }
}

/// Compile-time indicator definition used by the built-in catalog.
#[derive(Debug)]
pub struct IndicatorDef {
    pub id: &'static str,
    pub text: &'static str,
    pub enable_dimensions: &'static [&'static str],
    pub kind: Option<&'static str>,
}

impl IndicatorDef {
    /// Plain indicator without dimensions or type tag.
    pub const fn plain(id: &'static str, text: &'static str) -> Self {
        Self {
            id,
            text,
            enable_dimensions: &[],
            kind: None,
        }
    }
}

/// Compile-time group definition used by the built-in catalog.
#[derive(Debug)]
pub struct IndicatorGroupDef {
    pub group_id: &'static str,
    pub group_text: &'static str,
    pub group_text_short: &'static str,
    pub hidden_by_default: bool,
    pub indicators: &'static [IndicatorDef],
}

impl From<&IndicatorDef> for Indicator {
    fn from(def: &IndicatorDef) -> Self {
        Self {
            id: def.id.to_string(),
            text: def.text.to_string(),
            enable_dimensions: def.enable_dimensions.iter().map(|d| d.to_string()).collect(),
            kind: def.kind.map(str::to_string),
        }
    }
}

impl From<&IndicatorGroupDef> for IndicatorGroup {
    fn from(def: &IndicatorGroupDef) -> Self {
        Self {
            group_id: def.group_id.to_string(),
            group_text: def.group_text.to_string(),
            group_text_short: def.group_text_short.to_string(),
            hidden_by_default: def.hidden_by_default,
            indicators: def.indicators.iter().map(Indicator::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_INDICATORS: &[IndicatorDef] = &[
        IndicatorDef::plain("x1", "Indicator One"),
        IndicatorDef {
            id: "x2",
            text: "Indicator Two",
            enable_dimensions: &["sexo", "faixa_etaria"],
            kind: Some("error_margin"),
        },
    ];

    const TEST_GROUP: IndicatorGroupDef = IndicatorGroupDef {
        group_id: "g1",
        group_text: "Group One",
        group_text_short: "G1",
        hidden_by_default: true,
        indicators: TEST_INDICATORS,
    };

    #[test]
    fn test_group_from_static_definition() {
        let group = IndicatorGroup::from(&TEST_GROUP);

        assert_eq!(group.group_id, "g1");
        assert_eq!(group.group_text, "Group One");
        assert_eq!(group.group_text_short, "G1");
        assert!(group.hidden_by_default);
        assert_eq!(group.indicator_ids(), vec!["x1", "x2"]);

        let second = group.find_indicator("x2").unwrap();
        assert_eq!(second.enable_dimensions, vec!["sexo", "faixa_etaria"]);
        assert_eq!(second.kind.as_deref(), Some("error_margin"));
        assert!(second.supports_dimension("sexo"));
        assert!(!second.supports_dimension("raca_cor"));
    }

    #[test]
    fn test_deserialize_defaults_optional_fields() {
        let json = r#"{
            "groupId": "g1",
            "groupText": "Group One",
            "groupTextShort": "G1",
            "indicators": [{"id": "x1", "text": "Indicator One"}]
        }"#;

        let group: IndicatorGroup = serde_json::from_str(json).unwrap();
        assert!(!group.hidden_by_default);
        assert!(group.indicators[0].enable_dimensions.is_empty());
        assert!(group.indicators[0].kind.is_none());
    }

    #[test]
    fn test_deserialize_type_tag() {
        let json = r#"{"id": "x1", "text": "IC", "type": "error_margin", "enableDimensions": ["sexo"]}"#;

        let indicator: Indicator = serde_json::from_str(json).unwrap();
        assert_eq!(indicator.kind.as_deref(), Some("error_margin"));
        assert_eq!(indicator.enable_dimensions, vec!["sexo"]);
    }

    #[test]
    fn test_deserialize_missing_indicators_fails() {
        let json = r#"{"groupId": "g1", "groupText": "Group One", "groupTextShort": "G1"}"#;

        let result: Result<IndicatorGroup, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_skips_empty_optional_fields() {
        let indicator = Indicator::new("x1", "Indicator One");
        let json = serde_json::to_string(&indicator).unwrap();

        assert_eq!(json, r#"{"id":"x1","text":"Indicator One"}"#);
    }

    #[test]
    fn test_text_contains_is_case_insensitive() {
        let indicator = Indicator::new("x1", "Doenças do Aparelho Circulatório");

        assert!(indicator.text_contains("aparelho"));
        assert!(indicator.text_contains("CIRCULATÓRIO"));
        assert!(!indicator.text_contains("respiratório"));
    }

    #[test]
    fn test_group_builder_helpers() {
        let group = IndicatorGroup::new("g2", "Group Two", "G2")
            .hidden()
            .with_indicator(Indicator::new("y1", "Y").with_kind("error_margin"));

        assert!(group.hidden_by_default);
        assert!(group.has_indicators());
        assert_eq!(group.find_indicator("y1").unwrap().kind.as_deref(), Some("error_margin"));
        assert!(group.find_indicator("missing").is_none());
    }
}
