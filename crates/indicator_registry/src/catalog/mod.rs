pub mod avoidable_causes;
pub mod icd10;
pub mod mortality_rates;
pub mod procedures;
pub mod vaccines;

pub use avoidable_causes::{AVOIDABLE_DEATHS_5_TO_74, AVOIDABLE_DEATHS_UNDER_5};
pub use icd10::{SIH_ADMISSIONS_BY_CHAPTER, SIM_DEATHS_BY_CHAPTER};
pub use mortality_rates::{ERROR_MARGIN, INFANT_MORTALITY_RATES};
pub use procedures::{OUTPATIENT_PROCEDURES_QUANTITY, OUTPATIENT_PROCEDURES_VALUE};
pub use vaccines::{VACCINE_COVERAGE, VACCINE_DOSES};

use once_cell::sync::Lazy;

use crate::models::indicator::IndicatorGroupDef;
use crate::models::registry::RegistryBuilder;
use crate::models::translation::TranslationOverrides;

/// Built-in group-lists in registry order. Navigation menus list groups in this order.
pub const GROUP_SOURCES: &[&[IndicatorGroupDef]] = &[
    SIM_DEATHS_BY_CHAPTER,
    SIH_ADMISSIONS_BY_CHAPTER,
    AVOIDABLE_DEATHS_UNDER_5,
    AVOIDABLE_DEATHS_5_TO_74,
    INFANT_MORTALITY_RATES,
    VACCINE_DOSES,
    VACCINE_COVERAGE,
    OUTPATIENT_PROCEDURES_QUANTITY,
    OUTPATIENT_PROCEDURES_VALUE,
];

/// Label corrections applied over the built-in definitions.
pub static DEFAULT_TRANSLATIONS: Lazy<TranslationOverrides> = Lazy::new(|| {
    TranslationOverrides::from_pairs(&[
        ("sim_obitos_cid10_capitulo", "Óbitos por Capítulo da CID-10"),
        ("sih_internacoes_cid10_capitulo", "Internações por Capítulo da CID-10"),
        (
            "sim_obitos_cap_22",
            "XXII. Códigos para propósitos especiais (inclui COVID-19)",
        ),
        (
            "sih_internacoes_cap_22",
            "XXII. Códigos para propósitos especiais (inclui COVID-19)",
        ),
        ("doses_febre_amarela", "Febre amarela - Dose"),
        ("sia_procedimentos_valor", "Procedimentos Ambulatoriais - Valor Aprovado (R$)"),
    ])
});

/// Builder preloaded with every built-in source and the default translations.
pub fn builder() -> RegistryBuilder {
    GROUP_SOURCES
        .iter()
        .fold(RegistryBuilder::new(), |builder, source| builder.add_static(source))
        .with_overrides(DEFAULT_TRANSLATIONS.clone())
}

pub fn find_group_def(group_id: &str) -> Option<&'static IndicatorGroupDef> {
    GROUP_SOURCES
        .iter()
        .flat_map(|source| source.iter())
        .find(|group| group.group_id == group_id)
}

pub fn count_builtin_groups() -> usize {
    GROUP_SOURCES.iter().map(|source| source.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::data_source::DescriptorFactory;
    use std::collections::HashSet;

    #[test]
    fn test_group_ids_unique() {
        let mut ids = HashSet::new();
        for group in GROUP_SOURCES.iter().flat_map(|s| s.iter()) {
            assert!(ids.insert(group.group_id), "Duplicate group id: {}", group.group_id);
        }
    }

    #[test]
    fn test_indicator_ids_unique() {
        let mut ids = HashSet::new();
        for group in GROUP_SOURCES.iter().flat_map(|s| s.iter()) {
            for indicator in group.indicators {
                assert!(
                    ids.insert(indicator.id),
                    "Duplicate indicator id: {} (group {})",
                    indicator.id,
                    group.group_id
                );
            }
        }
    }

    #[test]
    fn test_catalog_data_integrity() {
        for group in GROUP_SOURCES.iter().flat_map(|s| s.iter()) {
            assert!(!group.group_id.is_empty(), "Group id cannot be empty");
            assert!(!group.group_text.is_empty(), "Group text cannot be empty");
            assert!(!group.group_text_short.is_empty(), "Short text cannot be empty");
            assert!(!group.indicators.is_empty(), "Group {} has no indicators", group.group_id);

            for indicator in group.indicators {
                assert!(!indicator.id.is_empty(), "Indicator id cannot be empty");
                assert!(!indicator.text.is_empty(), "Indicator text cannot be empty");
                assert!(
                    indicator.id.is_ascii(),
                    "Indicator id must be ASCII: {}",
                    indicator.id
                );
            }
        }
    }

    #[test]
    fn test_translations_reference_known_ids() {
        let builtin = builder().build(&DescriptorFactory).unwrap();
        for id in [
            "sim_obitos_cid10_capitulo",
            "sih_internacoes_cid10_capitulo",
            "sia_procedimentos_valor",
        ] {
            assert!(builtin.group(id).is_some(), "Unknown group in translations: {}", id);
            assert_eq!(Some(builtin.group(id).unwrap().group_text.as_str()), DEFAULT_TRANSLATIONS.get(id));
        }
        for id in ["sim_obitos_cap_22", "sih_internacoes_cap_22", "doses_febre_amarela"] {
            assert!(builtin.is_valid_field(id), "Unknown indicator in translations: {}", id);
            assert_eq!(Some(builtin.lookup(id).unwrap().text.as_str()), DEFAULT_TRANSLATIONS.get(id));
        }
    }

    #[test]
    fn test_builtin_registry_properties() {
        let registry = builder().build(&DescriptorFactory).unwrap();

        assert_eq!(registry.count_groups(), count_builtin_groups());
        assert_eq!(registry.groups()[0].group_id, GROUP_SOURCES[0][0].group_id);
        assert_eq!(registry.data_sources().len(), registry.groups().len());
        assert_eq!(registry.valid_fields().len(), registry.count_indicators());

        for (group, source) in registry.groups_with_sources() {
            assert_eq!(source.name, group.group_id);
            assert_eq!(source.text, group.group_text);
        }
        for id in registry.valid_fields() {
            assert_eq!(&registry.lookup(id).unwrap().id, id);
        }
    }

    #[test]
    fn test_builtin_dimensions_and_tags() {
        let registry = builder().build(&DescriptorFactory).unwrap();

        let doses = registry.data_source_for("pni_doses_aplicadas").unwrap();
        assert_eq!(doses.dimensions, vec!["faixa_etaria", "sexo", "estabelecimento"]);

        let margin = registry.lookup("tx_mortalidade_infantil_ic").unwrap();
        assert_eq!(margin.kind.as_deref(), Some(ERROR_MARGIN));

        let hidden: Vec<&str> = registry
            .groups()
            .iter()
            .filter(|g| g.hidden_by_default)
            .map(|g| g.group_id.as_str())
            .collect();
        assert_eq!(hidden, vec!["sih_internacoes_cid10_capitulo", "sia_procedimentos_valor"]);
    }

    #[test]
    fn test_find_group_def() {
        let group = find_group_def("pni_cobertura_vacinal").unwrap();
        assert_eq!(group.group_text, "Cobertura Vacinal");
        assert!(find_group_def("unknown").is_none());
    }
}
