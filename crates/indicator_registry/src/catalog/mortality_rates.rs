use crate::models::indicator::{IndicatorDef, IndicatorGroupDef};

/// Type tag for indicators carrying a confidence-interval half-width.
pub const ERROR_MARGIN: &str = "error_margin";

pub const INFANT_MORTALITY_RATES: &[IndicatorGroupDef] = &[IndicatorGroupDef {
    group_id: "taxas_mortalidade_infantil",
    group_text: "Taxas de Mortalidade Infantil",
    group_text_short: "Mortalidade Infantil",
    hidden_by_default: false,
    indicators: &[
        IndicatorDef {
            id: "tx_mortalidade_infantil",
            text: "Taxa de mortalidade infantil (por mil nascidos vivos)",
            enable_dimensions: &["sexo", "raca_cor"],
            kind: None,
        },
        IndicatorDef {
            id: "tx_mortalidade_infantil_ic",
            text: "Margem de erro - taxa de mortalidade infantil",
            enable_dimensions: &["sexo", "raca_cor"],
            kind: Some(ERROR_MARGIN),
        },
        IndicatorDef {
            id: "tx_mortalidade_neonatal",
            text: "Taxa de mortalidade neonatal (por mil nascidos vivos)",
            enable_dimensions: &["sexo"],
            kind: None,
        },
        IndicatorDef {
            id: "tx_mortalidade_neonatal_ic",
            text: "Margem de erro - taxa de mortalidade neonatal",
            enable_dimensions: &["sexo"],
            kind: Some(ERROR_MARGIN),
        },
        IndicatorDef {
            id: "tx_mortalidade_pos_neonatal",
            text: "Taxa de mortalidade pós-neonatal (por mil nascidos vivos)",
            enable_dimensions: &["sexo"],
            kind: None,
        },
        IndicatorDef {
            id: "tx_mortalidade_na_infancia",
            text: "Taxa de mortalidade na infância (menores de 5 anos)",
            enable_dimensions: &["sexo", "raca_cor"],
            kind: None,
        },
    ],
}];
