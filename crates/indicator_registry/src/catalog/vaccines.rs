use crate::models::indicator::{IndicatorDef, IndicatorGroupDef};

const DOSE_DIMENSIONS: &[&str] = &["faixa_etaria", "sexo", "estabelecimento"];

pub const VACCINE_DOSES: &[IndicatorGroupDef] = &[IndicatorGroupDef {
    group_id: "pni_doses_aplicadas",
    group_text: "Doses Aplicadas por Imunobiológico",
    group_text_short: "Doses Aplicadas",
    hidden_by_default: false,
    indicators: &[
        IndicatorDef {
            id: "doses_bcg_unica",
            text: "BCG - Dose única",
            enable_dimensions: DOSE_DIMENSIONS,
            kind: None,
        },
        IndicatorDef {
            id: "doses_hepatite_b_ao_nascer",
            text: "Hepatite B - Dose ao nascer",
            enable_dimensions: DOSE_DIMENSIONS,
            kind: None,
        },
        IndicatorDef {
            id: "doses_pentavalente_d1",
            text: "Pentavalente (DTP/Hib/HB) - 1ª dose",
            enable_dimensions: DOSE_DIMENSIONS,
            kind: None,
        },
        IndicatorDef {
            id: "doses_pentavalente_d2",
            text: "Pentavalente (DTP/Hib/HB) - 2ª dose",
            enable_dimensions: DOSE_DIMENSIONS,
            kind: None,
        },
        IndicatorDef {
            id: "doses_pentavalente_d3",
            text: "Pentavalente (DTP/Hib/HB) - 3ª dose",
            enable_dimensions: DOSE_DIMENSIONS,
            kind: None,
        },
        IndicatorDef {
            id: "doses_vip_d1",
            text: "Poliomielite inativada (VIP) - 1ª dose",
            enable_dimensions: DOSE_DIMENSIONS,
            kind: None,
        },
        IndicatorDef {
            id: "doses_vip_d2",
            text: "Poliomielite inativada (VIP) - 2ª dose",
            enable_dimensions: DOSE_DIMENSIONS,
            kind: None,
        },
        IndicatorDef {
            id: "doses_vip_d3",
            text: "Poliomielite inativada (VIP) - 3ª dose",
            enable_dimensions: DOSE_DIMENSIONS,
            kind: None,
        },
        IndicatorDef {
            id: "doses_rotavirus_d1",
            text: "Rotavírus humano - 1ª dose",
            enable_dimensions: DOSE_DIMENSIONS,
            kind: None,
        },
        IndicatorDef {
            id: "doses_rotavirus_d2",
            text: "Rotavírus humano - 2ª dose",
            enable_dimensions: DOSE_DIMENSIONS,
            kind: None,
        },
        IndicatorDef {
            id: "doses_pneumo_10v_d1",
            text: "Pneumocócica 10-valente - 1ª dose",
            enable_dimensions: DOSE_DIMENSIONS,
            kind: None,
        },
        IndicatorDef {
            id: "doses_pneumo_10v_d2",
            text: "Pneumocócica 10-valente - 2ª dose",
            enable_dimensions: DOSE_DIMENSIONS,
            kind: None,
        },
        IndicatorDef {
            id: "doses_pneumo_10v_reforco",
            text: "Pneumocócica 10-valente - Reforço",
            enable_dimensions: DOSE_DIMENSIONS,
            kind: None,
        },
        IndicatorDef {
            id: "doses_meningo_c_d1",
            text: "Meningocócica C - 1ª dose",
            enable_dimensions: DOSE_DIMENSIONS,
            kind: None,
        },
        IndicatorDef {
            id: "doses_febre_amarela",
            text: "Febre amarela - Dose inicial",
            enable_dimensions: DOSE_DIMENSIONS,
            kind: None,
        },
        IndicatorDef {
            id: "doses_triplice_viral_d1",
            text: "Tríplice viral - 1ª dose",
            enable_dimensions: DOSE_DIMENSIONS,
            kind: None,
        },
        IndicatorDef {
            id: "doses_triplice_viral_d2",
            text: "Tríplice viral - 2ª dose",
            enable_dimensions: DOSE_DIMENSIONS,
            kind: None,
        },
        IndicatorDef {
            id: "doses_dtp_reforco_1",
            text: "DTP - 1º reforço",
            enable_dimensions: DOSE_DIMENSIONS,
            kind: None,
        },
    ],
}];

pub const VACCINE_COVERAGE: &[IndicatorGroupDef] = &[IndicatorGroupDef {
    group_id: "pni_cobertura_vacinal",
    group_text: "Cobertura Vacinal",
    group_text_short: "Cobertura",
    hidden_by_default: false,
    indicators: &[
        IndicatorDef::plain("cobertura_bcg", "Cobertura vacinal - BCG"),
        IndicatorDef::plain("cobertura_hepatite_b", "Cobertura vacinal - Hepatite B"),
        IndicatorDef::plain("cobertura_pentavalente", "Cobertura vacinal - Pentavalente"),
        IndicatorDef::plain("cobertura_poliomielite", "Cobertura vacinal - Poliomielite"),
        IndicatorDef::plain("cobertura_rotavirus", "Cobertura vacinal - Rotavírus humano"),
        IndicatorDef::plain("cobertura_pneumococica", "Cobertura vacinal - Pneumocócica"),
        IndicatorDef::plain("cobertura_meningococica_c", "Cobertura vacinal - Meningocócica C"),
        IndicatorDef::plain("cobertura_febre_amarela", "Cobertura vacinal - Febre amarela"),
        IndicatorDef::plain("cobertura_triplice_viral_d1", "Cobertura vacinal - Tríplice viral D1"),
        IndicatorDef::plain("cobertura_triplice_viral_d2", "Cobertura vacinal - Tríplice viral D2"),
    ],
}];
