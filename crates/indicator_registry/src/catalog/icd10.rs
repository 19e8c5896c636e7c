use crate::models::indicator::{IndicatorDef, IndicatorGroupDef};

pub const SIM_DEATHS_BY_CHAPTER: &[IndicatorGroupDef] = &[IndicatorGroupDef {
    group_id: "sim_obitos_cid10_capitulo",
    group_text: "Óbitos por Capítulo CID-10",
    group_text_short: "Óbitos CID-10",
    hidden_by_default: false,
    indicators: &[
        IndicatorDef::plain("sim_obitos_cap_01", "I. Algumas doenças infecciosas e parasitárias"),
        IndicatorDef::plain("sim_obitos_cap_02", "II. Neoplasias (tumores)"),
        IndicatorDef::plain(
            "sim_obitos_cap_03",
            "III. Doenças do sangue e dos órgãos hematopoéticos e alguns transtornos imunitários",
        ),
        IndicatorDef::plain("sim_obitos_cap_04", "IV. Doenças endócrinas, nutricionais e metabólicas"),
        IndicatorDef::plain("sim_obitos_cap_05", "V. Transtornos mentais e comportamentais"),
        IndicatorDef::plain("sim_obitos_cap_06", "VI. Doenças do sistema nervoso"),
        IndicatorDef::plain("sim_obitos_cap_07", "VII. Doenças do olho e anexos"),
        IndicatorDef::plain("sim_obitos_cap_08", "VIII. Doenças do ouvido e da apófise mastóide"),
        IndicatorDef::plain("sim_obitos_cap_09", "IX. Doenças do aparelho circulatório"),
        IndicatorDef::plain("sim_obitos_cap_10", "X. Doenças do aparelho respiratório"),
        IndicatorDef::plain("sim_obitos_cap_11", "XI. Doenças do aparelho digestivo"),
        IndicatorDef::plain("sim_obitos_cap_12", "XII. Doenças da pele e do tecido subcutâneo"),
        IndicatorDef::plain(
            "sim_obitos_cap_13",
            "XIII. Doenças do sistema osteomuscular e do tecido conjuntivo",
        ),
        IndicatorDef::plain("sim_obitos_cap_14", "XIV. Doenças do aparelho geniturinário"),
        IndicatorDef::plain("sim_obitos_cap_15", "XV. Gravidez, parto e puerpério"),
        IndicatorDef::plain("sim_obitos_cap_16", "XVI. Algumas afecções originadas no período perinatal"),
        IndicatorDef::plain(
            "sim_obitos_cap_17",
            "XVII. Malformações congênitas, deformidades e anomalias cromossômicas",
        ),
        IndicatorDef::plain(
            "sim_obitos_cap_18",
            "XVIII. Sintomas, sinais e achados anormais de exames clínicos e de laboratório",
        ),
        IndicatorDef::plain("sim_obitos_cap_20", "XX. Causas externas de morbidade e mortalidade"),
        IndicatorDef::plain("sim_obitos_cap_22", "XXII. Códigos para propósitos especiais"),
        IndicatorDef::plain("sim_obitos_total", "Total de óbitos"),
    ],
}];

pub const SIH_ADMISSIONS_BY_CHAPTER: &[IndicatorGroupDef] = &[IndicatorGroupDef {
    group_id: "sih_internacoes_cid10_capitulo",
    group_text: "Internações por Capítulo CID-10",
    group_text_short: "Internações CID-10",
    hidden_by_default: true,
    indicators: &[
        IndicatorDef::plain("sih_internacoes_cap_01", "I. Algumas doenças infecciosas e parasitárias"),
        IndicatorDef::plain("sih_internacoes_cap_02", "II. Neoplasias (tumores)"),
        IndicatorDef::plain(
            "sih_internacoes_cap_03",
            "III. Doenças do sangue e dos órgãos hematopoéticos e alguns transtornos imunitários",
        ),
        IndicatorDef::plain("sih_internacoes_cap_04", "IV. Doenças endócrinas, nutricionais e metabólicas"),
        IndicatorDef::plain("sih_internacoes_cap_05", "V. Transtornos mentais e comportamentais"),
        IndicatorDef::plain("sih_internacoes_cap_06", "VI. Doenças do sistema nervoso"),
        IndicatorDef::plain("sih_internacoes_cap_07", "VII. Doenças do olho e anexos"),
        IndicatorDef::plain("sih_internacoes_cap_08", "VIII. Doenças do ouvido e da apófise mastóide"),
        IndicatorDef::plain("sih_internacoes_cap_09", "IX. Doenças do aparelho circulatório"),
        IndicatorDef::plain("sih_internacoes_cap_10", "X. Doenças do aparelho respiratório"),
        IndicatorDef::plain("sih_internacoes_cap_11", "XI. Doenças do aparelho digestivo"),
        IndicatorDef::plain("sih_internacoes_cap_12", "XII. Doenças da pele e do tecido subcutâneo"),
        IndicatorDef::plain(
            "sih_internacoes_cap_13",
            "XIII. Doenças do sistema osteomuscular e do tecido conjuntivo",
        ),
        IndicatorDef::plain("sih_internacoes_cap_14", "XIV. Doenças do aparelho geniturinário"),
        IndicatorDef::plain("sih_internacoes_cap_15", "XV. Gravidez, parto e puerpério"),
        IndicatorDef::plain(
            "sih_internacoes_cap_16",
            "XVI. Algumas afecções originadas no período perinatal",
        ),
        IndicatorDef::plain(
            "sih_internacoes_cap_17",
            "XVII. Malformações congênitas, deformidades e anomalias cromossômicas",
        ),
        IndicatorDef::plain(
            "sih_internacoes_cap_18",
            "XVIII. Sintomas, sinais e achados anormais de exames clínicos e de laboratório",
        ),
        IndicatorDef::plain(
            "sih_internacoes_cap_19",
            "XIX. Lesões, envenenamentos e algumas outras consequências de causas externas",
        ),
        IndicatorDef::plain("sih_internacoes_cap_20", "XX. Causas externas de morbidade e mortalidade"),
        IndicatorDef::plain(
            "sih_internacoes_cap_21",
            "XXI. Fatores que influenciam o estado de saúde e o contato com os serviços de saúde",
        ),
        IndicatorDef::plain("sih_internacoes_cap_22", "XXII. Códigos para propósitos especiais"),
        IndicatorDef::plain("sih_internacoes_total", "Total de internações"),
    ],
}];
