use crate::models::indicator::{IndicatorDef, IndicatorGroupDef};

// Lista brasileira de causas de mortes evitáveis por intervenções do SUS.

pub const AVOIDABLE_DEATHS_UNDER_5: &[IndicatorGroupDef] = &[IndicatorGroupDef {
    group_id: "sim_evitaveis_0_4",
    group_text: "Óbitos Evitáveis (0 a 4 anos)",
    group_text_short: "Evitáveis 0-4",
    hidden_by_default: false,
    indicators: &[
        IndicatorDef::plain("evitaveis_0_4_imunoprevencao", "Reduzíveis por ações de imunoprevenção"),
        IndicatorDef::plain(
            "evitaveis_0_4_gestacao",
            "Reduzíveis por adequada atenção à mulher na gestação",
        ),
        IndicatorDef::plain(
            "evitaveis_0_4_parto",
            "Reduzíveis por adequada atenção à mulher no parto",
        ),
        IndicatorDef::plain(
            "evitaveis_0_4_recem_nascido",
            "Reduzíveis por adequada atenção ao recém-nascido",
        ),
        IndicatorDef::plain(
            "evitaveis_0_4_diagnostico_tratamento",
            "Reduzíveis por ações de diagnóstico e tratamento adequado",
        ),
        IndicatorDef::plain(
            "evitaveis_0_4_promocao_saude",
            "Reduzíveis por ações de promoção à saúde vinculadas a ações de atenção",
        ),
        IndicatorDef::plain("evitaveis_0_4_mal_definidas", "Causas de morte mal-definidas"),
        IndicatorDef::plain(
            "evitaveis_0_4_demais_causas",
            "Demais causas (não claramente evitáveis)",
        ),
    ],
}];

pub const AVOIDABLE_DEATHS_5_TO_74: &[IndicatorGroupDef] = &[IndicatorGroupDef {
    group_id: "sim_evitaveis_5_74",
    group_text: "Óbitos Evitáveis (5 a 74 anos)",
    group_text_short: "Evitáveis 5-74",
    hidden_by_default: false,
    indicators: &[
        IndicatorDef::plain("evitaveis_5_74_imunoprevencao", "Reduzíveis por ações de imunoprevenção"),
        IndicatorDef::plain(
            "evitaveis_5_74_doencas_infecciosas",
            "Reduzíveis por ações de promoção, prevenção, controle e atenção às doenças infecciosas",
        ),
        IndicatorDef::plain(
            "evitaveis_5_74_doencas_nao_transmissiveis",
            "Reduzíveis por ações de promoção, prevenção, controle e atenção às doenças não transmissíveis",
        ),
        IndicatorDef::plain(
            "evitaveis_5_74_saude_materna",
            "Reduzíveis por ações de prevenção, controle e atenção às causas de morte materna",
        ),
        IndicatorDef::plain(
            "evitaveis_5_74_causas_externas",
            "Reduzíveis por ações intersetoriais e de promoção à saúde, prevenção e atenção às causas externas",
        ),
        IndicatorDef::plain("evitaveis_5_74_mal_definidas", "Causas de morte mal-definidas"),
        IndicatorDef::plain(
            "evitaveis_5_74_demais_causas",
            "Demais causas (não claramente evitáveis)",
        ),
    ],
}];
