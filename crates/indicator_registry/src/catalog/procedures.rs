use crate::models::indicator::{IndicatorDef, IndicatorGroupDef};

// Grupos da Tabela de Procedimentos do SUS (SIGTAP).

pub const OUTPATIENT_PROCEDURES_QUANTITY: &[IndicatorGroupDef] = &[IndicatorGroupDef {
    group_id: "sia_procedimentos_quantidade",
    group_text: "Procedimentos Ambulatoriais - Quantidade Aprovada",
    group_text_short: "Proced. Quantidade",
    hidden_by_default: false,
    indicators: &[
        IndicatorDef::plain("sia_qtd_grupo_01", "01 Ações de promoção e prevenção em saúde"),
        IndicatorDef::plain("sia_qtd_grupo_02", "02 Procedimentos com finalidade diagnóstica"),
        IndicatorDef::plain("sia_qtd_grupo_03", "03 Procedimentos clínicos"),
        IndicatorDef::plain("sia_qtd_grupo_04", "04 Procedimentos cirúrgicos"),
        IndicatorDef::plain("sia_qtd_grupo_05", "05 Transplantes de órgãos, tecidos e células"),
        IndicatorDef::plain("sia_qtd_grupo_06", "06 Medicamentos"),
        IndicatorDef::plain("sia_qtd_grupo_07", "07 Órteses, próteses e materiais especiais"),
        IndicatorDef::plain("sia_qtd_grupo_08", "08 Ações complementares da atenção à saúde"),
    ],
}];

pub const OUTPATIENT_PROCEDURES_VALUE: &[IndicatorGroupDef] = &[IndicatorGroupDef {
    group_id: "sia_procedimentos_valor",
    group_text: "Procedimentos Ambulatoriais - Valor Aprovado",
    group_text_short: "Proced. Valor",
    hidden_by_default: true,
    indicators: &[
        IndicatorDef::plain("sia_valor_grupo_01", "01 Ações de promoção e prevenção em saúde"),
        IndicatorDef::plain("sia_valor_grupo_02", "02 Procedimentos com finalidade diagnóstica"),
        IndicatorDef::plain("sia_valor_grupo_03", "03 Procedimentos clínicos"),
        IndicatorDef::plain("sia_valor_grupo_04", "04 Procedimentos cirúrgicos"),
        IndicatorDef::plain("sia_valor_grupo_05", "05 Transplantes de órgãos, tecidos e células"),
        IndicatorDef::plain("sia_valor_grupo_06", "06 Medicamentos"),
        IndicatorDef::plain("sia_valor_grupo_07", "07 Órteses, próteses e materiais especiais"),
        IndicatorDef::plain("sia_valor_grupo_08", "08 Ações complementares da atenção à saúde"),
    ],
}];
