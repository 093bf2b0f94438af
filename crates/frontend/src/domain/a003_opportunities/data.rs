//! Demo dataset of the opportunities section.

use arcus_core::domain::opportunities::{Opportunity, Stage};

/// Pipeline of the signed-in user; responsible and sector follow the session.
pub fn mock_opportunities(responsible: &str, sector: &str) -> Vec<Opportunity> {
    let opportunity = |id, title: &str, client: &str, document: &str, value, stage, probability| Opportunity {
        id,
        title: title.to_string(),
        client_name: client.to_string(),
        client_document: document.to_string(),
        value,
        stage,
        probability,
        expected_date: String::new(),
        created_date: String::new(),
        responsible: responsible.to_string(),
        sector: sector.to_string(),
        description: String::new(),
        requirements: String::new(),
        competitors: String::new(),
        next_action: String::new(),
        next_action_date: String::new(),
        days_in_stage: 0,
    };

    vec![
        Opportunity {
            expected_date: "2024-08-15".into(),
            created_date: "2024-06-01".into(),
            description: "Cliente interessado em expandir consultoria para outras áreas".into(),
            requirements: "Consultoria em RH, Financeiro e Operações".into(),
            competitors: "Concorrente A, Concorrente B".into(),
            next_action: "Agendar apresentação técnica".into(),
            next_action_date: "2024-06-25".into(),
            days_in_stage: 15,
            ..opportunity(
                1,
                "Expansão de Serviços - ABC Ltda",
                "Empresa ABC Ltda",
                "12.345.678/0001-90",
                45000,
                Stage::Qualificacao,
                65,
            )
        },
        Opportunity {
            expected_date: "2024-07-30".into(),
            created_date: "2024-05-15".into(),
            description: "Projeto de transformação digital completa".into(),
            requirements: "Consultoria em tecnologia e processos digitais".into(),
            competitors: "Concorrente C".into(),
            next_action: "Aguardar retorno da proposta".into(),
            next_action_date: "2024-06-20".into(),
            days_in_stage: 8,
            ..opportunity(
                2,
                "Nova Consultoria Digital - TechSolutions",
                "TechSolutions Corp",
                "98.765.432/0001-10",
                28000,
                Stage::Proposta,
                80,
            )
        },
        Opportunity {
            expected_date: "2024-07-15".into(),
            created_date: "2024-05-20".into(),
            description: "Auditoria fiscal completa para pessoa física".into(),
            requirements: "Análise fiscal dos últimos 5 anos".into(),
            competitors: "Nenhum".into(),
            next_action: "Definir condições de pagamento".into(),
            next_action_date: "2024-06-22".into(),
            days_in_stage: 12,
            ..opportunity(
                3,
                "Auditoria Fiscal - João Silva",
                "João Silva Santos",
                "123.456.789-00",
                15000,
                Stage::Negociacao,
                75,
            )
        },
        Opportunity {
            expected_date: "2024-09-30".into(),
            created_date: "2024-06-10".into(),
            description: "Desenvolvimento de planejamento estratégico para os próximos 3 anos".into(),
            requirements: "Consultoria estratégica e análise de mercado".into(),
            competitors: "Concorrente A, Concorrente D".into(),
            next_action: "Primeira reunião comercial".into(),
            next_action_date: "2024-06-30".into(),
            days_in_stage: 8,
            ..opportunity(
                4,
                "Planejamento Estratégico - Inovação Digital",
                "Inovação Digital Ltda",
                "11.222.333/0001-44",
                65000,
                Stage::Prospeccao,
                40,
            )
        },
    ]
}

/// Shown as-is on the pipeline header; not derived from the list.
pub const PIPELINE_CONVERSION_RATE: f64 = 23.5;

#[cfg(test)]
mod tests {
    use super::*;
    use arcus_core::domain::opportunities::{stage_breakdown, total_value, weighted_value};

    #[test]
    fn test_pipeline_totals() {
        let all = mock_opportunities("Carlos Silva", "Comercial");
        assert_eq!(total_value(&all), 153000);
        assert_eq!(weighted_value(&all).round() as i64, 88900);
    }

    #[test]
    fn test_only_first_opportunity_is_stalled() {
        let stalled: Vec<u32> = mock_opportunities("a", "b")
            .iter()
            .filter(|o| o.is_stalled())
            .map(|o| o.id)
            .collect();
        assert_eq!(stalled, vec![1]);
    }

    #[test]
    fn test_funnel_has_nothing_closed() {
        let funnel = stage_breakdown(&mock_opportunities("a", "b"));
        assert_eq!(funnel.iter().map(|s| s.count).sum::<usize>(), 4);
        assert_eq!(funnel[4].count, 0);
    }
}
