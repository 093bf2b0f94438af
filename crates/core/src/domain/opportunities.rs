//! Sales pipeline records and the aggregates shown above the list.

use serde::{Deserialize, Serialize};

use super::clients::{check_document, DocumentCheck, KnownClient};
use crate::shared::format::{format_currency_input, format_document_auto, parse_currency_input};
use crate::shared::search::{contains_ci, Searchable};
use crate::shared::validation::ValidationError;

/// Days in the same stage after which an opportunity is flagged as stalled.
pub const STALLED_AFTER_DAYS: u32 = 14;

pub const DEFAULT_PROBABILITY: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Stage {
    #[default]
    Prospeccao,
    Qualificacao,
    Proposta,
    Negociacao,
    Fechado,
    Perdido,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::Prospeccao,
        Stage::Qualificacao,
        Stage::Proposta,
        Stage::Negociacao,
        Stage::Fechado,
        Stage::Perdido,
    ];

    /// Stages drawn in the funnel. Lost deals are left out.
    pub const FUNNEL: [Stage; 5] = [
        Stage::Prospeccao,
        Stage::Qualificacao,
        Stage::Proposta,
        Stage::Negociacao,
        Stage::Fechado,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Stage::Prospeccao => "Prospecção",
            Stage::Qualificacao => "Qualificação",
            Stage::Proposta => "Proposta",
            Stage::Negociacao => "Negociação",
            Stage::Fechado => "Fechado",
            Stage::Perdido => "Perdido",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    /// CSS modifier used for badges and funnel cells.
    pub fn tone(&self) -> &'static str {
        match self {
            Stage::Prospeccao => "purple",
            Stage::Qualificacao => "blue",
            Stage::Proposta => "yellow",
            Stage::Negociacao => "orange",
            Stage::Fechado => "green",
            Stage::Perdido => "red",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: u32,
    pub title: String,
    pub client_name: String,
    pub client_document: String,
    pub value: i64,
    pub stage: Stage,
    pub probability: u8,
    pub expected_date: String,
    pub created_date: String,
    pub responsible: String,
    pub sector: String,
    pub description: String,
    pub requirements: String,
    pub competitors: String,
    pub next_action: String,
    pub next_action_date: String,
    pub days_in_stage: u32,
}

impl Opportunity {
    pub fn weighted_value(&self) -> f64 {
        self.value as f64 * f64::from(self.probability) / 100.0
    }

    pub fn is_stalled(&self) -> bool {
        self.days_in_stage > STALLED_AFTER_DAYS
    }
}

impl Searchable for Opportunity {
    fn matches_search(&self, term: &str) -> bool {
        contains_ci(&self.title, term) || contains_ci(&self.client_name, term)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpportunityFilter {
    pub search: String,
    pub stage: Option<Stage>,
}

impl OpportunityFilter {
    pub fn matches(&self, opportunity: &Opportunity) -> bool {
        opportunity.matches_search(&self.search) && self.stage.map_or(true, |s| opportunity.stage == s)
    }

    pub fn apply(&self, opportunities: &[Opportunity]) -> Vec<Opportunity> {
        opportunities.iter().filter(|o| self.matches(o)).cloned().collect()
    }
}

pub fn total_value(opportunities: &[Opportunity]) -> i64 {
    opportunities.iter().fold(0i64, |total, o| total.saturating_add(o.value))
}

pub fn weighted_value(opportunities: &[Opportunity]) -> f64 {
    opportunities.iter().map(Opportunity::weighted_value).sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageTotals {
    pub stage: Stage,
    pub count: usize,
    pub value: i64,
}

/// Count and value per funnel stage, in funnel order. Empty stages are kept.
pub fn stage_breakdown(opportunities: &[Opportunity]) -> Vec<StageTotals> {
    Stage::FUNNEL
        .into_iter()
        .map(|stage| {
            let in_stage = opportunities.iter().filter(|o| o.stage == stage);
            let (count, value) = in_stage.fold((0usize, 0i64), |(n, v), o| (n + 1, v.saturating_add(o.value)));
            StageTotals { stage, count, value }
        })
        .collect()
}

/// Opportunity form model. `value_input` holds the masked currency text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpportunityDraft {
    pub title: String,
    pub client_name: String,
    pub client_document: String,
    pub value_input: String,
    pub stage: Stage,
    pub probability: u8,
    pub expected_date: String,
    pub responsible: String,
    pub sector: String,
    pub description: String,
    pub requirements: String,
    pub competitors: String,
    pub next_action: String,
    pub next_action_date: String,
}

impl OpportunityDraft {
    pub fn new(responsible: &str, sector: &str) -> Self {
        Self {
            title: String::new(),
            client_name: String::new(),
            client_document: String::new(),
            value_input: String::new(),
            stage: Stage::default(),
            probability: DEFAULT_PROBABILITY,
            expected_date: String::new(),
            responsible: responsible.to_string(),
            sector: sector.to_string(),
            description: String::new(),
            requirements: String::new(),
            competitors: String::new(),
            next_action: String::new(),
            next_action_date: String::new(),
        }
    }

    pub fn from_opportunity(opportunity: &Opportunity) -> Self {
        Self {
            title: opportunity.title.clone(),
            client_name: opportunity.client_name.clone(),
            client_document: opportunity.client_document.clone(),
            // Stored values are whole reais; the input works in centavos.
            value_input: format_currency_input(&format!("{}00", opportunity.value.max(0))),
            stage: opportunity.stage,
            probability: opportunity.probability,
            expected_date: opportunity.expected_date.clone(),
            responsible: opportunity.responsible.clone(),
            sector: opportunity.sector.clone(),
            description: opportunity.description.clone(),
            requirements: opportunity.requirements.clone(),
            competitors: opportunity.competitors.clone(),
            next_action: opportunity.next_action.clone(),
            next_action_date: opportunity.next_action_date.clone(),
        }
    }

    /// Masks the document and looks it up. A known client fills in the name.
    pub fn set_client_document(&mut self, raw: &str, known: &[KnownClient]) -> Option<DocumentCheck> {
        self.client_document = format_document_auto(raw);
        let check = check_document(&self.client_document, known);
        if let Some(DocumentCheck::Existing { client_name }) = &check {
            self.client_name = client_name.clone();
        }
        check
    }

    pub fn set_value_input(&mut self, raw: &str) {
        self.value_input = format_currency_input(raw);
    }

    /// Value in whole reais, centavos truncated.
    pub fn value(&self) -> i64 {
        // The input cap keeps centavos well below `i64::MAX`.
        i64::try_from(parse_currency_input(&self.value_input) / 100).unwrap_or(i64::MAX)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField("título"));
        }
        if self.client_name.trim().is_empty() {
            return Err(ValidationError::MissingField("cliente"));
        }
        if self.probability > 100 {
            return Err(ValidationError::OutOfRange("probabilidade"));
        }
        Ok(())
    }

    /// Builds the stored record. A stage change restarts the stage clock.
    pub fn into_opportunity(self, id: u32, existing: Option<&Opportunity>, today: &str) -> Opportunity {
        let value = self.value();
        let days_in_stage = existing
            .filter(|o| o.stage == self.stage)
            .map_or(0, |o| o.days_in_stage);
        Opportunity {
            id,
            value,
            days_in_stage,
            created_date: existing.map_or_else(|| today.to_string(), |o| o.created_date.clone()),
            title: self.title,
            client_name: self.client_name,
            client_document: self.client_document,
            stage: self.stage,
            probability: self.probability,
            expected_date: self.expected_date,
            responsible: self.responsible,
            sector: self.sector,
            description: self.description,
            requirements: self.requirements,
            competitors: self.competitors,
            next_action: self.next_action,
            next_action_date: self.next_action_date,
        }
    }
}

/// Probability choices offered by the form.
pub const PROBABILITY_CHOICES: [(u8, &str); 6] = [
    (10, "Muito baixa"),
    (25, "Baixa"),
    (50, "Média"),
    (75, "Alta"),
    (90, "Muito alta"),
    (100, "Certa"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn opp(title: &str, client: &str, value: i64, stage: Stage, probability: u8) -> Opportunity {
        Opportunity {
            id: 0,
            title: title.into(),
            client_name: client.into(),
            client_document: String::new(),
            value,
            stage,
            probability,
            expected_date: "2024-08-15".into(),
            created_date: "2024-06-01".into(),
            responsible: "Carlos Silva".into(),
            sector: "Comercial".into(),
            description: String::new(),
            requirements: String::new(),
            competitors: String::new(),
            next_action: String::new(),
            next_action_date: String::new(),
            days_in_stage: 8,
        }
    }

    fn sample() -> Vec<Opportunity> {
        vec![
            opp("Expansão de Serviços - ABC Ltda", "Empresa ABC Ltda", 45000, Stage::Qualificacao, 65),
            opp("Nova Consultoria Digital - TechSolutions", "TechSolutions Corp", 28000, Stage::Proposta, 80),
            opp("Auditoria Fiscal - João Silva", "João Silva Santos", 15000, Stage::Negociacao, 75),
            opp("Planejamento Estratégico - Inovação Digital", "Inovação Digital Ltda", 65000, Stage::Prospeccao, 40),
        ]
    }

    #[test]
    fn test_totals() {
        let all = sample();
        assert_eq!(total_value(&all), 153000);
        // 29250 + 22400 + 11250 + 26000
        assert!((weighted_value(&all) - 88900.0).abs() < 1e-6);
        assert_eq!(weighted_value(&[]), 0.0);
    }

    #[test]
    fn test_filter() {
        let all = sample();
        let by_client = OpportunityFilter { search: "techsolutions".into(), stage: None };
        assert_eq!(by_client.apply(&all).len(), 1);

        let by_stage = OpportunityFilter { search: String::new(), stage: Some(Stage::Prospeccao) };
        assert_eq!(by_stage.apply(&all)[0].value, 65000);

        let none = OpportunityFilter { search: "abc".into(), stage: Some(Stage::Fechado) };
        assert!(none.apply(&all).is_empty());
    }

    #[test]
    fn test_stage_breakdown_covers_funnel() {
        let breakdown = stage_breakdown(&sample());
        assert_eq!(breakdown.len(), 5);
        assert_eq!(breakdown[0], StageTotals { stage: Stage::Prospeccao, count: 1, value: 65000 });
        assert_eq!(breakdown[4], StageTotals { stage: Stage::Fechado, count: 0, value: 0 });
    }

    #[test]
    fn test_stalled() {
        let mut o = opp("x", "y", 1, Stage::Proposta, 10);
        o.days_in_stage = 14;
        assert!(!o.is_stalled());
        o.days_in_stage = 15;
        assert!(o.is_stalled());
    }

    #[test]
    fn test_draft_document_lookup_fills_client() {
        let known = vec![KnownClient {
            document: "98.765.432/0001-10".into(),
            name: "TechSolutions Corp".into(),
        }];
        let mut draft = OpportunityDraft::new("Ana Santos", "Comercial");
        assert_eq!(draft.probability, 50);

        assert_eq!(draft.set_client_document("9876", &known), None);
        let check = draft.set_client_document("98765432000110", &known);
        assert_eq!(draft.client_document, "98.765.432/0001-10");
        assert!(matches!(check, Some(DocumentCheck::Existing { .. })));
        assert_eq!(draft.client_name, "TechSolutions Corp");

        let check = draft.set_client_document("11122233344", &known);
        assert_eq!(check, Some(DocumentCheck::New));
        assert_eq!(draft.client_document, "111.222.333-44");
    }

    #[test]
    fn test_draft_value_round_trip() {
        let draft = OpportunityDraft::from_opportunity(&sample()[0]);
        assert_eq!(draft.value_input, "45.000,00");
        assert_eq!(draft.value(), 45000);

        let mut draft = OpportunityDraft::new("a", "b");
        draft.set_value_input("1234567");
        assert_eq!(draft.value_input, "12.345,67");
        assert_eq!(draft.value(), 12345);
    }

    #[test]
    fn test_draft_validation() {
        let mut draft = OpportunityDraft::new("a", "b");
        assert_eq!(draft.validate(), Err(ValidationError::MissingField("título")));
        draft.title = "Nova".into();
        assert_eq!(draft.validate(), Err(ValidationError::MissingField("cliente")));
        draft.client_name = "Cliente".into();
        draft.probability = 101;
        assert_eq!(draft.validate(), Err(ValidationError::OutOfRange("probabilidade")));
        draft.probability = 100;
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_into_opportunity_keeps_history_unless_stage_moves() {
        let existing = Opportunity { days_in_stage: 15, ..sample()[0].clone() };

        let mut draft = OpportunityDraft::from_opportunity(&existing);
        draft.next_action = "Enviar proposta".into();
        let same_stage = draft.clone().into_opportunity(1, Some(&existing), "2024-06-20");
        assert_eq!(same_stage.days_in_stage, 15);
        assert_eq!(same_stage.created_date, "2024-06-01");
        assert_eq!(same_stage.value, 45000);

        draft.stage = Stage::Proposta;
        let moved = draft.into_opportunity(1, Some(&existing), "2024-06-20");
        assert_eq!(moved.days_in_stage, 0);

        let mut fresh = OpportunityDraft::new("Ana Santos", "Comercial");
        fresh.set_value_input("500000");
        let created = fresh.into_opportunity(5, None, "2024-06-20");
        assert_eq!(created.created_date, "2024-06-20");
        assert_eq!(created.value, 5000);
        assert_eq!(created.stage, Stage::Prospeccao);
    }

    #[test]
    fn test_value_at_input_cap_survives_reopening() {
        let mut draft = OpportunityDraft::new("Carlos Silva", "Comercial");
        draft.title = "Contrato Corporativo".into();
        draft.client_name = "Empresa ABC Ltda".into();
        draft.set_value_input("123456789012345678901234");
        assert_eq!(draft.value_input, "1.234.567.890.123,45");

        let saved = draft.into_opportunity(9, None, "2024-06-20");
        assert_eq!(saved.value, 1_234_567_890_123);

        let reopened = OpportunityDraft::from_opportunity(&saved);
        assert_eq!(reopened.value_input, "1.234.567.890.123,00");
        assert_eq!(reopened.value(), saved.value);
    }

    #[test]
    fn test_aggregates_saturate_instead_of_overflowing() {
        let huge = vec![
            opp("A", "Cliente A", i64::MAX, Stage::Proposta, 50),
            opp("B", "Cliente B", i64::MAX, Stage::Proposta, 50),
        ];
        assert_eq!(total_value(&huge), i64::MAX);
        let proposta = stage_breakdown(&huge)
            .into_iter()
            .find(|t| t.stage == Stage::Proposta)
            .unwrap();
        assert_eq!(proposta.count, 2);
        assert_eq!(proposta.value, i64::MAX);
    }
}
