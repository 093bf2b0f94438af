use serde::{Deserialize, Serialize};

use crate::shared::search::{contains_ci, Searchable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractStatus {
    Ativo,
    Finalizado,
    Suspenso,
}

impl ContractStatus {
    pub const ALL: [ContractStatus; 3] = [
        ContractStatus::Ativo,
        ContractStatus::Finalizado,
        ContractStatus::Suspenso,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContractStatus::Ativo => "Ativo",
            ContractStatus::Finalizado => "Finalizado",
            ContractStatus::Suspenso => "Suspenso",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    EmDia,
    Atrasado,
    Pago,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 3] = [PaymentStatus::EmDia, PaymentStatus::Atrasado, PaymentStatus::Pago];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::EmDia => "Em dia",
            PaymentStatus::Atrasado => "Atrasado",
            PaymentStatus::Pago => "Pago",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub id: u32,
    pub number: String,
    pub client_name: String,
    pub client_document: String,
    pub service: String,
    pub value: i64,
    pub start_date: String,
    pub end_date: String,
    pub status: ContractStatus,
    pub payment_status: PaymentStatus,
    pub payment_method: String,
    /// Empty once the contract is settled.
    pub next_payment: Option<String>,
}

impl Searchable for Contract {
    /// Client and service ignore case; the number is matched as typed.
    fn matches_search(&self, term: &str) -> bool {
        contains_ci(&self.client_name, term) || self.number.contains(term) || contains_ci(&self.service, term)
    }
}

/// Contract list filter. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractFilter {
    pub search: String,
    pub status: Option<ContractStatus>,
    pub payment: Option<PaymentStatus>,
}

impl ContractFilter {
    pub fn matches(&self, contract: &Contract) -> bool {
        contract.matches_search(&self.search)
            && self.status.map_or(true, |s| contract.status == s)
            && self.payment.map_or(true, |p| contract.payment_status == p)
    }

    pub fn apply(&self, contracts: &[Contract]) -> Vec<Contract> {
        contracts.iter().filter(|c| self.matches(c)).cloned().collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContractSummary {
    pub count: usize,
    pub active: usize,
    pub total_value: i64,
    pub overdue: usize,
}

impl From<&[Contract]> for ContractSummary {
    fn from(contracts: &[Contract]) -> Self {
        contracts.iter().fold(Self::default(), |mut acc, c| {
            acc.count += 1;
            acc.total_value += c.value;
            if c.status == ContractStatus::Ativo {
                acc.active += 1;
            }
            if c.payment_status == PaymentStatus::Atrasado {
                acc.overdue += 1;
            }
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract(
        number: &str,
        client: &str,
        service: &str,
        value: i64,
        status: ContractStatus,
        payment: PaymentStatus,
    ) -> Contract {
        Contract {
            id: 0,
            number: number.into(),
            client_name: client.into(),
            client_document: String::new(),
            service: service.into(),
            value,
            start_date: "2024-01-15".into(),
            end_date: "2024-12-15".into(),
            status,
            payment_status: payment,
            payment_method: "PIX".into(),
            next_payment: None,
        }
    }

    fn sample() -> Vec<Contract> {
        vec![
            contract("CT-2024-001", "Empresa ABC Ltda", "Consultoria Empresarial", 25000, ContractStatus::Ativo, PaymentStatus::EmDia),
            contract("CT-2024-002", "TechSolutions Corp", "Auditoria Fiscal", 18000, ContractStatus::Ativo, PaymentStatus::Atrasado),
            contract("CT-2023-045", "João Silva Santos", "Consultoria Tributária", 12000, ContractStatus::Finalizado, PaymentStatus::Pago),
        ]
    }

    #[test]
    fn test_search_fields() {
        let c = &sample()[0];
        assert!(c.matches_search("abc"));
        assert!(c.matches_search("2024-001"));
        assert!(c.matches_search("EMPRESARIAL"));
        assert!(!c.matches_search("ct-2024"));
    }

    #[test]
    fn test_filter_combines_criteria() {
        let all = sample();
        assert_eq!(ContractFilter::default().apply(&all).len(), 3);

        let filter = ContractFilter {
            search: "consultoria".into(),
            status: Some(ContractStatus::Ativo),
            payment: None,
        };
        let found = filter.apply(&all);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].number, "CT-2024-001");

        let filter = ContractFilter {
            payment: Some(PaymentStatus::Atrasado),
            ..ContractFilter::default()
        };
        assert_eq!(filter.apply(&all)[0].number, "CT-2024-002");
    }

    #[test]
    fn test_summary() {
        let all = sample();
        let summary = ContractSummary::from(all.as_slice());
        assert_eq!(
            summary,
            ContractSummary { count: 3, active: 2, total_value: 55000, overdue: 1 }
        );
        assert_eq!(ContractSummary::from(&[][..]), ContractSummary::default());
    }

    #[test]
    fn test_payment_labels() {
        assert_eq!(PaymentStatus::from_label("Em dia"), Some(PaymentStatus::EmDia));
        assert_eq!(PaymentStatus::from_label("em dia"), None);
    }
}
