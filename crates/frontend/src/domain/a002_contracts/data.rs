//! Demo dataset of the contracts section.

use arcus_core::domain::contracts::{Contract, ContractStatus, PaymentStatus};

pub fn mock_contracts() -> Vec<Contract> {
    [
        (
            1,
            "CT-2024-001",
            "Empresa ABC Ltda",
            "12.345.678/0001-90",
            "Consultoria Empresarial",
            25000,
            ("2024-01-15", "2024-12-15"),
            ContractStatus::Ativo,
            PaymentStatus::EmDia,
            "Boleto Mensal",
            Some("2024-07-15"),
        ),
        (
            2,
            "CT-2024-002",
            "TechSolutions Corp",
            "98.765.432/0001-10",
            "Auditoria Fiscal",
            18000,
            ("2024-03-01", "2024-08-31"),
            ContractStatus::Ativo,
            PaymentStatus::Atrasado,
            "Transferência",
            Some("2024-06-01"),
        ),
        (
            3,
            "CT-2023-045",
            "João Silva Santos",
            "123.456.789-00",
            "Consultoria Tributária",
            12000,
            ("2023-06-01", "2024-05-31"),
            ContractStatus::Finalizado,
            PaymentStatus::Pago,
            "PIX",
            None,
        ),
        (
            4,
            "CT-2024-003",
            "Inovação Digital Ltda",
            "11.222.333/0001-44",
            "Planejamento Estratégico",
            35000,
            ("2024-05-01", "2025-04-30"),
            ContractStatus::Ativo,
            PaymentStatus::EmDia,
            "Cartão de Crédito",
            Some("2024-07-01"),
        ),
    ]
    .into_iter()
    .map(
        |(id, number, client, document, service, value, (start, end), status, payment, method, next)| Contract {
            id,
            number: number.to_string(),
            client_name: client.to_string(),
            client_document: document.to_string(),
            service: service.to_string(),
            value,
            start_date: start.to_string(),
            end_date: end.to_string(),
            status,
            payment_status: payment,
            payment_method: method.to_string(),
            next_payment: next.map(str::to_string),
        },
    )
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcus_core::domain::contracts::{ContractFilter, ContractSummary};

    #[test]
    fn test_summary_of_full_dataset() {
        let contracts = mock_contracts();
        let summary = ContractSummary::from(contracts.as_slice());
        assert_eq!(summary.count, 4);
        assert_eq!(summary.active, 3);
        assert_eq!(summary.total_value, 90000);
        assert_eq!(summary.overdue, 1);
    }

    #[test]
    fn test_settled_contracts_have_no_next_payment() {
        for c in mock_contracts() {
            assert_eq!(c.next_payment.is_none(), c.payment_status == PaymentStatus::Pago);
        }
    }

    #[test]
    fn test_filters_combine() {
        let contracts = mock_contracts();
        let filter = ContractFilter {
            search: "consultoria".into(),
            status: Some(ContractStatus::Ativo),
            payment: None,
        };
        let found = filter.apply(&contracts);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].number, "CT-2024-001");
    }
}
