//! Demo dataset of the clients section.

use arcus_core::domain::clients::{Client, ClientInteraction, ClientStatus, KnownClient, PersonKind};
use arcus_core::domain::contracts::{Contract, ContractStatus, PaymentStatus};
use arcus_core::domain::opportunities::Stage;

/// Clients visible to `user_name`; sector and author follow the signed-in user.
pub fn mock_clients(sector: &str, user_name: &str) -> Vec<Client> {
    let client = |id, name: &str, document: &str, kind, email: &str, phone: &str, address: &str| Client {
        id,
        name: name.to_string(),
        document: document.to_string(),
        kind,
        email: email.to_string(),
        phone: phone.to_string(),
        address: address.to_string(),
        sector: sector.to_string(),
        status: ClientStatus::Ativo,
        contracts: 0,
        total_value: 0,
        last_contact: String::new(),
        is_base_client: true,
        created_by: user_name.to_string(),
    };

    vec![
        Client {
            contracts: 3,
            total_value: 45000,
            last_contact: "2024-06-15".into(),
            ..client(
                1,
                "Empresa ABC Ltda",
                "12.345.678/0001-90",
                PersonKind::PJ,
                "contato@empresaabc.com.br",
                "(11) 99999-9999",
                "Rua das Flores, 123 - São Paulo/SP",
            )
        },
        Client {
            contracts: 1,
            total_value: 12000,
            last_contact: "2024-06-10".into(),
            ..client(
                2,
                "João Silva Santos",
                "123.456.789-00",
                PersonKind::PF,
                "joao.silva@email.com",
                "(11) 88888-8888",
                "Av. Paulista, 1000 - São Paulo/SP",
            )
        },
        Client {
            status: ClientStatus::Prospecto,
            last_contact: "2024-06-18".into(),
            is_base_client: false,
            ..client(
                3,
                "TechSolutions Corp",
                "98.765.432/0001-10",
                PersonKind::PJ,
                "admin@techsolutions.com",
                "(11) 77777-7777",
                "Rua da Tecnologia, 456 - São Paulo/SP",
            )
        },
    ]
}

/// Documents already in the base, used by the document check of the forms.
pub fn known_clients() -> Vec<KnownClient> {
    [
        ("12.345.678/0001-90", "Empresa ABC Ltda"),
        ("123.456.789-00", "João Silva Santos"),
        ("98.765.432/0001-10", "TechSolutions Corp"),
    ]
    .into_iter()
    .map(|(document, name)| KnownClient {
        document: document.to_string(),
        name: name.to_string(),
    })
    .collect()
}

pub fn client_contracts(client: &Client) -> Vec<Contract> {
    let contract = |id, number: &str, service: &str, value, start: &str, end: &str, status, payment| Contract {
        id,
        number: number.to_string(),
        client_name: client.name.clone(),
        client_document: client.document.clone(),
        service: service.to_string(),
        value,
        start_date: start.to_string(),
        end_date: end.to_string(),
        status,
        payment_status: payment,
        payment_method: String::new(),
        next_payment: None,
    };
    vec![
        contract(
            1,
            "CT-2024-001",
            "Consultoria Empresarial",
            25000,
            "2024-01-15",
            "2024-12-15",
            ContractStatus::Ativo,
            PaymentStatus::EmDia,
        ),
        contract(
            2,
            "CT-2023-045",
            "Auditoria Fiscal",
            15000,
            "2023-06-01",
            "2024-05-31",
            ContractStatus::Finalizado,
            PaymentStatus::Pago,
        ),
    ]
}

pub fn client_interactions() -> Vec<ClientInteraction> {
    [
        (1, "2024-06-15", "Ligação", "Contato para renovação de contrato", "Carlos Silva", "Cliente interessado em expandir serviços"),
        (2, "2024-06-10", "Email", "Envio de proposta comercial", "Ana Santos", "Proposta para novo projeto enviada"),
        (3, "2024-06-05", "Reunião", "Apresentação de resultados", "Carlos Silva", "Cliente satisfeito com resultados obtidos"),
    ]
    .into_iter()
    .map(|(id, date, kind, description, user, notes)| ClientInteraction {
        id,
        date: date.to_string(),
        kind: kind.to_string(),
        description: description.to_string(),
        user: user.to_string(),
        notes: notes.to_string(),
    })
    .collect()
}

/// Upsell opportunities listed in the client details.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenOpportunity {
    pub title: &'static str,
    pub value: i64,
    pub stage: Stage,
    pub probability: u8,
    pub expected_date: &'static str,
}

pub fn client_opportunities() -> Vec<OpenOpportunity> {
    vec![
        OpenOpportunity {
            title: "Expansão de Serviços",
            value: 35000,
            stage: Stage::Proposta,
            probability: 75,
            expected_date: "2024-07-30",
        },
        OpenOpportunity {
            title: "Consultoria Digital",
            value: 20000,
            stage: Stage::Negociacao,
            probability: 60,
            expected_date: "2024-08-15",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcus_core::domain::clients::{check_document, DocumentCheck};
    use arcus_core::shared::search::filter_by_search;

    #[test]
    fn test_clients_follow_signed_in_user() {
        let clients = mock_clients("Suporte", "Pedro Costa");
        assert_eq!(clients.len(), 3);
        assert!(clients.iter().all(|c| c.sector == "Suporte" && c.created_by == "Pedro Costa"));
        assert!(!clients[2].is_base_client);
    }

    #[test]
    fn test_search_by_document_fragment() {
        let clients = mock_clients("Comercial", "Carlos Silva");
        let found = filter_by_search(&clients, "456.789");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "João Silva Santos");
    }

    #[test]
    fn test_every_mock_client_is_known() {
        let known = known_clients();
        for client in mock_clients("Comercial", "Carlos Silva") {
            assert_eq!(
                check_document(&client.document, &known),
                Some(DocumentCheck::Existing { client_name: client.name.clone() })
            );
        }
    }
}
