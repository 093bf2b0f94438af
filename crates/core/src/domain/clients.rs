use serde::{Deserialize, Serialize};

use crate::shared::format::format_tax_id;
use crate::shared::search::{contains_ci, Searchable};
use crate::shared::validation::ValidationError;

/// Legal nature of a client: organization (CNPJ) or individual (CPF).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PersonKind {
    #[default]
    PJ,
    PF,
}

impl PersonKind {
    pub fn code(&self) -> &'static str {
        match self {
            PersonKind::PJ => "PJ",
            PersonKind::PF => "PF",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "PJ" => Some(PersonKind::PJ),
            "PF" => Some(PersonKind::PF),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PersonKind::PJ => "Pessoa Jurídica",
            PersonKind::PF => "Pessoa Física",
        }
    }

    pub fn document_label(&self) -> &'static str {
        match self {
            PersonKind::PJ => "CNPJ",
            PersonKind::PF => "CPF",
        }
    }

    /// Number of digits in a complete document.
    pub fn digits(&self) -> usize {
        match self {
            PersonKind::PJ => 14,
            PersonKind::PF => 11,
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            PersonKind::PJ => "00.000.000/0000-00",
            PersonKind::PF => "000.000.000-00",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClientStatus {
    Ativo,
    #[default]
    Prospecto,
    Inativo,
}

impl ClientStatus {
    pub const ALL: [ClientStatus; 3] = [ClientStatus::Prospecto, ClientStatus::Ativo, ClientStatus::Inativo];

    pub fn label(&self) -> &'static str {
        match self {
            ClientStatus::Ativo => "Ativo",
            ClientStatus::Prospecto => "Prospecto",
            ClientStatus::Inativo => "Inativo",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: u32,
    pub name: String,
    pub document: String,
    pub kind: PersonKind,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub sector: String,
    pub status: ClientStatus,
    pub contracts: u32,
    pub total_value: i64,
    pub last_contact: String,
    pub is_base_client: bool,
    pub created_by: String,
}

impl Searchable for Client {
    /// Name and email ignore case; the document is matched as typed.
    fn matches_search(&self, term: &str) -> bool {
        contains_ci(&self.name, term) || self.document.contains(term) || contains_ci(&self.email, term)
    }
}

/// A client already in the base, keyed by formatted document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownClient {
    pub document: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentCheck {
    Existing { client_name: String },
    New,
}

impl DocumentCheck {
    pub fn message(&self) -> &'static str {
        match self {
            DocumentCheck::Existing { .. } => "Cliente já cadastrado na base",
            DocumentCheck::New => "Novo cliente - não encontrado na base",
        }
    }
}

/// Looks a formatted document up among known clients. Returns `None` while
/// the input is too short to be a document.
pub fn check_document(document: &str, known: &[KnownClient]) -> Option<DocumentCheck> {
    if document.chars().count() < PersonKind::PF.digits() {
        return None;
    }
    Some(
        known
            .iter()
            .find(|c| c.document == document)
            .map(|c| DocumentCheck::Existing { client_name: c.name.clone() })
            .unwrap_or(DocumentCheck::New),
    )
}

/// Contact history shown in the client details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInteraction {
    pub id: u32,
    pub date: String,
    pub kind: String,
    pub description: String,
    pub user: String,
    pub notes: String,
}

/// Client form model.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClientDraft {
    pub name: String,
    pub document: String,
    pub kind: PersonKind,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub sector: String,
    pub status: ClientStatus,
    pub notes: String,
}

impl ClientDraft {
    /// Blank form; the sector defaults to the sector of whoever registers it.
    pub fn new(sector: &str) -> Self {
        Self {
            sector: sector.to_string(),
            ..Self::default()
        }
    }

    pub fn from_client(client: &Client) -> Self {
        Self {
            name: client.name.clone(),
            document: client.document.clone(),
            kind: client.kind,
            email: client.email.clone(),
            phone: client.phone.clone(),
            address: client.address.clone(),
            sector: client.sector.clone(),
            status: client.status,
            ..Self::default()
        }
    }

    /// Switching the kind invalidates the document typed so far.
    pub fn set_kind(&mut self, kind: PersonKind) {
        self.kind = kind;
        self.document.clear();
    }

    pub fn set_document(&mut self, raw: &str) {
        self.document = format_tax_id(raw, self.kind);
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("nome"));
        }
        if self.document.trim().is_empty() {
            return Err(ValidationError::MissingField(self.kind.document_label()));
        }
        Ok(())
    }

    /// One-line address as shown on the client card.
    pub fn full_address(&self) -> String {
        let place = match (self.city.trim(), self.state.trim()) {
            ("", "") => String::new(),
            (city, "") => city.to_string(),
            ("", state) => state.to_string(),
            (city, state) => format!("{}/{}", city, state),
        };
        match (self.address.trim(), place.as_str()) {
            (street, "") => street.to_string(),
            ("", place) => place.to_string(),
            (street, place) => format!("{} - {}", street, place),
        }
    }

    /// Builds the stored record. Contract totals and history come from
    /// `existing` when editing.
    pub fn into_client(self, id: u32, existing: Option<&Client>, created_by: &str, today: &str) -> Client {
        let address = if self.city.trim().is_empty() && self.state.trim().is_empty() {
            self.address.clone()
        } else {
            self.full_address()
        };
        Client {
            id,
            address,
            name: self.name,
            document: self.document,
            kind: self.kind,
            email: self.email,
            phone: self.phone,
            sector: self.sector,
            status: self.status,
            contracts: existing.map_or(0, |c| c.contracts),
            total_value: existing.map_or(0, |c| c.total_value),
            last_contact: existing.map_or_else(|| today.to_string(), |c| c.last_contact.clone()),
            is_base_client: existing.map_or(false, |c| c.is_base_client),
            created_by: existing.map_or_else(|| created_by.to_string(), |c| c.created_by.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(name: &str, document: &str, email: &str) -> Client {
        Client {
            id: 1,
            name: name.into(),
            document: document.into(),
            kind: PersonKind::PJ,
            email: email.into(),
            phone: String::new(),
            address: String::new(),
            sector: "Comercial".into(),
            status: ClientStatus::Ativo,
            contracts: 0,
            total_value: 0,
            last_contact: "2024-06-15".into(),
            is_base_client: true,
            created_by: "Carlos Silva".into(),
        }
    }

    #[test]
    fn test_client_search_fields() {
        let c = client("Empresa ABC Ltda", "12.345.678/0001-90", "contato@empresaabc.com.br");
        assert!(c.matches_search(""));
        assert!(c.matches_search("empresa abc"));
        assert!(c.matches_search("0001"));
        assert!(c.matches_search("CONTATO@"));
        assert!(!c.matches_search("tech"));
    }

    fn known() -> Vec<KnownClient> {
        vec![
            KnownClient { document: "12.345.678/0001-90".into(), name: "Empresa ABC Ltda".into() },
            KnownClient { document: "123.456.789-00".into(), name: "João Silva Santos".into() },
        ]
    }

    #[test]
    fn test_check_document() {
        assert_eq!(check_document("12.345", &known()), None);
        assert_eq!(
            check_document("123.456.789-00", &known()),
            Some(DocumentCheck::Existing { client_name: "João Silva Santos".into() })
        );
        assert_eq!(check_document("98.765.432/0001-10", &known()), Some(DocumentCheck::New));
    }

    #[test]
    fn test_draft_masks_document_and_kind_change_clears_it() {
        let mut draft = ClientDraft::new("Suporte");
        assert_eq!(draft.sector, "Suporte");
        draft.set_document("12345678000190");
        assert_eq!(draft.document, "12.345.678/0001-90");
        draft.set_kind(PersonKind::PF);
        assert!(draft.document.is_empty());
        draft.set_document("12345678900");
        assert_eq!(draft.document, "123.456.789-00");
    }

    #[test]
    fn test_draft_validation() {
        let mut draft = ClientDraft::new("Comercial");
        assert_eq!(draft.validate(), Err(ValidationError::MissingField("nome")));
        draft.name = "Nova Empresa".into();
        assert_eq!(draft.validate(), Err(ValidationError::MissingField("CNPJ")));
        draft.set_document("11222333000144");
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_full_address() {
        let mut draft = ClientDraft::new("Comercial");
        assert_eq!(draft.full_address(), "");
        draft.address = "Rua A, 1".into();
        assert_eq!(draft.full_address(), "Rua A, 1");
        draft.city = "Campinas".into();
        draft.state = "SP".into();
        assert_eq!(draft.full_address(), "Rua A, 1 - Campinas/SP");
    }

    #[test]
    fn test_into_client_new_and_edit() {
        let mut draft = ClientDraft::new("Comercial");
        draft.name = "Nova Empresa".into();
        draft.set_document("11222333000144");
        let created = draft.into_client(4, None, "Ana Santos", "2024-06-20");
        assert_eq!(created.created_by, "Ana Santos");
        assert_eq!(created.last_contact, "2024-06-20");
        assert_eq!(created.status, ClientStatus::Prospecto);
        assert!(!created.is_base_client);

        let existing = client("Empresa ABC Ltda", "12.345.678/0001-90", "a@b.c");
        let mut draft = ClientDraft::from_client(&existing);
        draft.email = "novo@empresaabc.com.br".into();
        let edited = draft.into_client(existing.id, Some(&existing), "Ana Santos", "2024-06-20");
        assert_eq!(edited.email, "novo@empresaabc.com.br");
        assert_eq!(edited.created_by, "Carlos Silva");
        assert_eq!(edited.last_contact, "2024-06-15");
        assert!(edited.is_base_client);
    }
}
