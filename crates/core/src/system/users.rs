//! User administration: managed accounts, the user form model and the audit
//! trail shown in the admin panel.

use serde::{Deserialize, Serialize};

use super::permissions::{permissions_for_role, Permission, PermissionSet};
use crate::shared::search::{contains_ci, Searchable};
pub use crate::shared::validation::ValidationError;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Id of the primary administrator. That account can be edited but never
/// deactivated.
pub const PRIMARY_ADMIN_ID: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UserStatus {
    #[default]
    Ativo,
    Inativo,
}

impl UserStatus {
    pub const ALL: [UserStatus; 2] = [UserStatus::Ativo, UserStatus::Inativo];

    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Ativo => "Ativo",
            UserStatus::Inativo => "Inativo",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedUser {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub sector: String,
    pub status: UserStatus,
    pub last_login: String,
    pub permissions: PermissionSet,
    pub created_at: String,
}

impl ManagedUser {
    pub fn can_deactivate(&self) -> bool {
        self.id != PRIMARY_ADMIN_ID
    }
}

impl Searchable for ManagedUser {
    fn matches_search(&self, term: &str) -> bool {
        contains_ci(&self.name, term) || contains_ci(&self.email, term) || contains_ci(&self.role, term)
    }
}

/// User form model. Password fields only matter when creating.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: String,
    pub sector: String,
    pub status: UserStatus,
    pub permissions: PermissionSet,
}

impl UserDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_user(user: &ManagedUser) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            sector: user.sector.clone(),
            status: user.status,
            permissions: user.permissions.clone(),
            ..Self::default()
        }
    }

    /// Picking a role replaces whatever permissions were ticked.
    pub fn apply_role_preset(&mut self, role: &str) {
        self.role = role.to_string();
        self.permissions = permissions_for_role(role);
    }

    pub fn toggle_permission(&mut self, permission: Permission, checked: bool) {
        if checked {
            self.permissions.insert(permission);
        } else {
            self.permissions.remove(permission);
        }
    }

    pub fn validate(&self, is_new: bool) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("nome"));
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingField("email"));
        }
        if is_new {
            if self.password.chars().count() < MIN_PASSWORD_LEN {
                return Err(ValidationError::PasswordTooShort { min: MIN_PASSWORD_LEN });
            }
            if self.password != self.confirm_password {
                return Err(ValidationError::PasswordMismatch);
            }
        }
        if self.permissions.is_empty() {
            return Err(ValidationError::NoPermissions);
        }
        Ok(())
    }

    /// Builds the stored record. `last_login` stays empty until the first
    /// login of a new account.
    pub fn into_user(self, id: u32, existing: Option<&ManagedUser>, today: &str) -> ManagedUser {
        ManagedUser {
            id,
            name: self.name,
            email: self.email,
            role: self.role,
            sector: self.sector,
            status: self.status,
            last_login: existing.map(|u| u.last_login.clone()).unwrap_or_default(),
            permissions: self.permissions,
            created_at: existing
                .map(|u| u.created_at.clone())
                .unwrap_or_else(|| today.to_string()),
        }
    }
}

/// Next free id for a new user.
pub fn next_user_id(users: &[ManagedUser]) -> u32 {
    users.iter().map(|u| u.id).max().unwrap_or(0) + 1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditStatus {
    Sucesso,
    Bloqueado,
}

impl AuditStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AuditStatus::Sucesso => "Sucesso",
            AuditStatus::Bloqueado => "Bloqueado",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: u32,
    pub user: String,
    pub action: String,
    pub details: String,
    pub timestamp: String,
    pub ip: String,
    pub status: AuditStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use Permission::*;

    fn user(id: u32) -> ManagedUser {
        ManagedUser {
            id,
            name: "Carlos Silva".into(),
            email: "gerente@empresa.com".into(),
            role: "Gerente Comercial".into(),
            sector: "Comercial".into(),
            status: UserStatus::Ativo,
            last_login: "2024-06-18 09:15".into(),
            permissions: PermissionSet::from([Dashboard, Admin]),
            created_at: "2024-01-15".into(),
        }
    }

    fn valid_new_draft() -> UserDraft {
        let mut draft = UserDraft::new();
        draft.name = "Nova Pessoa".into();
        draft.email = "nova@empresa.com".into();
        draft.password = "segredo".into();
        draft.confirm_password = "segredo".into();
        draft.apply_role_preset("Analista de Suporte");
        draft
    }

    #[test]
    fn test_search_over_name_email_role() {
        let u = user(1);
        assert!(u.matches_search(""));
        assert!(u.matches_search("carlos"));
        assert!(u.matches_search("GERENTE@"));
        assert!(u.matches_search("comercial"));
        assert!(!u.matches_search("suporte"));
    }

    #[test]
    fn test_primary_admin_cannot_be_deactivated() {
        assert!(!user(1).can_deactivate());
        assert!(user(2).can_deactivate());
    }

    #[test]
    fn test_role_preset_replaces_permissions() {
        let mut draft = UserDraft::new();
        draft.permissions = PermissionSet::from([Admin]);
        draft.apply_role_preset("Coordenador");
        assert_eq!(draft.role, "Coordenador");
        assert!(!draft.permissions.contains(Admin));
        assert_eq!(draft.permissions.len(), 5);

        draft.apply_role_preset("Estagiário");
        assert!(draft.permissions.same_as(&PermissionSet::from([Dashboard])));
    }

    #[test]
    fn test_toggle_permission() {
        let mut draft = UserDraft::new();
        draft.toggle_permission(Relatorios, true);
        draft.toggle_permission(Relatorios, true);
        assert_eq!(draft.permissions.len(), 1);
        draft.toggle_permission(Relatorios, false);
        assert!(draft.permissions.is_empty());
    }

    #[test]
    fn test_validate_new_user() {
        assert_eq!(valid_new_draft().validate(true), Ok(()));

        let mut draft = valid_new_draft();
        draft.confirm_password = "outro1".into();
        assert_eq!(draft.validate(true), Err(ValidationError::PasswordMismatch));

        let mut draft = valid_new_draft();
        draft.password = "123".into();
        draft.confirm_password = "123".into();
        assert_eq!(
            draft.validate(true),
            Err(ValidationError::PasswordTooShort { min: 6 })
        );

        let mut draft = valid_new_draft();
        draft.permissions = PermissionSet::new();
        assert_eq!(draft.validate(true), Err(ValidationError::NoPermissions));

        let mut draft = valid_new_draft();
        draft.email.clear();
        assert_eq!(draft.validate(true), Err(ValidationError::MissingField("email")));
    }

    #[test]
    fn test_validate_edit_ignores_password() {
        let draft = UserDraft::from_user(&user(2));
        assert!(draft.password.is_empty());
        assert_eq!(draft.validate(false), Ok(()));
        assert_eq!(
            draft.validate(true),
            Err(ValidationError::PasswordTooShort { min: 6 })
        );
    }

    #[test]
    fn test_into_user_keeps_history_of_existing_record() {
        let existing = user(1);
        let mut draft = UserDraft::from_user(&existing);
        draft.name = "Carlos S.".into();
        let saved = draft.into_user(1, Some(&existing), "2024-06-20");
        assert_eq!(saved.name, "Carlos S.");
        assert_eq!(saved.created_at, "2024-01-15");
        assert_eq!(saved.last_login, "2024-06-18 09:15");

        let created = valid_new_draft().into_user(5, None, "2024-06-20");
        assert_eq!(created.created_at, "2024-06-20");
        assert!(created.last_login.is_empty());
    }

    #[test]
    fn test_next_user_id() {
        assert_eq!(next_user_id(&[]), 1);
        assert_eq!(next_user_id(&[user(1), user(4)]), 5);
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::PasswordMismatch.to_string(), "As senhas não coincidem");
        assert_eq!(
            ValidationError::NoPermissions.to_string(),
            "Selecione pelo menos uma permissão"
        );
    }
}
