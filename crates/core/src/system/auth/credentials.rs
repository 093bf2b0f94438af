use sha2::{Digest, Sha256};

use super::{issue_token, AuthError, Session, SessionUser};
use crate::system::permissions::{Permission, PermissionSet};

/// A stored account. The password is kept only as a salted SHA-256 digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    pub id: u32,
    pub email: String,
    pub password_salt: String,
    pub password_hash: String,
    pub name: String,
    pub role: String,
    pub sector: String,
    pub permissions: PermissionSet,
}

impl UserAccount {
    pub fn verify_password(&self, candidate: &str) -> bool {
        hash_password(&self.password_salt, candidate) == self.password_hash
    }

    pub fn to_session_user(&self) -> SessionUser {
        SessionUser {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role.clone(),
            sector: self.sector.clone(),
            permissions: self.permissions.clone(),
        }
    }
}

/// Hex SHA-256 of `salt || password`.
pub fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Shown under the login form so people can try the demo profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoAccountHint {
    pub label: &'static str,
    pub email: &'static str,
    pub password: &'static str,
}

pub const DEMO_ACCOUNT_HINTS: [DemoAccountHint; 3] = [
    DemoAccountHint { label: "Gerente", email: "gerente@empresa.com", password: "123456" },
    DemoAccountHint { label: "Analista", email: "analista@empresa.com", password: "123456" },
    DemoAccountHint { label: "Assistente", email: "assistente@empresa.com", password: "123456" },
];

#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    accounts: Vec<UserAccount>,
}

impl CredentialStore {
    pub fn new(accounts: Vec<UserAccount>) -> Self {
        Self { accounts }
    }

    /// The fixed demo accounts.
    pub fn demo() -> Self {
        use Permission::*;
        Self::new(vec![
            UserAccount {
                id: 1,
                email: "gerente@empresa.com".into(),
                password_salt: "a1f3c9e2-carlos".into(),
                password_hash: "6a26dc9ee821bcf6bf18c032e27962593be76a2c3618486f7d27f647de39e2eb".into(),
                name: "Carlos Silva".into(),
                role: "Gerente Comercial".into(),
                sector: "Comercial".into(),
                permissions: PermissionSet::from([
                    Dashboard,
                    Clientes,
                    Contratos,
                    Oportunidades,
                    Relatorios,
                    Admin,
                ]),
            },
            UserAccount {
                id: 2,
                email: "analista@empresa.com".into(),
                password_salt: "7b24d0e8-ana".into(),
                password_hash: "ce79c9bfb9a25adedbbc5ca9efe8b5d5825a839b8305feb29b93378451e72afe".into(),
                name: "Ana Santos".into(),
                role: "Analista Comercial".into(),
                sector: "Comercial".into(),
                permissions: PermissionSet::from([Dashboard, Clientes, Contratos, Oportunidades]),
            },
            UserAccount {
                id: 3,
                email: "assistente@empresa.com".into(),
                password_salt: "c95e1a47-pedro".into(),
                password_hash: "dbe05383b1dcc8ea43a1544bbc6e75c313cc9ff363151bd4d5f8256b986fac6e".into(),
                name: "Pedro Costa".into(),
                role: "Assistente de Suporte".into(),
                sector: "Suporte".into(),
                permissions: PermissionSet::from([Dashboard, Clientes]),
            },
        ])
    }

    pub fn accounts(&self) -> &[UserAccount] {
        &self.accounts
    }

    /// Exact, case-sensitive match on both email and password.
    pub fn authenticate(
        &self,
        email: &str,
        password: &str,
        issued_at_ms: i64,
    ) -> Result<Session, AuthError> {
        let account = self
            .accounts
            .iter()
            .find(|a| a.email == email && a.verify_password(password))
            .ok_or(AuthError::InvalidCredentials)?;

        Ok(Session {
            token: issue_token(account.id, issued_at_ms),
            user: account.to_session_user(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Permission::*;

    #[test]
    fn test_manager_login_succeeds() {
        let store = CredentialStore::demo();
        let session = store
            .authenticate("gerente@empresa.com", "123456", 1718700000000)
            .unwrap();
        assert_eq!(session.user.name, "Carlos Silva");
        assert_eq!(session.token, "token_1_1718700000000");
        assert!(session.user.permissions.same_as(&PermissionSet::from([
            Dashboard,
            Clientes,
            Contratos,
            Oportunidades,
            Relatorios,
            Admin
        ])));
    }

    #[test]
    fn test_wrong_password_fails() {
        let store = CredentialStore::demo();
        assert_eq!(
            store.authenticate("gerente@empresa.com", "wrong", 0),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let store = CredentialStore::demo();
        assert!(store.authenticate("Gerente@empresa.com", "123456", 0).is_err());
        assert!(store.authenticate(" gerente@empresa.com", "123456", 0).is_err());
        assert!(store.authenticate("", "", 0).is_err());
    }

    #[test]
    fn test_password_of_another_account_is_rejected() {
        let store = CredentialStore::new(vec![UserAccount {
            id: 9,
            email: "x@empresa.com".into(),
            password_salt: "s".into(),
            password_hash: hash_password("s", "segredo"),
            name: "X".into(),
            role: "Coordenador".into(),
            sector: "RH".into(),
            permissions: PermissionSet::new(),
        }]);
        assert!(store.authenticate("x@empresa.com", "segredo", 5).is_ok());
        assert!(store.authenticate("x@empresa.com", "123456", 5).is_err());
    }

    #[test]
    fn test_demo_hints_all_authenticate() {
        let store = CredentialStore::demo();
        for hint in DEMO_ACCOUNT_HINTS {
            assert!(store.authenticate(hint.email, hint.password, 0).is_ok(), "{}", hint.email);
        }
    }

    #[test]
    fn test_session_user_has_no_password_material() {
        let store = CredentialStore::demo();
        let session = store.authenticate("analista@empresa.com", "123456", 1).unwrap();
        let json = serde_json::to_string(&session.user).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("123456"));
    }
}
