pub mod credentials;
pub mod session;
pub mod storage;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::permissions::{Permission, PermissionSet};

pub use credentials::{CredentialStore, DemoAccountHint, UserAccount};
pub use session::SessionManager;
pub use storage::{KeyValueStore, MemoryStore, StorageError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Email ou senha incorretos")]
    InvalidCredentials,
}

/// The identity carried by a session. Never contains password material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: u32,
    pub email: String,
    pub name: String,
    pub role: String,
    pub sector: String,
    pub permissions: PermissionSet,
}

impl SessionUser {
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(permission)
    }

    /// First letter of the name, used for the avatar bubble.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(|c| c.to_string()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

/// Opaque, unique-ish token: `token_<userId>_<epochMillis>`.
pub fn issue_token(user_id: u32, issued_at_ms: i64) -> String {
    format!("token_{}_{}", user_id, issued_at_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_token_format() {
        assert_eq!(issue_token(1, 1718700000000), "token_1_1718700000000");
    }

    #[test]
    fn test_initial() {
        let user = SessionUser {
            id: 2,
            email: "analista@empresa.com".into(),
            name: "Ana Santos".into(),
            role: "Analista Comercial".into(),
            sector: "Comercial".into(),
            permissions: PermissionSet::new(),
        };
        assert_eq!(user.initial(), "A");
        assert!(!user.has_permission(Permission::Dashboard));
    }
}
