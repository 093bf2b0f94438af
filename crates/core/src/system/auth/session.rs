//! Session persistence.
//!
//! A session lives under two keys, `token` and `user`. Both are written
//! together or not at all, so `restore` only has to check that both exist.

use super::storage::{KeyValueStore, StorageError};
use super::{Session, SessionUser};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

#[derive(Debug, Clone)]
pub struct SessionManager<S> {
    store: S,
}

impl<S: KeyValueStore> SessionManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Writes token and user. If the user record cannot be written the token
    /// is removed again.
    pub fn persist(&self, session: &Session) -> Result<(), StorageError> {
        let user_json = serde_json::to_string(&session.user)
            .map_err(|e| StorageError::Serialize(e.to_string()))?;

        self.store.set(TOKEN_KEY, &session.token)?;
        if let Err(e) = self.store.set(USER_KEY, &user_json) {
            self.store.remove(TOKEN_KEY);
            return Err(e);
        }

        log::debug!("session persisted for user {}", session.user.id);
        Ok(())
    }

    /// Reads a previously persisted session. The stored user is trusted as-is;
    /// anything absent or malformed yields `None`.
    pub fn restore(&self) -> Option<Session> {
        let token = self.store.get(TOKEN_KEY);
        let user_json = self.store.get(USER_KEY);

        let (token, user_json) = match (token, user_json) {
            (Some(token), Some(user_json)) => (token, user_json),
            (None, None) => {
                log::debug!("no persisted session");
                return None;
            }
            _ => {
                log::warn!("persisted session is incomplete, ignoring it");
                return None;
            }
        };

        if token.trim().is_empty() {
            log::warn!("persisted session has an empty token, ignoring it");
            return None;
        }

        match serde_json::from_str::<SessionUser>(&user_json) {
            Ok(user) => {
                log::debug!("session restored for user {}", user.id);
                Some(Session { token, user })
            }
            Err(e) => {
                log::warn!("persisted user record is malformed: {}", e);
                None
            }
        }
    }

    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::{CredentialStore, MemoryStore};

    fn demo_session() -> Session {
        CredentialStore::demo()
            .authenticate("gerente@empresa.com", "123456", 1718700000000)
            .unwrap()
    }

    #[test]
    fn test_persist_then_restore_returns_same_session() {
        let manager = SessionManager::new(MemoryStore::new());
        let session = demo_session();
        manager.persist(&session).unwrap();
        assert_eq!(manager.restore(), Some(session));
    }

    #[test]
    fn test_clear_then_restore_returns_none() {
        let manager = SessionManager::new(MemoryStore::new());
        manager.persist(&demo_session()).unwrap();
        manager.clear();
        assert_eq!(manager.restore(), None);
        assert!(manager.store().is_empty());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let manager = SessionManager::new(MemoryStore::new());
        manager.clear();
        manager.clear();
        assert_eq!(manager.restore(), None);
    }

    #[test]
    fn test_restore_on_empty_store() {
        let manager = SessionManager::new(MemoryStore::new());
        assert_eq!(manager.restore(), None);
    }

    #[test]
    fn test_restore_ignores_malformed_user() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "token_1_1").unwrap();
        store.set(USER_KEY, "{not json").unwrap();
        assert_eq!(SessionManager::new(&store).restore(), None);

        store
            .set(
                USER_KEY,
                r#"{"id":1,"email":"a","name":"b","role":"c","sector":"d","permissions":["root"]}"#,
            )
            .unwrap();
        assert_eq!(SessionManager::new(&store).restore(), None);
    }

    #[test]
    fn test_restore_requires_both_keys() {
        let store = MemoryStore::new();
        let manager = SessionManager::new(&store);
        manager.persist(&demo_session()).unwrap();
        store.remove(TOKEN_KEY);
        assert_eq!(manager.restore(), None);

        manager.persist(&demo_session()).unwrap();
        store.remove(USER_KEY);
        assert_eq!(manager.restore(), None);
    }

    #[test]
    fn test_restore_rejects_empty_token() {
        let store = MemoryStore::new();
        let manager = SessionManager::new(&store);
        let mut session = demo_session();
        session.token = "  ".to_string();
        manager.persist(&session).unwrap();
        assert_eq!(manager.restore(), None);
    }

    #[test]
    fn test_restore_accepts_user_from_older_login() {
        // No validation against the credential store: the stored user wins.
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "token_42_1").unwrap();
        store
            .set(
                USER_KEY,
                r#"{"id":42,"email":"old@empresa.com","name":"Antigo","role":"Diretor","sector":"RH","permissions":["dashboard","admin"]}"#,
            )
            .unwrap();
        let session = SessionManager::new(&store).restore().unwrap();
        assert_eq!(session.user.id, 42);
        assert_eq!(session.user.permissions.len(), 2);
    }

    struct RejectUserStore(MemoryStore);

    impl KeyValueStore for RejectUserStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if key == USER_KEY {
                return Err(StorageError::Write {
                    key: key.to_string(),
                    reason: "quota exceeded".to_string(),
                });
            }
            self.0.set(key, value)
        }

        fn remove(&self, key: &str) {
            self.0.remove(key)
        }
    }

    #[test]
    fn test_failed_user_write_leaves_no_token_behind() {
        let manager = SessionManager::new(RejectUserStore(MemoryStore::new()));
        let err = manager.persist(&demo_session()).unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
        assert_eq!(manager.store().get(TOKEN_KEY), None);
        assert_eq!(manager.restore(), None);
    }
}
