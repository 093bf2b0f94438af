use arcus_core::system::auth::{KeyValueStore, SessionManager, StorageError};
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// `localStorage`, seen through the core key-value seam.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = get_local_storage().ok_or_else(|| StorageError::Write {
            key: key.to_string(),
            reason: "localStorage is not available".to_string(),
        })?;
        storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

pub fn session_manager() -> SessionManager<LocalStorage> {
    SessionManager::new(LocalStorage)
}
