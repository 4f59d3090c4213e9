//! Session Storage
//!
//! The bearer token and the signed-in profile, persisted under two keys and
//! always written or cleared together.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use crate::config::StorageKeys;
use crate::models::UserProfile;

/// Key/value persistence for the session
pub trait TokenStore: Send + Sync {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStore for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                warn!("[AUTH] localStorage rejected key {}", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-process store for tests and non-browser runs
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// Handle on the persisted session; cheap to clone
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self { store: Arc::new(store) }
    }

    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }

    /// Current token, read fresh from the store
    pub fn token(&self) -> Option<String> {
        self.store.load(StorageKeys::TOKEN).filter(|t| !t.is_empty())
    }

    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    /// Stored profile; unreadable JSON counts as none
    pub fn profile(&self) -> Option<UserProfile> {
        let raw = self.store.load(StorageKeys::PROFILE)?;
        serde_json::from_str(&raw).ok()
    }

    pub fn sign_in(&self, token: &str, profile: Option<&UserProfile>) {
        self.store.save(StorageKeys::TOKEN, token);
        match profile.map(serde_json::to_string) {
            Some(Ok(json)) => self.store.save(StorageKeys::PROFILE, &json),
            _ => self.store.remove(StorageKeys::PROFILE),
        }
        info!("[AUTH] signed in");
    }

    pub fn sign_out(&self) {
        self.store.remove(StorageKeys::TOKEN);
        self.store.remove(StorageKeys::PROFILE);
        info!("[AUTH] signed out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn test_sign_in_then_out() {
        let session = Session::new(MemoryStorage::new());
        assert!(!session.has_token());
        assert!(session.profile().is_none());

        let profile = UserProfile {
            name: Some("Daw Hla".into()),
            role: Role::Editor,
            ..Default::default()
        };
        session.sign_in("tok-1", Some(&profile));
        assert_eq!(session.token().as_deref(), Some("tok-1"));
        assert_eq!(session.profile(), Some(profile));

        session.sign_out();
        assert!(session.token().is_none());
        assert!(session.profile().is_none());
    }

    #[test]
    fn test_reads_are_fresh() {
        let session = Session::new(MemoryStorage::new());
        let other_handle = session.clone();
        other_handle.sign_in("tok-2", None);
        assert_eq!(session.token().as_deref(), Some("tok-2"));
    }

    #[test]
    fn test_bad_profile_json_ignored() {
        let store = MemoryStorage::new();
        store.save(StorageKeys::PROFILE, "{not json");
        store.save(StorageKeys::TOKEN, "");
        let session = Session::new(store);
        assert!(session.profile().is_none());
        assert!(!session.has_token());
    }
}
