//! In-Memory Preference Store Adapter
//!
//! Holds scoped key/value state in memory. Serves both the single-client
//! runtime and tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::ports::{PreferenceStore, StorageScope};

/// In-memory storage for scoped preferences.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferenceStore {
    persistent: Arc<RwLock<HashMap<String, String>>>,
    session: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryPreferenceStore {
    /// Create a new in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data (useful for tests).
    pub async fn clear(&self) {
        self.persistent.write().await.clear();
        self.session.write().await.clear();
    }

    fn scope_map(&self, scope: StorageScope) -> &Arc<RwLock<HashMap<String, String>>> {
        match scope {
            StorageScope::Persistent => &self.persistent,
            StorageScope::Session => &self.session,
        }
    }
}

#[async_trait]
impl PreferenceStore for InMemoryPreferenceStore {
    async fn get(&self, scope: StorageScope, key: &str) -> Result<Option<String>, DomainError> {
        let map = self.scope_map(scope).read().await;
        Ok(map.get(key).cloned())
    }

    async fn set(&self, scope: StorageScope, key: &str, value: &str) -> Result<(), DomainError> {
        let mut map = self.scope_map(scope).write().await;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, scope: StorageScope, key: &str) -> Result<(), DomainError> {
        let mut map = self.scope_map(scope).write().await;
        map.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_then_get_returns_value() {
        let store = InMemoryPreferenceStore::new();
        store
            .set(StorageScope::Persistent, "skin_type", "dry")
            .await
            .unwrap();

        let value = store.get(StorageScope::Persistent, "skin_type").await.unwrap();
        assert_eq!(value, Some("dry".to_string()));
    }

    #[tokio::test]
    async fn get_of_absent_key_is_none() {
        let store = InMemoryPreferenceStore::new();
        let value = store.get(StorageScope::Session, "missing").await.unwrap();
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn scopes_do_not_leak_into_each_other() {
        let store = InMemoryPreferenceStore::new();
        store
            .set(StorageScope::Session, "flag", "true")
            .await
            .unwrap();

        assert_eq!(store.get(StorageScope::Persistent, "flag").await.unwrap(), None);
        assert_eq!(
            store.get(StorageScope::Session, "flag").await.unwrap(),
            Some("true".to_string())
        );
    }

    #[tokio::test]
    async fn remove_deletes_value() {
        let store = InMemoryPreferenceStore::new();
        store
            .set(StorageScope::Persistent, "skin_type", "oily")
            .await
            .unwrap();
        store
            .remove(StorageScope::Persistent, "skin_type")
            .await
            .unwrap();

        assert_eq!(
            store.get(StorageScope::Persistent, "skin_type").await.unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn remove_of_absent_key_is_a_noop() {
        let store = InMemoryPreferenceStore::new();
        assert!(store
            .remove(StorageScope::Persistent, "missing")
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn clear_empties_both_scopes() {
        let store = InMemoryPreferenceStore::new();
        store
            .set(StorageScope::Persistent, "a", "1")
            .await
            .unwrap();
        store.set(StorageScope::Session, "b", "2").await.unwrap();

        store.clear().await;

        assert_eq!(store.get(StorageScope::Persistent, "a").await.unwrap(), None);
        assert_eq!(store.get(StorageScope::Session, "b").await.unwrap(), None);
    }

    #[tokio::test]
    async fn clones_share_the_same_state() {
        let store = InMemoryPreferenceStore::new();
        let clone = store.clone();

        store
            .set(StorageScope::Persistent, "shared", "yes")
            .await
            .unwrap();

        assert_eq!(
            clone.get(StorageScope::Persistent, "shared").await.unwrap(),
            Some("yes".to_string())
        );
    }
}
