//! Preference store port - scoped key/value state.
//!
//! Models the client-side storage the application depends on: one scope that
//! survives restarts (survey result) and one scoped to the current session
//! (admin flag). Treated as single-writer; no conflict resolution attempted.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// Persistent-scope key holding the classified skin type.
pub const SKIN_TYPE_KEY: &str = "skin_type";

/// Persistent-scope key flagging survey completion ("true" when done).
pub const SURVEY_COMPLETED_KEY: &str = "survey_completed";

/// Session-scope key flagging admin authentication ("true" when granted).
pub const ADMIN_AUTHENTICATED_KEY: &str = "admin_authenticated";

/// Lifetime of a stored entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageScope {
    /// Survives restarts until explicitly removed.
    Persistent,
    /// Lives only for the current session.
    Session,
}

/// Port for scoped key/value preference state.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Reads a value, `None` if absent.
    async fn get(&self, scope: StorageScope, key: &str) -> Result<Option<String>, DomainError>;

    /// Writes a value, replacing any previous one.
    async fn set(&self, scope: StorageScope, key: &str, value: &str) -> Result<(), DomainError>;

    /// Removes a value. Removing an absent key is a no-op.
    async fn remove(&self, scope: StorageScope, key: &str) -> Result<(), DomainError>;
}
