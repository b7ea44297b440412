//! ResetSurveyHandler - clears stored survey state.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::ports::{PreferenceStore, StorageScope, SKIN_TYPE_KEY, SURVEY_COMPLETED_KEY};

/// Handler for resetting the survey.
///
/// Removes both persistent keys; a subsequent state query then reports the
/// survey as not completed and the client returns to the survey screen.
pub struct ResetSurveyHandler {
    store: Arc<dyn PreferenceStore>,
}

impl ResetSurveyHandler {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<(), DomainError> {
        self.store
            .remove(StorageScope::Persistent, SKIN_TYPE_KEY)
            .await?;
        self.store
            .remove(StorageScope::Persistent, SURVEY_COMPLETED_KEY)
            .await?;

        tracing::info!("survey state reset");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryPreferenceStore;
    use crate::application::handlers::survey::GetSurveyStateHandler;

    #[tokio::test]
    async fn reset_clears_both_keys() {
        let store = Arc::new(InMemoryPreferenceStore::new());
        store
            .set(StorageScope::Persistent, SKIN_TYPE_KEY, "sensitive")
            .await
            .unwrap();
        store
            .set(StorageScope::Persistent, SURVEY_COMPLETED_KEY, "true")
            .await
            .unwrap();

        ResetSurveyHandler::new(store.clone()).handle().await.unwrap();

        let state = GetSurveyStateHandler::new(store).handle().await.unwrap();
        assert_eq!(state.skin_type, None);
        assert!(!state.completed);
    }

    #[tokio::test]
    async fn reset_of_empty_store_is_a_noop() {
        let store = Arc::new(InMemoryPreferenceStore::new());
        assert!(ResetSurveyHandler::new(store).handle().await.is_ok());
    }
}
