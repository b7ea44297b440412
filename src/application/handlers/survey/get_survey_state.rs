//! GetSurveyStateHandler - reads the stored survey session state.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::survey::SkinType;
use crate::ports::{PreferenceStore, StorageScope, SKIN_TYPE_KEY, SURVEY_COMPLETED_KEY};

/// Stored survey session state.
///
/// The catalog screen is shown only when `completed` is true; otherwise the
/// client shows the survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveyState {
    pub skin_type: Option<SkinType>,
    pub completed: bool,
}

/// Handler for reading survey state.
pub struct GetSurveyStateHandler {
    store: Arc<dyn PreferenceStore>,
}

impl GetSurveyStateHandler {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<SurveyState, DomainError> {
        let stored_type = self
            .store
            .get(StorageScope::Persistent, SKIN_TYPE_KEY)
            .await?;
        let completed_flag = self
            .store
            .get(StorageScope::Persistent, SURVEY_COMPLETED_KEY)
            .await?;

        // A stale or unparseable value counts as not completed.
        let skin_type = stored_type.and_then(|s| s.parse().ok());
        let completed = skin_type.is_some() && completed_flag.as_deref() == Some("true");

        Ok(SurveyState {
            skin_type,
            completed,
        })
    }
}
