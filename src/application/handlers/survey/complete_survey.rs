//! CompleteSurveyHandler - classifies answers and persists the result.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::survey::{classify, SkinType, SurveyAnswers};
use crate::ports::{PreferenceStore, StorageScope, SKIN_TYPE_KEY, SURVEY_COMPLETED_KEY};

/// Command carrying one session's accumulated answers.
#[derive(Debug, Clone)]
pub struct CompleteSurveyCommand {
    pub answers: SurveyAnswers,
}

/// Result of a completed survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompleteSurveyResult {
    pub skin_type: SkinType,
}

/// Handler for survey completion.
pub struct CompleteSurveyHandler {
    store: Arc<dyn PreferenceStore>,
}

impl CompleteSurveyHandler {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: CompleteSurveyCommand,
    ) -> Result<CompleteSurveyResult, DomainError> {
        let skin_type = classify(&cmd.answers);

        self.store
            .set(StorageScope::Persistent, SKIN_TYPE_KEY, skin_type.as_str())
            .await?;
        self.store
            .set(StorageScope::Persistent, SURVEY_COMPLETED_KEY, "true")
            .await?;

        tracing::info!(skin_type = %skin_type, "survey completed");

        Ok(CompleteSurveyResult { skin_type })
    }
}
