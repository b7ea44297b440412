//! HTTP routes for survey endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    complete_survey, get_questions, get_result, get_state, reset_survey, SurveyHandlers,
};

/// Creates the survey router with all endpoints.
pub fn survey_routes(handlers: SurveyHandlers) -> Router {
    Router::new()
        .route("/questions", get(get_questions))
        .route("/complete", post(complete_survey))
        .route("/state", get(get_state))
        .route("/result", get(get_result))
        .route("/reset", post(reset_survey))
        .with_state(handlers)
}
