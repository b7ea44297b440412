//! HTTP handlers for survey endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, ErrorResponse};
use crate::application::handlers::survey::{
    CompleteSurveyCommand, CompleteSurveyHandler, GetSurveyStateHandler, ResetSurveyHandler,
};
use crate::domain::survey::{LikertAnswer, SurveyAnswers, QUESTION_COUNT, SURVEY_QUESTIONS};

use super::dto::{
    CompleteSurveyRequest, QuestionnaireResponse, SurveyResultResponse, SurveyStateResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SurveyHandlers {
    complete_handler: Arc<CompleteSurveyHandler>,
    state_handler: Arc<GetSurveyStateHandler>,
    reset_handler: Arc<ResetSurveyHandler>,
}

impl SurveyHandlers {
    pub fn new(
        complete_handler: Arc<CompleteSurveyHandler>,
        state_handler: Arc<GetSurveyStateHandler>,
        reset_handler: Arc<ResetSurveyHandler>,
    ) -> Self {
        Self {
            complete_handler,
            state_handler,
            reset_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/survey/questions - The questionnaire and its answer scale
pub async fn get_questions() -> Response {
    let response = QuestionnaireResponse::current(&SURVEY_QUESTIONS);
    (StatusCode::OK, Json(response)).into_response()
}

/// POST /api/survey/complete - Classify answers and store the result
pub async fn complete_survey(
    State(handlers): State<SurveyHandlers>,
    Json(req): Json<CompleteSurveyRequest>,
) -> Response {
    if req.answers.len() != usize::from(QUESTION_COUNT) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(format!(
                "Expected {} answers, got {}",
                QUESTION_COUNT,
                req.answers.len()
            ))),
        )
            .into_response();
    }

    let mut answers = SurveyAnswers::new();
    for (index, value) in req.answers.iter().enumerate() {
        let answer = match LikertAnswer::try_from_u8(*value) {
            Ok(answer) => answer,
            Err(e) => return domain_error_response(e.into()),
        };
        if let Err(e) = answers.record(index as u8, answer) {
            return domain_error_response(e.into());
        }
    }

    let cmd = CompleteSurveyCommand { answers };

    match handlers.complete_handler.handle(cmd).await {
        Ok(result) => {
            let response = SurveyResultResponse::for_skin_type(result.skin_type);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/survey/state - Stored survey session state
pub async fn get_state(State(handlers): State<SurveyHandlers>) -> Response {
    match handlers.state_handler.handle().await {
        Ok(state) => {
            let response = SurveyStateResponse {
                skin_type: state.skin_type.map(|t| t.as_str().to_string()),
                completed: state.completed,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/survey/result - Care report for the stored skin type
pub async fn get_result(State(handlers): State<SurveyHandlers>) -> Response {
    match handlers.state_handler.handle().await {
        Ok(state) => match state.skin_type.filter(|_| state.completed) {
            Some(skin_type) => {
                let response = SurveyResultResponse::for_skin_type(skin_type);
                (StatusCode::OK, Json(response)).into_response()
            }
            None => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::not_found("No completed survey")),
            )
                .into_response(),
        },
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/survey/reset - Clear the stored result and retake the survey
pub async fn reset_survey(State(handlers): State<SurveyHandlers>) -> Response {
    match handlers.reset_handler.handle().await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}
