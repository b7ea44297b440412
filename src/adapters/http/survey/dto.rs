//! HTTP DTOs for survey endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::survey::{LikertAnswer, SkinType, SkinTypeProfile};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to complete the survey.
///
/// `answers` holds one value per question, in question order, each on the
/// 1-5 agreement scale.
#[derive(Debug, Clone, Deserialize)]
pub struct CompleteSurveyRequest {
    pub answers: Vec<u8>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One survey question.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionResponse {
    pub index: u8,
    pub text: String,
}

/// One point on the agreement scale.
#[derive(Debug, Clone, Serialize)]
pub struct ScalePointResponse {
    pub value: u8,
    pub label: String,
}

/// The full questionnaire.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionnaireResponse {
    pub questions: Vec<QuestionResponse>,
    pub scale: Vec<ScalePointResponse>,
}

impl QuestionnaireResponse {
    pub fn current(questions: &[&str]) -> Self {
        Self {
            questions: questions
                .iter()
                .enumerate()
                .map(|(i, text)| QuestionResponse {
                    index: i as u8,
                    text: (*text).to_string(),
                })
                .collect(),
            scale: LikertAnswer::ALL
                .iter()
                .map(|a| ScalePointResponse {
                    value: a.value(),
                    label: a.label().to_string(),
                })
                .collect(),
        }
    }
}

/// Classification result with the care report.
#[derive(Debug, Clone, Serialize)]
pub struct SurveyResultResponse {
    pub skin_type: String,
    pub label: String,
    pub profile: ProfileResponse,
}

impl SurveyResultResponse {
    pub fn for_skin_type(skin_type: SkinType) -> Self {
        Self {
            skin_type: skin_type.as_str().to_string(),
            label: skin_type.label().to_string(),
            profile: ProfileResponse::from(SkinTypeProfile::for_skin_type(skin_type)),
        }
    }
}

/// Static care report for one skin type.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub description: String,
    pub tips: Vec<String>,
    pub recommended_ingredients: Vec<String>,
    pub avoid_ingredients: Vec<String>,
}

impl From<&SkinTypeProfile> for ProfileResponse {
    fn from(profile: &SkinTypeProfile) -> Self {
        Self {
            description: profile.description.to_string(),
            tips: profile.tips.iter().map(|s| s.to_string()).collect(),
            recommended_ingredients: profile
                .recommended_ingredients
                .iter()
                .map(|s| s.to_string())
                .collect(),
            avoid_ingredients: profile
                .avoid_ingredients
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Stored survey session state.
#[derive(Debug, Clone, Serialize)]
pub struct SurveyStateResponse {
    pub skin_type: Option<String>,
    pub completed: bool,
}
