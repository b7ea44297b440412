//! Survey domain - skin-type questionnaire and scoring.

mod answer;
mod answers;
mod classifier;
mod profile;
mod questions;
mod skin_type;

pub use answer::LikertAnswer;
pub use answers::{SurveyAnswers, QUESTION_COUNT};
pub use classifier::classify;
pub use profile::SkinTypeProfile;
pub use questions::SURVEY_QUESTIONS;
pub use skin_type::{normalize_skin_types, SkinType};
