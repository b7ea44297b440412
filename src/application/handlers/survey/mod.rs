//! Survey handlers - classification and session state.

mod complete_survey;
mod get_survey_state;
mod reset_survey;

pub use complete_survey::{CompleteSurveyCommand, CompleteSurveyHandler, CompleteSurveyResult};
pub use get_survey_state::{GetSurveyStateHandler, SurveyState};
pub use reset_survey::ResetSurveyHandler;
