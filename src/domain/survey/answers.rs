//! Accumulated survey responses for one session.

use std::collections::HashMap;

use crate::domain::foundation::ValidationError;

use super::LikertAnswer;

/// Number of questions in the fixed survey.
pub const QUESTION_COUNT: u8 = 10;

/// Responses keyed by question index (0..9).
///
/// Transient: held only for the duration of one survey session and discarded
/// after classification. Missing answers score 0 rather than erroring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurveyAnswers {
    answers: HashMap<u8, LikertAnswer>,
}

impl SurveyAnswers {
    /// Creates an empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the answer for a question index.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if the index is not a survey question.
    pub fn record(&mut self, question: u8, answer: LikertAnswer) -> Result<(), ValidationError> {
        if question >= QUESTION_COUNT {
            return Err(ValidationError::out_of_range(
                "question",
                0,
                (QUESTION_COUNT - 1) as i32,
                question as i32,
            ));
        }
        self.answers.insert(question, answer);
        Ok(())
    }

    /// Returns the score for a question, 0 if unanswered.
    pub fn score(&self, question: u8) -> u8 {
        self.answers.get(&question).map_or(0, LikertAnswer::value)
    }

    /// Returns the answer for a question, if given.
    pub fn answer(&self, question: u8) -> Option<LikertAnswer> {
        self.answers.get(&question).copied()
    }

    /// Returns true when every question has been answered.
    pub fn is_complete(&self) -> bool {
        (0..QUESTION_COUNT).all(|q| self.answers.contains_key(&q))
    }

    /// Returns the number of answered questions.
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }
}
