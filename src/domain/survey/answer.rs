//! Likert answer value object (1 to 5 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Likert scale response: 1 (strongly disagree) to 5 (strongly agree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum LikertAnswer {
    StronglyDisagree = 1,
    Disagree = 2,
    Neutral = 3,
    Agree = 4,
    StronglyAgree = 5,
}

impl LikertAnswer {
    /// Creates an answer from an integer, returning error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        match value {
            1 => Ok(LikertAnswer::StronglyDisagree),
            2 => Ok(LikertAnswer::Disagree),
            3 => Ok(LikertAnswer::Neutral),
            4 => Ok(LikertAnswer::Agree),
            5 => Ok(LikertAnswer::StronglyAgree),
            _ => Err(ValidationError::out_of_range("answer", 1, 5, value as i32)),
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            LikertAnswer::StronglyDisagree => "Strongly disagree",
            LikertAnswer::Disagree => "Disagree",
            LikertAnswer::Neutral => "Neutral",
            LikertAnswer::Agree => "Agree",
            LikertAnswer::StronglyAgree => "Strongly agree",
        }
    }

    /// All answers in ascending scale order.
    pub const ALL: [LikertAnswer; 5] = [
        LikertAnswer::StronglyDisagree,
        LikertAnswer::Disagree,
        LikertAnswer::Neutral,
        LikertAnswer::Agree,
        LikertAnswer::StronglyAgree,
    ];
}

impl fmt::Display for LikertAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
