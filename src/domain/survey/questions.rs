//! The fixed ten-question survey.
//!
//! Question order matters: the classifier pairs question indices into
//! per-type scores, so this list must stay aligned with the scoring rule.

/// Survey statements, answered on the Likert scale.
pub const SURVEY_QUESTIONS: [&str; 10] = [
    "My skin often feels tight or dry after cleansing.",
    "My skin looks shiny and produces a lot of oil during the day.",
    "My T-zone (forehead and nose) is oily, but my cheeks are dry.",
    "My skin easily turns red or itchy from external irritants such as cosmetics or weather.",
    "My skin feels dry underneath but looks oily on the surface.",
    "My skin condition changes noticeably when the seasons change.",
    "My pores are enlarged and blackheads or whiteheads appear often.",
    "My skin is stable: neither particularly dry nor oily.",
    "My skin flakes easily and fine lines form quickly.",
    "My skin breaks out easily when I switch skincare products.",
];
