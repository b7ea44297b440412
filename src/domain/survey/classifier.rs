//! Skin-type scoring over accumulated survey answers.
//!
//! The scoring rule is a fixed weighted pairing of question scores. It is a
//! pure function: the same answers always yield the same skin type.

use super::{SkinType, SurveyAnswers};

/// Per-type scores derived from one answer set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SkinScores {
    dry: u8,
    oily: u8,
    normal: u8,
    combination: u8,
    sensitive: u8,
    dehydrated_oily: u8,
}

impl SkinScores {
    fn from_answers(answers: &SurveyAnswers) -> Self {
        Self {
            dry: answers.score(0) + answers.score(8),
            oily: answers.score(1) + answers.score(6),
            normal: answers.score(7),
            combination: answers.score(2) + answers.score(5),
            sensitive: answers.score(3) + answers.score(9),
            dehydrated_oily: answers.score(4),
        }
    }

    fn of(&self, skin_type: SkinType) -> u8 {
        match skin_type {
            SkinType::Dry => self.dry,
            SkinType::Oily => self.oily,
            SkinType::Normal => self.normal,
            SkinType::Combination => self.combination,
            SkinType::Sensitive => self.sensitive,
            SkinType::DehydratedOily => self.dehydrated_oily,
        }
    }
}

/// Classifies an answer set into a skin type.
///
/// Decision rule, in order:
/// 1. A normal score of 3 or more wins unconditionally.
/// 2. Otherwise the type with the maximum score wins; ties resolve to the
///    first matching type in [`SkinType::ALL`] order. Legacy installations
///    depend on this tie break, so it must not change.
/// 3. Falls back to normal if no score is computable.
pub fn classify(answers: &SurveyAnswers) -> SkinType {
    let scores = SkinScores::from_answers(answers);

    // The normal question alone decides when it scores high enough.
    if scores.of(SkinType::Normal) >= 3 {
        return SkinType::Normal;
    }

    let max_score = SkinType::ALL.iter().map(|t| scores.of(*t)).max();

    max_score
        .and_then(|max| SkinType::ALL.iter().copied().find(|t| scores.of(*t) == max))
        .unwrap_or(SkinType::Normal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::survey::LikertAnswer;
    use proptest::prelude::*;

    fn answers_from(pairs: &[(u8, u8)]) -> SurveyAnswers {
        let mut answers = SurveyAnswers::new();
        for &(q, v) in pairs {
            answers
                .record(q, LikertAnswer::try_from_u8(v).unwrap())
                .unwrap();
        }
        answers
    }

    #[test]
    fn dry_questions_classify_as_dry() {
        assert_eq!(classify(&answers_from(&[(0, 5), (8, 5)])), SkinType::Dry);
    }

    #[test]
    fn oily_questions_classify_as_oily() {
        assert_eq!(classify(&answers_from(&[(1, 5), (6, 5)])), SkinType::Oily);
    }

    #[test]
    fn sensitive_questions_classify_as_sensitive() {
        assert_eq!(
            classify(&answers_from(&[(3, 5), (9, 5)])),
            SkinType::Sensitive
        );
    }

    #[test]
    fn combination_questions_classify_as_combination() {
        assert_eq!(
            classify(&answers_from(&[(2, 4), (5, 4)])),
            SkinType::Combination
        );
    }

    #[test]
    fn dehydrated_oily_question_classifies_when_dominant() {
        assert_eq!(
            classify(&answers_from(&[(4, 5), (0, 1)])),
            SkinType::DehydratedOily
        );
    }

    #[test]
    fn normal_score_of_three_short_circuits() {
        assert_eq!(classify(&answers_from(&[(7, 3)])), SkinType::Normal);
    }

    #[test]
    fn normal_short_circuit_beats_higher_scores() {
        // Dry scores 10, but a normal answer of 3 wins unconditionally.
        let answers = answers_from(&[(0, 5), (8, 5), (7, 3)]);
        assert_eq!(classify(&answers), SkinType::Normal);
    }

    #[test]
    fn normal_below_three_does_not_short_circuit() {
        let answers = answers_from(&[(7, 2), (1, 5), (6, 5)]);
        assert_eq!(classify(&answers), SkinType::Oily);
    }

    #[test]
    fn empty_answers_resolve_to_dry_by_tie_break() {
        // All scores are 0; the all-zero tie resolves to the first type in
        // classification order, matching legacy behavior.
        assert_eq!(classify(&SurveyAnswers::new()), SkinType::Dry);
    }

    #[test]
    fn tie_resolves_to_earlier_type_in_order() {
        // Oily and sensitive both score 5; oily comes first.
        let answers = answers_from(&[(1, 5), (3, 5)]);
        assert_eq!(classify(&answers), SkinType::Oily);
    }

    #[test]
    fn classification_is_deterministic() {
        let answers = answers_from(&[(0, 2), (1, 4), (2, 3), (4, 5), (9, 1)]);
        let first = classify(&answers);
        for _ in 0..10 {
            assert_eq!(classify(&answers), first);
        }
    }

    proptest! {
        #[test]
        fn high_normal_answer_always_classifies_normal(
            values in proptest::collection::vec(1u8..=5, 10),
            normal_answer in 3u8..=5,
        ) {
            let mut answers = SurveyAnswers::new();
            for (q, v) in values.iter().enumerate() {
                answers.record(q as u8, LikertAnswer::try_from_u8(*v).unwrap()).unwrap();
            }
            answers.record(7, LikertAnswer::try_from_u8(normal_answer).unwrap()).unwrap();
            prop_assert_eq!(classify(&answers), SkinType::Normal);
        }

        #[test]
        fn classify_never_panics_on_partial_answers(
            pairs in proptest::collection::vec((0u8..10, 1u8..=5), 0..10),
        ) {
            let mut answers = SurveyAnswers::new();
            for (q, v) in pairs {
                answers.record(q, LikertAnswer::try_from_u8(v).unwrap()).unwrap();
            }
            let _ = classify(&answers);
        }

        #[test]
        fn winning_type_has_maximal_score_unless_normal_wins(
            pairs in proptest::collection::vec((0u8..10, 1u8..=5), 1..10),
        ) {
            let mut answers = SurveyAnswers::new();
            for (q, v) in pairs {
                answers.record(q, LikertAnswer::try_from_u8(v).unwrap()).unwrap();
            }
            let result = classify(&answers);
            if answers.score(7) < 3 {
                let result_score = match result {
                    SkinType::Dry => answers.score(0) + answers.score(8),
                    SkinType::Oily => answers.score(1) + answers.score(6),
                    SkinType::Normal => answers.score(7),
                    SkinType::Combination => answers.score(2) + answers.score(5),
                    SkinType::Sensitive => answers.score(3) + answers.score(9),
                    SkinType::DehydratedOily => answers.score(4),
                };
                let dry = answers.score(0) + answers.score(8);
                let oily = answers.score(1) + answers.score(6);
                let normal = answers.score(7);
                let combination = answers.score(2) + answers.score(5);
                let sensitive = answers.score(3) + answers.score(9);
                let dehydrated = answers.score(4);
                let max = [dry, oily, normal, combination, sensitive, dehydrated]
                    .into_iter()
                    .max()
                    .unwrap();
                prop_assert_eq!(result_score, max);
            }
        }
    }
}
