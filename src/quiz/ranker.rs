use crate::core::{
    Difficulty,
    Question,
};

/// Normalizes difficulty and complexity score across questions from either
/// source. An already-present label is kept; a missing one defaults to
/// Medium. Pure: the input records are not mutated.
pub fn rank_questions(questions: Vec<Question>) -> Vec<Question> {
    questions
        .into_iter()
        .map(|question| {
            let difficulty = question.difficulty.unwrap_or(Difficulty::Medium);
            Question {
                difficulty: Some(difficulty),
                score: Some(difficulty.complexity_score()),
                ..question
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question_with(difficulty: Option<Difficulty>) -> Question {
        Question {
            id: 1,
            text: "Q?".to_string(),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            answer_idx: 0,
            difficulty,
            ..Question::default()
        }
    }

    #[test]
    fn existing_difficulty_is_never_overwritten() {
        let ranked = rank_questions(vec![question_with(Some(Difficulty::High))]);
        assert_eq!(ranked[0].difficulty, Some(Difficulty::High));
        assert_eq!(ranked[0].score, Some(9.5));
    }

    #[test]
    fn missing_difficulty_defaults_to_medium() {
        let ranked = rank_questions(vec![question_with(None)]);
        assert_eq!(ranked[0].difficulty, Some(Difficulty::Medium));
        assert_eq!(ranked[0].score, Some(5.5));
    }

    #[test]
    fn scores_track_difficulty_labels() {
        let ranked = rank_questions(vec![
            question_with(Some(Difficulty::Low)),
            question_with(Some(Difficulty::Medium)),
            question_with(Some(Difficulty::High)),
        ]);

        let scores: Vec<f32> = ranked.iter().map(|q| q.score.unwrap()).collect();
        assert_eq!(scores, vec![2.5, 5.5, 9.5]);
    }
}
