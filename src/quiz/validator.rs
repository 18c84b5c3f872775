use crate::core::{
    Difficulty,
    Question,
};

/// Marks every question validated and makes sure each carries a validation
/// note. Notes from the service or the fallback generator are preserved;
/// otherwise one is synthesized from the difficulty label. Pure.
pub fn validate_questions(questions: Vec<Question>) -> Vec<Question> {
    questions
        .into_iter()
        .map(|question| {
            let note = question.validation_note.clone().unwrap_or_else(|| {
                let difficulty = question.difficulty.unwrap_or(Difficulty::Medium);
                format!(
                    "Agent confirmed alignment: Question depth matches '{}' cognitive category.",
                    difficulty.label()
                )
            });

            Question { validated: true, validation_note: Some(note), ..question }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_note_is_preserved() {
        let question = Question {
            validation_note: Some("Service note".to_string()),
            ..Question::default()
        };

        let validated = validate_questions(vec![question]);
        assert!(validated[0].validated);
        assert_eq!(validated[0].validation_note.as_deref(), Some("Service note"));
    }

    #[test]
    fn missing_note_is_synthesized_from_difficulty() {
        let question = Question { difficulty: Some(Difficulty::High), ..Question::default() };

        let validated = validate_questions(vec![question]);
        assert!(validated[0].validated);
        assert!(validated[0].validation_note.as_ref().unwrap().contains("'High'"));
    }

    #[test]
    fn missing_note_and_difficulty_fall_back_to_medium() {
        let validated = validate_questions(vec![Question::default()]);
        assert!(validated[0].validation_note.as_ref().unwrap().contains("'Medium'"));
    }
}
