use std::collections::HashMap;

use crate::core::Question;

/// Recorded selections for the current quiz, keyed by question id.
/// Owned by the app state and rebuilt for every run, so it never carries ids
/// from a previous quiz.
#[derive(Debug, Clone, Default)]
pub struct AnswerSheet {
    selections: HashMap<u32, usize>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-select: a later choice for the same question replaces the
    /// earlier one.
    pub fn select(&mut self, question_id: u32, option_idx: usize) {
        self.selections.insert(question_id, option_idx);
    }

    pub fn selection(&self, question_id: u32) -> Option<usize> {
        self.selections.get(&question_id).copied()
    }

    pub fn answered_count(&self) -> usize {
        self.selections.len()
    }

    pub fn clear(&mut self) {
        self.selections.clear();
    }
}

/// Number of questions whose recorded selection matches the answer index.
/// Unanswered questions simply score zero.
pub fn score_answers(questions: &[Question], answers: &AnswerSheet) -> usize {
    questions
        .iter()
        .filter(|question| answers.selection(question.id) == Some(question.answer_idx))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz() -> Vec<Question> {
        (1..=4)
            .map(|id| Question {
                id,
                text: format!("Q{}?", id),
                options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                answer_idx: (id as usize) % 4,
                ..Question::default()
            })
            .collect()
    }

    #[test]
    fn empty_sheet_scores_zero() {
        let questions = quiz();
        let answers = AnswerSheet::new();
        assert_eq!(score_answers(&questions, &answers), 0);
    }

    #[test]
    fn perfect_sheet_scores_total() {
        let questions = quiz();
        let mut answers = AnswerSheet::new();
        for question in &questions {
            answers.select(question.id, question.answer_idx);
        }
        assert_eq!(score_answers(&questions, &answers), questions.len());
    }

    #[test]
    fn wrong_answers_do_not_count() {
        let questions = quiz();
        let mut answers = AnswerSheet::new();
        answers.select(questions[0].id, questions[0].answer_idx);
        answers.select(questions[1].id, (questions[1].answer_idx + 1) % 4);
        assert_eq!(score_answers(&questions, &answers), 1);
    }

    #[test]
    fn reselection_is_last_write_wins() {
        let mut answers = AnswerSheet::new();
        answers.select(7, 2);
        answers.select(7, 0);

        assert_eq!(answers.selection(7), Some(0));
        assert_eq!(answers.answered_count(), 1);
    }

    #[test]
    fn clear_empties_the_sheet() {
        let mut answers = AnswerSheet::new();
        answers.select(1, 1);
        answers.clear();
        assert_eq!(answers.answered_count(), 0);
        assert_eq!(answers.selection(1), None);
    }
}
