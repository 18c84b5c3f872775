use crate::core::Question;

const OPTION_LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

/// How one option should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Plain,
    Selected,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone)]
pub struct OptionView {
    pub letter: char,
    pub text: String,
    pub mark: OptionMark,
}

/// Everything a question card needs, precomputed so the rendering code does
/// no quiz logic of its own.
#[derive(Debug, Clone)]
pub struct QuestionCardView {
    pub id: u32,
    pub heading: String,
    pub difficulty_label: &'static str,
    pub score_label: Option<String>,
    pub validation_note: Option<String>,
    pub answer_letter: char,
    pub options: Vec<OptionView>,
}

/// Maps a question plus interaction state to its card view.
///
/// Before reveal only the current selection is marked. After reveal the
/// correct option is always marked `Correct`, and a selected-but-wrong option
/// `Incorrect`; a selection matching the key collapses into the `Correct`
/// mark.
pub fn card_view(question: &Question, selection: Option<usize>, revealed: bool) -> QuestionCardView {
    let options = question
        .options
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let mark = if revealed {
                if i == question.answer_idx {
                    OptionMark::Correct
                } else if selection == Some(i) {
                    OptionMark::Incorrect
                } else {
                    OptionMark::Plain
                }
            } else if selection == Some(i) {
                OptionMark::Selected
            } else {
                OptionMark::Plain
            };

            OptionView {
                letter: OPTION_LETTERS.get(i).copied().unwrap_or('?'),
                text: text.clone(),
                mark,
            }
        })
        .collect();

    QuestionCardView {
        id: question.id,
        heading: format!("Q{}: {}", question.id, question.text),
        difficulty_label: question
            .difficulty
            .map(|d| d.label())
            .unwrap_or("Medium"),
        score_label: question.score.map(|s| format!("{:.1}", s)),
        validation_note: question.validation_note.clone(),
        answer_letter: OPTION_LETTERS.get(question.answer_idx).copied().unwrap_or('?'),
        options,
    }
}
