use serde::{
    Deserialize,
    Serialize,
};

pub const OPTION_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Low,
    Medium,
    High,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Low => "Low",
            Difficulty::Medium => "Medium",
            Difficulty::High => "High",
        }
    }

    /// Positional difficulty for the fallback generator: the first three
    /// questions are easy, the middle four medium, the last three hard.
    pub fn for_position(index: usize) -> Self {
        match index {
            0..=2 => Difficulty::Low,
            3..=6 => Difficulty::Medium,
            _ => Difficulty::High,
        }
    }

    pub fn complexity_score(&self) -> f32 {
        match self {
            Difficulty::High => 9.5,
            Difficulty::Medium => 5.5,
            Difficulty::Low => 2.5,
        }
    }
}

/// One multiple-choice question. Also the wire shape of the quiz service
/// response, so unknown or missing fields have to be tolerated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: Vec<String>,
    pub answer_idx: usize,
    pub difficulty: Option<Difficulty>,
    pub score: Option<f32>,
    pub validation_note: Option<String>,
    pub validated: bool,
}

impl Default for Question {
    fn default() -> Self {
        Question {
            id: 0,
            text: String::new(),
            options: Vec::new(),
            answer_idx: 0,
            difficulty: None,
            score: None,
            validation_note: None,
            validated: false,
        }
    }
}

impl Question {
    /// A question the app can actually render: four options and an answer
    /// index that points at one of them.
    pub fn is_well_formed(&self) -> bool {
        self.options.len() == OPTION_COUNT && self.answer_idx < self.options.len()
    }
}

/// Display-only concept tree node: a theme title with up to four sub-items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyNode {
    pub title: String,
    pub children: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_difficulty_mapping_is_exact() {
        let expected = [
            Difficulty::Low,
            Difficulty::Low,
            Difficulty::Low,
            Difficulty::Medium,
            Difficulty::Medium,
            Difficulty::Medium,
            Difficulty::Medium,
            Difficulty::High,
            Difficulty::High,
            Difficulty::High,
        ];

        for (index, difficulty) in expected.iter().enumerate() {
            assert_eq!(Difficulty::for_position(index), *difficulty);
        }
    }

    #[test]
    fn question_deserializes_from_partial_service_payload() {
        let json = r#"{
            "id": 3,
            "text": "What is the primary significance of Photosynthesis?",
            "options": ["a", "b", "c", "d"],
            "answerIdx": 2
        }"#;

        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.id, 3);
        assert_eq!(question.answer_idx, 2);
        assert!(question.difficulty.is_none());
        assert!(question.validation_note.is_none());
        assert!(!question.validated);
        assert!(question.is_well_formed());
    }

    #[test]
    fn malformed_question_is_detected() {
        let mut question = Question {
            id: 1,
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            answer_idx: 3,
            ..Question::default()
        };
        assert!(question.is_well_formed());

        question.answer_idx = 4;
        assert!(!question.is_well_formed());

        question.answer_idx = 0;
        question.options.pop();
        assert!(!question.is_well_formed());
    }
}
