/// Semantic angle a question stem takes on its concept. Two of these
/// (`Comparison` and `Application`) carry fixed distractor sets in the option
/// generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionKind {
    Concept,
    Comparison,
    Application,
    Challenge,
    Structure,
    Consequence,
    Reasoning,
    Contradiction,
    Future,
    Optimization,
    Theory,
    Identification,
}

impl QuestionKind {
    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::Concept => "concept",
            QuestionKind::Comparison => "comparison",
            QuestionKind::Application => "application",
            QuestionKind::Challenge => "challenge",
            QuestionKind::Structure => "structure",
            QuestionKind::Consequence => "consequence",
            QuestionKind::Reasoning => "reasoning",
            QuestionKind::Contradiction => "contradiction",
            QuestionKind::Future => "future",
            QuestionKind::Optimization => "optimization",
            QuestionKind::Theory => "theory",
            QuestionKind::Identification => "identification",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct QuestionTemplate {
    pub stem: &'static str,
    pub kind: QuestionKind,
}

impl QuestionTemplate {
    /// Fills the `{c}` slot with the (already title-cased) concept.
    pub fn fill(&self, concept: &str) -> String {
        self.stem.replace("{c}", concept)
    }
}

pub const TEMPLATE_POOL: [QuestionTemplate; 12] = [
    QuestionTemplate {
        stem: "What is the primary significance of {c} in this context?",
        kind: QuestionKind::Concept,
    },
    QuestionTemplate {
        stem: "How does {c} distinctively differ from other related concepts?",
        kind: QuestionKind::Comparison,
    },
    QuestionTemplate {
        stem: "In a real-world application, which scenario best demonstrates {c}?",
        kind: QuestionKind::Application,
    },
    QuestionTemplate {
        stem: "Which of the following creates the biggest challenge when implementing {c}?",
        kind: QuestionKind::Challenge,
    },
    QuestionTemplate {
        stem: "Structurally, {c} is most dependent on which underlying principle?",
        kind: QuestionKind::Structure,
    },
    QuestionTemplate {
        stem: "What is the immediate consequence of removing {c} from the system?",
        kind: QuestionKind::Consequence,
    },
    QuestionTemplate {
        stem: "Experts consider {c} to be critical because:",
        kind: QuestionKind::Reasoning,
    },
    QuestionTemplate {
        stem: "Which statement essentially contradicts the core philosophy of {c}?",
        kind: QuestionKind::Contradiction,
    },
    QuestionTemplate {
        stem: "The evolution of {c} suggests a trend towards:",
        kind: QuestionKind::Future,
    },
    QuestionTemplate {
        stem: "Functionally, how does {c} optimize the overall process?",
        kind: QuestionKind::Optimization,
    },
    QuestionTemplate {
        stem: "What is the theoretical boundary of {c}?",
        kind: QuestionKind::Theory,
    },
    QuestionTemplate {
        stem: "Identify the false statement regarding {c}.",
        kind: QuestionKind::Identification,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_has_at_least_ten_templates() {
        assert!(TEMPLATE_POOL.len() >= 10);
    }

    #[test]
    fn fill_replaces_concept_slot() {
        let template = TEMPLATE_POOL[0];
        let text = template.fill("Photosynthesis");
        assert!(text.contains("Photosynthesis"));
        assert!(!text.contains("{c}"));
    }
}
