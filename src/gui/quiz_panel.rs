use eframe::egui;

use crate::{
    core::Question,
    gui::theme::Theme,
    quiz::{
        view::{
            card_view,
            OptionMark,
        },
        AnswerSheet,
    },
};

const CARD_SPACING: f32 = 10.0;

/// What the user did in the quiz area this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    None,
    Select { question_id: u32, option_idx: usize },
    Grade,
}

/// Question cards, the submit action, and the score card after grading.
/// All quiz logic lives in `quiz::view` and `quiz::scoring`; this only draws
/// view models and reports clicks.
pub struct QuizPanel {
    confirm_open: bool,
}

impl QuizPanel {
    pub fn new() -> Self {
        Self { confirm_open: false }
    }

    pub fn reset(&mut self) {
        self.confirm_open = false;
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        theme: &Theme,
        questions: &[Question],
        answers: &AnswerSheet,
        revealed: bool,
        score: Option<usize>,
    ) -> QuizAction {
        let mut action = QuizAction::None;

        for question in questions {
            let view = card_view(question, answers.selection(question.id), revealed);

            egui::Frame::group(ui.style()).fill(theme.card_fill()).show(ui, |ui| {
                ui.set_width(ui.available_width());

                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&view.heading).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(view.difficulty_label)
                                .color(theme.difficulty_color(view.difficulty_label))
                                .small(),
                        );
                        if let Some(score_label) = &view.score_label {
                            ui.label(
                                egui::RichText::new(format!("complexity {}", score_label))
                                    .color(theme.weak_color())
                                    .small(),
                            );
                        }
                    });
                });

                ui.add_space(4.0);

                for (option_idx, option) in view.options.iter().enumerate() {
                    let text = format!("{}. {}", option.letter, option.text);
                    let rich = match option.mark {
                        OptionMark::Correct => egui::RichText::new(text).color(theme.green()),
                        OptionMark::Incorrect => egui::RichText::new(text).color(theme.red()),
                        _ => egui::RichText::new(text),
                    };

                    let response =
                        ui.selectable_label(option.mark == OptionMark::Selected, rich);

                    // Selections lock once the quiz is graded.
                    if response.clicked() && !revealed {
                        action = QuizAction::Select {
                            question_id: question.id,
                            option_idx,
                        };
                    }
                }

                if revealed {
                    ui.add_space(4.0);
                    if let Some(note) = &view.validation_note {
                        ui.label(egui::RichText::new(note).color(theme.weak_color()).italics());
                    }
                    ui.label(
                        egui::RichText::new(format!("Correct Answer: {}", view.answer_letter))
                            .color(theme.green())
                            .strong(),
                    );
                }
            });

            ui.add_space(CARD_SPACING);
        }

        if questions.is_empty() {
            return action;
        }

        match score {
            Some(score) => {
                egui::Frame::group(ui.style()).fill(theme.card_fill()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        ui.label(theme.heading("Quiz Completed!"));
                        ui.label(
                            egui::RichText::new(format!(
                                "Your Score: {} / {}",
                                score,
                                questions.len()
                            ))
                            .size(20.0),
                        );
                        ui.weak("Run a new extraction to try another text.");
                    });
                });
            }
            None => {
                if ui.button("Submit My Answers").clicked() {
                    if answers.answered_count() < questions.len() {
                        self.confirm_open = true;
                    } else {
                        action = QuizAction::Grade;
                    }
                }
            }
        }

        if self.confirm_open {
            if let Some(confirmed) =
                self.show_confirm(ui.ctx(), answers.answered_count(), questions.len())
            {
                self.confirm_open = false;
                if confirmed {
                    action = QuizAction::Grade;
                }
            }
        }

        action
    }

    fn show_confirm(&self, ctx: &egui::Context, answered: usize, total: usize) -> Option<bool> {
        let mut outcome = None;

        let modal = egui::Modal::new(egui::Id::new("submit_confirm_modal")).show(ctx, |ui| {
            ui.set_width(340.0);
            ui.label(
                egui::RichText::new(format!(
                    "You've only answered {} out of {} questions. Submit anyway?",
                    answered, total
                ))
                .size(15.0),
            );
            ui.add_space(12.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Submit").clicked() {
                    outcome = Some(true);
                    ui.close();
                }
                if ui.button("Keep Answering").clicked() {
                    outcome = Some(false);
                    ui.close();
                }
            });
        });

        if modal.should_close() && outcome.is_none() {
            // Closing the dialog any other way counts as declining.
            outcome = Some(false);
        }

        outcome
    }
}

impl Default for QuizPanel {
    fn default() -> Self {
        Self::new()
    }
}
