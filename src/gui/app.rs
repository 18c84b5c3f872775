use std::collections::HashMap;

use eframe::egui;

use super::{
    error_modal::ErrorModal,
    hierarchy_panel::HierarchyPanel,
    message_overlay::MessageOverlay,
    pipeline_panel::PipelinePanel,
    quiz_panel::{
        QuizAction,
        QuizPanel,
    },
    settings_modal::{
        SettingsData,
        SettingsModal,
    },
    theme::{
        set_theme,
        Theme,
    },
};
use crate::{
    core::{
        pipeline::PipelineEvent,
        stages::{
            PipelineStage,
            PipelineTiming,
            StageStatus,
        },
        tasks::{
            TaskManager,
            TaskResult,
        },
        HierarchyNode,
        Question,
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
    quiz::{
        score_answers,
        AnswerSheet,
    },
};

const SETTINGS_FILE: &str = "settings.json";

pub struct QuizMineApp {
    source_text: String,
    running: bool,
    stage_statuses: HashMap<PipelineStage, StageStatus>,
    hierarchy: Vec<HierarchyNode>,
    questions: Vec<Question>,
    answers: AnswerSheet,
    revealed: bool,
    score: Option<usize>,

    settings_data: SettingsData,
    settings_modal: SettingsModal,
    error_modal: ErrorModal,
    message_overlay: MessageOverlay,
    quiz_panel: QuizPanel,
    theme: Theme,
    task_manager: TaskManager,
}

impl QuizMineApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let theme = Theme::dracula();
        set_theme(&cc.egui_ctx, theme.clone());
        cc.egui_ctx.set_zoom_factor(cc.egui_ctx.zoom_factor() + 0.2);

        Self {
            source_text: String::new(),
            running: false,
            stage_statuses: HashMap::new(),
            hierarchy: Vec::new(),
            questions: Vec::new(),
            answers: AnswerSheet::new(),
            revealed: false,
            score: None,
            settings_data: load_json_or_default::<SettingsData>(SETTINGS_FILE),
            settings_modal: SettingsModal::new(),
            error_modal: ErrorModal::new(),
            message_overlay: MessageOverlay::new(),
            quiz_panel: QuizPanel::new(),
            theme,
            task_manager: TaskManager::new(),
        }
    }

    fn start_run(&mut self) {
        if self.source_text.trim().is_empty() {
            self.error_modal.show_error(
                "No Text Provided",
                "Please provide some educational text first!",
                None::<String>,
            );
            return;
        }

        // Everything from the previous run is replaced wholesale.
        self.running = true;
        self.stage_statuses.clear();
        self.hierarchy.clear();
        self.questions.clear();
        self.answers.clear();
        self.revealed = false;
        self.score = None;
        self.quiz_panel.reset();
        self.message_overlay.clear_message();

        let timing = if self.settings_data.animate_pipeline {
            PipelineTiming::animated()
        } else {
            PipelineTiming::immediate()
        };

        self.task_manager.start_run(
            self.source_text.clone(),
            self.settings_data.quiz_service_url.clone(),
            timing,
        );
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::Pipeline(PipelineEvent::Stage(stage, status)) => {
                self.stage_statuses.insert(stage, status);
            }
            TaskResult::Pipeline(PipelineEvent::Concepts(concepts)) => {
                println!("Run extracted {} concepts", concepts.len());
            }
            TaskResult::Pipeline(PipelineEvent::Hierarchy(nodes)) => {
                self.hierarchy = nodes;
            }
            TaskResult::Pipeline(PipelineEvent::MockNotice(notice)) => {
                self.message_overlay
                    .set_message(format!("Mock mode: {}", notice));
            }
            TaskResult::RunFinished(outcome) => {
                // Terminal on every path, so the trigger always comes back.
                self.running = false;

                match outcome {
                    Ok(questions) => {
                        self.questions = questions;
                    }
                    Err(error_msg) => {
                        eprintln!("Run failed: {}", error_msg);
                        if error_msg.contains("Session expired") {
                            self.error_modal.show_error(
                                "Authentication Required",
                                error_msg.clone(),
                                None::<String>,
                            );
                        } else {
                            self.error_modal.show_error(
                                "Extraction Error",
                                "An error occurred during extraction.",
                                Some(error_msg),
                            );
                        }
                    }
                }
            }
        }
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, SETTINGS_FILE) {
            eprintln!("Failed to save settings: {}", e);
        }
    }
}

impl eframe::App for QuizMineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.theme.heading("QuizMine"));
                ui.weak("turn any text into a quiz");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Settings").clicked() {
                        self.settings_modal.open(&self.settings_data);
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                ui.label(self.theme.bold("Source Text"));
                ui.add(
                    egui::TextEdit::multiline(&mut self.source_text)
                        .desired_width(f32::INFINITY)
                        .desired_rows(6)
                        .hint_text("Paste educational text here..."),
                );

                ui.add_space(6.0);
                ui.add_enabled_ui(!self.running, |ui| {
                    if ui.button("Generate Quiz").clicked() {
                        self.start_run();
                    }
                });

                if self.running || !self.stage_statuses.is_empty() {
                    ui.add_space(10.0);
                    ui.separator();
                    ui.label(self.theme.bold("Analysis Pipeline"));
                    PipelinePanel::show(ui, &self.theme, &self.stage_statuses, self.running);
                }

                if !self.hierarchy.is_empty() {
                    ui.add_space(10.0);
                    ui.separator();
                    ui.label(self.theme.bold("Concept Hierarchy"));
                    HierarchyPanel::show(ui, &self.theme, &self.hierarchy);
                }

                if !self.questions.is_empty() && !self.running {
                    ui.add_space(10.0);
                    ui.separator();
                    ui.label(self.theme.bold("Quiz"));
                    ui.add_space(6.0);

                    let action = self.quiz_panel.show(
                        ui,
                        &self.theme,
                        &self.questions,
                        &self.answers,
                        self.revealed,
                        self.score,
                    );

                    match action {
                        QuizAction::Select { question_id, option_idx } => {
                            self.answers.select(question_id, option_idx);
                        }
                        QuizAction::Grade => {
                            self.score = Some(score_answers(&self.questions, &self.answers));
                            self.revealed = true;
                        }
                        QuizAction::None => {}
                    }
                }
            });
        });

        self.message_overlay.show(ctx, &self.theme);
        self.error_modal.show(ctx, &self.theme);

        if let Some(settings) = self.settings_modal.show(ctx) {
            self.settings_data = settings;
            self.save_settings();
        }
    }
}
