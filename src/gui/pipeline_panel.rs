use std::collections::HashMap;

use eframe::egui;

use crate::{
    core::stages::{
        PipelineStage,
        StageStatus,
    },
    gui::theme::Theme,
};

const STEP_SPACING: f32 = 4.0;

/// Stage indicator list plus the overall progress bar. Progress is the
/// fraction of the most recently started stage, matching what the run
/// reports.
pub struct PipelinePanel;

impl PipelinePanel {
    pub fn show(
        ui: &mut egui::Ui,
        theme: &Theme,
        statuses: &HashMap<PipelineStage, StageStatus>,
        running: bool,
    ) {
        let fraction = statuses
            .iter()
            .filter(|(_, status)| **status != StageStatus::Pending)
            .map(|(stage, _)| stage.fraction())
            .fold(0.0_f32, f32::max);

        ui.add(egui::ProgressBar::new(fraction).show_percentage());
        ui.add_space(STEP_SPACING);

        for stage in PipelineStage::ALL {
            let status = statuses.get(&stage).copied().unwrap_or_default();

            let (icon, color) = match status {
                StageStatus::Pending => ("○", theme.weak_color()),
                StageStatus::Active => ("◐", theme.cyan()),
                StageStatus::Done => ("●", theme.green()),
            };

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(icon).color(color));
                let mut text = egui::RichText::new(stage.title());
                if status == StageStatus::Active {
                    text = text.color(theme.cyan()).strong();
                } else if status == StageStatus::Pending {
                    text = text.color(theme.weak_color());
                }
                ui.label(text);
                if status == StageStatus::Active {
                    ui.add(egui::Spinner::new().size(12.0));
                }
            });
            ui.add_space(STEP_SPACING);
        }

        if running {
            ui.ctx().request_repaint();
        }
    }
}
