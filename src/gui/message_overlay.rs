use std::time::{
    Duration,
    Instant,
};

use eframe::egui;

use crate::gui::theme::Theme;

const NOTICE_LIFETIME: Duration = Duration::from_secs(6);

/// Transient notice banner (mock-mode warnings and the like). Clears itself
/// after a few seconds or when a new run starts.
pub struct MessageOverlay {
    message: Option<String>,
    shown_at: Option<Instant>,
}

impl MessageOverlay {
    pub fn new() -> Self {
        Self { message: None, shown_at: None }
    }

    pub fn set_message(&mut self, message: String) {
        self.message = Some(message);
        self.shown_at = Some(Instant::now());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
        self.shown_at = None;
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) {
        if let Some(shown_at) = self.shown_at {
            if shown_at.elapsed() > NOTICE_LIFETIME {
                self.clear_message();
            }
        }

        let Some(message) = &self.message else {
            return;
        };

        egui::Area::new(egui::Id::new("notice_overlay"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_TOP, egui::Vec2::new(0.0, 12.0))
            .show(ctx, |ui| {
                egui::Frame::window(ui.style())
                    .stroke(egui::Stroke::new(1.5, theme.orange()))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new("⚠").color(theme.orange()));
                            ui.label(message);
                        });
                    });
            });

        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

impl Default for MessageOverlay {
    fn default() -> Self {
        Self::new()
    }
}
