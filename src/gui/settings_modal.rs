use eframe::egui;
use serde::{
    Deserialize,
    Serialize,
};

pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:5000";

#[derive(Clone, Serialize, Deserialize)]
pub struct SettingsData {
    pub quiz_service_url: String,
    pub animate_pipeline: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { quiz_service_url: DEFAULT_SERVICE_URL.to_string(), animate_pipeline: true }
    }
}

pub struct SettingsModal {
    open: bool,
    draft: SettingsData,
}

impl SettingsModal {
    pub fn new() -> Self {
        Self { open: false, draft: SettingsData::default() }
    }

    pub fn open(&mut self, current: &SettingsData) {
        self.draft = current.clone();
        self.open = true;
    }

    /// Returns the new settings when the user saves.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<SettingsData> {
        if !self.open {
            return None;
        }

        let mut saved = None;

        let modal = egui::Modal::new(egui::Id::new("settings_modal")).show(ctx, |ui| {
            ui.set_width(380.0);
            ui.heading("Settings");
            ui.add_space(10.0);

            ui.label("Quiz service URL");
            ui.text_edit_singleline(&mut self.draft.quiz_service_url);
            ui.weak("The service answers POST {url}/api/generate.");

            ui.add_space(8.0);
            ui.checkbox(&mut self.draft.animate_pipeline, "Animate pipeline stages");

            ui.add_space(14.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Save").clicked() {
                    self.draft.quiz_service_url =
                        self.draft.quiz_service_url.trim().trim_end_matches('/').to_string();
                    if self.draft.quiz_service_url.is_empty() {
                        self.draft.quiz_service_url = DEFAULT_SERVICE_URL.to_string();
                    }
                    saved = Some(self.draft.clone());
                    ui.close();
                }
                if ui.button("Cancel").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        saved
    }
}

impl Default for SettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
