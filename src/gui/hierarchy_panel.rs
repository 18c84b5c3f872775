use eframe::egui;

use crate::{
    core::HierarchyNode,
    gui::theme::Theme,
};

/// Concept tree display: three theme headers, each with its sub-items.
/// Purely informational; nothing downstream reads from it.
pub struct HierarchyPanel;

impl HierarchyPanel {
    pub fn show(ui: &mut egui::Ui, theme: &Theme, nodes: &[HierarchyNode]) {
        if nodes.is_empty() {
            ui.weak("Concepts will appear here after extraction.");
            return;
        }

        ui.horizontal_wrapped(|ui| {
            for node in nodes {
                egui::Frame::group(ui.style()).fill(theme.card_fill()).show(ui, |ui| {
                    ui.vertical(|ui| {
                        ui.label(theme.heading(&node.title));
                        for child in &node.children {
                            ui.label(format!("• {}", child));
                        }
                    });
                });
            }
        });
    }
}
