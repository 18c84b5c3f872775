use eframe::egui;
use quizmine::gui::QuizMineApp;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([920.0, 760.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("QuizMine"),
        ..Default::default()
    };

    eframe::run_native("QuizMine", options, Box::new(|cc| Ok(Box::new(QuizMineApp::new(cc)))))
}
