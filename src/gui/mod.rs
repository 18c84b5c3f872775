pub mod app;
pub mod error_modal;
pub mod hierarchy_panel;
pub mod message_overlay;
pub mod pipeline_panel;
pub mod quiz_panel;
pub mod settings_modal;
pub mod theme;

pub use app::QuizMineApp;
