pub mod errors;
pub mod http;
pub mod models;
pub mod pipeline;
pub mod stages;
pub mod tasks;
pub mod utils;

pub use errors::QuizMineError;
pub use models::{
    Difficulty,
    HierarchyNode,
    Question,
};
