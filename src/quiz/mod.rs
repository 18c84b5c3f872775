pub mod generator;
pub mod ranker;
pub mod scoring;
pub mod templates;
pub mod validator;
pub mod view;

pub use generator::generate_questions;
pub use ranker::rank_questions;
pub use scoring::{
    score_answers,
    AnswerSheet,
};
pub use validator::validate_questions;
