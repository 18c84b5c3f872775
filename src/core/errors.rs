use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizMineError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Session expired. Log in at {0}")]
    AuthRequired(String),

    #[error("Source text is empty")]
    EmptyInput,

    #[error("QuizMineError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for QuizMineError {
    fn from(error: std::io::Error) -> Self {
        QuizMineError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for QuizMineError {
    fn from(error: reqwest::Error) -> Self {
        QuizMineError::Reqwest(Box::new(error))
    }
}
