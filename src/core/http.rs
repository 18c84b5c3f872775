use reqwest::{
    Client,
    StatusCode,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::core::{
    Question,
    QuizMineError,
};

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateResponse {
    pub questions: Vec<Question>,
    pub mock: bool,
    pub message: Option<String>,
}

/// What came back from the quiz service, after status handling.
#[derive(Debug)]
pub struct ServiceQuiz {
    pub questions: Vec<Question>,
    /// Set when the service reports it is running without a real model; the
    /// questions (if any) are still usable.
    pub mock_notice: Option<String>,
}

/// Requests a generated quiz for `text` from `{base_url}/api/generate`.
///
/// A 401 means the session is gone and the run must be abandoned, so it maps
/// to `AuthRequired` rather than falling back to local generation. Transport
/// and decode failures bubble up for the caller to decide.
pub async fn request_quiz(
    client: &Client,
    base_url: &str,
    text: &str,
) -> Result<ServiceQuiz, QuizMineError> {
    let url = format!("{}/api/generate", base_url.trim_end_matches('/'));

    let response = client.post(&url).json(&GenerateRequest { text }).send().await?;

    if response.status() == StatusCode::UNAUTHORIZED {
        return Err(QuizMineError::AuthRequired(format!(
            "{}/login",
            base_url.trim_end_matches('/')
        )));
    }

    let body: GenerateResponse = response.json().await?;

    let mock_notice = if body.mock {
        Some(
            body.message
                .unwrap_or_else(|| "Quiz service is running in mock mode.".to_string()),
        )
    } else {
        None
    };

    Ok(ServiceQuiz { questions: body.questions, mock_notice })
}
