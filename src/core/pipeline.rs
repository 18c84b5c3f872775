use reqwest::Client;
use tokio::time::sleep;

use crate::{
    analysis::{
        extract_key_concepts,
        organize_hierarchy,
    },
    core::{
        http::request_quiz,
        stages::{
            PipelineStage,
            PipelineTiming,
            StageStatus,
        },
        HierarchyNode,
        Question,
        QuizMineError,
    },
    quiz::{
        generate_questions,
        rank_questions,
        validate_questions,
    },
};

/// Progress feed for one run. Stage transitions animate the pipeline panel;
/// concepts and hierarchy are published as soon as their stages finish so the
/// UI fills in while later stages are still running.
#[derive(Debug, Clone)]
pub enum PipelineEvent {
    Stage(PipelineStage, StageStatus),
    Concepts(Vec<String>),
    Hierarchy(Vec<HierarchyNode>),
    MockNotice(String),
}

/// Runs the full analysis pipeline over `text` and returns the finished quiz.
///
/// Generation asks the quiz service first; an unreachable service, a decode
/// failure, or an empty/malformed question list falls back to the local
/// generator. A 401 aborts the whole run. All waits in `timing` are pure
/// animation pauses.
pub async fn run_pipeline(
    text: &str,
    base_url: &str,
    timing: PipelineTiming,
    report: &(dyn Fn(PipelineEvent) + Send + Sync),
) -> Result<Vec<Question>, QuizMineError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(QuizMineError::EmptyInput);
    }

    let stage = |s: PipelineStage, status: StageStatus| {
        report(PipelineEvent::Stage(s, status));
    };

    stage(PipelineStage::Extraction, StageStatus::Active);
    let concepts = extract_key_concepts(text);
    println!("Extracted {} key concepts", concepts.len());
    report(PipelineEvent::Concepts(concepts.clone()));
    sleep(timing.extraction).await;
    stage(PipelineStage::Extraction, StageStatus::Done);

    stage(PipelineStage::Hierarchy, StageStatus::Active);
    let hierarchy = organize_hierarchy(&concepts);
    report(PipelineEvent::Hierarchy(hierarchy));
    sleep(timing.hierarchy).await;
    stage(PipelineStage::Hierarchy, StageStatus::Done);

    stage(PipelineStage::Generation, StageStatus::Active);
    let questions = generation_step(text, base_url, &concepts, report).await?;
    stage(PipelineStage::Generation, StageStatus::Done);

    stage(PipelineStage::Ranking, StageStatus::Active);
    sleep(timing.ranking).await;
    let questions = rank_questions(questions);
    stage(PipelineStage::Ranking, StageStatus::Done);

    stage(PipelineStage::Validation, StageStatus::Active);
    sleep(timing.validation).await;
    let questions = validate_questions(questions);
    stage(PipelineStage::Validation, StageStatus::Done);

    sleep(timing.settle).await;
    println!("Pipeline finished with {} questions", questions.len());

    Ok(questions)
}

async fn generation_step(
    text: &str,
    base_url: &str,
    concepts: &[String],
    report: &(dyn Fn(PipelineEvent) + Send + Sync),
) -> Result<Vec<Question>, QuizMineError> {
    match request_quiz(&Client::new(), base_url, text).await {
        Ok(service_quiz) => {
            if let Some(notice) = service_quiz.mock_notice {
                eprintln!("Quiz service mock mode: {}", notice);
                report(PipelineEvent::MockNotice(notice));
            }

            let usable: Vec<Question> =
                service_quiz.questions.into_iter().filter(|q| q.is_well_formed()).collect();

            if usable.is_empty() {
                println!("Service returned no usable questions, using local generator");
                Ok(generate_questions(concepts, &mut rand::rng()))
            } else {
                Ok(usable)
            }
        }
        Err(QuizMineError::AuthRequired(login_url)) => {
            Err(QuizMineError::AuthRequired(login_url))
        }
        Err(e) => {
            eprintln!("Quiz service unavailable ({}), using local generator", e);
            Ok(generate_questions(concepts, &mut rand::rng()))
        }
    }
}
