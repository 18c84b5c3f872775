use crate::core::{
    pipeline::PipelineEvent,
    Question,
};

/// Messages the background worker sends back to the GUI thread.
/// `RunFinished` is the terminal message of every run, success or not; the
/// app keeps the trigger control disabled until it arrives.
#[derive(Debug, Clone)]
pub enum TaskResult {
    Pipeline(PipelineEvent),
    RunFinished(Result<Vec<Question>, String>),
}
