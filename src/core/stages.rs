use std::time::Duration;

/// The five named phases of an analysis run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    Extraction,
    Hierarchy,
    Generation,
    Ranking,
    Validation,
}

impl PipelineStage {
    pub const ALL: [PipelineStage; 5] = [
        PipelineStage::Extraction,
        PipelineStage::Hierarchy,
        PipelineStage::Generation,
        PipelineStage::Ranking,
        PipelineStage::Validation,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            PipelineStage::Extraction => "Concept Extraction",
            PipelineStage::Hierarchy => "Hierarchical Organization",
            PipelineStage::Generation => "Quiz Generation",
            PipelineStage::Ranking => "Difficulty Ranking",
            PipelineStage::Validation => "Logic Validation",
        }
    }

    /// Overall progress fraction reported once this stage has started.
    pub fn fraction(&self) -> f32 {
        match self {
            PipelineStage::Extraction => 0.2,
            PipelineStage::Hierarchy => 0.4,
            PipelineStage::Generation => 0.6,
            PipelineStage::Ranking => 0.8,
            PipelineStage::Validation => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StageStatus {
    #[default]
    Pending,
    Active,
    Done,
}

/// Inter-stage pauses that animate the pipeline panel. Purely presentational:
/// the run computes nothing during these waits.
#[derive(Debug, Clone, Copy)]
pub struct PipelineTiming {
    pub extraction: Duration,
    pub hierarchy: Duration,
    pub ranking: Duration,
    pub validation: Duration,
    pub settle: Duration,
}

impl PipelineTiming {
    pub fn animated() -> Self {
        Self {
            extraction: Duration::from_millis(2000),
            hierarchy: Duration::from_millis(1500),
            ranking: Duration::from_millis(1000),
            validation: Duration::from_millis(1500),
            settle: Duration::from_millis(500),
        }
    }

    pub fn immediate() -> Self {
        Self {
            extraction: Duration::ZERO,
            hierarchy: Duration::ZERO,
            ranking: Duration::ZERO,
            validation: Duration::ZERO,
            settle: Duration::ZERO,
        }
    }
}
