use crate::domain::language::CatalogError;
use crate::domain::speech::SynthesisError;
use crate::domain::translation::TranslationServiceError;
use crate::domain::wordcloud::RenderError;
use crate::error::AppError;
use serde::Serialize;

/// Pipeline stage a failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineStage {
    Validation,
    Language,
    Translation,
    Synthesis,
    Rendering,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PipelineStage::Validation => "validation",
            PipelineStage::Language => "language",
            PipelineStage::Translation => "translation",
            PipelineStage::Synthesis => "synthesis",
            PipelineStage::Rendering => "rendering",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error(transparent)]
    Language(#[from] CatalogError),
    #[error(transparent)]
    Translation(#[from] TranslationServiceError),
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl PipelineError {
    pub fn stage(&self) -> PipelineStage {
        match self {
            PipelineError::Invalid(_) => PipelineStage::Validation,
            PipelineError::Language(_) => PipelineStage::Language,
            PipelineError::Translation(_) => PipelineStage::Translation,
            PipelineError::Synthesis(_) => PipelineStage::Synthesis,
            PipelineError::Render(_) => PipelineStage::Rendering,
        }
    }
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        let stage = err.stage();
        let inner = match err {
            PipelineError::Invalid(msg) => AppError::BadRequest(msg),
            PipelineError::Language(e) => AppError::from(e),
            PipelineError::Translation(e) => AppError::from(e),
            PipelineError::Synthesis(e) => AppError::from(e),
            PipelineError::Render(e) => AppError::from(e),
        };
        AppError::Stage {
            stage,
            source: Box::new(inner),
        }
    }
}
