pub mod error;
pub mod service;

pub use error::{PipelineError, PipelineStage};
pub use service::{PipelineService, PipelineServiceApi};

use crate::domain::speech::SpeechResult;
use crate::domain::translation::TranslationResult;
use crate::domain::wordcloud::VisualizationResult;

/// Output of one complete pipeline run; never partially filled
#[derive(Debug)]
pub struct PipelineResult {
    pub language_code: String,
    pub translation: TranslationResult,
    pub speech: SpeechResult,
    pub visualization: VisualizationResult,
}
