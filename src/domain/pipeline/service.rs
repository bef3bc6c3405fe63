use super::error::PipelineError;
use super::PipelineResult;
use crate::domain::language::LanguageCatalog;
use crate::domain::speech::{GenderPreference, SpeechRequest, SpeechServiceApi};
use crate::domain::translation::{TranslationRequest, TranslationServiceApi};
use crate::domain::wordcloud::{VisualizationRequest, WordCloudServiceApi};
use async_trait::async_trait;
use std::sync::Arc;

/// Runs translate → {synthesize, render} for one input
pub struct PipelineService {
    catalog: Arc<LanguageCatalog>,
    translation_service: Arc<dyn TranslationServiceApi>,
    speech_service: Arc<dyn SpeechServiceApi>,
    wordcloud_service: Arc<dyn WordCloudServiceApi>,
}

impl PipelineService {
    pub fn new(
        catalog: Arc<LanguageCatalog>,
        translation_service: Arc<dyn TranslationServiceApi>,
        speech_service: Arc<dyn SpeechServiceApi>,
        wordcloud_service: Arc<dyn WordCloudServiceApi>,
    ) -> Self {
        Self {
            catalog,
            translation_service,
            speech_service,
            wordcloud_service,
        }
    }
}

#[async_trait]
pub trait PipelineServiceApi: Send + Sync {
    /// Translate text, then synthesize and visualize the translation
    ///
    /// This operation:
    /// - Rejects blank input before any stage runs
    /// - Resolves the language name through the catalog
    /// - Translates; a failure here stops the run
    /// - Synthesizes speech and renders the word cloud concurrently
    ///
    /// Either every result is returned or the first stage error is.
    async fn run(
        &self,
        source_text: &str,
        language_name: &str,
        gender_preference: GenderPreference,
    ) -> Result<PipelineResult, PipelineError>;
}

#[async_trait]
impl PipelineServiceApi for PipelineService {
    async fn run(
        &self,
        source_text: &str,
        language_name: &str,
        gender_preference: GenderPreference,
    ) -> Result<PipelineResult, PipelineError> {
        if source_text.trim().is_empty() {
            return Err(PipelineError::Invalid("Text cannot be empty".to_string()));
        }

        let start_time = std::time::Instant::now();

        // 1. Resolve the target language
        let language_code = self.catalog.resolve(language_name)?.to_string();

        tracing::info!(
            language = language_name,
            language_code = %language_code,
            gender_preference = %gender_preference,
            text_length = source_text.len(),
            "Pipeline run started"
        );

        // 2. Translate; both later stages need the translated text
        let translation = self
            .translation_service
            .translate(TranslationRequest {
                source_text: source_text.to_string(),
                target_code: language_code.clone(),
            })
            .await?;

        // 3. Speech and word cloud are independent of each other
        let speech_request = SpeechRequest {
            text: translation.translated_text.clone(),
            language_hint: language_code.clone(),
            gender_preference,
        };
        let visualization_request = VisualizationRequest {
            text: translation.translated_text.clone(),
        };

        let (speech, visualization) = tokio::try_join!(
            async {
                self.speech_service
                    .synthesize(speech_request)
                    .await
                    .map_err(PipelineError::from)
            },
            async {
                self.wordcloud_service
                    .render(visualization_request)
                    .await
                    .map_err(PipelineError::from)
            },
        )
        .map_err(|e| {
            tracing::error!(stage = %e.stage(), error = %e, "Pipeline run failed");
            e
        })?;

        tracing::info!(
            language_code = %language_code,
            latency_ms = start_time.elapsed().as_millis(),
            audio_size_bytes = speech.audio_bytes.len(),
            image_size_bytes = visualization.image_bytes.len(),
            "Pipeline run completed"
        );

        Ok(PipelineResult {
            language_code,
            translation,
            speech,
            visualization,
        })
    }
}
