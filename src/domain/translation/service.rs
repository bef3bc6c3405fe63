use super::error::TranslationServiceError;
use super::{TranslationRequest, TranslationResult};
use crate::infrastructure::repositories::TranslationRepository;
use async_trait::async_trait;
use std::sync::Arc;

pub struct TranslationService {
    translation_repo: Arc<dyn TranslationRepository>,
}

impl TranslationService {
    pub fn new(translation_repo: Arc<dyn TranslationRepository>) -> Self {
        Self { translation_repo }
    }
}

#[async_trait]
pub trait TranslationServiceApi: Send + Sync {
    /// Translate text into the language identified by `target_code`
    ///
    /// Any failure is total: on error no part of the output is meaningful.
    /// A successful result always carries non-empty text.
    async fn translate(
        &self,
        request: TranslationRequest,
    ) -> Result<TranslationResult, TranslationServiceError>;
}

#[async_trait]
impl TranslationServiceApi for TranslationService {
    async fn translate(
        &self,
        request: TranslationRequest,
    ) -> Result<TranslationResult, TranslationServiceError> {
        let source_text = request.source_text.trim();
        if source_text.is_empty() {
            return Err(TranslationServiceError::Invalid(
                "Text to translate cannot be empty".to_string(),
            ));
        }
        if request.target_code.trim().is_empty() {
            return Err(TranslationServiceError::Invalid(
                "Target language code cannot be empty".to_string(),
            ));
        }

        tracing::info!(
            target_code = %request.target_code,
            text_length = source_text.len(),
            "Translation request"
        );

        let start_time = std::time::Instant::now();

        let translated = self
            .translation_repo
            .translate(source_text, &request.target_code)
            .await
            .map_err(TranslationServiceError::Dependency)?;

        let translated_text = translated.trim().to_string();
        if translated_text.is_empty() {
            tracing::warn!(
                target_code = %request.target_code,
                "Translation service returned no text"
            );
            return Err(TranslationServiceError::EmptyTranslation);
        }

        tracing::info!(
            target_code = %request.target_code,
            latency_ms = start_time.elapsed().as_millis(),
            translated_length = translated_text.len(),
            "Translation completed"
        );

        Ok(TranslationResult { translated_text })
    }
}
