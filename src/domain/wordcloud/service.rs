use super::error::RenderError;
use super::renderer::WordCloudRenderer;
use super::text::{prepare_text, word_frequencies, EnglishLexicon};
use super::{VisualizationRequest, VisualizationResult};
use async_trait::async_trait;
use std::sync::Arc;

pub struct WordCloudService {
    lexicon: Arc<EnglishLexicon>,
    renderer: Arc<WordCloudRenderer>,
}

impl WordCloudService {
    pub fn new(lexicon: Arc<EnglishLexicon>, renderer: Arc<WordCloudRenderer>) -> Self {
        Self { lexicon, renderer }
    }
}

#[async_trait]
pub trait WordCloudServiceApi: Send + Sync {
    /// Render a frequency weighted word cloud of the text as PNG bytes
    async fn render(
        &self,
        request: VisualizationRequest,
    ) -> Result<VisualizationResult, RenderError>;
}

#[async_trait]
impl WordCloudServiceApi for WordCloudService {
    async fn render(
        &self,
        request: VisualizationRequest,
    ) -> Result<VisualizationResult, RenderError> {
        if request.text.trim().is_empty() {
            return Err(RenderError::Invalid("Text to visualize cannot be empty".to_string()));
        }

        let start_time = std::time::Instant::now();

        let prepared = prepare_text(&request.text, &self.lexicon);
        let frequencies = word_frequencies(&prepared.text);

        tracing::info!(
            text_length = request.text.len(),
            source = ?prepared.source,
            distinct_words = frequencies.len(),
            "Word cloud text prepared"
        );

        if frequencies.is_empty() {
            return Err(RenderError::NoWords);
        }

        // Rasterizing is CPU bound
        let renderer = self.renderer.clone();
        let image_bytes = tokio::task::spawn_blocking(move || renderer.render_png(&frequencies))
            .await
            .map_err(|e| RenderError::Render(format!("render task failed: {}", e)))??;

        tracing::info!(
            latency_ms = start_time.elapsed().as_millis(),
            image_size_bytes = image_bytes.len(),
            "Word cloud rendered"
        );

        Ok(VisualizationResult { image_bytes })
    }
}
