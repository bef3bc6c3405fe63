use axum::{extract::State, Json};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    domain::{
        language::{LanguageCatalog, LanguageEntry},
        pipeline::{PipelineResult, PipelineServiceApi},
        speech::GenderPreference,
        wordcloud::VisualizationResult,
    },
    error::{AppError, AppResult},
};

/// Longest input accepted; the translation page takes text in the query string
const MAX_TEXT_CHARS: usize = 5000;

/// Request for POST /api/translate
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub language: String,
    #[serde(default)]
    pub voice: GenderPreference,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AudioPayload {
    pub mime_type: String,
    pub file_name: String,
    pub data_base64: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ImagePayload {
    pub mime_type: String,
    pub data_base64: String,
}

/// Response for POST /api/translate
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translated_text: String,
    pub language_code: String,
    pub audio: AudioPayload,
    pub word_cloud: ImagePayload,
}

impl From<PipelineResult> for TranslateResponse {
    fn from(result: PipelineResult) -> Self {
        // The audio file is removed when `result` drops at the end of this call
        let audio = AudioPayload {
            mime_type: result.speech.format.mime_type().to_string(),
            file_name: result.speech.file_name(),
            data_base64: STANDARD.encode(&result.speech.audio_bytes),
        };

        Self {
            translated_text: result.translation.translated_text,
            language_code: result.language_code,
            audio,
            word_cloud: ImagePayload {
                mime_type: VisualizationResult::MIME_TYPE.to_string(),
                data_base64: STANDARD.encode(&result.visualization.image_bytes),
            },
        }
    }
}

pub struct PipelineController {
    pipeline_service: Arc<dyn PipelineServiceApi>,
    catalog: Arc<LanguageCatalog>,
}

impl PipelineController {
    pub fn new(
        pipeline_service: Arc<dyn PipelineServiceApi>,
        catalog: Arc<LanguageCatalog>,
    ) -> Self {
        Self {
            pipeline_service,
            catalog,
        }
    }

    /// GET /api/languages - Selectable target languages, in table order
    pub async fn list_languages(
        State(controller): State<Arc<PipelineController>>,
    ) -> Json<Vec<LanguageEntry>> {
        Json(controller.catalog.entries().to_vec())
    }

    /// POST /api/translate - Translate, speak and visualize text
    pub async fn translate(
        State(controller): State<Arc<PipelineController>>,
        Json(request): Json<TranslateRequest>,
    ) -> AppResult<Json<TranslateResponse>> {
        let char_count = request.text.chars().count();
        if char_count > MAX_TEXT_CHARS {
            return Err(AppError::PayloadTooLarge(format!(
                "Text must be {} characters or less",
                MAX_TEXT_CHARS
            )));
        }

        let result = controller
            .pipeline_service
            .run(&request.text, &request.language, request.voice)
            .await?;

        Ok(Json(TranslateResponse::from(result)))
    }
}
