use super::error::SynthesisError;
use super::voice::select_voice;
use super::{SpeechRequest, SpeechResult, VoiceSettings};
use crate::infrastructure::repositories::{SpeechEngine, SynthesisJob};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

const ARTIFACT_PREFIX: &str = "translated_audio_";

pub struct SpeechService {
    engine: Arc<dyn SpeechEngine>,
    settings: VoiceSettings,
    artifact_dir: PathBuf,
}

impl SpeechService {
    pub fn new(engine: Arc<dyn SpeechEngine>, artifact_dir: PathBuf) -> Self {
        Self {
            engine,
            settings: VoiceSettings::default(),
            artifact_dir,
        }
    }
}

#[async_trait]
pub trait SpeechServiceApi: Send + Sync {
    /// Synthesize speech for already translated text
    ///
    /// This operation:
    /// - Enumerates the engine's voices for the language hint
    /// - Picks a voice from the gender preference (index heuristic)
    /// - Renders to a transient file and reads it back
    ///
    /// Engine failures never escape raw; they come back as `SynthesisError`.
    async fn synthesize(&self, request: SpeechRequest) -> Result<SpeechResult, SynthesisError>;
}

#[async_trait]
impl SpeechServiceApi for SpeechService {
    async fn synthesize(&self, request: SpeechRequest) -> Result<SpeechResult, SynthesisError> {
        if request.text.trim().is_empty() {
            return Err(SynthesisError::Invalid("Text to speak cannot be empty".to_string()));
        }

        let start_time = std::time::Instant::now();

        // 1. Enumerate voices and apply the selection heuristic
        let voices = self
            .engine
            .list_voices(&request.language_hint)
            .await
            .map_err(SynthesisError::Engine)?;
        let voice = select_voice(&voices, request.gender_preference);

        tracing::info!(
            engine = self.engine.name(),
            language = %request.language_hint,
            gender_preference = %request.gender_preference,
            available_voices = voices.len(),
            voice = voice.map(|v| v.id.as_str()).unwrap_or("default"),
            "Voice selected"
        );

        // 2. Reserve the transient artifact
        let format = self.engine.audio_format();
        let artifact = tempfile::Builder::new()
            .prefix(ARTIFACT_PREFIX)
            .suffix(&format!(".{}", format.extension()))
            .tempfile_in(&self.artifact_dir)
            .map_err(|e| {
                SynthesisError::Artifact(format!(
                    "cannot create audio file in {}: {}",
                    self.artifact_dir.display(),
                    e
                ))
            })?
            .into_temp_path();

        // 3. Render and read back
        let job = SynthesisJob {
            text: &request.text,
            language_hint: &request.language_hint,
            voice,
            settings: self.settings,
        };
        self.engine
            .render_to_file(&job, &artifact)
            .await
            .map_err(SynthesisError::Engine)?;

        let audio_bytes = tokio::fs::read(&artifact).await.map_err(|e| {
            SynthesisError::Artifact(format!("cannot read {}: {}", artifact.display(), e))
        })?;

        if audio_bytes.is_empty() {
            tracing::error!(
                engine = self.engine.name(),
                artifact = %artifact.display(),
                "Speech engine wrote an empty audio file"
            );
            return Err(SynthesisError::EmptyAudio);
        }

        tracing::info!(
            engine = self.engine.name(),
            latency_ms = start_time.elapsed().as_millis(),
            characters_count = request.text.len(),
            audio_size_bytes = audio_bytes.len(),
            "Speech synthesis completed"
        );

        Ok(SpeechResult {
            audio_bytes,
            format,
            artifact,
        })
    }
}
