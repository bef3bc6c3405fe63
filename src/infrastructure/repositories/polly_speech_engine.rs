use super::speech_engine::{SpeechEngine, SynthesisJob};
use crate::domain::speech::{AudioFormat, VoiceHandle, VoiceSettings};
use async_trait::async_trait;
use aws_sdk_polly::{
    types::{Engine, OutputFormat, TextType, VoiceId},
    Client as PollyClient,
};
use std::path::Path;
use std::sync::Arc;

/// Polly accepts at most 3000 characters of SSML per request; the rest is
/// left for the `<speak><prosody>` wrapper
const MAX_BATCH_SIZE: usize = 2500;

/// Speaking rate that Polly's `100%` prosody rate corresponds to
const NOMINAL_RATE_WPM: u32 = 175;

pub const DEFAULT_POLLY_VOICE: &str = "Joanna";

/// AWS Polly implementation of the speech engine
pub struct PollySpeechEngine {
    polly_client: Arc<PollyClient>,
    default_voice: String,
}

impl PollySpeechEngine {
    pub fn new(polly_client: Arc<PollyClient>, default_voice: String) -> Self {
        Self {
            polly_client,
            default_voice,
        }
    }

    /// Whether a Polly language code such as `fr-CA` serves a hint such as `fr`
    fn language_matches(polly_code: &str, hint: &str) -> bool {
        let polly_code = polly_code.to_lowercase();
        let hint = hint.to_lowercase();
        polly_code == hint || polly_code.starts_with(&format!("{}-", hint))
    }

    fn escaped_char(c: char) -> Option<&'static str> {
        match c {
            '&' => Some("&amp;"),
            '<' => Some("&lt;"),
            '>' => Some("&gt;"),
            '"' => Some("&quot;"),
            '\'' => Some("&apos;"),
            _ => None,
        }
    }

    fn escape_ssml(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match Self::escaped_char(c) {
                Some(entity) => escaped.push_str(entity),
                None => escaped.push(c),
            }
        }
        escaped
    }

    /// Characters `c` occupies once escaped for SSML
    fn escaped_len(c: char) -> usize {
        Self::escaped_char(c).map_or(1, str::len)
    }

    fn escaped_text_len(text: &str) -> usize {
        text.chars().map(Self::escaped_len).sum()
    }

    /// Wrap text in SSML carrying the configured rate and volume
    fn build_ssml(text: &str, settings: &VoiceSettings) -> String {
        let rate_percent = (settings.rate_wpm as f32 * 100.0 / NOMINAL_RATE_WPM as f32).round();
        let volume_db = 20.0 * settings.volume.max(0.01).log10();
        format!(
            r#"<speak><prosody rate="{}%" volume="{:+.1}dB">{}</prosody></speak>"#,
            rate_percent,
            volume_db,
            Self::escape_ssml(text)
        )
    }

    /// Split text into batches that respect sentence boundaries.
    /// Each batch is at most MAX_BATCH_SIZE characters once escaped for SSML
    fn split_into_batches(text: &str) -> Vec<String> {
        if Self::escaped_text_len(text) <= MAX_BATCH_SIZE {
            return vec![text.to_string()];
        }

        let mut batches = Vec::new();
        let mut current_batch = String::new();
        let mut current_len = 0;

        for sentence in text.split_inclusive(['.', '!', '?']) {
            let sentence_len = Self::escaped_text_len(sentence);

            if !current_batch.is_empty() && current_len + sentence_len > MAX_BATCH_SIZE {
                batches.push(current_batch.trim().to_string());
                current_batch = String::new();
                current_len = 0;
            }

            // A single run-on sentence is cut by characters
            if sentence_len > MAX_BATCH_SIZE {
                let mut chunk = String::new();
                let mut chunk_len = 0;
                for c in sentence.chars() {
                    let len = Self::escaped_len(c);
                    if chunk_len + len > MAX_BATCH_SIZE {
                        batches.push(std::mem::take(&mut chunk));
                        chunk_len = 0;
                    }
                    chunk.push(c);
                    chunk_len += len;
                }
                if !chunk.trim().is_empty() {
                    batches.push(chunk);
                }
            } else {
                current_batch.push_str(sentence);
                current_len += sentence_len;
            }
        }

        if !current_batch.trim().is_empty() {
            batches.push(current_batch.trim().to_string());
        }

        batches
    }

    /// Call AWS Polly to synthesize a single text batch
    async fn call_polly(
        &self,
        text: &str,
        voice_id: &str,
        settings: &VoiceSettings,
    ) -> Result<Vec<u8>, String> {
        tracing::info!(
            voice_id = voice_id,
            engine = "standard",
            output_format = "Mp3",
            text_length = text.len(),
            "Calling AWS Polly synthesize_speech"
        );

        let result = self
            .polly_client
            .synthesize_speech()
            .text(Self::build_ssml(text, settings))
            .text_type(TextType::Ssml)
            .voice_id(VoiceId::from(voice_id))
            .output_format(OutputFormat::Mp3)
            .engine(Engine::Standard)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    error_display = %e,
                    voice_id = voice_id,
                    text_length = text.len(),
                    "AWS Polly synthesize_speech failed"
                );
                format!("AWS Polly error: {}", e)
            })?;

        let audio_stream = result.audio_stream.collect().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to collect audio stream from Polly response");
            format!("Failed to read audio stream: {}", e)
        })?;

        Ok(audio_stream.into_bytes().to_vec())
    }
}

#[async_trait]
impl SpeechEngine for PollySpeechEngine {
    fn name(&self) -> &'static str {
        "polly"
    }

    fn audio_format(&self) -> AudioFormat {
        AudioFormat::Mp3
    }

    async fn list_voices(&self, language_hint: &str) -> Result<Vec<VoiceHandle>, String> {
        let mut voices = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            let page = self
                .polly_client
                .describe_voices()
                .engine(Engine::Standard)
                .set_next_token(next_token.take())
                .send()
                .await
                .map_err(|e| format!("AWS Polly describe_voices failed: {}", e))?;

            for voice in page.voices() {
                let (Some(id), Some(language)) = (voice.id(), voice.language_code()) else {
                    continue;
                };
                if !Self::language_matches(language.as_str(), language_hint) {
                    continue;
                }
                voices.push(VoiceHandle {
                    id: id.as_str().to_string(),
                    name: voice.name().unwrap_or(id.as_str()).to_string(),
                    language: language.as_str().to_string(),
                });
            }

            match page.next_token() {
                Some(token) => next_token = Some(token.to_string()),
                None => break,
            }
        }

        tracing::debug!(
            language = language_hint,
            voice_count = voices.len(),
            "AWS Polly voices enumerated"
        );

        Ok(voices)
    }

    async fn render_to_file(&self, job: &SynthesisJob<'_>, output: &Path) -> Result<(), String> {
        let voice_id = job
            .voice
            .map(|v| v.id.as_str())
            .unwrap_or(self.default_voice.as_str());

        let batches = Self::split_into_batches(job.text);
        tracing::info!(
            batch_count = batches.len(),
            text_length = job.text.len(),
            "Text split into batches"
        );

        // MP3 frames concatenate into a playable stream
        let mut merged_audio = Vec::new();
        for (index, batch) in batches.iter().enumerate() {
            let audio_data = self.call_polly(batch, voice_id, &job.settings).await?;
            merged_audio.extend(audio_data);

            tracing::debug!(
                batch_index = index,
                total_audio_size = merged_audio.len(),
                "Batch synthesized and merged"
            );
        }

        tokio::fs::write(output, &merged_audio)
            .await
            .map_err(|e| format!("Failed to write {}: {}", output.display(), e))
    }
}
