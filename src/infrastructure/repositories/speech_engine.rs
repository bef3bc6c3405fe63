use crate::domain::speech::{AudioFormat, VoiceHandle, VoiceSettings};
use async_trait::async_trait;
use std::path::Path;

/// Everything an engine needs to render one utterance
#[derive(Debug, Clone, Copy)]
pub struct SynthesisJob<'a> {
    pub text: &'a str,
    pub language_hint: &'a str,
    /// `None` selects the engine's default voice
    pub voice: Option<&'a VoiceHandle>,
    pub settings: VoiceSettings,
}

/// Speech engine abstraction.
/// Hides the provider (local espeak-ng, AWS Polly, ...) behind voice
/// enumeration and file rendering.
///
/// Implementations are responsible for:
/// - Listing voices in a stable order for a language hint
/// - Applying rate and volume settings
/// - Writing the complete audio stream to the given path
#[async_trait]
pub trait SpeechEngine: Send + Sync {
    fn name(&self) -> &'static str;

    /// Encoding of the files written by `render_to_file`
    fn audio_format(&self) -> AudioFormat;

    /// Enumerate voices suitable for `language_hint`, in engine order
    async fn list_voices(&self, language_hint: &str) -> Result<Vec<VoiceHandle>, String>;

    /// Render `job` into the file at `output`
    ///
    /// # Errors
    /// Returns error if the engine cannot start or the file cannot be written
    async fn render_to_file(&self, job: &SynthesisJob<'_>, output: &Path) -> Result<(), String>;
}
