pub mod error;
pub mod service;
pub mod voice;

pub use error::SynthesisError;
pub use service::{SpeechService, SpeechServiceApi};
pub use voice::select_voice;

use serde::{Deserialize, Serialize};
use tempfile::TempPath;

/// Speech rate in words per minute
pub const SPEECH_RATE_WPM: u32 = 150;
/// Output volume in the 0.0..=1.0 range
pub const SPEECH_VOLUME: f32 = 0.9;

/// Requested voice gender.
///
/// Engines rarely expose reliable gender metadata, so this only steers the
/// index-based heuristic in [`select_voice`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenderPreference {
    #[default]
    #[serde(alias = "female")]
    Female,
    #[serde(alias = "male")]
    Male,
}

impl std::fmt::Display for GenderPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenderPreference::Female => write!(f, "Female"),
            GenderPreference::Male => write!(f, "Male"),
        }
    }
}

/// A voice as enumerated by a speech engine. Identity is only the engine's id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceHandle {
    pub id: String,
    pub name: String,
    pub language: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceSettings {
    pub rate_wpm: u32,
    pub volume: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            rate_wpm: SPEECH_RATE_WPM,
            volume: SPEECH_VOLUME,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioFormat {
    Wav,
    Mp3,
}

impl AudioFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            AudioFormat::Wav => "audio/wav",
            AudioFormat::Mp3 => "audio/mpeg",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::Wav => "wav",
            AudioFormat::Mp3 => "mp3",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SpeechRequest {
    pub text: String,
    pub language_hint: String,
    pub gender_preference: GenderPreference,
}

/// Synthesized audio plus the transient file it was rendered to.
///
/// The file lives as long as `artifact` does; dropping the result removes it.
#[derive(Debug)]
pub struct SpeechResult {
    pub audio_bytes: Vec<u8>,
    pub format: AudioFormat,
    pub artifact: TempPath,
}

impl SpeechResult {
    pub fn file_name(&self) -> String {
        self.artifact
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("translated_audio.{}", self.format.extension()))
    }
}
