//! espeak-ng speech engine.
//!
//! Drives the system `espeak-ng` command. Requires espeak-ng to be installed:
//! - macOS: `brew install espeak-ng`
//! - Linux: `apt-get install espeak-ng`

use super::speech_engine::{SpeechEngine, SynthesisJob};
use crate::domain::speech::{AudioFormat, VoiceHandle};
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

pub const DEFAULT_ESPEAK_BINARY: &str = "espeak-ng";

/// espeak-ng amplitude for a volume of 1.0
const FULL_AMPLITUDE: f32 = 100.0;

pub struct EspeakSpeechEngine {
    binary: String,
}

impl EspeakSpeechEngine {
    pub fn new(binary: String) -> Self {
        Self { binary }
    }

    fn amplitude(volume: f32) -> u32 {
        (volume.clamp(0.0, 2.0) * FULL_AMPLITUDE).round() as u32
    }

    /// Parse the table printed by `espeak-ng --voices`
    ///
    /// ```text
    /// Pty Language       Age/Gender VoiceName          File                 Other Languages
    ///  5  fr-fr           --/M      French_(France)    roa/fr
    /// ```
    fn parse_voices(listing: &str) -> Vec<VoiceHandle> {
        listing
            .lines()
            .skip(1)
            .filter_map(|line| {
                let columns: Vec<&str> = line.split_whitespace().collect();
                if columns.len() < 5 {
                    return None;
                }
                Some(VoiceHandle {
                    id: columns[1].to_string(),
                    name: columns[3].replace('_', " "),
                    language: columns[1].to_string(),
                })
            })
            .collect()
    }

    fn render_args(job: &SynthesisJob<'_>, output: &Path) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(voice) = job.voice {
            args.push("-v".to_string());
            args.push(voice.id.clone());
        }
        args.push("-s".to_string());
        args.push(job.settings.rate_wpm.to_string());
        args.push("-a".to_string());
        args.push(Self::amplitude(job.settings.volume).to_string());
        args.push("-w".to_string());
        args.push(output.to_string_lossy().into_owned());
        args.push("--stdin".to_string());
        args
    }
}

#[async_trait]
impl SpeechEngine for EspeakSpeechEngine {
    fn name(&self) -> &'static str {
        "espeak-ng"
    }

    fn audio_format(&self) -> AudioFormat {
        AudioFormat::Wav
    }

    async fn list_voices(&self, language_hint: &str) -> Result<Vec<VoiceHandle>, String> {
        let output = Command::new(&self.binary)
            .arg(format!("--voices={}", language_hint))
            .output()
            .await
            .map_err(|e| format!("Failed to run {}. Is it installed? Error: {}", self.binary, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!("{} --voices failed: {}", self.binary, stderr.trim()));
        }

        let voices = Self::parse_voices(&String::from_utf8_lossy(&output.stdout));
        tracing::debug!(
            language = language_hint,
            voice_count = voices.len(),
            "espeak-ng voices enumerated"
        );

        Ok(voices)
    }

    async fn render_to_file(&self, job: &SynthesisJob<'_>, output: &Path) -> Result<(), String> {
        let args = Self::render_args(job, output);

        tracing::debug!(
            binary = %self.binary,
            args = ?args,
            text_length = job.text.len(),
            "Running espeak-ng"
        );

        let mut child = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| format!("Failed to run {}. Is it installed? Error: {}", self.binary, e))?;

        // Text goes through stdin so it is never parsed as an option
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| "espeak-ng stdin unavailable".to_string())?;
        stdin
            .write_all(job.text.as_bytes())
            .await
            .map_err(|e| format!("Failed to send text to espeak-ng: {}", e))?;
        drop(stdin);

        let result = child
            .wait_with_output()
            .await
            .map_err(|e| format!("espeak-ng did not finish: {}", e))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            tracing::error!(
                status = ?result.status.code(),
                stderr = %stderr.trim(),
                "espeak-ng synthesis failed"
            );
            return Err(format!("espeak-ng failed: {}", stderr.trim()));
        }

        Ok(())
    }
}
