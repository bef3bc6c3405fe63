use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use crate::infrastructure::repositories::{
    DEFAULT_ESPEAK_BINARY, DEFAULT_POLLY_VOICE, GOOGLE_TRANSLATE_BASE_URL,
};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Language catalog
    pub language_table_path: PathBuf,
    // Translation
    pub translate_base_url: String,
    // Speech
    pub speech_engine: SpeechEngineKind,
    pub espeak_binary: String,
    pub aws_region: String,
    pub polly_default_voice: String,
    pub audio_artifact_dir: PathBuf,
    // Word cloud
    pub wordcloud_font_path: Option<PathBuf>,
    pub english_words_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SpeechEngineKind {
    Espeak,
    Polly,
}

fn optional_path(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .as_str()
            {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            language_table_path: optional_path("LANGUAGE_TABLE_PATH")
                .unwrap_or_else(|| PathBuf::from("data/languages.csv")),
            translate_base_url: env::var("TRANSLATE_BASE_URL")
                .unwrap_or_else(|_| GOOGLE_TRANSLATE_BASE_URL.to_string()),
            speech_engine: match env::var("SPEECH_ENGINE")
                .unwrap_or_else(|_| "espeak".to_string())
                .to_lowercase()
                .as_str()
            {
                "espeak" => SpeechEngineKind::Espeak,
                "polly" => SpeechEngineKind::Polly,
                other => return Err(format!("unsupported SPEECH_ENGINE: {}", other).into()),
            },
            espeak_binary: env::var("ESPEAK_BINARY")
                .unwrap_or_else(|_| DEFAULT_ESPEAK_BINARY.to_string()),
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "eu-west-1".to_string()),
            polly_default_voice: env::var("POLLY_DEFAULT_VOICE")
                .unwrap_or_else(|_| DEFAULT_POLLY_VOICE.to_string()),
            audio_artifact_dir: optional_path("AUDIO_ARTIFACT_DIR")
                .unwrap_or_else(env::temp_dir),
            wordcloud_font_path: optional_path("WORDCLOUD_FONT_PATH"),
            english_words_path: optional_path("ENGLISH_WORDS_PATH"),
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}
