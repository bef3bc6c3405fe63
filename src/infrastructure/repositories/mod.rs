pub mod espeak_speech_engine;
pub mod google_translation_repository;
pub mod polly_speech_engine;
pub mod speech_engine;
pub mod translation_repository;

pub use espeak_speech_engine::{EspeakSpeechEngine, DEFAULT_ESPEAK_BINARY};
pub use google_translation_repository::{GoogleTranslationRepository, GOOGLE_TRANSLATE_BASE_URL};
pub use polly_speech_engine::{PollySpeechEngine, DEFAULT_POLLY_VOICE};
pub use speech_engine::{SpeechEngine, SynthesisJob};
pub use translation_repository::TranslationRepository;
