use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("speech engine error: {0}")]
    Engine(String),
    #[error("audio artifact error: {0}")]
    Artifact(String),
    #[error("speech engine produced no audio")]
    EmptyAudio,
}

impl From<SynthesisError> for AppError {
    fn from(err: SynthesisError) -> Self {
        match err {
            SynthesisError::Invalid(msg) => AppError::BadRequest(msg),
            other => AppError::ExternalService(other.to_string()),
        }
    }
}
