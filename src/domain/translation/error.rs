use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum TranslationServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("translation service error: {0}")]
    Dependency(String),
    #[error("translation service returned an empty translation")]
    EmptyTranslation,
}

impl From<TranslationServiceError> for AppError {
    fn from(err: TranslationServiceError) -> Self {
        match err {
            TranslationServiceError::Invalid(msg) => AppError::BadRequest(msg),
            other => AppError::ExternalService(other.to_string()),
        }
    }
}
