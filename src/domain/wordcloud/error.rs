use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("no drawable words in text")]
    NoWords,
    #[error("word list error: {0}")]
    Dictionary(String),
    #[error("font error: {0}")]
    Font(String),
    #[error("rendering failed: {0}")]
    Render(String),
    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::Invalid(msg) => AppError::BadRequest(msg),
            other => AppError::ExternalService(other.to_string()),
        }
    }
}
