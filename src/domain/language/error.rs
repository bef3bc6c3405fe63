use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("language table could not be loaded: {0}")]
    Load(String),
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnknownLanguage(name) => {
                AppError::NotFound(format!("Unknown language: {}", name))
            }
            CatalogError::Load(msg) => AppError::Internal(msg),
        }
    }
}
