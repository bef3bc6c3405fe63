use async_trait::async_trait;

/// Repository for machine translation.
/// Abstracts the underlying translation provider.
#[async_trait]
pub trait TranslationRepository: Send + Sync {
    /// Translate `text` into the language named by `target_code`
    ///
    /// The source language is detected by the provider.
    ///
    /// # Errors
    /// Returns error on network failure, non-success responses or
    /// responses that carry no translation
    async fn translate(&self, text: &str, target_code: &str) -> Result<String, String>;
}
