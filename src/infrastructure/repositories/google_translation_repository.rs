use super::translation_repository::TranslationRepository;
use async_trait::async_trait;
use html2text::from_read;
use regex::Regex;

pub const GOOGLE_TRANSLATE_BASE_URL: &str = "https://translate.google.com";

// The mobile page only renders the plain result block for legacy browsers
const USER_AGENT: &str = "Mozilla/4.0 (compatible;MSIE 6.0;Windows NT 5.1;SV1;.NET CLR 1.1.4322;.NET CLR 2.0.50727;.NET CLR 3.0.04506.30)";

/// Google Translate implementation of the translation repository.
///
/// Scrapes the mobile translation page, which needs no API key.
pub struct GoogleTranslationRepository {
    base_url: String,
    http_client: reqwest::Client,
    result_pattern: Regex,
}

impl GoogleTranslationRepository {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client: reqwest::Client::new(),
            result_pattern: Regex::new(r#"(?s)class="(?:t0|result-container)">(.*?)<"#)
                .expect("translation result pattern is valid"),
        }
    }

    /// Pull the translated text out of the result page and decode its entities
    fn extract_translation(&self, page: &str) -> Option<String> {
        let fragment = self.result_pattern.captures(page)?.get(1)?.as_str();
        let decoded = from_read(fragment.as_bytes(), usize::MAX);
        let text = decoded.trim();

        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}

#[async_trait]
impl TranslationRepository for GoogleTranslationRepository {
    async fn translate(&self, text: &str, target_code: &str) -> Result<String, String> {
        let url = format!("{}/m", self.base_url);

        tracing::debug!(
            url = %url,
            target_code = target_code,
            text_length = text.len(),
            "Calling translation service"
        );

        let response = self
            .http_client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .query(&[("tl", target_code), ("sl", "auto"), ("q", text)])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    target_code = target_code,
                    "Translation request failed"
                );
                format!("Translation request failed: {}", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                status = status.as_u16(),
                target_code = target_code,
                "Translation service rejected the request"
            );
            return Err(format!(
                "Translation service returned {}: {}",
                status.as_u16(),
                error_text.chars().take(200).collect::<String>()
            ));
        }

        let page = response
            .text()
            .await
            .map_err(|e| format!("Failed to read translation response: {}", e))?;

        self.extract_translation(&page).ok_or_else(|| {
            tracing::error!(
                target_code = target_code,
                page_size = page.len(),
                "No translation found in response"
            );
            "No translation found in response".to_string()
        })
    }
}
