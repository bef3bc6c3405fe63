pub mod catalog;
pub mod error;

pub use catalog::LanguageCatalog;
pub use error::CatalogError;

use serde::{Deserialize, Serialize};

/// A selectable target language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    #[serde(rename = "name")]
    pub display_name: String,
    pub code: String,
}
