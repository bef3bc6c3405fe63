use super::error::CatalogError;
use super::LanguageEntry;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One raw row of the language table. Extra columns are ignored.
#[derive(Debug, Deserialize)]
struct LanguageRow {
    name: Option<String>,
    iso: Option<String>,
}

/// Immutable mapping from display name to translation code.
///
/// Built once at startup and shared behind an `Arc`; there is no global
/// instance.
#[derive(Debug, Clone)]
pub struct LanguageCatalog {
    entries: Vec<LanguageEntry>,
    index: HashMap<String, usize>,
}

impl LanguageCatalog {
    /// Load the catalog from a CSV table with `name` and `iso` columns
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            CatalogError::Load(format!("cannot open {}: {}", path.display(), e))
        })?;

        let catalog = Self::from_reader(file)?;

        tracing::info!(
            path = %path.display(),
            languages = catalog.len(),
            "Language catalog loaded"
        );

        Ok(catalog)
    }

    /// Parse a language table from any reader.
    ///
    /// Rows missing a name or a code are dropped. A present but blank name,
    /// a duplicated name or a table with no usable rows is a load error.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| CatalogError::Load(format!("unreadable header: {}", e)))?;
        for column in ["name", "iso"] {
            if !headers.iter().any(|h| h.trim() == column) {
                return Err(CatalogError::Load(format!("missing column: {}", column)));
            }
        }

        let mut entries = Vec::new();
        let mut dropped = 0usize;

        for (line, record) in csv_reader.deserialize::<LanguageRow>().enumerate() {
            let row = record
                .map_err(|e| CatalogError::Load(format!("malformed row {}: {}", line + 1, e)))?;

            let (name, iso) = match (row.name, row.iso) {
                (Some(name), Some(iso)) if !iso.trim().is_empty() => (name, iso),
                _ => {
                    dropped += 1;
                    continue;
                }
            };

            if name.trim().is_empty() {
                return Err(CatalogError::Load(format!(
                    "row {} has an empty display name",
                    line + 1
                )));
            }

            entries.push(LanguageEntry {
                display_name: name.trim().to_string(),
                code: iso.trim().to_string(),
            });
        }

        if dropped > 0 {
            tracing::debug!(dropped, "Dropped incomplete language rows");
        }

        Self::from_entries(entries)
    }

    pub fn from_entries(entries: Vec<LanguageEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Load("language table has no usable rows".to_string()));
        }

        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if entry.display_name.is_empty() || entry.code.is_empty() {
                return Err(CatalogError::Load(format!(
                    "incomplete language entry at position {}",
                    position
                )));
            }
            if index.insert(entry.display_name.clone(), position).is_some() {
                return Err(CatalogError::Load(format!(
                    "duplicate language name: {}",
                    entry.display_name
                )));
            }
        }

        Ok(Self { entries, index })
    }

    /// Entries in table order
    pub fn entries(&self) -> &[LanguageEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a display name to its translation code
    pub fn resolve(&self, display_name: &str) -> Result<&str, CatalogError> {
        self.index
            .get(display_name.trim())
            .map(|&position| self.entries[position].code.as_str())
            .ok_or_else(|| CatalogError::UnknownLanguage(display_name.to_string()))
    }
}
