use super::error::RenderError;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use unicode_segmentation::UnicodeSegmentation;

const BUNDLED_WORDS: &str = include_str!("../../../assets/english_words.txt");

/// Words too common to be worth drawing
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "of", "off", "on", "once", "only",
    "or", "other", "ought", "our", "ours", "ourselves", "out", "over", "own", "same", "she",
    "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself",
    "yourselves",
];

/// Dictionary of known English words, lowercase
#[derive(Debug, Clone)]
pub struct EnglishLexicon {
    words: HashSet<String>,
}

impl EnglishLexicon {
    /// The word list shipped with the crate: about 124k lowercase English
    /// words and inflections from the SCOWL lists
    pub fn bundled() -> Self {
        Self::from_word_list(BUNDLED_WORDS)
    }

    /// Load a newline separated word list such as `/usr/share/dict/words`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RenderError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            RenderError::Dictionary(format!("cannot read {}: {}", path.display(), e))
        })?;

        let lexicon = Self::from_word_list(&contents);
        if lexicon.is_empty() {
            return Err(RenderError::Dictionary(format!(
                "{} contains no words",
                path.display()
            )));
        }

        tracing::info!(path = %path.display(), words = lexicon.len(), "English word list loaded");
        Ok(lexicon)
    }

    pub fn from_word_list(list: &str) -> Self {
        let words = list
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Where the words of a cloud came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloudSource {
    /// ASCII text, only dictionary words kept
    DictionaryWords,
    /// Non-ASCII text, every alphabetic token kept
    AllAlphabeticTokens,
    /// ASCII text with no dictionary word, drawn from the text itself
    OriginalText,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedText {
    pub text: String,
    pub source: CloudSource,
}

/// Lowercase word tokens made only of alphabetic characters
pub fn alphabetic_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .unicode_words()
        .filter(|word| word.chars().all(char::is_alphabetic))
        .map(str::to_string)
        .collect()
}

/// Choose the text a cloud is drawn from.
///
/// Non-English scripts skip the dictionary since it cannot validate them.
/// When an ASCII text keeps no dictionary word, the original text is used so
/// the cloud never comes from an empty string.
pub fn prepare_text(text: &str, lexicon: &EnglishLexicon) -> PreparedText {
    let ascii = text.is_ascii();
    let filtered: Vec<String> = alphabetic_tokens(text)
        .into_iter()
        .filter(|token| !ascii || lexicon.contains(token))
        .collect();

    if filtered.is_empty() {
        return PreparedText {
            text: text.to_string(),
            source: CloudSource::OriginalText,
        };
    }

    PreparedText {
        text: filtered.join(" "),
        source: if ascii {
            CloudSource::DictionaryWords
        } else {
            CloudSource::AllAlphabeticTokens
        },
    }
}

/// Count drawable words, most frequent first (ties in alphabetical order).
///
/// Stop words are skipped, as are single ASCII letters. Single characters
/// of other scripts (a CJK ideograph is a word on its own) are kept.
pub fn word_frequencies(text: &str) -> Vec<(String, usize)> {
    let stop_words: HashSet<&str> = STOP_WORDS.iter().copied().collect();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for word in text.to_lowercase().unicode_words() {
        if !word.chars().any(char::is_alphabetic) || stop_words.contains(word) {
            continue;
        }
        if word.is_ascii() && word.len() < 2 {
            continue;
        }
        *counts.entry(word.to_string()).or_insert(0) += 1;
    }

    let mut frequencies: Vec<(String, usize)> = counts.into_iter().collect();
    frequencies.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    frequencies
}
