//! Vocabulary entries and scope resolution.
//!
//! Source vocabulary carries a meaning per locale. A test runs in one
//! language, so entries are resolved to flat [`Word`] pairs before the deck
//! is built; entries with no usable meaning are dropped from the scope.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::Word;

/// Locale used when an entry has no meaning in the requested language.
pub const FALLBACK_LANG: &str = "en";

/// A vocabulary entry as stored, with localized meanings keyed by language
/// code (`"en"`, `"zh"`, `"vi"`, `"mn"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub id: String,
    pub korean: String,
    pub meanings: BTreeMap<String, String>,
}

impl VocabEntry {
    /// The meaning in `lang`, falling back to [`FALLBACK_LANG`].
    ///
    /// Blank strings count as missing; a locale file with an empty cell
    /// falls back rather than surfacing an empty prompt.
    pub fn meaning_in(&self, lang: &str) -> Option<&str> {
        self.resolved(lang).or_else(|| self.resolved(FALLBACK_LANG))
    }

    fn resolved(&self, lang: &str) -> Option<&str> {
        self.meanings
            .get(lang)
            .map(String::as_str)
            .filter(|m| !m.trim().is_empty())
    }
}

/// Resolve entries to test words for `lang`.
///
/// Entries that resolve to no meaning are skipped; order is preserved.
pub fn words_in_scope(entries: &[VocabEntry], lang: &str) -> Vec<Word> {
    entries
        .iter()
        .filter_map(|entry| {
            let meaning = entry.meaning_in(lang)?;
            Some(Word {
                id: entry.id.clone(),
                korean: entry.korean.clone(),
                meaning: meaning.to_string(),
            })
        })
        .collect()
}
