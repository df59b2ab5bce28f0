//! English word lookup
//!
//! Dictionary files look like:
//!
//!     {"stopwords": ["the", "a"],
//!      "entries": {"run": {"pos": "verb", "translation": "correr", "definition": "...",
//!                          "pronunciation": "..."}}}
//!
//! Words are matched lowercase with surrounding punctuation trimmed. Stopwords never annotate.
//! Inflected forms fall back to their stem by stripping common suffixes.

use super::{read_json, AnnotationError};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Suffix rewrites tried in order: (suffix, replacement).
const SUFFIXES: [(&str, &str); 10] = [
    ("ies", "y"),
    ("es", ""),
    ("s", ""),
    ("ed", ""),
    ("ed", "e"),
    ("ing", ""),
    ("ing", "e"),
    ("er", ""),
    ("est", ""),
    ("ly", ""),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnglishEntry {
    /// Part of speech, e.g. `noun` or `verb`
    #[serde(default)]
    pub pos: Option<String>,
    #[serde(default)]
    pub translation: Option<String>,
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub pronunciation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnglishAnnotation {
    /// The word as looked up, lowercased
    pub word: String,
    /// The dictionary key that matched
    pub lemma: String,
    pub pos: Option<String>,
    pub translation: Option<String>,
    pub definition: Option<String>,
    pub pronunciation: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnglishDictionary {
    #[serde(default)]
    stopwords: HashSet<String>,
    #[serde(default)]
    entries: HashMap<String, EnglishEntry>,
}

impl EnglishDictionary {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, AnnotationError> {
        let dictionary: EnglishDictionary = read_json(path.as_ref())?;
        tracing::debug!(
            path = %path.as_ref().display(),
            entries = dictionary.entries.len(),
            stopwords = dictionary.stopwords.len(),
            "loaded english dictionary"
        );
        Ok(dictionary)
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    pub fn lookup(&self, word: &str) -> Option<EnglishAnnotation> {
        let word = word
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if word.is_empty() || self.stopwords.contains(&word) {
            return None;
        }

        if let Some(entry) = self.entries.get(&word) {
            return Some(annotation(&word, &word, entry));
        }

        SUFFIXES.iter().find_map(|(suffix, replacement)| {
            let stem = word.strip_suffix(suffix)?;
            if stem.is_empty() {
                return None;
            }
            let lemma = format!("{}{}", stem, replacement);
            self.entries
                .get(&lemma)
                .map(|entry| annotation(&word, &lemma, entry))
        })
    }
}

fn annotation(word: &str, lemma: &str, entry: &EnglishEntry) -> EnglishAnnotation {
    EnglishAnnotation {
        word: word.to_string(),
        lemma: lemma.to_string(),
        pos: entry.pos.clone(),
        translation: entry.translation.clone(),
        definition: entry.definition.clone(),
        pronunciation: entry.pronunciation.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SAMPLE: &str = r#"{
        "stopwords": ["the", "and"],
        "entries": {
            "berry": {"definition": "small fruit"},
            "bake": {"pos": "verb", "translation": "hornear", "definition": "cook in an oven", "pronunciation": "beɪk"},
            "walk": {"definition": "move on foot"},
            "quick": {"definition": "fast"},
            "the": {"definition": "article"}
        }
    }"#;

    fn dictionary() -> EnglishDictionary {
        EnglishDictionary::from_json_str(SAMPLE).unwrap()
    }

    #[rstest]
    #[case("walk", "walk")]
    #[case("Walk,", "walk")]
    #[case("berries", "berry")]
    #[case("walks", "walk")]
    #[case("walked", "walk")]
    #[case("baked", "bake")]
    #[case("walking", "walk")]
    #[case("baking", "bake")]
    #[case("walker", "walk")]
    #[case("quickest", "quick")]
    #[case("quickly", "quick")]
    fn test_lemma(#[case] word: &str, #[case] lemma: &str) {
        assert_eq!(dictionary().lookup(word).unwrap().lemma, lemma);
    }

    #[test]
    fn test_stopwords_never_annotate() {
        assert!(dictionary().lookup("The").is_none());
        assert!(dictionary().is_stopword("AND"));
    }

    #[test]
    fn test_unknown_word() {
        assert!(dictionary().lookup("zebra").is_none());
        assert!(dictionary().lookup("...").is_none());
    }

    #[test]
    fn test_annotation_fields() {
        let annotation = dictionary().lookup("baking").unwrap();
        assert_eq!(annotation.word, "baking");
        assert_eq!(annotation.lemma, "bake");
        assert_eq!(annotation.pos.as_deref(), Some("verb"));
        assert_eq!(annotation.translation.as_deref(), Some("hornear"));
        assert_eq!(annotation.definition.as_deref(), Some("cook in an oven"));
        assert_eq!(annotation.pronunciation.as_deref(), Some("beɪk"));

        let bare = dictionary().lookup("walks").unwrap();
        assert_eq!(bare.pos, None);
        assert_eq!(bare.translation, None);
    }
}
