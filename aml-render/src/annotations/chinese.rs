//! Chinese pinyin/definition lookup
//!
//! Dictionary files are CEDICT-style JSON keyed by hanzi:
//!
//!     {"你好": {"pinyin": "nǐ hǎo", "definition": "hello"}}
//!
//! A run of characters with no entry of its own still gets pinyin when every character in it
//! is known; the definition is left out in that case.

use super::{read_json, AnnotationError, AnnotationUnavailable};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChineseAnnotation {
    #[serde(default)]
    pub pinyin: Option<String>,
    #[serde(default)]
    pub definition: Option<String>,
}

pub trait ChineseAnnotator: Send + Sync {
    /// `Ok(None)` means the text is simply not in the dictionary.
    fn lookup(&self, hanzi: &str) -> Result<Option<ChineseAnnotation>, AnnotationUnavailable>;
}

#[derive(Debug, Clone, Default)]
pub struct ChineseDictionary {
    entries: HashMap<String, ChineseAnnotation>,
}

impl ChineseDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let entries = serde_json::from_str(json)?;
        Ok(ChineseDictionary { entries })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, AnnotationError> {
        let entries: HashMap<String, ChineseAnnotation> = read_json(path.as_ref())?;
        let dictionary = ChineseDictionary { entries };
        tracing::debug!(path = %path.as_ref().display(), entries = dictionary.len(), "loaded chinese dictionary");
        Ok(dictionary)
    }

    pub fn insert(&mut self, hanzi: impl Into<String>, annotation: ChineseAnnotation) {
        self.entries.insert(hanzi.into(), annotation);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, hanzi: &str) -> Option<ChineseAnnotation> {
        if let Some(annotation) = self.entries.get(hanzi) {
            return Some(annotation.clone());
        }
        if hanzi.chars().count() < 2 {
            return None;
        }

        let mut syllables = Vec::new();
        let mut buf = [0u8; 4];
        for c in hanzi.chars() {
            let pinyin = self.entries.get(&*c.encode_utf8(&mut buf))?.pinyin.clone()?;
            syllables.push(pinyin);
        }
        Some(ChineseAnnotation {
            pinyin: Some(syllables.join(" ")),
            definition: None,
        })
    }
}

impl ChineseAnnotator for ChineseDictionary {
    fn lookup(&self, hanzi: &str) -> Result<Option<ChineseAnnotation>, AnnotationUnavailable> {
        Ok(self.get(hanzi))
    }
}

/// A dictionary file loaded on first lookup.
///
/// Concurrent first lookups load the file once. A failed load is remembered and every lookup
/// reports [`AnnotationUnavailable`].
#[derive(Debug)]
pub struct LazyChineseDictionary {
    path: PathBuf,
    dictionary: OnceCell<Result<ChineseDictionary, String>>,
}

impl LazyChineseDictionary {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        LazyChineseDictionary {
            path: path.into(),
            dictionary: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> &Result<ChineseDictionary, String> {
        self.dictionary.get_or_init(|| {
            ChineseDictionary::from_path(self.path()).map_err(|err| {
                tracing::warn!(%err, path = %self.path().display(), "chinese dictionary unavailable");
                err.to_string()
            })
        })
    }
}

impl ChineseAnnotator for LazyChineseDictionary {
    fn lookup(&self, hanzi: &str) -> Result<Option<ChineseAnnotation>, AnnotationUnavailable> {
        match self.load() {
            Ok(dictionary) => Ok(dictionary.get(hanzi)),
            Err(reason) => Err(AnnotationUnavailable {
                reason: reason.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "你好": {"pinyin": "nǐ hǎo", "definition": "hello"},
        "你": {"pinyin": "nǐ", "definition": "you"},
        "好": {"pinyin": "hǎo", "definition": "good"},
        "们": {"definition": "plural marker"}
    }"#;

    #[test]
    fn test_exact_entry() {
        let dictionary = ChineseDictionary::from_json_str(SAMPLE).unwrap();
        let annotation = dictionary.get("你好").unwrap();
        assert_eq!(annotation.pinyin.as_deref(), Some("nǐ hǎo"));
        assert_eq!(annotation.definition.as_deref(), Some("hello"));
    }

    #[test]
    fn test_per_character_fallback() {
        let dictionary = ChineseDictionary::from_json_str(SAMPLE).unwrap();
        assert_eq!(
            dictionary.get("好你"),
            Some(ChineseAnnotation {
                pinyin: Some("hǎo nǐ".into()),
                definition: None,
            })
        );
    }

    #[test]
    fn test_fallback_needs_every_character() {
        let dictionary = ChineseDictionary::from_json_str(SAMPLE).unwrap();
        assert_eq!(dictionary.get("你们"), None);
        assert_eq!(dictionary.get("我"), None);
    }

    #[test]
    fn test_insert_grows_dictionary() {
        let mut dictionary = ChineseDictionary::new();
        assert!(dictionary.is_empty());
        dictionary.insert(
            "茶",
            ChineseAnnotation {
                pinyin: Some("chá".into()),
                definition: Some("tea".into()),
            },
        );
        assert_eq!(dictionary.len(), 1);
        assert!(!dictionary.is_empty());
        assert_eq!(ChineseDictionary::from_json_str(SAMPLE).unwrap().len(), 4);
    }

    #[test]
    fn test_lazy_dictionary_loads_on_lookup() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let lazy = LazyChineseDictionary::new(file.path());
        assert_eq!(lazy.path(), file.path());
        let annotation = lazy.lookup("你").unwrap().unwrap();
        assert_eq!(annotation.definition.as_deref(), Some("you"));
    }

    #[test]
    fn test_lazy_dictionary_failure_is_unavailable() {
        let lazy = LazyChineseDictionary::new("/no/such/cedict.json");
        let first = lazy.lookup("你").unwrap_err();
        let second = lazy.lookup("好").unwrap_err();
        assert!(first.reason.contains("/no/such/cedict.json"));
        assert_eq!(first, second);
    }
}
