//! Annotation collaborators
//!
//! Dictionaries are plain data, built once and shared read-only (`Send + Sync`). The generator
//! receives a Chinese annotator explicitly; nothing here is global.

pub mod chinese;
pub mod english;

pub use chinese::{ChineseAnnotation, ChineseAnnotator, ChineseDictionary, LazyChineseDictionary};
pub use english::{EnglishAnnotation, EnglishDictionary};

use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors loading a dictionary file.
#[derive(Debug, Error)]
pub enum AnnotationError {
    #[error("failed to read dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse dictionary {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A lookup could not be answered (as opposed to answered with "no entry").
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("annotation unavailable: {reason}")]
pub struct AnnotationUnavailable {
    pub reason: String,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AnnotationError> {
    let text = fs::read_to_string(path).map_err(|source| AnnotationError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| AnnotationError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
