//! Document loading utilities
//!
//! `DocumentLoader` reads source text from a file or a string and runs the pipeline stages on
//! it. The CLI and the integration tests both go through it.
//!
//! # Example
//!
//! ```rust
//! use aml_parser::aml::loader::DocumentLoader;
//!
//! let loader = DocumentLoader::from_path("post.aml")?;
//! let tokens = loader.tokenize();
//! let doc = loader.parse();
//! ```

use crate::aml::ast::Node;
use crate::aml::lexing::tokenize;
use crate::aml::parsing::parse;
use crate::aml::token::Token;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Source text with pipeline shortcuts
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = source.len(), "loaded aml document");
        Ok(DocumentLoader { source })
    }

    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokenize(&self) -> Vec<Token> {
        tokenize(&self.source)
    }

    pub fn parse(&self) -> Node {
        parse(self.tokenize())
    }
}
