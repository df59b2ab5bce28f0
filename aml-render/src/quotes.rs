//! Quote capture
//!
//! Rendering a yellow/quote color block hands its plain text to a [`QuoteSink`]. Sink failures
//! are the caller's to log; the generator never aborts on them.

use serde::Serialize;
use std::cell::RefCell;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuoteSinkError {
    #[error("failed to write quote to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode quote: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("quote rejected: {0}")]
    Rejected(String),
}

pub trait QuoteSink {
    fn record(&self, text: &str) -> Result<(), QuoteSinkError>;
}

/// Keeps quotes in memory, in render order.
#[derive(Debug, Default)]
pub struct MemoryQuoteSink {
    quotes: RefCell<Vec<String>>,
}

impl MemoryQuoteSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quotes(&self) -> Vec<String> {
        self.quotes.borrow().clone()
    }
}

impl QuoteSink for MemoryQuoteSink {
    fn record(&self, text: &str) -> Result<(), QuoteSinkError> {
        self.quotes.borrow_mut().push(text.to_string());
        Ok(())
    }
}

#[derive(Serialize)]
struct QuoteRecord<'a> {
    message: &'a str,
    text: &'a str,
}

/// Appends one `{"message": .., "text": ..}` JSON line per quote to a file.
#[derive(Debug, Clone)]
pub struct JsonLinesQuoteSink {
    path: PathBuf,
    message: String,
}

impl JsonLinesQuoteSink {
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        JsonLinesQuoteSink {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QuoteSink for JsonLinesQuoteSink {
    fn record(&self, text: &str) -> Result<(), QuoteSinkError> {
        let mut line = serde_json::to_string(&QuoteRecord {
            message: &self.message,
            text,
        })?;
        line.push('\n');

        let io_error = |source| QuoteSinkError::Io {
            path: self.path.clone(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(io_error)?;
        file.write_all(line.as_bytes()).map_err(io_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_keeps_order() {
        let sink = MemoryQuoteSink::new();
        sink.record("one").unwrap();
        sink.record("two").unwrap();
        assert_eq!(sink.quotes(), vec!["one", "two"]);
    }

    #[test]
    fn test_json_lines_sink_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.jsonl");
        let sink = JsonLinesQuoteSink::new(&path, "post-7");
        sink.record("to be \"or\" not").unwrap();
        sink.record("second").unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<serde_json::Value> = written
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["message"], "post-7");
        assert_eq!(lines[0]["text"], "to be \"or\" not");
        assert_eq!(lines[1]["text"], "second");
    }

    #[test]
    fn test_json_lines_sink_reports_path() {
        let sink = JsonLinesQuoteSink::new("/no/such/dir/quotes.jsonl", "m");
        assert_eq!(sink.path(), Path::new("/no/such/dir/quotes.jsonl"));
        let err = sink.record("x").unwrap_err();
        assert!(err.to_string().contains("/no/such/dir/quotes.jsonl"));
    }
}
