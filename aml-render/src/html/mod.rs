//! HTML generation
//!
//!     The generator walks a parsed document once. Top-level nodes go through a small state
//!     machine (see [`document`]) that groups inline nodes into paragraphs and consecutive list
//!     items into lists; everything below that is a straight recursive render through the
//!     fragment templates in [`crate::colorblocks`].
//!
//!     Rendering is total: every tree produces HTML. Collaborator failures (annotation lookups,
//!     quote capture) degrade the output or are logged, never returned.

pub mod document;
pub mod generator;

pub use generator::HtmlGenerator;

use aml_parser::aml::{parse_document, Node};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Stop at the first `--MORE--` and emit a read-more prompt
    #[serde(default)]
    pub truncated: bool,
    /// Render `<<PRIVATE: ..>>` content instead of dropping it
    #[serde(default)]
    pub show_private: bool,
}

/// Render a parsed node with no annotator and no quote capture.
pub fn render(node: &Node, options: &RenderOptions) -> String {
    HtmlGenerator::new(*options).generate(node)
}

/// Parse and render source text.
pub fn render_source(source: &str, options: &RenderOptions) -> String {
    render(&parse_document(source), options)
}
