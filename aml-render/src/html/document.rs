//! Document-level layout
//!
//! Top-level nodes are fed one at a time into [`DocumentWriter`], which holds a paragraph
//! buffer and a list buffer:
//!
//! - `Hr` and `MoreTag` close both buffers
//! - `ListItem` closes the paragraph and joins the open list, or starts a new list when the
//!   marker type changes
//! - `Newline` closes the paragraph
//! - block nodes close both buffers and are written directly
//! - any other node closes the list and joins the paragraph
//!
//! Paragraphs are trimmed; empty ones are dropped.

use crate::colorblocks::create_list_container;
use aml_parser::aml::MarkerType;

pub const READ_MORE: &str = "<p class=\"read-more\">Click title to read more…</p>";
pub const MORE_SIGIL: &str = "<div class=\"more-tag\">✂</div>";

#[derive(Debug, Default)]
pub struct DocumentWriter {
    out: String,
    paragraph: String,
    list: Option<(MarkerType, Vec<String>)>,
}

impl DocumentWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flush_paragraph(&mut self) {
        let text = self.paragraph.trim();
        if !text.is_empty() {
            self.out.push_str("<p>");
            self.out.push_str(text);
            self.out.push_str("</p>\n");
        }
        self.paragraph.clear();
    }

    pub fn flush_list(&mut self) {
        if let Some((marker_type, items)) = self.list.take() {
            self.out
                .push_str(&create_list_container(marker_type, &items));
            self.out.push('\n');
        }
    }

    pub fn flush(&mut self) {
        self.flush_paragraph();
        self.flush_list();
    }

    /// Close everything and write a standalone block.
    pub fn block(&mut self, html: &str) {
        self.flush();
        self.out.push_str(html);
        self.out.push('\n');
    }

    pub fn list_item(&mut self, marker_type: MarkerType, html: String) {
        self.flush_paragraph();
        if matches!(&self.list, Some((current, _)) if *current != marker_type) {
            self.flush_list();
        }
        self.list
            .get_or_insert_with(|| (marker_type, Vec::new()))
            .1
            .push(html);
    }

    pub fn inline(&mut self, html: &str) {
        self.flush_list();
        self.paragraph.push_str(html);
    }

    pub fn finish(mut self) -> String {
        self.flush();
        self.out
    }
}
