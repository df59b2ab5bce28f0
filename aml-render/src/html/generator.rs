//! The HTML generator

use super::document::{DocumentWriter, MORE_SIGIL, READ_MORE};
use super::RenderOptions;
use crate::annotations::ChineseAnnotator;
use crate::colorblocks::{
    create_chinese_annotation, create_color_block, create_emphasis, create_inline_title,
    create_list_item, create_literal_text, create_mlq_block, create_private_text,
    create_template, create_url_link, create_wikilink,
};
use crate::escape::{escape_html, strip_tags, unescape_html};
use crate::quotes::QuoteSink;
use aml_parser::aml::{ColorName, Node};

/// Renders AML trees to HTML fragments.
///
/// Collaborators are borrowed for the generator's lifetime:
///
/// ```rust
/// let html = HtmlGenerator::new(RenderOptions::default())
///     .with_annotator(&dictionary)
///     .with_quote_sink(&sink)
///     .generate(&document);
/// ```
pub struct HtmlGenerator<'a> {
    options: RenderOptions,
    annotator: Option<&'a dyn ChineseAnnotator>,
    quote_sink: Option<&'a dyn QuoteSink>,
}

impl<'a> HtmlGenerator<'a> {
    pub fn new(options: RenderOptions) -> Self {
        HtmlGenerator {
            options,
            annotator: None,
            quote_sink: None,
        }
    }

    pub fn with_annotator(mut self, annotator: &'a dyn ChineseAnnotator) -> Self {
        self.annotator = Some(annotator);
        self
    }

    pub fn with_quote_sink(mut self, sink: &'a dyn QuoteSink) -> Self {
        self.quote_sink = Some(sink);
        self
    }

    /// Render a document, or a single node on its own.
    pub fn generate(&self, node: &Node) -> String {
        let html = match node {
            Node::Document { children } => self.render_document(children),
            other => self.render_node(other),
        };
        tracing::debug!(bytes = html.len(), truncated = self.options.truncated, "rendered html");
        html
    }

    fn render_document(&self, children: &[Node]) -> String {
        let mut writer = DocumentWriter::new();

        for node in children {
            match node {
                Node::Hr => writer.block("<hr>"),
                Node::MoreTag if self.options.truncated => {
                    writer.block(READ_MORE);
                    return writer.finish();
                }
                Node::MoreTag => writer.block(MORE_SIGIL),
                Node::ListItem { marker_type, .. } => {
                    writer.list_item(*marker_type, self.render_node(node))
                }
                Node::Newline => writer.flush_paragraph(),
                block if is_block(block) => writer.block(&self.render_node(block)),
                inline => writer.inline(&self.render_node(inline)),
            }
        }

        writer.finish()
    }

    fn render_children(&self, children: &[Node]) -> String {
        children.iter().map(|child| self.render_node(child)).collect()
    }

    fn render_node(&self, node: &Node) -> String {
        match node {
            // Only the root is a document; a nested one is shown as text
            Node::Document { .. } => escape_html(&node.plain_text()),
            Node::Text { value, children } => {
                let mut html = escape_html(value);
                html.push_str(&self.render_children(children));
                html
            }
            Node::Newline => "<br>".to_string(),
            Node::Hr => "<hr>".to_string(),
            Node::MoreTag => MORE_SIGIL.to_string(),
            Node::ListItem { children, .. } => {
                create_list_item(self.render_children(children).trim())
            }
            Node::Mlq { children, color } => self.render_mlq(children, *color),
            Node::ColorBlock {
                color,
                is_line,
                children,
            } => self.render_color_block(*color, *is_line, children),
            Node::Chinese { hanzi } => create_chinese_annotation(hanzi, self.annotator),
            Node::Url { raw } => create_url_link(raw),
            Node::Wikilink { children } => create_wikilink(&self.render_children(children)),
            Node::Literal { children } => create_literal_text(&self.render_children(children)),
            Node::Emphasis { raw } => create_emphasis(raw),
            Node::Title { children } => create_inline_title(&self.render_children(children)),
            Node::Template { template_name, raw } => {
                create_template(template_name.as_deref(), raw)
            }
            Node::Private { children } if self.options.show_private => {
                create_private_text(&self.render_children(children))
            }
            Node::Private { .. } => String::new(),
        }
    }

    /// Each line of an MLQ is its own paragraph.
    fn render_mlq(&self, children: &[Node], color: Option<ColorName>) -> String {
        let paragraphs: Vec<String> = children
            .split(|child| matches!(child, Node::Newline))
            .map(|line| self.render_children(line).trim().to_string())
            .filter(|paragraph| !paragraph.is_empty())
            .collect();
        create_mlq_block(&paragraphs, color)
    }

    fn render_color_block(&self, color: ColorName, is_line: bool, children: &[Node]) -> String {
        let content = self.render_children(children);

        if color.is_quote() {
            if let Some(sink) = self.quote_sink {
                let text = unescape_html(&strip_tags(&content));
                let text = text.trim();
                if !text.is_empty() {
                    if let Err(err) = sink.record(text) {
                        tracing::warn!(%err, "failed to record quote");
                    }
                }
            }
        }

        create_color_block(color.name(), &content, is_line)
    }
}

/// Nodes written outside paragraphs.
fn is_block(node: &Node) -> bool {
    match node {
        Node::Mlq { .. } => true,
        Node::Template { template_name, .. } => template_name.as_deref() == Some("pgn"),
        _ => false,
    }
}
