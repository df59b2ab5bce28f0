//! Color block and inline fragment templates
//!
//!     Stateless functions turning already-rendered content into complete HTML fragments.
//!     The generator decides what goes where; these only know the markup.
//!
//!     Content arguments are HTML (already escaped by the caller). Raw arguments (`raw`, `url`,
//!     `hanzi`) are escaped here.

use crate::annotations::ChineseAnnotator;
use crate::chess::fen_to_board;
use crate::escape::{escape_attribute, escape_html, strip_tags, unescape_html};
use aml_parser::aml::{ColorName, MarkerType};
use once_cell::sync::Lazy;
use regex::Regex;

/// Sigil shown on uncolored MLQs.
pub const DEFAULT_MLQ_SIGIL: &str = "💬";

const WIKIPEDIA_BASE: &str = "https://en.wikipedia.org/wiki/";
const OPEN_LIBRARY_BASE: &str = "https://openlibrary.org/isbn/";
const WIKIDATA_BASE: &str = "https://www.wikidata.org/wiki/";

// Video ids are exactly 11 characters and must not run into another id character
static YOUTUBE_WATCH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"youtube\.com/watch\?v=([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)").unwrap()
});
static YOUTUBE_SHORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"youtu\.be/([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)").unwrap());
static YOUTUBE_PARAM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"youtube\.com/watch\?[^#]*&v=([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)").unwrap()
});
static WIKIDATA_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[QPL][0-9]+$").unwrap());

/// Wrap content in a colored span with its sigil. Unknown colors return the content as is.
pub fn create_color_block(color: &str, content: &str, is_line: bool) -> String {
    let Some(color) = ColorName::from_name(color) else {
        tracing::trace!(color, "unknown color, content left unwrapped");
        return content.to_string();
    };

    let content = if is_line {
        content.to_string()
    } else {
        format!("({})", content)
    };

    format!(
        "<span class=\"colorblock color-{}\"><span class=\"sigil\">{}</span><span class=\"colortext-content\">{}</span></span>",
        color.css_class(),
        color.sigil(),
        content
    )
}

/// The YouTube video id of a URL, when it has one.
pub fn youtube_video_id(url: &str) -> Option<String> {
    [&*YOUTUBE_WATCH, &*YOUTUBE_SHORT, &*YOUTUBE_PARAM]
        .iter()
        .find_map(|pattern| pattern.captures(url))
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str().to_string())
}

/// A link opening in a new tab, followed by an embed placeholder for YouTube videos.
pub fn create_url_link(url: &str) -> String {
    let mut html = format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        escape_attribute(url),
        escape_html(url)
    );
    if let Some(id) = youtube_video_id(url) {
        html.push_str(&format!(
            "<span class=\"youtube-embed-placeholder\" data-video-id=\"{}\"></span>",
            id
        ));
    }
    html
}

/// Wikipedia article slug for a rendered title: tags stripped, spaces to underscores,
/// percent-encoded except for `/` and `:`, which article paths keep literal.
pub fn wikipedia_slug(title_html: &str) -> String {
    let title = unescape_html(&strip_tags(title_html));
    let title = title.trim().replace(' ', "_");

    let mut slug = String::with_capacity(title.len());
    let mut rest = title.as_str();
    while let Some(index) = rest.find(&['/', ':'][..]) {
        slug.extend(url::form_urlencoded::byte_serialize(rest[..index].as_bytes()));
        slug.push_str(&rest[index..index + 1]);
        rest = &rest[index + 1..];
    }
    slug.extend(url::form_urlencoded::byte_serialize(rest.as_bytes()));
    slug
}

pub fn create_wikilink(title_html: &str) -> String {
    format!(
        "<a href=\"{}{}\" class=\"wikilink\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        WIKIPEDIA_BASE,
        wikipedia_slug(title_html),
        title_html
    )
}

/// Chinese text with pinyin and definition attributes from the annotator.
pub fn create_chinese_annotation(hanzi: &str, annotator: Option<&dyn ChineseAnnotator>) -> String {
    let text = escape_html(hanzi);
    let Some(annotator) = annotator else {
        return format!("<span class=\"annotated-chinese\">{}</span>", text);
    };

    match annotator.lookup(hanzi) {
        Ok(Some(annotation)) => {
            let mut attributes = String::new();
            if let Some(pinyin) = annotation.pinyin.as_deref().filter(|p| !p.is_empty()) {
                attributes.push_str(&format!(" data-pinyin=\"{}\"", escape_attribute(pinyin)));
            }
            if let Some(definition) = annotation.definition.as_deref().filter(|d| !d.is_empty()) {
                attributes.push_str(&format!(
                    " data-definition=\"{}\"",
                    escape_attribute(definition)
                ));
            }
            format!("<span class=\"annotated-chinese\"{}>{}</span>", attributes, text)
        }
        Ok(None) => format!("<span class=\"annotated-chinese\">{}</span>", text),
        Err(err) => {
            tracing::debug!(%err, hanzi, "chinese annotation unavailable");
            format!(
                "<span class=\"annotated-chinese\" data-error=\"annotation-unavailable\">{}</span>",
                text
            )
        }
    }
}

pub fn create_list_item(content: &str) -> String {
    format!("<li>{}</li>", content)
}

/// Wrap rendered `<li>` items in the container for their marker type.
pub fn create_list_container(marker_type: MarkerType, items: &[String]) -> String {
    let (open, close) = match marker_type {
        MarkerType::Bullet => ("<ul>", "</ul>"),
        MarkerType::Number => ("<ol>", "</ol>"),
        MarkerType::Arrow => ("<ul class=\"arrow-list\">", "</ul>"),
    };
    format!("{}\n{}\n{}", open, items.join("\n"), close)
}

/// A collapsible multi-line quote. `paragraphs` are rendered paragraph bodies.
pub fn create_mlq_block(paragraphs: &[String], color: Option<ColorName>) -> String {
    let (class, sigil) = match color {
        Some(color) => (format!("mlq color-{}", color.css_class()), color.sigil()),
        None => ("mlq".to_string(), DEFAULT_MLQ_SIGIL),
    };

    let body: Vec<String> = paragraphs
        .iter()
        .map(|paragraph| format!("<p>{}</p>", paragraph))
        .collect();

    format!(
        "<div class=\"{}\">\n<button type=\"button\" class=\"mlq-collapse\" aria-label=\"Toggle quote\"><span class=\"mlq-collapse-icon\">{}</span></button>\n<div class=\"mlq-content\">\n{}\n</div>\n</div>",
        class,
        sigil,
        body.join("\n")
    )
}

pub fn create_literal_text(content: &str) -> String {
    format!("<span class=\"literal-text\">{}</span>", content)
}

pub fn create_emphasis(raw: &str) -> String {
    format!("<em>{}</em>", escape_html(raw))
}

pub fn create_inline_title(content: &str) -> String {
    format!("<span class=\"inline-title\">{}</span>", content)
}

pub fn create_private_text(content: &str) -> String {
    format!("<span class=\"private-text\">{}</span>", content)
}

/// Render a `{{name: raw}}` template.
///
/// `pgn` renders a chess board, `isbn` and `wikidata` link out when the value looks right,
/// everything else is a span classed by name.
pub fn create_template(name: Option<&str>, raw: &str) -> String {
    match name {
        Some("pgn") => return fen_to_board(raw),
        Some("isbn") => {
            let isbn: String = raw
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == 'X' || *c == 'x')
                .collect();
            if isbn.len() == 10 || isbn.len() == 13 {
                return format!(
                    "<a class=\"template template-isbn\" href=\"{}{}\" target=\"_blank\" rel=\"noopener noreferrer\">ISBN {}</a>",
                    OPEN_LIBRARY_BASE,
                    isbn,
                    escape_html(raw)
                );
            }
        }
        Some("wikidata") if WIKIDATA_ID.is_match(raw) => {
            return format!(
                "<a class=\"template template-wikidata\" href=\"{}{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                WIKIDATA_BASE, raw, raw
            );
        }
        _ => {}
    }

    match name {
        Some(name) => format!(
            "<span class=\"template template-{}\">{}</span>",
            escape_attribute(name),
            escape_html(raw)
        ),
        None => format!("<span class=\"template\">{}</span>", escape_html(raw)),
    }
}
