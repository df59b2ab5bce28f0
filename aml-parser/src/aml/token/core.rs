//! Core token definitions
//!
//! `RawToken` is defined with the logos derive macro. Anything logos cannot match (an unknown
//! `<tag>`, a lone `-`, a stray `[`) comes back as an error from the lexer and is turned into
//! text by the tokenizer, so no input is ever rejected.

use crate::aml::ast::MarkerType;
use crate::aml::colors::ColorName;
use logos::Logos;
use serde::Serialize;
use std::ops::Range;

/// Tokens as produced by logos, before line-start classification.
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum RawToken {
    #[regex(r"\r?\n")]
    Newline,

    #[regex(r"[ \t]+")]
    Whitespace,

    // Private blocks, checked before the plain angle delimiters by virtue of being longer
    #[token("<<<PRIVATE:")]
    PrivateOpenTriple,
    #[token("<<PRIVATE:")]
    PrivateOpen,

    #[token("<<<")]
    MlqOpen,
    #[token(">>>")]
    MlqClose,
    #[token("<<")]
    LiteralOpen,
    #[token(">>")]
    LiteralClose,

    // Only names from the color table; `<b>` fails the callback and degrades to text
    #[regex(r"<[a-z]+>", |lex| ColorName::from_tag(lex.slice()))]
    ColorTag(ColorName),

    #[regex(r"----+")]
    Rule,
    #[token("--MORE--")]
    MoreTag,

    #[token("[[")]
    WikilinkOpen,
    #[token("]]")]
    WikilinkClose,
    #[token("[#")]
    TitleOpen,
    #[token("#]")]
    TitleClose,

    #[regex(r"\{\{[^{}]*\}\}")]
    Template,

    // No space right after the opening star, never across lines
    #[regex(r"\*[^*\s][^*\n]*\*")]
    Emphasis,

    #[token("*")]
    Star,
    #[token("#")]
    Hash,
    #[token(">")]
    Gt,

    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,

    #[regex(r"(https?|ftp)://[^\s<>()\[\]{}]+", priority = 10)]
    Url,

    #[regex(r"[\x{3400}-\x{4DBF}\x{4E00}-\x{9FFF}\x{F900}-\x{FAFF}]+")]
    Chinese,

    #[regex(r"[^\s<>\[\]{}()*#\-\x{3400}-\x{4DBF}\x{4E00}-\x{9FFF}\x{F900}-\x{FAFF}]+")]
    Text,
}

/// Classified token kinds, as seen by the parser.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TokenKind {
    ColorTag(ColorName),
    MlqOpen,
    MlqClose,
    LiteralOpen,
    LiteralClose,
    PrivateOpen { triple: bool },
    ListMarker(MarkerType),
    HorizontalRule,
    MoreTag,
    WikilinkOpen,
    WikilinkClose,
    TitleOpen,
    TitleClose,
    Emphasis,
    Template,
    Chinese,
    Url,
    OpenParen,
    CloseParen,
    Newline,
    Whitespace,
    Text,
}

impl TokenKind {
    pub fn is_whitespace(&self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }

    pub fn is_newline(&self) -> bool {
        matches!(self, TokenKind::Newline)
    }

    /// Short name used by the simple token format.
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::ColorTag(_) => "color-tag",
            TokenKind::MlqOpen => "mlq-open",
            TokenKind::MlqClose => "mlq-close",
            TokenKind::LiteralOpen => "literal-open",
            TokenKind::LiteralClose => "literal-close",
            TokenKind::PrivateOpen { .. } => "private-open",
            TokenKind::ListMarker(_) => "list-marker",
            TokenKind::HorizontalRule => "hr",
            TokenKind::MoreTag => "more",
            TokenKind::WikilinkOpen => "wikilink-open",
            TokenKind::WikilinkClose => "wikilink-close",
            TokenKind::TitleOpen => "title-open",
            TokenKind::TitleClose => "title-close",
            TokenKind::Emphasis => "emphasis",
            TokenKind::Template => "template",
            TokenKind::Chinese => "chinese",
            TokenKind::Url => "url",
            TokenKind::OpenParen => "paren-open",
            TokenKind::CloseParen => "paren-close",
            TokenKind::Newline => "newline",
            TokenKind::Whitespace => "ws",
            TokenKind::Text => "text",
        }
    }
}

/// A classified token with its source text and byte range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub raw: String,
    /// True for the first non-whitespace token of a line.
    pub line_start: bool,
    pub position: Range<usize>,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        raw: impl Into<String>,
        line_start: bool,
        position: Range<usize>,
    ) -> Self {
        Token {
            kind,
            raw: raw.into(),
            line_start,
            position,
        }
    }
}

/// Split the inside of a `{{ … }}` template into its optional name and content.
///
/// `{{pgn: 8/8/...}}` gives `(Some("pgn"), "8/8/...")`. Without a colon, or when the part
/// before the colon is not a plain identifier (a URL, a sentence), the whole content is
/// returned unnamed.
pub fn split_template(raw: &str) -> (Option<&str>, &str) {
    let inner = raw
        .strip_prefix("{{")
        .and_then(|rest| rest.strip_suffix("}}"))
        .unwrap_or(raw);

    if let Some((name, content)) = inner.split_once(':') {
        let name = name.trim();
        let is_identifier = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if is_identifier {
            return (Some(name), content.trim());
        }
    }
    (None, inner.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_tokens(source: &str) -> Vec<Result<RawToken, ()>> {
        RawToken::lexer(source).collect()
    }

    #[test]
    fn test_color_tag() {
        assert_eq!(raw_tokens("<red>"), vec![Ok(RawToken::ColorTag(ColorName::Red))]);
    }

    #[test]
    fn test_unknown_color_tag_is_an_error() {
        assert!(raw_tokens("<purple>").iter().any(|t| t.is_err()));
    }

    #[test]
    fn test_angle_delimiters_prefer_longest() {
        assert_eq!(
            raw_tokens("<<< << >> >>>"),
            vec![
                Ok(RawToken::MlqOpen),
                Ok(RawToken::Whitespace),
                Ok(RawToken::LiteralOpen),
                Ok(RawToken::Whitespace),
                Ok(RawToken::LiteralClose),
                Ok(RawToken::Whitespace),
                Ok(RawToken::MlqClose),
            ]
        );
    }

    #[test]
    fn test_private_open() {
        assert_eq!(raw_tokens("<<PRIVATE:"), vec![Ok(RawToken::PrivateOpen)]);
        assert_eq!(raw_tokens("<<<PRIVATE:"), vec![Ok(RawToken::PrivateOpenTriple)]);
    }

    #[test]
    fn test_url_wins_over_text() {
        assert_eq!(raw_tokens("https://example.com/a"), vec![Ok(RawToken::Url)]);
    }

    #[test]
    fn test_emphasis_and_star() {
        assert_eq!(raw_tokens("*word*"), vec![Ok(RawToken::Emphasis)]);
        assert_eq!(
            raw_tokens("* item"),
            vec![Ok(RawToken::Star), Ok(RawToken::Whitespace), Ok(RawToken::Text)]
        );
    }

    #[test]
    fn test_chinese_run_is_separate_from_text() {
        assert_eq!(
            raw_tokens("hi你好"),
            vec![Ok(RawToken::Text), Ok(RawToken::Chinese)]
        );
    }

    #[test]
    fn test_template_spans_whole_braces() {
        assert_eq!(raw_tokens("{{pgn: 8/8}}"), vec![Ok(RawToken::Template)]);
    }

    #[test]
    fn test_split_template() {
        assert_eq!(split_template("{{pgn: 8/8/8}}"), (Some("pgn"), "8/8/8"));
        assert_eq!(split_template("{{ just text }}"), (None, "just text"));
        assert_eq!(
            split_template("{{see https://x.org}}"),
            (None, "see https://x.org")
        );
    }
}
