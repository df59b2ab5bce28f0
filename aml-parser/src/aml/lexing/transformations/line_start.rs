//! Line-start classification
//!
//!     Converts raw logos tokens into classified [`Token`]s. The only state carried across
//!     tokens is whether anything other than whitespace has been seen on the current line.
//!
//!     Rules, applied to the first non-whitespace token of a line:
//!
//!         - `*`, `#`, `>` followed by whitespace become bullet, number and arrow list markers
//!         - `----` (or longer) becomes a rule if nothing but whitespace follows on the line
//!         - `--MORE--` becomes a more tag
//!
//!     Anywhere else those tokens are text. Text tokens that end up adjacent (including slices
//!     logos could not match) are merged into a single run.

use crate::aml::ast::MarkerType;
use crate::aml::token::{RawToken, Token, TokenKind};
use std::ops::Range;

/// Classify raw tokens, tracking line starts and merging text runs.
pub fn classify_lines(source: &str, raw: Vec<(RawToken, Range<usize>)>) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::with_capacity(raw.len());
    let mut at_line_start = true;

    for (index, (raw_token, span)) in raw.iter().enumerate() {
        let text = &source[span.clone()];
        let is_blank = matches!(raw_token, RawToken::Whitespace | RawToken::Newline);
        let line_start = at_line_start && !is_blank;

        let kind = match raw_token {
            RawToken::Newline => TokenKind::Newline,
            RawToken::Whitespace => TokenKind::Whitespace,
            RawToken::PrivateOpenTriple => TokenKind::PrivateOpen { triple: true },
            RawToken::PrivateOpen => TokenKind::PrivateOpen { triple: false },
            RawToken::MlqOpen => TokenKind::MlqOpen,
            RawToken::MlqClose => TokenKind::MlqClose,
            RawToken::LiteralOpen => TokenKind::LiteralOpen,
            RawToken::LiteralClose => TokenKind::LiteralClose,
            RawToken::ColorTag(color) => TokenKind::ColorTag(*color),
            RawToken::Rule if line_start && rest_of_line_is_blank(&raw, index + 1) => {
                TokenKind::HorizontalRule
            }
            RawToken::MoreTag if line_start => TokenKind::MoreTag,
            RawToken::WikilinkOpen => TokenKind::WikilinkOpen,
            RawToken::WikilinkClose => TokenKind::WikilinkClose,
            RawToken::TitleOpen => TokenKind::TitleOpen,
            RawToken::TitleClose => TokenKind::TitleClose,
            RawToken::Template => TokenKind::Template,
            RawToken::Emphasis => TokenKind::Emphasis,
            RawToken::Star | RawToken::Hash | RawToken::Gt
                if line_start && followed_by_whitespace(&raw, index + 1) =>
            {
                TokenKind::ListMarker(marker_for(raw_token))
            }
            RawToken::OpenParen => TokenKind::OpenParen,
            RawToken::CloseParen => TokenKind::CloseParen,
            RawToken::Url => TokenKind::Url,
            RawToken::Chinese => TokenKind::Chinese,
            RawToken::Rule
            | RawToken::MoreTag
            | RawToken::Star
            | RawToken::Hash
            | RawToken::Gt
            | RawToken::Text => TokenKind::Text,
        };

        push_merging_text(&mut tokens, Token::new(kind, text, line_start, span.clone()));

        match raw_token {
            RawToken::Newline => at_line_start = true,
            RawToken::Whitespace => {}
            _ => at_line_start = false,
        }
    }

    tokens
}

fn marker_for(token: &RawToken) -> MarkerType {
    match token {
        RawToken::Hash => MarkerType::Number,
        RawToken::Gt => MarkerType::Arrow,
        _ => MarkerType::Bullet,
    }
}

fn followed_by_whitespace(raw: &[(RawToken, Range<usize>)], next: usize) -> bool {
    matches!(raw.get(next), Some((RawToken::Whitespace, _)))
}

fn rest_of_line_is_blank(raw: &[(RawToken, Range<usize>)], from: usize) -> bool {
    raw[from..]
        .iter()
        .take_while(|(token, _)| *token != RawToken::Newline)
        .all(|(token, _)| *token == RawToken::Whitespace)
}

fn push_merging_text(tokens: &mut Vec<Token>, token: Token) {
    if token.kind == TokenKind::Text {
        if let Some(last) = tokens.last_mut() {
            if last.kind == TokenKind::Text && last.position.end == token.position.start {
                last.raw.push_str(&token.raw);
                last.position.end = token.position.end;
                return;
            }
        }
    }
    tokens.push(token);
}

#[cfg(test)]
mod tests {
    use crate::aml::ast::MarkerType;
    use crate::aml::colors::ColorName;
    use crate::aml::lexing::tokenize;
    use crate::aml::token::TokenKind;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_list_markers_at_line_start() {
        assert_eq!(
            kinds("* a\n# b\n> c"),
            vec![
                TokenKind::ListMarker(MarkerType::Bullet),
                TokenKind::Whitespace,
                TokenKind::Text,
                TokenKind::Newline,
                TokenKind::ListMarker(MarkerType::Number),
                TokenKind::Whitespace,
                TokenKind::Text,
                TokenKind::Newline,
                TokenKind::ListMarker(MarkerType::Arrow),
                TokenKind::Whitespace,
                TokenKind::Text,
            ]
        );
    }

    #[test]
    fn test_markers_mid_line_are_text() {
        let tokens = tokenize("a * b # c");
        assert!(!tokens
            .iter()
            .any(|t| matches!(t.kind, TokenKind::ListMarker(_))));
    }

    #[test]
    fn test_marker_without_space_is_text() {
        assert_eq!(kinds("#hashtag"), vec![TokenKind::Text]);
    }

    #[test]
    fn test_rule_only_when_alone() {
        assert_eq!(
            kinds("----\n---- x"),
            vec![
                TokenKind::HorizontalRule,
                TokenKind::Newline,
                TokenKind::Text,
                TokenKind::Whitespace,
                TokenKind::Text,
            ]
        );
        assert_eq!(kinds("  ------  "), vec![
            TokenKind::Whitespace,
            TokenKind::HorizontalRule,
            TokenKind::Whitespace,
        ]);
    }

    #[test]
    fn test_more_tag_only_at_line_start() {
        assert_eq!(kinds("--MORE--"), vec![TokenKind::MoreTag]);
        assert_eq!(
            kinds("x --MORE--"),
            vec![TokenKind::Text, TokenKind::Whitespace, TokenKind::Text]
        );
    }

    #[test]
    fn test_color_tag_line_start_flag() {
        let tokens = tokenize("<red> a <blue>\n  <green>");
        let tags: Vec<(ColorName, bool)> = tokens
            .iter()
            .filter_map(|t| match t.kind {
                TokenKind::ColorTag(color) => Some((color, t.line_start)),
                _ => None,
            })
            .collect();
        assert_eq!(
            tags,
            vec![
                (ColorName::Red, true),
                (ColorName::Blue, false),
                (ColorName::Green, true),
            ]
        );
    }

    #[test]
    fn test_colored_mlq_tokens() {
        assert_eq!(
            kinds("<red> <<< x >>>"),
            vec![
                TokenKind::ColorTag(ColorName::Red),
                TokenKind::Whitespace,
                TokenKind::MlqOpen,
                TokenKind::Whitespace,
                TokenKind::Text,
                TokenKind::Whitespace,
                TokenKind::MlqClose,
            ]
        );
    }
}
