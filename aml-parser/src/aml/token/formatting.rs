//! String views of token streams
//!
//! - [`detokenize`] converts a token stream back to source text. Tokens carry their raw slice,
//!   so this is exact: `detokenize(&tokenize(s)) == s` for every input.
//! - [`tokens_to_simple`] prints one `<kind>` tag per token followed by its text, which is what
//!   the `token-simple` inspect format shows.

use super::core::{Token, TokenKind};
use crate::aml::ast::MarkerType;

/// Rebuild source text from tokens.
pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(|token| token.raw.as_str()).collect()
}

/// Format tokens as `<kind>text` pairs, one line of output per source line.
pub fn tokens_to_simple(tokens: &[Token]) -> String {
    let mut output = String::new();
    for token in tokens {
        output.push('<');
        output.push_str(token.kind.label());
        match &token.kind {
            TokenKind::ColorTag(color) => {
                output.push(':');
                output.push_str(color.name());
            }
            TokenKind::ListMarker(marker) => {
                output.push(':');
                output.push_str(marker_label(*marker));
            }
            _ => {}
        }
        if token.line_start {
            output.push('^');
        }
        output.push('>');

        match token.kind {
            TokenKind::Newline => output.push('\n'),
            _ => output.push_str(&token.raw),
        }
    }
    output
}

fn marker_label(marker: MarkerType) -> &'static str {
    match marker {
        MarkerType::Bullet => "bullet",
        MarkerType::Number => "number",
        MarkerType::Arrow => "arrow",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aml::lexing::tokenize;

    #[test]
    fn test_detokenize_round_trip() {
        let source = "<red> <<< quote >>>\n* item with *emphasis*\n----\n";
        assert_eq!(detokenize(&tokenize(source)), source);
    }

    #[test]
    fn test_simple_format_marks_line_starts() {
        let simple = tokens_to_simple(&tokenize("<red> hi"));
        insta::assert_snapshot!(simple, @"<color-tag:red^><red><ws> <text>hi");
    }
}
