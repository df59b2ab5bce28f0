//! Lexing for the aml format
//!
//!     Tokenization runs in two passes:
//!
//!     1. Core tokenization: a vanilla logos lexer over the whole source. Errors are not
//!        dropped, the slice logos could not match becomes a text token. This keeps the stream
//!        lossless and implements the rule that unknown sigils are just text.
//!     2. Line classification: AML is line sensitive. `* `, `# ` and `> ` only start list items
//!        at the beginning of a line, `----` is only a rule when it stands alone, and the parser
//!        needs to know whether a color tag is the first thing on its line. This pass walks the
//!        raw tokens once, classifies them, and merges adjacent text.
//!
//!     Keeping the line logic out of the logos definitions means the lexer itself has no custom
//!     code, which makes both passes easy to test on their own.

pub mod transformations;

use crate::aml::token::{RawToken, Token};
use logos::Logos;
use std::ops::Range;

pub use transformations::line_start::classify_lines;

/// Run logos over the source. Unmatched slices come back as `RawToken::Text`.
pub fn core_tokenize(source: &str) -> Vec<(RawToken, Range<usize>)> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) => {
                tracing::trace!(slice = lexer.slice(), "unrecognized sigil degraded to text");
                tokens.push((RawToken::Text, span));
            }
        }
    }

    tokens
}

/// Full tokenization: core tokens plus line classification.
pub fn tokenize(source: &str) -> Vec<Token> {
    let raw = core_tokenize(source);
    let tokens = classify_lines(source, raw);
    tracing::debug!(bytes = source.len(), tokens = tokens.len(), "tokenized aml source");
    tokens
}
