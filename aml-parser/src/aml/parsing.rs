//! Parsing
//!
//! Turns the classified token stream into a [`Node::Document`]. The parser never fails: any
//! input, however malformed, yields a document.

pub mod parser;

pub use parser::Parser;

use crate::aml::ast::Node;
use crate::aml::lexing::tokenize;
use crate::aml::token::Token;

/// Parse a token stream into a document.
pub fn parse(tokens: Vec<Token>) -> Node {
    let count = tokens.len();
    let document = Parser::new(tokens).parse();
    tracing::debug!(tokens = count, nodes = document.children().len(), "parsed document");
    document
}

/// Tokenize and parse source text.
pub fn parse_document(source: &str) -> Node {
    parse(tokenize(source))
}
