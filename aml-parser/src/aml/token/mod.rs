//! Token types for the aml lexer
//!
//!     There are two token layers. [`RawToken`](core::RawToken) is what logos produces: it knows
//!     nothing about lines, so `*`, `#` and `>` are just characters. [`Token`] is the result of the
//!     line-start transformation, which decides whether those characters open a list item, whether
//!     `----` is a rule, and records for every token whether it is the first thing on its line.
//!
//!     The parser only ever sees [`Token`].

pub mod core;
pub mod formatting;

pub use self::core::{RawToken, Token, TokenKind};
pub use formatting::{detokenize, tokens_to_simple};
