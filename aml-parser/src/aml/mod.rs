//! Main module for aml library functionality

pub mod ast;
pub mod colors;
pub mod formats;
pub mod lexing;
pub mod loader;
pub mod parsing;
pub mod token;

pub use ast::{MarkerType, Node, NodeType};
pub use colors::ColorName;
pub use lexing::tokenize;
pub use parsing::{parse, parse_document};
pub use token::{Token, TokenKind};
