//! # aml
//!
//! A parser for the Atacama Markup Language (AML).
//!
//! File Layout
//!
//!     The pipeline runs leaves first, and each stage lives in its own module:
//!
//!     src/aml
//!       ├── colors      The fixed semantic color table
//!       ├── token       Token types and their string formatting
//!       ├── lexing      logos tokenizer + line-start transformation
//!       ├── ast         The Node tree and snapshots used by formatters
//!       ├── parsing     Recursive descent from tokens to a Document
//!       ├── formats     treeviz / json / yaml views of the AST
//!       └── loader      Loading sources from strings or files
//!
//!     Rendering to HTML is not done here, see the `aml-render` crate. The contract of this
//!     crate is: any string in, one Document out. There is no parse error, unknown markup
//!     degrades to text.

#![allow(rustdoc::invalid_html_tags)]

pub mod aml;
