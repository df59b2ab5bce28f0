//! Token stream transformations applied after core tokenization
//!
//! Currently a single pass, see [line_start].

pub mod line_start;
