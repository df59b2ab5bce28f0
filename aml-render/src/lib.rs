//! HTML rendering for the Atacama Markup Language
//!
//!     Takes the trees built by `aml-parser` and produces HTML fragments.
//!
//!     Layout:
//!
//!         - html: the generator and its document-level layout
//!         - colorblocks: stateless fragment templates (color blocks, links, MLQs, templates)
//!         - chess: FEN validation and board rendering for `{{pgn: ..}}`
//!         - annotations: Chinese and English dictionaries
//!         - quotes: capture of yellow/quote blocks
//!         - escape: HTML escaping helpers
//!
//!     The quickest way in is [`render_source`]:
//!
//!         let html = aml_render::render_source("<red> certain", &RenderOptions::default());

pub mod annotations;
pub mod chess;
pub mod colorblocks;
pub mod escape;
pub mod html;
pub mod quotes;

pub use html::{render, render_source, HtmlGenerator, RenderOptions};
