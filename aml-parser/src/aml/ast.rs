//! AST for aml documents
//!
//!     The tree is a closed tagged union, [`Node`], rooted at `Node::Document`. It is built once
//!     per input by the parser, never mutated, and dropped after rendering.
//!
//!     Lists are not containers here: the parser emits one `ListItem` per marker line and the
//!     HTML generator groups consecutive items. Likewise there is no paragraph node, paragraphs
//!     are assembled from the flat child sequence at render time.

pub mod node;
pub mod snapshot;

pub use node::{MarkerType, Node, NodeType};
pub use snapshot::{snapshot_from_node, AstSnapshot};
