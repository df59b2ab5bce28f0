//! AST Snapshot - a normalized view of the tree for formatters
//!
//! Formatters (treeviz and friends) consume an [`AstSnapshot`] instead of matching on [`Node`]
//! themselves, so traversal and labelling live in one place.

use super::node::{MarkerType, Node, NodeType};
use serde::Serialize;
use std::collections::BTreeMap;

/// A snapshot of an AST node in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AstSnapshot {
    pub node_type: String,

    /// The primary label or text content of the node
    pub label: String,

    /// Node specific attributes (color, marker type, template name)
    pub attributes: BTreeMap<String, String>,

    pub children: Vec<AstSnapshot>,
}

impl AstSnapshot {
    pub fn new(node_type: NodeType, label: impl Into<String>) -> Self {
        Self {
            node_type: node_type.to_string(),
            label: label.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    pub fn with_children(mut self, children: Vec<AstSnapshot>) -> Self {
        self.children.extend(children);
        self
    }
}

/// Build a snapshot of a node and all its descendants.
pub fn snapshot_from_node(node: &Node) -> AstSnapshot {
    let children = node.children().iter().map(snapshot_from_node).collect();

    let snapshot = match node {
        Node::Document { children } => {
            AstSnapshot::new(NodeType::Document, format!("{} nodes", children.len()))
        }
        Node::Text { value, children } if value.is_empty() && !children.is_empty() => {
            AstSnapshot::new(NodeType::Text, node.plain_text())
        }
        Node::Text { value, .. } => AstSnapshot::new(NodeType::Text, value.clone()),
        Node::Newline => AstSnapshot::new(NodeType::Newline, ""),
        Node::Hr => AstSnapshot::new(NodeType::Hr, "----"),
        Node::MoreTag => AstSnapshot::new(NodeType::MoreTag, "--MORE--"),
        Node::ListItem { marker_type, .. } => {
            let marker = match marker_type {
                MarkerType::Bullet => "bullet",
                MarkerType::Number => "number",
                MarkerType::Arrow => "arrow",
            };
            AstSnapshot::new(NodeType::ListItem, node.plain_text())
                .with_attribute("marker", marker)
        }
        Node::Mlq { color, .. } => {
            let snapshot = AstSnapshot::new(NodeType::Mlq, node.plain_text());
            match color {
                Some(color) => snapshot
                    .with_attribute("color", color.name())
                    .with_attribute("role", color.description()),
                None => snapshot,
            }
        }
        Node::ColorBlock { color, is_line, .. } => {
            AstSnapshot::new(NodeType::ColorBlock, node.plain_text())
                .with_attribute("color", color.name())
                .with_attribute("is_line", is_line.to_string())
                .with_attribute("role", color.description())
        }
        Node::Chinese { hanzi } => AstSnapshot::new(NodeType::Chinese, hanzi.clone()),
        Node::Url { raw } => AstSnapshot::new(NodeType::Url, raw.clone()),
        Node::Emphasis { raw } => AstSnapshot::new(NodeType::Emphasis, raw.clone()),
        Node::Template { template_name, raw } => {
            let snapshot = AstSnapshot::new(NodeType::Template, raw.clone());
            match template_name {
                Some(name) => snapshot.with_attribute("name", name.clone()),
                None => snapshot,
            }
        }
        Node::Wikilink { .. } | Node::Literal { .. } | Node::Title { .. } | Node::Private { .. } => {
            AstSnapshot::new(node.node_type(), node.plain_text())
        }
    };

    snapshot.with_children(children)
}
