//! Node definitions

use crate::aml::colors::ColorName;
use serde::Serialize;
use std::fmt;

/// List marker kinds: `*` bullets, `#` numbers, `>` arrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerType {
    Bullet,
    Number,
    Arrow,
}

/// An AML syntax tree node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Document {
        children: Vec<Node>,
    },
    /// Plain text. `children` is only used for parenthetical groups that contain markup.
    Text {
        value: String,
        children: Vec<Node>,
    },
    Newline,
    Hr,
    MoreTag,
    ListItem {
        marker_type: MarkerType,
        children: Vec<Node>,
    },
    /// Multi-line quote. `color` is set only when a line-start color tag directly precedes it.
    Mlq {
        children: Vec<Node>,
        color: Option<ColorName>,
    },
    /// `is_line` is true for tags coloring the rest of a line, false for `(<color> asides)`.
    ColorBlock {
        color: ColorName,
        is_line: bool,
        children: Vec<Node>,
    },
    Chinese {
        hanzi: String,
    },
    Url {
        raw: String,
    },
    Wikilink {
        children: Vec<Node>,
    },
    Literal {
        children: Vec<Node>,
    },
    Emphasis {
        raw: String,
    },
    Title {
        children: Vec<Node>,
    },
    Template {
        template_name: Option<String>,
        raw: String,
    },
    Private {
        children: Vec<Node>,
    },
}

/// Payload-free node discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Document,
    Text,
    Newline,
    Hr,
    MoreTag,
    ListItem,
    Mlq,
    ColorBlock,
    Chinese,
    Url,
    Wikilink,
    Literal,
    Emphasis,
    Title,
    Template,
    Private,
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text {
            value: value.into(),
            children: Vec::new(),
        }
    }

    pub fn node_type(&self) -> NodeType {
        match self {
            Node::Document { .. } => NodeType::Document,
            Node::Text { .. } => NodeType::Text,
            Node::Newline => NodeType::Newline,
            Node::Hr => NodeType::Hr,
            Node::MoreTag => NodeType::MoreTag,
            Node::ListItem { .. } => NodeType::ListItem,
            Node::Mlq { .. } => NodeType::Mlq,
            Node::ColorBlock { .. } => NodeType::ColorBlock,
            Node::Chinese { .. } => NodeType::Chinese,
            Node::Url { .. } => NodeType::Url,
            Node::Wikilink { .. } => NodeType::Wikilink,
            Node::Literal { .. } => NodeType::Literal,
            Node::Emphasis { .. } => NodeType::Emphasis,
            Node::Title { .. } => NodeType::Title,
            Node::Template { .. } => NodeType::Template,
            Node::Private { .. } => NodeType::Private,
        }
    }

    /// Child nodes, empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Document { children }
            | Node::Text { children, .. }
            | Node::ListItem { children, .. }
            | Node::Mlq { children, .. }
            | Node::ColorBlock { children, .. }
            | Node::Wikilink { children }
            | Node::Literal { children }
            | Node::Title { children }
            | Node::Private { children } => children,
            Node::Newline
            | Node::Hr
            | Node::MoreTag
            | Node::Chinese { .. }
            | Node::Url { .. }
            | Node::Emphasis { .. }
            | Node::Template { .. } => &[],
        }
    }

    /// Text content with all markup removed.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text { value, children } => {
                out.push_str(value);
                children.iter().for_each(|child| child.collect_text(out));
            }
            Node::Newline => out.push('\n'),
            Node::Hr | Node::MoreTag => {}
            Node::Chinese { hanzi } => out.push_str(hanzi),
            Node::Url { raw } | Node::Emphasis { raw } | Node::Template { raw, .. } => {
                out.push_str(raw)
            }
            other => other
                .children()
                .iter()
                .for_each(|child| child.collect_text(out)),
        }
    }

    /// Walk the subtree depth first, parents before children.
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Node)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }

    /// Count nodes of a given type anywhere in the subtree, including this node.
    pub fn count(&self, node_type: NodeType) -> usize {
        let mut total = 0;
        self.walk(&mut |node| {
            if node.node_type() == node_type {
                total += 1;
            }
        });
        total
    }
}
