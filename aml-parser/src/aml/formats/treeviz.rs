//! Treeviz formatter for AML trees
//!
//! One line per node, nesting drawn with box connectors, so a document can be scanned the
//! same way it reads top to bottom.
//!
//! Format:
//!     <prefix><connector> <icon> <label> (label truncated to 30 characters)
//!
//! Example:
//!
//! ⧉ 3 nodes
//! ├─ ● hi [color=red is_line=true role=forceful, certain]
//! │ └─ ◦ hi
//! ├─ ↵
//! └─ ◦ plain
//!
//! Icons
//!     Document: ⧉
//!     Text: ◦    Newline: ↵    Hr: ―    MoreTag: ✂
//!     ListItem: •    Mlq: ◐    ColorBlock: ●
//!     Chinese: 漢    Url: ⇗    Wikilink: ⊕    Literal: ƒ
//!     Emphasis: 𝐼    Title: ⊤    Template: ⌘    Private: ⊘

use crate::aml::ast::{snapshot_from_node, AstSnapshot, Node};

const LABEL_WIDTH: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    let flat = s.replace('\n', "⏎");
    if flat.chars().count() > max_chars {
        let mut truncated = flat.chars().take(max_chars).collect::<String>();
        truncated.push('…');
        truncated
    } else {
        flat
    }
}

fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Document" => "⧉",
        "Text" => "◦",
        "Newline" => "↵",
        "Hr" => "―",
        "MoreTag" => "✂",
        "ListItem" => "•",
        "Mlq" => "◐",
        "ColorBlock" => "●",
        "Chinese" => "漢",
        "Url" => "⇗",
        "Wikilink" => "⊕",
        "Literal" => "ƒ",
        "Emphasis" => "𝐼",
        "Title" => "⊤",
        "Template" => "⌘",
        "Private" => "⊘",
        _ => "○",
    }
}

fn line_for(snapshot: &AstSnapshot) -> String {
    let icon = get_icon(&snapshot.node_type);
    let label = truncate(&snapshot.label, LABEL_WIDTH);
    let attributes: Vec<String> = snapshot
        .attributes
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect();

    let mut line = format!("{} {}", icon, label);
    if !attributes.is_empty() {
        line.push_str(&format!(" [{}]", attributes.join(" ")));
    }
    line.trim_end().to_string()
}

fn format_snapshot(snapshot: &AstSnapshot, prefix: &str, is_last: bool, output: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!("{}{} {}\n", prefix, connector, line_for(snapshot)));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let child_count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        format_snapshot(child, &child_prefix, i == child_count - 1, output);
    }
}

/// Render a node (normally a `Document`) as a treeviz string.
pub fn to_treeviz_str(node: &Node) -> String {
    let snapshot = snapshot_from_node(node);
    let mut output = format!("{}\n", line_for(&snapshot));

    let child_count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        format_snapshot(child, "", i == child_count - 1, &mut output);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aml::parsing::parse_document;

    #[test]
    fn test_treeviz_layout() {
        let doc = parse_document("<red> hi\nplain");
        insta::assert_snapshot!(to_treeviz_str(&doc), @r"
        ⧉ 3 nodes
        ├─ ● hi [color=red is_line=true role=forceful, certain]
        │ └─ ◦ hi
        ├─ ↵
        └─ ◦ plain
        ");
    }

    #[test]
    fn test_labels_are_truncated() {
        let long = "a".repeat(40);
        let output = to_treeviz_str(&parse_document(&long));
        let expected = format!("└─ ◦ {}…", "a".repeat(30));
        assert!(output.contains(&expected));
    }
}
