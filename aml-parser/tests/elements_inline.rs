//! Inline and line-level elements through the full tokenize + parse pipeline

use aml_parser::aml::loader::DocumentLoader;
use aml_parser::aml::{parse_document, ColorName, MarkerType, Node, NodeType};
use rstest::rstest;

fn children(source: &str) -> Vec<Node> {
    parse_document(source).children().to_vec()
}

#[rstest]
#[case("* item", MarkerType::Bullet)]
#[case("# item", MarkerType::Number)]
#[case("> item", MarkerType::Arrow)]
fn test_list_markers(#[case] source: &str, #[case] marker: MarkerType) {
    assert_eq!(
        children(source),
        vec![Node::ListItem {
            marker_type: marker,
            children: vec![Node::text("item")],
        }]
    );
}

#[test]
fn test_list_item_with_inline_color() {
    assert_eq!(
        children("* plain <red> loud"),
        vec![Node::ListItem {
            marker_type: MarkerType::Bullet,
            children: vec![
                Node::text("plain "),
                Node::ColorBlock {
                    color: ColorName::Red,
                    is_line: true,
                    children: vec![Node::text("loud")],
                },
            ],
        }]
    );
}

#[test]
fn test_aside_inside_color_line() {
    assert_eq!(
        children("<gray> once (<hazel> as told) upon"),
        vec![Node::ColorBlock {
            color: ColorName::Gray,
            is_line: true,
            children: vec![
                Node::text("once "),
                Node::ColorBlock {
                    color: ColorName::Hazel,
                    is_line: false,
                    children: vec![Node::text("as told")],
                },
                Node::text(" upon"),
            ],
        }]
    );
}

#[test]
fn test_unclosed_aside_ends_at_line_end() {
    assert_eq!(
        children("(<blue> open\nnext"),
        vec![
            Node::ColorBlock {
                color: ColorName::Blue,
                is_line: false,
                children: vec![Node::text("open")],
            },
            Node::Newline,
            Node::text("next"),
        ]
    );
}

#[test]
fn test_unknown_tags_stay_text() {
    assert_eq!(children("<b>bold</b>"), vec![Node::text("<b>bold</b>")]);
}

#[rstest]
#[case("a * b", "a * b")]
#[case("#hashtag", "#hashtag")]
#[case("x ---- y", "x ---- y")]
#[case("[[no close", "[[no close")]
#[case("[# no close", "[# no close")]
#[case("{ not a template }", "{ not a template }")]
#[case("a >> b", "a >> b")]
fn test_degrades_to_text(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(children(source), vec![Node::text(expected)]);
}

#[test]
fn test_private_triple_form() {
    assert_eq!(
        children("<<<PRIVATE: hidden *note* >>>"),
        vec![Node::Private {
            children: vec![Node::text("hidden "), Node::Emphasis { raw: "note".into() }],
        }]
    );
}

#[test]
fn test_unclosed_private_is_text() {
    assert_eq!(
        children("<<PRIVATE: dangling"),
        vec![Node::text("<<PRIVATE: dangling")]
    );
}

#[test]
fn test_template_name_must_be_identifier() {
    assert_eq!(
        children("{{see also: foo}}"),
        vec![Node::Template {
            template_name: None,
            raw: "see also: foo".into(),
        }]
    );
}

#[test]
fn test_url_and_wikilink_in_mlq() {
    let doc = parse_document("<<< read https://example.com/a?b=c\nand [[Rust]] >>>");
    assert_eq!(doc.count(NodeType::Mlq), 1);
    assert_eq!(doc.count(NodeType::Url), 1);
    assert_eq!(doc.count(NodeType::Wikilink), 1);
    assert_eq!(doc.count(NodeType::Newline), 1);
}

#[test]
fn test_rule_and_more_inside_mlq_are_text() {
    let doc = parse_document("<<<\n----\n--MORE--\n>>>");
    assert_eq!(doc.count(NodeType::Hr), 0);
    assert_eq!(doc.count(NodeType::MoreTag), 0);
    assert_eq!(doc.count(NodeType::Mlq), 1);
}

#[test]
fn test_multiline_document() {
    let source = "Intro line\n\n* first\n* second\n----\n<yellow> a quote\n--MORE--\nrest";
    let doc = DocumentLoader::from_string(source).parse();
    assert_eq!(doc.count(NodeType::ListItem), 2);
    assert_eq!(doc.count(NodeType::Hr), 1);
    assert_eq!(doc.count(NodeType::MoreTag), 1);
    assert_eq!(doc.count(NodeType::ColorBlock), 1);
    assert_eq!(doc.count(NodeType::Newline), 7);
}
