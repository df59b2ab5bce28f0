//! Property-based tests for the tokenizer and parser
//!
//! - tokenization is lossless and spans are contiguous
//! - parsing never panics and always yields a document
//! - text content survives parsing when the input has no markup at all

use aml_parser::aml::token::detokenize;
use aml_parser::aml::{parse, parse_document, tokenize, Node};
use proptest::prelude::*;

/// Fragments biased towards AML syntax so the interesting paths get exercised
fn aml_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("<red>".to_string()),
        Just("<yellow> ".to_string()),
        Just("<nope>".to_string()),
        Just("<<<".to_string()),
        Just(">>>".to_string()),
        Just("<<".to_string()),
        Just(">>".to_string()),
        Just("<<PRIVATE:".to_string()),
        Just("(".to_string()),
        Just(")".to_string()),
        Just("[[".to_string()),
        Just("]]".to_string()),
        Just("[#".to_string()),
        Just("#]".to_string()),
        Just("{{pgn: 8/8/8/8/8/8/8/8 w}}".to_string()),
        Just("* ".to_string()),
        Just("# ".to_string()),
        Just("> ".to_string()),
        Just("----".to_string()),
        Just("--MORE--".to_string()),
        Just("\n".to_string()),
        Just("\r\n".to_string()),
        Just("你好".to_string()),
        Just("https://youtu.be/dQw4w9WgXcQ".to_string()),
        "[a-z ]{1,8}",
        "\\*[a-z]{1,5}\\*",
    ]
}

fn aml_document() -> impl Strategy<Value = String> {
    prop::collection::vec(aml_fragment(), 0..40).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn tokenize_is_lossless(source in any::<String>()) {
        let tokens = tokenize(&source);
        prop_assert_eq!(detokenize(&tokens), source.clone());

        let mut end = 0;
        for token in &tokens {
            prop_assert_eq!(token.position.start, end);
            prop_assert_eq!(&source[token.position.clone()], token.raw.as_str());
            end = token.position.end;
        }
        prop_assert_eq!(end, source.len());
    }

    #[test]
    fn tokenize_markup_is_lossless(source in aml_document()) {
        prop_assert_eq!(detokenize(&tokenize(&source)), source);
    }

    #[test]
    fn parse_never_panics(source in aml_document()) {
        let doc = parse(tokenize(&source));
        let is_document = matches!(doc, Node::Document { .. });
        prop_assert!(is_document);
    }

    #[test]
    fn parse_arbitrary_input(source in any::<String>()) {
        let doc = parse_document(&source);
        let is_document = matches!(doc, Node::Document { .. });
        prop_assert!(is_document);
    }

    #[test]
    fn plain_words_survive(source in "[a-z]{1,8}( [a-z]{1,8}){0,6}") {
        let doc = parse_document(&source);
        prop_assert_eq!(doc.plain_text(), source);
    }
}
