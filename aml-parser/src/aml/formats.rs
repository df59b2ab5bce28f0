//! Output formats for tokens and ASTs
//!
//! These are debugging views, used by `aml inspect` and by tests:
//!
//! - `token-simple`: [`tokens_to_simple`](crate::aml::token::tokens_to_simple)
//! - `token-json`: the token stream as JSON
//! - `ast-json` / `ast-yaml`: the node tree through serde
//! - `ast-treeviz`: [`treeviz::to_treeviz_str`]

pub mod treeviz;

use crate::aml::ast::Node;
use crate::aml::lexing::tokenize;
use crate::aml::parsing::parse;
use crate::aml::token::{tokens_to_simple, Token};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use treeviz::to_treeviz_str;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("unknown format '{0}' (expected one of: {list})", list = InspectFormat::names().join(", "))]
    UnknownFormat(String),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub fn to_json(node: &Node) -> Result<String, FormatError> {
    Ok(serde_json::to_string_pretty(node)?)
}

pub fn to_yaml(node: &Node) -> Result<String, FormatError> {
    Ok(serde_yaml::to_string(node)?)
}

pub fn tokens_to_json(tokens: &[Token]) -> Result<String, FormatError> {
    Ok(serde_json::to_string_pretty(tokens)?)
}

/// The views `aml inspect` can print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectFormat {
    TokenSimple,
    TokenJson,
    AstJson,
    AstYaml,
    AstTreeviz,
}

impl InspectFormat {
    pub const ALL: [InspectFormat; 5] = [
        InspectFormat::TokenSimple,
        InspectFormat::TokenJson,
        InspectFormat::AstJson,
        InspectFormat::AstYaml,
        InspectFormat::AstTreeviz,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            InspectFormat::TokenSimple => "token-simple",
            InspectFormat::TokenJson => "token-json",
            InspectFormat::AstJson => "ast-json",
            InspectFormat::AstYaml => "ast-yaml",
            InspectFormat::AstTreeviz => "ast-treeviz",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(InspectFormat::name).collect()
    }

    /// Tokenize (and parse, for AST views) the source and print it in this format.
    pub fn render(&self, source: &str) -> Result<String, FormatError> {
        let tokens = tokenize(source);
        match self {
            InspectFormat::TokenSimple => Ok(tokens_to_simple(&tokens)),
            InspectFormat::TokenJson => tokens_to_json(&tokens),
            InspectFormat::AstJson => to_json(&parse(tokens)),
            InspectFormat::AstYaml => to_yaml(&parse(tokens)),
            InspectFormat::AstTreeviz => Ok(to_treeviz_str(&parse(tokens))),
        }
    }
}

impl FromStr for InspectFormat {
    type Err = FormatError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name() == name)
            .ok_or_else(|| FormatError::UnknownFormat(name.to_string()))
    }
}

impl fmt::Display for InspectFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names_round_trip() {
        for format in InspectFormat::ALL {
            assert_eq!(format.name().parse::<InspectFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_unknown_format_lists_choices() {
        let err = "xml".parse::<InspectFormat>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("'xml'"));
        assert!(message.contains("ast-treeviz"));
    }

    #[test]
    fn test_ast_json_has_type_tags() {
        let json = InspectFormat::AstJson.render("<red> hi").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type"], "document");
        assert_eq!(value["children"][0]["type"], "color_block");
        assert_eq!(value["children"][0]["color"], "red");
        assert_eq!(value["children"][0]["is_line"], true);
    }

    #[test]
    fn test_ast_yaml() {
        let yaml = InspectFormat::AstYaml.render("----").unwrap();
        assert!(yaml.contains("type: document"));
        assert!(yaml.contains("type: hr"));
    }

    #[test]
    fn test_token_json_carries_positions() {
        let json = InspectFormat::TokenJson.render("a\n").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["raw"], "a");
        assert_eq!(value[0]["position"]["start"], 0);
        assert_eq!(value[0]["position"]["end"], 1);
        assert_eq!(value[1]["kind"], "Newline");
    }
}
