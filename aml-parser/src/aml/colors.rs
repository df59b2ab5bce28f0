//! The semantic color table
//!
//!     AML colors are not visual colors, they tag the *voice* of a passage. Each color has a
//!     sigil (shown in front of the rendered block) and a CSS class. The table is closed: a tag
//!     like `<purple>` is not a color tag at all and degrades to text during lexing.
//!
//!     `acronym`, `context` and `resource` are aliases that render with green's sigil and class,
//!     while `quote` is a spelling of yellow that keeps its own class so stylesheets can tell
//!     them apart.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorName {
    Xantham,
    Red,
    Orange,
    Yellow,
    Quote,
    Green,
    Teal,
    Blue,
    Violet,
    Music,
    Mogue,
    Gray,
    Hazel,
    Acronym,
    Context,
    Resource,
}

impl ColorName {
    /// Every color, in table order.
    pub const ALL: [ColorName; 16] = [
        ColorName::Xantham,
        ColorName::Red,
        ColorName::Orange,
        ColorName::Yellow,
        ColorName::Quote,
        ColorName::Green,
        ColorName::Teal,
        ColorName::Blue,
        ColorName::Violet,
        ColorName::Music,
        ColorName::Mogue,
        ColorName::Gray,
        ColorName::Hazel,
        ColorName::Acronym,
        ColorName::Context,
        ColorName::Resource,
    ];

    /// Look up a color by its source spelling (`"red"`, `"quote"`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        ColorName::ALL.into_iter().find(|color| color.name() == name)
    }

    /// Parse a full tag such as `<red>`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        tag.strip_prefix('<')
            .and_then(|rest| rest.strip_suffix('>'))
            .and_then(Self::from_name)
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorName::Xantham => "xantham",
            ColorName::Red => "red",
            ColorName::Orange => "orange",
            ColorName::Yellow => "yellow",
            ColorName::Quote => "quote",
            ColorName::Green => "green",
            ColorName::Teal => "teal",
            ColorName::Blue => "blue",
            ColorName::Violet => "violet",
            ColorName::Music => "music",
            ColorName::Mogue => "mogue",
            ColorName::Gray => "gray",
            ColorName::Hazel => "hazel",
            ColorName::Acronym => "acronym",
            ColorName::Context => "context",
            ColorName::Resource => "resource",
        }
    }

    /// The class suffix used in `color-<class>`, with aliases resolved.
    pub fn css_class(self) -> &'static str {
        match self {
            ColorName::Acronym | ColorName::Context | ColorName::Resource => "green",
            other => other.name(),
        }
    }

    pub fn sigil(self) -> &'static str {
        match self {
            ColorName::Xantham => "🔥",
            ColorName::Red => "💡",
            ColorName::Orange => "⚔️",
            ColorName::Yellow | ColorName::Quote => "💬",
            ColorName::Green | ColorName::Acronym | ColorName::Context | ColorName::Resource => {
                "⚙️"
            }
            ColorName::Teal => "🤖",
            ColorName::Blue => "✨",
            ColorName::Violet => "📣",
            ColorName::Music => "🎵",
            ColorName::Mogue => "🌎",
            ColorName::Gray => "💭",
            ColorName::Hazel => "🎭",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ColorName::Xantham => "sarcastic, overconfident",
            ColorName::Red => "forceful, certain",
            ColorName::Orange => "counterpoint",
            ColorName::Yellow | ColorName::Quote => "quotes",
            ColorName::Green => "technical explanations",
            ColorName::Teal => "LLM output",
            ColorName::Blue => "voice from beyond",
            ColorName::Violet => "serious announcements",
            ColorName::Music => "musical notes",
            ColorName::Mogue => "actions taken",
            ColorName::Gray => "past stories",
            ColorName::Hazel => "storytelling, personas",
            ColorName::Acronym => "acronym expansion",
            ColorName::Context => "background context",
            ColorName::Resource => "external resource",
        }
    }

    /// Yellow and quote blocks are the ones captured as quotes when rendering.
    pub fn is_quote(self) -> bool {
        matches!(self, ColorName::Yellow | ColorName::Quote)
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_color_round_trips_through_its_name() {
        for color in ColorName::ALL {
            assert_eq!(ColorName::from_name(color.name()), Some(color));
        }
    }

    #[test]
    fn test_from_tag() {
        assert_eq!(ColorName::from_tag("<red>"), Some(ColorName::Red));
        assert_eq!(ColorName::from_tag("<quote>"), Some(ColorName::Quote));
        assert_eq!(ColorName::from_tag("<purple>"), None);
        assert_eq!(ColorName::from_tag("red"), None);
    }

    #[test]
    fn test_aliases_resolve_to_green() {
        assert_eq!(ColorName::Acronym.css_class(), "green");
        assert_eq!(ColorName::Context.css_class(), "green");
        assert_eq!(ColorName::Resource.css_class(), "green");
        assert_eq!(ColorName::Resource.sigil(), ColorName::Green.sigil());
        assert_eq!(ColorName::Quote.css_class(), "quote");
    }

    #[test]
    fn test_quote_colors() {
        assert!(ColorName::Yellow.is_quote());
        assert!(ColorName::Quote.is_quote());
        assert!(!ColorName::Red.is_quote());
    }
}
