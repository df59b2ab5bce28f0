//! Recursive descent parser
//!
//!     The parser walks the classified token stream once, with lookahead where a construct
//!     needs to know whether its closing delimiter exists. Nothing is ever rejected: a
//!     delimiter without a partner is emitted as text.
//!
//!     Each nested construct runs with a [`Scope`] describing which tokens end it. Scopes are
//!     inherited, so a color block inside a parenthetical aside stops at the aside's `)` as well
//!     as at the end of the line. A token that ends the current scope is never consumed by it;
//!     the construct that introduced the stop takes it.
//!
//!     Lookahead never rescans: [`Lookahead`] records, for every position, where the next
//!     closer of each kind sits and which `)` closes each `(`. Closing-delimiter checks are
//!     constant time, so unbalanced input stays linear.
//!
//! Line constructs
//!
//!     At the top level a line may start with a list marker, a rule, a more tag, a color tag
//!     or an MLQ opener. Inside an MLQ only color tags keep their line meaning; markers, rules
//!     and more tags are text there.
//!
//! Colored MLQs
//!
//!     A line-start color tag followed (whitespace aside) by `<<<` with a matching `>>>` colors
//!     the MLQ itself and produces no color block. In every other position a color tag colors
//!     the rest of its line, and any MLQ delimiters it swallows are plain text. A newline
//!     between the tag and the opener breaks the association.

use crate::aml::ast::{MarkerType, Node};
use crate::aml::colors::ColorName;
use crate::aml::token::core::split_template;
use crate::aml::token::{Token, TokenKind};

/// Terminators and modes for the construct being parsed.
#[derive(Debug, Clone, Copy, Default)]
struct Scope {
    end_at_newline: bool,
    end_at_paren: bool,
    end_at_mlq_close: bool,
    end_at_literal_close: bool,
    end_at_wikilink_close: bool,
    end_at_title_close: bool,
    /// MLQ delimiters are plain text (inside color lines and MLQs).
    mlq_as_text: bool,
}

impl Scope {
    fn line() -> Self {
        Scope {
            end_at_newline: true,
            ..Scope::default()
        }
    }

    /// Closers other than newline that end this scope.
    fn stops(&self) -> impl Iterator<Item = Closer> {
        [
            (self.end_at_paren, Closer::Paren),
            (self.end_at_mlq_close, Closer::Mlq),
            (self.end_at_literal_close, Closer::Literal),
            (self.end_at_wikilink_close, Closer::Wikilink),
            (self.end_at_title_close, Closer::Title),
        ]
        .into_iter()
        .filter_map(|(active, closer)| active.then_some(closer))
    }

    fn stops_at(&self, kind: &TokenKind) -> bool {
        match kind {
            TokenKind::Newline => self.end_at_newline,
            TokenKind::CloseParen => self.end_at_paren,
            TokenKind::MlqClose => self.end_at_mlq_close,
            TokenKind::LiteralClose => self.end_at_literal_close,
            TokenKind::WikilinkClose => self.end_at_wikilink_close,
            TokenKind::TitleClose => self.end_at_title_close,
            _ => false,
        }
    }
}

/// Token kinds that end a construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Closer {
    Newline,
    Paren,
    Mlq,
    Literal,
    Wikilink,
    Title,
}

impl Closer {
    const COUNT: usize = 6;

    fn of(kind: &TokenKind) -> Option<Closer> {
        match kind {
            TokenKind::Newline => Some(Closer::Newline),
            TokenKind::CloseParen => Some(Closer::Paren),
            TokenKind::MlqClose => Some(Closer::Mlq),
            TokenKind::LiteralClose => Some(Closer::Literal),
            TokenKind::WikilinkClose => Some(Closer::Wikilink),
            TokenKind::TitleClose => Some(Closer::Title),
            _ => None,
        }
    }

    fn matches(self, kind: &TokenKind) -> bool {
        Closer::of(kind) == Some(self)
    }
}

/// Precomputed closer positions for one token stream.
struct Lookahead {
    /// `next[closer][i]` is the first index `>= i` holding `closer`, or `len` when none does.
    next: [Vec<usize>; Closer::COUNT],
    /// For each `(`, the `)` that closes it on the same line.
    matching_paren: Vec<Option<usize>>,
}

impl Lookahead {
    fn new(tokens: &[Token]) -> Self {
        let len = tokens.len();
        let mut next: [Vec<usize>; Closer::COUNT] = Default::default();
        for column in next.iter_mut() {
            *column = vec![len; len + 1];
        }
        for (index, token) in tokens.iter().enumerate().rev() {
            for column in next.iter_mut() {
                column[index] = column[index + 1];
            }
            if let Some(closer) = Closer::of(&token.kind) {
                next[closer as usize][index] = index;
            }
        }

        let mut matching_paren = vec![None; len];
        let mut open = Vec::new();
        for (index, token) in tokens.iter().enumerate() {
            match token.kind {
                TokenKind::OpenParen => open.push(index),
                TokenKind::CloseParen => {
                    if let Some(start) = open.pop() {
                        matching_paren[start] = Some(index);
                    }
                }
                TokenKind::Newline => open.clear(),
                _ => {}
            }
        }

        Lookahead {
            next,
            matching_paren,
        }
    }

    fn next(&self, closer: Closer, from: usize) -> usize {
        let column = &self.next[closer as usize];
        let len = column.len() - 1;
        column.get(from).copied().unwrap_or(len)
    }

    /// True when a token ending `scope` sits in `from..until`.
    fn blocked(&self, scope: Scope, from: usize, until: usize) -> bool {
        scope.stops().any(|stop| self.next(stop, from) < until)
    }
}

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    lookahead: Lookahead,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        let lookahead = Lookahead::new(&tokens);
        Parser {
            tokens,
            pos: 0,
            lookahead,
        }
    }

    /// Consume the whole stream into a `Node::Document`.
    pub fn parse(mut self) -> Node {
        let mut children = Vec::new();

        while let Some(token) = self.peek() {
            let kind = token.kind.clone();
            let line_start = token.line_start;

            match kind {
                TokenKind::Newline => {
                    self.pos += 1;
                    children.push(Node::Newline);
                }
                TokenKind::HorizontalRule => {
                    self.pos += 1;
                    children.push(Node::Hr);
                }
                TokenKind::MoreTag => {
                    self.pos += 1;
                    children.push(Node::MoreTag);
                }
                TokenKind::ListMarker(marker_type) => {
                    self.pos += 1;
                    children.push(self.parse_list_item(marker_type));
                }
                TokenKind::MlqOpen if line_start && self.has_mlq_close(self.pos + 1) => {
                    children.push(self.parse_mlq(None));
                }
                _ => self.parse_inline(&mut children, Scope::line()),
            }
        }

        Node::Document { children }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<&TokenKind> {
        self.peek().map(|token| &token.kind)
    }

    fn next_token(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek_kind(), Some(TokenKind::Whitespace)) {
            self.pos += 1;
        }
    }

    fn parse_list_item(&mut self, marker_type: MarkerType) -> Node {
        let children = self.parse_content(Scope::line());
        Node::ListItem {
            marker_type,
            children,
        }
    }

    /// Parse inline nodes until the scope ends, trimming surrounding whitespace.
    fn parse_content(&mut self, scope: Scope) -> Vec<Node> {
        self.skip_whitespace();
        let mut out = Vec::new();
        while let Some(kind) = self.peek_kind() {
            if scope.stops_at(kind) {
                break;
            }
            self.parse_inline(&mut out, scope);
        }
        trim_trailing_whitespace(&mut out);
        out
    }

    /// Parse exactly one inline element, consuming at least one token.
    fn parse_inline(&mut self, out: &mut Vec<Node>, scope: Scope) {
        let Some(token) = self.next_token() else {
            return;
        };

        match token.kind {
            TokenKind::Text | TokenKind::Whitespace => push_text(out, &token.raw),
            TokenKind::Newline => out.push(Node::Newline),
            TokenKind::ColorTag(color) => {
                let node = self.parse_color_tag(color, token.line_start, scope);
                out.push(node);
            }
            TokenKind::OpenParen => self.parse_paren(out, scope),
            TokenKind::MlqOpen if !scope.mlq_as_text => {
                let close = self.find_closing(self.pos, Closer::Mlq, true, scope);
                match close {
                    Some(close) => out.push(self.take_literal(close)),
                    None => push_text(out, &token.raw),
                }
            }
            TokenKind::LiteralOpen => {
                let close = self.find_closing(self.pos, Closer::Literal, true, scope);
                match close {
                    Some(close) => out.push(self.take_literal(close)),
                    None => push_text(out, &token.raw),
                }
            }
            TokenKind::PrivateOpen { triple } => self.parse_private(out, triple, &token, scope),
            TokenKind::WikilinkOpen => {
                let inner = Scope {
                    end_at_newline: true,
                    end_at_wikilink_close: true,
                    ..scope
                };
                match self.parse_delimited(inner, Closer::Wikilink, scope) {
                    Some(children) => out.push(Node::Wikilink { children }),
                    None => push_text(out, &token.raw),
                }
            }
            TokenKind::TitleOpen => {
                let inner = Scope {
                    end_at_newline: true,
                    end_at_title_close: true,
                    ..scope
                };
                match self.parse_delimited(inner, Closer::Title, scope) {
                    Some(children) => out.push(Node::Title { children }),
                    None => push_text(out, &token.raw),
                }
            }
            TokenKind::Emphasis => {
                let raw = &token.raw;
                let inner = raw
                    .strip_prefix('*')
                    .and_then(|rest| rest.strip_suffix('*'))
                    .unwrap_or(raw);
                out.push(Node::Emphasis {
                    raw: inner.to_string(),
                });
            }
            TokenKind::Template => {
                let (name, content) = split_template(&token.raw);
                out.push(Node::Template {
                    template_name: name.map(str::to_string),
                    raw: content.to_string(),
                });
            }
            TokenKind::Chinese => out.push(Node::Chinese { hanzi: token.raw }),
            TokenKind::Url => out.push(Node::Url { raw: token.raw }),
            // Delimiters without an opener, and line constructs out of place
            TokenKind::MlqOpen
            | TokenKind::MlqClose
            | TokenKind::LiteralClose
            | TokenKind::WikilinkClose
            | TokenKind::TitleClose
            | TokenKind::CloseParen
            | TokenKind::ListMarker(_)
            | TokenKind::HorizontalRule
            | TokenKind::MoreTag => push_text(out, &token.raw),
        }
    }

    /// Called with the color tag already consumed.
    fn parse_color_tag(&mut self, color: ColorName, line_start: bool, scope: Scope) -> Node {
        if line_start && !scope.mlq_as_text {
            let mut next = self.pos;
            while matches!(
                self.tokens.get(next).map(|t| &t.kind),
                Some(TokenKind::Whitespace)
            ) {
                next += 1;
            }
            let opens_mlq = matches!(
                self.tokens.get(next).map(|t| &t.kind),
                Some(TokenKind::MlqOpen)
            );
            if opens_mlq && self.has_mlq_close(next + 1) {
                self.pos = next;
                return self.parse_mlq(Some(color));
            }
        }

        let inner = Scope {
            end_at_newline: true,
            mlq_as_text: true,
            ..scope
        };
        let children = self.parse_content(inner);
        Node::ColorBlock {
            color,
            is_line: true,
            children,
        }
    }

    /// Called with the current token on `<<<`.
    fn parse_mlq(&mut self, color: Option<ColorName>) -> Node {
        self.pos += 1;
        let scope = Scope {
            end_at_mlq_close: true,
            mlq_as_text: true,
            ..Scope::default()
        };
        let children = self.parse_content(scope);
        if matches!(self.peek_kind(), Some(TokenKind::MlqClose)) {
            self.pos += 1;
        }
        Node::Mlq { children, color }
    }

    /// Called with `(` consumed. Handles both `(<color> asides)` and plain groups.
    fn parse_paren(&mut self, out: &mut Vec<Node>, scope: Scope) {
        if let Some(TokenKind::ColorTag(color)) = self.peek_kind() {
            let color = *color;
            self.pos += 1;
            let inner = Scope {
                end_at_newline: true,
                end_at_paren: true,
                mlq_as_text: true,
                ..scope
            };
            let children = self.parse_content(inner);
            if matches!(self.peek_kind(), Some(TokenKind::CloseParen)) {
                self.pos += 1;
            }
            out.push(Node::ColorBlock {
                color,
                is_line: false,
                children,
            });
            return;
        }

        if self.find_matching_paren(self.pos - 1, scope).is_none() {
            push_text(out, "(");
            return;
        }

        let inner = Scope {
            end_at_newline: true,
            end_at_paren: true,
            ..scope
        };
        let mut group = vec![Node::text("(")];
        while let Some(kind) = self.peek_kind() {
            if inner.stops_at(kind) {
                break;
            }
            self.parse_inline(&mut group, inner);
        }
        if matches!(self.peek_kind(), Some(TokenKind::CloseParen)) {
            self.pos += 1;
            push_text(&mut group, ")");
        }

        let text_only = group
            .iter()
            .all(|node| matches!(node, Node::Text { children, .. } if children.is_empty()));
        if text_only {
            for node in group {
                if let Node::Text { value, .. } = node {
                    push_text(out, &value);
                }
            }
        } else {
            out.push(Node::Text {
                value: String::new(),
                children: group,
            });
        }
    }

    /// Consume tokens up to `close` (exclusive) as raw literal text, then the close itself.
    fn take_literal(&mut self, close: usize) -> Node {
        let raw: String = self.tokens[self.pos..close]
            .iter()
            .map(|token| token.raw.as_str())
            .collect();
        self.pos = close + 1;
        let trimmed = raw.trim();
        let children = if trimmed.is_empty() {
            Vec::new()
        } else {
            vec![Node::text(trimmed)]
        };
        Node::Literal { children }
    }

    fn parse_private(&mut self, out: &mut Vec<Node>, triple: bool, open: &Token, scope: Scope) {
        let closer = if triple { Closer::Mlq } else { Closer::Literal };
        if self.find_closing(self.pos, closer, false, scope).is_none() {
            push_text(out, &open.raw);
            return;
        }

        let inner = Scope {
            end_at_newline: false,
            end_at_mlq_close: triple || scope.end_at_mlq_close,
            end_at_literal_close: !triple || scope.end_at_literal_close,
            mlq_as_text: true,
            ..scope
        };
        let children = self.parse_content(inner);
        if matches!(self.peek_kind(), Some(kind) if closer.matches(kind)) {
            self.pos += 1;
        }
        out.push(Node::Private { children });
    }

    /// Parse a same-line delimited construct whose opener is already consumed.
    ///
    /// Returns `None` (consuming nothing) when the closer is not on the same line.
    fn parse_delimited(
        &mut self,
        inner: Scope,
        closer: Closer,
        outer: Scope,
    ) -> Option<Vec<Node>> {
        self.find_closing(self.pos, closer, true, outer)?;
        let children = self.parse_content(inner);
        if matches!(self.peek_kind(), Some(kind) if closer.matches(kind)) {
            self.pos += 1;
        }
        Some(children)
    }

    fn has_mlq_close(&self, from: usize) -> bool {
        self.lookahead.next(Closer::Mlq, from) < self.tokens.len()
    }

    /// Index of the first `closer` at or after `from`, giving up at tokens that end `scope`
    /// (and at newlines when `same_line` is set).
    fn find_closing(
        &self,
        from: usize,
        closer: Closer,
        same_line: bool,
        scope: Scope,
    ) -> Option<usize> {
        let close = self.lookahead.next(closer, from);
        if close >= self.tokens.len() {
            return None;
        }
        if same_line && self.lookahead.next(Closer::Newline, from) < close {
            return None;
        }
        if self.lookahead.blocked(scope, from, close) {
            return None;
        }
        Some(close)
    }

    /// The `)` closing the `(` at `open`, unless a token ending `scope` comes first.
    fn find_matching_paren(&self, open: usize, scope: Scope) -> Option<usize> {
        let close = self.lookahead.matching_paren.get(open).copied().flatten()?;
        let scope = Scope {
            end_at_paren: false,
            ..scope
        };
        if self.lookahead.blocked(scope, open + 1, close) {
            return None;
        }
        Some(close)
    }
}

/// Append text, extending the previous text node when there is one.
fn push_text(out: &mut Vec<Node>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Node::Text { value, children }) = out.last_mut() {
        if children.is_empty() {
            value.push_str(text);
            return;
        }
    }
    out.push(Node::text(text));
}

fn trim_trailing_whitespace(out: &mut Vec<Node>) {
    if let Some(Node::Text { value, children }) = out.last_mut() {
        if children.is_empty() {
            let trimmed_len = value.trim_end().len();
            value.truncate(trimmed_len);
            if value.is_empty() {
                out.pop();
            }
        }
    }
}
