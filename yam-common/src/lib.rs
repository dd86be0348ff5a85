pub mod error;
pub mod tag;

pub use error::{Diagnostic, DiagnosticKind, YamlError, YamlResult};
pub use tag::Tag;

use std::fmt::{Display, Formatter};

/// Kind of token produced by the lexer.
///
/// The set is closed: every call to the lexer yields exactly one of these.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum TokenKind {
    /// Input is exhausted. Returned again on every following call.
    EndOfStream,
    /// `?` followed by a blank, e.g.:
    /// ```yaml
    ///   ? key
    ///   : value
    /// ```
    BlockMapEntry,
    /// `-` followed by a blank, e.g.:
    /// ```yaml
    ///   - item
    /// ```
    BlockSeqEntry,
    /// `:` separating a key from its value.
    MapKeyDelimiter,
    FlowMapBegin,
    FlowMapEnd,
    FlowSeqBegin,
    FlowSeqEnd,
    /// `,` between flow entries.
    FlowDelimiter,
    /// Any plain, quoted or block scalar. The decoded text is the lexer value.
    Scalar,
    /// `*name`
    Alias,
    /// `&name`
    Anchor,
    /// `!tag`, `!!tag`, `!handle!tag` or `!<verbatim>`
    Tag,
}

impl TokenKind {
    /// Returns `true` for kinds that carry a decoded value.
    #[must_use]
    pub fn has_value(self) -> bool {
        matches!(
            self,
            TokenKind::Scalar | TokenKind::Alias | TokenKind::Anchor | TokenKind::Tag
        )
    }

    /// Returns `true` for kinds after which a document builder opens a new indentation level.
    #[must_use]
    pub fn opens_construct(self) -> bool {
        matches!(
            self,
            TokenKind::BlockMapEntry
                | TokenKind::BlockSeqEntry
                | TokenKind::MapKeyDelimiter
                | TokenKind::FlowMapBegin
                | TokenKind::FlowSeqBegin
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::EndOfStream => write!(f, "-STR"),
            TokenKind::BlockMapEntry => write!(f, "?"),
            TokenKind::BlockSeqEntry => write!(f, "-"),
            TokenKind::MapKeyDelimiter => write!(f, ":"),
            TokenKind::FlowMapBegin => write!(f, "{{"),
            TokenKind::FlowMapEnd => write!(f, "}}"),
            TokenKind::FlowSeqBegin => write!(f, "["),
            TokenKind::FlowSeqEnd => write!(f, "]"),
            TokenKind::FlowDelimiter => write!(f, ","),
            TokenKind::Scalar => write!(f, "=VAL"),
            TokenKind::Alias => write!(f, "=ALI"),
            TokenKind::Anchor => write!(f, "=ANC"),
            TokenKind::Tag => write!(f, "=TAG"),
        }
    }
}

/// A token as seen by the document builder.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct TokenInfo {
    /// Zero based column of the first significant character of the token.
    pub indent: u32,
    pub kind: TokenKind,
}

impl TokenInfo {
    #[must_use]
    pub fn new(indent: u32, kind: TokenKind) -> Self {
        TokenInfo { indent, kind }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum ChompIndicator {
    /// `-`: the final line break and any trailing empty lines are dropped.
    Strip,
    /// No indicator: the final line break is kept, trailing empty lines are dropped.
    #[default]
    Clip,
    /// `+`: the final line break and any trailing empty lines are kept.
    Keep,
}

#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Marker {
    /// index in bytes of the raw input.
    pub pos: usize,
    /// Line of mark. Zero indexed.
    pub line: u32,
    /// Column of mark, counted in characters. Zero indexed.
    pub col: u32,
}

impl Display for Marker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}
