//! Streaming tokenizer for a YAML-like language.
//!
//! The [`Lexer`] pulls bytes from a [`ByteSource`] and hands out one [`TokenInfo`] at a time,
//! with the decoded text of scalars, aliases, anchors and tags available through
//! [`Lexer::value`]. Both block (indentation based) and flow (`{}`, `[]`) styles are recognized,
//! as are `#`, `//` and `/* */` comments.
//!
//! Malformed input never stops the lexer. Problems are collected as [`Diagnostic`]s, and
//! [`Lexer::finish`] turns them into an error for callers that want strict parsing.

mod char_utils;
mod comment;
mod config;
mod cursor;
mod lexer;
mod scalar;
mod source;

pub use config::LexerConfig;
pub use cursor::ByteCursor;
pub use lexer::Lexer;
pub use source::{ByteSource, ReadSource, Skipped, SliceSource};

pub use yam_common::{
    ChompIndicator, Diagnostic, DiagnosticKind, Marker, Tag, TokenInfo, TokenKind, YamlError,
    YamlResult,
};
