use crate::Marker;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// A specialized `Result` type where the error is hard-wired to [`YamlError`].
pub type YamlResult<T> = Result<T, YamlError>;

/// Recoverable problems found while tokenizing.
///
/// None of these stop the lexer. They are collected next to the token stream so a strict
/// caller can fail the parse after the fact.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    #[error("quoted scalar is not terminated")]
    UnterminatedQuotedString,
    #[error("block scalar is cut off by end of input")]
    UnterminatedBlockScalar,
    #[error("invalid escape sequence in double quoted scalar")]
    InvalidEscapeSequence,
    #[error("invalid tag syntax")]
    InvalidTagSyntax,
    #[error("verbatim tag is missing the closing '>'")]
    UnterminatedVerbatimTag,
    #[error("block comment is missing the closing '*/'")]
    UnterminatedBlockComment,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub mark: Marker,
}

impl Diagnostic {
    #[must_use]
    pub fn new(kind: DiagnosticKind, mark: Marker) -> Self {
        Diagnostic { kind, mark }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.kind, self.mark)
    }
}

impl std::error::Error for Diagnostic {}

#[derive(Error, Debug)]
pub enum YamlError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{} problem(s) found while tokenizing", .0.len())]
    Diagnostics(Vec<Diagnostic>),
}

impl YamlError {
    /// Diagnostics carried by this error, empty for I/O failures.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            YamlError::Diagnostics(list) => list,
            YamlError::Io(_) => &[],
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{Diagnostic, DiagnosticKind, Marker, YamlError};

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::new(
            DiagnosticKind::UnterminatedVerbatimTag,
            Marker {
                pos: 4,
                line: 0,
                col: 4,
            },
        );
        assert_eq!(
            diag.to_string(),
            "verbatim tag is missing the closing '>' at 1:5"
        );
    }

    #[test]
    fn test_error_counts_diagnostics() {
        let first = Diagnostic::new(DiagnosticKind::InvalidTagSyntax, Marker::default());
        let second = Diagnostic::new(DiagnosticKind::InvalidEscapeSequence, Marker::default());
        let err = YamlError::Diagnostics(vec![first, second]);
        assert_eq!(err.diagnostics().len(), 2);
        assert_eq!(err.to_string(), "2 problem(s) found while tokenizing");
    }

    #[test]
    fn test_diagnostics_dedup() {
        use std::collections::HashSet;

        let mark = Marker {
            pos: 3,
            line: 1,
            col: 2,
        };
        let seen: HashSet<Diagnostic> = [
            Diagnostic::new(DiagnosticKind::InvalidTagSyntax, mark),
            Diagnostic::new(DiagnosticKind::InvalidTagSyntax, mark),
            Diagnostic::new(DiagnosticKind::InvalidTagSyntax, Marker::default()),
        ]
        .into_iter()
        .collect();
        assert_eq!(seen.len(), 2);
    }
}
