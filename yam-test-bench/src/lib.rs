pub mod consts;
mod indent_stack;

use std::borrow::Cow;
use std::fmt::Write;

pub use indent_stack::IndentStack;
use yam_lexer::{ByteSource, Lexer, TokenKind};

///
/// Assert that for given input, the lexer driven by an [`IndentStack`] produces the expected
/// token dump.
///
/// # Panics
///
///    Function panics if there is a difference between expected tokens string and one generated
///    from the input.
pub fn assert_eq_tokens(input: &str, expected: &str) {
    let line = dump_tokens(input);
    assert_eq!(line, expected, "Error in case: {input}");
}

///
/// Same as [`assert_eq_tokens`] but every token is read with the same fixed `reference` indent.
///
/// # Panics
///
///    Function panics if the dumps differ.
pub fn assert_eq_tokens_at(input: &str, reference: u32, expected: &str) {
    let line = dump_tokens_at(input, reference);
    assert_eq!(line, expected, "Error in case: {input}");
}

#[must_use]
pub fn dump_tokens(input: &str) -> String {
    let mut line = String::with_capacity(input.len());
    write_tokens(&mut line, &mut Lexer::new_from_str(input), None);
    line
}

#[must_use]
pub fn dump_tokens_at(input: &str, reference: u32) -> String {
    let mut line = String::with_capacity(input.len());
    write_tokens(&mut line, &mut Lexer::new_from_str(input), Some(reference));
    line
}

/// Writes one line per token, `{indent} {kind}` followed by the escaped value for value
/// carrying tokens, then one `ERR` line per diagnostic.
///
/// Without a fixed `reference` the reference indent comes from an [`IndentStack`].
pub fn write_tokens<S: ByteSource>(
    line: &mut String,
    lexer: &mut Lexer<S>,
    reference: Option<u32>,
) {
    let mut stack = IndentStack::default();
    loop {
        let tok = lexer.next_token(reference.unwrap_or_else(|| stack.reference()));
        let _ = match tok.kind {
            TokenKind::EndOfStream => write!(line, "\n{}", tok.kind),
            kind if kind.has_value() => {
                write!(line, "\n{} {kind} {}", tok.indent, escape_text(lexer.value()))
            }
            kind => write!(line, "\n{} {kind}", tok.indent),
        };
        if tok.kind == TokenKind::EndOfStream {
            break;
        }
        stack.push_token(tok);
    }
    for diag in lexer.diagnostics() {
        let _ = write!(line, "\nERR {:?}", diag.kind);
    }
}

/// Makes line breaks, tabs and backslashes visible.
#[must_use]
pub fn escape_text(text: &str) -> Cow<'_, str> {
    if !text.contains(['\\', '\n', '\r', '\t']) {
        return Cow::Borrowed(text);
    }
    let mut output = String::with_capacity(text.len() + 8);
    for chr in text.chars() {
        match chr {
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            _ => output.push(chr),
        }
    }
    Cow::Owned(output)
}

#[cfg(test)]
mod test {
    use crate::{dump_tokens, escape_text};

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("plain"), "plain");
        assert_eq!(escape_text("a\\b\n\tc"), "a\\\\b\\n\\tc");
    }

    #[test]
    fn test_dump_format() {
        assert_eq!(dump_tokens("a: 'b\n'"), "\n0 =VAL a\n1 :\n3 =VAL b \n-STR");
        assert_eq!(dump_tokens("\"x"), "\n0 =VAL x\n-STR\nERR UnterminatedQuotedString");
    }
}
