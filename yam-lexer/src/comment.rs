use yam_common::DiagnosticKind;

use crate::char_utils::is_blank_or_break;
use crate::cursor::ByteCursor;
use crate::source::ByteSource;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Comment {
    /// `# ...` or `// ...`, runs to the end of the line.
    Line,
    /// `/* ... */`, may span lines.
    Block,
}

/// Checks whether the just consumed `chr` opens a comment.
///
/// `prev` is the character consumed before `chr`. A `#` only opens a comment at the start of
/// input or after a blank or line break, so `key#1` stays a scalar.
pub(crate) fn comment_start<S: ByteSource>(
    cursor: &mut ByteCursor<S>,
    chr: u8,
    prev: Option<u8>,
    c_style: bool,
) -> Option<Comment> {
    match chr {
        b'#' if prev.map_or(true, is_blank_or_break) => Some(Comment::Line),
        b'/' if c_style => match cursor.peek() {
            Some(b'/') => Some(Comment::Line),
            Some(b'*') => Some(Comment::Block),
            _ => None,
        },
        _ => None,
    }
}

/// Consumes the body of a comment whose first character was already read.
///
/// Line comments leave the line break in place. An unterminated block comment swallows the rest
/// of the input.
pub(crate) fn skip_comment<S: ByteSource>(
    cursor: &mut ByteCursor<S>,
    comment: Comment,
) -> Result<(), DiagnosticKind> {
    match comment {
        Comment::Line => {
            cursor.skip_line();
            Ok(())
        }
        Comment::Block => {
            // eat the `*` of the opening `/*`
            cursor.get();
            loop {
                match cursor.get() {
                    Some(b'*') if cursor.peek() == Some(b'/') => {
                        cursor.get();
                        return Ok(());
                    }
                    Some(_) => {}
                    None => return Err(DiagnosticKind::UnterminatedBlockComment),
                }
            }
        }
    }
}
