use tracing::debug;
use yam_common::{ChompIndicator, DiagnosticKind};

use crate::source::ByteSource;
use crate::Lexer;

#[derive(Default, Debug, PartialEq, Eq)]
struct BlockHeader {
    indent: Option<u32>,
    chomp: Option<ChompIndicator>,
}

impl<S: ByteSource> Lexer<S> {
    /// Reads a literal (`|`) or folded (`>`) block scalar, header included.
    ///
    /// Content lines must sit deeper than `reference_indent`. Without an explicit indentation
    /// indicator the first non-empty line decides how deep.
    pub(crate) fn read_block_scalar(&mut self, folded: bool, reference_indent: u32) {
        let header = self.read_block_header();
        let chomp = header.chomp.unwrap_or_default();
        let mut indent = header.indent.map(|n| reference_indent.saturating_add(n));

        let mut breaks = 0usize;
        let mut has_content = false;
        let mut prev_more_indented = false;
        let mut extra = Vec::new();

        loop {
            extra.clear();
            while let Some(chr @ (b' ' | b'\t')) = self.cursor.peek() {
                self.cursor.get();
                if indent.map_or(false, |ind| self.cursor.column() > ind) {
                    extra.push(chr);
                }
            }

            match self.cursor.peek() {
                None => break,
                Some(b'\n') => {
                    self.cursor.get();
                    breaks += 1;
                    continue;
                }
                Some(_) => {}
            }

            let col = self.cursor.column();
            let ind = match indent {
                Some(ind) => ind,
                None if col <= reference_indent => break,
                None => {
                    indent = Some(col);
                    col
                }
            };
            if col < ind {
                break;
            }

            let more_indented = !extra.is_empty();
            if has_content && folded && !more_indented && !prev_more_indented {
                match breaks {
                    1 => self.buf.push(b' '),
                    n => self.buf.extend(std::iter::repeat(b'\n').take(n - 1)),
                }
            } else {
                self.buf.extend(std::iter::repeat(b'\n').take(breaks));
            }
            self.buf.extend_from_slice(&extra);

            let finished = self.read_block_line();
            breaks = 1;
            has_content = true;
            prev_more_indented = more_indented;
            if !finished {
                self.report_here(DiagnosticKind::UnterminatedBlockScalar);
                break;
            }
        }

        match chomp {
            ChompIndicator::Strip => {}
            ChompIndicator::Clip if has_content => self.buf.push(b'\n'),
            ChompIndicator::Clip => {}
            ChompIndicator::Keep => self.buf.extend(std::iter::repeat(b'\n').take(breaks)),
        }
    }

    /// Copies the rest of the line into the buffer. Returns `false` when input ends before a
    /// line break.
    fn read_block_line(&mut self) -> bool {
        loop {
            match self.cursor.get() {
                Some(b'\n') => return true,
                Some(chr) => self.buf.push(chr),
                None => return false,
            }
        }
    }

    /// Reads indicators and an optional comment up to and including the header's line break.
    fn read_block_header(&mut self) -> BlockHeader {
        let mut header = BlockHeader::default();
        while let Some(chr) = self.cursor.peek() {
            match chr {
                b'\n' => {
                    self.cursor.get();
                    break;
                }
                b'1'..=b'9' if header.indent.is_none() => {
                    self.cursor.get();
                    header.indent = Some(u32::from(chr - b'0'));
                }
                b'+' if header.chomp.is_none() => {
                    self.cursor.get();
                    header.chomp = Some(ChompIndicator::Keep);
                }
                b'-' if header.chomp.is_none() => {
                    self.cursor.get();
                    header.chomp = Some(ChompIndicator::Strip);
                }
                b' ' | b'\t' => {
                    self.cursor.get();
                }
                b'#' => {
                    self.cursor.get();
                    self.cursor.skip_line();
                }
                _ => {
                    debug!(
                        "Ignoring block scalar header garbage at {}",
                        self.cursor.marker()
                    );
                    self.cursor.skip_line();
                }
            }
        }
        header
    }
}
