use yam_lexer::{TokenInfo, TokenKind};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Level {
    /// Opened by `-` or `?`.
    Block(u32),
    /// Opened by `:` and closed by the value that follows it.
    Entry(u32),
    /// Opened by `{` or `[`.
    Flow(u32),
}

impl Level {
    fn col(self) -> u32 {
        match self {
            Level::Block(col) | Level::Entry(col) | Level::Flow(col) => col,
        }
    }
}

/// Minimal stand-in for a document builder.
///
/// Tracks just enough block and flow structure to hand the lexer a sensible reference indent:
/// the column of the innermost open construct, or `0` at top level.
#[derive(Default, Debug)]
pub struct IndentStack {
    levels: Vec<Level>,
    /// Column of the first property or scalar of the node being read.
    node_start: Option<u32>,
    last_node: u32,
}

impl IndentStack {
    #[must_use]
    pub fn reference(&self) -> u32 {
        self.levels.last().map_or(0, |level| level.col())
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    fn in_flow(&self) -> bool {
        self.levels.iter().any(|level| matches!(level, Level::Flow(_)))
    }

    /// Updates the open constructs with a token just read by the lexer.
    pub fn push_token(&mut self, tok: TokenInfo) {
        let in_flow = self.in_flow();
        if !in_flow {
            while self.levels.last().map_or(false, |level| level.col() >= tok.indent) {
                self.levels.pop();
            }
        }

        match tok.kind {
            TokenKind::FlowMapBegin | TokenKind::FlowSeqBegin => {
                let col = self.node_start.take().unwrap_or(tok.indent);
                self.levels.push(Level::Flow(col));
            }
            TokenKind::FlowMapEnd | TokenKind::FlowSeqEnd => {
                while let Some(level) = self.levels.pop() {
                    if let Level::Flow(col) = level {
                        self.last_node = col;
                        break;
                    }
                }
            }
            TokenKind::BlockSeqEntry | TokenKind::BlockMapEntry if !in_flow => {
                self.levels.push(Level::Block(tok.indent));
            }
            TokenKind::MapKeyDelimiter if !in_flow => {
                self.levels.push(Level::Entry(self.last_node.min(tok.indent)));
            }
            TokenKind::Anchor | TokenKind::Tag => {
                self.node_start.get_or_insert(tok.indent);
            }
            TokenKind::Scalar | TokenKind::Alias => {
                self.last_node = self.node_start.take().unwrap_or(tok.indent);
                if matches!(self.levels.last(), Some(Level::Entry(_))) {
                    self.levels.pop();
                }
            }
            _ => {}
        }
    }
}
