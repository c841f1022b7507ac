//! Single-pass brace scanner.
//!
//! Walks a text once and yields every `{` / `}` that counts toward object
//! nesting, together with the depth after the brace. In [`ScanMode::Lexical`]
//! the scanner also tracks quote and comment state so braces inside string
//! literals or comments are ignored.
//!
//! Positions are byte offsets. Braces, quotes and comment markers are ASCII,
//! so every reported position is a valid `char` boundary.

use serde::{Deserialize, Serialize};

/// How the scanner treats string literals and comments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Count every brace character, including those inside strings.
    Raw,
    /// Skip braces inside `'`, `"` and `` ` `` strings and inside comments.
    #[default]
    Lexical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BraceKind {
    Open,
    Close,
}

/// A brace that affects nesting depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brace {
    pub pos: usize,
    pub kind: BraceKind,
    /// Depth after applying this brace.
    pub depth: isize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Comment {
    Line,
    Block,
}

#[derive(Debug, Clone, Default)]
struct ScanState {
    pos: usize,
    depth: isize,
    quote: Option<u8>,
    escaped: bool,
    comment: Option<Comment>,
}

pub struct Scanner<'a> {
    bytes: &'a [u8],
    mode: ScanMode,
    state: ScanState,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str, mode: ScanMode) -> Self {
        Self::starting_at(text, 0, mode)
    }

    /// Start scanning at `pos` with depth 0, outside any string or comment.
    pub fn starting_at(text: &'a str, pos: usize, mode: ScanMode) -> Self {
        Self {
            bytes: text.as_bytes(),
            mode,
            state: ScanState {
                pos,
                ..ScanState::default()
            },
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.state.pos).copied()
    }

    /// Consume `byte` as part of a string or comment. Returns false when the
    /// byte is ordinary code.
    fn consume_lexical(&mut self, byte: u8) -> bool {
        let state = &mut self.state;

        if let Some(comment) = state.comment {
            match comment {
                Comment::Line if byte == b'\n' => state.comment = None,
                Comment::Block if byte == b'*' && self.bytes.get(state.pos) == Some(&b'/') => {
                    state.pos += 1;
                    state.comment = None;
                }
                _ => {}
            }
            return true;
        }

        if let Some(quote) = state.quote {
            if state.escaped {
                state.escaped = false;
            } else if byte == b'\\' {
                state.escaped = true;
            } else if byte == quote {
                state.quote = None;
            }
            return true;
        }

        match byte {
            b'\'' | b'"' | b'`' => {
                self.state.quote = Some(byte);
                true
            }
            b'/' if self.peek() == Some(b'/') => {
                self.state.pos += 1;
                self.state.comment = Some(Comment::Line);
                true
            }
            b'/' if self.peek() == Some(b'*') => {
                self.state.pos += 1;
                self.state.comment = Some(Comment::Block);
                true
            }
            _ => false,
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Brace;

    fn next(&mut self) -> Option<Brace> {
        while let Some(&byte) = self.bytes.get(self.state.pos) {
            let pos = self.state.pos;
            self.state.pos += 1;

            if self.mode == ScanMode::Lexical && self.consume_lexical(byte) {
                continue;
            }

            let kind = match byte {
                b'{' => BraceKind::Open,
                b'}' => BraceKind::Close,
                _ => continue,
            };
            self.state.depth += match kind {
                BraceKind::Open => 1,
                BraceKind::Close => -1,
            };
            return Some(Brace {
                pos,
                kind,
                depth: self.state.depth,
            });
        }
        None
    }
}

/// Find the first closing brace at or after `start` that brings the depth
/// back to 0. Scanning begins at depth 0.
pub fn balanced_end(text: &str, start: usize, mode: ScanMode) -> Option<usize> {
    Scanner::starting_at(text, start, mode)
        .find(|brace| brace.kind == BraceKind::Close && brace.depth == 0)
        .map(|brace| brace.pos)
}
