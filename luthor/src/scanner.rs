//! Forward-only character cursor over an immutable source buffer
//!
//! The scanner knows nothing about tokens, lines or classification. It hands
//! out one `char` at a time and reports how many it has handed out so far.

/// Character cursor used by the lexer.
///
/// Positions count characters, so `current_position` after N successful
/// [`get_next`](Scanner::get_next) calls is N regardless of encoding width.
#[derive(Debug, Clone)]
pub struct Scanner {
    source: Vec<char>,
    offset: usize,
}

impl Scanner {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            offset: 0,
        }
    }

    /// True while the cursor has not passed the last character
    pub fn has_more(&self) -> bool {
        self.offset < self.source.len()
    }

    pub fn end_of_source(&self) -> bool {
        !self.has_more()
    }

    /// Character at the cursor without advancing
    pub fn peek_next(&self) -> Option<char> {
        self.source.get(self.offset).copied()
    }

    /// Character at the cursor, advancing past it. At the end of input the
    /// cursor stays put and `None` is returned.
    pub fn get_next(&mut self) -> Option<char> {
        let ch = self.peek_next()?;
        self.offset += 1;
        Some(ch)
    }

    pub fn current_position(&self) -> usize {
        self.offset
    }

    /// Total number of characters in the source
    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}

impl From<&str> for Scanner {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}
