//! Bounded cursor over a single line.
//!
//! Byte-level scanning for the ASCII marker runs at the start of a line,
//! with one char-aware step for skipping the separator that follows them.

/// A cursor for scanning a line byte by byte.
///
/// Every read is bounds-checked: looking past the end yields `None`
/// rather than faulting, so callers decide what a short line means.
///
/// # Example
/// ```
/// use blockmark::cursor::Cursor;
///
/// let mut cursor = Cursor::new("## Title");
/// assert_eq!(cursor.skip_while(|b| b == b'#'), 2);
/// cursor.skip_char();
/// assert_eq!(cursor.rest(), "Title");
/// ```
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of `input`.
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Current offset from the start of the line.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Number of bytes remaining.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    /// Check if cursor is at end of the line.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Peek the current byte without advancing.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Peek at byte n positions ahead.
    #[inline]
    pub fn peek_ahead(&self, n: usize) -> Option<u8> {
        self.input.as_bytes().get(self.pos + n).copied()
    }

    /// Advance by 1 byte.
    ///
    /// Only call on ASCII bytes; use [`Cursor::skip_char`] otherwise.
    #[inline]
    pub fn bump(&mut self) {
        debug_assert!(self.peek().is_some_and(|b| b.is_ascii()));
        self.pos += 1;
    }

    /// Skip ASCII bytes while predicate is true, returning how many were skipped.
    #[inline]
    pub fn skip_while<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(u8) -> bool,
    {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if !b.is_ascii() || !predicate(b) {
                break;
            }
            self.bump();
        }
        self.pos - start
    }

    /// Skip one whole character, whatever its encoded width.
    ///
    /// Returns false at end of line.
    #[inline]
    pub fn skip_char(&mut self) -> bool {
        match self.rest().chars().next() {
            Some(c) => {
                self.pos += c.len_utf8();
                true
            }
            None => false,
        }
    }

    /// The remainder of the line from the current position.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }
}

impl std::fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.offset())
            .field("remaining", &self.remaining())
            .finish()
    }
}
