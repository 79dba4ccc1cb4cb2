//! Cursor text buffer.
//!
//! The text is held as two deques split at the cursor: characters before
//! it and characters after it. Moving the cursor transfers one character
//! across the split, so every operation is O(1).

use std::collections::VecDeque;

/// Marker rendered at the cursor position.
pub const CURSOR_MARKER: char = '|';

/// Single-line text buffer with a cursor.
///
/// ```
/// use rust_uno::editor::CursorBuffer;
///
/// let mut buf = CursorBuffer::new();
/// buf.insert_char('a');
/// buf.insert_char('c');
/// buf.move_left();
/// buf.insert_char('b');
/// assert_eq!(buf.text_with_cursor(), "ab|c");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CursorBuffer {
    before: VecDeque<char>,
    after: VecDeque<char>,
}

impl CursorBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a character at the cursor; the cursor ends up after it.
    pub fn insert_char(&mut self, ch: char) {
        self.before.push_back(ch);
    }

    /// Delete the character before the cursor. No-op at the start.
    pub fn delete_char(&mut self) {
        self.before.pop_back();
    }

    /// Move the cursor one character left. No-op at the start.
    pub fn move_left(&mut self) {
        if let Some(ch) = self.before.pop_back() {
            self.after.push_front(ch);
        }
    }

    /// Move the cursor one character right. No-op at the end.
    pub fn move_right(&mut self) {
        if let Some(ch) = self.after.pop_front() {
            self.before.push_back(ch);
        }
    }

    /// Cursor position, in characters from the start.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.before.len()
    }

    /// Total characters in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.before.len() + self.after.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The text without the cursor marker.
    #[must_use]
    pub fn text(&self) -> String {
        self.before.iter().chain(self.after.iter()).collect()
    }

    /// The text with `|` at the cursor.
    #[must_use]
    pub fn text_with_cursor(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for CursorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use std::fmt::Write;

        for &ch in &self.before {
            f.write_char(ch)?;
        }
        f.write_char(CURSOR_MARKER)?;
        for &ch in &self.after {
            f.write_char(ch)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> CursorBuffer {
        let mut buf = CursorBuffer::new();
        text.chars().for_each(|ch| buf.insert_char(ch));
        buf
    }

    #[test]
    fn test_empty_buffer() {
        let buf = CursorBuffer::new();
        assert_eq!(buf.text_with_cursor(), "|");
        assert!(buf.is_empty());
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn test_insert_appends_at_cursor() {
        let buf = typed("abc");
        assert_eq!(buf.text_with_cursor(), "abc|");
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.cursor(), 3);
    }

    #[test]
    fn test_delete_before_cursor() {
        let mut buf = typed("abc");
        buf.move_left();
        buf.delete_char();
        assert_eq!(buf.text_with_cursor(), "a|c");
    }

    #[test]
    fn test_delete_at_start_is_noop() {
        let mut buf = typed("ab");
        buf.move_left();
        buf.move_left();
        buf.delete_char();
        assert_eq!(buf.text_with_cursor(), "|ab");

        let mut empty = CursorBuffer::new();
        empty.delete_char();
        assert_eq!(empty.text_with_cursor(), "|");
    }

    #[test]
    fn test_moves_stop_at_ends() {
        let mut buf = typed("xy");
        buf.move_right();
        assert_eq!(buf.text_with_cursor(), "xy|");

        for _ in 0..5 {
            buf.move_left();
        }
        assert_eq!(buf.text_with_cursor(), "|xy");
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn test_move_preserves_text() {
        let mut buf = typed("hello");
        buf.move_left();
        buf.move_left();
        buf.move_right();
        assert_eq!(buf.text(), "hello");
        assert_eq!(buf.text_with_cursor(), "hell|o");
    }

    #[test]
    fn test_insert_in_middle() {
        let mut buf = typed("ac");
        buf.move_left();
        buf.insert_char('b');
        assert_eq!(buf.text_with_cursor(), "ab|c");
        assert_eq!(buf.to_string(), buf.text_with_cursor());
    }

    #[test]
    fn test_independent_buffers() {
        let mut a = typed("one");
        let b = typed("two");
        a.delete_char();
        assert_eq!(a.text_with_cursor(), "on|");
        assert_eq!(b.text_with_cursor(), "two|");
    }
}
