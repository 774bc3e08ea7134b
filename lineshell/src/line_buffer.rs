//! Line buffer with cursor
//!
//! Holds the line being edited. Every edit writes the bytes needed to
//! keep the terminal in step with the buffer to an [`Echo`].

use core::str::from_utf8;

use embedded_io::Write;

use crate::error::Error;
use crate::output::Echo;

/// Fixed capacity line buffer
///
/// At most `C - 1` bytes are stored, the last slot is kept free for a
/// terminator so the content fits a C string of the same capacity.
pub struct LineBuffer<const C: usize> {
    content: [u8; C],
    len: usize,
    cursor: usize,
}

impl<const C: usize> LineBuffer<C> {
    pub const fn new() -> Self {
        Self {
            content: [0; C],
            len: 0,
            cursor: 0,
        }
    }

    /// Maximum number of bytes the line can hold
    pub const fn limit() -> usize {
        C.saturating_sub(1)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.content[..self.len]
    }

    /// Line as string. The editor only ever stores printable ASCII.
    pub fn as_str(&self) -> &str {
        from_utf8(self.as_slice()).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len >= Self::limit()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn suffix(&self) -> &[u8] {
        &self.content[self.cursor..self.len]
    }

    /// Forget the content without touching the terminal
    pub fn reset(&mut self) {
        self.len = 0;
        self.cursor = 0;
    }

    /// Insert `byte` at the cursor. Returns false if the buffer is full.
    pub fn insert<W: Write>(&mut self, byte: u8, echo: &mut Echo<'_, W>) -> Result<bool, Error> {
        if self.is_full() {
            return Ok(false);
        }

        self.content.copy_within(self.cursor..self.len, self.cursor + 1);
        self.content[self.cursor] = byte;
        self.len += 1;
        self.cursor += 1;

        echo.bytes(&self.content[self.cursor - 1..self.len])?;
        echo.backspaces(self.len - self.cursor)?;

        Ok(true)
    }

    /// Remove the byte left of the cursor. Returns false at start of line.
    pub fn delete_before_cursor<W: Write>(
        &mut self,
        echo: &mut Echo<'_, W>,
    ) -> Result<bool, Error> {
        if self.cursor == 0 {
            return Ok(false);
        }

        self.content.copy_within(self.cursor..self.len, self.cursor - 1);
        self.len -= 1;
        self.cursor -= 1;

        echo.backspaces(1)?;
        echo.bytes(self.suffix())?;
        echo.bytes(b" ")?;
        echo.backspaces(self.len - self.cursor + 1)?;

        Ok(true)
    }

    pub fn move_cursor_left<W: Write>(&mut self, echo: &mut Echo<'_, W>) -> Result<bool, Error> {
        if self.cursor == 0 {
            return Ok(false);
        }

        self.cursor -= 1;
        echo.backspaces(1)?;

        Ok(true)
    }

    /// Move right by printing the byte under the cursor again
    pub fn move_cursor_right<W: Write>(&mut self, echo: &mut Echo<'_, W>) -> Result<bool, Error> {
        if self.cursor >= self.len {
            return Ok(false);
        }

        echo.bytes(&self.content[self.cursor..self.cursor + 1])?;
        self.cursor += 1;

        Ok(true)
    }

    pub fn move_to_end<W: Write>(&mut self, echo: &mut Echo<'_, W>) -> Result<(), Error> {
        echo.bytes(self.suffix())?;
        self.cursor = self.len;

        Ok(())
    }

    /// Erase the columns left of the cursor and empty the buffer.
    ///
    /// Anything right of the cursor stays on screen, use
    /// [`LineBuffer::clear_line`] to wipe the whole line.
    pub fn clear_to_empty<W: Write>(&mut self, echo: &mut Echo<'_, W>) -> Result<(), Error> {
        echo.erase(self.cursor)?;
        self.reset();

        Ok(())
    }

    /// Move to end of line, then erase all of it
    pub fn clear_line<W: Write>(&mut self, echo: &mut Echo<'_, W>) -> Result<(), Error> {
        self.move_to_end(echo)?;
        self.clear_to_empty(echo)
    }

    /// Replace the content with `bytes`, truncated to capacity, and print it.
    ///
    /// Expects an empty line on screen with the cursor at its start.
    pub fn load<W: Write>(&mut self, bytes: &[u8], echo: &mut Echo<'_, W>) -> Result<(), Error> {
        let len = bytes.len().min(Self::limit());

        self.content[..len].copy_from_slice(&bytes[..len]);
        self.len = len;
        self.cursor = len;

        echo.bytes(self.as_slice())
    }

    /// Append `bytes` at end of line, truncated to capacity. The cursor
    /// ends up at end of line. Returns number of bytes appended.
    pub fn append<W: Write>(&mut self, bytes: &[u8], echo: &mut Echo<'_, W>) -> Result<usize, Error> {
        self.move_to_end(echo)?;

        let count = bytes.len().min(Self::limit() - self.len);
        let start = self.len;

        self.content[start..start + count].copy_from_slice(&bytes[..count]);
        self.len += count;
        self.cursor = self.len;

        echo.bytes(&self.content[start..self.len])?;

        Ok(count)
    }
}

impl<const C: usize> Default for LineBuffer<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testlib::MockTerminal;

    fn type_str<const C: usize>(buf: &mut LineBuffer<C>, term: &mut MockTerminal, s: &str) {
        let mut echo = Echo::new(term);

        for b in s.bytes() {
            buf.insert(b, &mut echo).unwrap();
        }
    }

    fn left<const C: usize>(buf: &mut LineBuffer<C>, term: &mut MockTerminal, n: usize) {
        let mut echo = Echo::new(term);

        for _ in 0..n {
            buf.move_cursor_left(&mut echo).unwrap();
        }
    }

    fn backspace<const C: usize>(buf: &mut LineBuffer<C>, term: &mut MockTerminal) -> bool {
        buf.delete_before_cursor(&mut Echo::new(term)).unwrap()
    }

    #[test]
    fn insert_at_end() {
        let mut term = MockTerminal::new();
        let mut buf = LineBuffer::<16>::new();

        type_str(&mut buf, &mut term, "hello");

        assert_eq!(buf.as_str(), "hello");
        assert_eq!(buf.cursor(), 5);
        assert_eq!(term.output(), b"hello");
        assert_eq!(term.column(), 5);
    }

    #[test]
    fn insert_mid_line() {
        let mut term = MockTerminal::new();
        let mut buf = LineBuffer::<16>::new();

        type_str(&mut buf, &mut term, "hllo");
        left(&mut buf, &mut term, 3);
        term.clear_output();

        type_str(&mut buf, &mut term, "e");

        assert_eq!(buf.as_str(), "hello");
        assert_eq!(buf.cursor(), 2);
        // inserted byte, shifted suffix, then back over the suffix
        assert_eq!(term.output(), b"ello\x08\x08\x08");
        assert_eq!(term.screen_as_string(), "hello");
        assert_eq!(term.column(), 2);
    }

    #[test]
    fn delete_mid_line() {
        let mut term = MockTerminal::new();
        let mut buf = LineBuffer::<16>::new();

        type_str(&mut buf, &mut term, "hello");
        left(&mut buf, &mut term, 2);
        term.clear_output();

        assert!(backspace(&mut buf, &mut term));

        assert_eq!(buf.as_str(), "helo");
        assert_eq!(buf.cursor(), 2);
        assert_eq!(term.output(), b"\x08lo \x08\x08\x08");
        assert_eq!(term.screen_as_string(), "helo");
        assert_eq!(term.column(), 2);
    }

    #[test]
    fn delete_at_start_is_noop() {
        let mut term = MockTerminal::new();
        let mut buf = LineBuffer::<16>::new();

        assert!(!backspace(&mut buf, &mut term));

        type_str(&mut buf, &mut term, "ab");
        left(&mut buf, &mut term, 2);
        term.clear_output();

        assert!(!backspace(&mut buf, &mut term));
        assert_eq!(buf.as_str(), "ab");
        assert!(term.output().is_empty());
    }

    #[test]
    fn insert_delete_symmetry() {
        let mut term = MockTerminal::new();
        let mut buf = LineBuffer::<32>::new();

        type_str(&mut buf, &mut term, "rm file");
        left(&mut buf, &mut term, 4);

        type_str(&mut buf, &mut term, "-rf ");
        for _ in 0..4 {
            assert!(backspace(&mut buf, &mut term));
        }

        assert_eq!(buf.as_str(), "rm file");
        assert_eq!(buf.cursor(), 3);
        assert_eq!(term.screen_as_string(), "rm file");
        assert_eq!(term.column(), 3);
    }

    #[test]
    fn capacity_ceiling() {
        let mut term = MockTerminal::new();
        let mut buf = LineBuffer::<8>::new();

        type_str(&mut buf, &mut term, "abcdefg");
        assert!(buf.is_full());
        assert_eq!(buf.len(), 7);

        term.clear_output();

        assert!(!buf.insert(b'h', &mut Echo::new(&mut term)).unwrap());
        left(&mut buf, &mut term, 3);
        assert!(!buf.insert(b'h', &mut Echo::new(&mut term)).unwrap());

        assert_eq!(buf.as_str(), "abcdefg");
        assert_eq!(buf.cursor(), 4);
        assert_eq!(term.output(), b"\x08\x08\x08");
    }

    #[test]
    fn cursor_bounds() {
        let mut term = MockTerminal::new();
        let mut buf = LineBuffer::<16>::new();

        let mut echo = Echo::new(&mut term);
        assert!(!buf.move_cursor_left(&mut echo).unwrap());
        assert!(!buf.move_cursor_right(&mut echo).unwrap());

        type_str(&mut buf, &mut term, "abc");
        left(&mut buf, &mut term, 3);
        term.clear_output();

        let mut echo = Echo::new(&mut term);
        assert!(buf.move_cursor_right(&mut echo).unwrap());
        assert!(buf.move_cursor_right(&mut echo).unwrap());
        assert_eq!(buf.cursor(), 2);

        // Moving right echoes the byte under the cursor
        assert_eq!(term.output(), b"ab");
        assert_eq!(term.column(), 2);
    }

    #[test]
    fn clear_to_empty_only_erases_before_cursor() {
        let mut term = MockTerminal::new();
        let mut buf = LineBuffer::<16>::new();

        type_str(&mut buf, &mut term, "hello");
        left(&mut buf, &mut term, 2);

        buf.clear_to_empty(&mut Echo::new(&mut term)).unwrap();

        assert!(buf.is_empty());
        assert_eq!(buf.cursor(), 0);
        assert_eq!(term.screen_as_string(), "   lo");
        assert_eq!(term.column(), 0);
    }

    #[test]
    fn clear_line_erases_everything() {
        let mut term = MockTerminal::new();
        let mut buf = LineBuffer::<16>::new();

        type_str(&mut buf, &mut term, "hello");
        left(&mut buf, &mut term, 2);

        buf.clear_line(&mut Echo::new(&mut term)).unwrap();

        assert!(buf.is_empty());
        assert_eq!(term.screen_as_string(), "");
        assert_eq!(term.column(), 0);
    }

    #[test]
    fn load_truncates() {
        let mut term = MockTerminal::new();
        let mut buf = LineBuffer::<4>::new();

        buf.load(b"abcdef", &mut Echo::new(&mut term)).unwrap();

        assert_eq!(buf.as_str(), "abc");
        assert_eq!(buf.cursor(), 3);
        assert_eq!(term.output(), b"abc");
    }

    #[test]
    fn append_moves_to_end() {
        let mut term = MockTerminal::new();
        let mut buf = LineBuffer::<8>::new();

        type_str(&mut buf, &mut term, "ab");
        left(&mut buf, &mut term, 2);

        let appended = buf.append(b"cdefgh", &mut Echo::new(&mut term)).unwrap();

        assert_eq!(appended, 5);
        assert_eq!(buf.as_str(), "abcdefg");
        assert_eq!(buf.cursor(), 7);
        assert_eq!(term.screen_as_string(), "abcdefg");
        assert_eq!(term.column(), 7);
    }

    #[test]
    fn zero_capacity() {
        let mut term = MockTerminal::new();
        let mut buf = LineBuffer::<0>::new();

        assert!(buf.is_full());
        assert!(!buf.insert(b'a', &mut Echo::new(&mut term)).unwrap());
        assert_eq!(buf.append(b"abc", &mut Echo::new(&mut term)).unwrap(), 0);
    }
}
