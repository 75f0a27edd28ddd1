// SPDX-License-Identifier: Apache-2.0

/// A cursor over the input bytes being parsed.
///
/// This encapsulates the data slice and the current position that are
/// always used together. The position only ever moves forward; the input
/// itself is never mutated.
#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of the given data.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Looks at the byte under the cursor without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Advances the cursor past the byte returned by the last `peek`.
    ///
    /// Must only be called after `peek` returned `Some`, so the position
    /// never moves past `data.len()`.
    pub fn bump(&mut self) {
        self.pos += 1;
    }

    pub fn current_pos(&self) -> usize {
        self.pos
    }

    /// Gets a slice of the data from start to end positions, with bounds
    /// checking.
    pub fn slice(&self, start: usize, end: usize) -> Option<&'a [u8]> {
        self.data.get(start..end)
    }

    /// True once every input byte has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Advances past zero or more JSON whitespace bytes.
    pub fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.bump();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_boundary_behavior() {
        let data = b"ab"; // 2 bytes: positions 0 and 1 are valid
        let mut cursor = Cursor::new(data);

        assert_eq!(cursor.current_pos(), 0);
        assert!(!cursor.is_at_end());
        assert_eq!(cursor.peek(), Some(b'a'));
        cursor.bump();

        assert_eq!(cursor.current_pos(), 1);
        assert_eq!(cursor.peek(), Some(b'b'));
        cursor.bump();

        // Position 2: exactly at end (pos == data.len()), no more data
        assert_eq!(cursor.current_pos(), data.len());
        assert!(cursor.is_at_end());
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut cursor = Cursor::new(b"x");
        assert_eq!(cursor.peek(), Some(b'x'));
        assert_eq!(cursor.peek(), Some(b'x'));
        assert_eq!(cursor.current_pos(), 0);
        cursor.bump();
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_skip_whitespace_all_four_kinds() {
        let mut cursor = Cursor::new(b" \t\n\rz");
        cursor.skip_whitespace();
        assert_eq!(cursor.peek(), Some(b'z'));
    }

    #[test]
    fn test_skip_whitespace_stops_at_end() {
        let mut cursor = Cursor::new(b"   ");
        cursor.skip_whitespace();
        assert!(cursor.is_at_end());

        // And does nothing on empty input
        let mut cursor = Cursor::new(b"");
        cursor.skip_whitespace();
        assert_eq!(cursor.current_pos(), 0);
    }

    #[test]
    fn test_slice_bounds_checking() {
        let cursor = Cursor::new(b"12345");
        assert_eq!(cursor.slice(1, 4), Some(&b"234"[..]));
        assert_eq!(cursor.slice(0, 5), Some(&b"12345"[..]));
        assert_eq!(cursor.slice(0, 6), None);
        assert_eq!(cursor.slice(4, 2), None);
    }
}
