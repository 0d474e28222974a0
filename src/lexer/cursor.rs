use std::{
    iter::{Chain, Once},
    str::Chars,
};

/// Walks the source one character at a time, tracking row and column.
///
/// A single newline is appended after the last character of the source so
/// that a lexeme still in progress at end of input gets flushed. Each item
/// carries the row and column of the character itself, i.e. the position
/// *before* the cursor advances past it.
pub struct Cursor<'a> {
    chars: Chain<Chars<'a>, Once<char>>,
    row: u32,
    col: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Cursor<'a> {
        Cursor {
            chars: source.chars().chain(std::iter::once('\n')),
            row: 1,
            col: 1,
        }
    }

    /// Row of the next character to be yielded.
    pub fn row(&self) -> u32 {
        self.row
    }

    /// Column of the next character to be yielded.
    pub fn col(&self) -> u32 {
        self.col
    }
}

impl Iterator for Cursor<'_> {
    type Item = (char, u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.chars.next()?;
        let item = (c, self.row, self.col);

        match c {
            '\n' => {
                self.row = self.row.saturating_add(1);
                self.col = 1;
            }
            // Carriage returns do not occupy a column.
            '\r' => {}
            _ => self.col = self.col.saturating_add(1),
        }

        Some(item)
    }
}
