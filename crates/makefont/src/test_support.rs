//! Test support utilities for makefont.
//!
//! Helpers that are useful when testing glyph previews but are not part of
//! the conversion API.

use crate::{MakefontError, PixelTarget};

/// Captures rendered pixels into rows of booleans.
pub struct BufferTarget {
    pub rows: Vec<Vec<bool>>,
    cur_row: usize,
}

impl BufferTarget {
    pub fn new() -> Self {
        Self {
            rows: vec![Vec::new()],
            cur_row: 0,
        }
    }

    /// Rows as text, `*` for set pixels and `.` for clear ones. The empty
    /// row opened by the final `next_row` is dropped.
    pub fn to_ascii(&self) -> Vec<String> {
        let mut out: Vec<String> = self
            .rows
            .iter()
            .map(|r| r.iter().map(|&on| if on { '*' } else { '.' }).collect())
            .collect();
        if out.last().is_some_and(|r| r.is_empty()) {
            out.pop();
        }
        out
    }
}

impl Default for BufferTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelTarget for BufferTarget {
    type Error = MakefontError;

    fn pixel(&mut self, on: bool) -> std::result::Result<(), Self::Error> {
        if self.cur_row >= self.rows.len() {
            self.rows.push(Vec::new());
        }
        self.rows[self.cur_row].push(on);
        Ok(())
    }

    fn next_row(&mut self) -> std::result::Result<(), Self::Error> {
        self.cur_row += 1;
        if self.cur_row >= self.rows.len() {
            self.rows.push(Vec::new());
        }
        Ok(())
    }
}
