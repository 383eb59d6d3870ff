//! Glyph row decoding: one line of `.`/`*` pixels into one byte.
use crate::error::{MakefontError, Result};

/// Widest row that still fits one element of the generated `char` array.
pub const MAX_ROW_WIDTH: usize = 8;

/// How characters other than `.` and `*` inside a glyph row are treated.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub enum RowMode {
    /// Reject them with [`MakefontError::UnexpectedChar`].
    #[default]
    Strict,
    /// Drop them silently; the remaining pixels close up. Rows that end up
    /// wider than [`MAX_ROW_WIDTH`] are still rejected.
    Lenient,
}

/// Decode a trimmed glyph row. `line` is the 1-based source line used in errors.
///
/// Pixels are read most significant bit first. A row shorter than eight
/// pixels is not padded, so `"*"` decodes to `0x1`.
pub fn parse_row(text: &str, line: usize, mode: RowMode) -> Result<u8> {
    let mut value: u8 = 0;
    let mut width = 0;
    for (idx, ch) in text.chars().enumerate() {
        let bit = match ch {
            '.' => 0,
            '*' => 1,
            _ if mode == RowMode::Lenient => continue,
            _ => {
                return Err(MakefontError::UnexpectedChar {
                    line,
                    column: idx + 1,
                    ch,
                })
            }
        };
        width += 1;
        if width > MAX_ROW_WIDTH {
            continue;
        }
        value = (value << 1) | bit;
    }
    match width {
        0 => Err(MakefontError::EmptyRow { line }),
        w if w > MAX_ROW_WIDTH => Err(MakefontError::RowTooWide { line, width: w }),
        _ => Ok(value),
    }
}
