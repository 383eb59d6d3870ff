//! makefont: bitmap font table generator.
//! Parses `.`/`*` ASCII-art glyph rows, packs them into bytes and emits a
//! C array initializer. A [`BitmapFont`] view previews the packed result.

pub mod bitmap;
pub mod emit;
mod error;
pub mod row;
pub mod table;

pub use bitmap::BitmapFont;
pub use emit::{ArrayDecl, ArrayWriter};
pub use error::{MakefontError, Result};
pub use row::{parse_row, RowMode};
pub use table::{convert, convert_str, ConvertOptions, Entry, FontTable, Group};

// Test utilities
pub mod test_support;

pub trait PixelTarget {
    type Error;
    fn pixel(&mut self, on: bool) -> std::result::Result<(), Self::Error>;
    fn next_row(&mut self) -> std::result::Result<(), Self::Error>;
}
