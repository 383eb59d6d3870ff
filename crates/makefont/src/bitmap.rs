//! Read-only view over a packed table, addressed the way a kernel console
//! looks up glyphs: `height` bytes per character at `height * code`.
use crate::{
    error::{MakefontError, Result},
    table::FontTable,
    PixelTarget,
};

/// Pixels per glyph row; every row is one byte.
pub const GLYPH_WIDTH: usize = 8;
/// Rows per glyph in the 8x16 hankaku layout.
pub const DEFAULT_GLYPH_HEIGHT: usize = 16;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitmapFont {
    bytes: Vec<u8>,
    glyph_height: usize,
}

impl BitmapFont {
    pub fn new(bytes: Vec<u8>, glyph_height: usize) -> Result<Self> {
        if glyph_height == 0 {
            return Err(MakefontError::InvalidGlyphHeight);
        }
        Ok(Self {
            bytes,
            glyph_height,
        })
    }

    pub fn from_table(table: &FontTable, glyph_height: usize) -> Result<Self> {
        Self::new(table.bytes(), glyph_height)
    }

    pub fn glyph_height(&self) -> usize {
        self.glyph_height
    }

    /// Number of complete glyphs; a trailing partial glyph is not counted.
    pub fn glyph_count(&self) -> usize {
        self.bytes.len() / self.glyph_height
    }

    pub fn has_char(&self, ch: char) -> bool {
        self.glyph(ch).is_some()
    }

    pub fn glyph(&self, ch: char) -> Option<&[u8]> {
        let offset = (ch as usize).checked_mul(self.glyph_height)?;
        let end = offset.checked_add(self.glyph_height)?;
        self.bytes.get(offset..end)
    }

    pub fn render_glyph<T: PixelTarget>(&self, target: &mut T, ch: char) -> Result<()> {
        let mut buf = [0u8; 4];
        self.render_str(target, ch.encode_utf8(&mut buf))
    }

    /// Draw `text` as one line of glyphs, row by row, left to right.
    pub fn render_str<T: PixelTarget>(&self, target: &mut T, text: &str) -> Result<()> {
        let glyphs = text
            .chars()
            .map(|ch| self.glyph(ch).ok_or(MakefontError::UnknownChar(ch)))
            .collect::<Result<Vec<_>>>()?;
        for dy in 0..self.glyph_height {
            for glyph in &glyphs {
                let row = glyph[dy];
                for dx in 0..GLYPH_WIDTH {
                    target
                        .pixel((row << dx) & 0x80 != 0)
                        .map_err(|_| MakefontError::RenderTarget)?;
                }
            }
            target.next_row().map_err(|_| MakefontError::RenderTarget)?;
        }
        Ok(())
    }
}
