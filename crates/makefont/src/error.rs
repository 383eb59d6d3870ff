use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MakefontError {
    #[error("missing header: expected at least 2 lines, found {found}")]
    MissingHeader { found: usize },
    #[error("line {line}: glyph row has no '.' or '*' pixels")]
    EmptyRow { line: usize },
    #[error("line {line}, column {column}: unexpected character {ch:?} in glyph row")]
    UnexpectedChar { line: usize, column: usize, ch: char },
    #[error("line {line}: glyph row is {width} pixels wide, at most 8 fit a byte")]
    RowTooWide { line: usize, width: usize },
    #[error("glyph height must be non-zero")]
    InvalidGlyphHeight,
    #[error("unknown character: {0:?}")]
    UnknownChar(char),
    #[error("render target error")]
    RenderTarget,
}

pub type Result<T> = std::result::Result<T, MakefontError>;
