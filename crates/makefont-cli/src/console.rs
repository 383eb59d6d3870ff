use makefont::{BitmapFont, PixelTarget, Result};

pub struct ConsoleRenderer {
    lines: Vec<String>,
    cur: usize,
    on: char,
    off: char,
}

impl ConsoleRenderer {
    pub fn new(on: char, off: char) -> Self {
        Self {
            lines: vec![String::new()],
            cur: 0,
            on,
            off,
        }
    }

    pub fn into_string(mut self) -> String {
        if self.lines.last().is_some_and(|l| l.is_empty()) {
            self.lines.pop();
        }
        self.lines.join("\n")
    }
}

impl PixelTarget for ConsoleRenderer {
    type Error = std::fmt::Error;
    fn pixel(&mut self, on: bool) -> std::result::Result<(), Self::Error> {
        if self.cur >= self.lines.len() {
            self.lines.push(String::new());
        }
        self.lines[self.cur].push(if on { self.on } else { self.off });
        Ok(())
    }
    fn next_row(&mut self) -> std::result::Result<(), Self::Error> {
        self.cur += 1;
        if self.cur >= self.lines.len() {
            self.lines.push(String::new());
        }
        Ok(())
    }
}

/// Convenience: render text into a String of `on`/`off` characters.
pub fn render_to_text(font: &BitmapFont, text: &str, on: char, off: char) -> Result<String> {
    let mut renderer = ConsoleRenderer::new(on, off);
    font.render_str(&mut renderer, text)?;
    Ok(renderer.into_string())
}
