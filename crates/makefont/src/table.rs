//! Font table parsing and the text-to-array conversion.
use crate::{
    emit::{ArrayDecl, ArrayWriter},
    error::{MakefontError, Result},
    row::{parse_row, RowMode},
};
use tracing::{debug, warn};

/// Lines at the top of every source file that carry no glyph data.
pub const HEADER_LINES: usize = 2;

const MARKER: &str = "char";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    /// A line containing `char`, e.g. `char 0x41`; the trimmed text is kept.
    Marker(String),
    /// One decoded glyph row.
    Row(u8),
}

/// Parsed font source: every marker and glyph row, in source order, with
/// the 1-based line number it came from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FontTable {
    entries: Vec<(usize, Entry)>,
}

/// Values between two markers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group<'a> {
    pub label: Option<&'a str>,
    pub values: Vec<u8>,
}

#[derive(Clone, Debug, Default)]
pub struct ConvertOptions {
    pub decl: ArrayDecl,
    pub mode: RowMode,
}

fn is_marker(line: &str) -> bool {
    line.to_ascii_lowercase().contains(MARKER)
}

impl FontTable {
    pub fn parse<S: AsRef<str>>(lines: &[S], mode: RowMode) -> Result<Self> {
        if lines.len() < HEADER_LINES {
            return Err(MakefontError::MissingHeader { found: lines.len() });
        }
        let mut entries = Vec::new();
        for (idx, raw) in lines.iter().enumerate().skip(HEADER_LINES) {
            let line = idx + 1;
            let text = raw.as_ref().trim();
            if text.is_empty() {
                continue;
            }
            let entry = if is_marker(text) {
                Entry::Marker(text.to_string())
            } else {
                Entry::Row(parse_row(text, line, mode)?)
            };
            entries.push((line, entry));
        }
        Ok(Self { entries })
    }

    pub fn parse_str(input: &str, mode: RowMode) -> Result<Self> {
        let lines: Vec<&str> = input.lines().collect();
        Self::parse(&lines, mode)
    }

    pub fn entries(&self) -> impl Iterator<Item = (usize, &Entry)> {
        self.entries.iter().map(|(line, e)| (*line, e))
    }

    /// The packed table, one byte per glyph row.
    pub fn bytes(&self) -> Vec<u8> {
        self.entries
            .iter()
            .filter_map(|(_, e)| match e {
                Entry::Row(v) => Some(*v),
                Entry::Marker(_) => None,
            })
            .collect()
    }

    pub fn value_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, e)| matches!(e, Entry::Row(_)))
            .count()
    }

    /// Split the table at its markers. Rows before the first marker form an
    /// unlabeled group; a marker with no rows still yields an empty group.
    pub fn groups(&self) -> Vec<Group<'_>> {
        let mut groups: Vec<Group<'_>> = Vec::new();
        for (_, entry) in &self.entries {
            match entry {
                Entry::Marker(label) => groups.push(Group {
                    label: Some(label.as_str()),
                    values: Vec::new(),
                }),
                Entry::Row(v) => match groups.last_mut() {
                    Some(g) => g.values.push(*v),
                    None => groups.push(Group {
                        label: None,
                        values: vec![*v],
                    }),
                },
            }
        }
        groups
    }

    pub fn write_array(&self, decl: &ArrayDecl) -> String {
        let writer = self
            .entries
            .iter()
            .fold(ArrayWriter::new(decl), |mut w, (line, entry)| {
                match entry {
                    Entry::Marker(label) => {
                        debug!(line, label = label.as_str(), "glyph group");
                        w.break_group();
                    }
                    Entry::Row(v) => w.push_value(*v),
                }
                w
            });
        if writer.value_count() != decl.len {
            warn!(
                values = writer.value_count(),
                declared = decl.len,
                "value count does not match declared length of {}",
                decl.name
            );
        }
        writer.finish()
    }
}

/// Convert font source lines into a C array initializer.
///
/// The first [`HEADER_LINES`] lines are skipped. Blank lines are ignored,
/// lines containing `char` (any case) start a new indented group, and every
/// other line is decoded as a glyph row.
pub fn convert<S: AsRef<str>>(lines: &[S], options: &ConvertOptions) -> Result<String> {
    let table = FontTable::parse(lines, options.mode)?;
    Ok(table.write_array(&options.decl))
}

pub fn convert_str(input: &str, options: &ConvertOptions) -> Result<String> {
    let table = FontTable::parse_str(input, options.mode)?;
    Ok(table.write_array(&options.decl))
}
