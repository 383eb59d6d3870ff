//! C array initializer emission.
const SEPARATOR: &str = ", ";
const GROUP_BREAK: &str = "\n    ";
const SUFFIX: &str = "\n};";

/// Name and declared length of the emitted `char` array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayDecl {
    pub name: String,
    pub len: usize,
}

impl ArrayDecl {
    pub fn new(name: impl Into<String>, len: usize) -> Self {
        Self {
            name: name.into(),
            len,
        }
    }
}

impl Default for ArrayDecl {
    fn default() -> Self {
        Self::new("hankaku", 4096)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Tail {
    Open,
    Value,
    Break,
}

/// Output buffer for a `char name[len] = { ... };` initializer.
///
/// The buffer only changes through [`push_value`](Self::push_value),
/// [`break_group`](Self::break_group) and [`finish`](Self::finish), and it
/// tracks what was written last so trimming never reaches into the prefix.
#[derive(Debug)]
pub struct ArrayWriter {
    out: String,
    tail: Tail,
    values: usize,
}

impl ArrayWriter {
    pub fn new(decl: &ArrayDecl) -> Self {
        Self {
            out: format!("char {}[{}] = {{ ", decl.name, decl.len),
            tail: Tail::Open,
            values: 0,
        }
    }

    /// Append `0x..` followed by a `", "` separator.
    pub fn push_value(&mut self, value: u8) {
        self.out.push_str(&format!("{value:#x}{SEPARATOR}"));
        self.tail = Tail::Value;
        self.values += 1;
    }

    /// Start a new visual group on its own indented line.
    ///
    /// The comma of the preceding separator stays in place; only its
    /// trailing space is dropped. Every call adds its own line, so an
    /// empty group still shows up as an indented blank line.
    pub fn break_group(&mut self) {
        if self.tail != Tail::Break {
            self.out.pop();
        }
        self.out.push_str(GROUP_BREAK);
        self.tail = Tail::Break;
    }

    pub fn value_count(&self) -> usize {
        self.values
    }

    pub fn finish(mut self) -> String {
        if self.tail == Tail::Value {
            self.out.truncate(self.out.len() - SEPARATOR.len());
        }
        self.out.push_str(SUFFIX);
        self.out
    }
}
