//! Line-oriented text builder for generated Java.
//!
//! Indentation is never implicit: every line is pushed with the `Indent` the
//! caller was handed, so nested blocks can be built in their own `Codegen`
//! and spliced into the parent afterwards.
use std::fmt;

/// Indentation measured in spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Indent(pub usize);

impl Indent {
    pub fn deeper(self, spaces: usize) -> Self {
        Indent(self.0 + spaces)
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:width$}", "", width = self.0)
    }
}

#[derive(Debug, Default)]
pub struct Codegen {
    out: String,
}

impl Codegen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, indent: Indent, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            self.out.push_str(&indent.to_string());
            self.out.push_str(text);
        }
        self.out.push('\n');
    }

    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Splice a block built elsewhere.
    pub fn append(&mut self, other: Codegen) {
        self.out.push_str(&other.out);
    }

    pub fn into_string(self) -> String {
        self.out
    }
}
