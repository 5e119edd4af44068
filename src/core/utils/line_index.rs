use schemars::JsonSchema;
use serde::Serialize;

/// Editor position: 0-based line and UTF-16 code unit column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, JsonSchema)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

/// Pre-computed line starts of a document for O(log n) offset → position lookups.
pub struct LineIndex<'a> {
    text: &'a str,
    /// Byte offsets where each line starts. Line 0 starts at offset 0.
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        for (i, c) in text.char_indices() {
            if c == '\n' {
                line_starts.push(i + 1);
            }
        }
        Self { text, line_starts }
    }

    /// Convert a byte offset into a line/character position.
    ///
    /// Offsets past the end clamp to the end of the text; offsets inside a
    /// multi-byte character count the characters before it.
    pub fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.text.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line - 1,
        };
        let line_start = self.line_starts[line];
        let character = self.text[line_start..]
            .char_indices()
            .take_while(|(i, _)| line_start + i < offset)
            .map(|(_, c)| c.len_utf16())
            .sum();
        Position { line, character }
    }
}
