//! Conversions between byte offsets, codepoint offsets and line/column positions.

/// Maps byte offsets of a `&str` to codepoint offsets and back.
#[derive(Debug, Clone)]
pub struct CharOffsets {
    /// Byte offset of each codepoint, plus a trailing entry for the text length
    byte_starts: Vec<usize>,
}

impl CharOffsets {
    pub fn new(content: &str) -> Self {
        let mut byte_starts: Vec<usize> = content.char_indices().map(|(i, _)| i).collect();
        byte_starts.push(content.len());
        Self { byte_starts }
    }

    /// Number of codepoints
    pub fn char_len(&self) -> usize {
        self.byte_starts.len() - 1
    }

    /// Codepoint offset of a byte offset on a char boundary. Offsets inside a
    /// codepoint round up to the next one.
    pub fn char_offset(&self, byte_offset: usize) -> usize {
        self.byte_starts.partition_point(|&start| start < byte_offset)
    }

    /// Byte offset of a codepoint offset, clamped to the text length.
    pub fn byte_offset(&self, char_offset: usize) -> usize {
        self.byte_starts[char_offset.min(self.char_len())]
    }
}

/// 1-based line/column lookup over codepoint offsets.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Codepoint offset where each line starts
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(content: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, c) in content.chars().enumerate() {
            if c == '\n' {
                line_starts.push(i + 1);
            }
        }
        Self { line_starts }
    }

    /// (line, column), both 1-based, column counted in codepoints
    pub fn line_col(&self, char_offset: usize) -> (usize, usize) {
        let line = self.line_starts.partition_point(|&start| start <= char_offset).max(1);
        let column = char_offset - self.line_starts[line - 1] + 1;
        (line, column)
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
