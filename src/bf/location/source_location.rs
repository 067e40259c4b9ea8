//! Source location utilities for converting byte offsets to line/column positions
//!
//! Tokens carry byte ranges; diagnostics carry positions. This module bridges the two.

use super::position::Position;

/// Provides fast conversion from byte offsets to line/column positions
pub struct SourceLocation {
    source: String,
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl SourceLocation {
    /// Create a new SourceLocation from source text
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self {
            source: source.to_string(),
            line_starts,
        }
    }

    /// Convert a byte offset to a line/column position.
    ///
    /// Offsets past the end of the source clamp to the end.
    pub fn byte_to_position(&self, byte_offset: usize) -> Position {
        let byte_offset = byte_offset.min(self.source.len());
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);

        let line_start = self.line_starts[line];
        let column = self
            .source
            .get(line_start..byte_offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(byte_offset - line_start);

        Position::new(line + 1, column + 1)
    }

    /// Position just past the last character
    pub fn end_position(&self) -> Position {
        self.byte_to_position(self.source.len())
    }

    /// Get the total number of lines in the source
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_to_position_single_line() {
        let loc = SourceLocation::new("a: b*;");
        assert_eq!(loc.byte_to_position(0), Position::new(1, 1));
        assert_eq!(loc.byte_to_position(3), Position::new(1, 4));
        assert_eq!(loc.byte_to_position(5), Position::new(1, 6));
    }

    #[test]
    fn test_byte_to_position_multiline() {
        let loc = SourceLocation::new("a: b;\nb: c;\nc;");

        assert_eq!(loc.byte_to_position(0), Position::new(1, 1));
        assert_eq!(loc.byte_to_position(6), Position::new(2, 1));
        assert_eq!(loc.byte_to_position(9), Position::new(2, 4));
        assert_eq!(loc.byte_to_position(12), Position::new(3, 1));
    }

    #[test]
    fn test_byte_to_position_with_unicode() {
        // "é" takes two bytes but one column
        let loc = SourceLocation::new("// é\na;");
        assert_eq!(loc.byte_to_position(6), Position::new(2, 1));
        let loc = SourceLocation::new("é b");
        assert_eq!(loc.byte_to_position(3), Position::new(1, 3));
    }

    #[test]
    fn test_end_position_clamps() {
        let loc = SourceLocation::new("a;\n");
        assert_eq!(loc.end_position(), Position::new(2, 1));
        assert_eq!(loc.byte_to_position(100), Position::new(2, 1));
    }

    #[test]
    fn test_line_count() {
        assert_eq!(SourceLocation::new("single").line_count(), 1);
        assert_eq!(SourceLocation::new("line1\nline2").line_count(), 2);
        assert_eq!(SourceLocation::new("line1\nline2\nline3").line_count(), 3);
    }
}
