use std::fmt;

/// Represents a line/column position in the lexer's input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// The position's line, counting from 0
    pub line: u32,
    /// The position's column, counting from 0
    pub column: u32,
}

impl Position {
    /// Initializes a position with the given line and column
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    // Rendered 1-based, matching how editors report positions
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// A span is a range in the input, represented by a start and end position
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// The span's start position
    pub start: Position,
    /// The span's end position
    pub end: Position,
}

impl Span {
    /// Returns a zero-width span at the given position
    pub const fn empty_at(position: Position) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    /// Returns true if the span doesn't cover any input
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
