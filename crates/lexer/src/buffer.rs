use crate::{Position, Span};

/// Accumulates the symbols of the token that's currently being assembled
///
/// Along with the captured text, the buffer tracks the span of input that the text was
/// captured from.
#[derive(Clone, Debug, Default)]
pub struct CaptureBuffer {
    text: String,
    // The position of the first captured symbol
    start: Option<Position>,
    // The position following the most recently captured symbol
    end: Position,
}

impl CaptureBuffer {
    /// Appends a symbol that was found at `position`, ending at `end`
    pub fn push(&mut self, symbol: char, position: Position, end: Position) {
        if self.start.is_none() {
            self.start = Some(position);
        }
        self.text.push(symbol);
        self.end = end;
    }

    /// The captured text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns true if nothing has been captured
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The span of the captured text, or an empty span at `fallback` if nothing was captured
    pub fn span_or(&self, fallback: Position) -> Span {
        match self.start {
            Some(start) => Span {
                start,
                end: self.end,
            },
            None => Span::empty_at(fallback),
        }
    }

    /// Takes the captured text and its span, leaving the buffer empty
    pub fn take(&mut self, fallback: Position) -> (String, Span) {
        let span = self.span_or(fallback);
        self.start = None;
        (std::mem::take(&mut self.text), span)
    }

    /// Clears the buffer
    pub fn reset(&mut self) {
        self.text.clear();
        self.start = None;
    }
}
