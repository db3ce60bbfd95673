use crate::Position;
use std::collections::VecDeque;
use unicode_width::UnicodeWidthChar;

/// A cursor over the lexer's input, providing the current symbol and cached lookahead
///
/// Symbols that have been peeked are held in a lookahead queue, and are replayed in their
/// original order by [advance](Cursor::advance) before any further symbols are read from the
/// input. End of input is represented by the absence of a current symbol.
#[derive(Clone, Debug)]
pub struct Cursor {
    // The input source
    source: String,
    // The byte offset of the next symbol that hasn't yet been read from the source
    next_byte: usize,
    // The current symbol, None when the end of the input has been reached
    current: Option<char>,
    // Symbols that have been read from the source but not yet made current
    lookahead: VecDeque<char>,
    // The position of the current symbol
    position: Position,
}

impl Cursor {
    /// Initializes a cursor with the given input, positioned at the input's first symbol
    pub fn new(source: impl Into<String>) -> Self {
        let mut result = Self {
            source: source.into(),
            next_byte: 0,
            current: None,
            lookahead: VecDeque::new(),
            position: Position::default(),
        };

        result.current = result.read_from_source();
        result
    }

    /// The current symbol
    ///
    /// None is returned once the end of the input has been reached.
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Returns true if there are no more symbols available
    pub fn is_eof(&self) -> bool {
        self.current.is_none()
    }

    /// The position of the current symbol
    pub fn position(&self) -> Position {
        self.position
    }

    /// Moves to the next symbol and returns it
    ///
    /// Previously peeked symbols are consumed before any further input is read.
    /// Advancing at the end of the input has no effect and keeps returning None.
    pub fn advance(&mut self) -> Option<char> {
        let previous = self.current?;

        if previous == '\n' {
            self.position.line += 1;
            self.position.column = 0;
        } else {
            // Control characters like tabs occupy a single column
            let width = if previous.is_control() {
                1
            } else {
                previous.width().unwrap_or(0)
            };
            self.position.column += width as u32;
        }

        self.current = match self.lookahead.pop_front() {
            Some(next) => Some(next),
            None => self.read_from_source(),
        };

        self.current
    }

    /// Advances by `n` symbols, stopping early if the end of the input is reached
    pub fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// Returns up to `n` of the symbols that follow the current symbol
    ///
    /// The current symbol is left unchanged, and the peeked symbols will be replayed by
    /// subsequent calls to [advance](Cursor::advance).
    ///
    /// Fewer than `n` symbols are returned when the input doesn't have enough remaining.
    pub fn peek(&mut self, n: usize) -> Vec<char> {
        let available = self.fill_lookahead(n);
        self.lookahead.iter().take(available).copied().collect()
    }

    /// Discards the remainder of the input
    pub fn drain(&mut self) {
        while self.advance().is_some() {}
    }

    // Makes sure that up to `n` symbols are available in the lookahead queue
    //
    // Returns the number of symbols that are available, which will be less than `n` when the
    // end of the input is reached.
    pub(crate) fn fill_lookahead(&mut self, n: usize) -> usize {
        while self.lookahead.len() < n {
            match self.read_from_source() {
                Some(c) => self.lookahead.push_back(c),
                None => break,
            }
        }

        self.lookahead.len().min(n)
    }

    // The symbols that have been read ahead of the current symbol
    pub(crate) fn lookahead(&self) -> impl Iterator<Item = char> + '_ {
        self.lookahead.iter().copied()
    }

    fn read_from_source(&mut self) -> Option<char> {
        let next = self.source[self.next_byte..].chars().next()?;
        self.next_byte += next.len_utf8();
        Some(next)
    }
}
