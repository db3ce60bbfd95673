use std::collections::VecDeque;

/// An ordered queue of tokens, handing off emitted tokens from the lexer to its consumer
///
/// A lexing step can emit any number of tokens, while consumers pull tokens one at a time,
/// so emitted tokens are queued until they're requested. Once closed, no further tokens are
/// accepted, but tokens that are already queued remain available.
#[derive(Clone, Debug)]
pub struct TokenChannel<T> {
    queue: VecDeque<T>,
    closed: bool,
}

impl<T> Default for TokenChannel<T> {
    fn default() -> Self {
        Self {
            queue: VecDeque::new(),
            closed: false,
        }
    }
}

impl<T> TokenChannel<T> {
    /// Adds a token to the back of the queue
    ///
    /// Returns false if the channel is closed, in which case the token is dropped.
    pub fn push(&mut self, token: T) -> bool {
        if self.closed {
            false
        } else {
            self.queue.push_back(token);
            true
        }
    }

    /// Takes the token at the front of the queue
    pub fn pop(&mut self) -> Option<T> {
        self.queue.pop_front()
    }

    /// The number of queued tokens
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns true if there are no queued tokens
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Stops the channel from accepting further tokens
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Returns true if the channel has been closed
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}
