use crate::{
    CaptureBuffer, Cursor, Error, IgnoreFilter, LexedToken, LexerSettings, Position, Result,
    Span, Step, Token, TokenChannel, TokenType, matcher,
};
use std::fmt;

// Emits a debug event when debug logging is enabled for the lexer
macro_rules! debug_event {
    ($lexer:expr, $($arg:tt)+) => {
        if $lexer.settings.debug_logging {
            let name = &$lexer.name;
            let depth = $lexer.trace_depth;
            tracing::debug!(lexer = %name, depth, $($arg)+);
        }
    };
}

/// A buffering lexer, driven by a chain of [Step]s
///
/// The lexer maintains a cursor over its input along with a capture buffer, and provides
/// operations that steps use to move through the input, deciding which symbols should be
/// captured and which should be discarded. Captured symbols are packaged into tokens with
/// [emit](Lexer::emit).
///
/// Lexing is driven by the consumer: each call to
/// [next_emitted_token](Lexer::next_emitted_token) runs steps until a token has been emitted or
/// the chain of steps has come to an end.
///
/// ```
/// use bufflex::{Lexer, Step, TokenType};
///
/// const TAG: TokenType = TokenType::new(1);
///
/// fn lex_pound(lexer: &mut Lexer) -> Option<Step> {
///     if lexer.capture_until(true, "#") {
///         lexer.consume_current_token(true);
///         Some(Step::new(lex_tag_name))
///     } else {
///         None
///     }
/// }
///
/// fn lex_tag_name(lexer: &mut Lexer) -> Option<Step> {
///     if lexer.capture_identifier() {
///         lexer.emit(TAG);
///     }
///     Some(Step::new(lex_pound))
/// }
///
/// let mut lexer = Lexer::new("tags", "I like #unicorns and #cheese", lex_pound);
/// assert_eq!(lexer.next_emitted_token().value, "#unicorns");
/// assert_eq!(lexer.next_emitted_token().value, "#cheese");
/// assert!(lexer.next_emitted_token().token_type == TokenType::EOF);
/// ```
pub struct Lexer<T = LexedToken> {
    name: String,
    settings: LexerSettings,
    cursor: Cursor,
    buffer: CaptureBuffer,
    ignores: IgnoreFilter,
    // The literal found by the most recent capture_until search
    last_match: Option<String>,
    tokens: TokenChannel<T>,
    // The step that will run next, None once the chain has ended
    state: Option<Step<T>>,
    // Set by errorf and cancel, no further steps will run
    stopped: bool,
    // Set once the remaining input has been discarded and the channel closed
    finished: bool,
    // The nesting depth of the operation being traced
    trace_depth: usize,
}

impl<T> Lexer<T>
where
    T: Token + From<LexedToken>,
{
    /// Initializes a lexer with the given name, input, and entry step
    ///
    /// The name is used to identify the lexer in logs and errors.
    pub fn new(
        name: impl Into<String>,
        input: impl Into<String>,
        entry: impl FnOnce(&mut Lexer<T>) -> Option<Step<T>> + 'static,
    ) -> Self {
        Self::with_settings(name, input, entry, LexerSettings::default())
    }

    /// Initializes a lexer with the provided settings
    pub fn with_settings(
        name: impl Into<String>,
        input: impl Into<String>,
        entry: impl FnOnce(&mut Lexer<T>) -> Option<Step<T>> + 'static,
        settings: LexerSettings,
    ) -> Self {
        Self {
            name: name.into(),
            settings,
            cursor: Cursor::new(input),
            buffer: CaptureBuffer::default(),
            ignores: IgnoreFilter::default(),
            last_match: None,
            tokens: TokenChannel::default(),
            state: Some(Step::new(entry)),
            stopped: false,
            finished: false,
            trace_depth: 0,
        }
    }

    /// The lexer's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The lexer's settings
    pub fn settings(&self) -> &LexerSettings {
        &self.settings
    }

    /// Provides mutable access to the lexer's settings
    ///
    /// Changes take effect immediately, including when made from within a running step.
    pub fn settings_mut(&mut self) -> &mut LexerSettings {
        &mut self.settings
    }

    /// Enables or disables automatic whitespace removal
    pub fn set_auto_eat_whitespace(&mut self, enabled: bool) {
        self.settings.auto_eat_whitespace = enabled;
    }

    /// Enables or disables debug logging
    pub fn set_debug_logging(&mut self, enabled: bool) {
        self.settings.debug_logging = enabled;
    }

    /// The position of the lexer's current symbol in the input
    pub fn current_position(&self) -> Position {
        self.cursor.position()
    }

    /// The contents of the capture buffer
    pub fn buffered(&self) -> &str {
        self.buffer.as_str()
    }

    /// Returns true once the end of the input has been reached
    pub fn is_end_of_input(&self) -> bool {
        self.cursor.is_eof()
    }

    /// Returns true once the chain of steps has ended and the lexer has shut down
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Adds literals that should be ignored while capturing
    ///
    /// Ignored literals are skipped over wherever they appear in the input, they're never
    /// captured and never match as terminators. Blank literals are skipped.
    ///
    /// This can be called at any time, including from within a step.
    pub fn add_ignore_tokens<I, S>(&mut self, literals: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ignores.add(literals);
    }

    /// Removes literals that were previously added with
    /// [add_ignore_tokens](Lexer::add_ignore_tokens)
    pub fn remove_ignore_tokens<I, S>(&mut self, literals: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ignores.remove(literals);
    }

    /// Returns true if the literal is currently being ignored
    pub fn is_ignored(&self, literal: &str) -> bool {
        self.ignores.is_ignored(literal)
    }

    /// Returns true if the input at the current position starts with `literal`
    pub fn current_token_is(&mut self, literal: &str) -> bool {
        self.current_token_is_one_of(&[literal]).is_some()
    }

    /// Returns the first of the candidates that the input at the current position starts with
    ///
    /// Candidates are tested in the order they're given, so earlier candidates take precedence.
    /// Empty candidates are skipped, and nothing matches at the end of the input.
    pub fn current_token_is_one_of<'a>(&mut self, candidates: &[&'a str]) -> Option<&'a str> {
        self.trace_enter("current_token_is_one_of");
        debug_event!(self, "checking {candidates:?} at {:?}", self.cursor.current());

        let result = matcher::first_match(&mut self.cursor, candidates);

        debug_event!(self, "found {result:?}");
        self.trace_exit("current_token_is_one_of");
        result
    }

    /// Discards whitespace at the current position
    ///
    /// Returns true if any whitespace was discarded.
    pub fn eat_whitespace(&mut self) -> bool {
        self.trace_enter("eat_whitespace");
        let mut eaten = false;

        while self.cursor.current().is_some_and(char::is_whitespace) {
            self.cursor.advance();
            eaten = true;
        }

        debug_event!(self, "whitespace eaten: {eaten}");
        self.trace_exit("eat_whitespace");
        eaten
    }

    /// Captures symbols until the terminator is reached
    ///
    /// Returns true if the terminator was found, in which case the cursor is left at the start
    /// of the terminator, ready to be consumed or skipped. If `skip_whitespace` is true then no
    /// whitespace is written to the capture buffer.
    ///
    /// An empty terminator is never found, and nothing is captured.
    pub fn capture_until(&mut self, skip_whitespace: bool, terminator: &str) -> bool {
        self.capture_until_one_of(skip_whitespace, &[terminator]).is_some()
    }

    /// Captures symbols until one of the terminators is reached
    ///
    /// Returns the terminator that was found, or `None` if the end of the input was reached.
    /// When more than one terminator matches at the same position, the first in the list wins.
    ///
    /// If no non-empty terminators are provided then `None` is returned without any input being
    /// read.
    pub fn capture_until_one_of<'a>(
        &mut self,
        skip_whitespace: bool,
        terminators: &[&'a str],
    ) -> Option<&'a str> {
        self.trace_enter("capture_until_one_of");
        self.last_match = None;

        let result = if terminators.iter().all(|terminator| terminator.is_empty()) {
            debug_event!(self, "no terminators to search for");
            None
        } else {
            debug_event!(self, "searching for {terminators:?}");
            self.capture_until_match(skip_whitespace, terminators)
        };

        if let Some(found) = result {
            self.last_match = Some(found.to_string());
        }

        self.trace_exit("capture_until_one_of");
        result
    }

    fn capture_until_match<'a>(
        &mut self,
        skip_whitespace: bool,
        terminators: &[&'a str],
    ) -> Option<&'a str> {
        loop {
            if skip_whitespace && self.eat_whitespace() {
                debug_event!(self, "skipped whitespace");
                continue;
            }

            let Some(symbol) = self.cursor.current() else {
                debug_event!(self, "reached the end of the input");
                return None;
            };

            if self.skip_ignores() {
                continue;
            }

            if let Some(found) = matcher::first_match(&mut self.cursor, terminators) {
                debug_event!(self, "found terminator {found:?}");
                return Some(found);
            }

            self.capture_symbol(symbol);
        }
    }

    /// Captures a run of identifier symbols (letters, digits, and underscores)
    ///
    /// With automatic whitespace removal enabled, leading and trailing whitespace is discarded.
    /// Returns true if at least one symbol was captured.
    pub fn capture_identifier(&mut self) -> bool {
        self.trace_enter("capture_identifier");

        if self.settings.auto_eat_whitespace {
            self.eat_whitespace();
        }

        let mut found = false;

        while let Some(symbol) = self.cursor.current() {
            if self.skip_ignores() {
                if self.settings.auto_eat_whitespace {
                    self.eat_whitespace();
                }
                continue;
            }

            if !is_identifier_symbol(symbol) {
                debug_event!(self, "{symbol:?} isn't an identifier symbol");
                break;
            }

            found = true;
            self.capture_symbol(symbol);
        }

        if self.settings.auto_eat_whitespace {
            self.eat_whitespace();
        }

        if self.skip_ignores() && self.settings.auto_eat_whitespace {
            self.eat_whitespace();
        }

        self.trace_exit("capture_identifier");
        found
    }

    /// Captures the terminator that was found by the most recent `capture_until` call
    ///
    /// The terminator is only consumed if it's still present at the current position.
    /// If `clear_previous` is true, then the capture buffer is cleared before the terminator is
    /// written to it.
    ///
    /// Returns false without making any changes if there's no terminator to consume.
    pub fn consume_current_token(&mut self, clear_previous: bool) -> bool {
        self.trace_enter("consume_current_token");

        let Some(literal) = self.validated_last_match() else {
            self.trace_exit("consume_current_token");
            return false;
        };

        if clear_previous {
            self.buffer.reset();
        }

        for symbol in literal.chars() {
            self.capture_symbol(symbol);
        }

        self.eat_trailing_whitespace_and_ignores();

        self.trace_exit("consume_current_token");
        true
    }

    /// Skips past the terminator that was found by the most recent `capture_until` call
    ///
    /// This behaves like [consume_current_token](Lexer::consume_current_token), except that the
    /// terminator is discarded rather than being captured.
    pub fn skip_current_token(&mut self, clear_previous: bool) -> bool {
        self.trace_enter("skip_current_token");

        let Some(literal) = self.validated_last_match() else {
            self.trace_exit("skip_current_token");
            return false;
        };

        if clear_previous {
            self.buffer.reset();
        }

        self.cursor.advance_by(literal.chars().count());
        self.eat_trailing_whitespace_and_ignores();

        debug_event!(self, "skipped {literal:?}, now at {:?}", self.cursor.current());
        self.trace_exit("skip_current_token");
        true
    }

    /// Clears the capture buffer, returning its previous contents
    ///
    /// Useful for collecting the parts of a custom token, see [emit_token](Lexer::emit_token).
    pub fn flush(&mut self) -> String {
        self.trace_enter("flush");
        let (value, _) = self.buffer.take(self.cursor.position());
        debug_event!(self, "flushed {value:?}");
        self.trace_exit("flush");
        value
    }

    /// Emits a token of the given type, with the capture buffer's contents as its value
    ///
    /// The capture buffer is cleared.
    pub fn emit(&mut self, token_type: TokenType) {
        self.trace_enter("emit");
        let (value, span) = self.buffer.take(self.cursor.position());
        debug_event!(self, "emitting {token_type} token {value:?}");
        self.push_token(LexedToken::new(token_type, value, span).into());
        self.trace_exit("emit");
    }

    /// Emits a custom token, leaving the capture buffer unchanged
    pub fn emit_token(&mut self, token: T) {
        debug_event!(self, "emitting custom {} token", token.token_type());
        self.push_token(token);
    }

    /// Emits an error token with the given message, and stops the lexer
    ///
    /// No further steps will run after the current step, and `None` is returned so that the
    /// step can end the chain directly:
    ///
    /// ```
    /// use bufflex::{Lexer, Step, TokenType};
    ///
    /// fn lex_digits(lexer: &mut Lexer) -> Option<Step> {
    ///     match lexer.capture_until_one_of(true, &["x"]) {
    ///         Some(_) => {
    ///             let position = lexer.current_position();
    ///             lexer.errorf(format_args!("unexpected 'x' at {position}"))
    ///         }
    ///         None => None,
    ///     }
    /// }
    ///
    /// let mut lexer = Lexer::new("digits", "12x", lex_digits);
    /// let token = lexer.next_emitted_token();
    /// assert_eq!(token.token_type, TokenType::ERROR);
    /// assert_eq!(token.value, "unexpected 'x' at 1:3");
    /// ```
    pub fn errorf(&mut self, message: impl fmt::Display) -> Option<Step<T>> {
        let message = message.to_string();
        let position = self.cursor.position();
        debug_event!(self, "error at {position}: {message}");

        let token = LexedToken::new(TokenType::ERROR, message, Span::empty_at(position));
        self.push_token(token.into());
        self.stopped = true;
        None
    }

    /// Stops the lexer before its next step runs
    ///
    /// If called from within a step then the step that it returns is discarded.
    pub fn cancel(&mut self) {
        debug_event!(self, "cancelled");
        self.stopped = true;
        self.state = None;
    }

    /// Runs the chain of steps until it ends, and then shuts down the lexer
    ///
    /// Any remaining input is discarded. Emitted tokens remain available via
    /// [next_emitted_token](Lexer::next_emitted_token).
    ///
    /// This is intended for simple chains and testing individual steps,
    /// `next_emitted_token` or the lexer's `Iterator` implementation should otherwise be used.
    pub fn run_to_completion(&mut self) {
        self.trace_enter("run_to_completion");
        while self.run_step() {}
        self.shutdown();
        self.trace_exit("run_to_completion");
    }

    /// Returns the next emitted token
    ///
    /// If no token is waiting to be returned, then steps are run until a token is emitted.
    /// Once the chain of steps has ended, the end of input token (with type [TokenType::EOF])
    /// is returned, and will continue to be returned by subsequent calls.
    pub fn next_emitted_token(&mut self) -> T {
        self.trace_enter("next_emitted_token");

        let result = loop {
            if let Some(token) = self.tokens.pop() {
                debug_event!(self, "returning {} token '{token}'", token.token_type());
                break token;
            }

            if !self.run_step() {
                self.shutdown();
                debug_event!(self, "returning end of input");
                break LexedToken::eof(Span::empty_at(self.cursor.position())).into();
            }
        };

        self.trace_exit("next_emitted_token");
        result
    }

    /// Runs the lexer until the end of the input, collecting the emitted tokens
    ///
    /// If an error token is emitted then it's returned as an [Error].
    pub fn tokenize(&mut self) -> Result<Vec<T>> {
        let mut result = Vec::new();

        while let Some(token) = self.next() {
            if token.is_error() {
                let position = token
                    .span()
                    .map_or_else(|| self.cursor.position(), |span| span.start);
                return Err(Error::new(&self.name, token.to_string(), position));
            }
            result.push(token);
        }

        Ok(result)
    }

    // Runs the next step in the chain
    //
    // Returns false if the chain has ended.
    fn run_step(&mut self) -> bool {
        if self.stopped {
            self.state = None;
        }

        let Some(step) = self.state.take() else {
            return false;
        };

        self.trace_enter("step");
        let next = step.run(self);
        if !self.stopped {
            self.state = next;
        }
        self.trace_exit("step");

        true
    }

    fn shutdown(&mut self) {
        if self.finished {
            return;
        }

        debug_event!(self, "shutting down");
        self.state = None;
        self.cursor.drain();
        self.tokens.close();
        self.finished = true;
    }

    fn push_token(&mut self, token: T) {
        if !self.tokens.push(token) {
            tracing::warn!(lexer = %self.name, "token emitted after the lexer shut down");
        }
    }

    // Writes the current symbol to the capture buffer and advances the cursor
    fn capture_symbol(&mut self, symbol: char) {
        let start = self.cursor.position();
        self.cursor.advance();
        self.buffer.push(symbol, start, self.cursor.position());
        debug_event!(self, "captured {symbol:?}");
    }

    // Skips an ignored literal at the current position
    //
    // Returns true if a literal was skipped.
    fn skip_ignores(&mut self) -> bool {
        match self.ignores.find_match(&mut self.cursor) {
            Some((literal, symbol_count)) => {
                debug_event!(self, "ignoring {literal:?}");
                self.cursor.advance_by(symbol_count);
                true
            }
            None => false,
        }
    }

    fn eat_trailing_whitespace_and_ignores(&mut self) {
        if self.settings.auto_eat_whitespace {
            self.eat_whitespace();
        }

        while self.skip_ignores() {
            if self.settings.auto_eat_whitespace {
                self.eat_whitespace();
            }
        }
    }

    // The last matched literal, if it's still present at the current position
    fn validated_last_match(&mut self) -> Option<String> {
        let literal = self.last_match.clone()?;
        debug_event!(self, "checking last match {literal:?}");

        if self.cursor.is_eof() || !matcher::starts_with(&mut self.cursor, &literal) {
            debug_event!(self, "{literal:?} isn't at the current position");
            return None;
        }

        Some(literal)
    }

    fn trace_enter(&mut self, operation: &str) {
        if self.settings.debug_logging {
            self.trace_depth += 1;
            debug_event!(self, "enter {operation}");
        }
    }

    fn trace_exit(&mut self, operation: &str) {
        if self.settings.debug_logging {
            debug_event!(self, "exit {operation}");
            self.trace_depth = self.trace_depth.saturating_sub(1);
        }
    }
}

impl<T> Iterator for Lexer<T>
where
    T: Token + From<LexedToken>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_emitted_token();
        if token.is_eof() { None } else { Some(token) }
    }
}

impl<T> fmt::Debug for Lexer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexer")
            .field("name", &self.name)
            .field("settings", &self.settings)
            .field("position", &self.cursor.position())
            .field("buffered", &self.buffer.as_str())
            .field("queued_tokens", &self.tokens.len())
            .field("finished", &self.finished)
            .finish()
    }
}

/// Returns true if the symbol can be part of an identifier
///
/// Identifiers are made up of letters, digits, and underscores.
pub fn is_identifier_symbol(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}
