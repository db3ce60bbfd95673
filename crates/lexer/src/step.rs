use crate::{LexedToken, Lexer};
use std::fmt;

type StepFn<T> = dyn FnOnce(&mut Lexer<T>) -> Option<Step<T>>;

/// A single state of a lexer's state machine
///
/// A step performs captures and emits tokens using the lexer that it's given, and then returns
/// the step that should run next, or `None` to bring lexing to an end.
///
/// Any function or closure with a matching signature can be used as a step:
///
/// ```
/// use bufflex::{Lexer, Step, TokenType};
///
/// const WORD: TokenType = TokenType::new(1);
///
/// fn lex_word(lexer: &mut Lexer) -> Option<Step> {
///     if lexer.capture_identifier() {
///         lexer.emit(WORD);
///         Some(Step::new(lex_word))
///     } else {
///         None
///     }
/// }
///
/// let lexer = Lexer::new("words", "hello world", lex_word);
/// let words = lexer.map(|token| token.value).collect::<Vec<_>>();
/// assert_eq!(words, ["hello", "world"]);
/// ```
pub struct Step<T = LexedToken>(Box<StepFn<T>>);

impl<T> Step<T> {
    /// Wraps a function or closure as a step
    pub fn new(step: impl FnOnce(&mut Lexer<T>) -> Option<Step<T>> + 'static) -> Self {
        Self(Box::new(step))
    }

    /// Runs the step, returning the step that should follow it
    pub(crate) fn run(self, lexer: &mut Lexer<T>) -> Option<Step<T>> {
        (self.0)(lexer)
    }
}

impl<T> fmt::Debug for Step<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Step")
    }
}
