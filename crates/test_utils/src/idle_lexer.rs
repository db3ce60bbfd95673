use bufflex::{LexedToken, Lexer, Token};

/// Makes a lexer with an entry step that does nothing
///
/// Useful for exercising the lexer's operations directly, without running a chain of steps.
pub fn idle_lexer<T>(input: &str) -> Lexer<T>
where
    T: Token + From<LexedToken>,
{
    Lexer::new("test", input, |_: &mut Lexer<T>| None)
}

/// Runs the provided operations against an idle lexer, returning the capture buffer's contents
pub fn buffered_after(input: &str, operations: impl FnOnce(&mut Lexer)) -> String {
    let mut lexer = idle_lexer(input);
    operations(&mut lexer);
    lexer.buffered().to_string()
}
