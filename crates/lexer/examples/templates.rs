use bufflex::{Lexer, LexerSettings, Result, Step, Token, TokenType};
use tracing_subscriber::EnvFilter;

const TEXT: TokenType = TokenType::new(1);
const OPEN: TokenType = TokenType::new(2);
const NAME: TokenType = TokenType::new(3);
const CLOSE: TokenType = TokenType::new(4);

fn lex_text(lexer: &mut Lexer) -> Option<Step> {
    let found = lexer.capture_until(false, "{{");
    if !lexer.buffered().is_empty() {
        lexer.emit(TEXT);
    }

    if !found {
        return None;
    }

    lexer.consume_current_token(true);
    lexer.emit(OPEN);
    Some(Step::new(lex_name))
}

fn lex_name(lexer: &mut Lexer) -> Option<Step> {
    if !lexer.capture_identifier() {
        return lexer.errorf(format_args!("expected a name at {}", lexer.current_position()));
    }
    lexer.emit(NAME);

    if !lexer.capture_until(true, "}}") {
        return lexer.errorf("unterminated template");
    }
    if !lexer.buffered().is_empty() {
        let position = lexer.current_position();
        let message = format!("unexpected '{}' at {position}", lexer.buffered());
        return lexer.errorf(message);
    }

    // Whitespace following the template belongs to the next text token
    lexer.set_auto_eat_whitespace(false);
    lexer.consume_current_token(true);
    lexer.emit(CLOSE);
    lexer.set_auto_eat_whitespace(true);

    Some(Step::new(lex_text))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Hello, {{ name }}! You have {{count}} new messages.".into());

    let settings = LexerSettings::default().with_debug_logging();
    let mut lexer = Lexer::with_settings("templates", input, lex_text, settings);

    for token in lexer.tokenize()? {
        let kind = match token.token_type() {
            TEXT => "text",
            OPEN => "open",
            NAME => "name",
            CLOSE => "close",
            _ => "unknown",
        };
        println!("{:>5} {:<6} {:?}", token.span.start.to_string(), kind, token.value);
    }

    Ok(())
}
