use crate::Span;
use std::fmt;

/// The value of the synthetic token that's produced at the end of the input
pub const EOF_VALUE: &str = "EOF";

/// The ASCII whitespace characters as a set of literals
///
/// Useful as a set of terminators when capturing up until the next piece of whitespace.
pub const WHITESPACE: [&str; 6] = ["\t", "\n", "\u{0B}", "\u{0C}", "\r", " "];

/// The tag that identifies the kind of a token
///
/// Consumers define their own token types as constants, e.g.
///
/// ```
/// use bufflex::TokenType;
///
/// const HASHTAG: TokenType = TokenType::new(1);
/// const MENTION: TokenType = TokenType::new(2);
/// ```
///
/// Negative values are reserved for the lexer's own use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenType(i16);

impl TokenType {
    /// The type of tokens produced by [Lexer::errorf](crate::Lexer::errorf)
    pub const ERROR: Self = Self(-2);
    /// The type of the token that's produced once the end of the input is reached
    pub const EOF: Self = Self(-1);

    /// Initializes a token type with the given tag
    pub const fn new(tag: i16) -> Self {
        Self(tag)
    }

    /// Returns the token type's tag
    pub const fn tag(&self) -> i16 {
        self.0
    }

    /// Returns true if the token type is reserved by the lexer
    pub const fn is_reserved(&self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::ERROR => f.write_str("Error"),
            Self::EOF => f.write_str("EOF"),
            Self(tag) => write!(f, "{tag}"),
        }
    }
}

/// The capabilities that the lexer requires from the tokens that it emits
///
/// The token's value is provided by its [Display](fmt::Display) implementation.
pub trait Token: fmt::Display {
    /// The token's type
    fn token_type(&self) -> TokenType;

    /// The span of the input that the token was produced from, if known
    fn span(&self) -> Option<Span> {
        None
    }

    /// Returns true if this is the end of input token
    fn is_eof(&self) -> bool {
        self.token_type() == TokenType::EOF
    }

    /// Returns true if this is an error token
    fn is_error(&self) -> bool {
        self.token_type() == TokenType::ERROR
    }
}

/// The token that's produced by the lexer's built-in emitters
///
/// Custom token types can be used with the lexer as long as they can be created from a
/// `LexedToken`, e.g. an enum with a variant that wraps `LexedToken`, alongside variants that
/// carry additional structured data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexedToken {
    /// The token's type
    pub token_type: TokenType,
    /// The token's value
    pub value: String,
    /// The span of the input that the token's value was captured from
    pub span: Span,
}

impl LexedToken {
    /// Initializes a token with the given type and value
    pub fn new(token_type: TokenType, value: impl Into<String>, span: Span) -> Self {
        Self {
            token_type,
            value: value.into(),
            span,
        }
    }

    pub(crate) fn eof(span: Span) -> Self {
        Self::new(TokenType::EOF, EOF_VALUE, span)
    }
}

impl Token for LexedToken {
    fn token_type(&self) -> TokenType {
        self.token_type
    }

    fn span(&self) -> Option<Span> {
        Some(self.span)
    }
}

impl fmt::Display for LexedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
