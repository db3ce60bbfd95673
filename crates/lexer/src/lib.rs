//! A buffering lexer engine
//!
//! Rather than matching tokens with regular expressions or at fixed positions, lexers are built
//! from small [Step] functions that drive a shared input cursor and capture buffer, explicitly
//! deciding which parts of the input to keep and which to discard.
//!
//! Each step returns the step that should follow it, and consumers pull tokens from the
//! [Lexer] one at a time, with steps only being run when a token is requested.

#![warn(missing_docs)]

mod buffer;
mod channel;
mod cursor;
mod error;
mod ignore;
mod lexer;
pub mod matcher;
mod settings;
mod span;
mod step;
mod token;

pub use crate::{
    buffer::CaptureBuffer,
    channel::TokenChannel,
    cursor::Cursor,
    error::{Error, Result},
    ignore::IgnoreFilter,
    lexer::{Lexer, is_identifier_symbol},
    settings::LexerSettings,
    span::{Position, Span},
    step::Step,
    token::{EOF_VALUE, LexedToken, Token, TokenType, WHITESPACE},
};
