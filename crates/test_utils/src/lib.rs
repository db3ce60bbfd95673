//! Testing utilities for bufflex lexers

#![warn(missing_docs)]

mod check_lexer_output;
mod idle_lexer;

pub use check_lexer_output::{check_lexer_output, check_lexer_values, lexed_tokens};
pub use idle_lexer::{buffered_after, idle_lexer};
