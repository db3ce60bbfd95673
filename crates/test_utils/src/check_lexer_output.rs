use bufflex::{LexedToken, Lexer, Token, TokenType};
use itertools::Itertools;

/// Runs a lexer until the end of its input, collecting the emitted tokens' types and values
///
/// Error tokens are included in the output.
pub fn lexed_tokens<T>(lexer: Lexer<T>) -> Vec<(TokenType, String)>
where
    T: Token + From<LexedToken>,
{
    lexer
        .map(|token| (token.token_type(), token.to_string()))
        .collect()
}

/// Runs a lexer and checks that the emitted tokens match the expected types and values
pub fn check_lexer_output<T>(lexer: Lexer<T>, expected: &[(TokenType, &str)])
where
    T: Token + From<LexedToken>,
{
    let name = lexer.name().to_string();
    let output = lexed_tokens(lexer);

    let matches = output.len() == expected.len()
        && output
            .iter()
            .zip(expected)
            .all(|((output_type, output_value), (expected_type, expected_value))| {
                output_type == expected_type && output_value == expected_value
            });

    if !matches {
        panic!(
            "Unexpected output from lexer '{name}'\n\nExpected:\n{}\n\nOutput:\n{}\n",
            render_tokens(expected.iter().map(|(token_type, value)| (token_type, *value))),
            render_tokens(
                output
                    .iter()
                    .map(|(token_type, value)| (token_type, value.as_str()))
            ),
        );
    }
}

/// Runs a lexer and checks that the emitted tokens have the expected values
///
/// Token types are ignored.
pub fn check_lexer_values<T>(lexer: Lexer<T>, expected: &[&str])
where
    T: Token + From<LexedToken>,
{
    let name = lexer.name().to_string();
    let output = lexed_tokens(lexer)
        .into_iter()
        .map(|(_, value)| value)
        .collect::<Vec<_>>();

    if output != expected {
        panic!(
            "Unexpected values from lexer '{name}'\n\nExpected: [{}]\n  Output: [{}]\n",
            expected.iter().map(|value| format!("{value:?}")).join(", "),
            output.iter().map(|value| format!("{value:?}")).join(", "),
        );
    }
}

fn render_tokens<'a>(tokens: impl Iterator<Item = (&'a TokenType, &'a str)>) -> String {
    tokens
        .enumerate()
        .map(|(i, (token_type, value))| format!("  {i}: {token_type} {value:?}"))
        .join("\n")
}
