//! Matching of literals against the input at the cursor's position

use crate::Cursor;

/// Returns true if the input at the cursor's current position starts with `literal`
///
/// Symbols are compared by code point with no normalization. An empty literal never matches,
/// and neither does a literal that would extend past the end of the input.
pub fn starts_with(cursor: &mut Cursor, literal: &str) -> bool {
    let mut symbols = literal.chars();

    let Some(first) = symbols.next() else {
        return false;
    };

    if cursor.current() != Some(first) {
        return false;
    }

    let remaining = symbols.clone().count();
    if cursor.fill_lookahead(remaining) < remaining {
        return false;
    }

    cursor.lookahead().zip(symbols).all(|(a, b)| a == b)
}

/// Returns the first of the candidates that matches the input at the cursor's position
///
/// Candidates are tested in order, so callers control precedence by ordering, e.g. a longer
/// literal should be placed before any of its prefixes. Empty candidates are skipped.
pub fn first_match<'a>(cursor: &mut Cursor, candidates: &[&'a str]) -> Option<&'a str> {
    if cursor.is_eof() {
        return None;
    }

    candidates
        .iter()
        .copied()
        .find(|candidate| starts_with(cursor, candidate))
}
