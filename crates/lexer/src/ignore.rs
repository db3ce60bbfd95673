use crate::{Cursor, matcher};
use std::cmp::Reverse;

/// A set of literals that are transparently removed from the input during capturing
///
/// Literals can be enabled and disabled at any time. When more than one enabled literal
/// matches at the same position, the longest literal takes precedence, with ties broken by
/// lexicographic order.
#[derive(Clone, Debug, Default)]
pub struct IgnoreFilter {
    // Kept in precedence order
    entries: Vec<IgnoreEntry>,
}

#[derive(Clone, Debug)]
struct IgnoreEntry {
    literal: String,
    symbol_count: usize,
    enabled: bool,
}

impl IgnoreEntry {
    fn precedence(&self) -> (Reverse<usize>, &str) {
        (Reverse(self.symbol_count), &self.literal)
    }
}

impl IgnoreFilter {
    /// Enables each of the given literals
    ///
    /// Blank literals are skipped.
    pub fn add<I, S>(&mut self, literals: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for literal in literals {
            let literal = literal.as_ref();
            if is_blank(literal) {
                continue;
            }

            match self.entries.iter_mut().find(|entry| entry.literal == literal) {
                Some(entry) => entry.enabled = true,
                None => {
                    let entry = IgnoreEntry {
                        literal: literal.to_string(),
                        symbol_count: literal.chars().count(),
                        enabled: true,
                    };
                    let index = self
                        .entries
                        .partition_point(|existing| existing.precedence() < entry.precedence());
                    self.entries.insert(index, entry);
                }
            }
        }
    }

    /// Disables each of the given literals
    pub fn remove<I, S>(&mut self, literals: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for literal in literals {
            let literal = literal.as_ref();
            if let Some(entry) = self.entries.iter_mut().find(|entry| entry.literal == literal) {
                entry.enabled = false;
            }
        }
    }

    /// Returns true if the literal is currently being ignored
    pub fn is_ignored(&self, literal: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.enabled && entry.literal == literal)
    }

    /// The enabled literals, in precedence order
    pub fn enabled(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|entry| entry.enabled)
            .map(|entry| entry.literal.as_str())
    }

    /// Finds the enabled literal that matches at the cursor's position
    ///
    /// The literal is returned along with its length in symbols.
    pub fn find_match(&self, cursor: &mut Cursor) -> Option<(&str, usize)> {
        if cursor.is_eof() {
            return None;
        }

        self.entries
            .iter()
            .filter(|entry| entry.enabled)
            .find(|entry| matcher::starts_with(cursor, &entry.literal))
            .map(|entry| (entry.literal.as_str(), entry.symbol_count))
    }
}

fn is_blank(literal: &str) -> bool {
    literal.trim().is_empty()
}
