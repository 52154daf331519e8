use serde::Serialize;

use super::token::Token;

pub const DEFAULT_MIN_LEN: usize = 2;

/// A multi-character token split into its characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownEntry {
    pub value: String,
    pub chars: Vec<char>,
}

impl BreakdownEntry {
    pub fn new(token: &Token) -> Self {
        Self {
            value: token.value().to_string(),
            chars: token.value().chars().collect(),
        }
    }
}

impl std::fmt::Display for BreakdownEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token: '{}' -> ", self.value)?;
        for (i, c) in self.chars.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{}'", c)?;
        }
        Ok(())
    }
}

/// Entries for every token whose stored value has at least `min_len` characters.
///
/// Only the stored value's length counts; the end-of-line token qualifies at
/// the default length because its value is the two characters `\` and `n`.
pub fn breakdown_entries(tokens: &[Token], min_len: usize) -> Vec<BreakdownEntry> {
    tokens
        .iter()
        .filter(|token| token.char_len() >= min_len)
        .map(BreakdownEntry::new)
        .collect()
}

pub fn breakdown(tokens: &[Token]) -> Vec<String> {
    breakdown_entries(tokens, DEFAULT_MIN_LEN)
        .iter()
        .map(ToString::to_string)
        .collect()
}
