use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use super::classifier::classify;

/// Stored value of every [`TokenType::EndOfLine`] token: a backslash followed by `n`.
pub const END_OF_LINE_MARKER: &str = "\\n";

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    EnumString,
    Display,
    EnumIter,
    AsRefStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    Word,
    Number,
    Punctuation,
    Alphanumeric,
    Whitespace,
    EndOfLine,
    Unknown,
}

/// A classified slice of the input.
///
/// Tokens are immutable once built. The value of an end-of-line token is the
/// two-character [`END_OF_LINE_MARKER`], not the newline it stands for; use
/// [`Token::source_text`] to get back the original text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    value: String,
    #[serde(rename = "type")]
    token_type: TokenType,
}

pub type TokenSequence = Vec<Token>;

impl Token {
    pub fn new(value: impl Into<String>, token_type: TokenType) -> Self {
        Self {
            value: value.into(),
            token_type,
        }
    }

    /// Builds a token whose type is decided by the classifier rules.
    pub fn classified(value: impl Into<String>) -> Self {
        let value = value.into();
        let token_type = classify(&value);
        Self { value, token_type }
    }

    pub fn end_of_line() -> Self {
        Self::new(END_OF_LINE_MARKER, TokenType::EndOfLine)
    }

    pub fn whitespace(c: char) -> Self {
        Self::new(c, TokenType::Whitespace)
    }

    pub fn punctuation(c: char) -> Self {
        Self::new(c, TokenType::Punctuation)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    /// Length of the stored value in characters.
    pub fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    /// The text this token covers in the original input.
    pub fn source_text(&self) -> &str {
        match self.token_type {
            TokenType::EndOfLine => "\n",
            _ => &self.value,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token: '{}', Type: {}", self.value, self.token_type)
    }
}
