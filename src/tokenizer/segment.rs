use tracing::debug;

use super::{
    classifier::classify,
    scanner::scan_segment,
    token::{Token, TokenSequence, TokenType},
};
use crate::config::TokenizerConfig;

pub const DEFAULT_DELIMITER: char = '~';

/// Splits input on a delimiter and tokenizes each segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenizer {
    delimiter: char,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }

    pub fn with_delimiter(delimiter: char) -> Self {
        Self { delimiter }
    }

    pub fn from_config(config: &TokenizerConfig) -> Self {
        Self::with_delimiter(config.delimiter)
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Tokenizes `input`, concatenating the tokens of all segments in order.
    #[tracing::instrument(level = "debug", skip(self, input), fields(delimiter = %self.delimiter))]
    pub fn tokenize(&self, input: &str) -> TokenSequence {
        let tokens: TokenSequence = self
            .tokenize_segments(input)
            .into_iter()
            .flatten()
            .collect();
        debug!(token_count = tokens.len(), "tokenized input");
        tokens
    }

    /// Tokenizes `input` keeping one token list per segment, empty segments
    /// included.
    #[tracing::instrument(level = "debug", skip(self, input))]
    pub fn tokenize_segments(&self, input: &str) -> Vec<TokenSequence> {
        let segments: Vec<TokenSequence> = input
            .split(self.delimiter)
            .map(tokenize_segment)
            .collect();
        debug!(segment_count = segments.len(), "split input");
        segments
    }

    /// Rebuilds the input from per-segment tokens.
    pub fn detokenize(&self, segments: &[TokenSequence]) -> String {
        detokenize(segments, self.delimiter)
    }
}

fn tokenize_segment(segment: &str) -> TokenSequence {
    // whole-segment numerals are never split at '-' or '.'
    if classify(segment) == TokenType::Number {
        tracing::trace!(segment, "numeric segment");
        return vec![Token::new(segment, TokenType::Number)];
    }
    scan_segment(segment)
}

pub fn detokenize(segments: &[TokenSequence], delimiter: char) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push(delimiter);
        }
        out.extend(segment.iter().map(Token::source_text));
    }
    out
}
