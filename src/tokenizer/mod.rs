//! # Tokenizer Component
//!
//! Turns free-form text into a flat sequence of typed tokens.
//!
//! ## Pipeline
//!
//! 1. **Segmentation**: the input is split on the delimiter (`~` by default).
//!    The delimiter itself never becomes a token. See [`segment`].
//! 2. **Numeric fast path**: a segment that classifies as a number as a whole is
//!    emitted as a single `NUMBER` token, so `-3.14` is not split at `-` or `.`.
//! 3. **Scanning**: other segments are scanned character by character. Newlines,
//!    whitespace and punctuation-or-symbol characters each become their own
//!    token; everything else accumulates into runs. See [`scanner`] and
//!    [`charclass`].
//! 4. **Classification**: each run is typed by the ordered rule table in
//!    [`classifier`].
//!
//! The [`breakdown`] module then splits every multi-character token into its
//! characters for display.
//!
//! ## Component Structure
//!
//! * [`token`]: [`Token`] and [`TokenType`]
//! * [`classifier`]: run classification rules
//! * [`charclass`]: per-character boundary rules
//! * [`scanner`]: accumulate/flush state machine for one segment
//! * [`segment`]: [`Tokenizer`], delimiter splitting and reconstruction
//! * [`breakdown`]: granular per-character breakdown
//!
//! None of these operations fail: every string, including the empty string,
//! tokenizes.
//!
//! ## Usage Example
//!
//! ```rust
//! use tilde_tokenizer::tokenizer::{tokenize, TokenType};
//!
//! let tokens = tokenize("hello world~-3.14");
//! let types: Vec<TokenType> = tokens.iter().map(|t| t.token_type()).collect();
//! assert_eq!(
//!     types,
//!     [TokenType::Word, TokenType::Whitespace, TokenType::Word, TokenType::Number]
//! );
//! ```

pub mod breakdown;
pub mod charclass;
pub mod classifier;
pub mod scanner;
pub mod segment;
pub mod token;

pub use breakdown::{breakdown, breakdown_entries, BreakdownEntry};
pub use classifier::classify;
pub use segment::{detokenize, Tokenizer, DEFAULT_DELIMITER};
pub use token::{Token, TokenSequence, TokenType, END_OF_LINE_MARKER};

/// Tokenizes `input` with the default `~` delimiter.
pub fn tokenize(input: &str) -> TokenSequence {
    Tokenizer::default().tokenize(input)
}
