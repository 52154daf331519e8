//! # tilde-tokenizer
//!
//! A small lexical tokenizer. Input text is partitioned on the tilde (`~`)
//! delimiter, each segment is scanned into runs and boundary characters, and
//! every token is typed as one of `WORD`, `NUMBER`, `PUNCTUATION`,
//! `ALPHANUMERIC`, `WHITESPACE`, `END_OF_LINE` or `UNKNOWN`.
//!
//! - Tokenization and classification ([`tokenizer`])
//! - Text and JSON reports ([`report`])
//! - Configuration ([`config`])
//! - Error handling ([`error`])
//!
//! ```text
//! Input → Segmentation → Scanning → Classification → Breakdown → Report
//! ```

pub mod config;
pub mod error;
pub mod report;
pub mod tokenizer;

// Re-exports
pub use error::*;
pub use tokenizer::{breakdown, classify, tokenize, Token, TokenSequence, TokenType, Tokenizer};
