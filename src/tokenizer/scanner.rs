//! # Segment Scanning
//!
//! Character-level scan of a single segment. Plain characters accumulate into a
//! run; any boundary character (newline, whitespace, punctuation-or-symbol)
//! flushes the pending run as a classified token and then emits a token of its
//! own.
//!
//! The pending run lives in [`ScanState`], which moves between two states:
//!
//! ```text
//!            push(c)                     push(c)
//!   Flushed ─────────▶ Accumulating(run) ◀──────┐
//!      ▲                    │   └───────────────┘
//!      └──── flush() ───────┘  (emits classified run)
//! ```
//!
//! Both transitions consume the state and return the next one, so the scan is a
//! fold over the segment's characters.

use super::{
    charclass::{char_class, CharClass},
    token::{Token, TokenSequence},
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Flushed,
    Accumulating(String),
}

impl ScanState {
    /// Appends a plain character to the pending run.
    pub fn push(self, c: char) -> Self {
        match self {
            ScanState::Flushed => ScanState::Accumulating(c.to_string()),
            ScanState::Accumulating(mut run) => {
                run.push(c);
                ScanState::Accumulating(run)
            }
        }
    }

    /// Ends the pending run, returning it as a classified token.
    pub fn flush(self) -> (ScanState, Option<Token>) {
        match self {
            ScanState::Flushed => (ScanState::Flushed, None),
            ScanState::Accumulating(run) => (ScanState::Flushed, Some(Token::classified(run))),
        }
    }
}

/// Scans one segment into tokens. The delimiter is never seen here.
pub fn scan_segment(segment: &str) -> TokenSequence {
    let mut tokens = TokenSequence::new();

    let state = segment.chars().fold(ScanState::Flushed, |state, c| {
        let boundary = match char_class(c) {
            CharClass::Plain => return state.push(c),
            CharClass::Newline => Token::end_of_line(),
            CharClass::Whitespace => Token::whitespace(c),
            CharClass::Punctuation => Token::punctuation(c),
        };

        let (state, run) = state.flush();
        tokens.extend(run);
        tokens.push(boundary);
        state
    });

    let (_, run) = state.flush();
    tokens.extend(run);

    tracing::trace!(segment, token_count = tokens.len(), "scanned segment");
    tokens
}
