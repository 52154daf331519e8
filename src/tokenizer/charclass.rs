//! # Character Classes
//!
//! Sorts single characters into the boundary classes that end a run during
//! scanning. This table is independent of the [classifier](super::classifier):
//! it works per character and decides on Unicode general categories, whereas the
//! classifier works on whole runs with ASCII patterns.
//!
//! Punctuation-or-symbol means one of the general categories `Pc`, `Pd`, `Ps`,
//! `Pe`, `Po`, `Sm`, `Sc`. Initial/final quotes (`Pi`, `Pf`), modifier symbols
//! (`Sk`) and other symbols (`So`) are plain characters.
//!
//! Whitespace means the ASCII controls `\t` to `\r`, the information separators
//! `U+001C` to `U+001F`, and the separator categories `Zs`, `Zl`, `Zp` minus the
//! no-break spaces `U+00A0`, `U+2007` and `U+202F`. `U+0085` is not whitespace.
//!
//! Classes apply to whole Unicode scalar values, so an astral character such as
//! `U+1D6C1` (`Sm`) is punctuation.

use lazy_static::lazy_static;
use regex::Regex;
use strum_macros::{AsRefStr, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum CharClass {
    Newline,
    Whitespace,
    Punctuation,
    Plain,
}

#[derive(Clone, Copy)]
pub struct CharRule {
    pub matches: fn(char) -> bool,
    pub class: CharClass,
}

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(
        r"\A[\t\n\x0B\x0C\r\x1C-\x1F\p{Zl}\p{Zp}[\p{Zs}&&[^\x{A0}\x{2007}\x{202F}]]]\z"
    )
    .unwrap();
    static ref PUNCTUATION_OR_SYMBOL: Regex =
        Regex::new(r"\A[\p{Pc}\p{Pd}\p{Ps}\p{Pe}\p{Po}\p{Sm}\p{Sc}]\z").unwrap();
}

/// Evaluated in order; a character matching none of them is [`CharClass::Plain`].
pub static CHAR_RULES: [CharRule; 3] = [
    CharRule {
        matches: is_newline,
        class: CharClass::Newline,
    },
    CharRule {
        matches: is_whitespace,
        class: CharClass::Whitespace,
    },
    CharRule {
        matches: is_punctuation,
        class: CharClass::Punctuation,
    },
];

pub fn char_class(c: char) -> CharClass {
    CHAR_RULES
        .iter()
        .find(|rule| (rule.matches)(c))
        .map(|rule| rule.class)
        .unwrap_or(CharClass::Plain)
}

pub fn is_whitespace(c: char) -> bool {
    let mut buf = [0u8; 4];
    WHITESPACE.is_match(c.encode_utf8(&mut buf))
}

pub fn is_punctuation(c: char) -> bool {
    let mut buf = [0u8; 4];
    PUNCTUATION_OR_SYMBOL.is_match(c.encode_utf8(&mut buf))
}

fn is_newline(c: char) -> bool {
    c == '\n'
}
