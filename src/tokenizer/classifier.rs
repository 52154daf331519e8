//! # Run Classification
//!
//! Maps a run of characters to a [`TokenType`] by walking an ordered rule table.
//! The first rule whose pattern covers the whole value wins; a value no rule
//! accepts is [`TokenType::Unknown`].
//!
//! ## Rule Order
//!
//! | # | rule           | pattern                  | type           |
//! |---|----------------|--------------------------|----------------|
//! | 1 | `letters`      | `[a-zA-Z]+`              | `WORD`         |
//! | 2 | `digits`       | `[0-9]+`                 | `NUMBER`       |
//! | 3 | `numeral`      | `-?[0-9]+(\.[0-9]+)?`    | `NUMBER`       |
//! | 4 | `alphanumeric` | `[a-zA-Z0-9]+`           | `ALPHANUMERIC` |
//! | 5 | `non_word`     | `[^a-zA-Z0-9_]+`         | `PUNCTUATION`  |
//!
//! Rules 2 and 3 overlap on plain positive integers and agree on the result, so
//! `digits` only ever decides values that `numeral` would also accept.
//!
//! All classes are ASCII: a non-ASCII letter is a non-word character here.

use lazy_static::lazy_static;
use nom::{
    character::complete::{char, digit1},
    combinator::{all_consuming, opt, recognize},
    sequence::{pair, tuple},
    IResult,
};
use regex::Regex;

use super::token::TokenType;

/// One entry of the classification table.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    pub token_type: TokenType,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("token_type", &self.token_type)
            .finish()
    }
}

lazy_static! {
    static ref LETTERS: Regex = Regex::new(r"\A[a-zA-Z]+\z").unwrap();
    static ref DIGITS: Regex = Regex::new(r"\A[0-9]+\z").unwrap();
    static ref ALPHANUMERIC: Regex = Regex::new(r"\A[a-zA-Z0-9]+\z").unwrap();
    static ref NON_WORD: Regex = Regex::new(r"\A[^a-zA-Z0-9_]+\z").unwrap();
}

pub static RULES: [Rule; 5] = [
    Rule {
        name: "letters",
        matches: is_letters,
        token_type: TokenType::Word,
    },
    Rule {
        name: "digits",
        matches: is_digits,
        token_type: TokenType::Number,
    },
    Rule {
        name: "numeral",
        matches: is_numeral,
        token_type: TokenType::Number,
    },
    Rule {
        name: "alphanumeric",
        matches: is_alphanumeric,
        token_type: TokenType::Alphanumeric,
    },
    Rule {
        name: "non_word",
        matches: is_non_word,
        token_type: TokenType::Punctuation,
    },
];

/// Classifies `value`, falling back to [`TokenType::Unknown`].
pub fn classify(value: &str) -> TokenType {
    matching_rule(value)
        .map(|rule| rule.token_type)
        .unwrap_or(TokenType::Unknown)
}

/// The first rule accepting `value`, if any.
pub fn matching_rule(value: &str) -> Option<&'static Rule> {
    RULES.iter().find(|rule| (rule.matches)(value))
}

fn is_letters(value: &str) -> bool {
    LETTERS.is_match(value)
}

fn is_digits(value: &str) -> bool {
    DIGITS.is_match(value)
}

fn is_alphanumeric(value: &str) -> bool {
    ALPHANUMERIC.is_match(value)
}

fn is_non_word(value: &str) -> bool {
    NON_WORD.is_match(value)
}

// -?digits(.digits)?
fn numeral(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(char('-')),
        digit1,
        opt(pair(char('.'), digit1)),
    )))(input)
}

fn is_numeral(value: &str) -> bool {
    all_consuming(numeral)(value).is_ok()
}
