use pretty_assertions::assert_eq;
use tilde_tokenizer::{
    breakdown, classify, tokenize,
    tokenizer::{detokenize, END_OF_LINE_MARKER},
    Token, TokenType, Tokenizer,
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[ctor::ctor]
fn init_tests() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

fn token(value: &str, token_type: TokenType) -> Token {
    Token::new(value, token_type)
}

#[test]
fn test_empty_input() {
    assert!(tokenize("").is_empty());
}

#[test]
fn test_delimiter_free_input_is_one_segment() {
    let tokenizer = Tokenizer::new();
    for input in ["hello world", "a,b", "line1\nline2", "", "  "] {
        assert_eq!(tokenizer.tokenize_segments(input).len(), 1);
    }
}

#[test]
fn test_tilde_is_never_a_token() {
    assert_eq!(
        tokenize("a~b"),
        vec![token("a", TokenType::Word), token("b", TokenType::Word)]
    );
}

#[test]
fn test_negative_decimal_segment() {
    assert_eq!(tokenize("-3.14"), vec![token("-3.14", TokenType::Number)]);
}

#[test]
fn test_hello_world() {
    assert_eq!(
        tokenize("hello world"),
        vec![
            token("hello", TokenType::Word),
            token(" ", TokenType::Whitespace),
            token("world", TokenType::Word),
        ]
    );
}

#[test]
fn test_comma() {
    assert_eq!(
        tokenize("a,b"),
        vec![
            token("a", TokenType::Word),
            token(",", TokenType::Punctuation),
            token("b", TokenType::Word),
        ]
    );
}

#[test]
fn test_lines() {
    let tokens = tokenize("line1\nline2");
    assert_eq!(
        tokens,
        vec![
            token("line1", TokenType::Alphanumeric),
            token(END_OF_LINE_MARKER, TokenType::EndOfLine),
            token("line2", TokenType::Alphanumeric),
        ]
    );
    assert_eq!(tokens[1].value(), "\\n");
}

#[test]
fn test_breakdown_of_hi_a() {
    let lines = breakdown(&tokenize("hi a"));
    assert_eq!(lines, vec!["Token: 'hi' -> 'h', 'i'"]);
}

#[test]
fn test_classifier_order() {
    assert_eq!(classify("123"), TokenType::Number);
    assert_eq!(classify("a1"), TokenType::Alphanumeric);
}

#[test]
fn test_mixed_document() {
    let input = "Total: $42~-7.5~price_tag = 3.99€\nend";
    assert_eq!(
        tokenize(input),
        vec![
            token("Total", TokenType::Word),
            token(":", TokenType::Punctuation),
            token(" ", TokenType::Whitespace),
            token("$", TokenType::Punctuation),
            token("42", TokenType::Number),
            token("-7.5", TokenType::Number),
            token("price", TokenType::Word),
            token("_", TokenType::Punctuation),
            token("tag", TokenType::Word),
            token(" ", TokenType::Whitespace),
            token("=", TokenType::Punctuation),
            token(" ", TokenType::Whitespace),
            token("3", TokenType::Number),
            token(".", TokenType::Punctuation),
            token("99", TokenType::Number),
            token("€", TokenType::Punctuation),
            token("\\n", TokenType::EndOfLine),
            token("end", TokenType::Word),
        ]
    );
}

#[test]
fn test_round_trip() {
    let tokenizer = Tokenizer::new();
    let input = "first line\nsecond, line~~-1.5~x^2 + y\t= 0\n";
    let segments = tokenizer.tokenize_segments(input);
    assert_eq!(detokenize(&segments, '~'), input);

    let flat: Vec<Token> = segments.concat();
    assert_eq!(flat, tokenizer.tokenize(input));
}

#[test]
fn test_repeated_calls_are_independent() {
    let tokenizer = Tokenizer::new();
    let first = tokenizer.tokenize("one two");
    let second = tokenizer.tokenize("one two");
    assert_eq!(first, second);
}
