use std::sync::Once;
use std::thread;

use pretty_assertions::assert_eq;
use rpncalc_parser::{split_tokens, tokenize, tokenize_with, Tokenizer, WhitespaceTokenizer};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(rpncalc_logging::initialize_for_tests);
}

#[test]
fn whitespace_is_collapsed_and_trimmed() {
    init_logging();
    let cases: [(&str, &[&str]); 5] = [
        ("", &[]),
        ("   ", &[]),
        ("3 4 +", &["3", "4", "+"]),
        ("3\t4\n+", &["3", "4", "+"]),
        ("  3   4   +  ", &["3", "4", "+"]),
    ];

    for (input, expected) in cases {
        assert_eq!(tokenize(input), expected.to_vec(), "input: {input:?}");
    }
}

#[test]
fn every_ascii_whitespace_separates() {
    init_logging();
    let tokens = tokenize("1\r2\x0b3\x0c4 \t\n5");
    assert_eq!(tokens, vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn unicode_whitespace_is_not_a_separator() {
    let tokens = tokenize("3\u{a0}4 +");
    assert_eq!(tokens, vec!["3\u{a0}4", "+"]);
}

#[test]
fn tokens_are_not_validated() {
    let tokens = tokenize("foo 3..4 ++ (");
    assert_eq!(tokens, vec!["foo", "3..4", "++", "("]);
}

#[test]
fn absent_and_missing_input_yield_nothing() {
    init_logging();
    assert_eq!(tokenize(&None::<&str>), Vec::<String>::new());
    assert_eq!(tokenize(&()), Vec::<String>::new());
    assert_eq!(tokenize(&Some("7 8 *")), vec!["7", "8", "*"]);
}

#[test]
fn owned_text_is_accepted() {
    let owned = String::from(" 1 2 + ");
    assert_eq!(tokenize(&owned), vec!["1", "2", "+"]);
    assert_eq!(tokenize(&&owned), tokenize(owned.as_str()));
}

#[test]
fn repeated_calls_are_equal_but_distinct() {
    let text = "7 8 *";

    let first = tokenize(text);
    let second = tokenize(text);

    assert_eq!(first, second);
    assert_ne!(first.as_ptr(), second.as_ptr());
}

#[test]
fn concurrent_calls_agree() {
    let text = "1 2 + 3 *";
    let expected = tokenize(text);

    let results: Vec<Vec<String>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| tokenize(text))).collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for tokens in results {
        assert_eq!(tokens, expected);
    }
}

#[test]
fn split_tokens_borrows_from_input() {
    let text = String::from("  12 34\t*");
    let pieces: Vec<&str> = split_tokens(&text).collect();
    assert_eq!(pieces, vec!["12", "34", "*"]);
    assert_eq!(WhitespaceTokenizer.count(&text), 3);
    assert_eq!(WhitespaceTokenizer.count(" \n "), 0);
}

struct Uppercase;
impl Tokenizer for Uppercase {
    fn tokenize(&self, text: &str) -> Vec<String> {
        split_tokens(text).map(str::to_uppercase).collect()
    }
}

#[test]
fn custom_tokenizer_gets_canonical_text() {
    let tokens = tokenize_with(&Uppercase, "dup swap");
    assert_eq!(tokens, vec!["DUP", "SWAP"]);
    assert_eq!(Uppercase.count("a b c"), 3);

    let boxed: Box<dyn Tokenizer> = Box::new(WhitespaceTokenizer);
    assert_eq!(tokenize_with(boxed.as_ref(), &42), vec!["42"]);
}
