use rpncalc_logging::rpn_trace;

use crate::source::TokenSource;

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;

    fn count(&self, text: &str) -> usize {
        self.tokenize(text).len()
    }
}

/// Splits on runs of ASCII whitespace with no validation of the pieces.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        split_tokens(text).map(str::to_owned).collect()
    }

    fn count(&self, text: &str) -> usize {
        split_tokens(text).count()
    }
}

/// Borrowing split: non-empty pieces of `text` between whitespace runs, in order.
pub fn split_tokens(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split(is_separator).filter(|piece| !piece.is_empty())
}

/// Tokenize any supported value with the default whitespace tokenizer.
///
/// Never fails: empty, absent or all-whitespace input yields an empty vector.
/// Each call returns a freshly allocated vector.
pub fn tokenize<T: TokenSource + ?Sized>(value: &T) -> Vec<String> {
    tokenize_with(&WhitespaceTokenizer, value)
}

/// Tokenize `value` with a caller-supplied tokenizer.
pub fn tokenize_with<K, T>(tokenizer: &K, value: &T) -> Vec<String>
where
    K: Tokenizer + ?Sized,
    T: TokenSource + ?Sized,
{
    let text = value.token_text();
    let tokens = tokenizer.tokenize(&text);
    rpn_trace!(
        "tokenized {} bytes of input into {} tokens",
        text.len(),
        tokens.len()
    );
    tokens
}

// char::is_ascii_whitespace leaves out vertical tab.
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}
