//! rpncalc parser: input tokenization for the RPN calculator.
//!
//! Converts an input value to its canonical text and splits it on ASCII
//! whitespace. Tokens are not validated or interpreted here.
mod bytes;
mod source;
mod token;

pub use bytes::render_bytes;
pub use source::{Displayed, TokenSource};
pub use token::{split_tokens, tokenize, tokenize_with, Tokenizer, WhitespaceTokenizer};
