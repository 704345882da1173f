//! Lexical analysis
//!
//! [`Lexer`] does the work; the functions here cover the common one-shot
//! cases with default preferences.

pub mod analyzer;
pub mod charset;

use crate::loader::SourceFile;
use crate::tokens::Token;

pub use analyzer::{Lexer, LexicalMetrics};
pub use charset::{CharSet, Charsets};

/// Tokenize `source` with the default charsets
pub fn tokenize(source: &str, compress_whitespace: bool) -> Vec<Token> {
    Lexer::from_source(source).get_tokens(compress_whitespace)
}

pub fn tokenize_with_charsets(
    source: &str,
    charsets: Charsets,
    compress_whitespace: bool,
) -> Vec<Token> {
    Lexer::from_source(source)
        .with_charsets(charsets)
        .get_tokens(compress_whitespace)
}

/// Tokenize a loaded source file with the default charsets
pub fn tokenize_file(file: &SourceFile, compress_whitespace: bool) -> Vec<Token> {
    tokenize(&file.text, compress_whitespace)
}
