//! Luthor: a configurable character-classification lexer
//!
//! Converts raw text into a flat sequence of classified runs (letters,
//! digits, symbols, whitespace, quoted strings, line ends, other) tagged
//! with line, column and character offset.
//!
//! ```
//! use luthor::{Lexer, TokenType};
//!
//! let tokens = Lexer::from_source("A \"simple string\" end").get_tokens(false);
//! assert_eq!(tokens[2].token_type, TokenType::String);
//! assert!(tokens.last().map_or(false, |t| t.is_eof()));
//! ```

// Internal modules
pub mod config;
pub mod lexical;
pub mod loader;
pub mod logging;
pub mod scanner;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use lexical::{
    tokenize, tokenize_file, tokenize_with_charsets, CharSet, Charsets, Lexer, LexicalMetrics,
};
pub use loader::{LoadError, SourceFile, SourceLoader};
pub use scanner::Scanner;
pub use tokens::{Token, TokenLines, TokenType};
pub use utils::Location;
