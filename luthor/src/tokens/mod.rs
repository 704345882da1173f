//! Token system for Luthor lexical analysis
//!
//! This module defines the output vocabulary of the lexer: classified runs of
//! characters tagged with the location where they started.
//!
//! # Overview
//!
//! The lexer does not understand any grammar. It only groups consecutive
//! characters that belong to the same character class, so the token set is
//! small and closed.
//!
//! ## Key Components
//!
//! - **[`TokenType`]** - The eight character classes a token can belong to
//! - **[`Token`]** - A classified run with its [`Location`](crate::utils::Location)
//!   and verbatim content
//! - **[`TokenLines`]** - Tokens grouped by the line they start on
//!
//! ## Token Types
//!
//! ### Run Tokens
//! `Whitespace`, `Letters`, `Digits` and `Symbols` are maximal runs of
//! characters from the corresponding configurable charset. A bare carriage
//! return inside a run is absorbed into it.
//!
//! ### Strings
//! A `String` token starts at a quote delimiter and extends to the next
//! occurrence of the same delimiter, both delimiters included. Line feeds and
//! other quote characters inside are literal content. A string that is never
//! closed runs to the end of input and is still a `String` token.
//!
//! ### Structure
//! - `EOL` is emitted once per line feed with content `"\n"`
//! - `EOF` is always the final token and always has empty content
//!
//! ### Catch-all
//! `Other` collects characters that belong to no charset. Consecutive
//! unclassified characters coalesce into a single token.
//!
//! ## Usage Examples
//!
//! ```
//! use luthor::tokens::{Token, TokenType};
//! use luthor::utils::Location;
//!
//! let token = Token::new(TokenType::Letters, Location::start(), "Text");
//! assert_eq!(token.to_string(), "   1,1   Letters      Text");
//! ```

pub mod lines;
pub mod token;

pub use lines::TokenLines;
pub use token::{Token, TokenType};
