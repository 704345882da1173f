//! Token and token type definitions
use crate::utils::Location;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Character class of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TokenType {
    Whitespace,
    Letters,
    Digits,
    Symbols,
    String,
    Other,
    #[serde(rename = "EOL")]
    Eol,
    #[serde(rename = "EOF")]
    Eof,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Whitespace => "Whitespace",
            TokenType::Letters => "Letters",
            TokenType::Digits => "Digits",
            TokenType::Symbols => "Symbols",
            TokenType::String => "String",
            TokenType::Other => "Other",
            TokenType::Eol => "EOL",
            TokenType::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad so width/alignment flags apply
        f.pad(self.as_str())
    }
}

/// A classified run of source characters.
///
/// `content` is finalized when the token is created and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "tokenType")]
    pub token_type: TokenType,
    pub location: Location,
    pub content: String,
}

impl Token {
    pub fn new(token_type: TokenType, location: Location, content: impl Into<String>) -> Self {
        Self {
            token_type,
            location,
            content: content.into(),
        }
    }

    /// Create the terminating end-of-file token
    pub fn eof(location: Location) -> Self {
        Self::new(TokenType::Eof, location, String::new())
    }

    pub fn is_eof(&self) -> bool {
        self.token_type == TokenType::Eof
    }

    pub fn is_eol(&self) -> bool {
        self.token_type == TokenType::Eol
    }

    /// Number of characters in the content
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }
}

impl fmt::Display for Token {
    /// Listing row: `line,column type   content` with trailing whitespace trimmed
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = format!(
            "{:>4},{:<3} {:<10}   {}",
            self.location.line, self.location.column, self.token_type, self.content
        );
        f.write_str(row.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_type_display() {
        assert_eq!(TokenType::Letters.to_string(), "Letters");
        assert_eq!(TokenType::Eol.to_string(), "EOL");
        assert_eq!(format!("{:<6}|", TokenType::Eof), "EOF   |");
    }

    #[test]
    fn test_listing_row() {
        let token = Token::new(TokenType::Digits, Location::new(5, 1, 6), "1234");
        assert_eq!(token.to_string(), "   1,6   Digits       1234");

        let wide = Token::new(TokenType::Symbols, Location::new(99, 12, 104), "->");
        assert_eq!(wide.to_string(), "  12,104 Symbols      ->");
    }

    #[test]
    fn test_listing_row_trims_trailing_whitespace() {
        let eol = Token::new(TokenType::Eol, Location::new(4, 1, 5), "\n");
        assert_eq!(eol.to_string(), "   1,5   EOL");

        let eof = Token::eof(Location::start());
        assert_eq!(eof.to_string(), "   1,1   EOF");
    }

    #[test]
    fn test_serialization_shape() {
        let token = Token::new(TokenType::Eol, Location::new(3, 1, 4), "\n");
        let json = serde_json::to_value(&token).unwrap();

        assert_eq!(json["tokenType"], "EOL");
        assert_eq!(json["content"], "\n");
        assert_eq!(json["location"]["offset"], 3);
        assert_eq!(json["location"]["line"], 1);
        assert_eq!(json["location"]["column"], 4);

        let back: Token = serde_json::from_value(json).unwrap();
        assert_eq!(back, token);
    }

    #[test]
    fn test_token_helpers() {
        let eof = Token::eof(Location::new(7, 2, 3));
        assert!(eof.is_eof());
        assert!(eof.content.is_empty());

        let other = Token::new(TokenType::Other, Location::start(), "ȫé");
        assert_eq!(other.char_count(), 2);
        assert!(!other.is_eol());
    }
}
