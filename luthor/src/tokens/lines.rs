//! Tokens grouped by source line
use super::token::Token;
use serde::Serialize;
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Ordered mapping from line number to the tokens that start on that line.
///
/// A string token spanning several physical lines stays under the line it
/// started on. `EOL` tokens belong to the line they terminate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenLines(BTreeMap<u32, Vec<Token>>);

impl TokenLines {
    /// Group a flat token sequence in a single forward pass
    pub fn group(tokens: Vec<Token>) -> Self {
        let mut lines: BTreeMap<u32, Vec<Token>> = BTreeMap::new();
        for token in tokens {
            lines.entry(token.location.line).or_default().push(token);
        }
        Self(lines)
    }

    /// Tokens on the given line, if any started there
    pub fn line(&self, line: u32) -> Option<&[Token]> {
        self.0.get(&line).map(Vec::as_slice)
    }

    pub fn line_count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, u32, Vec<Token>> {
        self.0.iter()
    }

    pub fn into_inner(self) -> BTreeMap<u32, Vec<Token>> {
        self.0
    }
}

impl<'a> IntoIterator for &'a TokenLines {
    type Item = (&'a u32, &'a Vec<Token>);
    type IntoIter = btree_map::Iter<'a, u32, Vec<Token>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vec<Token>> for TokenLines {
    fn from(tokens: Vec<Token>) -> Self {
        Self::group(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenType;
    use crate::utils::Location;

    fn token(token_type: TokenType, offset: usize, line: u32, column: u32, content: &str) -> Token {
        Token::new(token_type, Location::new(offset, line, column), content)
    }

    #[test]
    fn test_group_preserves_order_within_line() {
        let tokens = vec![
            token(TokenType::Letters, 0, 1, 1, "ab"),
            token(TokenType::Whitespace, 2, 1, 3, " "),
            token(TokenType::Eol, 3, 1, 4, "\n"),
            token(TokenType::Digits, 4, 2, 1, "42"),
            token(TokenType::Eof, 6, 2, 3, ""),
        ];

        let lines = TokenLines::group(tokens);
        assert_eq!(lines.line_count(), 2);

        let first = lines.line(1).unwrap();
        assert_eq!(first.len(), 3);
        assert_eq!(first[0].content, "ab");
        assert!(first[2].is_eol());

        let second = lines.line(2).unwrap();
        assert_eq!(second[0].content, "42");
        assert!(second[1].is_eof());
        assert!(lines.line(3).is_none());
    }

    #[test]
    fn test_iteration_is_ascending() {
        let tokens = vec![
            token(TokenType::Eol, 0, 1, 1, "\n"),
            token(TokenType::Eol, 1, 2, 1, "\n"),
            token(TokenType::Eof, 2, 3, 1, ""),
        ];
        let lines: TokenLines = tokens.into();
        let keys: Vec<u32> = lines.iter().map(|(line, _)| *line).collect();
        assert_eq!(keys, vec![1, 2, 3]);
        assert_eq!(lines.into_inner().len(), 3);
    }

    #[test]
    fn test_empty() {
        let lines = TokenLines::group(Vec::new());
        assert!(lines.is_empty());
        assert_eq!(lines.line_count(), 0);
    }
}
