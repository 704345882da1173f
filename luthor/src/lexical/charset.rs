//! Character classification sets
//!
//! Membership is answered from a 128-bit ASCII bitmap with a hash set
//! fallback for everything else, so lookups stay O(1) however long the
//! configured string is.

use crate::config::constants::charsets::{
    DEFAULT_DIGITS, DEFAULT_LETTERS, DEFAULT_QUOTES, DEFAULT_SYMBOLS, DEFAULT_WHITESPACE,
};
use crate::tokens::TokenType;
use std::collections::HashSet;
use std::fmt;

/// A set of characters built from a string
#[derive(Clone, PartialEq, Eq)]
pub struct CharSet {
    source: String,
    ascii: u128,
    extended: HashSet<char>,
}

impl CharSet {
    pub fn new(chars: &str) -> Self {
        let mut ascii = 0u128;
        let mut extended = HashSet::new();

        for ch in chars.chars() {
            if ch.is_ascii() {
                ascii |= 1u128 << (ch as u32);
            } else {
                extended.insert(ch);
            }
        }

        Self {
            source: chars.to_string(),
            ascii,
            extended,
        }
    }

    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii & (1u128 << (ch as u32)) != 0
        } else {
            self.extended.contains(&ch)
        }
    }

    /// The string this set was built from
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_empty(&self) -> bool {
        self.ascii == 0 && self.extended.is_empty()
    }
}

impl From<&str> for CharSet {
    fn from(chars: &str) -> Self {
        Self::new(chars)
    }
}

impl fmt::Debug for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CharSet").field(&self.source).finish()
    }
}

/// The five classification sets a lexer consults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charsets {
    pub letters: CharSet,
    pub digits: CharSet,
    pub symbols: CharSet,
    pub whitespace: CharSet,
    pub quotes: CharSet,
}

impl Charsets {
    /// Run class of `ch`, checked in priority order
    /// Whitespace, Letters, Digits, Symbols.
    ///
    /// Quotes and line terminators are handled before this is consulted and
    /// are not reported here.
    pub fn classify(&self, ch: char) -> Option<TokenType> {
        self.classify_run(ch).map(|(token_type, _)| token_type)
    }

    /// Like [`classify`](Charsets::classify), also returning the set that
    /// extends the run
    pub fn classify_run(&self, ch: char) -> Option<(TokenType, &CharSet)> {
        [
            (TokenType::Whitespace, &self.whitespace),
            (TokenType::Letters, &self.letters),
            (TokenType::Digits, &self.digits),
            (TokenType::Symbols, &self.symbols),
        ]
        .into_iter()
        .find(|(_, set)| set.contains(ch))
    }

    pub fn is_quote(&self, ch: char) -> bool {
        self.quotes.contains(ch)
    }
}

impl Default for Charsets {
    fn default() -> Self {
        Self {
            letters: CharSet::new(DEFAULT_LETTERS),
            digits: CharSet::new(DEFAULT_DIGITS),
            symbols: CharSet::new(DEFAULT_SYMBOLS),
            whitespace: CharSet::new(DEFAULT_WHITESPACE),
            quotes: CharSet::new(DEFAULT_QUOTES),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_and_extended_membership() {
        let set = CharSet::new("az£ȫ\t");
        assert!(set.contains('a'));
        assert!(set.contains('z'));
        assert!(set.contains('\t'));
        assert!(set.contains('£'));
        assert!(set.contains('ȫ'));
        assert!(!set.contains('b'));
        assert!(!set.contains('é'));
        assert_eq!(set.as_str(), "az£ȫ\t");
    }

    #[test]
    fn test_bitmap_edges() {
        let set = CharSet::new("\u{0}\u{7f}");
        assert!(set.contains('\u{0}'));
        assert!(set.contains('\u{7f}'));
        assert!(!set.contains('\u{80}'));
    }

    #[test]
    fn test_empty_set() {
        let set = CharSet::from("");
        assert!(set.is_empty());
        assert!(!set.contains(' '));
    }

    #[test]
    fn test_default_classification() {
        let sets = Charsets::default();
        assert_eq!(sets.classify(' '), Some(TokenType::Whitespace));
        assert_eq!(sets.classify('\t'), Some(TokenType::Whitespace));
        assert_eq!(sets.classify('Q'), Some(TokenType::Letters));
        assert_eq!(sets.classify('7'), Some(TokenType::Digits));
        assert_eq!(sets.classify('£'), Some(TokenType::Symbols));
        assert_eq!(sets.classify('\\'), Some(TokenType::Symbols));
        assert_eq!(sets.classify('ȫ'), None);
        assert_eq!(sets.classify('"'), None);
        assert!(sets.is_quote('`'));
        assert!(!sets.is_quote('!'));
    }

    #[test]
    fn test_overlap_resolves_by_priority() {
        let mut sets = Charsets::default();
        sets.digits = CharSet::new("0123456789abc");
        sets.symbols = CharSet::new(" ");

        assert_eq!(sets.classify('a'), Some(TokenType::Letters));
        assert_eq!(sets.classify(' '), Some(TokenType::Whitespace));
    }
}
