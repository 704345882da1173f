//! Default classification charsets
//!
//! Each Lexer starts from these and may replace any of them before scanning.

pub mod charsets {
    /// ASCII letters
    pub const DEFAULT_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

    /// ASCII decimal digits
    pub const DEFAULT_DIGITS: &str = "0123456789";

    /// Punctuation, including the pound sign
    pub const DEFAULT_SYMBOLS: &str = "!£$%^&*()-_=+[]{};:'@#~,.<>/?\\|";

    /// Space and horizontal tab
    pub const DEFAULT_WHITESPACE: &str = " \t";

    /// Single quote, double quote and backtick
    pub const DEFAULT_QUOTES: &str = "'\"`";
}

/// Control characters with fixed meaning in the dispatch loop
pub mod control {
    pub const CARRIAGE_RETURN: char = '\r';
    pub const LINE_FEED: char = '\n';

    /// Content of a compressed whitespace run
    pub const COMPRESSED_WHITESPACE: &str = " ";
}

#[cfg(test)]
mod tests {
    use super::charsets::*;

    #[test]
    fn test_default_charsets_are_disjoint_except_quote() {
        for ch in DEFAULT_LETTERS.chars() {
            assert!(!DEFAULT_DIGITS.contains(ch));
            assert!(!DEFAULT_SYMBOLS.contains(ch));
            assert!(!DEFAULT_WHITESPACE.contains(ch));
        }
        // Single quote is both a quote and a symbol; quotes win by priority
        assert!(DEFAULT_SYMBOLS.contains('\''));
        assert!(DEFAULT_QUOTES.contains('\''));
    }

    #[test]
    fn test_default_sizes() {
        assert_eq!(DEFAULT_LETTERS.chars().count(), 52);
        assert_eq!(DEFAULT_DIGITS.chars().count(), 10);
        assert_eq!(DEFAULT_WHITESPACE.chars().count(), 2);
        assert_eq!(DEFAULT_QUOTES.chars().count(), 3);
    }
}
