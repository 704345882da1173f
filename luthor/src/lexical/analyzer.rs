//! Core character-classification lexer
//!
//! Drives a [`Scanner`] one character at a time and groups consecutive
//! characters of the same class into tokens. Scan state lives in a
//! [`ScanState`] accumulator owned by a single `get_tokens` call.

use super::charset::{CharSet, Charsets};
use crate::config::compile_time::lexical::TOKEN_CAPACITY_DIVISOR;
use crate::config::constants::control::{CARRIAGE_RETURN, COMPRESSED_WHITESPACE, LINE_FEED};
use crate::config::runtime::LexicalPreferences;
use crate::logging::{codes, global_logger, LogEvent, LogLevel};
use crate::scanner::Scanner;
use crate::tokens::{Token, TokenLines, TokenType};
use crate::utils::Location;
use crate::{log_debug, log_info};
use serde::Serialize;

/// Per-scan counters
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub whitespace_tokens: usize,
    pub letter_tokens: usize,
    pub digit_tokens: usize,
    pub symbol_tokens: usize,
    pub string_tokens: usize,
    pub other_tokens: usize,
    pub eol_tokens: usize,
    pub eof_tokens: usize,
    pub unterminated_strings: usize,
    /// Most source characters consumed by a single token
    pub longest_run: usize,
    pub chars_consumed: usize,
}

impl LexicalMetrics {
    pub(crate) fn record_token(&mut self, token_type: TokenType, consumed: usize) {
        self.total_tokens += 1;
        self.longest_run = self.longest_run.max(consumed);

        match token_type {
            TokenType::Whitespace => self.whitespace_tokens += 1,
            TokenType::Letters => self.letter_tokens += 1,
            TokenType::Digits => self.digit_tokens += 1,
            TokenType::Symbols => self.symbol_tokens += 1,
            TokenType::String => self.string_tokens += 1,
            TokenType::Other => self.other_tokens += 1,
            TokenType::Eol => self.eol_tokens += 1,
            TokenType::Eof => self.eof_tokens += 1,
        }
    }

    pub fn count_for(&self, token_type: TokenType) -> usize {
        match token_type {
            TokenType::Whitespace => self.whitespace_tokens,
            TokenType::Letters => self.letter_tokens,
            TokenType::Digits => self.digit_tokens,
            TokenType::Symbols => self.symbol_tokens,
            TokenType::String => self.string_tokens,
            TokenType::Other => self.other_tokens,
            TokenType::Eol => self.eol_tokens,
            TokenType::Eof => self.eof_tokens,
        }
    }
}

/// Accumulator threaded through one scan
struct ScanState {
    line: u32,
    column: u32,
    tokens: Vec<Token>,
    /// Unclassified characters waiting for a different class to close them
    pending_other: Option<Token>,
    metrics: Option<LexicalMetrics>,
}

impl ScanState {
    fn new(capacity: usize, collect_metrics: bool) -> Self {
        Self {
            line: 1,
            column: 1,
            tokens: Vec::with_capacity(capacity),
            pending_other: None,
            metrics: collect_metrics.then(LexicalMetrics::default),
        }
    }

    fn location(&self, offset: usize) -> Location {
        Location::new(offset, self.line, self.column)
    }

    fn record(&mut self, token_type: TokenType, consumed: usize) {
        if let Some(metrics) = self.metrics.as_mut() {
            metrics.record_token(token_type, consumed);
        }
    }

    /// Append a finished token, closing any pending `Other` run first
    fn push(&mut self, token: Token, consumed: usize) {
        self.flush_other();
        self.record(token.token_type, consumed);
        self.tokens.push(token);
    }

    fn append_other(&mut self, location: Location, ch: char) {
        match self.pending_other.as_mut() {
            Some(token) => token.content.push(ch),
            None => self.pending_other = Some(Token::new(TokenType::Other, location, ch)),
        }
    }

    fn flush_other(&mut self) {
        if let Some(token) = self.pending_other.take() {
            let consumed = token.char_count();
            self.record(TokenType::Other, consumed);
            self.tokens.push(token);
        }
    }

    fn finish(mut self, offset: usize) -> (Vec<Token>, Option<LexicalMetrics>) {
        let eof = Token::eof(self.location(offset));
        self.push(eof, 0);
        if let Some(metrics) = self.metrics.as_mut() {
            metrics.chars_consumed = offset;
        }
        (self.tokens, self.metrics)
    }
}

/// Character-classification lexer over a single source text.
///
/// Charsets may be replaced any time before [`get_tokens`](Lexer::get_tokens)
/// is called. A lexer scans its input once: the scanner is exhausted
/// afterwards, so a second call only yields the final `EOF` token.
///
/// Charsets may contain CR or LF. Such a character is only special when the
/// main loop reaches it: inside a run whose set contains it, it is ordinary
/// content and does not advance the line.
pub struct Lexer {
    scanner: Scanner,
    charsets: Charsets,
    preferences: LexicalPreferences,
    metrics: Option<LexicalMetrics>,
}

impl Lexer {
    /// Lexer with default charsets and [`LexicalPreferences::default`].
    /// The environment is never consulted here.
    pub fn new(scanner: Scanner) -> Self {
        Self::with_preferences(scanner, LexicalPreferences::default())
    }

    /// Build a lexer with its own scanner over `source`
    pub fn from_source(source: &str) -> Self {
        Self::new(Scanner::new(source))
    }

    pub fn with_preferences(scanner: Scanner, preferences: LexicalPreferences) -> Self {
        Self {
            scanner,
            charsets: Charsets::default(),
            preferences,
            metrics: None,
        }
    }

    /// Replace all five charsets at once
    pub fn with_charsets(mut self, charsets: Charsets) -> Self {
        self.charsets = charsets;
        self
    }

    /// Replace the letters charset
    pub fn set_chars(&mut self, chars: &str) {
        self.charsets.letters = CharSet::new(chars);
    }

    pub fn set_digits(&mut self, digits: &str) {
        self.charsets.digits = CharSet::new(digits);
    }

    pub fn set_symbols(&mut self, symbols: &str) {
        self.charsets.symbols = CharSet::new(symbols);
    }

    pub fn set_whitespace(&mut self, whitespace: &str) {
        self.charsets.whitespace = CharSet::new(whitespace);
    }

    pub fn set_quotes(&mut self, quotes: &str) {
        self.charsets.quotes = CharSet::new(quotes);
    }

    pub fn charsets(&self) -> &Charsets {
        &self.charsets
    }

    pub fn preferences(&self) -> &LexicalPreferences {
        &self.preferences
    }

    /// Metrics from the last scan, if collection is enabled
    pub fn metrics(&self) -> Option<&LexicalMetrics> {
        self.metrics.as_ref()
    }

    /// Scan the whole input into an ordered token sequence ending in `EOF`.
    ///
    /// With `compress_whitespace` every whitespace run becomes a single
    /// space. Never fails: malformed input such as an unterminated string
    /// still produces tokens.
    pub fn get_tokens(&mut self, compress_whitespace: bool) -> Vec<Token> {
        let capacity = self.scanner.len() / TOKEN_CAPACITY_DIVISOR + 1;
        let mut state = ScanState::new(capacity, self.preferences.collect_metrics);

        log_debug!(codes::scan::STARTED, "Starting lexical scan",
            "chars" => self.scanner.len(),
            "compress_whitespace" => compress_whitespace);

        loop {
            let location = state.location(self.scanner.current_position());
            let Some(ch) = self.scanner.get_next() else {
                break;
            };

            if self.charsets.is_quote(ch) {
                state.column += 1;
                state.flush_other();
                if !consume_string(&mut self.scanner, &mut state, ch, location) {
                    self.report_unterminated_string(&mut state, ch, location);
                }
            } else if ch == CARRIAGE_RETURN {
                // dropped, but still closes an Other run
                state.flush_other();
            } else if ch == LINE_FEED {
                state.push(Token::new(TokenType::Eol, location, ch), 1);
                state.line += 1;
                state.column = 1;
            } else if let Some((token_type, set)) = self.charsets.classify_run(ch) {
                state.column += 1;
                let (content, consumed) = consume_run(&mut self.scanner, &mut state, set, ch);
                let content = if compress_whitespace && token_type == TokenType::Whitespace {
                    COMPRESSED_WHITESPACE.to_string()
                } else {
                    content
                };
                state.push(Token::new(token_type, location, content), consumed);
            } else {
                state.column += 1;
                state.append_other(location, ch);
            }
        }

        let final_line = state.line;
        let (tokens, metrics) = state.finish(self.scanner.current_position());
        self.metrics = metrics;
        self.log_scan_statistics(&tokens, final_line);

        tokens
    }

    /// Scan the input and group the tokens by the line each one starts on
    pub fn get_tokens_as_lines(&mut self, compress_whitespace: bool) -> TokenLines {
        let lines = TokenLines::group(self.get_tokens(compress_whitespace));

        log_debug!(codes::scan::LINES_GROUPED, "Tokens grouped by line",
            "lines" => lines.line_count());

        lines
    }

    fn report_unterminated_string(
        &self,
        state: &mut ScanState,
        delimiter: char,
        location: Location,
    ) {
        if let Some(metrics) = state.metrics.as_mut() {
            metrics.unterminated_strings += 1;
        }

        if !self.preferences.log_unterminated_strings {
            return;
        }
        if let Some(logger) = global_logger().filter(|l| l.enabled(LogLevel::Debug)) {
            logger.log_event(
                LogEvent::new(
                    LogLevel::Debug,
                    codes::scan::UNTERMINATED_STRING,
                    "String literal runs to end of input",
                )
                .with_location(location)
                .with_context("delimiter", delimiter),
            );
        }
    }

    fn log_scan_statistics(&self, tokens: &[Token], final_line: u32) {
        if !self.preferences.log_scan_statistics {
            return;
        }

        log_info!(codes::scan::COMPLETED, "Lexical scan complete",
            "tokens" => tokens.len(),
            "lines" => final_line,
            "chars" => self.scanner.current_position());

        if let Some(metrics) = &self.metrics {
            log_debug!(codes::scan::TOKEN_COUNTS, "Token type distribution",
                "whitespace" => metrics.whitespace_tokens,
                "letters" => metrics.letter_tokens,
                "digits" => metrics.digit_tokens,
                "symbols" => metrics.symbol_tokens,
                "strings" => metrics.string_tokens,
                "other" => metrics.other_tokens,
                "eol" => metrics.eol_tokens,
                "unterminated_strings" => metrics.unterminated_strings,
                "longest_run" => metrics.longest_run);
        }
    }
}

impl From<&str> for Lexer {
    fn from(source: &str) -> Self {
        Self::from_source(source)
    }
}

/// Consume a quoted string whose opening `delimiter` was already read.
/// Returns false when input ran out before the closing delimiter.
fn consume_string(
    scanner: &mut Scanner,
    state: &mut ScanState,
    delimiter: char,
    location: Location,
) -> bool {
    let mut content = String::from(delimiter);
    let mut terminated = false;

    // Line feeds are literal here; the line counter only moves outside strings
    while let Some(ch) = scanner.get_next() {
        content.push(ch);
        state.column += 1;
        if ch == delimiter {
            terminated = true;
            break;
        }
    }

    let consumed = content.chars().count();
    state.push(Token::new(TokenType::String, location, content), consumed);
    terminated
}

/// Extend a run started by `first` while the next character is in `set` or
/// is a bare carriage return. Returns the raw content and its length.
fn consume_run(
    scanner: &mut Scanner,
    state: &mut ScanState,
    set: &CharSet,
    first: char,
) -> (String, usize) {
    let mut content = String::from(first);
    let mut consumed = 1;

    while let Some(next) = scanner.peek_next() {
        if next != CARRIAGE_RETURN && !set.contains(next) {
            break;
        }
        scanner.get_next();
        content.push(next);
        state.column += 1;
        consumed += 1;
    }

    (content, consumed)
}
