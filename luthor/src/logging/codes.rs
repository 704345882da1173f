//! Event codes
//!
//! Every log event carries a short code naming the stage that raised it:
//! `L` for source loading, `S` for scanning, `C` for the command line.
//! Codes in the 0xx range describe a failure or a notable input condition
//! and have an entry in the code table; 1xx codes mark progress and have none.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Stable identifier attached to a log event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Table entry for this code, `None` for progress codes
    pub fn info(&self) -> Option<&'static CodeInfo> {
        code_table().get(self.0)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Load,
    Scan,
    Cli,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Load => "load",
            Category::Scan => "scan",
            Category::Cli => "cli",
        }
    }
}

#[derive(Debug)]
pub struct CodeInfo {
    pub category: Category,
    pub severity: Severity,
}

/// Reading a source file from disk
pub mod load {
    use super::Code;

    pub const NOT_FOUND: Code = Code::new("L001");
    pub const NOT_A_FILE: Code = Code::new("L002");
    pub const TOO_LARGE: Code = Code::new("L003");
    pub const EMPTY: Code = Code::new("L004");
    pub const NOT_UTF8: Code = Code::new("L005");
    pub const READ_FAILED: Code = Code::new("L006");

    pub const LOADED: Code = Code::new("L100");
}

/// Lexing. A scan never fails, so the only 0xx code flags odd input.
pub mod scan {
    use super::Code;

    pub const UNTERMINATED_STRING: Code = Code::new("S001");

    pub const STARTED: Code = Code::new("S100");
    pub const COMPLETED: Code = Code::new("S101");
    pub const TOKEN_COUNTS: Code = Code::new("S102");
    pub const LINES_GROUPED: Code = Code::new("S103");
}

pub mod cli {
    use super::Code;

    pub const FILES_FAILED: Code = Code::new("C001");

    pub const STARTED: Code = Code::new("C100");
    pub const FILES_DISCOVERED: Code = Code::new("C101");
}

static CODE_TABLE: OnceLock<HashMap<&'static str, CodeInfo>> = OnceLock::new();

fn code_table() -> &'static HashMap<&'static str, CodeInfo> {
    CODE_TABLE.get_or_init(|| {
        [
            (load::NOT_FOUND, Category::Load, Severity::Medium),
            (load::NOT_A_FILE, Category::Load, Severity::Medium),
            (load::TOO_LARGE, Category::Load, Severity::High),
            (load::EMPTY, Category::Load, Severity::Low),
            (load::NOT_UTF8, Category::Load, Severity::Medium),
            (load::READ_FAILED, Category::Load, Severity::High),
            (scan::UNTERMINATED_STRING, Category::Scan, Severity::Low),
            (cli::FILES_FAILED, Category::Cli, Severity::High),
        ]
        .into_iter()
        .map(|(code, category, severity)| (code.as_str(), CodeInfo { category, severity }))
        .collect()
    })
}
