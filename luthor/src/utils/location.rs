//! Source location tracking
//!
//! A `Location` is an immutable snapshot of where a token started. Offsets
//! count characters, not bytes, so they line up with scanner positions.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in source text with line, column, and character offset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Location {
    /// Character offset from start of input (0-based)
    pub offset: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Location {
    /// Create a new location
    pub fn new(offset: usize, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// Create the starting location (offset 0, line 1, column 1)
    pub fn start() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}, column {} (offset {})",
            self.line, self.column, self.offset
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_location() {
        let loc = Location::start();
        assert_eq!(loc.offset, 0);
        assert_eq!(loc.line, 1);
        assert_eq!(loc.column, 1);
        assert_eq!(loc, Location::default());
    }

    #[test]
    fn test_display() {
        let loc = Location::new(17, 3, 5);
        assert_eq!(loc.to_string(), "line 3, column 5 (offset 17)");
    }

    #[test]
    fn test_ordering_follows_offset_first() {
        assert!(Location::new(2, 1, 3) < Location::new(3, 1, 4));
        assert!(Location::new(9, 1, 10) < Location::new(10, 2, 1));
    }

    #[test]
    fn test_serialization_shape() {
        let json = serde_json::to_string(&Location::new(4, 2, 1)).unwrap();
        assert_eq!(json, r#"{"offset":4,"line":2,"column":1}"#);
    }
}
