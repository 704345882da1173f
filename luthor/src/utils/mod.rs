//! Shared primitive types for the scanner, lexer and logging layers.

pub mod location;

pub use location::Location;
