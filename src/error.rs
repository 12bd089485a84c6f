//! Error types for registry construction.
//!
//! The lookup operations themselves are total and never fail; the only
//! failures in this crate are data-integrity defects detected while
//! indexing a particle table.

use thiserror::Error;

/// Integrity defects in a particle table.
///
/// Both variants name the colliding rows so the offending table edit can be
/// identified from the message alone.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Two rows carry the same code.
    #[error("duplicate code {code}: maps to both \"{first}\" and \"{second}\"")]
    DuplicateCode {
        code: i32,
        first: &'static str,
        second: &'static str,
    },

    /// Two rows fold to the same name under ASCII case-folding, which would
    /// make case-insensitive reverse lookup ambiguous.
    #[error("ambiguous name \"{name}\": codes {first} and {second} collide case-insensitively")]
    AmbiguousName {
        name: String,
        first: i32,
        second: i32,
    },
}
