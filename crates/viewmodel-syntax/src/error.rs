//! Error types for viewmodel-syntax operations.

use thiserror::Error;

/// Result type alias for viewmodel-syntax operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading declarations or applying fix-its.
///
/// Missing `State`/`Action`/`reduce` members are not errors: those are
/// reported as [`Diagnostic`](crate::Diagnostic)s through a sink.
#[derive(Debug, Error)]
pub enum Error {
    /// The attachment site is `mod name;` rather than an inline module.
    #[error("`mod {name};` has no inline body; #[view_model] needs `mod {name} {{ ... }}`")]
    NotInline {
        /// The module identifier.
        name: String,
    },

    /// A fix-it anchor does not map to a position in the source text.
    #[error("fix-it anchor {line}:{column} lies outside the source text")]
    AnchorOutOfRange {
        /// 1-based line of the anchor.
        line: usize,
        /// 0-based column (in chars) of the anchor.
        column: usize,
    },
}

impl Error {
    /// Create a not-inline error.
    #[inline]
    pub fn not_inline(name: impl Into<String>) -> Self {
        Error::NotInline { name: name.into() }
    }

    /// Create an anchor-out-of-range error.
    #[inline]
    pub fn anchor_out_of_range(line: usize, column: usize) -> Self {
        Error::AnchorOutOfRange { line, column }
    }
}
