//! Error types for cursor-pager
//!
//! All fallible public APIs return `Result<T, Error>` where Error is
//! defined here. Resolution itself is infallible; errors only arise when
//! building a [`crate::Pager`] from an invalid configuration or when
//! extracting arguments from malformed raw input.

use thiserror::Error;

/// The main error type for cursor-pager
#[derive(Error, Debug)]
pub enum Error {
    /// The configured bounds are inconsistent. Raised only at pager
    /// construction, never during resolution.
    #[error("invalid pager config: default page size {default} exceeds max page size {max}")]
    InvalidConfig {
        /// Configured default page size
        default: u64,
        /// Configured max page size
        max: u64,
    },

    /// A count parameter held non-numeric text. Raised only during
    /// extraction; the bundle is discarded, never partially filled.
    #[error("invalid value for '{field}': {value:?} is not an integer")]
    ParseCount {
        /// Name of the offending parameter (`first` or `last`)
        field: String,
        /// The raw text that failed to parse
        value: String,
    },
}

impl Error {
    /// Create an invalid-config error
    pub fn invalid_config(default: u64, max: u64) -> Self {
        Self::InvalidConfig { default, max }
    }

    /// Create a count-parse error
    pub fn parse_count(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::ParseCount {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Result type alias for cursor-pager
pub type Result<T> = std::result::Result<T, Error>;
