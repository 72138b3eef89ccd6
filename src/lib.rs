//! # cursor-pager
//!
//! Cursor-based pagination argument resolution following the GraphQL
//! connections model.
//!
//! The crate turns raw, untrusted pagination inputs (`after`/`first` for
//! forward traversal, `before`/`last` for backward) into a normalized
//! directive: a starting cursor, a bounded record limit, and a traversal
//! direction. Cursors are fully opaque pass-through tokens; fetching and
//! interpreting them against an ordered record set is the data layer's
//! job.
//!
//! ## Quick Start
//!
//! ```rust
//! use cursor_pager::{extract, Direction, Pager};
//!
//! # fn main() -> cursor_pager::Result<()> {
//! // Built once at startup, shared across request handlers.
//! let pager = Pager::default();
//!
//! // Per request: raw query string -> argument bundle -> directive.
//! let args = extract::from_query("after=abcdef&first=10")?;
//! let page = pager.resolve(Some(&args));
//!
//! assert_eq!(page.cursor, "abcdef");
//! assert_eq!(page.limit, 10);
//! assert_eq!(page.direction, Direction::Forward);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! query params ──> extract ──> PageArgs ──> Pager::resolve ──> Page
//!                 (fallible)                  (infallible)       │
//!                                                               ▼
//!                                                          data layer
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Argument extraction from raw query parameters
pub mod extract;

/// Pagination argument resolution
pub mod pager;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use pager::{Direction, Page, PageArgs, Pager, PagerConfig};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
