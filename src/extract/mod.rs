//! Argument extraction from raw query parameters
//!
//! Maps an untrusted multi-valued query-parameter source into a
//! [`crate::PageArgs`] bundle. The source can be any transport that
//! yields `(name, value)` string pairs; a convenience path decodes a raw
//! URL query string directly.

mod query;

pub use query::{from_pairs, from_query};

#[cfg(test)]
mod tests;
