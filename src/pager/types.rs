//! Pagination argument and directive types

use serde::{Deserialize, Serialize};

/// Traversal direction relative to a cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Walk toward records after the cursor in the default order
    Forward,
    /// Walk toward records before the cursor
    Backward,
}

impl Direction {
    /// Check if this is forward traversal
    pub fn is_forward(self) -> bool {
        matches!(self, Self::Forward)
    }

    /// Check if this is backward traversal
    pub fn is_backward(self) -> bool {
        matches!(self, Self::Backward)
    }
}

/// Cursor pagination arguments as supplied by a client
///
/// All four fields are independent and optional; nonsensical combinations
/// (such as both cursors at once) are not rejected here. Resolution policy
/// lives in [`super::Pager::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageArgs {
    /// Cursor to paginate forward from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    /// Requested record count for forward pagination
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<u64>,
    /// Cursor to paginate backward from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    /// Requested record count for backward pagination
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<u64>,
}

impl PageArgs {
    /// Create an empty bundle with no arguments set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `after` cursor
    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    /// Set the `first` count
    pub fn first(mut self, count: u64) -> Self {
        self.first = Some(count);
        self
    }

    /// Set the `before` cursor
    pub fn before(mut self, cursor: impl Into<String>) -> Self {
        self.before = Some(cursor.into());
        self
    }

    /// Set the `last` count
    pub fn last(mut self, count: u64) -> Self {
        self.last = Some(count);
        self
    }

    /// Check if no argument is set at all
    pub fn is_empty(&self) -> bool {
        self.after.is_none() && self.first.is_none() && self.before.is_none() && self.last.is_none()
    }
}

/// Resolved pagination directive
///
/// Handed to the data-fetch layer, which interprets the opaque cursor
/// against its own ordering and returns up to `limit` records in the
/// indicated direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    /// Where to begin pagination; empty means the start of the default
    /// traversal order
    pub cursor: String,
    /// How many records to return, already clamped to the configured max
    pub limit: u64,
    /// Which way to walk from the cursor
    pub direction: Direction,
}

impl Page {
    /// Create a forward page directive
    pub fn forward(cursor: impl Into<String>, limit: u64) -> Self {
        Self {
            cursor: cursor.into(),
            limit,
            direction: Direction::Forward,
        }
    }

    /// Create a backward page directive
    pub fn backward(cursor: impl Into<String>, limit: u64) -> Self {
        Self {
            cursor: cursor.into(),
            limit,
            direction: Direction::Backward,
        }
    }
}
