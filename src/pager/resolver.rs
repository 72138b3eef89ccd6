//! The pager and its resolution rules
//!
//! Resolution is a pure total function: every argument bundle, including a
//! missing one, maps to a directive. The rules below are evaluated in
//! order and the first match wins; reordering them changes observable
//! behavior.

use super::types::{Page, PageArgs};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Configured page-size bounds for a [`Pager`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerConfig {
    /// Limit used when the client supplies no `first`/`last` count
    pub default_page_size: u64,
    /// Upper clamp for any client-supplied count
    pub max_page_size: u64,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
        }
    }
}

impl PagerConfig {
    /// Create a config with explicit bounds
    pub fn new(default_page_size: u64, max_page_size: u64) -> Self {
        Self {
            default_page_size,
            max_page_size,
        }
    }
}

/// Resolves cursor pagination arguments into page directives
///
/// Immutable once built; safe to share across request handlers. Build one
/// at startup with [`Pager::new`] or [`Pager::default`] and call
/// [`Pager::resolve`] per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    default_page_size: u64,
    max_page_size: u64,
}

impl Default for Pager {
    /// A pager with the system defaults: default page size 10, max 100
    fn default() -> Self {
        let config = PagerConfig::default();
        Self {
            default_page_size: config.default_page_size,
            max_page_size: config.max_page_size,
        }
    }
}

impl Pager {
    /// Create a pager from explicit bounds
    ///
    /// Fails with [`Error::InvalidConfig`] when the default page size
    /// exceeds the max page size; no pager is produced in that case.
    pub fn new(config: PagerConfig) -> Result<Self> {
        if config.default_page_size > config.max_page_size {
            return Err(Error::invalid_config(
                config.default_page_size,
                config.max_page_size,
            ));
        }
        Ok(Self {
            default_page_size: config.default_page_size,
            max_page_size: config.max_page_size,
        })
    }

    /// Limit used when no explicit count is given
    pub fn default_page_size(&self) -> u64 {
        self.default_page_size
    }

    /// Upper clamp applied to explicit counts
    pub fn max_page_size(&self) -> u64 {
        self.max_page_size
    }

    /// Resolve an argument bundle into a page directive
    ///
    /// Never fails. Conditions are evaluated in the listed order and the
    /// first match wins:
    ///
    /// 1. No bundle — the default forward page from the start.
    /// 2. Both `after` and `before` set — the request is ambiguous, so it
    ///    resets to the default forward page rather than erroring.
    /// 3. `after` with `first` — forward from `after`, limit clamped to
    ///    the max page size.
    /// 4. `after` alone — forward from `after` with the default limit.
    /// 5. `before` with `last` — backward from `before`, limit clamped.
    /// 6. `before` alone — backward from `before` with the default limit.
    /// 7. Nothing set — the default forward page from the start.
    pub fn resolve(&self, args: Option<&PageArgs>) -> Page {
        let Some(args) = args else {
            return Page::forward("", self.default_page_size);
        };

        if args.after.is_some() && args.before.is_some() {
            warn!("both 'after' and 'before' supplied, resetting to default page");
            return Page::forward("", self.default_page_size);
        }

        let page = match (&args.after, args.first, &args.before, args.last) {
            (Some(after), Some(first), _, _) => {
                Page::forward(after.clone(), self.max_page_size.min(first))
            }
            (Some(after), None, _, _) => Page::forward(after.clone(), self.default_page_size),
            (None, _, Some(before), Some(last)) => {
                Page::backward(before.clone(), self.max_page_size.min(last))
            }
            (None, _, Some(before), None) => {
                Page::backward(before.clone(), self.default_page_size)
            }
            (None, _, None, _) => Page::forward("", self.default_page_size),
        };

        debug!(
            cursor = %page.cursor,
            limit = page.limit,
            direction = ?page.direction,
            "resolved pagination arguments"
        );
        page
    }
}
