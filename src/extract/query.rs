//! Query-parameter extraction

use crate::error::{Error, Result};
use crate::pager::PageArgs;
use tracing::debug;

const PARAM_AFTER: &str = "after";
const PARAM_FIRST: &str = "first";
const PARAM_BEFORE: &str = "before";
const PARAM_LAST: &str = "last";

/// Extract pagination arguments from `(name, value)` parameter pairs
///
/// Only the first occurrence of a repeated parameter is used, and empty
/// values are treated as absent. Cursor parameters (`after`, `before`)
/// pass through untouched. Count parameters (`first`, `last`) are parsed
/// as base-10 integers; negative counts are normalized by absolute value
/// rather than rejected, while non-numeric text fails the whole
/// extraction with [`Error::ParseCount`].
///
/// Values are assumed to be already percent-decoded; use [`from_query`]
/// for a raw query string.
pub fn from_pairs<I, K, V>(pairs: I) -> Result<PageArgs>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    // First occurrence of each parameter wins, even an empty one.
    let mut after: Option<String> = None;
    let mut first: Option<String> = None;
    let mut before: Option<String> = None;
    let mut last: Option<String> = None;

    for (name, value) in pairs {
        let slot = match name.as_ref() {
            PARAM_AFTER => &mut after,
            PARAM_FIRST => &mut first,
            PARAM_BEFORE => &mut before,
            PARAM_LAST => &mut last,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value.as_ref().to_string());
        }
    }

    let args = PageArgs {
        after: after.filter(|v| !v.is_empty()),
        first: parse_count(PARAM_FIRST, first.as_deref())?,
        before: before.filter(|v| !v.is_empty()),
        last: parse_count(PARAM_LAST, last.as_deref())?,
    };

    debug!(?args, "extracted pagination arguments");
    Ok(args)
}

/// Extract pagination arguments from a raw URL query string
///
/// Percent-decodes the string with `form_urlencoded`, then applies the
/// same rules as [`from_pairs`].
pub fn from_query(query: &str) -> Result<PageArgs> {
    from_pairs(url::form_urlencoded::parse(query.as_bytes()))
}

/// Parse a count parameter, normalizing negative values by absolute value
fn parse_count(field: &str, raw: Option<&str>) -> Result<Option<u64>> {
    match raw {
        None | Some("") => Ok(None),
        Some(text) => text
            .parse::<i64>()
            .map(|n| Some(n.unsigned_abs()))
            .map_err(|_| Error::parse_count(field, text)),
    }
}
