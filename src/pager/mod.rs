//! Pagination argument resolution
//!
//! Implements the GraphQL cursor connections model: a [`Pager`] holds the
//! configured page-size bounds and turns a [`PageArgs`] bundle into a
//! [`Page`] directive telling the data layer where to start, how many
//! records to fetch, and in which direction to walk.

mod resolver;
mod types;

pub use resolver::{Pager, PagerConfig};
pub use types::{Direction, Page, PageArgs};
