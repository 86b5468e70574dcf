//! Listing filter engine shared by the Works and Articles screens
//!
//! The engine is a set of pure functions over an in-memory collection:
//! derive the tag universe, toggle tags in a [`Selection`], and filter the
//! collection by kind, tags and free-text query. It performs no I/O, keeps
//! no state between calls, and is cheap enough to re-run on every keystroke.

pub mod filter;
pub mod selection;
pub mod traits;

pub use filter::{FilterSummary, filter_items, tag_universe};
pub use selection::{ALL_TAG, KindFilter, Selection, TagSelection};
pub use traits::Searchable;
