//! Listing filter/sort engine and the view state that drives it.
//!
//! The engine ([`engine::filter_and_sort`]) is a pure transform; the view
//! ([`view::ListView`]) owns the mutable search/filter/sort state a listing
//! screen holds and re-runs the engine after every change. Lenient numeric
//! parsing for currency and return strings lives in [`numeric`].

pub mod engine;
pub mod filters;
pub mod numeric;
pub mod view;

pub use engine::{filter_and_sort, Record};
pub use filters::{FilterField, FilterState, SizeBounds, SortKey};
pub use view::ListView;
