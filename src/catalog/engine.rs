//! The listing filter/sort engine.
//!
//! [`filter_and_sort`] is a pure function of `(records, search term, filters,
//! sort key)` producing an ordered subset. It has no side effects and is
//! cheap enough to re-run on every keystroke, which is exactly how the views
//! drive it.
//!
//! # Predicate semantics
//!
//! - **Text search**: case-insensitive substring match against the record's
//!   searchable fields; an empty term matches everything.
//! - **Category filters**: a record passes a category when nothing is
//!   selected for it, or when it matches at least one selected value. What
//!   "matches" means per category (equality, substring, containment) is the
//!   record type's business via [`Record::field_matches`].
//! - **Size filter**: overlap between the record's parsed size range and the
//!   user's `[min, max]` bounds (see [`SizeBounds::overlaps`]).
//! - All predicates combine with logical AND.
//!
//! # Ordering
//!
//! Sorting is stable. `None` for the sort key preserves input order, which
//! is also the behavior for unrecognized sort strings after
//! [`SortKey::parse`].

use crate::catalog::filters::{FilterField, FilterState, SizeBounds, SortKey};
use chrono::NaiveDate;

/// A listing record the engine can filter and sort.
///
/// Implemented by [`crate::domain::Deal`] and [`crate::domain::Contact`].
/// The engine only sees parsed values; lenient string parsing lives with the
/// record types and in [`crate::catalog::numeric`].
pub trait Record: Clone {
    /// Fields examined by the free-text search, already in display form.
    fn search_fields(&self) -> Vec<&str>;

    /// True if the record matches one selected value in a category. Return
    /// `false` for categories that do not apply to this record type, so
    /// selecting such a filter excludes the whole listing rather than
    /// silently ignoring the filter.
    fn field_matches(&self, field: FilterField, selected: &str) -> bool;

    /// Parsed `(min, max)` size range in $M. Point-valued sizes return a
    /// degenerate range.
    fn size_range(&self) -> (f64, f64);

    /// Name used by the `name` / `name-desc` orderings.
    fn sort_name(&self) -> &str;

    /// Date used by the `date` ordering (deals: date added; contacts: date
    /// verified).
    fn date_added(&self) -> NaiveDate;

    /// Value used by the `size` ordering.
    fn size_value(&self) -> f64;

    /// Lower bound of the marketed return, for the `return` ordering.
    /// Records without a return profile sort as zero.
    fn return_lower_bound(&self) -> f64 {
        0.0
    }
}

/// Filters and sorts a record list into an ordered subset.
///
/// Pure transform: the input slice is untouched and matching records are
/// cloned into the result. Safe to call on every state change.
///
/// ```
/// use dealflow::catalog::engine::filter_and_sort;
/// use dealflow::catalog::filters::{FilterField, FilterState, SortKey};
/// use dealflow::domain::sample_deals;
///
/// let deals = sample_deals();
/// let mut filters = FilterState::default();
/// filters.toggle(FilterField::Status, "Active");
///
/// let active = filter_and_sort(&deals, "", &filters, Some(SortKey::Size));
/// assert!(active.len() < deals.len());
/// ```
#[must_use]
pub fn filter_and_sort<T: Record>(
    records: &[T],
    search_term: &str,
    filters: &FilterState,
    sort: Option<SortKey>,
) -> Vec<T> {
    let _span = tracing::debug_span!(
        "filter_and_sort",
        total = records.len(),
        search_len = search_term.len(),
        active_filters = filters.active_count(),
        sort = ?sort
    )
    .entered();

    let needle = search_term.to_lowercase();

    let mut matched: Vec<T> = records
        .iter()
        .filter(|record| {
            matches_search(*record, &needle)
                && matches_categories(*record, filters)
                && matches_size(*record, filters.investment_size)
        })
        .cloned()
        .collect();

    if let Some(key) = sort {
        apply_sort(&mut matched, key);
    }

    tracing::debug!(matched = matched.len(), "listing filtered");
    matched
}

fn matches_search<T: Record>(record: &T, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

fn matches_categories<T: Record>(record: &T, filters: &FilterState) -> bool {
    FilterField::ALL.iter().all(|field| {
        let selected = filters.selected(*field);
        selected.is_empty()
            || selected
                .iter()
                .any(|value| record.field_matches(*field, value))
    })
}

fn matches_size<T: Record>(record: &T, bounds: SizeBounds) -> bool {
    !bounds.is_set() || bounds.overlaps(record.size_range())
}

fn apply_sort<T: Record>(records: &mut [T], key: SortKey) {
    match key {
        SortKey::NameAsc => records.sort_by(|a, b| compare_names(a.sort_name(), b.sort_name())),
        SortKey::NameDesc => records.sort_by(|a, b| compare_names(b.sort_name(), a.sort_name())),
        SortKey::DateAdded => records.sort_by(|a, b| b.date_added().cmp(&a.date_added())),
        SortKey::Size => records.sort_by(|a, b| {
            b.size_value()
                .partial_cmp(&a.size_value())
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
        SortKey::TargetReturn => records.sort_by(|a, b| {
            b.return_lower_bound()
                .partial_cmp(&a.return_lower_bound())
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
    }
}

/// Case-insensitive name comparison, with a case-sensitive tiebreak so the
/// ordering stays total. Stands in for locale-collated comparison.
fn compare_names(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
