//! List view state: records plus the filter/sort state a view owns.
//!
//! [`ListView`] is the stateful wrapper the UI layer holds: the master
//! record list, the user's current search term, [`FilterState`], and sort
//! key, with the filtered output recomputed through the engine after every
//! mutation. It is the single source of truth for what a listing shows.

use crate::catalog::engine::{filter_and_sort, Record};
use crate::catalog::filters::{FilterField, FilterState, SizeBounds, SortKey};

/// Stateful listing over a master record list.
///
/// Mutators recompute the filtered view immediately, so [`ListView::results`]
/// is always consistent with the current predicates. Records are append-only;
/// nothing in this version deletes them.
#[derive(Debug, Clone)]
pub struct ListView<T: Record> {
    /// Master list, in insertion order.
    records: Vec<T>,

    /// Filtered, sorted subset shown to the user.
    filtered: Vec<T>,

    /// Free-text search term.
    search_term: String,

    /// Active filter predicates.
    filters: FilterState,

    /// Active ordering; `None` preserves insertion order.
    sort: Option<SortKey>,
}

impl<T: Record> ListView<T> {
    /// Creates a view over the given records with no predicates, showing
    /// everything in insertion order.
    #[must_use]
    pub fn new(records: Vec<T>) -> Self {
        let filtered = records.clone();
        Self {
            records,
            filtered,
            search_term: String::new(),
            filters: FilterState::default(),
            sort: None,
        }
    }

    /// The filtered, sorted records currently visible.
    #[must_use]
    pub fn results(&self) -> &[T] {
        &self.filtered
    }

    /// Number of visible records. Drives the "N results found" label.
    #[must_use]
    pub fn result_count(&self) -> usize {
        self.filtered.len()
    }

    /// Total number of records, ignoring filters.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.records.len()
    }

    /// Current filter predicates (read-only).
    #[must_use]
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Number of active filters, for the filter-count badge.
    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        self.filters.active_count()
    }

    /// Replaces the search term and recomputes the view.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.refresh();
    }

    /// Toggles one categorical filter value and recomputes the view.
    pub fn toggle_filter(&mut self, field: FilterField, value: impl Into<String>) {
        self.filters.toggle(field, value);
        self.refresh();
    }

    /// Sets the numeric size bounds and recomputes the view.
    pub fn set_size_bounds(&mut self, min: Option<f64>, max: Option<f64>) {
        self.filters.investment_size = SizeBounds { min, max };
        self.refresh();
    }

    /// Sets (or clears) the sort key and recomputes the view.
    pub fn set_sort(&mut self, sort: Option<SortKey>) {
        self.sort = sort;
        self.refresh();
    }

    /// Clears the search term and every filter predicate, keeping the sort
    /// key, then recomputes. Mirrors the "clear all filters" control.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.search_term.clear();
        self.refresh();
    }

    /// Appends a newly created record and recomputes the view.
    pub fn push(&mut self, record: T) {
        self.records.push(record);
        self.refresh();
    }

    fn refresh(&mut self) {
        self.filtered = filter_and_sort(&self.records, &self.search_term, &self.filters, self.sort);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{sample_deals, Deal, DealStatus};

    #[test]
    fn new_view_shows_everything() {
        let view = ListView::new(sample_deals());
        assert_eq!(view.result_count(), view.total_count());
    }

    #[test]
    fn mutations_recompute_results() {
        let mut view = ListView::new(sample_deals());
        view.toggle_filter(FilterField::Status, "Active");
        assert_eq!(view.result_count(), 3);
        view.set_search("student");
        assert_eq!(view.result_count(), 1);
        assert_eq!(view.results()[0].title, "Student Housing Development");
    }

    #[test]
    fn clear_filters_restores_full_view() {
        let mut view = ListView::new(sample_deals());
        view.set_search("nothing matches this");
        view.toggle_filter(FilterField::RiskProfile, "Core");
        view.set_size_bounds(Some(1.0), Some(2.0));
        assert_eq!(view.result_count(), 0);
        assert_eq!(view.active_filter_count(), 2);

        view.clear_filters();
        assert_eq!(view.result_count(), view.total_count());
        assert_eq!(view.active_filter_count(), 0);
    }

    #[test]
    fn pushed_records_appear_when_they_match() {
        let mut view = ListView::new(sample_deals());
        view.toggle_filter(FilterField::Status, "Pending");
        assert_eq!(view.result_count(), 1);

        let mut deal = Deal::new("Harbor View Apartments", "San Diego, CA");
        deal.status = DealStatus::Pending;
        view.push(deal);
        assert_eq!(view.result_count(), 2);
        assert_eq!(view.total_count(), 7);
    }
}
