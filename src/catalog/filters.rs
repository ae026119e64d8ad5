//! Filter and sort state owned by a list view.
//!
//! [`FilterState`] is the mutable bag of predicates a user builds up through
//! checkboxes and the size-range inputs; [`SortKey`] is the ordering applied
//! after filtering. Both are plain data consumed by the engine in
//! [`crate::catalog::engine`].

use serde::{Deserialize, Serialize};

/// Categorical filter dimensions.
///
/// A record type decides what each dimension means for it (or that it does
/// not apply at all) via [`crate::catalog::engine::Record::field_matches`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Status,
    AssetType,
    Location,
    RiskProfile,
    Role,
}

impl FilterField {
    /// All categorical dimensions, in the order the filter panel shows them.
    pub const ALL: [FilterField; 5] = [
        FilterField::Status,
        FilterField::AssetType,
        FilterField::Location,
        FilterField::RiskProfile,
        FilterField::Role,
    ];
}

/// Numeric size-range bounds in $M. Unset bounds are unbounded: a missing
/// minimum means `0`, a missing maximum means `+inf`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SizeBounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl SizeBounds {
    /// True if either bound is set.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    /// True if the record's `(min, max)` size range intersects these bounds.
    ///
    /// Overlap policy: a contact advertising "$10M–$100M" matches a
    /// `{min: 20, max: 50}` filter because the entity can write a check in
    /// that window. For point-valued deal sizes this degenerates to a plain
    /// between check.
    #[must_use]
    pub fn overlaps(&self, range: (f64, f64)) -> bool {
        let filter_min = self.min.unwrap_or(0.0);
        let filter_max = self.max.unwrap_or(f64::INFINITY);
        range.0 <= filter_max && range.1 >= filter_min
    }
}

/// User-selected filter predicates for a listing.
///
/// An empty selection for a category means the category is not filtered.
/// All active predicates combine with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub status: Vec<String>,
    pub asset_type: Vec<String>,
    pub location: Vec<String>,
    pub risk_profile: Vec<String>,
    pub role: Vec<String>,
    pub investment_size: SizeBounds,
}

impl FilterState {
    /// Returns the selected values for a categorical dimension.
    #[must_use]
    pub fn selected(&self, field: FilterField) -> &[String] {
        match field {
            FilterField::Status => &self.status,
            FilterField::AssetType => &self.asset_type,
            FilterField::Location => &self.location,
            FilterField::RiskProfile => &self.risk_profile,
            FilterField::Role => &self.role,
        }
    }

    fn selected_mut(&mut self, field: FilterField) -> &mut Vec<String> {
        match field {
            FilterField::Status => &mut self.status,
            FilterField::AssetType => &mut self.asset_type,
            FilterField::Location => &mut self.location,
            FilterField::RiskProfile => &mut self.risk_profile,
            FilterField::Role => &mut self.role,
        }
    }

    /// Adds the value to the category if absent, removes it if present.
    /// Mirrors a checkbox change.
    pub fn toggle(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        let values = self.selected_mut(field);
        if let Some(pos) = values.iter().position(|v| v == &value) {
            values.remove(pos);
        } else {
            values.push(value);
        }
    }

    /// True when no category value is selected and no size bound is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        FilterField::ALL
            .iter()
            .all(|f| self.selected(*f).is_empty())
            && !self.investment_size.is_set()
    }

    /// Number of active filters: one per selected category value, plus one
    /// if either size bound is set. Drives the filter-count badge.
    #[must_use]
    pub fn active_count(&self) -> usize {
        let categorical: usize = FilterField::ALL
            .iter()
            .map(|f| self.selected(*f).len())
            .sum();
        categorical + usize::from(self.investment_size.is_set())
    }

    /// Resets every predicate. Mirrors "clear all filters".
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Ordering applied to filtered results.
///
/// All orderings are stable; records that compare equal keep their original
/// relative order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Display name ascending.
    NameAsc,
    /// Display name descending.
    NameDesc,
    /// Date added, newest first.
    DateAdded,
    /// Parsed size, largest first.
    Size,
    /// Target-return lower bound, highest first.
    TargetReturn,
}

impl SortKey {
    /// Parses the sort-select values used by the views. Unknown keys yield
    /// `None`, which the engine treats as a stable pass-through.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "name" => Some(Self::NameAsc),
            "name-desc" => Some(Self::NameDesc),
            "date" => Some(Self::DateAdded),
            "size" => Some(Self::Size),
            "return" => Some(Self::TargetReturn),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut filters = FilterState::default();
        filters.toggle(FilterField::Status, "Active");
        assert_eq!(filters.status, vec!["Active"]);
        filters.toggle(FilterField::Status, "Active");
        assert!(filters.status.is_empty());
    }

    #[test]
    fn active_count_counts_values_and_size_once() {
        let mut filters = FilterState::default();
        filters.toggle(FilterField::Status, "Active");
        filters.toggle(FilterField::Status, "Pending");
        filters.toggle(FilterField::Role, "GP");
        filters.investment_size = SizeBounds {
            min: Some(10.0),
            max: None,
        };
        assert_eq!(filters.active_count(), 4);
    }

    #[test]
    fn clear_resets_everything() {
        let mut filters = FilterState::default();
        filters.toggle(FilterField::Location, "Texas");
        filters.investment_size.max = Some(50.0);
        assert!(!filters.is_empty());
        filters.clear();
        assert!(filters.is_empty());
        assert_eq!(filters.active_count(), 0);
    }

    #[test]
    fn unset_bounds_are_unbounded() {
        let bounds = SizeBounds::default();
        assert!(bounds.overlaps((0.0, 0.0)));
        assert!(bounds.overlaps((1e9, f64::INFINITY)));
    }

    #[test]
    fn widening_bounds_never_excludes() {
        let narrow = SizeBounds {
            min: Some(30.0),
            max: Some(40.0),
        };
        let wide = SizeBounds {
            min: Some(10.0),
            max: Some(100.0),
        };
        let ranges = [(35.0, 35.0), (10.0, 100.0), (30.0, 45.0)];
        for range in ranges {
            if narrow.overlaps(range) {
                assert!(wide.overlaps(range), "widening removed {range:?}");
            }
        }
    }

    #[test]
    fn unknown_sort_key_parses_to_none() {
        assert_eq!(SortKey::parse("name"), Some(SortKey::NameAsc));
        assert_eq!(SortKey::parse("return"), Some(SortKey::TargetReturn));
        assert_eq!(SortKey::parse("frecency"), None);
        assert_eq!(SortKey::parse(""), None);
    }
}
