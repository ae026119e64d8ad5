//! Contact records for the investor marketplace.
//!
//! A [`Contact`] is an investor or sponsor entity in the marketplace: who
//! they are, what they invest in, and how much capital they deploy. Like
//! deals, contacts are created in memory from form input and never deleted.

use crate::catalog::engine::Record;
use crate::catalog::filters::FilterField;
use crate::catalog::numeric::parse_range;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An investor/sponsor entity record in the marketplace.
///
/// `role` is a comma-separated descriptor string ("JV,GP"); role filtering
/// is containment-based so a "GP" filter matches both "GP" and "Co-GP"-style
/// descriptors the way the marketplace view matched them. `investment_size`
/// and `capital_size` carry `"$minM–$maxM"` range strings parsed on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Client-minted identifier (timestamp in milliseconds at creation).
    pub id: String,

    /// Entity (firm) name.
    pub entity_name: String,

    /// Primary contact person.
    pub contact_person: String,

    /// Contact person's title.
    pub title: String,

    pub email: String,
    pub phone: String,

    /// LinkedIn or company website URL.
    pub website: String,

    pub country: String,

    /// Free-text region, e.g. "California". Location filtering matches
    /// against this field by substring.
    pub region: String,

    /// Asset class specialization, e.g. "Multifamily, Mixed-Use".
    pub specialization: String,

    /// Active investment profile description.
    pub investment_profile: String,

    /// Capital stage / structure descriptors, e.g. "LP,Co-GP".
    pub capital_structure: String,

    /// Counterparty role descriptors, e.g. "JV,GP".
    pub role: String,

    /// Track record summary.
    pub track_record: String,

    /// Capital size range string, e.g. "$200M–$400M".
    pub capital_size: String,

    /// Investment size range string, e.g. "$10M–$100M".
    pub investment_size: String,

    /// Date the entity was last verified.
    pub verified_date: NaiveDate,

    pub notes: String,
}

impl Contact {
    /// Creates a new contact dated today, with the id minted from the
    /// current timestamp in milliseconds. Remaining fields start empty.
    pub fn new(entity_name: impl Into<String>, contact_person: impl Into<String>) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: now.timestamp_millis().to_string(),
            entity_name: entity_name.into(),
            contact_person: contact_person.into(),
            title: String::new(),
            email: String::new(),
            phone: String::new(),
            website: String::new(),
            country: String::new(),
            region: String::new(),
            specialization: String::new(),
            investment_profile: String::new(),
            capital_structure: String::new(),
            role: String::new(),
            track_record: String::new(),
            capital_size: String::new(),
            investment_size: String::new(),
            verified_date: now.date_naive(),
            notes: String::new(),
        }
    }
}

impl Record for Contact {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.entity_name, &self.contact_person, &self.specialization]
    }

    fn field_matches(&self, field: FilterField, selected: &str) -> bool {
        match field {
            FilterField::Location => self
                .region
                .to_lowercase()
                .contains(&selected.to_lowercase()),
            // Role descriptors are comma-separated; containment matches the
            // marketplace behavior (a "GP" filter also matches "Co-GP").
            FilterField::Role => self.role.contains(selected),
            // Contacts carry no deal status, asset type, or risk tier.
            FilterField::Status | FilterField::AssetType | FilterField::RiskProfile => false,
        }
    }

    fn size_range(&self) -> (f64, f64) {
        parse_range(&self.investment_size)
    }

    fn sort_name(&self) -> &str {
        &self.entity_name
    }

    fn date_added(&self) -> NaiveDate {
        self.verified_date
    }

    fn size_value(&self) -> f64 {
        // Size sorting uses the capital base, not the per-deal check size.
        parse_range(&self.capital_size).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_filter_uses_containment() {
        let mut contact = Contact::new("Urban Axis Capital", "Miles Chen");
        contact.role = "JV,GP".to_string();
        assert!(contact.field_matches(FilterField::Role, "GP"));
        assert!(contact.field_matches(FilterField::Role, "JV"));
        assert!(!contact.field_matches(FilterField::Role, "LP"));
    }

    #[test]
    fn region_filter_is_substring_based() {
        let mut contact = Contact::new("Pacific Real Estate Partners", "Sarah Johnson");
        contact.region = "California".to_string();
        assert!(contact.field_matches(FilterField::Location, "california"));
        assert!(!contact.field_matches(FilterField::Location, "Texas"));
    }

    #[test]
    fn investment_size_parses_both_bounds() {
        let mut contact = Contact::new("Test", "Test");
        contact.investment_size = "$10M–$100M".to_string();
        assert_eq!(contact.size_range(), (10.0, 100.0));
    }
}
