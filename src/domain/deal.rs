//! Deal records for the investment pipeline.
//!
//! A [`Deal`] is a real-estate investment opportunity: an asset, its sponsor,
//! a headline size, and the return profile being marketed. Deals live in
//! memory for the duration of a session; they are created from form input,
//! never deleted, and identified by a client-minted timestamp id.

use crate::catalog::engine::Record;
use crate::catalog::filters::FilterField;
use crate::catalog::numeric::{parse_range, parse_return_lower};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Pipeline status of a deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealStatus {
    /// Open for investment.
    Active,
    /// Awaiting sponsor action.
    Pending,
    /// In diligence / committee review.
    UnderReview,
    /// No longer accepting capital.
    Closed,
}

impl DealStatus {
    /// Returns the display string used across filters and listings.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Pending => "Pending",
            Self::UnderReview => "Under Review",
            Self::Closed => "Closed",
        }
    }
}

impl std::fmt::Display for DealStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capital structure position offered by a deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvestmentType {
    Equity,
    Debt,
    Hybrid,
}

impl InvestmentType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equity => "Equity",
            Self::Debt => "Debt",
            Self::Hybrid => "Hybrid",
        }
    }
}

impl std::fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorical investment risk tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskProfile {
    Core,
    CorePlus,
    ValueAdd,
    Opportunistic,
}

impl RiskProfile {
    /// Returns the display string ("Core-Plus", "Value-Add", ...).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Core => "Core",
            Self::CorePlus => "Core-Plus",
            Self::ValueAdd => "Value-Add",
            Self::Opportunistic => "Opportunistic",
        }
    }
}

impl std::fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A real-estate investment opportunity record.
///
/// Free-text fields (`location`, `asset_type`, `deal_size`, `target_return`,
/// `hold_period`) carry the exact strings a user typed into the add-deal
/// form; the filter engine parses them on demand and coerces malformed
/// numerics to zero rather than rejecting the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    /// Client-minted identifier (timestamp in milliseconds at creation).
    pub id: String,

    /// Headline title shown in listings.
    pub title: String,

    /// Free-text city/state, e.g. "Austin, TX".
    pub location: String,

    /// Asset class, e.g. "Multifamily". Free text; the add-deal form does
    /// not constrain it to the canonical filter options.
    pub asset_type: String,

    /// Currency string, e.g. "$45M".
    pub deal_size: String,

    /// Pipeline status.
    pub status: DealStatus,

    /// Sponsor entity name.
    pub sponsor: String,

    /// Range string, e.g. "18-22%".
    pub target_return: String,

    /// Free text, e.g. "5-7 years".
    pub hold_period: String,

    /// Marketing description.
    pub description: String,

    /// Date the deal entered the pipeline.
    pub date_added: NaiveDate,

    /// Capital structure position.
    pub investment_type: InvestmentType,

    /// Risk tier.
    pub risk_profile: RiskProfile,
}

impl Deal {
    /// Creates a new deal with form defaults.
    ///
    /// Mints the id from the current timestamp in milliseconds, dates the
    /// deal today, and applies the add-deal form defaults (`Active`,
    /// `Equity`, `Core`). Remaining fields start empty and are filled in
    /// by the caller.
    pub fn new(title: impl Into<String>, location: impl Into<String>) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: now.timestamp_millis().to_string(),
            title: title.into(),
            location: location.into(),
            asset_type: String::new(),
            deal_size: String::new(),
            status: DealStatus::Active,
            sponsor: String::new(),
            target_return: String::new(),
            hold_period: String::new(),
            description: String::new(),
            date_added: now.date_naive(),
            investment_type: InvestmentType::Equity,
            risk_profile: RiskProfile::Core,
        }
    }
}

impl Record for Deal {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.location, &self.asset_type, &self.sponsor]
    }

    fn field_matches(&self, field: FilterField, selected: &str) -> bool {
        match field {
            FilterField::Status => self.status.as_str() == selected,
            FilterField::AssetType => self.asset_type == selected,
            FilterField::RiskProfile => self.risk_profile.as_str() == selected,
            FilterField::Location => self
                .location
                .to_lowercase()
                .contains(&selected.to_lowercase()),
            // Deals carry no counterparty role; a role filter excludes them.
            FilterField::Role => false,
        }
    }

    fn size_range(&self) -> (f64, f64) {
        parse_range(&self.deal_size)
    }

    fn sort_name(&self) -> &str {
        &self.title
    }

    fn date_added(&self) -> NaiveDate {
        self.date_added
    }

    fn size_value(&self) -> f64 {
        self.size_range().0
    }

    fn return_lower_bound(&self) -> f64 {
        parse_return_lower(&self.target_return)
    }
}
