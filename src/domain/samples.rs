//! Seed data for listings.
//!
//! These records back the demo binary and the engine tests. They mirror the
//! sample pipeline a fresh install ships with; real records are added at
//! runtime through the add-deal / add-contact forms.

use super::contact::Contact;
use super::deal::{Deal, DealStatus, InvestmentType, RiskProfile};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn deal(
    id: &str,
    title: &str,
    location: &str,
    asset_type: &str,
    deal_size: &str,
    status: DealStatus,
    sponsor: &str,
    target_return: &str,
    hold_period: &str,
    description: &str,
    date_added: NaiveDate,
    risk_profile: RiskProfile,
) -> Deal {
    Deal {
        id: id.to_string(),
        title: title.to_string(),
        location: location.to_string(),
        asset_type: asset_type.to_string(),
        deal_size: deal_size.to_string(),
        status,
        sponsor: sponsor.to_string(),
        target_return: target_return.to_string(),
        hold_period: hold_period.to_string(),
        description: description.to_string(),
        date_added,
        investment_type: InvestmentType::Equity,
        risk_profile,
    }
}

/// Returns the six-deal sample pipeline.
#[must_use]
pub fn sample_deals() -> Vec<Deal> {
    vec![
        deal(
            "1",
            "Downtown Mixed-Use Development",
            "Los Angeles, CA",
            "Mixed-Use",
            "$45M",
            DealStatus::Active,
            "Urban Axis Capital",
            "18-22%",
            "5-7 years",
            "Prime downtown location with retail and residential components. Opportunity Zone qualified.",
            date(2025, 1, 15),
            RiskProfile::ValueAdd,
        ),
        deal(
            "2",
            "Industrial Logistics Portfolio",
            "Phoenix, AZ",
            "Industrial",
            "$120M",
            DealStatus::UnderReview,
            "Pacific Real Estate Partners",
            "12-15%",
            "3-5 years",
            "Class A industrial properties with long-term triple net leases to investment grade tenants.",
            date(2025, 1, 10),
            RiskProfile::CorePlus,
        ),
        deal(
            "3",
            "Luxury Multifamily Complex",
            "Austin, TX",
            "Multifamily",
            "$85M",
            DealStatus::Pending,
            "Metropolitan Investment Group",
            "15-18%",
            "4-6 years",
            "350-unit luxury apartment complex in high-growth submarket with value-add opportunities.",
            date(2025, 1, 8),
            RiskProfile::ValueAdd,
        ),
        deal(
            "4",
            "Office Building Acquisition",
            "Denver, CO",
            "Office",
            "$65M",
            DealStatus::Active,
            "Rocky Mountain Capital",
            "10-13%",
            "7-10 years",
            "Class A office building with stable tenant base and below-market rents.",
            date(2025, 1, 5),
            RiskProfile::Core,
        ),
        deal(
            "5",
            "Retail Strip Center",
            "Miami, FL",
            "Retail",
            "$28M",
            DealStatus::Closed,
            "Sunshine Properties",
            "14-17%",
            "3-5 years",
            "Anchored retail center with renovation and re-leasing opportunities.",
            date(2024, 12, 20),
            RiskProfile::Opportunistic,
        ),
        deal(
            "6",
            "Student Housing Development",
            "Chapel Hill, NC",
            "Student Housing",
            "$52M",
            DealStatus::Active,
            "Education Realty Partners",
            "16-20%",
            "5-7 years",
            "Purpose-built student housing near major university campus with guaranteed occupancy.",
            date(2024, 12, 15),
            RiskProfile::ValueAdd,
        ),
    ]
}

/// Returns the three-entity sample marketplace.
#[must_use]
pub fn sample_contacts() -> Vec<Contact> {
    vec![
        Contact {
            id: "1".to_string(),
            entity_name: "Urban Axis Capital".to_string(),
            contact_person: "Miles Chen".to_string(),
            title: "Partner".to_string(),
            email: "miles.chen@urbanaxis.com".to_string(),
            phone: "+1 (310) 555-0842".to_string(),
            website: "https://www.linkedin.com/in/mileschen/".to_string(),
            country: "USA".to_string(),
            region: "California".to_string(),
            specialization: "Infill, Retail, Community Redevelopment".to_string(),
            investment_profile: "OZ Funds, 2026-2028 targeting CA + TX".to_string(),
            capital_structure: "GP,SPV,OZ Equity".to_string(),
            role: "JV,GP".to_string(),
            track_record: "$300M+ OZ development; 5 SPVs since 2021".to_string(),
            capital_size: "$300M–$600M".to_string(),
            investment_size: "$20M–$250M".to_string(),
            verified_date: date(2025, 7, 16),
            notes: "Institutional-grade platform with development and acquisition arms.".to_string(),
        },
        Contact {
            id: "2".to_string(),
            entity_name: "Pacific Real Estate Partners".to_string(),
            contact_person: "Sarah Johnson".to_string(),
            title: "Managing Director".to_string(),
            email: "sarah.johnson@pacificre.com".to_string(),
            phone: "+1 (415) 555-0923".to_string(),
            website: "https://www.linkedin.com/in/sarahjohnson/".to_string(),
            country: "USA".to_string(),
            region: "California".to_string(),
            specialization: "Multifamily, Mixed-Use".to_string(),
            investment_profile: "Core-Plus, 2025-2027 West Coast".to_string(),
            capital_structure: "LP,Co-GP".to_string(),
            role: "LP".to_string(),
            track_record: "$500M+ multifamily portfolio".to_string(),
            capital_size: "$200M–$400M".to_string(),
            investment_size: "$10M–$100M".to_string(),
            verified_date: date(2025, 6, 20),
            notes: "Focus on sustainable development and ESG compliance.".to_string(),
        },
        Contact {
            id: "3".to_string(),
            entity_name: "Metropolitan Investment Group".to_string(),
            contact_person: "David Rodriguez".to_string(),
            title: "Senior Vice President".to_string(),
            email: "david.rodriguez@metinvest.com".to_string(),
            phone: "+1 (212) 555-0756".to_string(),
            website: "https://www.linkedin.com/in/davidrodriguez/".to_string(),
            country: "USA".to_string(),
            region: "New York".to_string(),
            specialization: "Office, Retail, Industrial".to_string(),
            investment_profile: "Value-Add, 2025-2028 Northeast".to_string(),
            capital_structure: "GP,JV".to_string(),
            role: "GP".to_string(),
            track_record: "$800M+ commercial real estate".to_string(),
            capital_size: "$500M–$1B".to_string(),
            investment_size: "$25M–$200M".to_string(),
            verified_date: date(2025, 5, 15),
            notes: "Specializes in urban redevelopment projects.".to_string(),
        },
    ]
}
