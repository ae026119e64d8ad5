//! Investment calculators: ROI and IRR/NPV analysis.
//!
//! All arithmetic follows the deal-screening conventions of the calculator
//! tools: malformed numeric input coerces to zero rather than erroring, and
//! degenerate denominators produce non-finite values for the caller to
//! render.

pub mod irr;
pub mod roi;

pub use irr::{irr, IrrInputs, IrrSummary};
pub use roi::{roi, RoiInputs, RoiSummary};

/// Coerces a raw form-field string to a number; malformed input yields 0.
#[must_use]
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_coerce_silently() {
        assert_eq!(parse_amount("1000000"), 1_000_000.0);
        assert_eq!(parse_amount(" 12.5 "), 12.5);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("a lot"), 0.0);
    }
}
