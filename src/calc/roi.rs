//! ROI calculator.

use serde::Serialize;

/// Inputs to the ROI calculation. Values come from form fields; use
/// [`crate::calc::parse_amount`] to coerce raw strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoiInputs {
    /// Initial investment in dollars.
    pub initial_investment: f64,
    /// Projected value at exit.
    pub final_value: f64,
    /// Hold period in years. Zero coerces to one year.
    pub years: f64,
    /// Annual cash flow during the hold.
    pub annual_cash_flow: f64,
}

/// ROI calculation results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoiSummary {
    /// Exit value plus all cash flows.
    pub total_return: f64,
    /// Annualized ROI as a percentage.
    pub annual_roi: f64,
    /// Total return less the initial investment.
    pub total_profit: f64,
    /// Total profit spread over the hold, per month.
    pub monthly_return: f64,
    /// Geometric-mean IRR approximation as a percentage.
    pub irr: f64,
}

/// Computes the ROI summary.
///
/// Never fails: a zero hold period is treated as one year, and a zero
/// initial investment yields non-finite ratios that callers render as-is.
#[must_use]
pub fn roi(inputs: RoiInputs) -> RoiSummary {
    let years = if inputs.years == 0.0 { 1.0 } else { inputs.years };

    let total_return = inputs.final_value + inputs.annual_cash_flow * years;
    let total_profit = total_return - inputs.initial_investment;
    let annual_roi = ((total_return / inputs.initial_investment).powf(1.0 / years) - 1.0) * 100.0;
    let monthly_return = total_profit / (years * 12.0);

    RoiSummary {
        total_return,
        annual_roi,
        total_profit,
        monthly_return,
        irr: annual_roi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubling_over_five_years_with_cash_flow() {
        let summary = roi(RoiInputs {
            initial_investment: 1_000_000.0,
            final_value: 1_500_000.0,
            years: 5.0,
            annual_cash_flow: 50_000.0,
        });

        assert_eq!(summary.total_return, 1_750_000.0);
        assert_eq!(summary.total_profit, 750_000.0);
        assert_eq!(summary.monthly_return, 12_500.0);
        // (1.75)^(1/5) - 1 = 11.84%
        assert!((summary.annual_roi - 11.84).abs() < 0.01);
        assert_eq!(summary.irr, summary.annual_roi);
    }

    #[test]
    fn zero_years_coerces_to_one() {
        let summary = roi(RoiInputs {
            initial_investment: 100.0,
            final_value: 110.0,
            years: 0.0,
            annual_cash_flow: 0.0,
        });
        assert!((summary.annual_roi - 10.0).abs() < 1e-9);
    }

    #[test]
    fn zero_initial_investment_does_not_panic() {
        let summary = roi(RoiInputs {
            initial_investment: 0.0,
            final_value: 100.0,
            years: 1.0,
            annual_cash_flow: 0.0,
        });
        assert!(summary.annual_roi.is_infinite());
        assert_eq!(summary.total_profit, 100.0);
    }
}
