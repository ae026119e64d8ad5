//! IRR / NPV calculator.

use serde::Serialize;

/// Inputs to the IRR analysis.
#[derive(Debug, Clone, Default)]
pub struct IrrInputs {
    /// Initial investment in dollars.
    pub initial_investment: f64,
    /// Cash flow per year of the hold, in order.
    pub cash_flows: Vec<f64>,
    /// Discount rate in percent. Zero coerces to the 10% default.
    pub discount_rate_pct: f64,
}

/// IRR analysis results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IrrSummary {
    /// Geometric-mean IRR approximation as a percentage.
    pub irr: f64,
    /// Net present value at the discount rate.
    pub npv: f64,
    /// First 1-indexed year where cumulative cash flow turns non-negative;
    /// zero when the investment never pays back within the given flows.
    pub payback_period: usize,
    /// (NPV + initial) / initial.
    pub profitability_index: f64,
}

/// Computes the IRR analysis.
///
/// Never fails: malformed inputs are expected to have been coerced to zero
/// upstream, and a zero initial investment yields non-finite ratios.
#[must_use]
pub fn irr(inputs: &IrrInputs) -> IrrSummary {
    let rate = if inputs.discount_rate_pct == 0.0 {
        0.1
    } else {
        inputs.discount_rate_pct / 100.0
    };

    let mut npv = -inputs.initial_investment;
    for (index, cf) in inputs.cash_flows.iter().enumerate() {
        npv += cf / (1.0 + rate).powi(index as i32 + 1);
    }

    let total_cash_flow: f64 = inputs.cash_flows.iter().sum();
    let n = inputs.cash_flows.len().max(1) as f64;
    let irr = ((total_cash_flow / inputs.initial_investment).powf(1.0 / n) - 1.0) * 100.0;

    let mut cumulative = -inputs.initial_investment;
    let mut payback_period = 0;
    for (index, cf) in inputs.cash_flows.iter().enumerate() {
        cumulative += cf;
        if cumulative >= 0.0 {
            payback_period = index + 1;
            break;
        }
    }

    let profitability_index = (npv + inputs.initial_investment) / inputs.initial_investment;

    IrrSummary {
        irr,
        npv,
        payback_period,
        profitability_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_cash_flows_pay_back_in_year_four() {
        let summary = irr(&IrrInputs {
            initial_investment: 1_000_000.0,
            cash_flows: vec![300_000.0; 5],
            discount_rate_pct: 10.0,
        });

        assert_eq!(summary.payback_period, 4);
        // NPV of 300k x 5 at 10% is 1,137,236; minus the initial 1M.
        assert!((summary.npv - 137_236.0).abs() < 100.0);
        // (1.5)^(1/5) - 1 = 8.45%
        assert!((summary.irr - 8.45).abs() < 0.01);
        assert!((summary.profitability_index - 1.137).abs() < 0.001);
    }

    #[test]
    fn never_paying_back_reports_zero() {
        let summary = irr(&IrrInputs {
            initial_investment: 1_000_000.0,
            cash_flows: vec![100_000.0; 3],
            discount_rate_pct: 10.0,
        });
        assert_eq!(summary.payback_period, 0);
        assert!(summary.npv < 0.0);
    }

    #[test]
    fn zero_discount_rate_defaults_to_ten_percent() {
        let at_default = irr(&IrrInputs {
            initial_investment: 100.0,
            cash_flows: vec![110.0],
            discount_rate_pct: 0.0,
        });
        let at_ten = irr(&IrrInputs {
            initial_investment: 100.0,
            cash_flows: vec![110.0],
            discount_rate_pct: 10.0,
        });
        assert_eq!(at_default.npv, at_ten.npv);
    }

    #[test]
    fn empty_cash_flows_do_not_panic() {
        let summary = irr(&IrrInputs {
            initial_investment: 100.0,
            cash_flows: vec![],
            discount_rate_pct: 10.0,
        });
        assert_eq!(summary.payback_period, 0);
        assert_eq!(summary.npv, -100.0);
        assert_eq!(summary.irr, -100.0);
    }
}
