//! Lenient parsing of the currency and percentage strings carried by records.
//!
//! Deal sizes ("$45M"), investment ranges ("$10M–$100M") and target returns
//! ("18-22%") arrive as free text from forms. Parsing here never fails:
//! malformed input coerces to zero (or an unbounded upper limit for ranges),
//! matching the silent-coercion error policy of the views these strings come
//! from.

/// Parses a currency-in-millions string into a bare number.
///
/// Strips `$`, the `M` magnitude suffix, thousands separators, and
/// whitespace before parsing. Malformed input yields `0.0`.
///
/// ```
/// use dealflow::catalog::numeric::parse_millions;
///
/// assert_eq!(parse_millions("$45M"), 45.0);
/// assert_eq!(parse_millions("1,200"), 1200.0);
/// assert_eq!(parse_millions("TBD"), 0.0);
/// ```
#[must_use]
pub fn parse_millions(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '$' | 'M' | ',') && !c.is_whitespace())
        .collect();
    cleaned.parse().unwrap_or(0.0)
}

/// Parses a `"$minM–$maxM"` range string into `(min, max)` bounds.
///
/// Accepts both an en dash and a hyphen as the separator. A single value
/// yields a degenerate range (`min == max`), so point-valued deal sizes and
/// range-valued contact sizes go through the same code path. A missing or
/// malformed lower bound coerces to `0.0`; a missing or malformed upper
/// bound coerces to `+inf`, treating an open-ended range as unbounded.
#[must_use]
pub fn parse_range(raw: &str) -> (f64, f64) {
    let mut parts = raw.splitn(2, ['–', '-']);
    let min = parts.next().map_or(0.0, parse_millions);
    match parts.next() {
        None => (min, min),
        Some(rest) => {
            let max = match parse_millions(rest) {
                v if v == 0.0 => f64::INFINITY,
                v => v,
            };
            (min, max)
        }
    }
}

/// Parses the lower bound of a `"low-high%"` target-return string.
///
/// Malformed input yields `0.0`, which sorts last under the descending
/// return ordering.
#[must_use]
pub fn parse_return_lower(raw: &str) -> f64 {
    let lower = raw.split(['–', '-']).next().unwrap_or("");
    lower.trim().trim_end_matches('%').parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millions_strips_currency_decorations() {
        assert_eq!(parse_millions("$45M"), 45.0);
        assert_eq!(parse_millions("$1,200M"), 1200.0);
        assert_eq!(parse_millions(" 28 "), 28.0);
    }

    #[test]
    fn malformed_millions_coerce_to_zero() {
        assert_eq!(parse_millions(""), 0.0);
        assert_eq!(parse_millions("TBD"), 0.0);
        assert_eq!(parse_millions("$1B"), 0.0);
    }

    #[test]
    fn range_parses_both_bounds() {
        assert_eq!(parse_range("$10M–$100M"), (10.0, 100.0));
        assert_eq!(parse_range("$20M-$250M"), (20.0, 250.0));
    }

    #[test]
    fn single_value_is_a_degenerate_range() {
        assert_eq!(parse_range("$45M"), (45.0, 45.0));
    }

    #[test]
    fn open_upper_bound_is_unbounded() {
        let (min, max) = parse_range("$500M–$1B");
        assert_eq!(min, 500.0);
        assert!(max.is_infinite());
    }

    #[test]
    fn empty_range_collapses_to_zero() {
        assert_eq!(parse_range(""), (0.0, 0.0));
    }

    #[test]
    fn return_lower_bound() {
        assert_eq!(parse_return_lower("18-22%"), 18.0);
        assert_eq!(parse_return_lower("12-15%"), 12.0);
        assert_eq!(parse_return_lower("n/a"), 0.0);
        assert_eq!(parse_return_lower(""), 0.0);
    }
}
