//! Amount-string parsing for the Finance branch.

/// Parse an extracted amount string into a whole-currency integer.
///
/// Strips `₹`/`$` and thousands separators, trims, and truncates any decimal
/// fraction (no rounding): `"₹1,234.56"` → `1234`. A string that fails to
/// parse contributes `0` — logged, never fatal.
pub fn parse_amount(value: &str) -> i64 {
    let cleaned = value.replace(['₹', '$'], "").replace(',', "");
    let cleaned = cleaned.trim();
    let integer_part = cleaned.split('.').next().unwrap_or("");

    match integer_part.parse::<i64>() {
        Ok(parsed) => parsed,
        Err(_) => {
            tracing::warn!(value, "unparseable amount; treating as 0");
            0
        }
    }
}

/// Whether a candidate string *looks like* a real currency amount (carries a
/// currency symbol or thousands separator). Used to order candidates before
/// thresholding.
pub fn looks_like_currency(value: &str) -> bool {
    value.contains('₹') || value.contains('$') || value.contains(',')
}

/// Largest parsed value among the candidates; `0` when there are none.
///
/// Candidates that look like currency are considered first so the logged
/// choice matches presentation preference, but the threshold value is the
/// maximum over all of them.
pub fn best_amount(candidates: &[&str]) -> i64 {
    if candidates.is_empty() {
        return 0;
    }

    let mut prioritized: Vec<&str> = candidates.to_vec();
    prioritized.sort_by_key(|v| (!looks_like_currency(v), core::cmp::Reverse(parse_amount(v))));
    tracing::debug!(candidate = prioritized[0], "preferred amount candidate");

    candidates.iter().map(|v| parse_amount(v)).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_and_separators_are_stripped() {
        assert_eq!(parse_amount("₹1,234.56"), 1234);
        assert_eq!(parse_amount("$50,001"), 50001);
        assert_eq!(parse_amount(" 100"), 100);
        assert_eq!(parse_amount("99.99"), 99);
    }

    #[test]
    fn decimals_are_truncated_not_rounded() {
        assert_eq!(parse_amount("10.99"), 10);
        assert_eq!(parse_amount("₹1,234.56"), 1234);
    }

    #[test]
    fn unparseable_values_degrade_to_zero() {
        assert_eq!(parse_amount(""), 0);
        assert_eq!(parse_amount("abc"), 0);
        assert_eq!(parse_amount("₹"), 0);
        assert_eq!(parse_amount("1 000"), 0);
    }

    #[test]
    fn best_amount_is_maximum_over_all_candidates() {
        assert_eq!(best_amount(&["$100", "2024", "₹45,000.00"]), 45000);
        assert_eq!(best_amount(&["bad", "worse"]), 0);
        assert_eq!(best_amount(&[]), 0);
    }

    #[test]
    fn currency_lookalikes_are_recognized() {
        assert!(looks_like_currency("₹500"));
        assert!(looks_like_currency("$500"));
        assert!(looks_like_currency("1,000"));
        assert!(!looks_like_currency("1000"));
    }
}
