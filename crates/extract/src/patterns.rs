//! Compiled regex patterns.
//!
//! These patterns are compatibility surface: downstream consumers and stored
//! records depend on exactly these match semantics, so treat any edit as a
//! breaking change.

use std::sync::LazyLock;

use regex::Regex;

/// Single-amount pattern for the Finance extractor: optional ₹/$ currency
/// symbol, optional space, digit run with optional comma-grouped thousands
/// and optional 2-decimal fraction.
pub static FINANCE_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:₹|\$)?\s?\d+(?:,\d{3})*(?:\.\d{2})?").expect("valid regex")
});

/// All-amounts pattern for generic entity extraction. Slightly looser
/// grouping than [`FINANCE_AMOUNT`] (2-3 digit groups, for lakh-style
/// separators).
pub static ENTITY_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:₹|\$)?\s?\d{1,3}(?:,\d{2,3})*(?:\.\d{2})?").expect("valid regex")
});

/// Due-date pattern for the Finance extractor: `D/M/YY(YY)` or
/// `D Monthname YYYY`.
pub static FINANCE_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:\d{1,2}/\d{1,2}/\d{2,4}|\d{1,2} \w+ \d{4})\b").expect("valid regex")
});

/// All-dates pattern for generic entity extraction: slash/dash numeric dates
/// or day + month-name-prefix + year, case-insensitive.
pub static ENTITY_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b|\b\d{1,2}\s(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s\d{2,4}\b",
    )
    .expect("valid regex")
});

/// Invoice-number pattern: `INV[-/]DDDD[-/]DDD`, case-insensitive.
pub static INVOICE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bINV[-/]\d{4}[-/]\d{3}\b").expect("valid regex"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finance_amount_matches_currency_forms() {
        for sample in ["₹1,234.56", "$ 500", "1234", "99.99"] {
            assert!(FINANCE_AMOUNT.is_match(sample), "no match for {sample}");
        }
    }

    #[test]
    fn finance_amount_first_match_wins() {
        let text = "Qty:100 then $1,250.00 total";
        let m = FINANCE_AMOUNT.find(text).unwrap();
        assert_eq!(m.as_str(), "100");
    }

    #[test]
    fn finance_date_matches_both_forms() {
        assert!(FINANCE_DATE.is_match("due 12/31/2024"));
        assert!(FINANCE_DATE.is_match("due 5/1/24"));
        assert!(FINANCE_DATE.is_match("due 12 January 2024"));
        assert!(!FINANCE_DATE.is_match("no date here"));
    }

    #[test]
    fn entity_date_accepts_dashes_and_month_prefixes() {
        assert!(ENTITY_DATE.is_match("12-31-2024"));
        assert!(ENTITY_DATE.is_match("3 jan 24"));
        assert!(ENTITY_DATE.is_match("15 December 2023"));
    }

    #[test]
    fn invoice_number_is_case_insensitive_with_fixed_widths() {
        assert!(INVOICE_NUMBER.is_match("INV-2024-001"));
        assert!(INVOICE_NUMBER.is_match("inv/2024/001"));
        assert!(!INVOICE_NUMBER.is_match("INV-24-001"));
        assert!(!INVOICE_NUMBER.is_match("INV-2024-0001"));
    }
}
