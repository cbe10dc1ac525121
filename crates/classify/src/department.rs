//! Department classifier.

use intakeflow_core::Department;

/// Priority-ordered keyword groups.
///
/// A text containing both "invoice" and "employee" is classified Finance,
/// never HR, because Finance is checked first. Changing this order changes
/// routing behavior for every overlapping document.
const DEPARTMENT_RULES: &[(Department, &[&str])] = &[
    (Department::Finance, &["invoice", "payment", "amount", "finance"]),
    (Department::Hr, &["resignation", "joining", "salary", "employee"]),
    (
        Department::CustomerSupport,
        &["complaint", "delay", "issue", "support"],
    ),
    (Department::Legal, &["agreement", "contract", "clause", "legal"]),
];

/// Classify free text into a department.
///
/// Case-insensitive substring search, first matching group wins; any one
/// keyword in a group is sufficient. Falls back to [`Department::General`]
/// when nothing matches (including empty input).
pub fn classify_department(text: &str) -> Department {
    let lower = text.to_lowercase();
    crate::first_matching_group(&lower, DEPARTMENT_RULES).unwrap_or(Department::General)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn keywords_route_to_their_department() {
        assert_eq!(classify_department("Please process this invoice"), Department::Finance);
        assert_eq!(classify_department("my resignation letter"), Department::Hr);
        assert_eq!(classify_department("filing a complaint about delivery"), Department::CustomerSupport);
        assert_eq!(classify_department("the master services agreement"), Department::Legal);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify_department("INVOICE ATTACHED"), Department::Finance);
        assert_eq!(classify_department("Salary Revision"), Department::Hr);
    }

    #[test]
    fn unmatched_text_falls_back_to_general() {
        assert_eq!(classify_department("hello world"), Department::General);
        assert_eq!(classify_department(""), Department::General);
    }

    #[test]
    fn finance_beats_hr_when_both_match() {
        // Priority-order invariant: Finance is checked before HR.
        assert_eq!(
            classify_department("invoice for employee reimbursement"),
            Department::Finance
        );
        assert_eq!(
            classify_department("employee salary payment pending"),
            Department::Finance
        );
    }

    #[test]
    fn hr_beats_customer_support_when_both_match() {
        assert_eq!(
            classify_department("employee filed a complaint"),
            Department::Hr
        );
    }

    proptest! {
        /// For any surrounding text, a Finance keyword plus an HR keyword
        /// always classifies Finance.
        #[test]
        fn finance_priority_holds_for_arbitrary_padding(
            prefix in "[a-z ]{0,20}",
            middle in "[a-z ]{0,20}",
            suffix in "[a-z ]{0,20}",
        ) {
            let text = format!("{prefix} invoice {middle} employee {suffix}");
            prop_assert_eq!(classify_department(&text), Department::Finance);
        }
    }
}
