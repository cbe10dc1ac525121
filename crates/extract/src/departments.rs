//! Per-department field extractors.
//!
//! Each extractor fills the slice of [`DocumentFields`] its department's
//! workflow branch consumes. Oracle-delegated fields degrade to absent/empty
//! when the oracle fails; regex fields degrade to absent on a miss. Neither
//! case is an error.

use intakeflow_core::{Department, DocumentFields};
use intakeflow_oracle::{prompts, Oracle};

use crate::patterns::{FINANCE_AMOUNT, FINANCE_DATE};

/// Clause names checked on contracts, in fixed order. The order is visible
/// in `missing_clauses` and in the Legal checklist.
pub const REQUIRED_CLAUSES: [&str; 3] = ["Termination", "Liability", "Confidentiality"];

/// Dispatch to the department's extractor. [`Department::General`] has no
/// extractor; its documents carry only generic entities.
pub async fn extract_department_fields<O: Oracle + ?Sized>(
    oracle: &O,
    department: Department,
    text: &str,
) -> DocumentFields {
    match department {
        Department::Finance => extract_finance_fields(oracle, text).await,
        Department::CustomerSupport => extract_support_fields(oracle, text).await,
        Department::Legal => extract_legal_fields(oracle, text).await,
        Department::Hr => extract_hr_fields(oracle, text).await,
        Department::General => DocumentFields::default(),
    }
}

/// Invoice fields: amount and due date by first regex match, vendor via the
/// oracle (passed through verbatim, no validation).
pub async fn extract_finance_fields<O: Oracle + ?Sized>(
    oracle: &O,
    text: &str,
) -> DocumentFields {
    let amount = FINANCE_AMOUNT.find(text).map(|m| m.as_str().to_string());
    let due_date = FINANCE_DATE.find(text).map(|m| m.as_str().to_string());
    let vendor = complete_or_absent(oracle, &prompts::finance_vendor(text), "finance.vendor").await;

    DocumentFields {
        vendor,
        amount,
        due_date,
        ..DocumentFields::default()
    }
}

/// Complaint classification: a single structured prompt whose response is
/// stored under `raw` without parsing — the extractor imposes no schema, so
/// malformed oracle output can never fail it.
pub async fn extract_support_fields<O: Oracle + ?Sized>(
    oracle: &O,
    text: &str,
) -> DocumentFields {
    let raw = complete_or_absent(oracle, &prompts::support_classification(text), "support.raw")
        .await
        .unwrap_or_default();

    DocumentFields {
        raw: Some(raw),
        ..DocumentFields::default()
    }
}

/// Contract fields: clause presence by substring check, parties via the
/// oracle.
pub async fn extract_legal_fields<O: Oracle + ?Sized>(oracle: &O, text: &str) -> DocumentFields {
    let lower = text.to_lowercase();
    let missing_clauses: Vec<String> = REQUIRED_CLAUSES
        .iter()
        .filter(|clause| !lower.contains(&clause.to_lowercase()))
        .map(|clause| clause.to_string())
        .collect();

    let parties = complete_or_absent(oracle, &prompts::legal_parties(text), "legal.parties").await;

    DocumentFields {
        parties,
        missing_clauses,
        ..DocumentFields::default()
    }
}

/// Employee-feedback analysis: sentiment/category prompt, response stored
/// under `raw` without parsing.
pub async fn extract_hr_fields<O: Oracle + ?Sized>(oracle: &O, text: &str) -> DocumentFields {
    let raw = complete_or_absent(oracle, &prompts::hr_feedback(text), "hr.raw")
        .await
        .unwrap_or_default();

    DocumentFields {
        raw: Some(raw),
        ..DocumentFields::default()
    }
}

/// One oracle call, degraded to `None` on failure.
async fn complete_or_absent<O: Oracle + ?Sized>(
    oracle: &O,
    prompt: &str,
    field: &'static str,
) -> Option<String> {
    match oracle.complete(prompt).await {
        Ok(response) => Some(response),
        Err(e) => {
            tracing::warn!(field, error = %e, "oracle call failed; leaving field absent");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intakeflow_oracle::{FailingOracle, StubOracle};

    #[tokio::test]
    async fn finance_fields_take_first_regex_matches() {
        let oracle = StubOracle::with_reply("ACME Corp");
        let text = "Invoice from ACME. Amount: ₹1,234.56 then $99.00, due 15/08/2024 or 16/08/2024";

        let fields = extract_finance_fields(&oracle, text).await;
        assert_eq!(fields.amount.as_deref(), Some("₹1,234.56"));
        assert_eq!(fields.due_date.as_deref(), Some("15/08/2024"));
        assert_eq!(fields.vendor.as_deref(), Some("ACME Corp"));
    }

    #[tokio::test]
    async fn finance_fields_absent_on_regex_miss() {
        let oracle = StubOracle::with_reply("ACME Corp");
        let fields = extract_finance_fields(&oracle, "no numbers here").await;
        assert_eq!(fields.amount, None);
        assert_eq!(fields.due_date, None);
    }

    #[tokio::test]
    async fn finance_vendor_degrades_to_absent_when_oracle_fails() {
        let fields = extract_finance_fields(&FailingOracle, "Amount: $100").await;
        assert_eq!(fields.amount.as_deref(), Some("$100"));
        assert_eq!(fields.vendor, None);
    }

    #[tokio::test]
    async fn support_raw_is_stored_verbatim_even_if_malformed() {
        let oracle = StubOracle::with_reply("{not json: priority High");
        let fields = extract_support_fields(&oracle, "order arrived broken").await;
        assert_eq!(fields.raw.as_deref(), Some("{not json: priority High"));
    }

    #[tokio::test]
    async fn support_raw_is_empty_when_oracle_fails() {
        let fields = extract_support_fields(&FailingOracle, "order arrived broken").await;
        assert_eq!(fields.raw.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn legal_reports_missing_clauses_in_check_order() {
        let oracle = StubOracle::with_reply("ACME and Initech");
        let text = "This agreement includes a liability clause only.";

        let fields = extract_legal_fields(&oracle, text).await;
        assert_eq!(
            fields.missing_clauses,
            vec!["Termination".to_string(), "Confidentiality".to_string()]
        );
        assert_eq!(fields.parties.as_deref(), Some("ACME and Initech"));
    }

    #[tokio::test]
    async fn legal_clause_check_is_case_insensitive() {
        let oracle = StubOracle::with_reply("parties");
        let text = "TERMINATION, LIABILITY and CONFIDENTIALITY are all covered.";
        let fields = extract_legal_fields(&oracle, text).await;
        assert!(fields.missing_clauses.is_empty());
    }

    #[tokio::test]
    async fn dispatcher_leaves_general_documents_untouched() {
        let oracle = StubOracle::with_reply("should not be called");
        let fields = extract_department_fields(&oracle, Department::General, "misc text").await;
        assert_eq!(fields, DocumentFields::default());
        assert!(oracle.prompts().is_empty());
    }

    #[tokio::test]
    async fn hr_extractor_sends_feedback_prompt() {
        let oracle = StubOracle::with_reply("{\"sentiment\": \"Negative\"}");
        let fields = extract_hr_fields(&oracle, "workload is too high").await;
        assert_eq!(fields.raw.as_deref(), Some("{\"sentiment\": \"Negative\"}"));
        assert!(oracle.prompts()[0].contains("Analyze employee feedback"));
    }
}
