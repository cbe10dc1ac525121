//! Extracted-field mapping attached to an analyzed document.

use serde::{Deserialize, Serialize};

/// Fields pulled out of a document's text, department-shaped.
///
/// Extraction is best-effort: every field here may be absent or empty, and
/// absence is a valid terminal state rather than an error. Which fields are
/// populated depends on the extraction path:
///
/// - the generic upload path fills `amounts` / `dates` / `invoice_numbers`
///   (all regex matches, in match order) plus `raw` and `summary`;
/// - the Finance extractor fills `vendor` / `amount` / `due_date`;
/// - the Legal extractor fills `parties` / `missing_clauses`;
/// - the Customer Support and HR extractors only fill `raw` with the
///   oracle's unvalidated response text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFields {
    /// Vendor/supplier name, verbatim oracle output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    /// First amount-pattern match, unparsed (e.g. `"₹1,234.56"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// First date-pattern match, unparsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    /// Contract parties, verbatim oracle output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parties: Option<String>,

    /// Clause names absent from the contract text, in check order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_clauses: Vec<String>,

    /// Every amount-pattern match, in match order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub amounts: Vec<String>,

    /// Every date-pattern match, in match order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dates: Vec<String>,

    /// Every invoice-number match, in match order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub invoice_numbers: Vec<String>,

    /// Full source text, or an oracle's raw response for the departments
    /// whose extractor imposes no schema (Customer Support, HR).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,

    /// Oracle-produced document summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl DocumentFields {
    /// Amount candidates for the workflow engine: the all-matches list when
    /// the generic path ran, otherwise the single Finance `amount` field.
    pub fn amount_candidates(&self) -> Vec<&str> {
        if !self.amounts.is_empty() {
            self.amounts.iter().map(String::as_str).collect()
        } else {
            self.amount.iter().map(String::as_str).collect()
        }
    }

    /// Raw text for keyword analysis, falling back to the summary when no
    /// raw text was attached.
    pub fn raw_or_summary(&self) -> &str {
        match (&self.raw, &self.summary) {
            (Some(raw), _) if !raw.is_empty() => raw,
            (_, Some(summary)) => summary,
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_candidates_prefer_the_all_matches_list() {
        let fields = DocumentFields {
            amount: Some("$10".to_string()),
            amounts: vec!["$20".to_string(), "$30".to_string()],
            ..DocumentFields::default()
        };
        assert_eq!(fields.amount_candidates(), vec!["$20", "$30"]);
    }

    #[test]
    fn amount_candidates_fall_back_to_single_field() {
        let fields = DocumentFields {
            amount: Some("$10".to_string()),
            ..DocumentFields::default()
        };
        assert_eq!(fields.amount_candidates(), vec!["$10"]);
        assert!(DocumentFields::default().amount_candidates().is_empty());
    }

    #[test]
    fn raw_or_summary_falls_back_when_raw_empty() {
        let fields = DocumentFields {
            raw: Some(String::new()),
            summary: Some("a summary".to_string()),
            ..DocumentFields::default()
        };
        assert_eq!(fields.raw_or_summary(), "a summary");

        let fields = DocumentFields::default();
        assert_eq!(fields.raw_or_summary(), "");
    }

    #[test]
    fn empty_fields_serialize_to_empty_object() {
        let json = serde_json::to_value(DocumentFields::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
