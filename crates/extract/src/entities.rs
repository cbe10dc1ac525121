//! Generic entity extraction for the document-upload path.

use intakeflow_core::DocumentFields;

use crate::patterns::{ENTITY_AMOUNT, ENTITY_DATE, INVOICE_NUMBER};

/// Pull every amount, date and invoice number out of `text`, in match order.
///
/// Best-effort: empty lists are a valid result, never an error. The caller
/// attaches `raw` and `summary` before handing the fields to the workflow
/// engine.
pub fn extract_entities(text: &str) -> DocumentFields {
    DocumentFields {
        amounts: all_matches(&ENTITY_AMOUNT, text),
        dates: all_matches(&ENTITY_DATE, text),
        invoice_numbers: all_matches(&INVOICE_NUMBER, text),
        ..DocumentFields::default()
    }
}

fn all_matches(pattern: &regex::Regex, text: &str) -> Vec<String> {
    pattern.find_iter(text).map(|m| m.as_str().to_string()).collect()
}
