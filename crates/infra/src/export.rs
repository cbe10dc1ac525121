//! CSV rendering for result exports.

use crate::{AnalysisRecord, TicketRecord};

/// Render rows as CSV with a header line. Fields containing commas, quotes
/// or newlines are quoted, with embedded quotes doubled.
pub fn render_csv(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    push_row(&mut out, headers.iter().map(|h| h.to_string()));
    for row in rows {
        push_row(&mut out, row.iter().cloned());
    }
    out
}

fn push_row(out: &mut String, fields: impl Iterator<Item = String>) {
    let encoded: Vec<String> = fields.map(|f| escape_field(&f)).collect();
    out.push_str(&encoded.join(","));
    out.push('\n');
}

fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// CSV of stored document analyses.
pub fn analyses_csv(records: &[AnalysisRecord]) -> String {
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                r.filename.clone(),
                r.department.to_string(),
                r.summary.clone(),
                r.workflow.outcome.clone(),
                r.workflow.checklist.join("; "),
                r.created_at.to_rfc3339(),
            ]
        })
        .collect();

    render_csv(
        &["filename", "department", "summary", "outcome", "checklist", "created_at"],
        &rows,
    )
}

/// CSV of a user's tickets.
pub fn tickets_csv(records: &[TicketRecord]) -> String {
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                r.category.to_string(),
                r.description.clone(),
                r.summary.clone(),
                r.status.to_string(),
                r.created_at.to_rfc3339(),
            ]
        })
        .collect();

    render_csv(
        &["id", "category", "description", "summary", "status", "created_at"],
        &rows,
    )
}
