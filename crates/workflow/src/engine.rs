//! Department dispatch for the workflow decision engine.

use intakeflow_core::{Department, DocumentFields, WorkflowResult};

use crate::amount::best_amount;
use crate::hr;

/// Finance approval threshold: amounts strictly greater require escalation;
/// exactly this value still processes normally.
pub const FINANCE_APPROVAL_THRESHOLD: i64 = 50_000;

/// Compute the workflow outcome and checklist for an analyzed document.
///
/// Pure and total: every input produces a well-formed result. "I don't know"
/// is expressed as the department's lowest-severity branch, never as an
/// error.
pub fn generate_workflow(department: Department, fields: &DocumentFields) -> WorkflowResult {
    match department {
        Department::Finance => finance(fields),
        Department::CustomerSupport => customer_support(fields),
        Department::Legal => legal(fields),
        Department::Hr => hr::evaluate(fields.raw_or_summary()),
        Department::General => WorkflowResult::fixed("General Processing", &[]),
    }
}

fn finance(fields: &DocumentFields) -> WorkflowResult {
    let amount = best_amount(&fields.amount_candidates());

    if amount > FINANCE_APPROVAL_THRESHOLD {
        WorkflowResult::fixed(
            "Approval Required",
            &["Escalate to Finance Manager", "Log in SAP", "Schedule Payment"],
        )
    } else {
        WorkflowResult::fixed("Process Normally", &["Schedule Payment"])
    }
}

fn customer_support(fields: &DocumentFields) -> WorkflowResult {
    // Literal "High" substring in the oracle's raw response. A brittle proxy
    // for priority, preserved exactly — not a priority parse.
    let raw = fields.raw.as_deref().unwrap_or("");
    let outcome = if raw.contains("High") {
        "Escalation Needed"
    } else {
        "Normal Ticket"
    };

    WorkflowResult::fixed(
        outcome,
        &[
            "Create ServiceNow Ticket",
            "Notify Project Manager",
            "Draft Apology Email",
        ],
    )
}

fn legal(fields: &DocumentFields) -> WorkflowResult {
    if fields.missing_clauses.is_empty() {
        return WorkflowResult::fixed("Contract OK", &["Archive in Legal System"]);
    }

    let mut checklist: Vec<String> = fields
        .missing_clauses
        .iter()
        .map(|clause| format!("Add {clause} Clause"))
        .collect();
    checklist.push("Route to Legal".to_string());

    WorkflowResult::new("Legal Review Required", checklist)
}
