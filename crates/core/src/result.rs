//! Workflow decision output.

use serde::{Deserialize, Serialize};

/// Result of running the workflow decision engine over an analyzed document
/// or ticket.
///
/// Created once per request and immutable thereafter. The checklist ordering
/// is meaningful (it is rendered top-to-bottom as an action list), though the
/// engine imposes no dependency ordering between items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowResult {
    pub outcome: String,
    pub checklist: Vec<String>,
}

impl WorkflowResult {
    pub fn new(outcome: impl Into<String>, checklist: Vec<String>) -> Self {
        Self {
            outcome: outcome.into(),
            checklist,
        }
    }

    /// Fixed-outcome constructor for branches with static checklists.
    pub fn fixed(outcome: &str, checklist: &[&str]) -> Self {
        Self {
            outcome: outcome.to_string(),
            checklist: checklist.iter().map(|s| s.to_string()).collect(),
        }
    }
}
