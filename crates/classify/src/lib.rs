//! `intakeflow-classify` — keyword-driven routing classifiers.
//!
//! Both classifiers share one algorithm: lowercase the input once, then walk
//! a **fixed, priority-ordered** table of keyword groups and return the tag
//! of the first group with any substring hit. First matching group wins
//! regardless of match count or specificity — the ordering is a load-bearing
//! design decision, not a tie-break heuristic. The tables are literal data so
//! the rule sets stay auditable and testable in isolation.

pub mod department;
pub mod ticket;

pub use department::classify_department;
pub use ticket::classify_ticket;

/// First group in `table` with any case-insensitive substring hit.
///
/// `lower` must already be lowercased by the caller (both tables store
/// lowercase keywords, so one `to_lowercase` per request suffices).
fn first_matching_group<T: Copy>(lower: &str, table: &[(T, &[&str])]) -> Option<T> {
    table
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(tag, _)| *tag)
}
