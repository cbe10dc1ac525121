//! `intakeflow-workflow` — the workflow decision engine.
//!
//! A **pure function** of already-extracted data: no I/O, no oracle calls,
//! no shared state. Given a department and its field mapping, it returns an
//! outcome plus an ordered action checklist, and it never fails — malformed
//! or empty input falls to the lowest-severity branch, numeric parse
//! failures degrade to zero.

pub mod amount;
pub mod engine;
pub mod hr;

pub use amount::parse_amount;
pub use engine::generate_workflow;
