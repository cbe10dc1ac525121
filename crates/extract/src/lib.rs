//! `intakeflow-extract` — best-effort field extraction.
//!
//! Two extraction modes, and the split between them is deliberate:
//!
//! - **Regex** wherever a rigid textual pattern exists (amounts, dates,
//!   invoice numbers) — deterministic and testable.
//! - **Oracle** only for fields requiring semantic understanding (vendor
//!   names, contract parties, sentiment) where no reliable pattern exists.
//!
//! Do not move amount/date extraction to the oracle or vice versa.
//!
//! Extraction never fails: a regex miss is an absent field, and an oracle
//! failure degrades the affected field to absent/empty while the rest of the
//! pipeline completes.

pub mod departments;
pub mod entities;
pub mod patterns;

pub use departments::{
    extract_department_fields, extract_finance_fields, extract_hr_fields, extract_legal_fields,
    extract_support_fields,
};
pub use entities::extract_entities;
