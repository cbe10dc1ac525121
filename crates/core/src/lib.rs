//! `intakeflow-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the department and ticket-category enumerations, the extracted-field
//! mapping, workflow results, typed identifiers and the domain error model.

pub mod department;
pub mod error;
pub mod fields;
pub mod id;
pub mod result;
pub mod ticket;

pub use department::Department;
pub use error::{DomainError, DomainResult};
pub use fields::DocumentFields;
pub use id::{DocumentId, ResumeId, TicketId, UserId};
pub use result::WorkflowResult;
pub use ticket::{TicketCategory, TicketOrigin, TicketStatus};
