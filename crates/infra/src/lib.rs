//! `intakeflow-infra` — storage abstractions and export plumbing.
//!
//! Results, tickets, resumes and users live behind small store traits with
//! in-memory implementations. The stores are **explicit injected state**
//! with a defined lifecycle (created at startup, shared via `Arc`), not
//! ambient globals; swapping in a persistent backend means implementing the
//! same trait.

pub mod export;
pub mod store;

pub use store::analyses::{AnalysisRecord, AnalysisStore, InMemoryAnalysisStore};
pub use store::resumes::{InMemoryResumeStore, ResumeRecord, ResumeStore};
pub use store::tickets::{InMemoryTicketStore, TicketRecord, TicketStore};
pub use store::users::{InMemoryUserStore, UserStore};
