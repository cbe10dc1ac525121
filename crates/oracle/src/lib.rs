//! `intakeflow-oracle`
//!
//! **Responsibility:** Language-model oracle boundary.
//!
//! This crate is intentionally **not** part of the domain model:
//! - It must not depend on classification or workflow rules.
//! - It must not mutate domain state.
//! - It returns **opaque text completions**, never parsed structures — the
//!   oracle's output carries no guaranteed schema, and consumers store it
//!   verbatim or interpret it themselves.
//!
//! Oracle unavailability is a recoverable per-request failure: callers
//! degrade the affected field to empty/absent and complete the rest of the
//! pipeline.

pub mod ollama;
pub mod oracle;
pub mod prompts;
pub mod stub;
pub mod suggest;

pub use ollama::{OllamaConfig, OllamaOracle};
pub use oracle::{Oracle, OracleError};
pub use stub::{FailingOracle, StubOracle};
pub use suggest::{generate_it_suggestion, suggestion_prompt};
