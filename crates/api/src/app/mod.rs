//! HTTP API application wiring (Axum router + service wiring).
//!
//! Folder layout:
//! - `services.rs`: service state (stores, oracle, upload directory) and the
//!   analysis pipelines shared by handlers
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and id-parsing helpers
//! - `errors.rs`: consistent JSON error responses

use std::sync::Arc;

use axum::Router;
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

use services::{ApiConfig, AppServices};

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub async fn build_app(config: ApiConfig) -> Router {
    let services = Arc::new(services::build_services(config));
    build_app_with_services(services)
}

/// Router over explicit services — lets tests inject a stub oracle and
/// fresh in-memory stores.
pub fn build_app_with_services(services: Arc<AppServices>) -> Router {
    routes::router(services).layer(ServiceBuilder::new())
}
