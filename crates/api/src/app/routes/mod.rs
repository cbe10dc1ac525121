use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};

use crate::app::services::AppServices;

pub mod auth;
pub mod documents;
pub mod resumes;
pub mod system;
pub mod tickets;

/// Full routing tree.
pub fn router(services: Arc<AppServices>) -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/upload", post(documents::upload))
        .route("/analyze", post(documents::analyze))
        .route("/results", get(documents::results))
        .route("/query", post(documents::query))
        .route("/export/documents", get(documents::export))
        .route("/tickets", post(tickets::create).get(tickets::list))
        .route("/tickets/query", post(tickets::query))
        .route("/tickets/:id/resolve", post(tickets::resolve))
        .route("/tickets/:id/reopen", post(tickets::reopen))
        .route("/tickets/:id/escalate", post(tickets::escalate))
        .route("/export/tickets", get(tickets::export))
        .route("/resumes", post(resumes::upload).get(resumes::list))
        .route("/resumes/search", post(resumes::search))
        .layer(Extension(services))
}
