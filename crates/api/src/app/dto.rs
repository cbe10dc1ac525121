use serde::Deserialize;

use intakeflow_core::{TicketOrigin, UserId};

use crate::app::errors;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    /// Original portal default: new accounts land in HR.
    #[serde(default = "default_department")]
    pub department: String,
}

fn default_department() -> String {
    "HR".to_string()
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateTicketRequest {
    pub user_id: String,
    pub description: String,
    pub affected_user: Option<String>,
    #[serde(default)]
    pub ticket_type: TicketOrigin,
}

#[derive(Debug, Deserialize)]
pub struct TicketQueryRequest {
    pub user_id: String,
    pub question: String,
}

#[derive(Debug, Deserialize)]
pub struct TicketActionRequest {
    pub user_id: String,
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DocumentQueryRequest {
    pub question: String,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ResumeSearchRequest {
    pub user_id: String,
    pub job_role: String,
    #[serde(default)]
    pub min_experience: i64,
}

/// Query-string selector used by per-user listings and exports.
#[derive(Debug, Deserialize)]
pub struct UserSelector {
    pub user_id: String,
}

// -------------------------
// Parsing helpers
// -------------------------

pub fn parse_user_id(raw: &str) -> Result<UserId, axum::response::Response> {
    raw.parse::<UserId>()
        .map_err(|e| errors::domain_error_to_response(e))
}
