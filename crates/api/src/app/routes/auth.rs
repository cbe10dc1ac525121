use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use intakeflow_auth::{hash_password, verify_password, User};
use intakeflow_core::DomainError;

use crate::app::dto;
use crate::app::errors;
use crate::app::services::AppServices;

/// Register a new portal user.
///
/// The success/message envelope (HTTP 200 either way) is the contract the
/// portal frontend expects; conflicts are reported in-band.
pub async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::RegisterRequest>,
) -> axum::response::Response {
    let password_hash = match hash_password(&body.password) {
        Ok(h) => h,
        Err(e) => {
            return errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "hash_failed",
                e.to_string(),
            )
        }
    };

    let user = match User::new(&body.username, password_hash, body.department) {
        Ok(u) => u,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.users.insert(user) {
        Ok(()) => Json(serde_json::json!({
            "success": true,
            "message": "User registered",
        }))
        .into_response(),
        Err(DomainError::Conflict(_)) => Json(serde_json::json!({
            "success": false,
            "message": "User already exists",
        }))
        .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::LoginRequest>,
) -> axum::response::Response {
    let user = services.users.find_by_username(&body.username);

    match user {
        Some(user) if verify_password(&body.password, &user.password_hash) => {
            Json(serde_json::json!({
                "success": true,
                "user": {
                    "id": user.id.to_string(),
                    "username": user.username,
                    "department": user.department,
                },
            }))
            .into_response()
        }
        _ => Json(serde_json::json!({
            "success": false,
            "message": "Invalid credentials",
        }))
        .into_response(),
    }
}
