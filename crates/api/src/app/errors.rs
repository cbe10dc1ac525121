use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use intakeflow_core::DomainError;
use intakeflow_ingest::IngestError;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvariantViolation(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invariant_violation", msg)
        }
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
        DomainError::Unauthorized => json_error(StatusCode::FORBIDDEN, "unauthorized", "unauthorized"),
    }
}

pub fn ingest_error_to_response(err: IngestError) -> axum::response::Response {
    match err {
        IngestError::UnsupportedFormat(filename) => json_error(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "unsupported_format",
            format!("unsupported file format: {filename}"),
        ),
        IngestError::EmptyDocument(filename) => json_error(
            StatusCode::BAD_REQUEST,
            "no_readable_text",
            format!("no readable text found in {filename}"),
        ),
        IngestError::Io { filename, source } => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "read_failed",
            format!("failed to read {filename}: {source}"),
        ),
    }
}
