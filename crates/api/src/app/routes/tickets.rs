use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use intakeflow_core::{TicketId, TicketOrigin, TicketStatus};
use intakeflow_infra::{export, TicketRecord};
use intakeflow_oracle::prompts;

use crate::app::dto;
use crate::app::errors;
use crate::app::services::AppServices;

/// Submit a ticket: build the reporter-context line, classify, summarize and
/// suggest, then persist.
pub async fn create(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateTicketRequest>,
) -> axum::response::Response {
    let user_id = match dto::parse_user_id(&body.user_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Some(user) = services.users.get(user_id) else {
        return errors::json_error(StatusCode::NOT_FOUND, "unknown_user", "user not found");
    };

    let context = match (body.ticket_type, body.affected_user.as_deref()) {
        (TicketOrigin::SelfReported, _) => format!("Self-reported by {}", user.username),
        (TicketOrigin::OnBehalf, Some(affected)) => {
            format!("Reported by {} for {affected}", user.username)
        }
        (TicketOrigin::System, affected) => format!(
            "System-generated ticket for {}",
            affected.unwrap_or("unknown user")
        ),
        (TicketOrigin::OnBehalf, None) => format!("Reported by {}", user.username),
    };

    let full_description = format!("{context}\n\nIssue: {}", body.description);

    let (category, summary, suggestion) = services
        .analyze_ticket(&body.description, &full_description)
        .await;

    let record = TicketRecord {
        id: TicketId::new(),
        user_id,
        category,
        description: full_description,
        summary: summary.clone(),
        suggestion: suggestion.clone(),
        status: TicketStatus::Open,
        origin: body.ticket_type,
        affected_user: body.affected_user,
        escalation_reason: None,
        created_at: Utc::now(),
    };
    let ticket_id = record.id;
    services.tickets.insert(record);

    Json(serde_json::json!({
        "success": true,
        "id": ticket_id.to_string(),
        "category": category,
        "summary": summary,
        "suggestion": suggestion,
        "context": context,
    }))
    .into_response()
}

/// A user's tickets, newest first.
pub async fn list(
    Extension(services): Extension<Arc<AppServices>>,
    Query(selector): Query<dto::UserSelector>,
) -> axum::response::Response {
    let user_id = match dto::parse_user_id(&selector.user_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    Json(services.tickets.list_for_user(user_id)).into_response()
}

/// Q&A over a user's ticket summaries.
pub async fn query(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::TicketQueryRequest>,
) -> axum::response::Response {
    let user_id = match dto::parse_user_id(&body.user_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let summaries = services
        .tickets
        .list_for_user(user_id)
        .iter()
        .map(|t| t.summary.clone())
        .collect::<Vec<_>>()
        .join(" ");

    let answer = services
        .complete_or_empty(&prompts::ticket_query(&summaries, &body.question), "ticket.query")
        .await;

    Json(serde_json::json!({ "answer": answer })).into_response()
}

pub async fn resolve(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::TicketActionRequest>,
) -> axum::response::Response {
    let (ticket_id, user_id) = match parse_ids(&id, &body.user_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };
    let Some(user) = services.users.get(user_id) else {
        return errors::json_error(StatusCode::NOT_FOUND, "unknown_user", "user not found");
    };

    match services.tickets.resolve(ticket_id, user_id, &user.username) {
        Ok(()) => Json(serde_json::json!({
            "success": true,
            "message": "Ticket marked as resolved",
        }))
        .into_response(),
        Err(intakeflow_core::DomainError::Unauthorized) => errors::json_error(
            StatusCode::FORBIDDEN,
            "unauthorized",
            "Only the affected user can resolve this ticket",
        ),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn reopen(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::TicketActionRequest>,
) -> axum::response::Response {
    ticket_action(&services, &id, &body, "Ticket reopened successfully", |s, t, u, reason| {
        s.tickets.reopen(t, u, reason)
    })
}

pub async fn escalate(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::TicketActionRequest>,
) -> axum::response::Response {
    ticket_action(&services, &id, &body, "Ticket escalated successfully", |s, t, u, reason| {
        s.tickets.escalate(t, u, reason)
    })
}

/// CSV export of a user's tickets.
pub async fn export(
    Extension(services): Extension<Arc<AppServices>>,
    Query(selector): Query<dto::UserSelector>,
) -> axum::response::Response {
    let user_id = match dto::parse_user_id(&selector.user_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let tickets = services.tickets.list_for_user(user_id);
    if tickets.is_empty() {
        return errors::json_error(StatusCode::NOT_FOUND, "no_data", "No tickets");
    }

    let csv = export::tickets_csv(&tickets);
    ([(header::CONTENT_TYPE, "text/csv")], csv).into_response()
}

/// Shared reopen/escalate plumbing: both require a reason and differ only in
/// the store transition.
fn ticket_action(
    services: &AppServices,
    raw_ticket_id: &str,
    body: &dto::TicketActionRequest,
    success_message: &str,
    apply: impl FnOnce(
        &AppServices,
        TicketId,
        intakeflow_core::UserId,
        &str,
    ) -> Result<(), intakeflow_core::DomainError>,
) -> axum::response::Response {
    let (ticket_id, user_id) = match parse_ids(raw_ticket_id, &body.user_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    let Some(reason) = body.reason.as_deref().filter(|r| !r.trim().is_empty()) else {
        return errors::json_error(StatusCode::BAD_REQUEST, "missing_reason", "reason is required");
    };

    match apply(services, ticket_id, user_id, reason) {
        Ok(()) => Json(serde_json::json!({
            "success": true,
            "message": success_message,
        }))
        .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

fn parse_ids(
    raw_ticket_id: &str,
    raw_user_id: &str,
) -> Result<(TicketId, intakeflow_core::UserId), axum::response::Response> {
    let ticket_id = raw_ticket_id
        .parse::<TicketId>()
        .map_err(errors::domain_error_to_response)?;
    let user_id = dto::parse_user_id(raw_user_id)?;
    Ok((ticket_id, user_id))
}
