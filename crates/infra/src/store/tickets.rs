//! Stored IT support tickets.

use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use intakeflow_core::{
    DomainError, TicketCategory, TicketId, TicketOrigin, TicketStatus, UserId,
};

/// One submitted ticket with its classification and oracle outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketRecord {
    pub id: TicketId,
    pub user_id: UserId,
    pub category: TicketCategory,
    /// Full description including the reporter-context line.
    pub description: String,
    pub summary: String,
    pub suggestion: String,
    pub status: TicketStatus,
    pub origin: TicketOrigin,
    /// Username of the affected colleague for on-behalf/system tickets.
    pub affected_user: Option<String>,
    pub escalation_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TicketRecord {
    /// Whether `username` may resolve this ticket: self-reported tickets,
    /// tickets with no named affected user, or tickets naming the caller.
    pub fn resolvable_by(&self, username: &str) -> bool {
        self.origin == TicketOrigin::SelfReported
            || self.affected_user.is_none()
            || self.affected_user.as_deref() == Some(username)
    }
}

/// Store of a user's tickets.
pub trait TicketStore: Send + Sync {
    fn insert(&self, record: TicketRecord);

    /// A user's tickets, newest first.
    fn list_for_user(&self, user_id: UserId) -> Vec<TicketRecord>;

    fn get(&self, ticket_id: TicketId) -> Option<TicketRecord>;

    /// Mark resolved. Fails with `NotFound` for a missing or foreign ticket
    /// and `Unauthorized` when the caller is not the affected user.
    fn resolve(
        &self,
        ticket_id: TicketId,
        user_id: UserId,
        username: &str,
    ) -> Result<(), DomainError>;

    /// Reopen with a reason.
    fn reopen(
        &self,
        ticket_id: TicketId,
        user_id: UserId,
        reason: &str,
    ) -> Result<(), DomainError>;

    /// Escalate with a reason.
    fn escalate(
        &self,
        ticket_id: TicketId,
        user_id: UserId,
        reason: &str,
    ) -> Result<(), DomainError>;
}

/// In-memory ticket store for dev/test deployments.
#[derive(Debug, Default)]
pub struct InMemoryTicketStore {
    inner: RwLock<Vec<TicketRecord>>,
}

impl InMemoryTicketStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `apply` against the caller's ticket, enforcing ownership.
    fn update(
        &self,
        ticket_id: TicketId,
        user_id: UserId,
        apply: impl FnOnce(&mut TicketRecord) -> Result<(), DomainError>,
    ) -> Result<(), DomainError> {
        let mut records = self
            .inner
            .write()
            .map_err(|_| DomainError::invariant("ticket store lock poisoned"))?;

        let ticket = records
            .iter_mut()
            .find(|t| t.id == ticket_id && t.user_id == user_id)
            .ok_or_else(DomainError::not_found)?;

        apply(ticket)
    }
}

impl TicketStore for InMemoryTicketStore {
    fn insert(&self, record: TicketRecord) {
        if let Ok(mut records) = self.inner.write() {
            records.push(record);
        }
    }

    fn list_for_user(&self, user_id: UserId) -> Vec<TicketRecord> {
        let Ok(records) = self.inner.read() else {
            return vec![];
        };
        let mut mine: Vec<TicketRecord> = records
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        mine.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        mine
    }

    fn get(&self, ticket_id: TicketId) -> Option<TicketRecord> {
        let records = self.inner.read().ok()?;
        records.iter().find(|t| t.id == ticket_id).cloned()
    }

    fn resolve(
        &self,
        ticket_id: TicketId,
        user_id: UserId,
        username: &str,
    ) -> Result<(), DomainError> {
        self.update(ticket_id, user_id, |ticket| {
            if !ticket.resolvable_by(username) {
                return Err(DomainError::Unauthorized);
            }
            ticket.status = TicketStatus::Resolved;
            Ok(())
        })
    }

    fn reopen(
        &self,
        ticket_id: TicketId,
        user_id: UserId,
        reason: &str,
    ) -> Result<(), DomainError> {
        self.update(ticket_id, user_id, |ticket| {
            ticket.status = TicketStatus::Reopened;
            ticket.escalation_reason = Some(reason.to_string());
            Ok(())
        })
    }

    fn escalate(
        &self,
        ticket_id: TicketId,
        user_id: UserId,
        reason: &str,
    ) -> Result<(), DomainError> {
        self.update(ticket_id, user_id, |ticket| {
            ticket.status = TicketStatus::Escalated;
            ticket.escalation_reason = Some(reason.to_string());
            Ok(())
        })
    }
}
