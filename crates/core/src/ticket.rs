//! IT ticket category and status enumerations.

use serde::{Deserialize, Serialize};

/// Category assigned to an IT support ticket.
///
/// Independent enumeration from [`crate::Department`]; used only by the
/// ticket subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketCategory {
    #[serde(rename = "Network & Connectivity")]
    NetworkConnectivity,
    #[serde(rename = "Password & Authentication")]
    PasswordAuthentication,
    #[serde(rename = "Software & Applications")]
    SoftwareApplications,
    #[serde(rename = "Hardware Issues")]
    HardwareIssues,
    #[serde(rename = "Email & Communication")]
    EmailCommunication,
    #[serde(rename = "Data & File Issues")]
    DataFileIssues,
    #[serde(rename = "Security & Permissions")]
    SecurityPermissions,
    #[serde(rename = "Account & Access Management")]
    AccountAccessManagement,
    /// Fallback when no category keyword matches.
    #[serde(rename = "General IT Issue")]
    GeneralItIssue,
}

impl TicketCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketCategory::NetworkConnectivity => "Network & Connectivity",
            TicketCategory::PasswordAuthentication => "Password & Authentication",
            TicketCategory::SoftwareApplications => "Software & Applications",
            TicketCategory::HardwareIssues => "Hardware Issues",
            TicketCategory::EmailCommunication => "Email & Communication",
            TicketCategory::DataFileIssues => "Data & File Issues",
            TicketCategory::SecurityPermissions => "Security & Permissions",
            TicketCategory::AccountAccessManagement => "Account & Access Management",
            TicketCategory::GeneralItIssue => "General IT Issue",
        }
    }
}

impl core::fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who a ticket was raised for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TicketOrigin {
    /// Reporter is the affected user.
    #[default]
    #[serde(rename = "self")]
    SelfReported,
    /// Raised on behalf of a named colleague.
    #[serde(rename = "other")]
    OnBehalf,
    /// Generated by monitoring/automation for a user.
    System,
}

/// Ticket lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TicketStatus {
    #[default]
    Open,
    Resolved,
    Reopened,
    Escalated,
}

impl core::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            TicketStatus::Open => "Open",
            TicketStatus::Resolved => "Resolved",
            TicketStatus::Reopened => "Reopened",
            TicketStatus::Escalated => "Escalated",
        };
        f.write_str(s)
    }
}
