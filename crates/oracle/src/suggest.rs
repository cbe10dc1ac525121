//! Category-specific troubleshooting suggestions for IT tickets.

use intakeflow_core::TicketCategory;

use crate::oracle::{Oracle, OracleError};

/// One template per ticket category: the instruction header plus the five
/// points the completion should cover. [`TicketCategory::GeneralItIssue`] is
/// the catch-all template; the classifier already maps anything unrecognized
/// onto it.
fn template(category: TicketCategory) -> (&'static str, &'static [&'static str]) {
    match category {
        TicketCategory::NetworkConnectivity => (
            "Provide step-by-step troubleshooting instructions for network connectivity issues.",
            &[
                "Basic connectivity checks (ping, traceroute)",
                "VPN connection troubleshooting",
                "WiFi/Network adapter settings",
                "Common network configuration fixes",
                "When to contact network administrator",
            ],
        ),
        TicketCategory::PasswordAuthentication => (
            "Provide step-by-step instructions for password and authentication issues.",
            &[
                "Password reset procedures",
                "Account unlock steps",
                "Multi-factor authentication setup",
                "Common login troubleshooting",
                "When to contact system administrator",
            ],
        ),
        TicketCategory::SoftwareApplications => (
            "Provide step-by-step instructions for software and application issues.",
            &[
                "Software installation procedures",
                "License activation steps",
                "Application troubleshooting",
                "Update and patch procedures",
                "When to contact software vendor or IT admin",
            ],
        ),
        TicketCategory::HardwareIssues => (
            "Provide step-by-step troubleshooting for hardware issues.",
            &[
                "Basic hardware diagnostics",
                "Driver updates and installations",
                "Hardware connection checks",
                "Common hardware fixes",
                "When to contact hardware support or replace equipment",
            ],
        ),
        TicketCategory::EmailCommunication => (
            "Provide step-by-step instructions for email and communication issues.",
            &[
                "Email client configuration",
                "Calendar and meeting setup",
                "Video conferencing troubleshooting",
                "Email sync and backup procedures",
                "When to contact email administrator",
            ],
        ),
        TicketCategory::DataFileIssues => (
            "Provide step-by-step instructions for data and file issues.",
            &[
                "File recovery procedures",
                "Backup and restore steps",
                "Storage space management",
                "File permission fixes",
                "When to contact data recovery specialist",
            ],
        ),
        TicketCategory::SecurityPermissions => (
            "Provide step-by-step instructions for security and permission issues.",
            &[
                "Security software configuration",
                "Permission settings adjustment",
                "Firewall and antivirus setup",
                "Security best practices",
                "When to contact security team",
            ],
        ),
        TicketCategory::AccountAccessManagement => (
            "Provide step-by-step instructions for account and access management.",
            &[
                "Account creation and setup",
                "Access permission requests",
                "Role and profile management",
                "Account security settings",
                "When to contact access management team",
            ],
        ),
        TicketCategory::GeneralItIssue => (
            "Provide general IT troubleshooting steps.",
            &[
                "Basic system diagnostics",
                "Common IT issue resolution",
                "System optimization tips",
                "Best practices for the specific issue",
                "When to escalate to IT support team",
            ],
        ),
    }
}

/// Fill the category's template with the ticket description.
pub fn suggestion_prompt(category: TicketCategory, description: &str) -> String {
    let (header, steps) = template(category);

    let mut prompt = format!(
        "Category: {category}\nIssue: {description}\n\n{header} Include:\n"
    );
    for (i, step) in steps.iter().enumerate() {
        prompt.push_str(&format!("{}. {step}\n", i + 1));
    }
    prompt
}

/// Ask the oracle for a category-specific suggestion; the completion is
/// returned verbatim, never parsed.
pub async fn generate_it_suggestion<O: Oracle + ?Sized>(
    oracle: &O,
    category: TicketCategory,
    description: &str,
) -> Result<String, OracleError> {
    oracle.complete(&suggestion_prompt(category, description)).await
}
