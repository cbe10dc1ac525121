//! IT ticket category classifier.

use intakeflow_core::TicketCategory;

/// Priority-ordered keyword groups for ticket categorization.
///
/// "access" and "permission" appear in both Security & Permissions and
/// Account & Access Management; because Security & Permissions is checked
/// first, any text containing those terms resolves there. Intentional
/// consequence of the ordering — keep it.
const TICKET_RULES: &[(TicketCategory, &[&str])] = &[
    (
        TicketCategory::NetworkConnectivity,
        &["vpn", "network", "internet", "wifi", "connection", "connectivity"],
    ),
    (
        TicketCategory::PasswordAuthentication,
        &["password", "login", "authentication", "access", "locked", "expired"],
    ),
    (
        TicketCategory::SoftwareApplications,
        &["software", "install", "license", "application", "app", "program", "update"],
    ),
    (
        TicketCategory::HardwareIssues,
        &["printer", "scanner", "keyboard", "mouse", "monitor", "laptop", "computer", "hardware"],
    ),
    (
        TicketCategory::EmailCommunication,
        &["email", "outlook", "gmail", "calendar", "meeting", "teams", "zoom"],
    ),
    (
        TicketCategory::DataFileIssues,
        &["file", "data", "backup", "storage", "drive", "folder", "document"],
    ),
    (
        TicketCategory::SecurityPermissions,
        &["security", "permission", "access", "firewall", "antivirus", "malware"],
    ),
    (
        TicketCategory::AccountAccessManagement,
        &["account", "user", "profile", "access", "permission", "role"],
    ),
];

/// Classify an IT ticket description into a category.
///
/// Same first-match-wins shape as the department classifier; falls back to
/// [`TicketCategory::GeneralItIssue`].
pub fn classify_ticket(text: &str) -> TicketCategory {
    let lower = text.to_lowercase();
    crate::first_matching_group(&lower, TICKET_RULES).unwrap_or(TicketCategory::GeneralItIssue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_group_routes_to_its_category() {
        assert_eq!(classify_ticket("VPN keeps dropping"), TicketCategory::NetworkConnectivity);
        assert_eq!(classify_ticket("forgot my password"), TicketCategory::PasswordAuthentication);
        assert_eq!(classify_ticket("need a license for this program"), TicketCategory::SoftwareApplications);
        assert_eq!(classify_ticket("printer jammed again"), TicketCategory::HardwareIssues);
        assert_eq!(classify_ticket("outlook calendar missing"), TicketCategory::EmailCommunication);
        assert_eq!(classify_ticket("restore a folder from backup"), TicketCategory::DataFileIssues);
        assert_eq!(classify_ticket("antivirus flagged malware"), TicketCategory::SecurityPermissions);
        assert_eq!(classify_ticket("new hire needs a profile and role"), TicketCategory::AccountAccessManagement);
    }

    #[test]
    fn unmatched_description_is_general_it_issue() {
        assert_eq!(classify_ticket("something is wrong"), TicketCategory::GeneralItIssue);
        assert_eq!(classify_ticket(""), TicketCategory::GeneralItIssue);
    }

    #[test]
    fn access_resolves_before_account_management() {
        // "access" appears in three groups; Password & Authentication is the
        // earliest, then Security & Permissions. Account & Access Management
        // can only win via its own unique keywords.
        assert_eq!(
            classify_ticket("requesting access"),
            TicketCategory::PasswordAuthentication
        );
        assert_eq!(
            classify_ticket("firewall blocks my access"),
            TicketCategory::PasswordAuthentication
        );
    }

    #[test]
    fn permission_resolves_to_security_before_account_management() {
        // "permission" is shared between Security & Permissions and Account &
        // Access Management; the earlier group wins.
        assert_eq!(
            classify_ticket("need permission changed"),
            TicketCategory::SecurityPermissions
        );
    }

    #[test]
    fn network_beats_password_when_both_match() {
        assert_eq!(
            classify_ticket("vpn login broken"),
            TicketCategory::NetworkConnectivity
        );
    }
}
