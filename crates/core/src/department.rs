//! Department enumeration for routed documents.

use serde::{Deserialize, Serialize};

/// The department a document is routed to.
///
/// Assigned exactly once per analyzed document; drives which field extractor
/// and which workflow branch apply downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Finance,
    #[serde(rename = "Customer Support")]
    CustomerSupport,
    Legal,
    #[serde(rename = "HR")]
    Hr,
    /// Fallback when no department keyword matches.
    General,
}

impl Department {
    /// Human-readable label, as presented to clients and stored with records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Finance => "Finance",
            Department::CustomerSupport => "Customer Support",
            Department::Legal => "Legal",
            Department::Hr => "HR",
            Department::General => "General",
        }
    }
}

impl core::fmt::Display for Department {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
