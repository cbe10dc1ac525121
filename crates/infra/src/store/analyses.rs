//! Stored document-analysis results.

use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use intakeflow_core::{Department, DocumentFields, DocumentId, WorkflowResult};

/// One analyzed upload: classification, extracted entities and the workflow
/// decision, persisted together with the source filename.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: DocumentId,
    pub filename: String,
    pub department: Department,
    pub summary: String,
    pub entities: DocumentFields,
    pub workflow: WorkflowResult,
    pub created_at: DateTime<Utc>,
}

/// Store of analysis results for the document-upload flow.
pub trait AnalysisStore: Send + Sync {
    fn insert(&self, record: AnalysisRecord);

    /// All records in insertion order.
    fn list(&self) -> Vec<AnalysisRecord>;

    /// Drop records failing the predicate (e.g. source file removed from the
    /// upload directory); returns how many were dropped.
    fn retain(&self, keep: &dyn Fn(&AnalysisRecord) -> bool) -> usize;
}

/// In-memory analysis store for dev/test deployments.
#[derive(Debug, Default)]
pub struct InMemoryAnalysisStore {
    inner: RwLock<Vec<AnalysisRecord>>,
}

impl InMemoryAnalysisStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AnalysisStore for InMemoryAnalysisStore {
    fn insert(&self, record: AnalysisRecord) {
        if let Ok(mut records) = self.inner.write() {
            records.push(record);
        }
    }

    fn list(&self) -> Vec<AnalysisRecord> {
        match self.inner.read() {
            Ok(records) => records.clone(),
            Err(_) => vec![],
        }
    }

    fn retain(&self, keep: &dyn Fn(&AnalysisRecord) -> bool) -> usize {
        let Ok(mut records) = self.inner.write() else {
            return 0;
        };
        let before = records.len();
        records.retain(|r| keep(r));
        before - records.len()
    }
}
