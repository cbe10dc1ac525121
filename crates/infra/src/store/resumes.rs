//! Stored resume analyses.

use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use intakeflow_core::{ResumeId, UserId};

/// One analyzed resume. The oracle outputs are stored verbatim — the
/// skills/match text is requested as JSON but never validated, so searching
/// happens by substring over the stored text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub id: ResumeId,
    pub user_id: UserId,
    pub filename: String,
    pub skills_analysis: String,
    pub job_matches: String,
    pub experience_years: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Store of uploaded resumes per recruiting user.
pub trait ResumeStore: Send + Sync {
    fn insert(&self, record: ResumeRecord);

    /// A user's resumes, newest first.
    fn list_for_user(&self, user_id: UserId) -> Vec<ResumeRecord>;

    /// Resumes whose stored match text mentions `job_role` and whose
    /// recorded experience meets the minimum.
    fn search(&self, user_id: UserId, job_role: &str, min_experience: i64) -> Vec<ResumeRecord>;
}

/// In-memory resume store for dev/test deployments.
#[derive(Debug, Default)]
pub struct InMemoryResumeStore {
    inner: RwLock<Vec<ResumeRecord>>,
}

impl InMemoryResumeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResumeStore for InMemoryResumeStore {
    fn insert(&self, record: ResumeRecord) {
        if let Ok(mut records) = self.inner.write() {
            records.push(record);
        }
    }

    fn list_for_user(&self, user_id: UserId) -> Vec<ResumeRecord> {
        let Ok(records) = self.inner.read() else {
            return vec![];
        };
        let mut mine: Vec<ResumeRecord> = records
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        mine.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        mine
    }

    fn search(&self, user_id: UserId, job_role: &str, min_experience: i64) -> Vec<ResumeRecord> {
        self.list_for_user(user_id)
            .into_iter()
            .filter(|r| r.job_matches.contains(job_role) && r.experience_years >= min_experience)
            .collect()
    }
}
