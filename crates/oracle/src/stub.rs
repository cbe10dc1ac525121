//! Deterministic oracle implementations for tests and local development.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::oracle::{Oracle, OracleError};

/// Oracle that returns canned replies and records every prompt it sees.
///
/// Replies are consumed in order; once the queue is empty the fallback reply
/// is returned for every further call. Lets workflow and pipeline tests run
/// without a live model.
#[derive(Debug, Default)]
pub struct StubOracle {
    fallback: String,
    queue: Mutex<Vec<String>>,
    seen: Mutex<Vec<String>>,
}

impl StubOracle {
    /// Stub answering every prompt with the same reply.
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            fallback: reply.into(),
            queue: Mutex::new(Vec::new()),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Stub answering with `replies` in order, then `fallback`.
    pub fn with_replies(replies: Vec<String>, fallback: impl Into<String>) -> Self {
        let mut queue = replies;
        queue.reverse();
        Self {
            fallback: fallback.into(),
            queue: Mutex::new(queue),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.seen.lock().expect("stub oracle lock poisoned").clone()
    }
}

#[async_trait]
impl Oracle for StubOracle {
    async fn complete(&self, prompt: &str) -> Result<String, OracleError> {
        self.seen
            .lock()
            .expect("stub oracle lock poisoned")
            .push(prompt.to_string());

        let reply = self
            .queue
            .lock()
            .expect("stub oracle lock poisoned")
            .pop()
            .unwrap_or_else(|| self.fallback.clone());
        Ok(reply)
    }
}

/// Oracle that always fails; for degradation-path tests.
#[derive(Debug, Default)]
pub struct FailingOracle;

#[async_trait]
impl Oracle for FailingOracle {
    async fn complete(&self, _prompt: &str) -> Result<String, OracleError> {
        Err(OracleError::Request("oracle unavailable".to_string()))
    }
}
