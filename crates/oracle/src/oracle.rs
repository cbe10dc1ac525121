//! The oracle capability interface.

use async_trait::async_trait;
use thiserror::Error;

/// Text-completion oracle.
///
/// The contract is deliberately narrow: one prompt in, one string out. The
/// response may be slow, empty, or malformed-JSON-looking text; every
/// returned string is valid. Implementations must apply their own request
/// timeout so a hung model cannot stall a request indefinitely.
#[async_trait]
pub trait Oracle: Send + Sync + 'static {
    async fn complete(&self, prompt: &str) -> Result<String, OracleError>;
}

#[derive(Debug, Error)]
pub enum OracleError {
    /// The oracle could not be reached or the request failed (timeout,
    /// connection refused, non-success status).
    #[error("oracle request failed: {0}")]
    Request(String),

    /// The oracle answered but the response body could not be read.
    #[error("oracle response unreadable: {0}")]
    Response(String),
}
