//! Ollama-backed oracle implementation.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::oracle::{Oracle, OracleError};

const DEFAULT_URL: &str = "http://127.0.0.1:11434";
const DEFAULT_MODEL: &str = "llama3";

/// Default request timeout. Generation against a cold model can take well
/// over a minute; anything past this is treated as oracle unavailability.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Connection settings for a local or remote Ollama server.
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    pub url: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Non-streaming request body for `POST /api/generate`.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// Oracle backed by an Ollama `/api/generate` endpoint.
pub struct OllamaOracle {
    http_client: reqwest::Client,
    config: OllamaConfig,
}

impl OllamaOracle {
    pub fn new(config: OllamaConfig) -> Result<Self, OracleError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| OracleError::Request(e.to_string()))?;
        Ok(Self { http_client, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }
}

#[async_trait]
impl Oracle for OllamaOracle {
    async fn complete(&self, prompt: &str) -> Result<String, OracleError> {
        let body = GenerateRequest {
            model: &self.config.model,
            prompt,
            stream: false,
        };

        let response = self
            .http_client
            .post(format!("{}/api/generate", self.config.url))
            .json(&body)
            .send()
            .await
            .map_err(|e| OracleError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(OracleError::Request(format!(
                "ollama returned status {status}"
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| OracleError::Response(e.to_string()))?;

        tracing::debug!(
            model = %self.config.model,
            chars = parsed.response.len(),
            "oracle completion received"
        );

        Ok(parsed.response.trim().to_string())
    }
}
