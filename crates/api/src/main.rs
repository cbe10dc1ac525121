use std::time::Duration;

use intakeflow_api::app::services::ApiConfig;
use intakeflow_oracle::OllamaConfig;

#[tokio::main]
async fn main() {
    intakeflow_observability::init();

    let config = config_from_env();
    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .expect("failed to create upload directory");

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let app = intakeflow_api::app::build_app(config).await;

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {bind_addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}

fn config_from_env() -> ApiConfig {
    let url = std::env::var("ORACLE_URL").unwrap_or_else(|_| {
        tracing::warn!("ORACLE_URL not set; using local ollama default");
        OllamaConfig::default().url
    });
    let model = std::env::var("ORACLE_MODEL").unwrap_or_else(|_| OllamaConfig::default().model);
    let timeout = std::env::var("ORACLE_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or(OllamaConfig::default().timeout);

    let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string());

    ApiConfig {
        oracle: OllamaConfig { url, model, timeout },
        upload_dir: upload_dir.into(),
    }
}
