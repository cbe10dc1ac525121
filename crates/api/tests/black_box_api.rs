use std::path::PathBuf;
use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::json;

use intakeflow_api::app::services::AppServices;
use intakeflow_infra::{
    InMemoryAnalysisStore, InMemoryResumeStore, InMemoryTicketStore, InMemoryUserStore,
};
use intakeflow_oracle::StubOracle;

struct TestServer {
    base_url: String,
    upload_dir: PathBuf,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Same router as prod, but with a stub oracle, fresh in-memory stores
    /// and a throwaway upload directory, bound to an ephemeral port.
    async fn spawn(oracle: StubOracle) -> Self {
        let upload_dir =
            std::env::temp_dir().join(format!("intakeflow-api-test-{}", uuid::Uuid::now_v7()));
        tokio::fs::create_dir_all(&upload_dir)
            .await
            .expect("failed to create upload dir");

        let services = Arc::new(AppServices {
            oracle: Arc::new(oracle),
            analyses: Arc::new(InMemoryAnalysisStore::new()),
            tickets: Arc::new(InMemoryTicketStore::new()),
            resumes: Arc::new(InMemoryResumeStore::new()),
            users: Arc::new(InMemoryUserStore::new()),
            upload_dir: upload_dir.clone(),
        });

        let app = intakeflow_api::app::build_app_with_services(services);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            upload_dir,
            handle,
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
        let _ = std::fs::remove_dir_all(&self.upload_dir);
    }
}

async fn upload_text(
    client: &reqwest::Client,
    base_url: &str,
    filename: &str,
    contents: &str,
) -> serde_json::Value {
    let part = reqwest::multipart::Part::text(contents.to_string()).file_name(filename.to_string());
    let form = reqwest::multipart::Form::new().part("file", part);

    let res = client
        .post(format!("{base_url}/upload"))
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    res.json().await.unwrap()
}

async fn register_and_login(
    client: &reqwest::Client,
    base_url: &str,
    username: &str,
) -> String {
    let res = client
        .post(format!("{base_url}/register"))
        .json(&json!({"username": username, "password": "hunter2"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .post(format!("{base_url}/login"))
        .json(&json!({"username": username, "password": "hunter2"}))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["success"], json!(true));
    body["user"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_endpoint_is_open() {
    let srv = TestServer::spawn(StubOracle::with_reply("")).await;
    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn finance_invoice_runs_the_full_pipeline() {
    let srv = TestServer::spawn(StubOracle::with_reply("stub summary")).await;
    let client = reqwest::Client::new();

    let body = upload_text(
        &client,
        &srv.base_url,
        "invoice.txt",
        "Invoice INV-2024-001: payment of ₹75,000.00 due 15/08/2024.",
    )
    .await;

    assert_eq!(body["department"], json!("Finance"));
    assert_eq!(body["summary"], json!("stub summary"));
    assert_eq!(body["workflow_outcome"], json!("Approval Required"));
    assert_eq!(
        body["workflow_checklist"],
        json!(["Escalate to Finance Manager", "Log in SAP", "Schedule Payment"])
    );
    assert_eq!(body["entities"]["invoice_numbers"], json!(["INV-2024-001"]));

    // Stored and listed back.
    let res = client
        .get(format!("{}/results", srv.base_url))
        .send()
        .await
        .unwrap();
    let results: serde_json::Value = res.json().await.unwrap();
    assert_eq!(results.as_array().unwrap().len(), 1);
    assert_eq!(results[0]["filename"], json!("invoice.txt"));
}

#[tokio::test]
async fn hr_feedback_resolves_to_the_harassment_branch() {
    let srv = TestServer::spawn(StubOracle::with_reply("stub summary")).await;
    let client = reqwest::Client::new();

    let body = upload_text(
        &client,
        &srv.base_url,
        "feedback.txt",
        "Employee feedback: ongoing harassment by a manager, though teamwork is positive.",
    )
    .await;

    assert_eq!(body["department"], json!("HR"));
    assert_eq!(
        body["workflow_outcome"],
        json!("Serious Complaint - Immediate Investigation")
    );
}

#[tokio::test]
async fn results_prune_entries_whose_files_were_removed() {
    let srv = TestServer::spawn(StubOracle::with_reply("stub summary")).await;
    let client = reqwest::Client::new();

    upload_text(&client, &srv.base_url, "ephemeral.txt", "general text with no keywords").await;
    tokio::fs::remove_file(srv.upload_dir.join("ephemeral.txt"))
        .await
        .unwrap();

    let res = client
        .get(format!("{}/results", srv.base_url))
        .send()
        .await
        .unwrap();
    let results: serde_json::Value = res.json().await.unwrap();
    assert!(results.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unsupported_upload_formats_are_rejected() {
    let srv = TestServer::spawn(StubOracle::with_reply("")).await;
    let client = reqwest::Client::new();

    let part = reqwest::multipart::Part::text("%PDF-1.4".to_string()).file_name("report.pdf");
    let form = reqwest::multipart::Form::new().part("file", part);
    let res = client
        .post(format!("{}/upload", srv.base_url))
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], json!("unsupported_format"));
}

#[tokio::test]
async fn duplicate_registration_is_reported_in_band() {
    let srv = TestServer::spawn(StubOracle::with_reply("")).await;
    let client = reqwest::Client::new();

    register_and_login(&client, &srv.base_url, "alice").await;

    let res = client
        .post(format!("{}/register", srv.base_url))
        .json(&json!({"username": "Alice", "password": "other"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("User already exists"));

    let res = client
        .post(format!("{}/login", srv.base_url))
        .json(&json!({"username": "alice", "password": "wrong"}))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn ticket_lifecycle_classifies_then_resolves() {
    let oracle = StubOracle::with_replies(
        vec!["ticket summary".to_string(), "try restarting the vpn client".to_string()],
        "",
    );
    let srv = TestServer::spawn(oracle).await;
    let client = reqwest::Client::new();

    let user_id = register_and_login(&client, &srv.base_url, "bob").await;

    let res = client
        .post(format!("{}/tickets", srv.base_url))
        .json(&json!({
            "user_id": user_id,
            "description": "vpn connection keeps dropping",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();

    assert_eq!(body["success"], json!(true));
    assert_eq!(body["category"], json!("Network & Connectivity"));
    assert_eq!(body["summary"], json!("ticket summary"));
    assert_eq!(body["suggestion"], json!("try restarting the vpn client"));
    assert_eq!(body["context"], json!("Self-reported by bob"));
    let ticket_id = body["id"].as_str().unwrap().to_string();

    let res = client
        .post(format!("{}/tickets/{}/resolve", srv.base_url, ticket_id))
        .json(&json!({"user_id": user_id}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/tickets?user_id={}", srv.base_url, user_id))
        .send()
        .await
        .unwrap();
    let tickets: serde_json::Value = res.json().await.unwrap();
    assert_eq!(tickets[0]["status"], json!("Resolved"));
}

#[tokio::test]
async fn oracle_outage_degrades_but_does_not_fail_the_pipeline() {
    let srv = TestServer::spawn(StubOracle::default()).await;
    let client = reqwest::Client::new();

    // StubOracle::default() answers with empty strings, matching an oracle
    // that returns nothing useful; the deterministic pipeline still runs.
    let body = upload_text(
        &client,
        &srv.base_url,
        "contract.txt",
        "This agreement covers liability only.",
    )
    .await;

    assert_eq!(body["department"], json!("Legal"));
    assert_eq!(body["summary"], json!(""));
    // The generic upload path attaches no clause analysis, so the Legal
    // branch sees an empty missing-clause list.
    assert_eq!(body["workflow_outcome"], json!("Contract OK"));
    assert_eq!(body["workflow_checklist"], json!(["Archive in Legal System"]));
}

#[tokio::test]
async fn department_analysis_surfaces_the_priority_heuristic() {
    let oracle = StubOracle::with_reply(r#"{"category": "Delay", "priority": "High"}"#);
    let srv = TestServer::spawn(oracle).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/analyze", srv.base_url))
        .json(&json!({"text": "complaint: my delivery is delayed by two weeks"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();

    assert_eq!(body["department"], json!("Customer Support"));
    assert_eq!(body["workflow_outcome"], json!("Escalation Needed"));
    assert_eq!(
        body["workflow_checklist"],
        json!(["Create ServiceNow Ticket", "Notify Project Manager", "Draft Apology Email"])
    );
}

#[tokio::test]
async fn department_analysis_runs_the_clause_check() {
    let srv = TestServer::spawn(StubOracle::with_reply("ACME Corp and Initech Ltd")).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/analyze", srv.base_url))
        .json(&json!({"text": "This contract covers termination and liability."}))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();

    assert_eq!(body["department"], json!("Legal"));
    assert_eq!(body["fields"]["missing_clauses"], json!(["Confidentiality"]));
    assert_eq!(body["workflow_outcome"], json!("Legal Review Required"));
    assert_eq!(
        body["workflow_checklist"],
        json!(["Add Confidentiality Clause", "Route to Legal"])
    );
}

#[tokio::test]
async fn export_returns_csv_with_headers() {
    let srv = TestServer::spawn(StubOracle::with_reply("stub summary")).await;
    let client = reqwest::Client::new();

    upload_text(&client, &srv.base_url, "invoice.txt", "invoice for $100").await;

    let res = client
        .get(format!("{}/export/documents", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers().get("content-type").unwrap().to_str().unwrap(),
        "text/csv"
    );
    let csv = res.text().await.unwrap();
    assert!(csv.starts_with("filename,department,summary,outcome,checklist,created_at\n"));
    assert!(csv.contains("invoice.txt"));
}
