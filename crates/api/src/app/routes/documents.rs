use std::sync::Arc;

use axum::{
    extract::{Extension, Multipart},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use intakeflow_core::DocumentId;
use intakeflow_infra::{export, AnalysisRecord};
use intakeflow_oracle::prompts;

use crate::app::dto;
use crate::app::errors;
use crate::app::services::AppServices;

/// Upload a document, run the analysis pipeline and store the result.
pub async fn upload(
    Extension(services): Extension<Arc<AppServices>>,
    mut multipart: Multipart,
) -> axum::response::Response {
    let mut upload: Option<(String, Vec<u8>)> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return errors::json_error(StatusCode::BAD_REQUEST, "bad_multipart", e.to_string())
            }
        };

        let Some(filename) = field.file_name().map(sanitize_filename) else {
            continue;
        };
        match field.bytes().await {
            Ok(bytes) => upload = Some((filename, bytes.to_vec())),
            Err(e) => {
                return errors::json_error(StatusCode::BAD_REQUEST, "bad_multipart", e.to_string())
            }
        }
    }

    let Some((filename, bytes)) = upload else {
        return errors::json_error(StatusCode::BAD_REQUEST, "missing_file", "no file field in upload");
    };

    let path = services.upload_dir.join(&filename);
    if let Err(e) = tokio::fs::write(&path, &bytes).await {
        return errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_failed", e.to_string());
    }

    let text = match intakeflow_ingest::extract_text(&path, &filename).await {
        Ok(text) => text,
        Err(e) => return errors::ingest_error_to_response(e),
    };

    let analysis = services.analyze_document(&text).await;

    let record = AnalysisRecord {
        id: DocumentId::new(),
        filename: filename.clone(),
        department: analysis.department,
        summary: analysis.summary.clone(),
        entities: analysis.entities.clone(),
        workflow: analysis.workflow.clone(),
        created_at: Utc::now(),
    };
    services.analyses.insert(record);

    Json(serde_json::json!({
        "filename": filename,
        "department": analysis.department,
        "summary": analysis.summary,
        "entities": analysis.entities,
        "workflow_outcome": analysis.workflow.outcome,
        "workflow_checklist": analysis.workflow.checklist,
    }))
    .into_response()
}

/// Department-shaped analysis of submitted text (no upload, not stored):
/// runs the department's own field extractor instead of generic entity
/// extraction, so Legal gets clause checks and Customer Support gets the
/// priority heuristic.
pub async fn analyze(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::AnalyzeRequest>,
) -> axum::response::Response {
    let analysis = services.analyze_by_department(&body.text).await;

    Json(serde_json::json!({
        "department": analysis.department,
        "fields": analysis.entities,
        "workflow_outcome": analysis.workflow.outcome,
        "workflow_checklist": analysis.workflow.checklist,
    }))
    .into_response()
}

/// List stored analyses, dropping entries whose source file has been removed
/// from the upload directory (and pruning the store to match).
pub async fn results(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let upload_dir = services.upload_dir.clone();
    let dropped = services
        .analyses
        .retain(&|record| upload_dir.join(&record.filename).exists());
    if dropped > 0 {
        tracing::debug!(dropped, "pruned analyses with missing source files");
    }

    Json(services.analyses.list()).into_response()
}

/// Q&A over the stored document summaries.
pub async fn query(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::DocumentQueryRequest>,
) -> axum::response::Response {
    let all_summaries = services
        .analyses
        .list()
        .iter()
        .map(|r| r.summary.clone())
        .collect::<Vec<_>>()
        .join(" ");

    let answer = services
        .complete_or_empty(
            &prompts::document_query(&all_summaries, &body.question),
            "document.query",
        )
        .await;

    Json(serde_json::json!({ "answer": answer })).into_response()
}

/// CSV export of stored analyses.
pub async fn export(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let records = services.analyses.list();
    if records.is_empty() {
        return errors::json_error(StatusCode::NOT_FOUND, "no_data", "No data available");
    }

    let csv = export::analyses_csv(&records);
    ([(header::CONTENT_TYPE, "text/csv")], csv).into_response()
}

/// Strip any client-supplied path components; uploads are stored flat.
pub(crate) fn sanitize_filename(raw: &str) -> String {
    raw.rsplit(['/', '\\']).next().unwrap_or(raw).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_path_components() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\temp\\doc.txt"), "doc.txt");
        assert_eq!(sanitize_filename("invoice.txt"), "invoice.txt");
    }
}
