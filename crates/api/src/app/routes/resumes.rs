use std::sync::Arc;

use axum::{
    extract::{Extension, Multipart, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use intakeflow_core::ResumeId;
use intakeflow_infra::ResumeRecord;
use intakeflow_oracle::prompts;

use crate::app::dto;
use crate::app::errors;
use crate::app::services::AppServices;

/// Upload a resume and run the two-stage analysis: candidate profile
/// extraction, then role matching over the profile. Both oracle outputs are
/// stored verbatim.
pub async fn upload(
    Extension(services): Extension<Arc<AppServices>>,
    mut multipart: Multipart,
) -> axum::response::Response {
    let mut upload: Option<(String, Vec<u8>)> = None;
    let mut raw_user_id: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return errors::json_error(StatusCode::BAD_REQUEST, "bad_multipart", e.to_string())
            }
        };

        if let Some(filename) = field
            .file_name()
            .map(crate::app::routes::documents::sanitize_filename)
        {
            match field.bytes().await {
                Ok(bytes) => upload = Some((filename, bytes.to_vec())),
                Err(e) => {
                    return errors::json_error(
                        StatusCode::BAD_REQUEST,
                        "bad_multipart",
                        e.to_string(),
                    )
                }
            }
        } else if field.name() == Some("user_id") {
            match field.text().await {
                Ok(text) => raw_user_id = Some(text),
                Err(e) => {
                    return errors::json_error(
                        StatusCode::BAD_REQUEST,
                        "bad_multipart",
                        e.to_string(),
                    )
                }
            }
        }
    }

    let Some(raw_user_id) = raw_user_id else {
        return errors::json_error(StatusCode::BAD_REQUEST, "missing_user_id", "user_id field required");
    };
    let user_id = match dto::parse_user_id(&raw_user_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
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

    let skills_analysis = services
        .complete_or_empty(&prompts::resume_skills(&text), "resume.skills")
        .await;
    let job_matches = services
        .complete_or_empty(&prompts::resume_job_matching(&skills_analysis), "resume.matching")
        .await;

    let record = ResumeRecord {
        id: ResumeId::new(),
        user_id,
        filename: filename.clone(),
        skills_analysis: skills_analysis.clone(),
        job_matches: job_matches.clone(),
        experience_years: 0,
        status: "Analyzed".to_string(),
        created_at: Utc::now(),
    };
    services.resumes.insert(record);

    Json(serde_json::json!({
        "success": true,
        "filename": filename,
        "skills_analysis": skills_analysis,
        "job_matches": job_matches,
    }))
    .into_response()
}

/// A user's analyzed resumes, newest first.
pub async fn list(
    Extension(services): Extension<Arc<AppServices>>,
    Query(selector): Query<dto::UserSelector>,
) -> axum::response::Response {
    let user_id = match dto::parse_user_id(&selector.user_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    Json(services.resumes.list_for_user(user_id)).into_response()
}

/// Search stored resumes by role mention and minimum experience.
pub async fn search(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ResumeSearchRequest>,
) -> axum::response::Response {
    let user_id = match dto::parse_user_id(&body.user_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let hits = services
        .resumes
        .search(user_id, &body.job_role, body.min_experience);
    Json(hits).into_response()
}
