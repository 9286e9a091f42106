use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::StoragePath;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct UploadResponse {
    pub id: String,
    pub status: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Accepts a multipart audio upload, stages it, and dispatches a
/// transcription job. Responds 202 with the job id immediately; provider
/// failures are never surfaced here, only via polling.
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Upload request with no file");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No audio file uploaded".to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read multipart: {}", e),
                }),
            )
                .into_response();
        }
    };

    let filename = field.file_name().unwrap_or("audio.wav").to_string();

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read file: {}", e),
                }),
            )
                .into_response();
        }
    };

    if data.is_empty() {
        tracing::warn!(filename = %filename, "Upload with empty payload");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Uploaded audio is empty".to_string(),
            }),
        )
            .into_response();
    }

    tracing::debug!(filename = %filename, bytes = data.len(), "Audio upload received");

    let path = StoragePath::for_upload(&filename);
    if let Err(e) = state.audio_store.store(&path, data).await {
        tracing::error!(error = %e, "Failed to stage uploaded audio");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Failed to store audio: {}", e),
            }),
        )
            .into_response();
    }

    let job_id = match state.pipeline.submit(path).await {
        Ok(id) => id,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create transcription job");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to create job: {}", e),
                }),
            )
                .into_response();
        }
    };

    tracing::info!(job_id = %job_id.as_uuid(), filename = %filename, "Transcription job accepted");

    (
        StatusCode::ACCEPTED,
        Json(UploadResponse {
            id: job_id.as_uuid().to_string(),
            status: "in_progress".to_string(),
            message: "Transcription is being processed. Poll the job endpoint to check status."
                .to_string(),
        }),
    )
        .into_response()
}
