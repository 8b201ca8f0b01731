//! Multipart upload handler.

use crate::error::AppError;
use crate::service::UploadService;
use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct UploadResponse {
    pub url: String,
    pub relative: String,
}

pub async fn upload(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<impl axum::response::IntoResponse, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| AppError::BadRequest("invalid multipart body".into()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let original = field.file_name().unwrap_or("").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|_| AppError::BadRequest("invalid multipart body".into()))?;
        let stored = UploadService::save(&state.upload_dir, &original, &bytes).await?;
        let url = format!("{}://{}{}", scheme(&headers), host(&headers), stored.relative);
        return Ok((
            StatusCode::CREATED,
            Json(UploadResponse {
                url,
                relative: stored.relative,
            }),
        ));
    }
    Err(AppError::BadRequest("file field required".into()))
}

/// Scheme as seen by the client: X-Forwarded-Proto behind a proxy, http otherwise.
fn scheme(headers: &HeaderMap) -> &str {
    headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http")
}

fn host(headers: &HeaderMap) -> &str {
    headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost")
}
