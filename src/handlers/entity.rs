//! Generic collection handlers: list, create, update, delete.

use crate::collections::{collection_by_path, CollectionSpec};
use crate::error::AppError;
use crate::service::CrudService;
use crate::state::AppState;
use crate::store::LooseRecord;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

fn resolve(path_segment: &str) -> Result<&'static CollectionSpec, AppError> {
    collection_by_path(path_segment).ok_or_else(|| AppError::NotFound("not found".into()))
}

fn body_to_map(value: Value) -> Result<LooseRecord, AppError> {
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

pub async fn list(
    State(state): State<AppState>,
    Path(path_segment): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let spec = resolve(&path_segment)?;
    let rows = CrudService::list(&state.store, spec).await?;
    Ok(Json(rows))
}

pub async fn create(
    State(state): State<AppState>,
    Path(path_segment): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let spec = resolve(&path_segment)?;
    let body = body_to_map(body)?;
    let row = CrudService::create(&state.store, spec, body).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

pub async fn update(
    State(state): State<AppState>,
    Path((path_segment, id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let spec = resolve(&path_segment)?;
    let body = body_to_map(body)?;
    let row = CrudService::update(&state.store, spec, &id, body).await?;
    Ok(Json(row))
}

pub async fn delete(
    State(state): State<AppState>,
    Path((path_segment, id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let spec = resolve(&path_segment)?;
    CrudService::delete(&state.store, spec, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
