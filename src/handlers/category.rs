//! Category handlers: typed records with case-insensitive name uniqueness.

use crate::error::AppError;
use crate::state::AppState;
use crate::store::Category;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct NewCategory {
    #[serde(default)]
    name: String,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Category>>, AppError> {
    Ok(Json(state.store.read().await?.categories))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewCategory>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    if body.name.is_empty() {
        return Err(AppError::BadRequest("name required".into()));
    }
    let category = state
        .store
        .update(move |doc| {
            let needle = body.name.to_lowercase();
            if doc.categories.iter().any(|c| c.name.to_lowercase() == needle) {
                return Err(AppError::Conflict("category exists".into()));
            }
            let category = Category {
                id: uuid::Uuid::new_v4().to_string(),
                name: body.name,
            };
            doc.categories.push(category.clone());
            Ok(category)
        })
        .await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// No referential check against products; records referencing the deleted
/// category keep their now-dangling value.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state
        .store
        .update(move |doc| {
            let before = doc.categories.len();
            doc.categories.retain(|c| c.id != id);
            if doc.categories.len() == before {
                return Err(AppError::NotFound("not found".into()));
            }
            Ok(())
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
