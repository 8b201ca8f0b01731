//! Flash-sale singleton handlers.

use crate::error::AppError;
use crate::state::AppState;
use crate::store::FlashSetting;
use axum::{extract::State, Json};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashUpdate {
    #[serde(default)]
    enabled: bool,
    #[serde(default)]
    banner_url: String,
}

pub async fn get_flash(State(state): State<AppState>) -> Result<Json<FlashSetting>, AppError> {
    Ok(Json(state.store.read().await?.flash))
}

/// Unconditional overwrite; missing fields fall back to the defaults.
pub async fn put_flash(
    State(state): State<AppState>,
    Json(body): Json<FlashUpdate>,
) -> Result<Json<FlashSetting>, AppError> {
    let flash = state
        .store
        .update(move |doc| {
            doc.flash = FlashSetting {
                enabled: body.enabled,
                banner_url: body.banner_url,
            };
            Ok(doc.flash.clone())
        })
        .await?;
    Ok(Json(flash))
}
