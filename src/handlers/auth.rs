//! Auth handlers: signup, login, current user.

use crate::error::AppError;
use crate::extractors::BearerToken;
use crate::service::{AuthResponse, AuthService, PublicUser};
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Credentials {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

pub async fn signup(
    State(state): State<AppState>,
    Json(creds): Json<Credentials>,
) -> Result<Json<AuthResponse>, AppError> {
    if creds.email.is_empty() || creds.password.is_empty() {
        return Err(AppError::BadRequest("email and password required".into()));
    }
    let response = AuthService::signup(&state.store, &creds.email, &creds.password).await?;
    Ok(Json(response))
}

pub async fn login(
    State(state): State<AppState>,
    Json(creds): Json<Credentials>,
) -> Result<Json<AuthResponse>, AppError> {
    let response = AuthService::login(&state.store, &creds.email, &creds.password).await?;
    Ok(Json(response))
}

pub async fn me(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<Json<PublicUser>, AppError> {
    let token = token.ok_or_else(|| AppError::Unauthorized("missing token".into()))?;
    let user = AuthService::current_user(&state.store, &token).await?;
    Ok(Json(user))
}
