//! Bespoke storefront routes: auth, categories, flash sale, upload.

use crate::handlers::{auth, category, flash, upload};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn admin_routes(state: AppState) -> Router {
    Router::new()
        .route("/upload", post(upload::upload))
        .route("/categories", get(category::list).post(category::create))
        .route("/categories/:id", delete(category::delete))
        .route("/flash", get(flash::get_flash).put(flash::put_flash))
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::me))
        .with_state(state)
}
