//! Dynamic collection routes.
//! Uses parameterized paths so Path extractors receive the segment and id;
//! handlers resolve the collection by segment. Static routes mounted beside
//! these (categories, flash, auth) win over the parameter capture.

use crate::handlers::entity::{create, delete as delete_handler, list, update};
use crate::state::AppState;
use axum::{
    routing::{get, put},
    Router,
};

pub fn entity_routes(state: AppState) -> Router {
    Router::new()
        .route("/:path_segment", get(list).post(create))
        .route("/:path_segment/:id", put(update).delete(delete_handler))
        .with_state(state)
}
