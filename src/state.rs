//! Shared application state for all routes.

use crate::store::Store;
use std::path::PathBuf;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub upload_dir: PathBuf,
}
