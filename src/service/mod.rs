//! Services: generic CRUD, auth, uploads, and write-time checks.

mod auth;
mod crud;
mod upload;
mod validation;

pub use auth::{hash_password, AuthResponse, AuthService, PublicUser};
pub use crud::CrudService;
pub use upload::{stored_filename, StoredFile, UploadService};
pub use validation::WriteCheck;
