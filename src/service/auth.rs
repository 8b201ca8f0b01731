//! Email/password auth over the users and sessions collections.

use crate::error::AppError;
use crate::store::{Session, Store, User};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// User view returned to clients. The stored digest never leaves the store.
#[derive(Clone, Debug, Serialize)]
pub struct PublicUser {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: PublicUser,
}

/// Unsalted single-pass SHA-256, hex-encoded. Deliberately weak, kept for
/// compatibility with digests already on disk.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

pub struct AuthService;

impl AuthService {
    /// Email uniqueness is case-insensitive; the stored email keeps the
    /// caller's casing. A session is issued immediately.
    pub async fn signup(store: &Store, email: &str, password: &str) -> Result<AuthResponse, AppError> {
        let email = email.to_string();
        let digest = hash_password(password);
        store
            .update(move |doc| {
                let needle = email.to_lowercase();
                if doc.users.iter().any(|u| u.email.to_lowercase() == needle) {
                    return Err(AppError::Conflict("user exists".into()));
                }
                let user = User {
                    id: uuid::Uuid::new_v4().to_string(),
                    email,
                    password_hash: digest,
                };
                let public = PublicUser {
                    id: user.id.clone(),
                    email: user.email.clone(),
                };
                doc.users.push(user);
                Ok(AuthResponse {
                    token: issue_session(doc, &public.id),
                    user: public,
                })
            })
            .await
    }

    /// Issues a new session on every login; older tokens stay valid.
    pub async fn login(store: &Store, email: &str, password: &str) -> Result<AuthResponse, AppError> {
        let needle = email.to_lowercase();
        let digest = hash_password(password);
        store
            .update(move |doc| {
                let user = doc
                    .users
                    .iter()
                    .find(|u| u.email.to_lowercase() == needle)
                    .filter(|u| u.password_hash == digest)
                    .cloned()
                    .ok_or_else(|| AppError::Unauthorized("invalid credentials".into()))?;
                let public = PublicUser {
                    id: user.id,
                    email: user.email,
                };
                Ok(AuthResponse {
                    token: issue_session(doc, &public.id),
                    user: public,
                })
            })
            .await
    }

    /// Resolves a token to its user. A token whose session or user is gone
    /// is indistinguishable from an unknown one.
    pub async fn current_user(store: &Store, token: &str) -> Result<PublicUser, AppError> {
        let doc = store.read().await?;
        let session = doc
            .sessions
            .iter()
            .find(|s| s.token == token)
            .ok_or_else(|| AppError::Unauthorized("invalid token".into()))?;
        let user = doc
            .users
            .iter()
            .find(|u| u.id == session.user_id)
            .ok_or_else(|| AppError::Unauthorized("invalid token".into()))?;
        Ok(PublicUser {
            id: user.id.clone(),
            email: user.email.clone(),
        })
    }
}

fn issue_session(doc: &mut crate::store::Document, user_id: &str) -> String {
    let token = uuid::Uuid::new_v4().to_string();
    doc.sessions.push(Session {
        token: token.clone(),
        user_id: user_id.to_string(),
        created_at: chrono::Utc::now().timestamp_millis(),
    });
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_deterministic_and_unsalted() {
        assert_eq!(hash_password("secret"), hash_password("secret"));
        assert_eq!(
            hash_password("secret"),
            "2bb80d537b1da3e38bd30361aa855686bde0eacd7162fef6a25fe97bf527a25b"
        );
        assert_ne!(hash_password("secret"), hash_password("Secret"));
    }

    #[tokio::test]
    async fn login_keeps_old_sessions_valid() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("db.json"));
        let first = AuthService::signup(&store, "a@x.com", "pw").await.unwrap();
        let second = AuthService::login(&store, "a@x.com", "pw").await.unwrap();
        assert_ne!(first.token, second.token);
        assert!(AuthService::current_user(&store, &first.token).await.is_ok());
        assert!(AuthService::current_user(&store, &second.token).await.is_ok());
    }

    #[tokio::test]
    async fn dangling_session_is_unauthorized() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("db.json"));
        let signed = AuthService::signup(&store, "a@x.com", "pw").await.unwrap();
        store
            .update(|doc| {
                doc.users.clear();
                Ok(())
            })
            .await
            .unwrap();
        let err = AuthService::current_user(&store, &signed.token).await.unwrap_err();
        assert_eq!(err.to_string(), "invalid token");
    }
}
