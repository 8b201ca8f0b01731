//! Extract the bearer token from the Authorization header.

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Optional bearer token. Absent or empty headers yield `None`; a header
/// without the `Bearer ` prefix is passed through as-is.
#[derive(Clone, Debug)]
pub struct BearerToken(pub Option<String>);

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.replacen("Bearer ", "", 1))
            .filter(|s| !s.is_empty());
        Ok(BearerToken(value))
    }
}
