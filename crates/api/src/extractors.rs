//! Request extractors.

use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use serde_json::json;

/// Extractor for the opaque session token the admin SPA sends in the
/// `token` header. The token is forwarded to the commerce backend as-is;
/// this service never validates or stores it.
///
/// Use this in handlers:
///
/// ```ignore
/// async fn handler(token: SessionToken) -> impl IntoResponse {
///     let token = token.as_str();
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SessionToken(String);

impl SessionToken {
    /// Returns the raw token value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get("token")
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(|value| Self(value.to_string()))
            .ok_or_else(|| {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({
                        "error": "unauthorized",
                        "message": "Session token header is required"
                    })),
                )
            })
    }
}
