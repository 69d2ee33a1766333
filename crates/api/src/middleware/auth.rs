//! Session-cookie authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use leadhq_core::error::CoreError;
use leadhq_core::types::DbId;
use sha2::{Digest, Sha256};

use leadhq_db::repositories::SessionRepo;

use crate::error::AppError;
use crate::state::AppState;

pub use leadhq_core::sessions::SESSION_COOKIE;

/// Authenticated session extracted from the request's session cookie.
///
/// The cookie value is hashed and looked up in the `sessions` table;
/// only unexpired rows authenticate. Use this as an extractor parameter
/// in any handler that requires authentication:
///
/// ```ignore
/// async fn my_handler(auth: AuthSession) -> AppResult<Json<()>> {
///     tracing::info!(user_id = auth.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// The identity provider's user id for this session.
    pub user_id: DbId,
}

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let cookie_header = parts
            .headers
            .get("cookie")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Missing session cookie".into()))
            })?;

        let token = cookie_value(cookie_header, SESSION_COOKIE).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Missing session cookie".into()))
        })?;

        let session = SessionRepo::find_by_token_hash(&state.pool, &hash_session_token(token))
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Invalid or expired session".into()))
            })?;

        Ok(AuthSession {
            user_id: session.user_id,
        })
    }
}

/// Extract a named cookie's value from a `Cookie` header.
fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

/// Compute the SHA-256 hex digest of a session token.
///
/// Use this to compare an incoming cookie value against the stored hash.
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_value_finds_named_cookie() {
        let header = "theme=dark; leadhq_session=abc123; lang=en";
        assert_eq!(cookie_value(header, SESSION_COOKIE), Some("abc123"));
    }

    #[test]
    fn cookie_value_ignores_other_cookies() {
        assert_eq!(cookie_value("theme=dark; lang=en", SESSION_COOKIE), None);
        assert_eq!(cookie_value("", SESSION_COOKIE), None);
        // Name must match exactly, not as a prefix.
        assert_eq!(cookie_value("leadhq_session2=abc", SESSION_COOKIE), None);
    }

    #[test]
    fn hash_is_stable_hex() {
        let hash = hash_session_token("token");
        assert_eq!(hash.len(), 64);
        assert_eq!(hash, hash_session_token("token"));
        assert_ne!(hash, hash_session_token("other"));
    }
}
