//! Session model and DTOs.
//!
//! Sessions are written by the external identity provider; this service
//! only reads them to authenticate requests, so the row never crosses
//! the wire and carries no serde derives.

use leadhq_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A session row from the `sessions` table.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub user_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for inserting a session (tests and seed tooling).
pub struct CreateSession {
    pub user_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
}
