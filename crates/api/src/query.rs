//! Shared query parameter types for API handlers.

use leadhq_core::types::DbId;
use serde::Deserialize;

use crate::error::AppError;

/// List parameters common to both entity listings
/// (`?page=&limit=&search=&status=`).
///
/// `page` and `limit` stay raw strings here; `leadhq_core::pagination`
/// parses them defensively, so junk input degrades to defaults instead
/// of failing the request.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
    pub status: Option<String>,
}

impl ListParams {
    /// The search term, with the empty string treated as no filter.
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }

    /// The status filter, with the empty string treated as no filter.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref().filter(|s| !s.is_empty())
    }
}

/// Delete parameters (`?id=`).
///
/// The id arrives as a raw string so that absence and malformed values
/// both map to a clear 400 instead of a deserialization error.
#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    pub id: Option<String>,
}

impl DeleteParams {
    /// The target id, or a 400 when absent or not an integer.
    pub fn require_id(&self) -> Result<DbId, AppError> {
        let raw = self
            .id
            .as_deref()
            .ok_or_else(|| AppError::BadRequest("ID is required".into()))?;
        raw.trim()
            .parse()
            .map_err(|_| AppError::BadRequest("ID must be an integer".into()))
    }
}
