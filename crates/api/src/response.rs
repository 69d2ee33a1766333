//! Shared response envelope types for API handlers.
//!
//! Single records travel as `{ "data": ... }` via [`DataResponse`];
//! listings add a pagination block via [`Paginated`]. Use these instead
//! of ad-hoc `serde_json::json!` so the wire shape stays consistent.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Listing envelope: `{ "data": [...], "pagination": {...} }`.
#[derive(Debug, Serialize)]
pub struct Paginated<T: Serialize> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

/// Pagination block attached to every listing response.
///
/// `has_more` serializes as `hasMore`, the one camelCase field the wire
/// contract pins.
#[derive(Debug, Serialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    #[serde(rename = "hasMore")]
    pub has_more: bool,
    pub total: i64,
}

/// `{ "success": true }` body returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}
