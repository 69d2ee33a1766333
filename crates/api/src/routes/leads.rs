//! Route definitions for the lead resource.
//!
//! Mounted at `/leads` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::leads;
use crate::state::AppState;

/// Lead routes.
///
/// ```text
/// GET    /    -> list_leads (?page, limit, search, status)
/// POST   /    -> create_lead
/// PUT    /    -> update_lead (id in body)
/// DELETE /    -> delete_lead (?id)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(leads::list_leads)
            .post(leads::create_lead)
            .put(leads::update_lead)
            .delete(leads::delete_lead),
    )
}
