//! Route definitions for the campaign resource.
//!
//! Mounted at `/campaigns` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::campaigns;
use crate::state::AppState;

/// Campaign routes.
///
/// ```text
/// GET    /stats -> campaign_stats
/// GET    /      -> list_campaigns (?page, limit, search, status)
/// POST   /      -> create_campaign
/// PUT    /      -> update_campaign (id in body)
/// DELETE /      -> delete_campaign (?id)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(campaigns::campaign_stats))
        .route(
            "/",
            get(campaigns::list_campaigns)
                .post(campaigns::create_campaign)
                .put(campaigns::update_campaign)
                .delete(campaigns::delete_campaign),
        )
}
