pub mod campaigns;
pub mod health;
pub mod leads;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree, mounted at the application root.
///
/// Route hierarchy (all routes require a valid session cookie):
///
/// ```text
/// /leads                 list, create, update, delete
/// /campaigns             list, create, update, delete
/// /campaigns/stats       dashboard aggregate
/// ```
///
/// `/health` is mounted separately by the router and stays public.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Lead collection and mutations.
        .nest("/leads", leads::router())
        // Campaign collection, mutations, and stats.
        .nest("/campaigns", campaigns::router())
}
