//! HTTP routes for recommendation endpoints.

use axum::{routing::get, Router};

use super::handlers::{list_recommendations, CatalogHandlers};

/// Creates the recommendation router.
pub fn catalog_routes(handlers: CatalogHandlers) -> Router {
    Router::new()
        .route("/", get(list_recommendations))
        .with_state(handlers)
}
