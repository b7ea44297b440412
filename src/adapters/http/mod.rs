//! HTTP adapters - REST API implementations.
//!
//! Each domain area has its own HTTP module with DTOs, handlers, and routes.

pub mod admin;
pub mod catalog;
pub mod error;
pub mod survey;

use axum::Router;

pub use admin::AdminHandlers;
pub use catalog::CatalogHandlers;
pub use survey::SurveyHandlers;

/// Composes the full API router.
pub fn api_router(
    survey: SurveyHandlers,
    catalog: CatalogHandlers,
    admin: AdminHandlers,
) -> Router {
    Router::new()
        .nest("/api/survey", survey::survey_routes(survey))
        .nest("/api/recommendations", catalog::catalog_routes(catalog))
        .nest("/api/admin", admin::admin_routes(admin))
}
