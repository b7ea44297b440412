//! HTTP handlers for recommendation endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::application::handlers::catalog::{ListRecommendationsHandler, ListRecommendationsQuery};
use crate::domain::catalog::ProductCategory;
use crate::domain::survey::SkinType;

use super::dto::{ProductResponse, RecommendationListResponse, RecommendationParams};

const STORE_UNAVAILABLE_NOTICE: &str =
    "Product information is temporarily unavailable. Please try again later.";

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct CatalogHandlers {
    list_handler: Arc<ListRecommendationsHandler>,
}

impl CatalogHandlers {
    pub fn new(list_handler: Arc<ListRecommendationsHandler>) -> Self {
        Self { list_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/recommendations?category=...&skin_type=... - Matched products
pub async fn list_recommendations(
    State(handlers): State<CatalogHandlers>,
    Query(params): Query<RecommendationParams>,
) -> Response {
    let category = match params.category.parse::<ProductCategory>() {
        Ok(category) => category,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(format!(
                    "Unknown category: {}",
                    params.category
                ))),
            )
                .into_response()
        }
    };

    let skin_type = match params.skin_type.parse::<SkinType>() {
        Ok(skin_type) => skin_type,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(format!(
                    "Unknown skin type: {}",
                    params.skin_type
                ))),
            )
                .into_response()
        }
    };

    let query = ListRecommendationsQuery {
        category,
        skin_type,
    };
    let list = handlers.list_handler.handle(query).await;

    let response = RecommendationListResponse {
        products: list.products.into_iter().map(ProductResponse::from).collect(),
        notice: list
            .store_unavailable
            .then(|| STORE_UNAVAILABLE_NOTICE.to_string()),
    };
    (StatusCode::OK, Json(response)).into_response()
}
