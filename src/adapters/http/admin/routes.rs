//! HTTP routes for admin endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{
    create_product, delete_product, list_products, login, update_product, AdminHandlers,
};

/// Creates the admin router with all endpoints.
pub fn admin_routes(handlers: AdminHandlers) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/products", get(list_products))
        .route("/products", post(create_product))
        .route("/products/:id", put(update_product))
        .route("/products/:id", delete(delete_product))
        .with_state(handlers)
}
