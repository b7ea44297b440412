//! HTTP handlers for admin endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, ErrorResponse};
use crate::application::handlers::admin::{
    AuthenticateAdminCommand, AuthenticateAdminHandler, CreateProductCommand,
    CreateProductHandler, DeleteProductCommand, DeleteProductHandler, ListProductsHandler,
    UpdateProductCommand, UpdateProductHandler,
};
use crate::domain::foundation::ProductId;

use super::dto::{LoginRequest, LoginResponse, ProductForm, ProductListResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AdminHandlers {
    authenticate_handler: Arc<AuthenticateAdminHandler>,
    list_handler: Arc<ListProductsHandler>,
    create_handler: Arc<CreateProductHandler>,
    update_handler: Arc<UpdateProductHandler>,
    delete_handler: Arc<DeleteProductHandler>,
}

impl AdminHandlers {
    pub fn new(
        authenticate_handler: Arc<AuthenticateAdminHandler>,
        list_handler: Arc<ListProductsHandler>,
        create_handler: Arc<CreateProductHandler>,
        update_handler: Arc<UpdateProductHandler>,
        delete_handler: Arc<DeleteProductHandler>,
    ) -> Self {
        Self {
            authenticate_handler,
            list_handler,
            create_handler,
            update_handler,
            delete_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/admin/login - Authenticate with the admin password
pub async fn login(
    State(handlers): State<AdminHandlers>,
    Json(req): Json<LoginRequest>,
) -> Response {
    let cmd = AuthenticateAdminCommand {
        password: req.password,
    };

    match handlers.authenticate_handler.handle(cmd).await {
        Ok(()) => (
            StatusCode::OK,
            Json(LoginResponse {
                authenticated: true,
            }),
        )
            .into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/admin/products - Full product list
pub async fn list_products(State(handlers): State<AdminHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(products) => (
            StatusCode::OK,
            Json(ProductListResponse::from_products(products)),
        )
            .into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/admin/products - Register a new product
pub async fn create_product(
    State(handlers): State<AdminHandlers>,
    Json(form): Json<ProductForm>,
) -> Response {
    let draft = match form.into_draft() {
        Ok(draft) => draft,
        Err(e) => return domain_error_response(e),
    };

    let cmd = CreateProductCommand { draft };

    match handlers.create_handler.handle(cmd).await {
        Ok(products) => (
            StatusCode::CREATED,
            Json(ProductListResponse::from_products(products)),
        )
            .into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// PUT /api/admin/products/:id - Edit an existing product
pub async fn update_product(
    State(handlers): State<AdminHandlers>,
    Path(id): Path<String>,
    Json(form): Json<ProductForm>,
) -> Response {
    let id = match id.parse::<ProductId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid product ID")),
            )
                .into_response()
        }
    };

    let draft = match form.into_draft() {
        Ok(draft) => draft,
        Err(e) => return domain_error_response(e),
    };

    let cmd = UpdateProductCommand { id, draft };

    match handlers.update_handler.handle(cmd).await {
        Ok(products) => (
            StatusCode::OK,
            Json(ProductListResponse::from_products(products)),
        )
            .into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/admin/products/:id - Remove a product
pub async fn delete_product(
    State(handlers): State<AdminHandlers>,
    Path(id): Path<String>,
) -> Response {
    let id = match id.parse::<ProductId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid product ID")),
            )
                .into_response()
        }
    };

    let cmd = DeleteProductCommand { id };

    match handlers.delete_handler.handle(cmd).await {
        Ok(products) => (
            StatusCode::OK,
            Json(ProductListResponse::from_products(products)),
        )
            .into_response(),
        Err(e) => domain_error_response(e),
    }
}
