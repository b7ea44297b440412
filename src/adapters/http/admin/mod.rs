//! HTTP adapter for the admin endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::AdminHandlers;
pub use routes::admin_routes;
