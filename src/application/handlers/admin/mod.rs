//! Admin handlers - catalog management behind the password gate.

mod authenticate_admin;
mod create_product;
mod delete_product;
mod list_products;
mod update_product;

pub use authenticate_admin::{AuthenticateAdminCommand, AuthenticateAdminHandler};
pub use create_product::{CreateProductCommand, CreateProductHandler};
pub use delete_product::{DeleteProductCommand, DeleteProductHandler};
pub use list_products::ListProductsHandler;
pub use update_product::{UpdateProductCommand, UpdateProductHandler};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{PreferenceStore, StorageScope, ADMIN_AUTHENTICATED_KEY};

/// Requires the session admin flag before any catalog mutation or listing.
pub(crate) async fn ensure_admin(store: &dyn PreferenceStore) -> Result<(), DomainError> {
    let flag = store
        .get(StorageScope::Session, ADMIN_AUTHENTICATED_KEY)
        .await?;

    if flag.as_deref() == Some("true") {
        Ok(())
    } else {
        Err(DomainError::new(
            ErrorCode::Forbidden,
            "Admin authentication required",
        ))
    }
}
