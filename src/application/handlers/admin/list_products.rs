//! ListProductsHandler - full catalog listing for the admin dashboard.

use std::sync::Arc;

use crate::domain::catalog::Product;
use crate::domain::foundation::DomainError;
use crate::ports::{PreferenceStore, ProductReader};

use super::ensure_admin;

/// Handler for the admin product listing.
pub struct ListProductsHandler {
    reader: Arc<dyn ProductReader>,
    store: Arc<dyn PreferenceStore>,
}

impl ListProductsHandler {
    pub fn new(reader: Arc<dyn ProductReader>, store: Arc<dyn PreferenceStore>) -> Self {
        Self { reader, store }
    }

    /// Lists every product, newest first.
    pub async fn handle(&self) -> Result<Vec<Product>, DomainError> {
        ensure_admin(self.store.as_ref()).await?;
        self.reader.list_all().await
    }
}
