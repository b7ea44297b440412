//! DeleteProductHandler - removes a catalog product.

use std::sync::Arc;

use crate::domain::catalog::Product;
use crate::domain::foundation::{DomainError, ProductId};
use crate::ports::{PreferenceStore, ProductReader, ProductRepository};

use super::ensure_admin;

/// Command identifying the product to delete.
#[derive(Debug, Clone, Copy)]
pub struct DeleteProductCommand {
    pub id: ProductId,
}

/// Handler for product deletion.
pub struct DeleteProductHandler {
    repository: Arc<dyn ProductRepository>,
    reader: Arc<dyn ProductReader>,
    store: Arc<dyn PreferenceStore>,
}

impl DeleteProductHandler {
    pub fn new(
        repository: Arc<dyn ProductRepository>,
        reader: Arc<dyn ProductReader>,
        store: Arc<dyn PreferenceStore>,
    ) -> Self {
        Self {
            repository,
            reader,
            store,
        }
    }

    pub async fn handle(&self, cmd: DeleteProductCommand) -> Result<Vec<Product>, DomainError> {
        ensure_admin(self.store.as_ref()).await?;

        self.repository.delete(&cmd.id).await?;

        tracing::info!(product_id = %cmd.id, "product deleted");

        self.reader.list_all().await
    }
}
