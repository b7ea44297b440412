//! CreateProductHandler - registers a new catalog product.

use std::sync::Arc;

use crate::domain::catalog::{Product, ProductDraft};
use crate::domain::foundation::{DomainError, ProductId, Timestamp};
use crate::ports::{PreferenceStore, ProductReader, ProductRepository};

use super::ensure_admin;

/// Command carrying the submitted product form.
#[derive(Debug, Clone)]
pub struct CreateProductCommand {
    pub draft: ProductDraft,
}

/// Handler for product creation.
///
/// On success the full list is re-fetched and returned; on failure the
/// caller's view stays unchanged. No optimistic update, no rollback beyond
/// the store's single-row atomicity.
pub struct CreateProductHandler {
    repository: Arc<dyn ProductRepository>,
    reader: Arc<dyn ProductReader>,
    store: Arc<dyn PreferenceStore>,
}

impl CreateProductHandler {
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

    pub async fn handle(&self, cmd: CreateProductCommand) -> Result<Vec<Product>, DomainError> {
        ensure_admin(self.store.as_ref()).await?;
        cmd.draft.validate()?;

        let product = Product::from_draft(ProductId::new(), cmd.draft, Timestamp::now());
        self.repository.insert(&product).await?;

        tracing::info!(product_id = %product.id, "product created");

        self.reader.list_all().await
    }
}
