//! Product repository port (write side).
//!
//! Single-row create/update/delete against the product table. Each mutation
//! stands alone; the store's own row atomicity is the only guarantee relied
//! upon.

use async_trait::async_trait;

use crate::domain::catalog::Product;
use crate::domain::foundation::{DomainError, ProductId};

/// Write port for catalog products.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Inserts a new product.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, product: &Product) -> Result<(), DomainError>;

    /// Updates an existing product.
    ///
    /// # Errors
    ///
    /// - `ProductNotFound` if no row matches the id
    /// - `DatabaseError` on persistence failure
    async fn update(&self, product: &Product) -> Result<(), DomainError>;

    /// Deletes a product by id.
    ///
    /// # Errors
    ///
    /// - `ProductNotFound` if no row matches the id
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &ProductId) -> Result<(), DomainError>;
}
