//! Product reader port (read side).
//!
//! Read-only queries over the product table. The recommendation screen and
//! the admin dashboard both list through this port.

use async_trait::async_trait;

use crate::domain::catalog::{Product, ProductCategory};
use crate::domain::foundation::DomainError;

/// Read port for catalog products.
#[async_trait]
pub trait ProductReader: Send + Sync {
    /// Lists the most recently created products in a category.
    ///
    /// Results are ordered by creation time descending and capped at `limit`.
    /// Records with missing or malformed skin-type lists come back with an
    /// empty normalized list, never as errors.
    async fn list_by_category(
        &self,
        category: ProductCategory,
        limit: u32,
    ) -> Result<Vec<Product>, DomainError>;

    /// Lists every product, ordered by creation time descending.
    async fn list_all(&self) -> Result<Vec<Product>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn ProductReader) {}
    }
}
