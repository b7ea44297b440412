//! PostgreSQL implementation of ProductReader.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::catalog::{Product, ProductCategory};
use crate::domain::foundation::DomainError;
use crate::ports::ProductReader;

use super::row::{db_error, row_to_product};

/// Reads products from PostgreSQL.
#[derive(Clone)]
pub struct PostgresProductReader {
    pool: PgPool,
}

impl PostgresProductReader {
    /// Creates a new PostgresProductReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductReader for PostgresProductReader {
    async fn list_by_category(
        &self,
        category: ProductCategory,
        limit: u32,
    ) -> Result<Vec<Product>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, category, skin_types, price_range, features,
                   ingredients, keywords, volume, purchase_url, image_url, created_at
            FROM products
            WHERE category = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(category.as_str())
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch products by category", e))?;

        rows.into_iter().map(row_to_product).collect()
    }

    async fn list_all(&self) -> Result<Vec<Product>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, category, skin_types, price_range, features,
                   ingredients, keywords, volume, purchase_url, image_url, created_at
            FROM products
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch products", e))?;

        rows.into_iter().map(row_to_product).collect()
    }
}
