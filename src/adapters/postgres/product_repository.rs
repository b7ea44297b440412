//! PostgreSQL implementation of ProductRepository.
//!
//! Persists product entities to PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::catalog::Product;
use crate::domain::foundation::{DomainError, ErrorCode, ProductId};
use crate::ports::ProductRepository;

use super::row::db_error;

/// PostgreSQL implementation of ProductRepository.
#[derive(Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    /// Creates a new PostgresProductRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn skin_types_to_strings(product: &Product) -> Vec<String> {
    product
        .skin_types
        .iter()
        .map(|t| t.as_str().to_string())
        .collect()
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn insert(&self, product: &Product) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO products (
                id, name, category, skin_types, price_range, features,
                ingredients, keywords, volume, purchase_url, image_url, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(product.id.as_uuid())
        .bind(&product.name)
        .bind(product.category.as_str())
        .bind(skin_types_to_strings(product))
        .bind(&product.price_range)
        .bind(&product.features)
        .bind(&product.ingredients)
        .bind(&product.keywords)
        .bind(&product.volume)
        .bind(&product.purchase_url)
        .bind(&product.image_url)
        .bind(product.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to insert product", e))?;

        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = $2,
                category = $3,
                skin_types = $4,
                price_range = $5,
                features = $6,
                ingredients = $7,
                keywords = $8,
                volume = $9,
                purchase_url = $10,
                image_url = $11
            WHERE id = $1
            "#,
        )
        .bind(product.id.as_uuid())
        .bind(&product.name)
        .bind(product.category.as_str())
        .bind(skin_types_to_strings(product))
        .bind(&product.price_range)
        .bind(&product.features)
        .bind(&product.ingredients)
        .bind(&product.keywords)
        .bind(&product.volume)
        .bind(&product.purchase_url)
        .bind(&product.image_url)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to update product", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ProductNotFound,
                format!("Product not found: {}", product.id),
            ));
        }

        Ok(())
    }

    async fn delete(&self, id: &ProductId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete product", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ProductNotFound,
                format!("Product not found: {}", id),
            ));
        }

        Ok(())
    }
}
