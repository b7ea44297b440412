//! Row mapping shared by the product reader and repository.

use sqlx::Row;

use crate::domain::catalog::Product;
use crate::domain::foundation::{DomainError, ErrorCode, ProductId, Timestamp};
use crate::domain::survey::normalize_skin_types;

pub(super) fn db_error(context: &str, e: impl std::fmt::Display) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e))
}

/// Maps a `products` row into the domain entity.
///
/// Free-text columns may be NULL in legacy rows and load as empty strings.
/// `skin_types` and `keywords` are normalized here, at the store boundary,
/// so shape checks never leak into consumers.
pub(super) fn row_to_product(row: sqlx::postgres::PgRow) -> Result<Product, DomainError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| db_error("Failed to get id", e))?;

    let name: String = row
        .try_get("name")
        .map_err(|e| db_error("Failed to get name", e))?;

    let category_str: String = row
        .try_get("category")
        .map_err(|e| db_error("Failed to get category", e))?;
    let category = category_str
        .parse()
        .map_err(|e| db_error("Invalid category", e))?;

    let skin_types_raw: Option<Vec<String>> = row
        .try_get("skin_types")
        .map_err(|e| db_error("Failed to get skin_types", e))?;
    let skin_types = normalize_skin_types(skin_types_raw);

    let price_range: Option<String> = row
        .try_get("price_range")
        .map_err(|e| db_error("Failed to get price_range", e))?;

    let features: Option<String> = row
        .try_get("features")
        .map_err(|e| db_error("Failed to get features", e))?;

    let ingredients: Option<String> = row
        .try_get("ingredients")
        .map_err(|e| db_error("Failed to get ingredients", e))?;

    let keywords: Option<Vec<String>> = row
        .try_get("keywords")
        .map_err(|e| db_error("Failed to get keywords", e))?;

    let volume: Option<String> = row
        .try_get("volume")
        .map_err(|e| db_error("Failed to get volume", e))?;

    let purchase_url: Option<String> = row
        .try_get("purchase_url")
        .map_err(|e| db_error("Failed to get purchase_url", e))?;

    let image_url: Option<String> = row
        .try_get("image_url")
        .map_err(|e| db_error("Failed to get image_url", e))?;

    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| db_error("Failed to get created_at", e))?;

    Ok(Product {
        id: ProductId::from_uuid(id),
        name,
        category,
        skin_types,
        price_range: price_range.unwrap_or_default(),
        features: features.unwrap_or_default(),
        ingredients: ingredients.unwrap_or_default(),
        keywords: keywords.unwrap_or_default(),
        volume: volume.unwrap_or_default(),
        purchase_url,
        image_url,
        created_at: Timestamp::from_datetime(created_at),
    })
}
