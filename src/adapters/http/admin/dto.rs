//! HTTP DTOs for admin endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::catalog::dto::ProductResponse;
use crate::domain::catalog::{parse_keywords, Product, ProductCategory, ProductDraft};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::survey::SkinType;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to authenticate as admin.
#[derive(Clone, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Product form as submitted from the admin screen.
///
/// `keywords` arrives as free text; it is split on commas here, at the
/// boundary. Optional text fields default to empty.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub skin_types: Vec<String>,
    #[serde(default)]
    pub price_range: String,
    #[serde(default)]
    pub features: String,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub volume: String,
    pub purchase_url: Option<String>,
    pub image_url: Option<String>,
}

impl ProductForm {
    /// Converts the form into a domain draft, rejecting unknown wire values.
    pub fn into_draft(self) -> Result<ProductDraft, DomainError> {
        let category = self.category.parse::<ProductCategory>().map_err(|_| {
            DomainError::new(
                ErrorCode::InvalidFormat,
                format!("Unknown category: {}", self.category),
            )
        })?;

        let mut skin_types = Vec::with_capacity(self.skin_types.len());
        for raw in &self.skin_types {
            let skin_type = raw.parse::<SkinType>().map_err(|_| {
                DomainError::new(
                    ErrorCode::InvalidFormat,
                    format!("Unknown skin type: {}", raw),
                )
            })?;
            skin_types.push(skin_type);
        }

        Ok(ProductDraft {
            name: self.name,
            category,
            skin_types,
            price_range: self.price_range,
            features: self.features,
            ingredients: self.ingredients,
            keywords: parse_keywords(&self.keywords),
            volume: self.volume,
            purchase_url: self.purchase_url.filter(|u| !u.trim().is_empty()),
            image_url: self.image_url.filter(|u| !u.trim().is_empty()),
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for admin login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub authenticated: bool,
}

/// Full product list, as shown on the admin screen.
#[derive(Debug, Clone, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<ProductResponse>,
}

impl ProductListResponse {
    pub fn from_products(products: Vec<Product>) -> Self {
        Self {
            products: products.into_iter().map(ProductResponse::from).collect(),
        }
    }
}
