//! HTTP DTOs for recommendation endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{join_keywords, Product};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Query parameters for the recommendation listing.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationParams {
    pub category: String,
    pub skin_type: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One product as shown on the comparison screen.
#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub category: String,
    pub skin_types: Vec<String>,
    pub price_range: String,
    pub features: String,
    pub ingredients: String,
    pub keywords: Vec<String>,
    pub keywords_text: String,
    pub volume: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let keywords_text = join_keywords(&product.keywords);
        Self {
            id: product.id.to_string(),
            name: product.name,
            category: product.category.as_str().to_string(),
            skin_types: product
                .skin_types
                .iter()
                .map(|t| t.as_str().to_string())
                .collect(),
            price_range: product.price_range,
            features: product.features,
            ingredients: product.ingredients,
            keywords: product.keywords,
            keywords_text,
            volume: product.volume,
            purchase_url: product.purchase_url,
            image_url: product.image_url,
            created_at: product.created_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Recommendation listing with the store-availability notice.
///
/// `notice` is set when the backing store could not be reached; the list is
/// then empty rather than an error.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationListResponse {
    pub products: Vec<ProductResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}
