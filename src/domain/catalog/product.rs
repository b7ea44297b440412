//! Product entity and its editable draft form.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ProductId, Timestamp, ValidationError};
use crate::domain::survey::SkinType;

use super::ProductCategory;

/// A catalog product as stored in the remote table.
///
/// The store owns this record entirely; the rest of the system only reads
/// and filters it. `skin_types` is always normalized at the store boundary,
/// so consumers can filter on membership without shape checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: ProductCategory,
    pub skin_types: Vec<SkinType>,
    pub price_range: String,
    pub features: String,
    pub ingredients: String,
    pub keywords: Vec<String>,
    pub volume: String,
    pub purchase_url: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
}

impl Product {
    /// Builds a product from a validated draft.
    pub fn from_draft(id: ProductId, draft: ProductDraft, created_at: Timestamp) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            skin_types: draft.skin_types,
            price_range: draft.price_range,
            features: draft.features,
            ingredients: draft.ingredients,
            keywords: draft.keywords,
            volume: draft.volume,
            purchase_url: draft.purchase_url,
            image_url: draft.image_url,
            created_at,
        }
    }

    /// Returns true when the product applies to the given skin type.
    pub fn suits(&self, skin_type: SkinType) -> bool {
        self.skin_types.contains(&skin_type)
    }
}

/// Editable product fields, as submitted from the admin form.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub category: ProductCategory,
    pub skin_types: Vec<SkinType>,
    pub price_range: String,
    pub features: String,
    pub ingredients: String,
    pub keywords: Vec<String>,
    pub volume: String,
    pub purchase_url: Option<String>,
    pub image_url: Option<String>,
}

impl ProductDraft {
    /// Validates required fields.
    ///
    /// Only `name` needs checking here; `category` is required by type.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(())
    }
}
