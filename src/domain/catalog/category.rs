//! Product category value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One of the eight fixed product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    FoamCleanser,
    Toner,
    Lotion,
    Essence,
    Cream,
    Mask,
    Ampoule,
    Sunscreen,
}

impl ProductCategory {
    /// All categories in display order.
    pub const ALL: [ProductCategory; 8] = [
        ProductCategory::FoamCleanser,
        ProductCategory::Toner,
        ProductCategory::Lotion,
        ProductCategory::Essence,
        ProductCategory::Cream,
        ProductCategory::Mask,
        ProductCategory::Ampoule,
        ProductCategory::Sunscreen,
    ];

    /// Returns the wire/storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::FoamCleanser => "foam_cleanser",
            ProductCategory::Toner => "toner",
            ProductCategory::Lotion => "lotion",
            ProductCategory::Essence => "essence",
            ProductCategory::Cream => "cream",
            ProductCategory::Mask => "mask",
            ProductCategory::Ampoule => "ampoule",
            ProductCategory::Sunscreen => "sunscreen",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            ProductCategory::FoamCleanser => "Foam Cleanser",
            ProductCategory::Toner => "Toner",
            ProductCategory::Lotion => "Lotion",
            ProductCategory::Essence => "Essence",
            ProductCategory::Cream => "Cream",
            ProductCategory::Mask => "Mask",
            ProductCategory::Ampoule => "Ampoule",
            ProductCategory::Sunscreen => "Sunscreen",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProductCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "foam_cleanser" => Ok(ProductCategory::FoamCleanser),
            "toner" => Ok(ProductCategory::Toner),
            "lotion" => Ok(ProductCategory::Lotion),
            "essence" => Ok(ProductCategory::Essence),
            "cream" => Ok(ProductCategory::Cream),
            "mask" => Ok(ProductCategory::Mask),
            "ampoule" => Ok(ProductCategory::Ampoule),
            "sunscreen" => Ok(ProductCategory::Sunscreen),
            _ => Err(ValidationError::invalid_format(
                "category",
                format!("unknown category '{}'", s),
            )),
        }
    }
}
