//! Skin type classification value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One of the six fixed skin-type classifications.
///
/// Variant order is significant: score ties in the classifier resolve to the
/// first matching variant in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinType {
    Dry,
    Oily,
    Normal,
    Combination,
    Sensitive,
    DehydratedOily,
}

impl SkinType {
    /// All skin types in classification order.
    pub const ALL: [SkinType; 6] = [
        SkinType::Dry,
        SkinType::Oily,
        SkinType::Normal,
        SkinType::Combination,
        SkinType::Sensitive,
        SkinType::DehydratedOily,
    ];

    /// Returns the wire/storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkinType::Dry => "dry",
            SkinType::Oily => "oily",
            SkinType::Normal => "normal",
            SkinType::Combination => "combination",
            SkinType::Sensitive => "sensitive",
            SkinType::DehydratedOily => "dehydrated_oily",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            SkinType::Dry => "Dry",
            SkinType::Oily => "Oily",
            SkinType::Normal => "Normal",
            SkinType::Combination => "Combination",
            SkinType::Sensitive => "Sensitive",
            SkinType::DehydratedOily => "Dehydrated-Oily",
        }
    }
}

impl fmt::Display for SkinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SkinType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dry" => Ok(SkinType::Dry),
            "oily" => Ok(SkinType::Oily),
            "normal" => Ok(SkinType::Normal),
            "combination" => Ok(SkinType::Combination),
            "sensitive" => Ok(SkinType::Sensitive),
            "dehydrated_oily" => Ok(SkinType::DehydratedOily),
            _ => Err(ValidationError::invalid_format(
                "skin_type",
                format!("unknown skin type '{}'", s),
            )),
        }
    }
}

/// Normalizes a raw skin-type list as read from the store.
///
/// A missing list becomes empty, and entries that do not name a known skin
/// type are dropped. Consumers then filter on membership without re-checking
/// the shape of stored data.
pub fn normalize_skin_types(raw: Option<Vec<String>>) -> Vec<SkinType> {
    raw.unwrap_or_default()
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect()
}
