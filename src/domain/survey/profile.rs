//! Per-skin-type report content shown after classification.

use serde::Serialize;

use super::SkinType;

/// Static care report for one skin type.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkinTypeProfile {
    pub description: &'static str,
    pub tips: &'static [&'static str],
    pub recommended_ingredients: &'static [&'static str],
    pub avoid_ingredients: &'static [&'static str],
}

impl SkinTypeProfile {
    /// Returns the report for a skin type.
    pub fn for_skin_type(skin_type: SkinType) -> &'static SkinTypeProfile {
        match skin_type {
            SkinType::Dry => &DRY,
            SkinType::Oily => &OILY,
            SkinType::Normal => &NORMAL,
            SkinType::Combination => &COMBINATION,
            SkinType::Sensitive => &SENSITIVE,
            SkinType::DehydratedOily => &DEHYDRATED_OILY,
        }
    }
}

static DRY: SkinTypeProfile = SkinTypeProfile {
    description: "Dry skin lacks both moisture and oil at the surface. It \
        often feels tight after cleansing, flakes easily, and fine lines form \
        quickly.",
    tips: &[
        "Choose products focused on hydration",
        "Use oil or cream textures",
        "Sun protection is essential",
    ],
    recommended_ingredients: &[
        "Hyaluronic acid",
        "Ceramides",
        "Glycerin",
        "Squalane",
        "Shea butter",
    ],
    avoid_ingredients: &[
        "Alcohol",
        "High-strength AHAs",
        "Benzoyl peroxide",
        "Salicylic acid",
    ],
};

static OILY: SkinTypeProfile = SkinTypeProfile {
    description: "Oily skin produces excess sebum, leaving a persistent shine. \
        Pores are enlarged and blackheads and whiteheads appear often.",
    tips: &[
        "Choose products that regulate oil",
        "Use lightweight textures",
        "Exfoliate regularly",
    ],
    recommended_ingredients: &[
        "Salicylic acid",
        "Tea tree",
        "Niacinamide",
        "Retinol",
        "Clay",
    ],
    avoid_ingredients: &["Coconut oil", "Shea butter", "Mineral oil", "Lanolin"],
};

static NORMAL: SkinTypeProfile = SkinTypeProfile {
    description: "Normal skin keeps a stable balance of moisture and oil. It \
        is neither particularly dry nor shiny.",
    tips: &[
        "Maintain a balanced skincare routine",
        "Adjust products by season",
        "Keep up basic hydration",
    ],
    recommended_ingredients: &[
        "Hyaluronic acid",
        "Niacinamide",
        "Vitamin C",
        "Peptides",
        "Green tea extract",
    ],
    avoid_ingredients: &[
        "Excessive alcohol",
        "Harsh exfoliants",
        "High-strength retinol",
    ],
};

static COMBINATION: SkinTypeProfile = SkinTypeProfile {
    description: "Combination skin mixes an oily T-zone (forehead and nose) \
        with dry cheeks. Its condition can shift sharply with the seasons.",
    tips: &[
        "Treat each zone separately",
        "Control oil on the T-zone, hydrate the cheeks",
        "Swap products seasonally",
    ],
    recommended_ingredients: &[
        "Hyaluronic acid",
        "Salicylic acid",
        "Niacinamide",
        "Vitamin C",
        "Green tea extract",
    ],
    avoid_ingredients: &[
        "Coconut oil",
        "Heavy oils",
        "Strong alcohol",
        "High-strength AHAs",
    ],
};

static SENSITIVE: SkinTypeProfile = SkinTypeProfile {
    description: "Sensitive skin reacts readily to external irritants, turning \
        red or itchy, and breaks out easily when products change.",
    tips: &[
        "Choose gentle formulations",
        "Avoid common allergens",
        "Patch test before use",
    ],
    recommended_ingredients: &[
        "Panthenol",
        "Centella extract",
        "Allantoin",
        "Ceramides",
        "Chamomile extract",
    ],
    avoid_ingredients: &[
        "Artificial fragrance",
        "Ethanol",
        "Parabens",
        "Sulfates",
        "Retinol",
    ],
};

static DEHYDRATED_OILY: SkinTypeProfile = SkinTypeProfile {
    description: "Dehydrated-oily skin is dry underneath but looks oily on the \
        surface. The lack of moisture drives excess sebum production.",
    tips: &[
        "Focus on replenishing moisture",
        "Use oil-free products",
        "Strengthen hydration layers",
    ],
    recommended_ingredients: &[
        "Hyaluronic acid",
        "Glycerin",
        "Allantoin",
        "Green tea extract",
        "Niacinamide",
    ],
    avoid_ingredients: &[
        "Coconut oil",
        "Shea butter",
        "Mineral oil",
        "Alcohol",
        "Heavy oils",
    ],
};
