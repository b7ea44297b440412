//! ListRecommendationsHandler - category products filtered by skin type.

use std::sync::Arc;

use crate::domain::catalog::{Product, ProductCategory};
use crate::domain::foundation::DomainError;
use crate::domain::survey::SkinType;
use crate::ports::ProductReader;

/// How many recent products to pull from the store before filtering.
const FETCH_LIMIT: u32 = 10;

/// How many products to show after filtering.
const DISPLAY_LIMIT: usize = 5;

/// Query for skin-type-matched products in one category.
#[derive(Debug, Clone, Copy)]
pub struct ListRecommendationsQuery {
    pub category: ProductCategory,
    pub skin_type: SkinType,
}

/// Filtered product list plus availability of the backing store.
///
/// `store_unavailable` distinguishes "nothing matched" from "the fetch
/// failed"; the client shows a notice for the latter.
#[derive(Debug, Clone)]
pub struct RecommendationList {
    pub products: Vec<Product>,
    pub store_unavailable: bool,
}

/// Handler for recommendation queries.
pub struct ListRecommendationsHandler {
    reader: Arc<dyn ProductReader>,
}

impl ListRecommendationsHandler {
    pub fn new(reader: Arc<dyn ProductReader>) -> Self {
        Self { reader }
    }

    /// Lists up to five matching products.
    ///
    /// Fetches the ten most recent products in the category, keeps those
    /// suited to the skin type, then truncates. Truncation happens after
    /// filtering, so fewer than five may come back even when the category
    /// held ten. Fetch errors are swallowed into an empty list with the
    /// unavailable flag set; they never surface as a failure to the caller.
    pub async fn handle(&self, query: ListRecommendationsQuery) -> RecommendationList {
        let fetched = match self
            .reader
            .list_by_category(query.category, FETCH_LIMIT)
            .await
        {
            Ok(products) => products,
            Err(e) => {
                tracing::warn!(
                    category = %query.category,
                    error = %e,
                    "failed to fetch products",
                );
                return RecommendationList {
                    products: Vec::new(),
                    store_unavailable: true,
                };
            }
        };

        let products: Vec<Product> = fetched
            .into_iter()
            .filter(|p| p.suits(query.skin_type))
            .take(DISPLAY_LIMIT)
            .collect();

        RecommendationList {
            products,
            store_unavailable: false,
        }
    }
}
