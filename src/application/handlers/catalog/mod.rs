//! Catalog handlers - filtered recommendation queries.

mod list_recommendations;

pub use list_recommendations::{
    ListRecommendationsHandler, ListRecommendationsQuery, RecommendationList,
};
