//! Catalog domain - cosmetic products and their classification metadata.

mod category;
mod keywords;
mod product;

pub use category::ProductCategory;
pub use keywords::{join_keywords, parse_keywords};
pub use product::{Product, ProductDraft};
