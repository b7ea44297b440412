//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.

mod preference_store;
mod product_reader;
mod product_repository;

pub use preference_store::{
    PreferenceStore, StorageScope, ADMIN_AUTHENTICATED_KEY, SKIN_TYPE_KEY, SURVEY_COMPLETED_KEY,
};
pub use product_reader::ProductReader;
pub use product_repository::ProductRepository;
