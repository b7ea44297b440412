//! Foundation - shared value objects and error types.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::ProductId;
pub use timestamp::Timestamp;
