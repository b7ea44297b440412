//! PostgreSQL adapters for the product ports.

mod product_reader;
mod product_repository;
mod row;

pub use product_reader::PostgresProductReader;
pub use product_repository::PostgresProductRepository;
