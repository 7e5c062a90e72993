// Persistence adapters for the ProductRepository port.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryProductRepository;
pub use postgres::{DatabaseConfig, PostgresProductRepository};
