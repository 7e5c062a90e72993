// Product Catalog - Infrastructure Layer
// Repository adapters behind the domain's ProductRepository port:
// - persistence::memory: in-memory store, used by tests and database-less runs
// - persistence::postgres: PostgreSQL store via sqlx

pub mod persistence;

pub use persistence::{
    DatabaseConfig, InMemoryProductRepository, PostgresProductRepository,
};
