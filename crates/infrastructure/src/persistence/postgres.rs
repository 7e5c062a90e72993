//! PostgreSQL ProductRepository
//!
//! Persistent adapter for the product store, backed by sqlx.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;

use catalog_domain::{DomainError, NewProduct, Product, ProductId, ProductRepository, Result};

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connection_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(url: String, max_connections: u32, connection_timeout: Duration) -> Self {
        Self {
            url,
            max_connections,
            connection_timeout,
        }
    }
}

/// PostgreSQL product repository.
///
/// Every statement runs on the pool in autocommit mode, so each operation is
/// atomic on its own and `commit` has nothing left to flush.
#[derive(Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    /// Create new repository with an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create repository connecting to the database.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connection_timeout)
            .connect(&config.url)
            .await
            .map_err(|e| DomainError::Repository {
                message: format!("Failed to connect to database: {}", e),
            })?;

        Ok(Self { pool })
    }

    /// Create the products table if it does not exist yet.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                barcode TEXT NOT NULL,
                description TEXT NOT NULL,
                rate NUMERIC NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::Repository {
            message: format!("Failed to create products table: {}", e),
        })?;

        Ok(())
    }

    fn row_to_product(row: &PgRow) -> Product {
        Product {
            id: ProductId(row.get("id")),
            name: row.get("name"),
            barcode: row.get("barcode"),
            description: row.get("description"),
            rate: row.get("rate"),
        }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn insert(&self, product: NewProduct) -> Result<ProductId> {
        let row = sqlx::query(
            r#"
            INSERT INTO products (name, barcode, description, rate)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&product.name)
        .bind(&product.barcode)
        .bind(&product.description)
        .bind(product.rate)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository {
            message: format!("Failed to insert product: {}", e),
        })?;

        Ok(ProductId(row.get("id")))
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>> {
        let row = sqlx::query(
            "SELECT id, name, barcode, description, rate FROM products WHERE id = $1",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository {
            message: format!("Failed to load product {}: {}", id, e),
        })?;

        Ok(row.as_ref().map(Self::row_to_product))
    }

    async fn list_all(&self) -> Result<Vec<Product>> {
        let rows =
            sqlx::query("SELECT id, name, barcode, description, rate FROM products ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| DomainError::Repository {
                    message: format!("Failed to list products: {}", e),
                })?;

        Ok(rows.iter().map(Self::row_to_product).collect())
    }

    async fn update(&self, product: &Product) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE products
            SET name = $2, barcode = $3, description = $4, rate = $5
            WHERE id = $1
            "#,
        )
        .bind(product.id.as_i64())
        .bind(&product.name)
        .bind(&product.barcode)
        .bind(&product.description)
        .bind(product.rate)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::Repository {
            message: format!("Failed to update product {}: {}", product.id, e),
        })?;

        Ok(())
    }

    async fn remove(&self, id: ProductId) -> Result<()> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository {
                message: format!("Failed to delete product {}: {}", id, e),
            })?;

        Ok(())
    }

    async fn commit(&self) -> Result<()> {
        Ok(())
    }
}
