// ProductRepository port - the persistence gateway the handlers depend on.

use async_trait::async_trait;

use crate::products::{NewProduct, Product};
use crate::shared_kernel::{ProductId, Result};

/// Persistence gateway for products.
///
/// Adapters decide where the collection lives (memory, SQL); handlers only
/// see this trait. `commit` flushes pending writes; adapters that persist
/// atomically per call implement it as a no-op, and handlers still invoke it
/// after every write so a transactional adapter can be dropped in without
/// touching them.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product and return the store-assigned id.
    async fn insert(&self, product: NewProduct) -> Result<ProductId>;

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>>;

    /// All products, in store-defined order.
    async fn list_all(&self) -> Result<Vec<Product>>;

    /// Replace the stored entity carrying `product.id`.
    async fn update(&self, product: &Product) -> Result<()>;

    async fn remove(&self, id: ProductId) -> Result<()>;

    async fn commit(&self) -> Result<()>;
}
