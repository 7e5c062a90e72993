// In-memory ProductRepository
// Insertion-ordered store for tests and database-less runs.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use catalog_domain::{NewProduct, Product, ProductId, ProductRepository, Result};

/// In-memory product store.
///
/// Products are kept in insertion order, which is also the order `list_all`
/// returns. Ids come from a process-local sequence starting at 1. Writes
/// take effect immediately, so `commit` is a no-op.
#[derive(Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, product: NewProduct) -> Result<ProductId> {
        let id = ProductId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let mut products = self.products.write().await;
        products.push(Product {
            id,
            name: product.name,
            barcode: product.barcode,
            description: product.description,
            rate: product.rate,
        });
        Ok(id)
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.clone())
    }

    async fn update(&self, product: &Product) -> Result<()> {
        let mut products = self.products.write().await;
        if let Some(slot) = products.iter_mut().find(|p| p.id == product.id) {
            *slot = product.clone();
        }
        Ok(())
    }

    async fn remove(&self, id: ProductId) -> Result<()> {
        let mut products = self.products.write().await;
        products.retain(|p| p.id != id);
        Ok(())
    }

    async fn commit(&self) -> Result<()> {
        Ok(())
    }
}
