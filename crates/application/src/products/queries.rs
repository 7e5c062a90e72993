// Queries: list all products, get one by id.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use catalog_domain::{DomainError, Product, ProductId, ProductRepository};

use crate::mediator::{Request, RequestHandler};

/// The full sequence of products, in store-defined order. Unbounded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListProducts;

impl Request for ListProducts {
    type Output = Vec<Product>;
    const NAME: &'static str = "ListProducts";
}

pub struct ListProductsHandler {
    repository: Arc<dyn ProductRepository>,
}

impl ListProductsHandler {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl RequestHandler<ListProducts> for ListProductsHandler {
    async fn handle(&self, _request: ListProducts) -> catalog_domain::Result<Vec<Product>> {
        self.repository.list_all().await
    }
}

/// Single product lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetProduct {
    pub id: ProductId,
}

impl Request for GetProduct {
    type Output = Product;
    const NAME: &'static str = "GetProduct";
}

pub struct GetProductHandler {
    repository: Arc<dyn ProductRepository>,
}

impl GetProductHandler {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl RequestHandler<GetProduct> for GetProductHandler {
    async fn handle(&self, request: GetProduct) -> catalog_domain::Result<Product> {
        self.repository
            .find_by_id(request.id)
            .await?
            .ok_or(DomainError::ProductNotFound { id: request.id })
    }
}
