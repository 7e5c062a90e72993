// Command: delete a product.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use catalog_domain::{DomainError, ProductId, ProductRepository};

use crate::mediator::{Request, RequestHandler};

/// Remove a product, returning the removed id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteProduct {
    pub id: ProductId,
}

impl Request for DeleteProduct {
    type Output = ProductId;
    const NAME: &'static str = "DeleteProduct";
}

pub struct DeleteProductHandler {
    repository: Arc<dyn ProductRepository>,
}

impl DeleteProductHandler {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl RequestHandler<DeleteProduct> for DeleteProductHandler {
    async fn handle(&self, request: DeleteProduct) -> catalog_domain::Result<ProductId> {
        let product = self
            .repository
            .find_by_id(request.id)
            .await?
            .ok_or(DomainError::ProductNotFound { id: request.id })?;

        self.repository.remove(product.id).await?;
        self.repository.commit().await?;

        Ok(product.id)
    }
}
