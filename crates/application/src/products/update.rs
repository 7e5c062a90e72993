// Command: update a product in place.

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use catalog_domain::{DomainError, NewProduct, ProductId, ProductRepository};

use crate::mediator::{Request, RequestHandler};

/// Overwrite all four mutable fields of an existing product.
///
/// No partial update and no diffing. The caller is expected to have already
/// reconciled the id against whatever surface it came from; this handler
/// trusts it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProduct {
    pub id: ProductId,
    pub name: String,
    pub barcode: String,
    pub description: String,
    pub rate: Decimal,
}

impl Request for UpdateProduct {
    type Output = ProductId;
    const NAME: &'static str = "UpdateProduct";
}

pub struct UpdateProductHandler {
    repository: Arc<dyn ProductRepository>,
}

impl UpdateProductHandler {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl RequestHandler<UpdateProduct> for UpdateProductHandler {
    async fn handle(&self, request: UpdateProduct) -> catalog_domain::Result<ProductId> {
        let mut product = self
            .repository
            .find_by_id(request.id)
            .await?
            .ok_or(DomainError::ProductNotFound { id: request.id })?;

        product.overwrite_with(NewProduct {
            name: request.name,
            barcode: request.barcode,
            description: request.description,
            rate: request.rate,
        });

        self.repository.update(&product).await?;
        self.repository.commit().await?;

        Ok(product.id)
    }
}
