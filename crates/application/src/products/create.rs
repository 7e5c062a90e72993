// Command: create a product.

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use catalog_domain::{NewProduct, ProductId, ProductRepository};

use crate::mediator::{Request, RequestHandler};

/// Insert a new product; the store assigns the id.
///
/// No validation happens here: absent or empty strings are stored as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub barcode: String,
    pub description: String,
    pub rate: Decimal,
}

impl Request for CreateProduct {
    type Output = ProductId;
    const NAME: &'static str = "CreateProduct";
}

pub struct CreateProductHandler {
    repository: Arc<dyn ProductRepository>,
}

impl CreateProductHandler {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl RequestHandler<CreateProduct> for CreateProductHandler {
    async fn handle(&self, request: CreateProduct) -> catalog_domain::Result<ProductId> {
        let id = self
            .repository
            .insert(NewProduct {
                name: request.name,
                barcode: request.barcode,
                description: request.description,
                rate: request.rate,
            })
            .await?;
        self.repository.commit().await?;

        Ok(id)
    }
}
