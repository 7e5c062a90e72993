//! Products bounded context
//!
//! The catalog's sole entity and the port the handlers read and write it
//! through.

pub mod repository;

pub use repository::ProductRepository;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared_kernel::ProductId;

/// Catalog entry.
///
/// `id` is owned by the store; every other field is overwritten wholesale on
/// update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub barcode: String,
    pub description: String,
    pub rate: Decimal,
}

/// Insert shape: everything but the id, which the store assigns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub barcode: String,
    pub description: String,
    pub rate: Decimal,
}

impl Product {
    /// Overwrite all mutable fields unconditionally. The id is untouched.
    pub fn overwrite_with(&mut self, fields: NewProduct) {
        self.name = fields.name;
        self.barcode = fields.barcode;
        self.description = fields.description;
        self.rate = fields.rate;
    }
}
