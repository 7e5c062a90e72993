//! Product handlers
//!
//! One request type and one handler per operation. Commands mutate the
//! store, queries only read it; both go through the same mediator.

pub mod create;
pub mod delete;
pub mod queries;
pub mod update;

pub use create::{CreateProduct, CreateProductHandler};
pub use delete::{DeleteProduct, DeleteProductHandler};
pub use queries::{GetProduct, GetProductHandler, ListProducts, ListProductsHandler};
pub use update::{UpdateProduct, UpdateProductHandler};
