// Product Catalog - Domain Layer
// - shared_kernel: base identifiers and errors shared across layers
// - products: Product entity and its repository port

pub mod products;
pub mod shared_kernel;

pub use products::*;
pub use shared_kernel::*;
