// Product Catalog - HTTP surface and startup wiring.
// Exposed as a library so integration tests can assemble the router.

pub mod config;
pub mod http;
