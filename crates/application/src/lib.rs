// Product Catalog - Application Layer
// The request mediator and the five product handlers.

pub mod mediator;
pub mod products;

pub use mediator::{
    DispatchError, Mediator, MediatorBuilder, MediatorConfigError, Request, RequestHandler,
};
pub use products::*;
