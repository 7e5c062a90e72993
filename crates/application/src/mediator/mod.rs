// Mediator Module
//
// Routes request values to the single handler registered for their concrete
// type. Registration happens once, at startup, through `MediatorBuilder`;
// after `build()` the handler table is immutable, so dispatch needs no
// locking.

mod dispatcher;
mod error;
mod handler;

pub use dispatcher::{Mediator, MediatorBuilder};
pub use error::{DispatchError, MediatorConfigError};
pub use handler::RequestHandler;

/// A dispatchable request value.
///
/// The concrete type doubles as the routing key; `Output` is what the
/// registered handler produces on success. `NAME` only feeds diagnostics.
pub trait Request: Send + 'static {
    type Output: Send + 'static;

    /// Request type name for error messages and logs.
    const NAME: &'static str;
}
