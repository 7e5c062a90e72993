// Mediator error types

use thiserror::Error;

use catalog_domain::DomainError;

/// Failures surfaced by `Mediator::dispatch`.
///
/// Domain failures pass through unchanged; the remaining variants are
/// configuration defects that should never fire once the mediator was built
/// with the full handler set.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The handler failed; the domain error is propagated untouched.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// No handler registered for the request type.
    #[error("No handler registered for request type: {request_type}")]
    HandlerNotFound { request_type: &'static str },

    /// A handler was registered under the wrong request type, or produced an
    /// output of the wrong type. Unreachable when registration goes through
    /// `MediatorBuilder::register`.
    #[error("Type mismatch dispatching request type: {request_type}")]
    TypeMismatch { request_type: &'static str },
}

/// Startup-time configuration errors from `MediatorBuilder::build`.
#[derive(Debug, Error)]
pub enum MediatorConfigError {
    #[error("Duplicate handler registration for request type: {request_type}")]
    DuplicateHandler { request_type: &'static str },
}
