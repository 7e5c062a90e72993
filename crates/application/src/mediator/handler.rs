// Handler traits - typed handler contract plus the type-erased shim the
// dispatcher stores.

use std::any::Any;
use std::marker::PhantomData;

use async_trait::async_trait;

use super::error::DispatchError;
use super::Request;

/// Unit of logic executing exactly one request against the persistence
/// gateway.
#[async_trait]
pub trait RequestHandler<R: Request>: Send + Sync {
    async fn handle(&self, request: R) -> catalog_domain::Result<R::Output>;
}

/// Object-safe shim over a concrete handler.
///
/// Rust does not allow the generic `dispatch` on a `dyn` trait, so the
/// dispatcher stores handlers behind this trait and moves requests and
/// outputs through `Any`.
#[async_trait]
pub(crate) trait ErasedHandler: Send + Sync {
    async fn handle_erased(
        &self,
        request: Box<dyn Any + Send>,
    ) -> Result<Box<dyn Any + Send>, DispatchError>;
}

pub(crate) struct HandlerShim<R, H> {
    handler: H,
    _request: PhantomData<fn(R)>,
}

impl<R, H> HandlerShim<R, H> {
    pub(crate) fn new(handler: H) -> Self {
        Self {
            handler,
            _request: PhantomData,
        }
    }
}

#[async_trait]
impl<R, H> ErasedHandler for HandlerShim<R, H>
where
    R: Request,
    H: RequestHandler<R> + 'static,
{
    async fn handle_erased(
        &self,
        request: Box<dyn Any + Send>,
    ) -> Result<Box<dyn Any + Send>, DispatchError> {
        let request = request
            .downcast::<R>()
            .map_err(|_| DispatchError::TypeMismatch {
                request_type: R::NAME,
            })?;

        let output = self.handler.handle(*request).await?;

        Ok(Box::new(output) as Box<dyn Any + Send>)
    }
}
