// Mediator - TypeId-keyed dispatch to registered handlers.

use std::any::TypeId;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::error::{DispatchError, MediatorConfigError};
use super::handler::{ErasedHandler, HandlerShim};
use super::{Request, RequestHandler};

/// Builds the handler table once at startup.
///
/// Registering two handlers for the same request type is a configuration
/// error; it is recorded here and surfaced by `build()` so boot fails
/// instead of one registration silently winning.
#[derive(Default)]
pub struct MediatorBuilder {
    handlers: HashMap<TypeId, Box<dyn ErasedHandler>>,
    duplicates: Vec<&'static str>,
}

impl MediatorBuilder {
    pub fn register<R, H>(mut self, handler: H) -> Self
    where
        R: Request,
        H: RequestHandler<R> + 'static,
    {
        match self.handlers.entry(TypeId::of::<R>()) {
            Entry::Occupied(_) => self.duplicates.push(R::NAME),
            Entry::Vacant(slot) => {
                slot.insert(Box::new(HandlerShim::<R, H>::new(handler)));
            }
        }
        self
    }

    pub fn build(self) -> Result<Mediator, MediatorConfigError> {
        if let Some(request_type) = self.duplicates.into_iter().next() {
            return Err(MediatorConfigError::DuplicateHandler { request_type });
        }
        Ok(Mediator {
            handlers: self.handlers,
        })
    }
}

/// Routes a request value to the one handler registered for its concrete
/// type and returns the handler's result unchanged.
///
/// Immutable after construction; dispatches are independent and stateless
/// apart from whatever store the handlers share.
pub struct Mediator {
    handlers: HashMap<TypeId, Box<dyn ErasedHandler>>,
}

impl Mediator {
    pub fn builder() -> MediatorBuilder {
        MediatorBuilder::default()
    }

    pub async fn dispatch<R: Request>(&self, request: R) -> Result<R::Output, DispatchError> {
        let handler =
            self.handlers
                .get(&TypeId::of::<R>())
                .ok_or(DispatchError::HandlerNotFound {
                    request_type: R::NAME,
                })?;

        let output = handler.handle_erased(Box::new(request)).await?;

        output
            .downcast::<R::Output>()
            .map(|output| *output)
            .map_err(|_| DispatchError::TypeMismatch {
                request_type: R::NAME,
            })
    }

    pub fn has_handler<R: Request>(&self) -> bool {
        self.handlers.contains_key(&TypeId::of::<R>())
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use catalog_domain::{DomainError, ProductId};

    #[derive(Debug)]
    struct Echo {
        value: String,
    }

    impl Request for Echo {
        type Output = String;
        const NAME: &'static str = "Echo";
    }

    struct EchoHandler;

    #[async_trait]
    impl RequestHandler<Echo> for EchoHandler {
        async fn handle(&self, request: Echo) -> catalog_domain::Result<String> {
            Ok(request.value)
        }
    }

    #[derive(Debug)]
    struct AlwaysMissing;

    impl Request for AlwaysMissing {
        type Output = ();
        const NAME: &'static str = "AlwaysMissing";
    }

    struct AlwaysMissingHandler;

    #[async_trait]
    impl RequestHandler<AlwaysMissing> for AlwaysMissingHandler {
        async fn handle(&self, _request: AlwaysMissing) -> catalog_domain::Result<()> {
            Err(DomainError::ProductNotFound { id: ProductId(99) })
        }
    }

    #[tokio::test]
    async fn dispatch_routes_to_the_registered_handler() {
        let mediator = Mediator::builder()
            .register::<Echo, _>(EchoHandler)
            .build()
            .unwrap();

        let output = mediator
            .dispatch(Echo {
                value: "hello".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(output, "hello");
    }

    #[tokio::test]
    async fn dispatch_without_registration_is_a_configuration_error() {
        let mediator = Mediator::builder().build().unwrap();
        assert!(mediator.is_empty());

        let result = mediator
            .dispatch(Echo {
                value: "ignored".to_string(),
            })
            .await;
        assert!(matches!(
            result,
            Err(DispatchError::HandlerNotFound {
                request_type: "Echo"
            })
        ));
    }

    #[tokio::test]
    async fn duplicate_registration_fails_at_build_time() {
        let result = Mediator::builder()
            .register::<Echo, _>(EchoHandler)
            .register::<Echo, _>(EchoHandler)
            .build();

        assert!(matches!(
            result,
            Err(MediatorConfigError::DuplicateHandler {
                request_type: "Echo"
            })
        ));
    }

    #[tokio::test]
    async fn handler_errors_pass_through_unchanged() {
        let mediator = Mediator::builder()
            .register::<AlwaysMissing, _>(AlwaysMissingHandler)
            .build()
            .unwrap();

        let result = mediator.dispatch(AlwaysMissing).await;
        assert!(matches!(
            result,
            Err(DispatchError::Domain(DomainError::ProductNotFound {
                id: ProductId(99)
            }))
        ));
    }

    #[tokio::test]
    async fn distinct_request_types_keep_distinct_handlers() {
        let mediator = Mediator::builder()
            .register::<Echo, _>(EchoHandler)
            .register::<AlwaysMissing, _>(AlwaysMissingHandler)
            .build()
            .unwrap();

        assert_eq!(mediator.len(), 2);
        assert!(mediator.has_handler::<Echo>());
        assert!(mediator.has_handler::<AlwaysMissing>());
    }
}
