// REST API with Axum
// Translates /api/v1/product calls into request values for the mediator and
// maps results and failures to status codes.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use catalog_application::{
    CreateProduct, CreateProductHandler, DeleteProduct, DeleteProductHandler, DispatchError,
    GetProduct, GetProductHandler, ListProducts, ListProductsHandler, Mediator,
    MediatorConfigError, UpdateProduct, UpdateProductHandler,
};
use catalog_domain::{DomainError, Product, ProductId, ProductRepository};

/// Application state shared by all routes.
#[derive(Clone)]
pub struct AppState {
    pub mediator: Arc<Mediator>,
}

/// Register the five handlers against the given store. Registration happens
/// exactly once, here; a duplicate is a boot failure.
pub fn build_state(
    repository: Arc<dyn ProductRepository>,
) -> Result<AppState, MediatorConfigError> {
    let mediator = Mediator::builder()
        .register::<CreateProduct, _>(CreateProductHandler::new(repository.clone()))
        .register::<ListProducts, _>(ListProductsHandler::new(repository.clone()))
        .register::<GetProduct, _>(GetProductHandler::new(repository.clone()))
        .register::<UpdateProduct, _>(UpdateProductHandler::new(repository.clone()))
        .register::<DeleteProduct, _>(DeleteProductHandler::new(repository))
        .build()?;

    Ok(AppState {
        mediator: Arc::new(mediator),
    })
}

/// API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/product", post(create_product).get(list_products))
        .route(
            "/api/v1/product/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_methods(Any).allow_headers(Any))
}

/// Serve the API until ctrl-c.
pub async fn start_server(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let router = create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to install signal handler: {}", e);
        return;
    }
    info!("Shutting down gracefully...");
}

/// Create and update bodies. `rate` travels as a decimal string so the
/// value survives the wire exactly.
#[derive(Debug, Deserialize)]
pub struct ProductBody {
    pub name: String,
    pub barcode: String,
    pub description: String,
    pub rate: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductBody {
    pub id: i64,
    pub name: String,
    pub barcode: String,
    pub description: String,
    pub rate: Decimal,
}

async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<ProductBody>,
) -> Result<Json<i64>, StatusCode> {
    info!("Creating product: {}", body.name);

    let request = CreateProduct {
        name: body.name,
        barcode: body.barcode,
        description: body.description,
        rate: body.rate,
    };

    match state.mediator.dispatch(request).await {
        Ok(id) => Ok(Json(id.as_i64())),
        Err(error) => Err(into_status("Failed to create product", error)),
    }
}

async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, StatusCode> {
    match state.mediator.dispatch(ListProducts).await {
        Ok(products) => Ok(Json(products)),
        Err(error) => Err(into_status("Failed to list products", error)),
    }
}

async fn get_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Product>, StatusCode> {
    match state
        .mediator
        .dispatch(GetProduct { id: ProductId(id) })
        .await
    {
        Ok(product) => Ok(Json(product)),
        Err(error) => Err(into_status("Failed to get product", error)),
    }
}

async fn update_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(body): Json<UpdateProductBody>,
) -> Result<Json<i64>, StatusCode> {
    // The id reconciliation lives here, not in the handler.
    if body.id != id {
        warn!(
            "Rejecting update: path id {} does not match body id {}",
            id, body.id
        );
        return Err(StatusCode::BAD_REQUEST);
    }

    let request = UpdateProduct {
        id: ProductId(id),
        name: body.name,
        barcode: body.barcode,
        description: body.description,
        rate: body.rate,
    };

    match state.mediator.dispatch(request).await {
        Ok(id) => Ok(Json(id.as_i64())),
        Err(error) => Err(into_status("Failed to update product", error)),
    }
}

async fn delete_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<i64>, StatusCode> {
    match state
        .mediator
        .dispatch(DeleteProduct { id: ProductId(id) })
        .await
    {
        Ok(id) => Ok(Json(id.as_i64())),
        Err(error) => Err(into_status("Failed to delete product", error)),
    }
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// NotFound becomes 404; everything else (infrastructure failures, dispatch
/// configuration defects) is a 500 and logged at error level.
fn into_status(operation: &'static str, error: DispatchError) -> StatusCode {
    match &error {
        DispatchError::Domain(DomainError::ProductNotFound { .. }) => {
            warn!("{}: {}", operation, error);
            StatusCode::NOT_FOUND
        }
        _ => {
            error!("{}: {}", operation, error);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
