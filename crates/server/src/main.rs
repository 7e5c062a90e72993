//! Product Catalog Server
//!
//! Entry point for the catalog HTTP service.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use catalog_domain::ProductRepository;
use catalog_infrastructure::persistence::{
    DatabaseConfig, InMemoryProductRepository, PostgresProductRepository,
};
use catalog_server::config::ServerConfig;
use catalog_server::http;

/// CLI arguments for catalog-server
#[derive(clap::Parser, Debug)]
#[command(name = "catalog-server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Product catalog HTTP service", long_about = None)]
struct Args {
    /// HTTP server port (overrides configuration)
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable debug mode
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = ServerConfig::load()?;
    setup_logging(args.debug, &config.log_level);

    let repository = build_repository(&config).await?;
    let state = http::build_state(repository)?;

    let port = args.port.unwrap_or(config.port);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    http::start_server(addr, state).await
}

/// Pick the store: PostgreSQL when a database URL is configured, otherwise
/// the in-memory adapter.
async fn build_repository(config: &ServerConfig) -> anyhow::Result<Arc<dyn ProductRepository>> {
    match &config.database_url {
        Some(url) => {
            let database = DatabaseConfig::new(
                url.clone(),
                config.max_connections,
                Duration::from_secs(8),
            );
            let repository = PostgresProductRepository::connect(&database).await?;
            repository.run_migrations().await?;
            info!("Using PostgreSQL product store");
            Ok(Arc::new(repository))
        }
        None => {
            info!("No database configured, using in-memory product store");
            Ok(Arc::new(InMemoryProductRepository::new()))
        }
    }
}

/// Setup logging; the debug flag and configured level seed the filter, the
/// RUST_LOG environment variable wins when present.
fn setup_logging(debug: bool, level: &str) {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    let level = if debug { "debug" } else { level };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}
