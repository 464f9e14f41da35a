use anyhow::Context;
use shoplite_api::{app, state::{AdminConfig, AppState}};
use shoplite_catalog::ProductRepository;
use shoplite_order::{OrderManager, OrderRepository};
use shoplite_store::{DbClient, StoreOrderRepository, StoreProductRepository};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shoplite_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = shoplite_store::app_config::Config::load().context("Failed to load config")?;
    tracing::info!("Starting shoplite API on port {}", config.server.port);

    let db = DbClient::new(&config.database.url)
        .await
        .context("Failed to connect to database")?;
    db.migrate().await.context("Failed to migrate database")?;

    let products: Arc<dyn ProductRepository> =
        Arc::new(StoreProductRepository::new(db.pool.clone()));
    let orders: Arc<dyn OrderRepository> = Arc::new(StoreOrderRepository::new(db.pool.clone()));
    let manager = Arc::new(OrderManager::new(products.clone(), orders));

    let state = AppState {
        products,
        orders: manager,
        admin: AdminConfig {
            secret: config.admin.secret.clone(),
        },
        request_timeout: Duration::from_secs(config.server.request_timeout_seconds),
    };

    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
