//! Skinsage server entrypoint.
//!
//! Loads configuration, connects to PostgreSQL, wires the adapters into the
//! application handlers, and serves the REST API.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use skinsage::adapters::http::{api_router, AdminHandlers, CatalogHandlers, SurveyHandlers};
use skinsage::adapters::postgres::{PostgresProductReader, PostgresProductRepository};
use skinsage::adapters::storage::InMemoryPreferenceStore;
use skinsage::application::handlers::admin::{
    AuthenticateAdminHandler, CreateProductHandler, DeleteProductHandler, ListProductsHandler,
    UpdateProductHandler,
};
use skinsage::application::handlers::catalog::ListRecommendationsHandler;
use skinsage::application::handlers::survey::{
    CompleteSurveyHandler, GetSurveyStateHandler, ResetSurveyHandler,
};
use skinsage::config::AppConfig;
use skinsage::ports::{PreferenceStore, ProductReader, ProductRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .max_lifetime(config.database.max_lifetime())
        .connect(&config.database.url)
        .await?;

    let reader: Arc<dyn ProductReader> = Arc::new(PostgresProductReader::new(pool.clone()));
    let repository: Arc<dyn ProductRepository> =
        Arc::new(PostgresProductRepository::new(pool.clone()));
    let store: Arc<dyn PreferenceStore> = Arc::new(InMemoryPreferenceStore::new());

    let survey = SurveyHandlers::new(
        Arc::new(CompleteSurveyHandler::new(store.clone())),
        Arc::new(GetSurveyStateHandler::new(store.clone())),
        Arc::new(ResetSurveyHandler::new(store.clone())),
    );

    let catalog = CatalogHandlers::new(Arc::new(ListRecommendationsHandler::new(reader.clone())));

    let admin = AdminHandlers::new(
        Arc::new(AuthenticateAdminHandler::new(
            store.clone(),
            config.admin.password.clone(),
        )),
        Arc::new(ListProductsHandler::new(reader.clone(), store.clone())),
        Arc::new(CreateProductHandler::new(
            repository.clone(),
            reader.clone(),
            store.clone(),
        )),
        Arc::new(UpdateProductHandler::new(
            repository.clone(),
            reader.clone(),
            store.clone(),
        )),
        Arc::new(DeleteProductHandler::new(repository, reader, store)),
    );

    let app = api_router(survey, catalog, admin)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config));

    let addr = config.server.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    info!("Server running on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins = config.server.cors_origins_list();
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    // No configured origins means development; allow everything.
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer.allow_origin(parsed)
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
