//! FertiSense - Backend Server
//!
//! Fertilizer recommendation service: serves the crop catalog, polls
//! the field sensors' realtime feed and computes adjusted NPK doses.

use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod routes;
mod services;

pub use config::Config;

use external::sensor_feed::{spawn_poller, SensorFeed, SensorFeedClient};
use services::CatalogService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: CatalogService,
    pub sensors: SensorFeed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fertisense_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load().map_err(|e| error::AppError::Configuration(e.to_string()))?;

    tracing::info!("Starting FertiSense Server");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Crop catalog: {}", config.catalog.path);

    let catalog = CatalogService::new(&config.catalog.path);
    let sensors = SensorFeed::new(config.sensor_feed.stale_after_secs);

    // Start the realtime feed poller
    if config.sensor_feed.enabled {
        tracing::info!("Polling sensor feed at {}", config.sensor_feed.base_url);
        let client = SensorFeedClient::new(
            config.sensor_feed.base_url.clone(),
            config.sensor_feed.readings_path.clone(),
        );
        spawn_poller(
            sensors.clone(),
            client,
            Duration::from_secs(config.sensor_feed.poll_interval_secs),
        );
    } else {
        tracing::info!("Sensor feed polling disabled");
    }

    // Create application state
    let state = AppState {
        config: Arc::new(config.clone()),
        catalog,
        sensors,
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "FertiSense Fertilizer Recommendation API v1.0"
}
