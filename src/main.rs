use axum::Router;
use eco_trekker::config::Config;
use eco_trekker::services::estimator::{CarbonEstimator, EmissionFactorTable};
use eco_trekker::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eco_trekker=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting Eco-Trekker server");

    // The factor table is read-only process-wide data: built once here and
    // shared by reference across all request handlers.
    let estimator = CarbonEstimator::new(EmissionFactorTable::default());
    tracing::info!(
        "Emission factor table loaded: {} transport modes",
        estimator.mode_count()
    );

    let state = Arc::new(AppState { estimator });

    // Build router with CORS and tracing
    let app = Router::new()
        .merge(eco_trekker::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
