pub mod request_id;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{health, pipeline::PipelineController};
use crate::domain::language::LanguageCatalog;
use crate::infrastructure::config::Config;

pub use request_id::{request_id_middleware, X_REQUEST_ID};

/// Build application routes
pub fn build_router(
    catalog: Arc<LanguageCatalog>,
    pipeline_controller: Arc<PipelineController>,
) -> Router {
    let pipeline_routes = Router::new()
        .route("/api/languages", get(PipelineController::list_languages))
        .route("/api/translate", post(PipelineController::translate))
        .with_state(pipeline_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(catalog)
        .merge(pipeline_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    catalog: Arc<LanguageCatalog>,
    pipeline_controller: Arc<PipelineController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(catalog, pipeline_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
