use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::domain::language::LanguageCatalog;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// The catalog is loaded before the listener binds, so serving means ready
pub async fn health_ready(State(catalog): State<Arc<LanguageCatalog>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "languages": catalog.len()
        })),
    )
}
