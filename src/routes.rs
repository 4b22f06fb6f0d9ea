// src/routes.rs

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{config::AppState, handlers};

pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/dashboard", get(handlers::dashboard::get_dashboard))
        .layer(TraceLayer::new_for_http())
        // Qualquer origem pode consumir o painel
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
