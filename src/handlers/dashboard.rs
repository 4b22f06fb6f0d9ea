// src/handlers/dashboard.rs

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::AppError,
    config::AppState,
};

// GET /dashboard
pub async fn get_dashboard(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("Requisição recebida para /dashboard");

    let snapshot = app_state.dashboard_service
        .get_snapshot()
        .await?;

    tracing::info!("Dashboard entregue com sucesso!");
    Ok((StatusCode::OK, Json(snapshot)))
}
