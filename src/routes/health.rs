//! Health and dependency probing endpoints

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

/// Liveness check
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "OCR API",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
pub struct DependenciesResponse {
    dependencies: DependencyStatus,
}

#[derive(Serialize)]
pub struct DependencyStatus {
    mupdf: bool,
    tesseract: bool,
}

/// Report which external capabilities are usable in this environment,
/// so operators can tell a deployment problem from an input problem.
pub async fn dependencies(State(state): State<AppState>) -> Json<DependenciesResponse> {
    Json(DependenciesResponse {
        dependencies: DependencyStatus {
            mupdf: state.rasterizer().is_available().await,
            tesseract: state.recognizer().is_available().await,
        },
    })
}
