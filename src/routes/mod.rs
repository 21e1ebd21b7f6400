//! Route modules for the OCR API server

pub mod extract;
pub mod health;
pub mod pdf;
pub mod upload;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Assemble all routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::health_check))
        .route("/dependencies", get(health::dependencies))
        .route("/pdf-to-images", post(pdf::pdf_to_images))
        .route("/extract-text", post(extract::extract_text))
        .route("/pdf-to-text", post(pdf::pdf_to_text))
}
