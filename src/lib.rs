//! OCR API server
//!
//! A stateless REST service exposing PDF rasterization (MuPDF) and text
//! recognition (Tesseract) over three processing endpoints plus health and
//! dependency probes.
//!
//! # Modules
//!
//! - `raster`: PDF → page images behind the `Rasterizer` trait
//! - `ocr`: image → text behind the `Recognizer` trait
//! - `routes`: HTTP handlers and multipart form handling
//! - `state`: shared state with injectable providers

pub mod config;
pub mod error;
pub mod ocr;
pub mod raster;
pub mod routes;
pub mod state;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the complete application router
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes::router()
        .layer(DefaultBodyLimit::max(state.config().server.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
