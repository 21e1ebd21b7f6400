//! Error types for the OCR API server
//!
//! Errors fall into four classes with distinct status codes so callers can
//! tell a broken deployment (503) apart from a broken input (400/500):
//! structural validation (missing upload field), domain precondition (wrong
//! file type, bad parameter), dependency unavailable, and processing failure.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::ocr::OcrError;
use crate::raster::RasterError;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    #[error("Failed to read upload: {0}")]
    Upload(String),

    #[error("File must be a PDF")]
    NotAPdf,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Raster(#[from] RasterError),

    #[error(transparent)]
    Ocr(#[from] OcrError),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingField(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Upload(_) => StatusCode::BAD_REQUEST,
            AppError::NotAPdf => StatusCode::BAD_REQUEST,
            AppError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            AppError::Raster(RasterError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Raster(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Ocr(OcrError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Ocr(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            AppError::MissingField(_) => "validation_error",
            AppError::Upload(_) => "validation_error",
            AppError::NotAPdf | AppError::InvalidParameter(_) => "bad_request",
            AppError::Raster(RasterError::Unavailable(_))
            | AppError::Ocr(OcrError::Unavailable(_)) => "dependency_unavailable",
            AppError::Raster(_) | AppError::Ocr(_) => "processing_error",
        }
    }
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Request failed: {}", self);
        }

        let body = ErrorResponse {
            error: self.error_type(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_is_unprocessable_entity() {
        let err = AppError::MissingField("file");
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.error_type(), "validation_error");
    }

    #[test]
    fn wrong_file_type_is_bad_request() {
        let err = AppError::NotAPdf;
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "File must be a PDF");
    }

    #[test]
    fn unavailable_dependencies_map_to_service_unavailable() {
        let raster = AppError::Raster(RasterError::Unavailable("mupdf missing".into()));
        assert_eq!(raster.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        let ocr = AppError::Ocr(OcrError::Unavailable("no language data".into()));
        assert_eq!(ocr.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn processing_failures_carry_the_cause() {
        let err = AppError::Raster(RasterError::Open("corrupt xref table".into()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("corrupt xref table"));
    }
}
