//! Configuration management for the OCR API server

use std::env;

/// Full service configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub ocr: OcrConfig,
}

/// HTTP server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upload size cap in bytes, applied via `DefaultBodyLimit`
    pub max_upload_bytes: usize,
}

/// OCR engine settings
#[derive(Debug, Clone)]
pub struct OcrConfig {
    /// Language used when the request does not specify one
    pub default_language: String,
    /// Tesseract data directory; `None` uses the system default
    pub datapath: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
                max_upload_bytes: 50 * 1024 * 1024,
            },
            ocr: OcrConfig {
                default_language: "eng".to_string(),
                datapath: None,
            },
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Config::default();

        Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or(defaults.server.host),
                port: env::var("SERVER_PORT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.server.port),
                max_upload_bytes: env::var("MAX_UPLOAD_MB")
                    .ok()
                    .and_then(|v| v.parse::<usize>().ok())
                    .map(|mb| mb * 1024 * 1024)
                    .unwrap_or(defaults.server.max_upload_bytes),
            },
            ocr: OcrConfig {
                default_language: env::var("OCR_LANGUAGE")
                    .unwrap_or(defaults.ocr.default_language),
                datapath: env::var("TESSDATA_PATH").ok(),
            },
        }
    }
}
