//! Application state management

use std::sync::Arc;

use crate::config::Config;
use crate::ocr::{Recognizer, TesseractRecognizer};
use crate::raster::{MupdfRasterizer, Rasterizer};

/// Shared application state
///
/// Holds the configuration and the two external capability providers.
/// Production wires the concrete MuPDF/Tesseract providers; tests inject
/// stubs through [`AppState::with_providers`].
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    rasterizer: Arc<dyn Rasterizer>,
    recognizer: Arc<dyn Recognizer>,
}

impl AppState {
    /// Create state with the production providers
    pub fn new(config: Config) -> Self {
        let recognizer = Arc::new(TesseractRecognizer::new(config.ocr.datapath.clone()));
        Self::with_providers(config, Arc::new(MupdfRasterizer), recognizer)
    }

    /// Create state with explicit providers
    pub fn with_providers(
        config: Config,
        rasterizer: Arc<dyn Rasterizer>,
        recognizer: Arc<dyn Recognizer>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                rasterizer,
                recognizer,
            }),
        }
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    pub fn rasterizer(&self) -> &dyn Rasterizer {
        self.inner.rasterizer.as_ref()
    }

    pub fn recognizer(&self) -> &dyn Recognizer {
        self.inner.recognizer.as_ref()
    }
}
