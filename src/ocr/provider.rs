//! Tesseract recognizer
//!
//! Runs Tesseract through the leptess bindings. Each call creates a fresh
//! engine instance inside `spawn_blocking`, so requests never contend on a
//! shared engine and per-request language/config settings cannot leak.
//!
//! Word-level output comes from component boxes at `RIL_WORD` level: for
//! each detected word box the engine is restricted to that rectangle and
//! queried for text and mean confidence.

use async_trait::async_trait;
use leptess::{LepTess, Variable};

use super::types::{BoundingBox, OcrError, Recognition, RecognizeOptions, Word};
use super::Recognizer;

/// Recognizer backed by a local Tesseract installation
pub struct TesseractRecognizer {
    /// Tesseract data directory; `None` uses TESSDATA_PREFIX / system default
    datapath: Option<String>,
}

impl TesseractRecognizer {
    pub fn new(datapath: Option<String>) -> Self {
        Self { datapath }
    }
}

#[async_trait]
impl Recognizer for TesseractRecognizer {
    async fn is_available(&self) -> bool {
        let datapath = self.datapath.clone();
        tokio::task::spawn_blocking(move || LepTess::new(datapath.as_deref(), "eng").is_ok())
            .await
            .unwrap_or(false)
    }

    async fn recognize(
        &self,
        image: Vec<u8>,
        options: RecognizeOptions,
    ) -> Result<Recognition, OcrError> {
        let datapath = self.datapath.clone();
        tokio::task::spawn_blocking(move || {
            recognize_image(datapath.as_deref(), &image, &options)
        })
        .await
        .map_err(|e| OcrError::Processing(format!("Task join error: {}", e)))?
    }
}

fn recognize_image(
    datapath: Option<&str>,
    image: &[u8],
    options: &RecognizeOptions,
) -> Result<Recognition, OcrError> {
    let mut lt = LepTess::new(datapath, &options.language).map_err(|e| {
        OcrError::Init(format!(
            "language '{}' failed to initialize: {}",
            options.language, e
        ))
    })?;

    if let Some(config) = &options.config {
        for (variable, value) in parse_engine_config(config)? {
            lt.set_variable(variable, &value)
                .map_err(|e| OcrError::Init(format!("Failed to set engine option: {}", e)))?;
        }
    }

    lt.set_image_from_mem(image)
        .map_err(|e| OcrError::Processing(format!("Failed to decode image: {}", e)))?;

    let text = lt
        .get_utf8_text()
        .map_err(|e| OcrError::Processing(format!("Failed to extract text: {}", e)))?
        .trim()
        .to_string();

    let mut words = Vec::new();
    if options.word_details {
        // None means no text was detected at all, which is not an error
        if let Some(boxes) =
            lt.get_component_boxes(leptess::capi::TessPageIteratorLevel_RIL_WORD, true)
        {
            for word_box in &boxes {
                let geometry = word_box.get_geometry();
                lt.set_rectangle(geometry.x, geometry.y, geometry.w, geometry.h);

                let word_text = lt.get_utf8_text().unwrap_or_default().trim().to_string();
                if word_text.is_empty() {
                    continue;
                }

                words.push(Word {
                    text: word_text,
                    confidence: lt.mean_text_conf() as f32,
                    bbox: BoundingBox {
                        left: geometry.x,
                        top: geometry.y,
                        width: geometry.w,
                        height: geometry.h,
                    },
                });
            }
        }
    }

    Ok(Recognition { text, words })
}

/// Parse an engine option string into settable Tesseract variables.
///
/// Supports the common command-line style options: `--psm <mode>` and
/// `-c <name>=<value>` for a small set of known variables. Unknown options
/// are logged and skipped; malformed ones reject the request.
fn parse_engine_config(config: &str) -> Result<Vec<(Variable, String)>, OcrError> {
    let mut variables = Vec::new();
    let mut tokens = config.split_whitespace();

    while let Some(token) = tokens.next() {
        match token {
            "--psm" => {
                let mode = tokens.next().ok_or_else(|| {
                    OcrError::Processing("Engine config: --psm requires a value".to_string())
                })?;
                variables.push((Variable::TesseditPagesegMode, mode.to_string()));
            }
            "-c" => {
                let pair = tokens.next().ok_or_else(|| {
                    OcrError::Processing("Engine config: -c requires name=value".to_string())
                })?;
                let (name, value) = pair.split_once('=').ok_or_else(|| {
                    OcrError::Processing(format!(
                        "Engine config: expected name=value, got '{}'",
                        pair
                    ))
                })?;
                match name {
                    "tessedit_char_whitelist" => {
                        variables.push((Variable::TesseditCharWhitelist, value.to_string()));
                    }
                    "tessedit_char_blacklist" => {
                        variables.push((Variable::TesseditCharBlacklist, value.to_string()));
                    }
                    other => {
                        tracing::warn!("Ignoring unsupported engine variable '{}'", other);
                    }
                }
            }
            other => {
                tracing::warn!("Ignoring unsupported engine option '{}'", other);
            }
        }
    }

    Ok(variables)
}
