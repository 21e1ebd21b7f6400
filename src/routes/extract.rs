//! Image text extraction endpoint

use axum::{extract::Multipart, extract::State, Json};
use serde::Serialize;

use crate::error::Result;
use crate::ocr::{OcrError, Recognition, RecognizeOptions, Word};
use crate::state::AppState;

use super::upload;

/// Response for /extract-text
#[derive(Serialize)]
pub struct ExtractTextResponse {
    pub success: bool,
    pub text: String,
    pub language: String,
    pub word_count: usize,
    pub words_with_confidence: Vec<Word>,
    pub average_confidence: f64,
}

/// Run OCR over a single uploaded image
///
/// Multipart fields: `file` (required), `language` (optional), `config`
/// (optional engine option string).
pub async fn extract_text(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ExtractTextResponse>> {
    let mut form = upload::read_form(multipart).await?;
    let file = form.require_file()?;

    let language = form
        .text("language")
        .unwrap_or(&state.config().ocr.default_language)
        .to_string();
    let config = form.text("config").map(str::to_string);

    if !state.recognizer().is_available().await {
        return Err(OcrError::Unavailable(
            "Tesseract is not installed or its language data is missing".to_string(),
        )
        .into());
    }

    tracing::debug!(
        "OCR request for '{}' (language='{}')",
        file.filename,
        language
    );

    let recognition = state
        .recognizer()
        .recognize(
            file.data,
            RecognizeOptions {
                language: language.clone(),
                config,
                word_details: true,
            },
        )
        .await?;

    tracing::info!(
        "OCR completed for '{}': {} words",
        file.filename,
        recognition.text.split_whitespace().count()
    );

    Ok(Json(shape_recognition(recognition, language)))
}

/// Project a raw recognition into the response shape: trimmed text, word
/// count, and word records filtered to confidence strictly greater than
/// zero. The average is over the kept words, or zero when none qualify.
fn shape_recognition(recognition: Recognition, language: String) -> ExtractTextResponse {
    let word_count = recognition.text.split_whitespace().count();

    let words: Vec<Word> = recognition
        .words
        .into_iter()
        .filter(|w| w.confidence > 0.0)
        .collect();

    let average_confidence = if words.is_empty() {
        0.0
    } else {
        words.iter().map(|w| w.confidence as f64).sum::<f64>() / words.len() as f64
    };

    ExtractTextResponse {
        success: true,
        text: recognition.text,
        language,
        word_count,
        words_with_confidence: words,
        average_confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ocr::BoundingBox;

    fn word(text: &str, confidence: f32) -> Word {
        Word {
            text: text.to_string(),
            confidence,
            bbox: BoundingBox {
                left: 0,
                top: 0,
                width: 10,
                height: 10,
            },
        }
    }

    #[test]
    fn zero_confidence_words_are_dropped() {
        let recognition = Recognition {
            text: "hello world".to_string(),
            words: vec![word("hello", 95.0), word("noise", 0.0), word("world", 85.0)],
        };

        let response = shape_recognition(recognition, "eng".to_string());
        assert_eq!(response.words_with_confidence.len(), 2);
        assert!(response
            .words_with_confidence
            .iter()
            .all(|w| w.confidence > 0.0));
        assert_eq!(response.average_confidence, 90.0);
    }

    #[test]
    fn negative_confidence_counts_as_excluded() {
        let recognition = Recognition {
            text: "x".to_string(),
            words: vec![word("x", -1.0)],
        };

        let response = shape_recognition(recognition, "eng".to_string());
        assert!(response.words_with_confidence.is_empty());
        assert_eq!(response.average_confidence, 0.0);
    }

    #[test]
    fn empty_word_list_has_zero_average() {
        let recognition = Recognition {
            text: String::new(),
            words: Vec::new(),
        };

        let response = shape_recognition(recognition, "eng".to_string());
        assert_eq!(response.word_count, 0);
        assert_eq!(response.average_confidence, 0.0);
    }

    #[test]
    fn word_count_is_whitespace_delimited() {
        let recognition = Recognition {
            text: "one  two\nthree".to_string(),
            words: Vec::new(),
        };

        let response = shape_recognition(recognition, "eng".to_string());
        assert_eq!(response.word_count, 3);
    }
}
